//! Error types for crossing.
//!
//! Each stage of the put pipeline has its own error enum; [`Error`] wraps
//! them so handlers can propagate with `?` and `main` can decide how to
//! render the failure.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for every crossing operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The upload went through but the report could not be written.
    #[error("err writing report: {0}")]
    Report(#[source] std::io::Error),
}

/// Destination locator could not be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocatorError {
    #[error("invalid S3 URL: {0}")]
    InvalidLocator(String),
}

/// Source file could not be opened or read.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("err opening file: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("err reading file: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Envelope encryption could not be set up or applied.
#[derive(Error, Debug)]
pub enum EncryptionError {
    /// Runtime, session, or credential setup failed.
    #[error("err setting up encryption: {0}")]
    SetupFailed(String),

    /// The key-management service refused to issue a data key.
    #[error("err setting up encryption: kms key {key_id} rejected: {reason}")]
    KeyRejected { key_id: String, reason: String },

    #[error("err encrypting content: {0}")]
    CipherFailed(String),
}

/// The storage backend rejected the write.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("bad response: {0}")]
    Failed(String),
}

impl Error {
    /// Whether this error happened while validating arguments, before any I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Locator(_))
    }

    /// Whether this error means the object was not stored.
    pub fn is_upload_failure(&self) -> bool {
        !matches!(self, Error::Locator(_) | Error::Report(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Destination locator parsing.
//!
//! A locator names a bucket and an optional object key: `bucket`,
//! `bucket/path/to/key`, or the same behind a `scheme://` prefix such as
//! `s3://`.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::{KEY_SEPARATOR, LOCATOR_SCHEME};
use crate::error::LocatorError;

/// A parsed `bucket[/key]` destination.
///
/// The bucket is never empty. The key is kept verbatim, so a trailing
/// separator survives parsing and can mark a key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocator {
    bucket: String,
    key: String,
}

impl StorageLocator {
    /// Parse a raw locator string.
    ///
    /// # Errors
    ///
    /// Returns `LocatorError::InvalidLocator` when the bucket portion is
    /// empty.
    pub fn parse(raw: &str) -> Result<Self, LocatorError> {
        let rest = strip_scheme(raw);

        let (bucket, key) = match rest.split_once(KEY_SEPARATOR) {
            Some((bucket, key)) => (bucket, key),
            None => (rest, ""),
        };

        if bucket.is_empty() {
            return Err(LocatorError::InvalidLocator(raw.to_string()));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key portion, possibly empty or ending in a separator.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Strip a leading `scheme://`, whatever the scheme.
///
/// A `://` that appears after the first separator belongs to the key and
/// is left alone.
fn strip_scheme(raw: &str) -> &str {
    match raw.split_once("://") {
        Some((scheme, rest)) if !scheme.contains(KEY_SEPARATOR) => rest,
        _ => raw,
    }
}

impl FromStr for StorageLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{}://{}", LOCATOR_SCHEME, self.bucket)
        } else {
            write!(f, "{}://{}/{}", LOCATOR_SCHEME, self.bucket, self.key)
        }
    }
}

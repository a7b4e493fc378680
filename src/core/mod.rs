//! Core library components.
//!
//! Locator parsing, object-key resolution, source reading, and the
//! envelope-encrypting upload path. Nothing in here prints; the CLI layer
//! owns stdout and stderr.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod key;
pub mod locator;
pub mod session;
pub mod sniff;
pub mod source;
pub mod storage;
pub mod upload;

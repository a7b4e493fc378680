//! Object storage backends.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

pub mod s3;

pub use s3::S3Store;

/// A single object write.
#[derive(Clone, PartialEq, Eq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
    /// User metadata; the backend adds its own prefix (`x-amz-meta-`).
    pub metadata: HashMap<String, String>,
}

impl fmt::Debug for PutObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutObject")
            .field("bucket", &self.bucket)
            .field("key", &self.key)
            .field("body_len", &self.body.len())
            .field("content_type", &self.content_type)
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Storage backend accepting whole-object writes.
pub trait ObjectStore: fmt::Debug {
    /// Store `object`, returning the version id the backend assigned.
    ///
    /// `None` means the backend reported no version (e.g. the bucket is
    /// not versioned); callers pass it through as-is.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Failed` carrying the backend's message.
    fn put_object(&self, object: PutObject) -> Result<Option<String>>;
}

/// In-memory store for tests. Records every write.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub objects: std::cell::RefCell<Vec<PutObject>>,
    pub version_id: Option<String>,
    pub fail_with: Option<String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn versioned(version_id: &str) -> Self {
        Self {
            version_id: Some(version_id.to_string()),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<PutObject> {
        self.objects.borrow().last().cloned()
    }
}

#[cfg(test)]
impl ObjectStore for MemoryStore {
    fn put_object(&self, object: PutObject) -> Result<Option<String>> {
        if let Some(message) = &self.fail_with {
            return Err(crate::error::UploadError::Failed(message.clone()).into());
        }
        self.objects.borrow_mut().push(object);
        Ok(self.version_id.clone())
    }
}

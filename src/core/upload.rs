//! Encrypting upload.
//!
//! Ties the pieces together: a data key from the [`KeyWrapper`], the body
//! sealed by the [`ContentCipher`], the [`Envelope`] written as object
//! metadata, and one put to the [`ObjectStore`]. Nothing here retries;
//! the first failure ends the upload.

use tracing::{debug, info};

use crate::core::cipher::{AesCbc, ContentCipher, Envelope, KeyWrapper};
use crate::core::key::resolve_key;
use crate::core::locator::StorageLocator;
use crate::core::source::FileContent;
use crate::core::storage::{ObjectStore, PutObject};
use crate::error::Result;

/// A fully resolved upload.
///
/// `object_key` is final: the locator's key combined with the source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub bucket: String,
    pub object_key: String,
    pub kms_key_id: String,
    pub source_path: String,
}

impl UploadRequest {
    pub fn new(locator: &StorageLocator, source_path: &str, kms_key_id: &str) -> Self {
        Self {
            bucket: locator.bucket().to_string(),
            object_key: resolve_key(locator.key(), source_path),
            kms_key_id: kms_key_id.to_string(),
            source_path: source_path.to_string(),
        }
    }
}

/// What the backend reported for a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Backend-assigned version id; `None` if the backend reported none.
    pub version_id: Option<String>,
}

/// Envelope-encrypting front end to an object store.
#[derive(Debug)]
pub struct EncryptionClient<'a> {
    keys: &'a dyn KeyWrapper,
    cipher: &'a dyn ContentCipher,
    store: &'a dyn ObjectStore,
}

impl<'a> EncryptionClient<'a> {
    pub fn new(
        keys: &'a dyn KeyWrapper,
        cipher: &'a dyn ContentCipher,
        store: &'a dyn ObjectStore,
    ) -> Self {
        Self {
            keys,
            cipher,
            store,
        }
    }

    /// Encrypt `content` and store it under the request's bucket and key.
    ///
    /// # Errors
    ///
    /// `EncryptionError` if no data key can be obtained or the body cannot
    /// be sealed; `UploadError` if the store rejects the write.
    pub fn put_object(&self, request: &UploadRequest, content: FileContent) -> Result<UploadResult> {
        let data_key = self.keys.wrap_key(&request.kms_key_id)?;
        let sealed = self.cipher.encrypt(&content.bytes, &data_key)?;
        let envelope = Envelope::new(
            &data_key,
            &sealed,
            self.keys.wrap_alg(),
            self.cipher.cek_alg(),
            content.len(),
        );
        drop(data_key);

        debug!(
            bucket = %request.bucket,
            key = %request.object_key,
            plaintext_len = content.len(),
            ciphertext_len = sealed.ciphertext.len(),
            cek_alg = %envelope.cek_alg,
            "sealed object body"
        );

        let version_id = self.store.put_object(PutObject {
            bucket: request.bucket.clone(),
            key: request.object_key.clone(),
            body: sealed.ciphertext,
            content_type: content.content_type.to_string(),
            metadata: envelope.to_metadata()?,
        })?;

        info!(
            bucket = %request.bucket,
            key = %request.object_key,
            version_id = ?version_id,
            "uploaded encrypted object"
        );
        Ok(UploadResult { version_id })
    }
}

/// Encrypt with AES-256-CBC under a data key from `keys` and upload.
pub fn upload_encrypted(
    keys: &dyn KeyWrapper,
    store: &dyn ObjectStore,
    request: &UploadRequest,
    content: FileContent,
) -> Result<UploadResult> {
    EncryptionClient::new(keys, &AesCbc, store).put_object(request, content)
}

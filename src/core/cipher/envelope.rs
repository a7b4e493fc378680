//! Envelope metadata stored alongside the encrypted object.
//!
//! The layout follows S3 client-side encryption (V1 metadata, "key-v2"
//! header) so objects written here can be decrypted by any client that
//! reads that format.

use std::collections::HashMap;

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;
use serde::{Deserialize, Serialize};

use super::{DataKey, Sealed};
use crate::core::constants::envelope as meta;
use crate::error::{EncryptionError, Result};

/// Material description: the encryption context the data key was
/// generated under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDescription {
    pub kms_cmk_id: String,
}

/// Everything a reader needs to unwrap the data key and decrypt the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub wrapped_key: Vec<u8>,
    pub iv: Vec<u8>,
    pub matdesc: MaterialDescription,
    pub wrap_alg: String,
    pub cek_alg: String,
    pub unencrypted_content_length: usize,
}

impl Envelope {
    /// Describe a sealed body.
    pub fn new(
        key: &DataKey,
        sealed: &Sealed,
        wrap_alg: &str,
        cek_alg: &str,
        plaintext_len: usize,
    ) -> Self {
        Self {
            wrapped_key: key.wrapped.clone(),
            iv: sealed.iv.clone(),
            matdesc: MaterialDescription {
                kms_cmk_id: key.key_id.clone(),
            },
            wrap_alg: wrap_alg.to_string(),
            cek_alg: cek_alg.to_string(),
            unencrypted_content_length: plaintext_len,
        }
    }

    /// Render as object user metadata.
    pub fn to_metadata(&self) -> Result<HashMap<String, String>> {
        let matdesc = serde_json::to_string(&self.matdesc).map_err(|e| {
            EncryptionError::CipherFailed(format!("failed to serialize matdesc: {}", e))
        })?;

        Ok(HashMap::from([
            (meta::KEY_V2.to_string(), STANDARD.encode(&self.wrapped_key)),
            (meta::IV.to_string(), STANDARD.encode(&self.iv)),
            (meta::MATDESC.to_string(), matdesc),
            (meta::WRAP_ALG.to_string(), self.wrap_alg.clone()),
            (meta::CEK_ALG.to_string(), self.cek_alg.clone()),
            (
                meta::UNENCRYPTED_CONTENT_LENGTH.to_string(),
                self.unencrypted_content_length.to_string(),
            ),
        ]))
    }

    /// Read an envelope back from object metadata.
    ///
    /// Keys are matched case-insensitively since S3 may return them in any
    /// case. Returns `None` if a field is missing or malformed.
    #[cfg(test)]
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Option<Self> {
        let get = |name: &str| {
            metadata
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        };

        Some(Self {
            wrapped_key: STANDARD.decode(get(meta::KEY_V2)?).ok()?,
            iv: STANDARD.decode(get(meta::IV)?).ok()?,
            matdesc: serde_json::from_str(get(meta::MATDESC)?).ok()?,
            wrap_alg: get(meta::WRAP_ALG)?.to_string(),
            cek_alg: get(meta::CEK_ALG)?.to_string(),
            unencrypted_content_length: get(meta::UNENCRYPTED_CONTENT_LENGTH)?.parse().ok()?,
        })
    }
}

//! AWS KMS data-key generation.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.),
//! shared config files, or the rest of the default provider chain.

use std::sync::Arc;

use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::types::DataKeySpec;
use tokio::runtime::Runtime;
use tracing::trace;
use zeroize::Zeroizing;

use super::{DataKey, KeyWrapper};
use crate::core::constants::envelope::{KMS_CMK_ID, WRAP_KMS};
use crate::error::{EncryptionError, Result};

/// AWS KMS key generator.
///
/// Each call to [`KeyWrapper::wrap_key`] asks KMS for a new AES-256 data
/// key with encryption context `{"kms_cmk_id": <key id>}`, the same context
/// recorded in the envelope's material description.
#[derive(Debug, Clone)]
pub struct AwsKms {
    client: aws_sdk_kms::Client,
    runtime: Arc<Runtime>,
}

impl AwsKms {
    pub fn new(client: aws_sdk_kms::Client, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }
}

impl KeyWrapper for AwsKms {
    fn wrap_key(&self, key_id: &str) -> Result<DataKey> {
        trace!(key_id = %key_id, "generating data key with AWS KMS");

        let request = self
            .client
            .generate_data_key()
            .key_id(key_id)
            .key_spec(DataKeySpec::Aes256)
            .encryption_context(KMS_CMK_ID, key_id)
            .send();

        let output = self.runtime.block_on(request).map_err(|e| {
            let reason = DisplayErrorContext(&e).to_string();
            if e.as_service_error().is_some() {
                EncryptionError::KeyRejected {
                    key_id: key_id.to_string(),
                    reason,
                }
            } else {
                EncryptionError::SetupFailed(format!("KMS request failed: {}", reason))
            }
        })?;

        let plaintext = output
            .plaintext()
            .ok_or_else(|| EncryptionError::SetupFailed("KMS returned no data key".into()))?;
        let wrapped = output.ciphertext_blob().ok_or_else(|| {
            EncryptionError::SetupFailed("KMS returned no wrapped data key".into())
        })?;

        trace!(wrapped_len = wrapped.as_ref().len(), "generated data key");
        Ok(DataKey {
            plaintext: Zeroizing::new(plaintext.as_ref().to_vec()),
            wrapped: wrapped.as_ref().to_vec(),
            key_id: key_id.to_string(),
        })
    }

    fn wrap_alg(&self) -> &'static str {
        WRAP_KMS
    }
}

/// Deterministic key wrapper for tests.
///
/// Hands out a fixed data key and "wraps" it by prefixing the key id.
/// Rejects key ids starting with `invalid`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct StubKms {
    pub calls: std::cell::Cell<usize>,
}

#[cfg(test)]
impl StubKms {
    pub const DATA_KEY: [u8; 32] = [0x5a; 32];
}

#[cfg(test)]
impl KeyWrapper for StubKms {
    fn wrap_key(&self, key_id: &str) -> Result<DataKey> {
        self.calls.set(self.calls.get() + 1);
        if key_id.is_empty() || key_id.starts_with("invalid") {
            return Err(EncryptionError::KeyRejected {
                key_id: key_id.to_string(),
                reason: "NotFoundException: key does not exist".to_string(),
            }
            .into());
        }
        Ok(DataKey {
            plaintext: Zeroizing::new(Self::DATA_KEY.to_vec()),
            wrapped: format!("stub-wrapped:{}", key_id).into_bytes(),
            key_id: key_id.to_string(),
        })
    }

    fn wrap_alg(&self) -> &'static str {
        WRAP_KMS
    }
}

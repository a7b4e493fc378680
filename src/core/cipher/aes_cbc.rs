//! AES-256-CBC content cipher with PKCS7 padding.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};
use tracing::trace;

use super::{ContentCipher, DataKey, Sealed};
use crate::core::constants::{envelope::CEK_AES_CBC, BLOCK_SIZE};
use crate::error::{EncryptionError, Result};

type Encryptor = cbc::Encryptor<Aes256>;

/// AES-256 in CBC mode, PKCS7-padded to 16-byte blocks.
///
/// Matches the `AES/CBC/PKCS5Padding` content algorithm of S3 client-side
/// encryption, so objects can be read by existing decrypting clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct AesCbc;

impl AesCbc {
    /// Encrypt with a caller-chosen IV.
    pub fn encrypt_with_iv(
        &self,
        data: &[u8],
        key: &DataKey,
        iv: [u8; BLOCK_SIZE],
    ) -> Result<Sealed> {
        let encryptor = Encryptor::new_from_slices(&key.plaintext, &iv).map_err(|e| {
            EncryptionError::CipherFailed(format!(
                "data key must be 32 bytes, got {}: {}",
                key.plaintext.len(),
                e
            ))
        })?;

        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(data);
        trace!(
            plaintext_len = data.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted with AES-256-CBC"
        );

        Ok(Sealed {
            ciphertext,
            iv: iv.to_vec(),
        })
    }
}

impl ContentCipher for AesCbc {
    fn encrypt(&self, data: &[u8], key: &DataKey) -> Result<Sealed> {
        let mut iv = [0u8; BLOCK_SIZE];
        OsRng.fill_bytes(&mut iv);
        self.encrypt_with_iv(data, key, iv)
    }

    fn cek_alg(&self) -> &'static str {
        CEK_AES_CBC
    }
}

//! Envelope encryption.
//!
//! An object body is encrypted with a fresh data key; the data key itself
//! is wrapped by a key-management service. Both halves sit behind narrow
//! traits so the upload path never depends on a particular provider or
//! cipher.
//!
//! ## Pieces
//!
//! - [`KeyWrapper`]: issues a data key wrapped under a master key id
//!   (AWS KMS in [`kms`]).
//! - [`ContentCipher`]: encrypts the body with that data key
//!   (AES-256-CBC in [`aes_cbc`]).
//! - [`Envelope`]: the object metadata a decrypting client needs to unwrap
//!   the key and reverse the cipher.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::Result;

pub mod aes_cbc;
pub mod envelope;
pub mod kms;

pub use aes_cbc::AesCbc;
pub use envelope::Envelope;
pub use kms::AwsKms;

/// A data key as issued by the key-management service.
pub struct DataKey {
    /// Raw key material; zeroed on drop.
    pub plaintext: Zeroizing<Vec<u8>>,
    /// The same key encrypted under the master key. Safe to store.
    pub wrapped: Vec<u8>,
    /// Master key id the data key is wrapped under.
    pub key_id: String,
}

impl fmt::Debug for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataKey")
            .field("plaintext", &"<redacted>")
            .field("wrapped_len", &self.wrapped.len())
            .field("key_id", &self.key_id)
            .finish()
    }
}

/// Ciphertext plus the IV needed to decrypt it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub iv: Vec<u8>,
}

/// Issues data keys wrapped under a managed master key.
pub trait KeyWrapper: fmt::Debug {
    /// Request a fresh data key wrapped under `key_id`.
    ///
    /// # Errors
    ///
    /// Returns `EncryptionError` if the key id is rejected or the service
    /// cannot be reached with the current credentials.
    fn wrap_key(&self, key_id: &str) -> Result<DataKey>;

    /// Wrap algorithm tag recorded in the envelope.
    fn wrap_alg(&self) -> &'static str;
}

/// Encrypts an object body with a data key.
pub trait ContentCipher: fmt::Debug {
    /// Encrypt `data` under `key`, choosing a fresh IV.
    ///
    /// # Errors
    ///
    /// Returns `EncryptionError::CipherFailed` if the key material does not
    /// fit the cipher.
    fn encrypt(&self, data: &[u8], key: &DataKey) -> Result<Sealed>;

    /// Content algorithm tag recorded in the envelope.
    fn cek_alg(&self) -> &'static str;
}

//! Constants used throughout crossing.
//!
//! Centralizes environment variable names and the envelope metadata layout.

/// Environment variable holding the tracing filter (e.g. `crossing=debug`).
pub const LOG_ENV: &str = "CROSSING_LOG";

/// Environment fallback for `--kms-key-id`.
pub const KMS_KEY_ID_ENV: &str = "CROSSING_KMS_KEY_ID";

/// Environment fallback for `--endpoint-url`.
pub const ENDPOINT_URL_ENV: &str = "CROSSING_ENDPOINT_URL";

/// Scheme used when rendering a locator.
pub const LOCATOR_SCHEME: &str = "s3";

/// Separator between bucket and key, and inside object keys.
pub const KEY_SEPARATOR: char = '/';

/// Number of leading bytes considered when sniffing the content type.
pub const SNIFF_LEN: usize = 512;

/// Cipher block size used for PKCS7 padding.
pub const BLOCK_SIZE: usize = 16;

/// Envelope metadata keys, stored by S3 as `x-amz-meta-<key>`.
pub mod envelope {
    pub const KEY_V2: &str = "x-amz-key-v2";
    pub const IV: &str = "x-amz-iv";
    pub const MATDESC: &str = "x-amz-matdesc";
    pub const WRAP_ALG: &str = "x-amz-wrap-alg";
    pub const CEK_ALG: &str = "x-amz-cek-alg";
    pub const UNENCRYPTED_CONTENT_LENGTH: &str = "x-amz-unencrypted-content-length";

    /// Wrap algorithm tag for KMS-wrapped data keys.
    pub const WRAP_KMS: &str = "kms";

    /// Content algorithm tag for AES-CBC with PKCS7 padding.
    pub const CEK_AES_CBC: &str = "AES/CBC/PKCS5Padding";

    /// Encryption-context / material-description field naming the master key.
    pub const KMS_CMK_ID: &str = "kms_cmk_id";
}

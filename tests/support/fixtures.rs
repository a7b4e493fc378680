//! Test fixtures and constants.

/// A KMS key id that is never contacted in offline tests.
pub const TEST_KMS_KEY: &str = "alias/crossing-test";

/// Destination bucket for offline tests.
pub const TEST_BUCKET: &str = "crossing-test-bucket";

/// Minimal PDF header, sniffed as `application/pdf`.
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n1 0 obj\n<< >>\nendobj\n";

/// Plain text body.
pub const TEXT_BYTES: &[u8] = b"quarterly numbers\nall good\n";

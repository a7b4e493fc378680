//! Tests for `crossing put` failure paths that never reach AWS.

use crate::support::*;

#[test]
fn test_missing_source_reports_open_error() {
    let t = Test::new();

    let output = t.put("report.pdf", TEST_BUCKET, TEST_KMS_KEY);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "err uploading file: err opening file");
    assert_stdout_empty(&output);
}

#[test]
fn test_missing_source_with_verbose_output_prints_nothing() {
    let t = Test::new();

    let output = t.put_verbose("report.pdf", TEST_BUCKET, TEST_KMS_KEY);
    assert_failure(&output);
    assert_stdout_empty(&output);
}

#[test]
fn test_directory_source_fails() {
    let t = Test::new();
    std::fs::create_dir(t.dir.path().join("reports")).unwrap();

    let output = t.put("reports", TEST_BUCKET, TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "err uploading file: err");
}

#[test]
fn test_empty_bucket_rejected() {
    let t = Test::new();
    t.write("report.pdf", PDF_BYTES);

    let output = t.put("report.pdf", "/archive/", TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid S3 URL: /archive/");
    assert_stdout_empty(&output);
}

#[test]
fn test_empty_locator_rejected() {
    let t = Test::new();
    t.write("report.pdf", PDF_BYTES);

    let output = t.put("report.pdf", "", TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid S3 URL");
}

#[test]
fn test_foreign_scheme_is_stripped() {
    let t = Test::new();

    // the locator parses, so the failure comes from the missing source
    let output = t.put("missing.txt", "gs://bucket/key", TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "err uploading file: err opening file");
    let err = stderr(&output);
    assert!(!err.contains("invalid S3 URL"), "got: {}", err);
}

#[test]
fn test_foreign_scheme_with_empty_bucket_rejected() {
    let t = Test::new();
    t.write("report.pdf", PDF_BYTES);

    let output = t.put("report.pdf", "gs:///key", TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid S3 URL: gs:///key");
}

#[test]
fn test_locator_checked_before_source() {
    let t = Test::new();

    // neither the locator nor the file is valid; the locator error wins
    let output = t.put("missing.txt", "/", TEST_KMS_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid S3 URL: /");
    let err = stderr(&output);
    assert!(!err.contains("err opening file"), "got: {}", err);
}

#[test]
fn test_no_credentials_is_encryption_setup_failure() {
    let t = Test::new();
    t.write("report.pdf", PDF_BYTES);

    let output = t
        .offline_cmd()
        .args([
            "put",
            "report.pdf",
            TEST_BUCKET,
            "-k",
            TEST_KMS_KEY,
            "--region",
            "us-east-1",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "err uploading file: err setting up encryption");
    assert_stdout_empty(&output);
}

#[test]
fn test_kms_key_from_env() {
    let t = Test::new();

    // file is missing, so getting as far as the open error proves the
    // required flag was satisfied by the environment
    let output = t
        .cmd()
        .env("CROSSING_KMS_KEY_ID", TEST_KMS_KEY)
        .args(["put", "report.pdf", TEST_BUCKET])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "err opening file");
}

//! Tests for usage errors and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_put() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "put");
}

#[test]
fn test_put_help_lists_flags() {
    let t = Test::new();

    let output = t.cmd().args(["put", "--help"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("--kms-key-id"), "got: {}", out);
    assert!(out.contains("--verbose-output"), "got: {}", out);
    assert!(out.contains("SOURCE") && out.contains("S3URL"), "got: {}", out);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "crossing");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("get").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_kms_key_is_usage_error() {
    let t = Test::new();
    t.write("report.pdf", PDF_BYTES);

    let output = t
        .cmd()
        .args(["put", "report.pdf", TEST_BUCKET])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert_stderr_contains(&output, "--kms-key-id");
    assert_stdout_empty(&output);
}

#[test]
fn test_too_few_arguments() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["put", "report.pdf", "-k", TEST_KMS_KEY])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_too_many_arguments() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["put", "a.txt", TEST_BUCKET, "extra", "-k", TEST_KMS_KEY])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_crossing") || out.contains("complete"));
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("complete") && out.contains("crossing"),
        "fish completion should contain fish-specific syntax"
    );
}

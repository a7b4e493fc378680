//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a crossing command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - crossing env fallbacks cleared
    /// - instance metadata lookups disabled, so nothing waits on IMDS
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("crossing").expect("failed to find crossing binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("CROSSING_KMS_KEY_ID");
        cmd.env_remove("CROSSING_ENDPOINT_URL");
        cmd.env_remove("CROSSING_LOG");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `crossing put SOURCE S3URL -k KEY`.
    pub fn put(&self, source: &str, locator: &str, kms_key_id: &str) -> Output {
        self.cmd()
            .args(["put", source, locator, "-k", kms_key_id])
            .output()
            .expect("failed to run crossing put")
    }

    /// Shortcut for `crossing put ... --verbose-output`.
    pub fn put_verbose(&self, source: &str, locator: &str, kms_key_id: &str) -> Output {
        self.cmd()
            .args(["put", source, locator, "-k", kms_key_id, "--verbose-output"])
            .output()
            .expect("failed to run crossing put -V")
    }
}

impl Test {
    /// A command with every ambient AWS credential and region source removed.
    pub fn offline_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        for var in [
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_SESSION_TOKEN",
            "AWS_PROFILE",
            "AWS_DEFAULT_PROFILE",
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "AWS_CONFIG_FILE",
            "AWS_SHARED_CREDENTIALS_FILE",
            "AWS_WEB_IDENTITY_TOKEN_FILE",
            "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
            "AWS_CONTAINER_CREDENTIALS_FULL_URI",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}

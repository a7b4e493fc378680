//! Invocation options.
//!
//! Flag values are copied out of the parsed command line into these
//! immutable structs and passed to the handler by value. There is no
//! process-wide configuration store.

/// Options that shape how the AWS session is established.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsOptions {
    /// Region override; `None` defers to the SDK's region chain.
    pub region: Option<String>,
    /// Named profile from the shared config files.
    pub profile: Option<String>,
    /// S3-compatible endpoint; forces path-style addressing when set.
    pub endpoint_url: Option<String>,
}

/// Everything the `put` command needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOptions {
    /// Local file to encrypt and upload, exactly as typed. Object keys
    /// derived from it use this string verbatim, directory components
    /// included.
    pub source: String,
    /// Raw destination locator (`[s3://]bucket[/key]`).
    pub locator: String,
    /// KMS key id, alias, or ARN used to wrap the data key.
    pub kms_key_id: String,
    /// Emit `{ "VersionId": ... }` on success.
    pub verbose_output: bool,
    pub aws: AwsOptions,
}


//! Command-line interface.

pub mod completions;
pub mod output;
pub mod put;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{AwsOptions, PutOptions};
use crate::core::constants::{ENDPOINT_URL_ENV, KMS_KEY_ID_ENV};

/// Crossing - client-side encrypted uploads to S3.
#[derive(Parser, Debug)]
#[command(
    name = "crossing",
    about = "Encrypt files client-side with AWS KMS and upload them to S3",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

/// AWS session overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct AwsArgs {
    /// AWS region (defaults to the SDK's region chain)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// S3-compatible endpoint URL (uses path-style addressing)
    #[arg(long, global = true, env = ENDPOINT_URL_ENV)]
    pub endpoint_url: Option<String>,
}

impl From<AwsArgs> for AwsOptions {
    fn from(args: AwsArgs) -> Self {
        Self {
            region: args.region,
            profile: args.profile,
            endpoint_url: args.endpoint_url,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a file client-side and upload it to S3
    #[command(
        long_about = "Using client-side encryption (CSE), encrypt and upload a file to S3.\n\n\
                      S3URL is `bucket`, `bucket/key`, or `bucket/prefix/` (an `s3://` \
                      scheme is optional). With no key the source path is used as the \
                      key, verbatim; with a prefix ending in `/` the source path is \
                      appended to it."
    )]
    Put {
        /// File to encrypt and upload
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Destination: bucket[/key] or bucket/prefix/
        #[arg(value_name = "S3URL")]
        locator: String,

        /// KMS CMK ID to use for encryption
        #[arg(short = 'k', long, env = KMS_KEY_ID_ENV)]
        kms_key_id: String,

        /// Output the version id of the uploaded object
        #[arg(short = 'V', long)]
        verbose_output: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, aws: AwsOptions) -> crate::error::Result<()> {
    match command {
        Command::Put {
            source,
            locator,
            kms_key_id,
            verbose_output,
        } => put::execute(PutOptions {
            source,
            locator,
            kms_key_id,
            verbose_output,
            aws,
        }),
        Command::Completions { shell } => completions::execute(shell),
    }
}

//! AWS session setup.
//!
//! The SDK is async; crossing is not. A session owns one current-thread
//! tokio runtime and the resolved SDK config, and hands out blocking
//! clients that share both.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::core::cipher::AwsKms;
use crate::core::config::AwsOptions;
use crate::core::storage::S3Store;
use crate::error::{EncryptionError, Result};

/// Credentials, region, and runtime for one invocation.
#[derive(Debug)]
pub struct Session {
    runtime: Arc<Runtime>,
    config: SdkConfig,
    endpoint_url: Option<String>,
}

impl Session {
    /// Resolve region and credentials through the SDK's default chain,
    /// applying any overrides from `options`.
    ///
    /// Credentials are resolved lazily by the SDK, so a missing or invalid
    /// credential surfaces on the first KMS call rather than here.
    ///
    /// # Errors
    ///
    /// Returns `EncryptionError::SetupFailed` if the runtime cannot start.
    pub fn establish(options: &AwsOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EncryptionError::SetupFailed(format!("failed to create runtime: {}", e)))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        let config = runtime.block_on(loader.load());

        debug!(
            region = ?config.region(),
            profile = ?options.profile,
            endpoint_url = ?options.endpoint_url,
            "aws session established"
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            config,
            endpoint_url: options.endpoint_url.clone(),
        })
    }

    /// KMS key generator bound to this session.
    pub fn kms(&self) -> AwsKms {
        AwsKms::new(aws_sdk_kms::Client::new(&self.config), Arc::clone(&self.runtime))
    }

    /// S3 store bound to this session.
    ///
    /// With a custom endpoint, path-style addressing is forced since most
    /// S3-compatible servers (MinIO and friends) require it.
    pub fn s3(&self) -> S3Store {
        let client = match &self.endpoint_url {
            Some(endpoint) => {
                let config = aws_sdk_s3::config::Builder::from(&self.config)
                    .endpoint_url(endpoint)
                    .force_path_style(true)
                    .build();
                aws_sdk_s3::Client::from_conf(config)
            }
            None => aws_sdk_s3::Client::new(&self.config),
        };
        S3Store::new(client, Arc::clone(&self.runtime))
    }
}

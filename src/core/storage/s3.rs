//! Amazon S3 (and S3-compatible) storage.

use std::sync::Arc;
use std::time::Instant;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::{ObjectStore, PutObject};
use crate::error::{Result, UploadError};

/// S3 object store driven from a blocking caller.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
    runtime: Arc<Runtime>,
}

impl S3Store {
    pub fn new(client: aws_sdk_s3::Client, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }
}

impl ObjectStore for S3Store {
    fn put_object(&self, object: PutObject) -> Result<Option<String>> {
        let PutObject {
            bucket,
            key,
            body,
            content_type,
            metadata,
        } = object;
        let size = body.len();
        let start = Instant::now();

        let request = self
            .client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_length(size as i64)
            .content_type(content_type)
            .set_metadata(Some(metadata))
            .send();

        let output = self.runtime.block_on(request).map_err(|e| {
            let message = DisplayErrorContext(&e).to_string();
            error!(
                error = %message,
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            UploadError::Failed(message)
        })?;

        info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            version_id = ?output.version_id(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(output.version_id().map(str::to_string))
    }
}

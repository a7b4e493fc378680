//! The `put` command.
//!
//! parse locator → resolve key → read source → encrypt and upload → report.
//! The AWS session is only established once the source is in memory, so a
//! bad locator or unreadable file never touches the network.

use std::io::{self, Write};

use tracing::debug;

use crate::cli::output;
use crate::core::cipher::KeyWrapper;
use crate::core::config::PutOptions;
use crate::core::locator::StorageLocator;
use crate::core::session::Session;
use crate::core::source::{self, FileContent};
use crate::core::storage::ObjectStore;
use crate::core::upload::{self, UploadRequest};
use crate::error::Result;

/// Run `crossing put` against AWS.
pub fn execute(options: PutOptions) -> Result<()> {
    let (request, content) = prepare(&options)?;

    let session = Session::establish(&options.aws)?;
    let kms = session.kms();
    let s3 = session.s3();

    let mut stdout = io::stdout().lock();
    finish(&request, content, &kms, &s3, options.verbose_output, &mut stdout)
}

/// Validate the locator, resolve the object key, and read the source.
pub fn prepare(options: &PutOptions) -> Result<(UploadRequest, FileContent)> {
    let locator = StorageLocator::parse(&options.locator)?;
    let request = UploadRequest::new(&locator, &options.source, &options.kms_key_id);
    debug!(
        bucket = %request.bucket,
        key = %request.object_key,
        source = %request.source_path,
        "resolved destination"
    );

    let content = source::read_source(&options.source)?;
    Ok((request, content))
}

/// Upload prepared content and report the result on `out`.
pub fn finish(
    request: &UploadRequest,
    content: FileContent,
    keys: &dyn KeyWrapper,
    store: &dyn ObjectStore,
    verbose_output: bool,
    out: &mut impl Write,
) -> Result<()> {
    let result = upload::upload_encrypted(keys, store, request, content)?;
    output::report(out, &result, verbose_output)
}

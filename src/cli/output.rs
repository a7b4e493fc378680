//! Result reporting.
//!
//! stdout carries at most one line, the JSON version report, so it can be
//! piped. Everything else goes to stderr.

use std::io::Write;

use console::style;

use crate::core::upload::UploadResult;
use crate::error::{Error, Result};

/// Context printed in front of any failure that left the object unstored.
const UPLOAD_CONTEXT: &str = "err uploading file";

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Write the success report for `result`.
///
/// With `verbose` set this is exactly one line, `{ "VersionId": <json> }`,
/// where the id is JSON-encoded (quoted, or `null` when the backend
/// reported none). Without it nothing is written.
pub fn report(out: &mut impl Write, result: &UploadResult, verbose: bool) -> Result<()> {
    if !verbose {
        return Ok(());
    }
    writeln!(out, "{}", version_line(result))
        .and_then(|()| out.flush())
        .map_err(Error::Report)
}

/// Render the `{ "VersionId": ... }` line without a trailing newline.
pub fn version_line(result: &UploadResult) -> String {
    let id = match &result.version_id {
        Some(id) => serde_json::Value::String(id.clone()),
        None => serde_json::Value::Null,
    };
    format!("{{ \"VersionId\": {} }}", id)
}

/// Render the one-line diagnostic for `err`.
pub fn failure_line(err: &Error) -> String {
    if err.is_upload_failure() {
        format!("{}: {}", UPLOAD_CONTEXT, err)
    } else {
        err.to_string()
    }
}

/// Print the diagnostic for `err` to stderr.
///
/// Example: `err uploading file: err opening file: No such file or directory (os error 2)`
pub fn failure(err: &Error) {
    let line = failure_line(err);
    if colors_enabled() {
        eprintln!("{}", style(line).red().for_stderr());
    } else {
        eprintln!("{}", line);
    }
}

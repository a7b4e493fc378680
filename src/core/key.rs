//! Object-key resolution.

use crate::core::constants::KEY_SEPARATOR;

/// Derive the final object key from the locator's key and the source path.
///
/// First match wins:
///
/// 1. Empty key (or a lone `/`): the source path, verbatim. Directory
///    components are kept, so `crossing put ./out/report.pdf bucket` stores
///    `./out/report.pdf`, not `report.pdf`. Existing objects were written
///    this way; don't switch to a basename.
/// 2. Key ending in `/`: the key is a literal prefix and the source path is
///    appended with no separator normalization.
/// 3. Anything else: the key as given; the source path is ignored.
pub fn resolve_key(parsed_key: &str, source_path: &str) -> String {
    if parsed_key.is_empty() || parsed_key.strip_suffix(KEY_SEPARATOR) == Some("") {
        source_path.to_string()
    } else if parsed_key.ends_with(KEY_SEPARATOR) {
        format!("{}{}", parsed_key, source_path)
    } else {
        parsed_key.to_string()
    }
}

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// Maximum size of a single set file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Extension used for stored set files
pub const RECORD_EXTENSION: &str = "json";

// Everything except alphanumerics, '-' and '_' is percent-encoded, so ids can never
// contain path separators or '..' once they become file names
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Encodes a set id into a safe file stem
///
/// # Examples
///
/// ```
/// use brick_tracker::utils::encode_record_id;
///
/// assert_eq!(encode_record_id("10242-1"), "10242-1");
/// assert_eq!(encode_record_id("../etc"), "%2E%2E%2Fetc");
/// ```
pub fn encode_record_id(id: &str) -> String {
    utf8_percent_encode(id, ENCODE_SET).to_string()
}

/// Decodes a file stem produced by [`encode_record_id`] back to the set id
///
/// Returns `None` if the stem does not decode to valid UTF-8.
pub fn decode_record_id(stem: &str) -> Option<String> {
    percent_decode_str(stem).decode_utf8().ok().map(Cow::into_owned)
}

/// File name for a set id: encoded id plus `.json`
pub fn record_file_name(id: &str) -> String {
    format!("{}.{}", encode_record_id(id), RECORD_EXTENSION)
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size checked is the size of the file
/// that is subsequently read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path relative to the home directory as `~/...` for display
pub fn format_path_with_tilde(path: &Path) -> String {
    tilde_relative_to(path, dirs::home_dir().as_deref())
}

// Component-wise, so /home/al never abbreviates /home/alice
fn tilde_relative_to(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

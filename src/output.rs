//! File naming, saving and data-URI encoding of avatars.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;

use crate::avatar::Avatar;
use crate::error::AvatarError;
use crate::params::OutputFormat;

/// Generate an output filename from a label and format.
///
/// Sanitizes the first 50 characters of the label to kebab-case,
/// appends a unix timestamp, and adds the appropriate file extension.
#[must_use]
pub fn auto_filename(label: &str, format: OutputFormat) -> String {
    let sanitized = sanitize_for_filename(label, 50);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{sanitized}-{timestamp}.{}", format.extension())
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "avatar".to_string()
    } else {
        result
    }
}

/// Encode `avatar` and write it to `output_path`.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_avatar(
    avatar: &Avatar,
    format: OutputFormat,
    output_path: &Path,
) -> Result<(), AvatarError> {
    let bytes = avatar.encode(format)?;
    std::fs::write(output_path, bytes).map_err(AvatarError::Io)
}

/// Encode `avatar` as a `data:` URI, ready for an `<img src>`.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn data_uri(avatar: &Avatar, format: OutputFormat) -> Result<String, AvatarError> {
    let bytes = avatar.encode(format)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{encoded}", format.mime_type()))
}

/// Resolve the output path: use explicit path or auto-generate.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, label: &str, format: OutputFormat) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(label, format)),
    }
}

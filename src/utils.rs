use std::path::Path;

use encoding_rs::WINDOWS_1252;
use tracing::warn;

use crate::error::{HeaderCompareError, Result};

pub const ALLOWED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

const UTF8_BOM: &str = "\u{feff}";

pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Decodes raw file content as UTF-8, dropping a leading byte-order mark.
///
/// With `lossy` set, content that is not valid UTF-8 is decoded as
/// Windows-1252 instead of failing.
pub fn decode_text(bytes: Vec<u8>, lossy: bool, path: &Path) -> Result<String> {
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) if lossy => {
            warn!(path = %path.display(), "not valid UTF-8, decoding as Windows-1252");
            let (res, _, _) = WINDOWS_1252.decode(err.as_bytes());
            res.into_owned()
        }
        Err(err) => {
            return Err(HeaderCompareError::MalformedRecord {
                path: path.to_path_buf(),
                reason: err.utf8_error().to_string(),
            })
        }
    };

    match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;

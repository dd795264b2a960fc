//! Common types and utilities for jshl commands.
//!
//! This module provides input loading and the shared types used across all
//! command implementations.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use jslex_lex::unicode::is_whitespace;
use jslex_util::SourceFile;
use tracing::{debug, warn};

use crate::error::{JshlError, Result};

// ============================================================================
// Token Format
// ============================================================================

/// Output formats for the token dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    /// One `line:col  kind  "lexeme"` line per token
    Text,
    /// A JSON array of token records
    Json,
}

impl FromStr for TokenFormat {
    type Err = JshlError;

    /// Parses a format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(JshlError::Validation(format!(
                "unknown token format: {} (expected text or json)",
                other
            ))),
        }
    }
}

// ============================================================================
// Input Loading
// ============================================================================

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Reads a source file, or standard input for `-`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and a warning is
/// logged; the lexer then reports them as unexpected characters.
pub fn read_source(input: &Path) -> Result<SourceFile> {
    let (name, bytes) = if input == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| JshlError::FileOperation(format!("cannot read standard input: {}", e)))?;
        (STDIN_NAME.to_string(), bytes)
    } else {
        let bytes = std::fs::read(input).map_err(|e| {
            JshlError::FileOperation(format!("cannot read {}: {}", input.display(), e))
        })?;
        (input.display().to_string(), bytes)
    };

    debug!(input = %name, bytes = bytes.len(), "loaded source");
    Ok(SourceFile::new(name.clone(), decode_lossy(&name, bytes)))
}

/// Decodes `bytes` as UTF-8, replacing invalid sequences.
pub fn decode_lossy(name: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                input = %name,
                offset = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8; invalid bytes were replaced with U+FFFD"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Returns true if `source` contains no tokens other than whitespace.
pub fn is_blank(source: &str) -> bool {
    source.chars().all(is_whitespace)
}

/// Logs the blank-input warning and returns true if `file` is blank.
pub fn warn_if_blank(file: &SourceFile) -> bool {
    let blank = is_blank(file.content());
    if blank {
        warn!(input = %file.name(), "{}", messages::NO_CODE);
    }
    blank
}

// ============================================================================
// Messages
// ============================================================================

/// Standard message templates.
pub mod messages {
    /// Warning for empty or whitespace-only input.
    pub const NO_CODE: &str = "no JavaScript code to analyze";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_format_from_str() {
        assert_eq!("text".parse::<TokenFormat>().unwrap(), TokenFormat::Text);
        assert_eq!("JSON".parse::<TokenFormat>().unwrap(), TokenFormat::Json);
        assert!("yaml".parse::<TokenFormat>().is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t\r\u{FEFF}"));
        assert!(!is_blank("  x "));
        assert!(!is_blank("//"));
    }

    #[test]
    fn test_decode_lossy_valid() {
        assert_eq!(decode_lossy("a.js", b"let x;".to_vec()), "let x;");
    }

    #[test]
    fn test_decode_lossy_invalid() {
        let text = decode_lossy("a.js", vec![b'a', 0xff, b'b']);
        assert_eq!(text, "a\u{FFFD}b");
    }

    #[test]
    fn test_read_source_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.js");
        std::fs::write(&path, "let a = 1;\n").unwrap();

        let file = read_source(&path).unwrap();
        assert_eq!(file.content(), "let a = 1;\n");
        assert!(file.name().ends_with("a.js"));
        assert!(!warn_if_blank(&file));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("/nonexistent/file.js")).unwrap_err();
        assert!(matches!(err, JshlError::FileOperation(_)));
        assert!(err.to_string().contains("/nonexistent/file.js"));
    }
}

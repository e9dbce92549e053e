//! Error types for dxfpath

use std::io;
use thiserror::Error;

/// Main error type for DXF conversion
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the source
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The tagged-group stream itself is unreadable: a non-numeric group
    /// code, or EOF in the middle of a code/value pair. Fatal for the parse.
    #[error("malformed tag stream at line {line}: {message}")]
    MalformedStream { line: usize, message: String },

    /// A numeric group value failed to parse. Contained to the entity that
    /// was consuming the group; the rest of the drawing is unaffected.
    #[error("malformed numeric value for group {code}: {value:?}")]
    MalformedNumeric { code: i32, value: String },

    /// Error parsing the drawing structure
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for dxfpath operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Parse(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Parse(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_stream_display() {
        let err = DxfError::MalformedStream {
            line: 17,
            message: "invalid group code 'abc'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed tag stream at line 17: invalid group code 'abc'"
        );
    }

    #[test]
    fn test_malformed_numeric_display() {
        let err = DxfError::MalformedNumeric {
            code: 40,
            value: "1.2.3".to_string(),
        };
        assert!(err.to_string().contains("group 40"));
        assert!(err.to_string().contains("1.2.3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}

// qfscript/src/error.rs

//! Error types for the qfscript scanner.

use std::io;
use thiserror::Error;

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors raised while scanning script text.
///
/// Scan failures are fatal: the scanner does not attempt any recovery, so a
/// caller should stop consuming tokens once one of these is returned.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A token was required on the current line but none remains.
    #[error("{origin}:{line}: line is incomplete")]
    IncompleteLine { origin: String, line: usize },

    /// Input ended between an opening quote and its closing quote.
    #[error("{origin}:{line}: EOF inside quoted string")]
    UnterminatedString { origin: String, line: usize },

    /// Diagnostic raised by a caller at the scanner's current location.
    #[error("{origin}:{line}: {message}")]
    Syntax {
        origin: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ScriptError {
    /// Create an incomplete line error.
    pub fn incomplete_line<S: Into<String>>(origin: S, line: usize) -> Self {
        ScriptError::IncompleteLine {
            origin: origin.into(),
            line,
        }
    }

    /// Create an unterminated string error.
    pub fn unterminated_string<S: Into<String>>(origin: S, line: usize) -> Self {
        ScriptError::UnterminatedString {
            origin: origin.into(),
            line,
        }
    }

    /// Create a caller diagnostic error.
    pub fn syntax<S: Into<String>, M: Into<String>>(origin: S, line: usize, message: M) -> Self {
        ScriptError::Syntax {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }

    /// Line the error was detected on, if it came from scanning.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::IncompleteLine { line, .. }
            | ScriptError::UnterminatedString { line, .. }
            | ScriptError::Syntax { line, .. } => Some(*line),
            ScriptError::Io(_) => None,
        }
    }

    /// Origin label of the text being scanned, if any.
    pub fn origin(&self) -> Option<&str> {
        match self {
            ScriptError::IncompleteLine { origin, .. }
            | ScriptError::UnterminatedString { origin, .. }
            | ScriptError::Syntax { origin, .. } => Some(origin),
            ScriptError::Io(_) => None,
        }
    }
}

/// Errors raised by [`ScannerBuilder`](crate::scanner::ScannerBuilder).
#[derive(Error, Debug, PartialEq)]
pub enum ScannerBuilderError {
    #[error("Uninitialized field on ScannerBuilder: {0}")]
    UninitializedFieldError(String),
    #[error("single-character tokens may not include whitespace: {0:?}")]
    WhitespaceSingle(char),
    #[error("single-character tokens may not include the quote character")]
    QuoteSingle,
    #[error("single-character tokens may not include '/', it starts comments")]
    CommentSingle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScriptError::incomplete_line("maps/start.map", 12);
        assert_eq!(err.to_string(), "maps/start.map:12: line is incomplete");

        let err = ScriptError::unterminated_string("e1m1.map", 3);
        assert_eq!(err.to_string(), "e1m1.map:3: EOF inside quoted string");

        let err = ScriptError::syntax("e1m1.map", 7, "expected '{'");
        assert_eq!(err.to_string(), "e1m1.map:7: expected '{'");
    }

    #[test]
    fn test_error_coordinates() {
        let err = ScriptError::unterminated_string("e1m1.map", 3);
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.origin(), Some("e1m1.map"));

        let err = ScriptError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.line(), None);
        assert_eq!(err.origin(), None);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_builder_error_display() {
        let err = ScannerBuilderError::UninitializedFieldError("text".to_string());
        assert_eq!(err.to_string(), "Uninitialized field on ScannerBuilder: text");
        assert!(ScannerBuilderError::WhitespaceSingle('\t')
            .to_string()
            .contains("'\\t'"));
    }
}

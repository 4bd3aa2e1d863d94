// qfscript/src/scanner/mod.rs

//! Token scanner for line-oriented map and script text.
//!
//! Callers drive the scanner one token at a time:
//! - [`Scanner::token_available`] peeks for a token, optionally across lines
//! - [`Scanner::get_token`] reads the next token
//! - [`Scanner::unget_token`] pushes the last token back for one re-read

pub mod builder;
pub mod scanner;
pub mod tokens;

pub use builder::ScannerBuilder;
pub use scanner::{Scanner, DEFAULT_SINGLES};
pub use tokens::Tokens;

use crate::error::Result;

/// Convenience function to scan a whole text into tokens, crossing lines.
pub fn scan<S: Into<String>>(origin: S, text: &str) -> Result<Vec<String>> {
    let mut scanner = Scanner::new(origin, text);
    let tokens = scanner.tokens().collect::<Result<Vec<_>>>()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_brush() -> Result<()> {
        let input = "{\n( 0 0 0 ) ( 64 0 0 ) ( 0 64 0 ) base/floor 0 0 0 1 1\n}";
        let tokens = scan("brush.map", input)?;
        assert_eq!(tokens.len(), 23);
        assert_eq!(tokens[1], "(");
        assert_eq!(tokens[16], "base/floor");
        assert_eq!(tokens.last().map(String::as_str), Some("}"));
        Ok(())
    }

    #[test]
    fn test_scan_reports_origin() {
        let err = scan("bad.map", "{ \"open").unwrap_err();
        assert_eq!(err.to_string(), "bad.map:1: EOF inside quoted string");
    }
}

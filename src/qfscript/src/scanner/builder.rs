// qfscript/src/scanner/builder.rs

use super::scanner::{is_space, Scanner, DEFAULT_SINGLES};
use crate::error::ScannerBuilderError;

const DEFAULT_ORIGIN: &str = "<input>";

/// Validating builder for [`Scanner`].
///
/// ```
/// use qfscript::scanner::ScannerBuilder;
///
/// let mut scanner = ScannerBuilder::default()
///     .origin("maps/start.map")
///     .text("key=value")
///     .singles("=")
///     .build()
///     .unwrap();
/// assert_eq!(scanner.get_token(true).unwrap().as_deref(), Some("key"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScannerBuilder {
    origin: Option<String>,
    text: Option<String>,
    singles: Option<String>,
}

impl ScannerBuilder {
    /// Validate the options and create the scanner.
    pub fn build(&self) -> Result<Scanner, ScannerBuilderError> {
        let text = self
            .text
            .as_deref()
            .ok_or_else(|| ScannerBuilderError::UninitializedFieldError("text".to_string()))?;
        let origin = self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
        let singles = self.singles.as_deref().unwrap_or(DEFAULT_SINGLES);
        Self::validate(singles)?;
        Ok(Scanner::with_singles(origin, text, singles))
    }
    /// Label used in diagnostics, `<input>` when unset.
    pub fn origin<S: Into<String>>(&mut self, origin: S) -> &mut Self {
        self.origin = Some(origin.into());
        self
    }
    /// Text to scan. Required.
    pub fn text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.text = Some(text.into());
        self
    }
    /// Single-character tokens, [`DEFAULT_SINGLES`] when unset.
    pub fn singles<S: Into<String>>(&mut self, singles: S) -> &mut Self {
        self.singles = Some(singles.into());
        self
    }
    fn validate(singles: &str) -> Result<(), ScannerBuilderError> {
        for c in singles.chars() {
            if is_space(c) {
                return Err(ScannerBuilderError::WhitespaceSingle(c));
            }
            if c == '"' {
                return Err(ScannerBuilderError::QuoteSingle);
            }
            if c == '/' {
                return Err(ScannerBuilderError::CommentSingle);
            }
        }
        Ok(())
    }
}

impl Scanner {
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let scanner = Scanner::builder().text("a b").build().unwrap();
        assert_eq!(scanner.origin(), "<input>");
        assert_eq!(scanner.singles().iter().collect::<String>(), DEFAULT_SINGLES);
        assert_eq!(scanner.line(), 1);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_build_requires_text() {
        let err = Scanner::builder().origin("x.map").build().unwrap_err();
        assert_eq!(
            err,
            ScannerBuilderError::UninitializedFieldError("text".to_string())
        );
    }

    #[test]
    fn test_build_rejects_bad_singles() {
        let mut builder = Scanner::builder();
        builder.text("");

        builder.singles("{ }");
        assert_eq!(
            builder.build().unwrap_err(),
            ScannerBuilderError::WhitespaceSingle(' ')
        );

        builder.singles("\"");
        assert_eq!(builder.build().unwrap_err(), ScannerBuilderError::QuoteSingle);

        builder.singles("{\x1f}");
        assert_eq!(
            builder.build().unwrap_err(),
            ScannerBuilderError::WhitespaceSingle('\x1f')
        );

        builder.singles("{/}");
        assert_eq!(builder.build().unwrap_err(), ScannerBuilderError::CommentSingle);
    }

    #[test]
    fn test_build_empty_singles() {
        let mut scanner = Scanner::builder()
            .text("{a}(b)")
            .singles("")
            .build()
            .unwrap();
        assert_eq!(scanner.get_token(true).unwrap().as_deref(), Some("{a}(b)"));
    }
}

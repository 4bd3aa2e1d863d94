// qfscript/src/scanner/tokens.rs

//! Iterator adapter over a scanner's remaining tokens.

use super::scanner::Scanner;
use crate::error::Result;
use std::iter::FusedIterator;

/// Iterator returned by [`Scanner::tokens`].
///
/// Reads with line crossing enabled. Stops at the end of the input, or after
/// yielding the first error.
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(scanner: &'a mut Scanner) -> Self {
        Self {
            scanner,
            done: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.get_token(true) {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScriptError;

    #[test]
    fn test_tokens_collect() -> Result<()> {
        let mut scanner = Scanner::new("test", "{\n\"classname\" \"worldspawn\"\n}\n");
        let tokens = scanner.tokens().collect::<Result<Vec<_>>>()?;
        assert_eq!(tokens, vec!["{", "classname", "worldspawn", "}"]);
        assert_eq!(scanner.line(), 4);
        Ok(())
    }

    #[test]
    fn test_tokens_stop_after_error() {
        let mut scanner = Scanner::new("test", "a \"b");
        let mut tokens = scanner.tokens();
        assert_eq!(tokens.next().unwrap().unwrap(), "a");
        assert!(matches!(
            tokens.next(),
            Some(Err(ScriptError::UnterminatedString { .. }))
        ));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_tokens_resume_after_pushback() -> Result<()> {
        let mut scanner = Scanner::new("test", "key value");
        scanner.get_token(true)?;
        scanner.unget_token();
        let tokens = scanner.tokens().collect::<Result<Vec<_>>>()?;
        assert_eq!(tokens, vec!["key", "value"]);
        Ok(())
    }
}

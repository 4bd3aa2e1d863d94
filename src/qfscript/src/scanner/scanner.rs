// qfscript/src/scanner/scanner.rs

//! Core scanner: a cursor over an immutable text buffer with one token of
//! pushback.

use super::tokens::Tokens;
use crate::error::{Result, ScriptError};
use log::{debug, trace, warn};

/// Characters that always form a token of their own unless set otherwise.
pub const DEFAULT_SINGLES: &str = "{}()':";

/// Control characters historically used to mark end of file. They are
/// skipped wherever they appear, not only at the end of the text.
const EOF_MARKERS: [char; 2] = ['\x1a', '\x04'];

/// Whitespace as map text has always been split on: Unicode whitespace plus
/// the file, group, record and unit separators (U+001C..=U+001F).
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Token scanner for line-oriented map and script text.
///
/// The scanner does not classify tokens. A token is one of:
/// - the contents of a `"quoted string"`, quotes stripped, newlines allowed
/// - a single character from the configured singles set
/// - a maximal run of characters that are neither whitespace nor singles
///
/// Whitespace, `//` line comments and EOF marker characters separate tokens
/// and are never returned.
#[derive(Debug, Clone)]
pub struct Scanner {
    origin: String,
    input: Vec<char>,
    singles: Vec<char>,
    current: usize,
    line: usize,
    token: Option<String>,
    pushed_back: bool,
}

impl Scanner {
    /// Create a scanner using [`DEFAULT_SINGLES`].
    pub fn new<S: Into<String>>(origin: S, text: &str) -> Self {
        Self::with_singles(origin, text, DEFAULT_SINGLES)
    }

    /// Create a scanner with a custom set of single-character tokens.
    ///
    /// The set is taken as given. Use [`ScannerBuilder`](super::ScannerBuilder)
    /// to have it validated.
    pub fn with_singles<S: Into<String>>(origin: S, text: &str, singles: &str) -> Self {
        let origin = origin.into();
        let input: Vec<char> = text.chars().collect();
        debug!(
            "{}: scanning {} characters, singles {:?}",
            origin,
            input.len(),
            singles
        );
        Self {
            origin,
            input,
            singles: singles.chars().collect(),
            current: 0,
            line: 1,
            token: None,
            pushed_back: false,
        }
    }

    /// Label of the text, used in diagnostics.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Current line, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current scan position, in characters from the start of the text.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Characters that form one-character tokens.
    pub fn singles(&self) -> &[char] {
        &self.singles
    }

    /// Whether a pushed back token is waiting to be read again.
    pub fn has_pending(&self) -> bool {
        self.pushed_back
    }

    /// True once every character has been consumed and nothing is pushed back.
    pub fn is_at_end(&self) -> bool {
        !self.pushed_back && self.at_end_of_input()
    }

    /// Check whether another token can be read.
    ///
    /// Skips whitespace, comments and EOF markers on the way, so the position
    /// moves even when this returns `false`. Without `cross_line` the scan
    /// stops at the next newline, which is left unconsumed.
    pub fn token_available(&mut self, cross_line: bool) -> bool {
        if self.pushed_back {
            return true;
        }
        while !self.at_end_of_input() {
            while let Some(c) = self.peek() {
                if !is_space(c) {
                    break;
                }
                if c == '\n' {
                    if !cross_line {
                        return false;
                    }
                    self.line += 1;
                }
                self.current += 1;
            }

            let c = match self.peek() {
                Some(c) => c,
                None => return false,
            };

            if EOF_MARKERS.contains(&c) {
                self.current += 1;
                continue;
            }

            if self.at_comment() {
                while self.peek().map_or(false, |c| c != '\n') {
                    self.current += 1;
                }
                if self.at_end_of_input() || !cross_line {
                    return false;
                }
                continue;
            }

            return true;
        }
        false
    }

    /// Read the next token.
    ///
    /// Returns `Ok(None)` when `cross_line` is set and the input holds no
    /// more tokens. Without `cross_line` a token is required on the current
    /// line and its absence is an [`ScriptError::IncompleteLine`] error.
    pub fn get_token(&mut self, cross_line: bool) -> Result<Option<String>> {
        if self.pushed_back {
            self.pushed_back = false;
            trace!("{}:{}: re-reading {:?}", self.origin, self.line, self.token);
            return Ok(self.token.clone());
        }

        // a failed read leaves nothing to push back
        self.token = None;
        if !self.token_available(cross_line) {
            if !cross_line {
                return Err(ScriptError::incomplete_line(&self.origin, self.line));
            }
            return Ok(None);
        }

        let token = if self.input[self.current] == '"' {
            self.read_quoted()?
        } else {
            self.read_bare()
        };

        trace!("{}:{}: token {:?}", self.origin, self.line, token);
        self.token = Some(token.clone());
        Ok(Some(token))
    }

    /// Push the last token back so the next read returns it again.
    ///
    /// Only one token can be pushed back. Pushing back when no token has been
    /// read, or after a read that found none, does nothing.
    pub fn unget_token(&mut self) {
        match self.token {
            Some(ref token) => {
                trace!("{}:{}: pushing back {:?}", self.origin, self.line, token);
                self.pushed_back = true;
            }
            None => warn!(
                "{}:{}: no token to push back",
                self.origin, self.line
            ),
        }
    }

    /// Build a diagnostic located at the current line.
    pub fn error<M: Into<String>>(&self, message: M) -> ScriptError {
        ScriptError::syntax(&self.origin, self.line, message)
    }

    /// Iterate over the remaining tokens, crossing lines.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens::new(self)
    }

    fn read_quoted(&mut self) -> Result<String> {
        // opening quote
        self.current += 1;
        let start = self.current;
        loop {
            match self.peek() {
                None => return Err(ScriptError::unterminated_string(&self.origin, self.line)),
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
            }
            self.current += 1;
        }
        let token = self.input[start..self.current].iter().collect();
        // closing quote
        self.current += 1;
        Ok(token)
    }

    fn read_bare(&mut self) -> String {
        let start = self.current;
        if self.is_single(self.input[start]) {
            self.current += 1;
        } else {
            while let Some(c) = self.peek() {
                if is_space(c) || self.is_single(c) {
                    break;
                }
                self.current += 1;
            }
        }
        self.input[start..self.current].iter().collect()
    }

    fn is_single(&self, c: char) -> bool {
        self.singles.contains(&c)
    }

    fn at_comment(&self) -> bool {
        self.peek() == Some('/') && self.peek_ahead(1) == Some('/')
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek_ahead(&self, distance: usize) -> Option<char> {
        self.input.get(self.current + distance).copied()
    }

    fn at_end_of_input(&self) -> bool {
        self.current >= self.input.len()
    }
}

// qfscript/src/lib.rs

//! A scanner for QuakeForge-style map and script text.
//!
//! The scanner splits text into string tokens and tracks line numbers for
//! diagnostics. It knows about:
//! - whitespace and `//` line comments, which separate tokens
//! - `"quoted strings"`, returned without their quotes
//! - a configurable set of single-character tokens, `{}()':` by default
//!
//! Grammar is left to the caller, which reads tokens one at a time and may
//! push one back.
//!
//! # Examples
//!
//! ```
//! fn main() -> qfscript::Result<()> {
//!     let mut scanner = qfscript::Scanner::new("start.map", "{\n\"classname\" \"worldspawn\"\n}");
//!     assert_eq!(scanner.get_token(true)?.as_deref(), Some("{"));
//!     let key = scanner.get_token(true)?;
//!     let value = scanner.get_token(false)?;
//!     assert_eq!(key.as_deref(), Some("classname"));
//!     assert_eq!(value.as_deref(), Some("worldspawn"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod scanner;

use std::path::Path;

pub use error::{Result, ScannerBuilderError, ScriptError};
pub use scanner::{scan, Scanner, ScannerBuilder, Tokens, DEFAULT_SINGLES};

/// Load a file and return a scanner over its contents.
///
/// The scanner's origin is the path as given.
///
/// ```no_run
/// fn main() -> qfscript::Result<()> {
///     let mut scanner = qfscript::read("maps/start.map")?;
///     while let Some(token) = scanner.get_token(true)? {
///         println!("{}: {}", scanner.line(), token);
///     }
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Scanner> {
    let path = path.as_ref();
    let text = fs_err::read_to_string(path)?;
    Ok(Scanner::new(path.display().to_string(), &text))
}

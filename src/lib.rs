//! Lexical scanner for a small configuration/scripting notation.
//!
//! The scanner walks a borrowed input and hands out one typed token per
//! call, tracking line and column for diagnostics. Tokens borrow their
//! text from the input, so no lexeme is copied.
//!
//! # Quick start
//!
//! ```
//! use confscan::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 10;").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use confscan::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("#var:struct Point { int x; }");
//! let first = scanner.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::ConfigDirective);
//! assert_eq!(first.text, "#var");
//! ```
//!
//! Malformed characters come back as [`TokenKind::Unknown`] tokens and
//! scanning carries on. The only fatal condition is a string literal
//! that is never closed:
//!
//! ```
//! use confscan::{tokenize, ScanErrorKind};
//!
//! let err = tokenize("name \"unclosed").unwrap_err();
//! assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
//! assert_eq!(err.to_string(), "unterminated string literal at line 1, column 6");
//! ```

#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod keywords;
pub mod scanner;
pub mod token;

pub use keywords::{DEFAULT_KEYWORDS, KeywordSet};
pub use scanner::{ScanError, ScanErrorKind, Scanner, tokenize};
pub use token::{Span, Token, TokenKind};

use std::fmt;
use std::iter::FusedIterator;

use crate::keywords::KeywordSet;
use crate::token::{Span, Token, TokenKind};

const BOM: char = '\u{FEFF}';
const LINE_DIRECTIVE: &str = "#!";
const VAR_SENTINEL: &str = "#var";

/// Classifies a scan error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Input ended before the closing `"` of a string literal.
    UnterminatedString,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
        }
    }
}

/// Fatal error that stops scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// Position of the lexeme that could not be finished.
    pub span: Span,
}

/// Scan a whole input into tokens, ending with a single
/// [`TokenKind::EndOfInput`].
///
/// # Errors
///
/// Returns `ScanError` when a string literal is never closed.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ScanError> {
    Scanner::new(input).collect()
}

/// Cursor over a borrowed input that hands out one token per call.
///
/// The scanner keeps no state besides position bookkeeping, so every call to
/// [`Scanner::next_token`] decides what to do from the character under
/// the cursor. Iterating a scanner yields every token up to and
/// including `EndOfInput`, or up to and including the first error.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// Byte offset where the current line starts.
    line_start: usize,
    /// Byte offset just past the most recent token.
    last_end: usize,
    line: usize,
    col: usize,
    keywords: KeywordSet,
    done: bool,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_keywords(input, KeywordSet::default())
    }

    #[must_use]
    pub fn with_keywords(input: &'a str, keywords: KeywordSet) -> Self {
        let origin = if input.starts_with(BOM) {
            BOM.len_utf8()
        } else {
            0
        };
        Self {
            input,
            pos: origin,
            line_start: origin,
            last_end: origin,
            line: 1,
            col: 1,
            keywords,
            done: false,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    /// Skip whitespace and scan exactly one token.
    ///
    /// Once the input is exhausted every call returns `EndOfInput`.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` when a string literal is never closed. The
    /// cursor is then left at the end of the input.
    pub fn next_token(&mut self) -> Result<Token<'a>, ScanError> {
        self.skip_whitespace();
        let span = self.span();

        let Some(ch) = self.peek() else {
            return Ok(self.token(TokenKind::EndOfInput, span));
        };

        let input = self.input;
        let rest = &input[self.pos..];
        let token = if rest.starts_with(LINE_DIRECTIVE) && self.at_line_start() {
            self.read_line_directive(span)
        } else if rest.starts_with(VAR_SENTINEL) {
            for _ in 0..VAR_SENTINEL.len() {
                self.advance();
            }
            self.token(TokenKind::ConfigDirective, span)
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            self.read_word(span)
        } else if ch.is_ascii_digit() {
            self.advance_while(|c| c.is_ascii_digit());
            self.token(TokenKind::Number, span)
        } else if ch == '"' {
            self.read_string(span)?
        } else {
            self.read_symbol(ch, span)
        };

        tracing::trace!(
            kind = %token.kind,
            text = token.text,
            line = span.line,
            column = span.column,
            "scanned token"
        );
        self.last_end = self.pos;
        Ok(token)
    }

    fn token(&self, kind: TokenKind, span: Span) -> Token<'a> {
        Token {
            kind,
            text: &self.input[span.offset..self.pos],
            span,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
                self.line_start = self.pos;
            } else {
                self.col += 1;
            }
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(is_blank);
    }

    /// True when no token has ended on the current line yet.
    const fn at_line_start(&self) -> bool {
        self.last_end <= self.line_start
    }

    fn read_line_directive(&mut self, span: Span) -> Token<'a> {
        self.advance_while(|c| c != '\n');
        let mut token = self.token(TokenKind::ConfigDirective, span);
        token.text = token.text.strip_suffix('\r').unwrap_or(token.text);
        token
    }

    fn read_word(&mut self, span: Span) -> Token<'a> {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let mut token = self.token(TokenKind::Identifier, span);
        if self.keywords.contains(token.text) {
            token.kind = TokenKind::Keyword;
        }
        token
    }

    fn read_string(&mut self, span: Span) -> Result<Token<'a>, ScanError> {
        self.advance(); // skip opening quote
        let start = self.pos;
        self.advance_while(|c| c != '"');

        if self.peek().is_none() {
            tracing::debug!(
                line = span.line,
                column = span.column,
                "string literal runs to end of input"
            );
            return Err(ScanError {
                kind: ScanErrorKind::UnterminatedString,
                span,
            });
        }

        let text = &self.input[start..self.pos];
        self.advance(); // skip closing quote
        Ok(Token {
            kind: TokenKind::String,
            text,
            span,
        })
    }

    fn read_symbol(&mut self, ch: char, span: Span) -> Token<'a> {
        let kind = match ch {
            '+' | '-' | '*' | '/' => TokenKind::Operator,
            '=' if self.input[self.pos..].starts_with("==") => {
                self.advance();
                TokenKind::Equals
            }
            '=' => TokenKind::Assign,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::BraceOpen,
            '}' => TokenKind::BraceClose,
            _ => {
                tracing::debug!(
                    character = %ch,
                    line = span.line,
                    column = span.column,
                    "invalid character"
                );
                TokenKind::Unknown
            }
        };
        self.advance();
        self.token(kind, span)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = !result.as_ref().is_ok_and(|t| !t.is_eof());
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}

const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

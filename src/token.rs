use std::fmt;

/// Source location of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset into the input.
    pub offset: usize,
    pub line: usize,
    /// 1-based, counted in characters.
    pub column: usize,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letter or underscore, then letters, digits and underscores.
    Identifier,
    /// Run of ASCII digits, leading zeros kept.
    Number,
    /// Double-quoted string; the text excludes the quotes.
    String,
    /// One of `+ - * /`.
    Operator,
    /// Single `=`.
    Assign,
    /// Compound `==`.
    Equals,
    Semicolon,
    Colon,
    LParen,
    RParen,
    BraceOpen,
    BraceClose,
    /// Identifier spelled exactly like an entry of the keyword set.
    Keyword,
    /// `#var` sentinel or a `#!` line directive.
    ConfigDirective,
    /// Character that cannot start any token.
    Unknown,
    EndOfInput,
}

impl TokenKind {
    /// Upper-case name used when printing tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Operator => "OPERATOR",
            Self::Assign => "ASSIGN",
            Self::Equals => "EQUALS",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::BraceOpen => "BRACE_OPEN",
            Self::BraceClose => "BRACE_CLOSE",
            Self::Keyword => "KEYWORD",
            Self::ConfigDirective => "CONFIG_DIRECTIVE",
            Self::Unknown => "UNKNOWN",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token: its kind, the lexeme borrowed from the input, and
/// where the lexeme starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl Token<'_> {
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// Diagnostic message for an `Unknown` token, `None` for every
    /// other kind.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self.kind {
            TokenKind::Unknown => Some(format!("invalid character '{}'", self.text)),
            _ => None,
        }
    }
}

/// Prints `Token: KIND, Text: '...', Line: n, Column: m`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: {}, Text: '{}', Line: {}, Column: {}",
            self.kind, self.text, self.span.line, self.span.column
        )
    }
}

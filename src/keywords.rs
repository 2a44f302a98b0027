/// Reserved spellings recognised by default.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "FUNC", "VAR", "STR", "INT", "BOOL", "STRUCT", "RETURN", "IF", "ELSE", "WHILE",
];

/// Immutable set of reserved identifier spellings.
///
/// Membership is an exact, case-sensitive comparison against the whole
/// lexeme: `FUNC` is a keyword, `func` and `FUNCS` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// A set with no reserved words; every identifier stays an identifier.
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: &[] }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    #[must_use]
    pub const fn words(&self) -> &'static [&'static str] {
        self.words
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

//! Keyword vocabulary of the ASCII STL grammar.

use std::fmt;

/// One ASCII STL keyword.
///
/// Matching is exact and case-sensitive: `Facet` matches `facet` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `solid`
    Solid,
    /// `facet`
    Facet,
    /// `normal`
    Normal,
    /// `outer`
    Outer,
    /// `loop`
    Loop,
    /// `vertex`
    Vertex,
    /// `endloop`
    Endloop,
    /// `endfacet`
    Endfacet,
    /// `endsolid`
    Endsolid,
}

impl Token {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Solid,
        Self::Facet,
        Self::Normal,
        Self::Outer,
        Self::Loop,
        Self::Vertex,
        Self::Endloop,
        Self::Endfacet,
        Self::Endsolid,
    ];

    /// The literal spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Facet => "facet",
            Self::Normal => "normal",
            Self::Outer => "outer",
            Self::Loop => "loop",
            Self::Vertex => "vertex",
            Self::Endloop => "endloop",
            Self::Endfacet => "endfacet",
            Self::Endsolid => "endsolid",
        }
    }

    /// Classify a word, or `None` if it is not a keyword.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_io::Token;
    ///
    /// assert_eq!(Token::classify("endloop"), Some(Token::Endloop));
    /// assert_eq!(Token::classify("Facet"), None);
    /// ```
    #[must_use]
    pub fn classify(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.matches(word))
    }

    /// True if `word` is exactly this keyword.
    #[inline]
    #[must_use]
    pub fn matches(self, word: &str) -> bool {
        word == self.as_str()
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of acceptable keywords.
///
/// Used both for "expected" diagnostics and for recovery, where the parser
/// discards words until one of the set shows up and needs to know which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u16);

impl TokenSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Where parsing resumes after an error: the next triangle or the end.
    pub const RESYNC: Self = Self::single(Token::Facet).with(Token::Endsolid);

    /// A set holding one keyword.
    #[must_use]
    pub const fn single(token: Token) -> Self {
        Self(token.bit())
    }

    /// This set plus `token`.
    #[must_use]
    pub const fn with(self, token: Token) -> Self {
        Self(self.0 | token.bit())
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, token: Token) -> bool {
        self.0 & token.bit() != 0
    }

    /// Number of keywords in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if the set holds no keywords.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Token> {
        Token::ALL.into_iter().filter(move |&token| self.contains(token))
    }

    /// The member `word` spells, if any.
    ///
    /// Every candidate is compared literally, so the reported member is
    /// never ambiguous.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_io::{Token, TokenSet};
    ///
    /// assert_eq!(TokenSet::RESYNC.match_word("endsolid"), Some(Token::Endsolid));
    /// assert_eq!(TokenSet::RESYNC.match_word("vertex"), None);
    /// ```
    #[must_use]
    pub fn match_word(self, word: &str) -> Option<Token> {
        self.iter().find(|token| token.matches(word))
    }
}

impl From<Token> for TokenSet {
    fn from(token: Token) -> Self {
        Self::single(token)
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for TokenSet {
    /// Formats as `"facet" or "endsolid"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "\"{token}\"")?;
        }
        Ok(())
    }
}

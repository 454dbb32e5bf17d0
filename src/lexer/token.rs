//! Token and token kind definitions shared by the lexer and the symbol extractor.

use serde::Serialize;
use std::fmt;

/// Classification of a lexed span.
///
/// The set is closed: every character of the input ends up in a token of
/// exactly one of these kinds, with [`TokenKind::Unknown`] as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    String,
    Comment,
    Operator,
    Number,
    Whitespace,
    Unknown,
}

impl TokenKind {
    /// All kinds in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Number,
        TokenKind::Whitespace,
        TokenKind::Unknown,
    ];

    /// Upper-case name used in token tables (`KEYWORD`, `IDENTIFIER`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Number => "NUMBER",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of source text.
///
/// `text` is the exact slice of the input that produced the token, so
/// concatenating the texts of a token stream gives back the source.
/// Fields are private; a token never changes after the lexer builds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace or comment.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// True for an operator token whose text is exactly `op`.
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }

    /// True for a keyword token whose text is exactly `kw`.
    pub fn is_keyword(&self, kw: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == kw
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace => write!(f, "{} {:?}", self.kind, self.text),
            _ => write!(f, "{} '{}'", self.kind, self.text),
        }
    }
}

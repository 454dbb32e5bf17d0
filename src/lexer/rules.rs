//! The ordered rule table driving the lexer.
//!
//! Rules are plain data evaluated top to bottom. At each position the first
//! applicable rule whose pattern matches a non-empty prefix wins, even when
//! a later rule would match more text, so the order of [`RULES`] is part of
//! the lexer's contract:
//!
//! 1. whitespace
//! 2. comments (`//`, `/* */` for c-like; `#` for python)
//! 3. strings (python tries triple-quoted forms first)
//! 4. numbers
//! 5. operators and punctuation, multi-character forms first
//! 6. identifiers (reclassified as keywords afterwards)
//!
//! Every pattern returns the byte length of its match, always on a `char`
//! boundary of the input.

use super::language::Language;
use super::token::TokenKind;

/// Operators tried before single characters, in priority order.
pub const MULTI_CHAR_OPERATORS: &[&str] = &[
    "->", "++", "--", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=",
];

/// Punctuation accepted as a one-character operator.
pub const SINGLE_CHAR_OPERATORS: &str = "+-*/%=&|<>!^~,.;:?(){}[]";

/// Which languages a rule is active for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    All,
    Only(Language),
}

impl Applicability {
    fn includes(self, language: Language) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Only(only) => only == language,
        }
    }
}

/// Shape of text a rule recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Whitespace,
    /// Runs from the prefix up to, not including, the next `\n`.
    LineComment(&'static str),
    /// `open ... close` with the shortest close; may span lines.
    BlockComment {
        open: &'static str,
        close: &'static str,
    },
    /// `"..."` or `'...'` where a backslash escapes the next character.
    QuotedString,
    /// `"""..."""` or `'''...'''`, no escapes.
    TripleQuotedString,
    Number,
    Operator,
    Identifier,
}

impl Pattern {
    /// Byte length of the match at the start of `input`, if any.
    pub fn match_len(self, input: &str) -> Option<usize> {
        match self {
            Pattern::Whitespace => Some(whitespace_len(input)),
            Pattern::LineComment(prefix) => line_comment_len(input, prefix),
            Pattern::BlockComment { open, close } => delimited_len(input, open, close),
            Pattern::QuotedString => quoted_string_len(input),
            Pattern::TripleQuotedString => delimited_len(input, "\"\"\"", "\"\"\"")
                .or_else(|| delimited_len(input, "'''", "'''")),
            Pattern::Number => number_len(input),
            Pattern::Operator => operator_len(input),
            Pattern::Identifier => identifier_len(input),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Pattern,
    pub applies_to: Applicability,
}

impl Rule {
    const fn new(kind: TokenKind, pattern: Pattern, applies_to: Applicability) -> Self {
        Self {
            kind,
            pattern,
            applies_to,
        }
    }

    /// Length of a non-empty match at the start of `input`.
    ///
    /// A zero-length match is reported as no match; the lexer relies on
    /// this to always make progress.
    pub fn match_len(&self, input: &str, language: Language) -> Option<usize> {
        if !self.applies_to.includes(language) {
            return None;
        }
        self.pattern.match_len(input).filter(|&len| len > 0)
    }
}

pub const RULES: &[Rule] = &[
    Rule::new(TokenKind::Whitespace, Pattern::Whitespace, Applicability::All),
    Rule::new(
        TokenKind::Comment,
        Pattern::LineComment("//"),
        Applicability::Only(Language::CLike),
    ),
    Rule::new(
        TokenKind::Comment,
        Pattern::BlockComment {
            open: "/*",
            close: "*/",
        },
        Applicability::Only(Language::CLike),
    ),
    Rule::new(
        TokenKind::Comment,
        Pattern::LineComment("#"),
        Applicability::Only(Language::Python),
    ),
    Rule::new(
        TokenKind::String,
        Pattern::TripleQuotedString,
        Applicability::Only(Language::Python),
    ),
    Rule::new(TokenKind::String, Pattern::QuotedString, Applicability::All),
    Rule::new(TokenKind::Number, Pattern::Number, Applicability::All),
    Rule::new(TokenKind::Operator, Pattern::Operator, Applicability::All),
    Rule::new(TokenKind::Identifier, Pattern::Identifier, Applicability::All),
];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A word boundary follows `end` when the next byte is absent or not a word byte.
fn at_word_boundary(bytes: &[u8], end: usize) -> bool {
    !matches!(bytes.get(end), Some(&b) if is_word_byte(b))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Unicode `White_Space` minus NEL (U+0085), plus the byte-order mark.
///
/// This is the ECMAScript `\s` set, so a BOM at the start of a file is
/// whitespace and NEL is not.
fn is_source_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

fn whitespace_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|&(_, ch)| !is_source_whitespace(ch))
        .map_or(input.len(), |(idx, _)| idx)
}

fn line_comment_len(input: &str, prefix: &str) -> Option<usize> {
    if !input.starts_with(prefix) {
        return None;
    }
    Some(input.find('\n').unwrap_or(input.len()))
}

fn delimited_len(input: &str, open: &str, close: &str) -> Option<usize> {
    let body = input.strip_prefix(open)?;
    body.find(close).map(|idx| open.len() + idx + close.len())
}

fn quoted_string_len(input: &str) -> Option<usize> {
    let mut chars = input.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }

    while let Some((idx, ch)) = chars.next() {
        if ch == '\\' {
            // A trailing backslash leaves the string unterminated.
            chars.next()?;
        } else if ch == quote {
            return Some(idx + ch.len_utf8());
        }
    }

    None
}

fn number_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let int_len = digit_run(bytes);
    if int_len == 0 {
        return None;
    }

    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = digit_run(&bytes[int_len + 1..]);
        let end = int_len + 1 + frac_len;
        if frac_len > 0 && at_word_boundary(bytes, end) {
            return Some(end);
        }
    }

    at_word_boundary(bytes, int_len).then_some(int_len)
}

fn operator_len(input: &str) -> Option<usize> {
    if let Some(op) = MULTI_CHAR_OPERATORS.iter().find(|op| input.starts_with(**op)) {
        return Some(op.len());
    }
    let first = input.chars().next()?;
    SINGLE_CHAR_OPERATORS.contains(first).then_some(1)
}

fn identifier_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    match bytes.first() {
        Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {
            Some(1 + bytes[1..].iter().take_while(|&&b| is_word_byte(b)).count())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let kinds: Vec<TokenKind> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(kinds.first(), Some(&TokenKind::Whitespace));
        assert_eq!(kinds.last(), Some(&TokenKind::Identifier));

        let number = kinds.iter().position(|k| *k == TokenKind::Number).unwrap();
        let operator = kinds.iter().position(|k| *k == TokenKind::Operator).unwrap();
        let string = kinds.iter().rposition(|k| *k == TokenKind::String).unwrap();
        assert!(string < number && number < operator);
    }

    #[test]
    fn test_whitespace_spans_mixed_runs() {
        assert_eq!(Pattern::Whitespace.match_len(" \t\r\n x"), Some(5));
        assert_eq!(Pattern::Whitespace.match_len("x"), Some(0));
    }

    #[test]
    fn test_whitespace_includes_bom_but_not_nel() {
        assert_eq!(Pattern::Whitespace.match_len("\u{feff}int"), Some(3));
        assert_eq!(Pattern::Whitespace.match_len("\u{00a0}\u{3000}x"), Some(5));
        assert_eq!(Pattern::Whitespace.match_len("\u{85}"), Some(0));
        assert_eq!(Pattern::Whitespace.match_len(" \u{85}"), Some(1));
    }

    #[test]
    fn test_zero_length_match_is_rejected() {
        let ws = &RULES[0];
        assert_eq!(ws.match_len("abc", Language::CLike), None);
        assert_eq!(ws.match_len("", Language::Python), None);
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let rule = Pattern::LineComment("//");
        assert_eq!(rule.match_len("// hi\nint"), Some(5));
        assert_eq!(rule.match_len("// hi"), Some(5));
        assert_eq!(rule.match_len("/ hi"), None);
    }

    #[test]
    fn test_block_comment_takes_shortest_close() {
        let rule = Pattern::BlockComment {
            open: "/*",
            close: "*/",
        };
        assert_eq!(rule.match_len("/* a */ b */"), Some(7));
        assert_eq!(rule.match_len("/**/"), Some(4));
        assert_eq!(rule.match_len("/*/"), None);
        assert_eq!(rule.match_len("/* open"), None);
    }

    #[test]
    fn test_quoted_string_escapes() {
        assert_eq!(quoted_string_len(r#""a\"b" rest"#), Some(6));
        assert_eq!(quoted_string_len(r"'it\'s'"), Some(7));
        assert_eq!(quoted_string_len(r#""a'b""#), Some(5));
        assert_eq!(quoted_string_len(r#""abc"#), None);
        assert_eq!(quoted_string_len("\"abc\\"), None);
        assert_eq!(quoted_string_len("\"é\""), Some(4));
        assert_eq!(quoted_string_len("\"a\\\nb\" x"), Some(6));
    }

    #[test]
    fn test_triple_quoted_string() {
        let rule = Pattern::TripleQuotedString;
        assert_eq!(rule.match_len("\"\"\"a\n\"b\"\n\"\"\" x"), Some(12));
        assert_eq!(rule.match_len("'''x'''"), Some(7));
        assert_eq!(rule.match_len("\"\"\"never closed"), None);
        assert_eq!(rule.match_len("\"\"x"), None);
    }

    #[test]
    fn test_number_requires_word_boundary() {
        assert_eq!(number_len("42;"), Some(2));
        assert_eq!(number_len("3.14)"), Some(4));
        assert_eq!(number_len("1.x"), Some(1));
        assert_eq!(number_len("1.5x"), Some(1));
        assert_eq!(number_len("123abc"), None);
        assert_eq!(number_len("1_000"), None);
        assert_eq!(number_len("7"), Some(1));
        assert_eq!(number_len("x1"), None);
    }

    #[test]
    fn test_operator_prefers_multi_char() {
        assert_eq!(operator_len("->x"), Some(2));
        assert_eq!(operator_len("-x"), Some(1));
        assert_eq!(operator_len("-->"), Some(2));
        assert_eq!(operator_len("<<"), Some(1));
        assert_eq!(operator_len("%= 2"), Some(2));
        assert_eq!(operator_len("@"), None);
        assert_eq!(operator_len("\""), None);
    }

    #[test]
    fn test_identifier_is_ascii_only() {
        assert_eq!(identifier_len("_tmp1 = 0"), Some(5));
        assert_eq!(identifier_len("1abc"), None);
        assert_eq!(identifier_len("café"), Some(3));
        assert_eq!(identifier_len("é"), None);
    }

    #[test]
    fn test_language_specific_rules() {
        let hash = RULES
            .iter()
            .find(|r| r.pattern == Pattern::LineComment("#"))
            .unwrap();
        assert_eq!(hash.match_len("# c", Language::Python), Some(3));
        assert_eq!(hash.match_len("# c", Language::CLike), None);
    }
}

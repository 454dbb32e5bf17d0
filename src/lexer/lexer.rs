//! Rule-driven lexer producing a gap-free token stream.

use super::language::Language;
use super::rules::RULES;
use super::token::{Token, TokenKind};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Lexer over a borrowed source string.
///
/// Yields tokens lazily; cloning the lexer restarts the remaining sequence
/// from the same position. The lexer never fails: text no rule accepts is
/// emitted one character at a time as [`TokenKind::Unknown`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    language: Language,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, language: Language) -> Self {
        Self {
            input,
            position: 0,
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn next_token(&mut self) -> Option<Token> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        for rule in RULES {
            if let Some(len) = rule.match_len(rest, self.language) {
                let text = &rest[..len];
                self.position += len;
                return Some(Token::new(classify(rule.kind, text, self.language), text));
            }
        }

        let ch = rest.chars().next()?;
        trace!(position = self.position, ch = ?ch, "no rule matched, emitting unknown");
        self.position += ch.len_utf8();
        Some(Token::new(TokenKind::Unknown, ch))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Final kind for a matched span: identifiers in the keyword set become keywords.
fn classify(kind: TokenKind, text: &str, language: Language) -> TokenKind {
    match kind {
        TokenKind::Identifier if language.is_keyword(text) => TokenKind::Keyword,
        other => other,
    }
}

/// Tokenize an entire source string.
pub fn tokenize(source: &str, language: Language) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source, language).collect();
    debug!(
        %language,
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized source"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(source: &str, language: Language) -> Vec<(TokenKind, String)> {
        tokenize(source, language)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn significant(source: &str, language: Language) -> Vec<(TokenKind, String)> {
        kinds_and_texts(source, language)
            .into_iter()
            .filter(|(kind, _)| *kind != TokenKind::Whitespace)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        use TokenKind::*;
        let tokens = significant("int main() { return 0; }", Language::CLike);
        let expected = [
            (Keyword, "int"),
            (Identifier, "main"),
            (Operator, "("),
            (Operator, ")"),
            (Operator, "{"),
            (Keyword, "return"),
            (Number, "0"),
            (Operator, ";"),
            (Operator, "}"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for ((kind, text), (want_kind, want_text)) in tokens.iter().zip(expected) {
            assert_eq!((*kind, text.as_str()), (want_kind, want_text));
        }
    }

    #[test]
    fn test_whitespace_is_kept() {
        let tokens = kinds_and_texts("a \n\tb", Language::CLike);
        assert_eq!(tokens[1], (TokenKind::Whitespace, " \n\t".to_string()));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_comments() {
        let tokens = significant("int x; // comment\nint y; /* block\ncomment */ int z;", Language::CLike);
        assert_eq!(tokens[3], (TokenKind::Comment, "// comment".to_string()));
        assert_eq!(tokens[7], (TokenKind::Comment, "/* block\ncomment */".to_string()));
        assert_eq!(tokens[8], (TokenKind::Keyword, "int".to_string()));
    }

    #[test]
    fn test_hash_is_unknown_in_c() {
        let tokens = kinds_and_texts("#include <stdio.h>", Language::CLike);
        assert_eq!(tokens[0], (TokenKind::Unknown, "#".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "include".to_string()));
    }

    #[test]
    fn test_string_literal_keeps_escapes_verbatim() {
        let tokens = kinds_and_texts(r#""hello\nworld""#, Language::CLike);
        assert_eq!(tokens, vec![(TokenKind::String, r#""hello\nworld""#.to_string())]);
    }

    #[test]
    fn test_python_docstring() {
        let source = "def f():\n    \"\"\"doc\n    more\"\"\"\n";
        let strings: Vec<_> = tokenize(source, Language::Python)
            .into_iter()
            .filter(|t| t.kind() == TokenKind::String)
            .collect();
        assert_eq!(strings.len(), 1);
        assert_eq!(strings[0].text(), "\"\"\"doc\n    more\"\"\"");
    }

    #[test]
    fn test_unknown_consumes_one_char() {
        let tokens = kinds_and_texts("@é", Language::Python);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Unknown, "@".to_string()),
                (TokenKind::Unknown, "é".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_clone_restarts_from_position() {
        let mut lexer = Lexer::new("a + b", Language::CLike);
        lexer.next();
        assert_eq!(lexer.position(), 1);
        let rest: Vec<Token> = lexer.clone().collect();
        let again: Vec<Token> = lexer.collect();
        assert_eq!(rest, again);
        assert_eq!(rest.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", Language::CLike).is_empty());
        assert!(tokenize("", Language::Python).is_empty());
    }
}

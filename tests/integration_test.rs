// End-to-end tests: source text through the lexer and the symbol extractor

use codescope::lexer::{tokenize, Language, Token, TokenKind};
use codescope::report::{self, Format, Section};
use codescope::symbols::build_symbol_table;
use codescope::{analyze, Analysis};

fn significant(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .filter(|t| t.kind() != TokenKind::Whitespace)
        .map(|t| (t.kind(), t.text()))
        .collect()
}

#[test]
fn test_c_main_function() {
    let analysis = analyze("int main() { return 0; }", Language::CLike);

    assert_eq!(
        significant(&analysis.tokens),
        vec![
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "main"),
            (TokenKind::Operator, "("),
            (TokenKind::Operator, ")"),
            (TokenKind::Operator, "{"),
            (TokenKind::Keyword, "return"),
            (TokenKind::Number, "0"),
            (TokenKind::Operator, ";"),
            (TokenKind::Operator, "}"),
        ]
    );
    assert_eq!(analysis.symbols.functions(), ["main"]);
    assert!(analysis.symbols.variables().is_empty());
}

#[test]
fn test_c_declaration_and_assignment() {
    let analysis = analyze("int x; x = 5;", Language::CLike);
    assert!(analysis.symbols.functions().is_empty());
    assert_eq!(analysis.symbols.variables(), ["x"]);
}

#[test]
fn test_python_function() {
    let analysis = analyze("def greet(name):\n  return name", Language::Python);
    assert_eq!(analysis.symbols.functions(), ["greet"]);
    assert!(analysis.symbols.variables().is_empty());
}

#[test]
fn test_unterminated_string_degrades() {
    let tokens = tokenize("\"abc", Language::CLike);

    assert!(tokens.iter().all(|t| t.kind() != TokenKind::String));
    assert_eq!(tokens[0], Token::new(TokenKind::Unknown, "\""));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "abc"));
    let rebuilt: String = tokens.iter().map(Token::text).collect();
    assert_eq!(rebuilt, "\"abc");
}

#[test]
fn test_comments_per_language() {
    let tokens = tokenize("/* a */ int y;", Language::CLike);
    assert_eq!(tokens[0], Token::new(TokenKind::Comment, "/* a */"));

    let tokens = tokenize("# a", Language::Python);
    assert_eq!(tokens, vec![Token::new(TokenKind::Comment, "# a")]);

    let tokens = tokenize("# a\nb = 1", Language::Python);
    assert_eq!(tokens[0], Token::new(TokenKind::Comment, "# a"));
    assert_eq!(tokens[1], Token::new(TokenKind::Whitespace, "\n"));
}

#[test]
fn test_empty_input() {
    for language in Language::ALL {
        assert!(tokenize("", language).is_empty());
        let table = build_symbol_table(&[], language);
        assert!(table.functions().is_empty());
        assert!(table.variables().is_empty());
    }
}

#[test]
fn test_c_program() {
    let source = r#"
        #include <stdio.h>

        struct point { int x; int y; };

        static int scale(struct point *p, int factor) {
            p->x *= factor;
            p->y *= factor;
            return p->x + p->y;
        }

        int main() {
            struct point origin;
            int values[4];
            float ratio = 2.5;
            values[0] = scale(&origin, 3);
            printf("%d %f\n", values[0], ratio);
            return 0;
        }
    "#;

    let Analysis { tokens, symbols, .. } = analyze(source, Language::CLike);

    let rebuilt: String = tokens.iter().map(Token::text).collect();
    assert_eq!(rebuilt, source);

    assert_eq!(symbols.functions(), ["main", "printf", "scale"]);
    assert_eq!(
        symbols.variables(),
        ["factor", "point", "ratio", "values", "x", "y"]
    );
}

#[test]
fn test_python_program() {
    let source = r#"
import os

LIMIT = 10

class Cache:
    def __init__(self, size=LIMIT):
        self.size = size
        self.items = {}

    def put(self, key, value):
        if len(self.items) >= self.size:
            self.items.clear()
        self.items[key] = value

def main():
    '''Entry point.'''
    cache = Cache()
    cache.put("home", os.getenv("HOME"))
"#;

    let analysis = analyze(source, Language::Python);

    assert_eq!(analysis.symbols.functions(), ["__init__", "main", "put"]);
    assert_eq!(
        analysis.symbols.variables(),
        ["LIMIT", "cache", "items", "size"]
    );
    assert!(analysis
        .tokens
        .iter()
        .any(|t| t.kind() == TokenKind::String && t.text() == "'''Entry point.'''"));
}

#[test]
fn test_json_report_round_trip_fields() {
    let analysis = analyze("int n = 1;", Language::CLike);
    let json = report::render(&analysis, Section::All, Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["language"], "c-like");
    assert_eq!(value["tokens"].as_array().unwrap().len(), analysis.tokens.len());
    assert_eq!(value["symbols"]["variables"][0], "n");
    assert_eq!(value["symbols"]["functions"].as_array().unwrap().len(), 0);
}

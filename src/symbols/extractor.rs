//! Heuristic function and variable detection over a token stream.
//!
//! A single left-to-right pass looks ahead from each token with a few
//! per-language patterns. Whitespace tokens are skipped during look-ahead;
//! comments are not.
//!
//! c-like:
//! - identifier followed by `(` is a function
//! - type specifier, optional `*`s, identifier is a variable (first
//!   declarator only), unless that identifier is followed by `(`
//! - identifier followed by `=` or `[` is a variable, unless already a function
//!
//! python:
//! - `def` followed by an identifier is a function
//! - identifier followed by `=` is a variable, unless already a function

use super::table::SymbolTable;
use crate::lexer::{Language, Token, TokenKind};
use rustc_hash::FxHashSet;
use tracing::debug;

/// c-like keywords that can start a variable declaration.
pub const TYPE_SPECIFIERS: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "struct", "union", "unsigned",
    "void", "const", "volatile", "auto",
];

/// Name sets threaded through the scan.
#[derive(Debug, Default)]
struct Accumulator {
    functions: FxHashSet<String>,
    variables: FxHashSet<String>,
}

impl Accumulator {
    fn add_function(&mut self, name: &str) {
        self.functions.insert(name.to_string());
    }

    fn add_variable(&mut self, name: &str) {
        self.variables.insert(name.to_string());
    }

    /// Variable by use: skipped for names already seen as functions.
    fn add_used_variable(&mut self, name: &str) {
        if !self.functions.contains(name) {
            self.add_variable(name);
        }
    }

    fn finish(self) -> SymbolTable {
        SymbolTable::from_sets(self.functions, self.variables)
    }
}

/// Derive the function and variable names visible in `tokens`.
pub fn build_symbol_table(tokens: &[Token], language: Language) -> SymbolTable {
    let mut acc = Accumulator::default();

    for index in 0..tokens.len() {
        match language {
            Language::CLike => scan_c_like(tokens, index, &mut acc),
            Language::Python => scan_python(tokens, index, &mut acc),
        }
    }

    let table = acc.finish();
    debug!(
        %language,
        tokens = tokens.len(),
        functions = table.functions().len(),
        variables = table.variables().len(),
        "built symbol table"
    );
    table
}

fn scan_c_like(tokens: &[Token], index: usize, acc: &mut Accumulator) {
    let token = &tokens[index];
    match token.kind() {
        TokenKind::Identifier => {
            if followed_by_operator(tokens, index, &["("]) {
                acc.add_function(token.text());
            } else if followed_by_operator(tokens, index, &["=", "["]) {
                acc.add_used_variable(token.text());
            }
        }
        TokenKind::Keyword if TYPE_SPECIFIERS.contains(&token.text()) => {
            if let Some(decl) = declarator_after(tokens, index) {
                // `int main(` declares a function; the identifier rule handles it.
                if !followed_by_operator(tokens, decl, &["("]) {
                    acc.add_variable(tokens[decl].text());
                }
            }
        }
        _ => {}
    }
}

fn scan_python(tokens: &[Token], index: usize, acc: &mut Accumulator) {
    let token = &tokens[index];
    match token.kind() {
        TokenKind::Keyword if token.text() == "def" => {
            if let Some(next) = next_significant(tokens, index + 1) {
                if tokens[next].kind() == TokenKind::Identifier {
                    acc.add_function(tokens[next].text());
                }
            }
        }
        TokenKind::Identifier => {
            if followed_by_operator(tokens, index, &["="]) {
                acc.add_used_variable(token.text());
            }
        }
        _ => {}
    }
}

/// Index of the first non-whitespace token at or after `from`.
fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| tokens[i].kind() != TokenKind::Whitespace)
}

fn followed_by_operator(tokens: &[Token], index: usize, ops: &[&str]) -> bool {
    next_significant(tokens, index + 1)
        .is_some_and(|next| ops.iter().any(|op| tokens[next].is_operator(op)))
}

/// Identifier declared by the type specifier at `index`, skipping pointer stars.
fn declarator_after(tokens: &[Token], index: usize) -> Option<usize> {
    let mut i = index + 1;
    while let Some(token) = tokens.get(i) {
        if token.kind() == TokenKind::Whitespace || token.is_operator("*") {
            i += 1;
            continue;
        }
        return (token.kind() == TokenKind::Identifier).then_some(i);
    }
    None
}

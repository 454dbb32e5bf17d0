//! # Introduction
//!
//! codescope lexes C-like and Python source into classified tokens and
//! derives a heuristic table of declared function and variable names from
//! them. A terminal viewer built with [ratatui](https://docs.rs/ratatui)
//! renders the results.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Symbol Extractor → Symbol Table → TUI / report
//! ```
//!
//! 1. [`lexer`]: rule-driven tokenizer; total over every input, and the
//!    token texts always concatenate back to the source.
//! 2. [`symbols`]: single-pass look-ahead heuristics producing sorted
//!    function and variable name lists.
//! 3. [`report`]: plain text and JSON dumps of both tables.
//! 4. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! Both core passes are pure functions. Nothing here keeps state between
//! calls, so concurrent callers need no coordination.

pub mod error;
pub mod lexer;
pub mod report;
pub mod symbols;
pub mod ui;

use lexer::{Language, Token};
use serde::Serialize;
use symbols::SymbolTable;

/// Tokens and symbols for one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub language: Language,
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

/// Run the lexer and the symbol extractor over `source`.
pub fn analyze(source: &str, language: Language) -> Analysis {
    let tokens = lexer::tokenize(source, language);
    let symbols = symbols::build_symbol_table(&tokens, language);
    Analysis {
        language,
        tokens,
        symbols,
    }
}

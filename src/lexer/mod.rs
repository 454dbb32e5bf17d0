//! Source text lexer
//!
//! This module turns source text into a flat, gap-free token stream:
//! - [`token`]: [`Token`] and [`TokenKind`]
//! - [`language`]: the [`Language`] selector and keyword tables
//! - [`rules`]: the ordered rule table
//! - [`lexer`]: the [`Lexer`] iterator and [`tokenize`]
//!
//! # Guarantees
//!
//! For any input and either language, the concatenated token texts equal the
//! input, every token is non-empty, and lexing never fails. Unterminated
//! strings or comments fall back to operator and unknown tokens.
//!
//! # Lexer Implementation
//!
//! Hand-written matchers over `&str`, one per rule. No regex or lexer
//! generator dependencies.

pub mod language;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod rules;
pub mod token;

pub use language::Language;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};

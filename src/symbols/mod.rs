//! Symbol extraction
//!
//! Derives a best-effort table of function and variable names from a token
//! stream. This is pattern matching over tokens, not parsing: there is no
//! AST, no scoping and no type information.
//!
//! - [`extractor`]: the per-language look-ahead rules and [`build_symbol_table`]
//! - [`table`]: the sorted, deduplicated [`SymbolTable`]

pub mod extractor;
pub mod table;

pub use extractor::build_symbol_table;
pub use table::SymbolTable;

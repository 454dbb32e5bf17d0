//! Flat function/variable name table.

use rustc_hash::FxHashSet;
use serde::Serialize;

/// Names found by the symbol extractor.
///
/// Both lists are deduplicated and sorted by code point. No position, type
/// or scope information is kept; a name is either present or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    functions: Vec<String>,
    variables: Vec<String>,
}

impl SymbolTable {
    /// Build a table from unordered name sets.
    pub fn from_sets(functions: FxHashSet<String>, variables: FxHashSet<String>) -> Self {
        Self {
            functions: sorted(functions),
            variables: sorted(variables),
        }
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.variables.is_empty()
    }

    pub fn contains_function(&self, name: &str) -> bool {
        self.functions
            .binary_search_by(|f| f.as_str().cmp(name))
            .is_ok()
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        self.variables
            .binary_search_by(|v| v.as_str().cmp(name))
            .is_ok()
    }
}

fn sorted(names: FxHashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort_unstable();
    names
}

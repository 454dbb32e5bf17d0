//! Supported surface languages and their keyword tables.

use crate::error::ParseLanguageError;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

static C_KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| C_KEYWORDS.iter().copied().collect());

static PYTHON_KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PYTHON_KEYWORDS.iter().copied().collect());

/// Language selector for one lexer or extractor invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "c-like")]
    CLike,
    #[serde(rename = "python")]
    Python,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::CLike, Language::Python];

    pub fn name(self) -> &'static str {
        match self {
            Language::CLike => "c-like",
            Language::Python => "python",
        }
    }

    /// Reserved words, in alphabetical order.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::CLike => C_KEYWORDS,
            Language::Python => PYTHON_KEYWORDS,
        }
    }

    pub fn is_keyword(self, word: &str) -> bool {
        match self {
            Language::CLike => C_KEYWORD_SET.contains(word),
            Language::Python => PYTHON_KEYWORD_SET.contains(word),
        }
    }

    /// The other language. Used by the viewer's language switch.
    pub fn toggle(self) -> Self {
        match self {
            Language::CLike => Language::Python,
            Language::Python => Language::CLike,
        }
    }

    /// Guess the language from a file extension. Anything that is not a
    /// Python source file is treated as c-like.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("py" | "pyw" | "pyi") => Language::Python,
            _ => Language::CLike,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c-like" | "clike" | "c" => Ok(Language::CLike),
            "python" | "py" => Ok(Language::Python),
            _ => Err(ParseLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

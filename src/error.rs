//! Error types
//!
//! Lexing and symbol extraction are total and have no error path. The
//! errors here belong to the outer layers: language name parsing and the
//! command-line front end.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An unrecognised language name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{input}' (expected 'c-like' or 'python')")]
pub struct ParseLanguageError {
    pub input: String,
}

/// Errors surfaced by the `codescope` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode output as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

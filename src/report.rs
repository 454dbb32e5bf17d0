//! Non-interactive output of an [`Analysis`]
//!
//! Used by `codescope --dump`. Text output mirrors the viewer's tables;
//! JSON output serializes the same data for other tools.

use crate::lexer::{Token, TokenKind};
use crate::symbols::SymbolTable;
use crate::Analysis;
use clap::ValueEnum;
use serde::Serialize;
use std::borrow::Cow;

/// Which tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Tokens,
    Symbols,
    All,
}

impl Section {
    fn includes_tokens(self) -> bool {
        matches!(self, Section::Tokens | Section::All)
    }

    fn includes_symbols(self) -> bool {
        matches!(self, Section::Symbols | Section::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    language: crate::lexer::Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [Token]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbols: Option<&'a SymbolTable>,
}

/// Token text as shown in tables.
///
/// Whitespace, and any token holding a control character such as a newline
/// inside a block comment, is shown as an escaped, quoted string so each
/// token stays on one row.
pub fn display_value(token: &Token) -> Cow<'_, str> {
    let text = token.text();
    if token.kind() == TokenKind::Whitespace || text.chars().any(char::is_control) {
        Cow::Owned(format!("{:?}", text))
    } else {
        Cow::Borrowed(text)
    }
}

pub fn format_token_table(tokens: &[Token]) -> String {
    let width = TokenKind::ALL.iter().map(|k| k.name().len()).max().unwrap_or(0);
    tokens
        .iter()
        .map(|token| {
            format!(
                "{:<width$}  {}\n",
                token.kind().name(),
                display_value(token),
                width = width
            )
        })
        .collect()
}

pub fn format_symbol_table(symbols: &SymbolTable) -> String {
    let mut out = name_list("Functions", symbols.functions());
    out.push_str(&name_list("Variables", symbols.variables()));
    out
}

fn name_list(title: &str, names: &[String]) -> String {
    let mut out = format!("{}:\n", title);
    if names.is_empty() {
        out.push_str("  (none)\n");
    }
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Render the requested sections of `analysis`.
pub fn render(
    analysis: &Analysis,
    section: Section,
    format: Format,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => {
            let report = JsonReport {
                language: analysis.language,
                tokens: section.includes_tokens().then_some(analysis.tokens.as_slice()),
                symbols: section.includes_symbols().then_some(&analysis.symbols),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
        Format::Text => {
            let mut out = String::new();
            if section.includes_tokens() {
                out = format!(
                    "Tokens ({}, {} total)\n",
                    analysis.language,
                    analysis.tokens.len()
                );
                out.push_str(&format_token_table(&analysis.tokens));
            }
            if section.includes_symbols() {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format_symbol_table(&analysis.symbols));
            }
            Ok(out)
        }
    }
}

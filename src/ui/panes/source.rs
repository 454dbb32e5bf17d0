//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source text straight from the lexer's token
//! stream, so what is highlighted is exactly what the lexer produced.
//!
//! # Features
//!
//! - One style per token kind (see [`Theme::token_style`])
//! - Identifiers found by the symbol extractor are tinted as functions or
//!   variables
//! - Tokens that span lines (block comments, docstrings, blank runs) are
//!   split at each newline
//! - Line numbering and scrolling
//!
//! [`Theme::token_style`]: crate::ui::theme::Theme::token_style

use super::utils::{clamp_scroll, visible_height};
use crate::lexer::{Token, TokenKind};
use crate::symbols::SymbolTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TAB: &str = "    ";

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
}

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub tokens: &'a [Token],
    pub symbols: &'a SymbolTable,
    pub title: &'a str,
}

fn token_style(token: &Token, symbols: &SymbolTable) -> Style {
    if token.kind() == TokenKind::Identifier {
        if symbols.contains_function(token.text()) {
            return Style::default().fg(DEFAULT_THEME.function);
        }
        if symbols.contains_variable(token.text()) {
            return Style::default().fg(DEFAULT_THEME.variable);
        }
    }
    DEFAULT_THEME.token_style(token.kind())
}

/// Turn a token stream into styled display lines.
pub(crate) fn highlight_tokens(tokens: &[Token], symbols: &SymbolTable) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for token in tokens {
        let style = token_style(token, symbols);
        let mut segments = token.text().split('\n').peekable();

        while let Some(segment) = segments.next() {
            let segment = segment.trim_end_matches('\r');
            if !segment.is_empty() {
                current.push(Span::styled(segment.replace('\t', TAB), style));
            }
            if segments.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(is_focused));

    if data.tokens.is_empty() {
        let paragraph = Paragraph::new("(empty source)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = highlight_tokens(data.tokens, data.symbols);
    let height = visible_height(area);
    clamp_scroll(&mut scroll_state.offset, lines.len(), height);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

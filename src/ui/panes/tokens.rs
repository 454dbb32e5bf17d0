//! Token table pane: one row per token with its kind and value.

use super::utils::{clamp_scroll, visible_height};
use crate::lexer::{Token, TokenKind};
use crate::report::display_value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Scroll state for the token pane
#[derive(Debug, Default)]
pub struct TokenScrollState {
    pub offset: usize,
}

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        // Whitespace has no color of its own in the source view.
        TokenKind::Whitespace => Style::default().fg(DEFAULT_THEME.comment),
        other => DEFAULT_THEME.token_style(other),
    }
}

/// Render the token table pane
pub fn render_token_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_state: &mut TokenScrollState,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(is_focused));

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // One row is taken by the header.
    let height = visible_height(area).saturating_sub(1).max(1);
    clamp_scroll(&mut scroll_state.offset, tokens.len(), height);

    let rows: Vec<Row> = tokens
        .iter()
        .skip(scroll_state.offset)
        .take(height)
        .map(|token| {
            Row::new(vec![
                Cell::from(token.kind().name()).style(kind_style(token.kind())),
                Cell::from(display_value(token).into_owned())
                    .style(Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Token Type", "Value"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(1)])
        .header(header)
        .block(block);
    frame.render_widget(table, area);
}

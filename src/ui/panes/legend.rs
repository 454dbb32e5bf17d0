//! Color legend: a styled sample for every visible token kind.

use crate::lexer::{Language, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SAMPLE_WIDTH: usize = 12;

/// Label and sample text for one legend row.
pub(crate) fn legend_entry(kind: TokenKind, language: Language) -> Option<(&'static str, &'static str)> {
    let entry = match kind {
        TokenKind::Keyword => ("Keyword", "keyword"),
        TokenKind::Identifier => ("Identifier / Default", "identifier"),
        TokenKind::String => ("String", "\"string\""),
        TokenKind::Comment => match language {
            Language::CLike => ("Comment", "// comment"),
            Language::Python => ("Comment", "# comment"),
        },
        TokenKind::Operator => ("Operator", "+"),
        TokenKind::Number => ("Number", "123"),
        TokenKind::Unknown => ("Unknown", "@"),
        TokenKind::Whitespace => return None,
    };
    Some(entry)
}

/// Render the legend pane
pub fn render_legend_pane(frame: &mut Frame, area: Rect, language: Language) {
    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(false));

    let lines: Vec<Line> = TokenKind::ALL
        .iter()
        .filter_map(|&kind| legend_entry(kind, language).map(|entry| (kind, entry)))
        .map(|(kind, (label, sample))| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", sample, width = SAMPLE_WIDTH),
                    DEFAULT_THEME.token_style(kind),
                ),
                Span::styled(label, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

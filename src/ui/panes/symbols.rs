//! Symbol table pane: detected functions and variables side by side.

use super::utils::{clamp_scroll, visible_height};
use crate::symbols::SymbolTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state shared by both symbol lists
#[derive(Debug, Default)]
pub struct SymbolScrollState {
    pub offset: usize,
}

fn render_name_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    names: &[String],
    color: Color,
    is_focused: bool,
    offset: usize,
) {
    let block = Block::default()
        .title(format!(" {} ({}) ", title, names.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(is_focused));

    if names.is_empty() {
        let paragraph = Paragraph::new(format!("No {} identified.", title.to_lowercase()))
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = names
        .iter()
        .skip(offset)
        .take(visible_height(area))
        .map(|name| ListItem::new(name.as_str()).style(Style::default().fg(color)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the functions and variables lists
pub fn render_symbol_pane(
    frame: &mut Frame,
    area: Rect,
    symbols: &SymbolTable,
    is_focused: bool,
    scroll_state: &mut SymbolScrollState,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let longest = symbols.functions().len().max(symbols.variables().len());
    clamp_scroll(&mut scroll_state.offset, longest, visible_height(area));

    render_name_list(
        frame,
        columns[0],
        "Functions",
        symbols.functions(),
        DEFAULT_THEME.function,
        is_focused,
        scroll_state.offset,
    );
    render_name_list(
        frame,
        columns[1],
        "Variables",
        symbols.variables(),
        DEFAULT_THEME.variable,
        is_focused,
        scroll_state.offset,
    );
}

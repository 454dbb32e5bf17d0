use crate::lexer::TokenKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub function: Color,
    pub variable: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(166, 227, 161),         // Green for strings
    number: Color::Rgb(203, 166, 247),         // Purple for numbers
    operator: Color::Rgb(148, 226, 213),       // Teal for operators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175), // Yellow for functions
    variable: Color::Rgb(245, 194, 231), // Pink for variables
};

impl Theme {
    /// Style for a token of `kind` in the source pane, legend and token table.
    pub fn token_style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => Style::default()
                .fg(self.keyword)
                .add_modifier(Modifier::BOLD),
            TokenKind::Identifier => Style::default().fg(self.fg),
            TokenKind::String => Style::default().fg(self.string),
            TokenKind::Comment => Style::default()
                .fg(self.comment)
                .add_modifier(Modifier::ITALIC),
            TokenKind::Operator => Style::default().fg(self.operator),
            TokenKind::Number => Style::default().fg(self.number),
            TokenKind::Whitespace => Style::default(),
            TokenKind::Unknown => Style::default()
                .fg(self.error)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    pub fn border_style(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_normal)
        }
    }
}

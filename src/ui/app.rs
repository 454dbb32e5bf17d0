//! Main TUI application state and logic

use crate::lexer::Language;
use crate::ui::panes::{
    render_legend_pane, render_source_pane, render_status_bar, render_symbol_pane,
    render_token_pane, SourceRenderData, SourceScrollState, StatusRenderData, SymbolScrollState,
    TokenScrollState,
};
use crate::ui::samples::sample_source;
use crate::{analyze, Analysis};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use tracing::debug;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> symbols)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Symbols,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Symbols => FocusedPane::Tokens,
        }
    }
}

/// Where the displayed text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Built-in sample; switching language loads the other sample.
    Sample,
    /// User file; switching language re-lexes the same text.
    File(PathBuf),
}

/// The main application state
pub struct App {
    /// Text being analyzed
    pub source: String,

    pub origin: SourceOrigin,

    /// Tokens and symbols for `source`, recomputed on every language switch
    pub analysis: Analysis,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub token_scroll: TokenScrollState,
    pub symbol_scroll: SymbolScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app analyzing `source` as `language`.
    pub fn new(source: String, origin: SourceOrigin, language: Language) -> Self {
        let analysis = analyze(&source, language);
        App {
            source,
            origin,
            analysis,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            token_scroll: TokenScrollState::default(),
            symbol_scroll: SymbolScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Create an app showing the built-in sample for `language`.
    pub fn with_sample(language: Language) -> Self {
        Self::new(
            sample_source(language).to_string(),
            SourceOrigin::Sample,
            language,
        )
    }

    pub fn language(&self) -> Language {
        self.analysis.language
    }

    /// Re-analyze under the other language.
    pub fn switch_language(&mut self) {
        let language = self.language().toggle();
        if self.origin == SourceOrigin::Sample {
            self.source = sample_source(language).to_string();
        }
        self.analysis = analyze(&self.source, language);
        self.source_scroll.offset = 0;
        self.token_scroll.offset = 0;
        self.symbol_scroll.offset = 0;
        self.status_message = format!("Switched to {}", language);
        debug!(%language, tokens = self.analysis.tokens.len(), "language switched");
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Symbols (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tokens (top) | Legend (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(columns[1]);

        let title = match &self.origin {
            SourceOrigin::Sample => format!("Sample ({})", self.language()),
            SourceOrigin::File(path) => format!("{} ({})", path.display(), self.language()),
        };

        render_source_pane(
            frame,
            left_rows[0],
            SourceRenderData {
                tokens: &self.analysis.tokens,
                symbols: &self.analysis.symbols,
                title: &title,
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_symbol_pane(
            frame,
            left_rows[1],
            &self.analysis.symbols,
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbol_scroll,
        );

        render_token_pane(
            frame,
            right_rows[0],
            &self.analysis.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_scroll,
        );

        render_legend_pane(frame, right_rows[1], self.language());

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                language: self.language(),
                message: &self.status_message,
                token_count: self.analysis.tokens.len(),
                function_count: self.analysis.symbols.functions().len(),
                variable_count: self.analysis.symbols.variables().len(),
            },
        );
    }

    fn focused_offset(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll.offset,
            FocusedPane::Tokens => &mut self.token_scroll.offset,
            FocusedPane::Symbols => &mut self.symbol_scroll.offset,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => self.switch_language(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Offsets past the end are clamped when the pane renders.
            KeyCode::Up => {
                let offset = self.focused_offset();
                *offset = offset.saturating_sub(1);
            }
            KeyCode::Down => {
                let offset = self.focused_offset();
                *offset = offset.saturating_add(1);
            }
            KeyCode::PageUp => {
                let offset = self.focused_offset();
                *offset = offset.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let offset = self.focused_offset();
                *offset = offset.saturating_add(PAGE);
            }
            KeyCode::Home => *self.focused_offset() = 0,
            KeyCode::End => *self.focused_offset() = usize::MAX,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::with_sample(Language::CLike);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Source);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Symbols);
    }

    #[test]
    fn test_language_switch_loads_other_sample() {
        let mut app = App::with_sample(Language::CLike);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.language(), Language::Python);
        assert_eq!(app.source, sample_source(Language::Python));
        assert!(app.analysis.symbols.contains_function("report"));
        assert_eq!(app.status_message, "Switched to python");
    }

    #[test]
    fn test_language_switch_keeps_file_text() {
        let mut app = App::new(
            "x = 1 # note".to_string(),
            SourceOrigin::File(PathBuf::from("snippet.txt")),
            Language::CLike,
        );
        assert!(app
            .analysis
            .tokens
            .iter()
            .all(|t| t.kind() != crate::lexer::TokenKind::Comment));

        app.switch_language();
        assert_eq!(app.source, "x = 1 # note");
        assert_eq!(
            app.analysis.tokens.last().map(|t| t.text()),
            Some("# note")
        );
    }

    #[test]
    fn test_scroll_keys_target_focused_pane() {
        let mut app = App::with_sample(Language::Python);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.token_scroll.offset, PAGE + 1);
        assert_eq!(app.source_scroll.offset, 0);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.token_scroll.offset, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.token_scroll.offset, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::with_sample(Language::CLike);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_full_layout() {
        let mut app = App::with_sample(Language::CLike);
        press(&mut app, KeyCode::End);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
        }
        assert!(screen.contains("Sample (c-like)"));
        assert!(screen.contains("Legend"));
        assert!(screen.contains("Functions (3)"));
        assert!(screen.contains(" c-like "));
        // End scrolled the source pane; rendering clamped it to the last page.
        assert!(app.source_scroll.offset > 0);
        assert!(app.source_scroll.offset < usize::MAX);
    }
}

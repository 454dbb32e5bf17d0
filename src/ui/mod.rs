//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is the presentation side of the pipeline: it receives an
//! [`Analysis`] and renders it, and never feeds anything back into the lexer
//! or the extractor.
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, language switch
//! - **[`panes`]**: render functions for each visible pane (source, tokens,
//!   symbols, legend, status bar)
//! - **[`samples`]**: built-in programs shown when no file is given
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`Analysis`]: crate::Analysis

pub mod app;
pub mod panes;
pub mod samples;
pub mod theme;

pub use app::{App, SourceOrigin};

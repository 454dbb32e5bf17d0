//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: source text highlighted from the token stream
//! - [`tokens`]: token table (kind and value per token)
//! - [`symbols`]: detected functions and variables
//! - [`legend`]: color legend for token kinds
//! - [`status`]: status bar with keybindings and counts
//! - `utils`: shared scroll helpers
//!
//! Each pane module exports a `render_*` function plus any scroll state it
//! keeps between frames. Panes are stateless otherwise.

mod utils;

pub mod legend;
pub mod source;
pub mod status;
pub mod symbols;
pub mod tokens;

pub use legend::render_legend_pane;
pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use symbols::{render_symbol_pane, SymbolScrollState};
pub use tokens::{render_token_pane, TokenScrollState};

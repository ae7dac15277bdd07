//! User interface layer
//!
//! Rendering of a table view plus the interactive terminal host.

pub mod actions;
pub mod badge;
pub mod key_mapper;
pub mod pagination;
pub mod table_render_context;
pub mod table_renderer;
pub mod tui_app;

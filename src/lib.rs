//! gogh-themes - Gogh terminal color themes for ratatui
//!
//! The catalog holds each theme as plain hex strings; [`theme`] converts them
//! into [`ratatui::style::Color`] values. The [`tui`] module is an interactive
//! demo that cycles through and searches the catalog.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod error;
pub mod theme;
pub mod tui;

pub use error::{Result, ThemeError};
pub use theme::Theme;

//! Terminal User Interface module
//!
//! The ratatui-based theme demo: a main view showing the active theme and a
//! picker for searching the catalog by name.

pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod spinner;
pub mod state;
pub mod ui;

pub use app::App;

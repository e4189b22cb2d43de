//! Core functionality for gogh-themes
//!
//! Shared pieces used by both the CLI and the TUI:
//! - Application configuration

pub mod config;

pub use config::Config;

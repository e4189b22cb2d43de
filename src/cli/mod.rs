//! CLI module
//!
//! Command-line interface for non-interactive use.

pub mod commands;
pub mod config;
pub mod themes;

pub use commands::{Cli, Commands};

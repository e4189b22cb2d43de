//! CLI command definitions using clap
//!
//! Defines the command structure for the `gogh-themes` tool.

use clap::{Parser, Subcommand, ValueEnum};

/// gogh-themes - Gogh terminal themes for ratatui
///
/// Run without arguments to launch the interactive theme demo.
#[derive(Parser, Debug)]
#[command(name = "gogh-themes", version, about, long_about = None)]
pub struct Cli {
    /// Theme to start the demo with (overrides the configured theme)
    #[arg(long, short)]
    pub theme: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List theme names
    List {
        /// Only show names containing this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Show the colors of one theme
    Show {
        /// Theme name (case-sensitive)
        name: String,

        /// Print the raw catalog entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },
    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
    /// Print the configuration file location
    Path,
}

/// Available configuration keys
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigKey {
    /// Theme the demo starts with
    Theme,
    /// Spinner tick rate in milliseconds
    TickRate,
}

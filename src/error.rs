//! Custom error types for gogh-themes
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the gogh-themes application
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme name not present in the catalog
    #[error("Theme '{0}' does not exist.\n\n  → Run 'gogh-themes list' to see available themes (names are case-sensitive).")]
    ThemeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A key binding in the configuration could not be understood
    #[error("Unknown key '{key}' bound to '{action}'.\n\n  → Use names like 'q', 'ctrl+c', 'up', 'enter' or 'esc'.")]
    InvalidKeyBinding { action: String, key: String },

    /// A required action was left without a usable key
    #[error("'{action}' {reason}.\n\n  → Add a key for it under [keys] in the config file.")]
    MissingKeyBinding {
        action: String,
        reason: &'static str,
    },

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to encode theme: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(err: toml::ser::Error) -> Self {
        ThemeError::Toml(err.to_string())
    }
}

/// Result type alias using ThemeError
pub type Result<T> = std::result::Result<T, ThemeError>;

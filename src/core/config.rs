//! Application configuration management
//!
//! Handles loading and saving user preferences:
//! - Theme the demo starts with
//! - Spinner tick rate
//! - Key bindings for every demo action

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Theme selected when nothing else is configured
pub const DEFAULT_THEME: &str = "Dracula";

/// Key lists for each demo action.
///
/// Keys are written the way they are typed: `"q"`, `"/"`, `"ctrl+c"`,
/// `"up"`, `"enter"`, `"esc"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub quit: Vec<String>,
    pub cycle_theme: Vec<String>,
    pub open_picker: Vec<String>,
    pub picker_up: Vec<String>,
    pub picker_down: Vec<String>,
    pub picker_select: Vec<String>,
    pub picker_cancel: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "ctrl+c"]),
            cycle_theme: keys(&["t"]),
            open_picker: keys(&["/"]),
            picker_up: keys(&["up", "ctrl+p"]),
            picker_down: keys(&["down", "ctrl+n"]),
            picker_select: keys(&["enter"]),
            picker_cancel: keys(&["esc"]),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme shown when the demo starts
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Spinner animation interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Key bindings
    #[serde(default)]
    pub keys: KeyConfig,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_tick_rate() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate(),
            keys: KeyConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "gogh-themes", "gogh-themes")
            .ok_or_else(|| ThemeError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Apply a `--theme` flag; it wins over the saved theme
    pub fn with_theme_override(mut self, theme: Option<String>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    /// Set the startup theme, rejecting names the catalog does not know
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        if crate::catalog::get(name).is_none() {
            return Err(ThemeError::ThemeNotFound(name.to_string()));
        }
        self.theme = name.to_string();
        Ok(())
    }

    /// Set the spinner tick rate
    pub fn set_tick_rate(&mut self, value: &str) -> Result<()> {
        let ms: u64 = value.parse().map_err(|_| {
            ThemeError::InvalidInput(format!(
                "Invalid tick rate '{}'. Expected a number of milliseconds.",
                value
            ))
        })?;
        if ms == 0 {
            return Err(ThemeError::InvalidInput(
                "Tick rate must be at least 1 millisecond.".into(),
            ));
        }
        self.tick_rate_ms = ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Dracula");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.keys.quit, vec!["q", "ctrl+c"]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_theme("Nord").unwrap();
        config.set_tick_rate("250").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "Nord");
        assert_eq!(loaded.tick_rate_ms, 250);
        assert_eq!(loaded.keys, KeyConfig::default());
    }

    #[test]
    fn test_partial_keys_table_keeps_other_defaults() {
        let config: Config = toml::from_str("[keys]\nquit = [\"x\"]\n").unwrap();
        assert_eq!(config.keys.quit, vec!["x"]);
        assert_eq!(config.keys.cycle_theme, vec!["t"]);
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ThemeError::Toml(_))));
    }

    #[test]
    fn test_set_theme_rejects_unknown() {
        let mut config = Config::default();
        assert!(matches!(
            config.set_theme("dracula"),
            Err(ThemeError::ThemeNotFound(_))
        ));
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_set_tick_rate_validation() {
        let mut config = Config::default();
        assert!(config.set_tick_rate("abc").is_err());
        assert!(config.set_tick_rate("0").is_err());
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_startup_theme_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap().with_theme_override(None);
        assert_eq!(config.theme, "Dracula");

        fs::write(&path, "theme = \"Nord\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.clone().with_theme_override(None).theme, "Nord");
        assert_eq!(
            config.with_theme_override(Some("Zenburn".to_string())).theme,
            "Zenburn"
        );
    }
}

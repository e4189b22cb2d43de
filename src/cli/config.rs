//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, DEFAULT_THEME};
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;
    match key {
        ConfigKey::Theme => {
            config.set_theme(&value)?;
            config.save()?;
            println!("Startup theme set to: {}", config.theme);
        }
        ConfigKey::TickRate => {
            config.set_tick_rate(&value)?;
            config.save()?;
            println!("Tick rate set to: {} ms", config.tick_rate_ms);
        }
    }
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;
    match key {
        ConfigKey::Theme => println!("Startup theme: {}", config.theme),
        ConfigKey::TickRate => println!("Tick rate: {} ms", config.tick_rate_ms),
    }
    Ok(())
}

/// Handle resetting a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    let mut config = Config::load()?;
    let defaults = Config::default();
    match key {
        ConfigKey::Theme => {
            config.theme = defaults.theme;
            config.save()?;
            println!("Startup theme reset to default: {}", DEFAULT_THEME);
        }
        ConfigKey::TickRate => {
            config.tick_rate_ms = defaults.tick_rate_ms;
            config.save()?;
            println!("Tick rate reset to default: {} ms", config.tick_rate_ms);
        }
    }
    Ok(())
}

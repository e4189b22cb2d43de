//! Theme listing and inspection handlers

use crossterm::style::{Color as TermColor, Stylize};
use ratatui::style::Color;

use crate::catalog::{self, RawTheme};
use crate::error::{Result, ThemeError};
use crate::theme::{self, Theme};
use crate::tui::state::filter_names;

/// Handle `list`
pub fn handle_list(filter: Option<String>) -> Result<()> {
    for name in list_names(filter.as_deref()) {
        println!("{}", name);
    }
    Ok(())
}

/// Catalog names, narrowed the same way the picker narrows them
pub fn list_names(filter: Option<&str>) -> Vec<String> {
    let names: Vec<String> = theme::names().into_iter().map(String::from).collect();
    match filter {
        Some(query) => filter_names(&names, query),
        None => names,
    }
}

/// Handle `show`
pub fn handle_show(name: &str, json: bool) -> Result<()> {
    let raw = catalog::get(name).ok_or_else(|| ThemeError::ThemeNotFound(name.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(raw)?);
        return Ok(());
    }

    let theme = Theme::from(raw);
    println!("{}", theme.name.as_str().bold());
    for ((slot, color), (_, value)) in theme.slots().iter().zip(slot_values(raw)) {
        println!("  {} {:<15} {}", swatch(*color), slot, value);
    }
    Ok(())
}

/// Slot names and raw values, in the same order as [`Theme::slots`]
pub fn slot_values(raw: &RawTheme) -> [(&'static str, &str); 18] {
    [
        ("background", raw.background.as_str()),
        ("foreground", raw.foreground.as_str()),
        ("black", raw.normal.black.as_str()),
        ("red", raw.normal.red.as_str()),
        ("green", raw.normal.green.as_str()),
        ("yellow", raw.normal.yellow.as_str()),
        ("blue", raw.normal.blue.as_str()),
        ("magenta", raw.normal.magenta.as_str()),
        ("cyan", raw.normal.cyan.as_str()),
        ("white", raw.normal.white.as_str()),
        ("bright_black", raw.bright.black.as_str()),
        ("bright_red", raw.bright.red.as_str()),
        ("bright_green", raw.bright.green.as_str()),
        ("bright_yellow", raw.bright.yellow.as_str()),
        ("bright_blue", raw.bright.blue.as_str()),
        ("bright_magenta", raw.bright.magenta.as_str()),
        ("bright_cyan", raw.bright.cyan.as_str()),
        ("bright_white", raw.bright.white.as_str()),
    ]
}

/// A colored block for terminals with true color; blank otherwise
fn swatch(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => "    ".on(TermColor::Rgb { r, g, b }).to_string(),
        _ => "    ".to_string(),
    }
}

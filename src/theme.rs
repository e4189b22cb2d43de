//! Catalog themes as ratatui colors
//!
//! Every field of [`Theme`] is a [`ratatui::style::Color`], ready to drop into a
//! style:
//!
//! ```
//! use ratatui::style::Style;
//!
//! let theme = gogh_themes::theme::get("Dracula").unwrap();
//! let style = Style::default().fg(theme.blue).bg(theme.background);
//! # let _ = style;
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use ratatui::style::Color;

use crate::catalog::{self, RawTheme};

/// A catalog theme with all 18 slots converted for ratatui
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,

    // ANSI 0-7
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,

    // ANSI 8-15
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_magenta: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl Theme {
    /// The 16 ANSI colors in terminal order (0-15)
    pub fn palette(&self) -> [Color; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_magenta,
            self.bright_cyan,
            self.bright_white,
        ]
    }

    /// All 18 slots with their names, background and foreground first
    pub fn slots(&self) -> [(&'static str, Color); 18] {
        let p = self.palette();
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("black", p[0]),
            ("red", p[1]),
            ("green", p[2]),
            ("yellow", p[3]),
            ("blue", p[4]),
            ("magenta", p[5]),
            ("cyan", p[6]),
            ("white", p[7]),
            ("bright_black", p[8]),
            ("bright_red", p[9]),
            ("bright_green", p[10]),
            ("bright_yellow", p[11]),
            ("bright_blue", p[12]),
            ("bright_magenta", p[13]),
            ("bright_cyan", p[14]),
            ("bright_white", p[15]),
        ]
    }
}

impl From<&RawTheme> for Theme {
    fn from(raw: &RawTheme) -> Self {
        from_raw(raw)
    }
}

/// Convert one raw catalog value.
///
/// Values are not validated: anything ratatui cannot read becomes
/// [`Color::Reset`] and renders in the terminal's default color.
fn color(value: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::debug!("Unrecognised color value {:?}, using terminal default", value);
        Color::Reset
    })
}

/// Convert a raw catalog theme, slot for slot
pub fn from_raw(raw: &RawTheme) -> Theme {
    Theme {
        name: raw.name.clone(),
        background: color(&raw.background),
        foreground: color(&raw.foreground),

        black: color(&raw.normal.black),
        red: color(&raw.normal.red),
        green: color(&raw.normal.green),
        yellow: color(&raw.normal.yellow),
        blue: color(&raw.normal.blue),
        magenta: color(&raw.normal.magenta),
        cyan: color(&raw.normal.cyan),
        white: color(&raw.normal.white),

        bright_black: color(&raw.bright.black),
        bright_red: color(&raw.bright.red),
        bright_green: color(&raw.bright.green),
        bright_yellow: color(&raw.bright.yellow),
        bright_blue: color(&raw.bright.blue),
        bright_magenta: color(&raw.bright.magenta),
        bright_cyan: color(&raw.bright.cyan),
        bright_white: color(&raw.bright.white),
    }
}

/// Every catalog theme, converted
pub fn all() -> HashMap<String, Theme> {
    catalog::all()
        .into_values()
        .map(|raw| (raw.name.clone(), from_raw(raw)))
        .collect()
}

/// Look up and convert a theme by exact (case-sensitive) name
pub fn get(name: &str) -> Option<Theme> {
    catalog::get(name).map(from_raw)
}

/// All theme names, sorted ascending
pub fn names() -> Vec<&'static str> {
    catalog::names()
}

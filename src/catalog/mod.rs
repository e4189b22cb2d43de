//! Raw theme catalog
//!
//! A curated subset of the Gogh themes (not the full collection) as plain
//! hex strings, embedded at compile time from `themes.toml` and parsed once
//! on first access. Adding a theme only needs a new `[[theme]]` entry. Nothing in here knows
//! about any rendering library; see [`crate::theme`] for the ratatui view.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Embedded catalog source
const CATALOG_TOML: &str = include_str!("themes.toml");

/// The eight ANSI colors of one intensity (normal or bright)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiColors {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
}

/// A theme exactly as it appears in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTheme {
    /// Unique, case-sensitive theme name
    pub name: String,
    pub background: String,
    pub foreground: String,
    /// ANSI colors 0-7
    pub normal: AnsiColors,
    /// ANSI colors 8-15
    pub bright: AnsiColors,
}

#[derive(Deserialize)]
struct CatalogFile {
    theme: Vec<RawTheme>,
}

struct Catalog {
    /// Sorted by name
    themes: Vec<RawTheme>,
    index: HashMap<String, usize>,
}

impl Catalog {
    fn parse(source: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: CatalogFile = toml::from_str(source)?;
        let mut themes = file.theme;
        themes.sort_by(|a, b| a.name.cmp(&b.name));

        let index = themes
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();

        Ok(Self { themes, index })
    }
}

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::parse(CATALOG_TOML).expect("embedded theme catalog is valid"));

/// All catalog entries keyed by name
pub fn all() -> HashMap<&'static str, &'static RawTheme> {
    CATALOG
        .themes
        .iter()
        .map(|t| (t.name.as_str(), t))
        .collect()
}

/// Look up a theme by exact (case-sensitive) name
pub fn get(name: &str) -> Option<&'static RawTheme> {
    CATALOG.index.get(name).map(|&i| &CATALOG.themes[i])
}

/// All theme names, sorted ascending
pub fn names() -> Vec<&'static str> {
    CATALOG.themes.iter().map(|t| t.name.as_str()).collect()
}

/// Number of themes in the catalog
pub fn len() -> usize {
    CATALOG.themes.len()
}

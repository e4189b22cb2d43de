//! Demo state and the reducer that drives it
//!
//! [`reduce`] is the whole state machine: it takes the current [`AppState`]
//! and one [`AppEvent`] and returns the next state. It does no I/O, so the
//! picker can be exercised without a terminal.

use crossterm::event::KeyEvent;

use crate::core::config::DEFAULT_THEME;
use crate::error::{Result, ThemeError};
use crate::theme::{self, Theme};
use crate::tui::event::AppEvent;
use crate::tui::input::TextInput;
use crate::tui::keymap::{Action, KeyMap};
use crate::tui::spinner::Spinner;

/// Placeholder shown in the empty filter field
const FILTER_PLACEHOLDER: &str = "Search themes...";

/// Maximum filter length in characters
const FILTER_CHAR_LIMIT: usize = 50;

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Spinner, sample status lines and the active theme
    Main,
    /// Incremental search over all theme names
    Picker,
}

/// Everything the demo knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// All theme names in catalog order, fixed after startup
    pub all_names: Vec<String>,
    /// Index of the active theme in `all_names`
    pub active_index: usize,
    /// Colors of the active theme
    pub theme: Theme,

    pub mode: Mode,
    pub filter: TextInput,
    /// `all_names` narrowed by the filter text
    pub filtered: Vec<String>,
    /// Highlighted row in `filtered`
    pub selected: usize,

    pub spinner: Spinner,
    pub quitting: bool,
}

impl AppState {
    /// State over the full catalog, starting on `initial`.
    ///
    /// Unknown initial names fall back to the default theme.
    pub fn new(initial: &str) -> Result<Self> {
        let names = theme::names().into_iter().map(String::from).collect();
        Self::with_names(names, initial)
    }

    /// State over an explicit name list
    pub fn with_names(all_names: Vec<String>, initial: &str) -> Result<Self> {
        if all_names.is_empty() {
            return Err(ThemeError::Config("The theme catalog is empty".into()));
        }

        let active_index = match all_names.iter().position(|n| n == initial) {
            Some(i) => i,
            None => {
                tracing::warn!(
                    "Theme '{}' not found, starting with '{}'",
                    initial,
                    DEFAULT_THEME
                );
                all_names
                    .iter()
                    .position(|n| n == DEFAULT_THEME)
                    .unwrap_or(0)
            }
        };

        let name = &all_names[active_index];
        let theme = theme::get(name).ok_or_else(|| ThemeError::ThemeNotFound(name.clone()))?;

        Ok(Self {
            filtered: all_names.clone(),
            all_names,
            active_index,
            theme,
            mode: Mode::Main,
            filter: TextInput::new(FILTER_PLACEHOLDER, FILTER_CHAR_LIMIT),
            selected: 0,
            spinner: Spinner::default(),
            quitting: false,
        })
    }

    /// Name of the active theme
    pub fn active_name(&self) -> &str {
        &self.all_names[self.active_index]
    }

    pub fn picker_open(&self) -> bool {
        self.mode == Mode::Picker
    }

    /// Advance to the next theme, wrapping at the end of the catalog
    fn cycle_theme(&mut self) {
        self.active_index = (self.active_index + 1) % self.all_names.len();
        match theme::get(&self.all_names[self.active_index]) {
            Some(theme) => self.theme = theme,
            None => tracing::debug!("No colors for '{}'", self.all_names[self.active_index]),
        }
    }

    /// Make `name` the active theme. Names the catalog does not know are
    /// ignored and leave the state untouched.
    fn select_theme(&mut self, name: &str) {
        let Some(theme) = theme::get(name) else {
            tracing::debug!("Ignoring selection of unknown theme '{}'", name);
            return;
        };
        self.theme = theme;

        if let Some(i) = self.all_names.iter().position(|n| n == name) {
            self.active_index = i;
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_names(&self.all_names, self.filter.value());
    }

    fn open_picker(&mut self) {
        self.mode = Mode::Picker;
        self.filter.reset();
        self.filter.focus();
        self.refilter();
        self.selected = 0;
    }

    fn close_picker(&mut self) {
        self.mode = Mode::Main;
        self.filter.reset();
        self.filter.blur();
        self.refilter();
        self.selected = 0;
    }

    fn commit_selection(&mut self) {
        if let Some(name) = self.filtered.get(self.selected).cloned() {
            self.select_theme(&name);
        }
        self.close_picker();
    }

    fn handle_main_key(&mut self, key: KeyEvent, keymap: &KeyMap) {
        if keymap.matches(Action::Quit, &key) {
            self.quitting = true;
        } else if keymap.matches(Action::CycleTheme, &key) {
            self.cycle_theme();
        } else if keymap.matches(Action::OpenPicker, &key) {
            self.open_picker();
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent, keymap: &KeyMap) {
        // Printable quit keys like 'q' are filter text here
        if keymap.matches_non_printable(Action::Quit, &key) {
            self.quitting = true;
        } else if keymap.matches(Action::PickerCancel, &key) {
            self.close_picker();
        } else if keymap.matches(Action::PickerSelect, &key) {
            self.commit_selection();
        } else if keymap.matches(Action::PickerUp, &key) {
            self.selected = self.selected.saturating_sub(1);
        } else if keymap.matches(Action::PickerDown, &key) {
            if self.selected + 1 < self.filtered.len() {
                self.selected += 1;
            }
        } else if self.filter.handle_key(key) {
            self.refilter();
            self.selected = 0;
        }
    }
}

/// Names whose lowercase form contains the lowercase query.
///
/// An empty query keeps every name. Order is preserved.
pub fn filter_names(names: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return names.to_vec();
    }
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Apply one event to the state
pub fn reduce(mut state: AppState, event: AppEvent, keymap: &KeyMap) -> AppState {
    match event {
        AppEvent::Key(key) => match state.mode {
            Mode::Main => state.handle_main_key(key, keymap),
            Mode::Picker => state.handle_picker_key(key, keymap),
        },
        // Layout follows the frame area, so the next draw picks up the new size
        AppEvent::Resize(..) => {}
        AppEvent::Tick => state.spinner.tick(),
    }
    state
}

//! Key bindings for the demo
//!
//! Maps each logical [`Action`] to the keys that trigger it. The map is built
//! from [`KeyConfig`] and handed to the reducer, so nothing here is global.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::config::KeyConfig;
use crate::error::{Result, ThemeError};

/// Things a key press can ask the demo to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    CycleTheme,
    OpenPicker,
    PickerUp,
    PickerDown,
    PickerSelect,
    PickerCancel,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::Quit,
            Action::CycleTheme,
            Action::OpenPicker,
            Action::PickerUp,
            Action::PickerDown,
            Action::PickerSelect,
            Action::PickerCancel,
        ]
    }

    /// Short description shown in help lines
    pub fn help(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::CycleTheme => "cycle theme",
            Action::OpenPicker => "search themes",
            Action::PickerUp => "up",
            Action::PickerDown => "down",
            Action::PickerSelect => "select",
            Action::PickerCancel => "cancel",
        }
    }

    /// Name of the configuration entry holding this action's keys
    pub fn config_name(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::CycleTheme => "cycle_theme",
            Action::OpenPicker => "open_picker",
            Action::PickerUp => "picker_up",
            Action::PickerDown => "picker_down",
            Action::PickerSelect => "picker_select",
            Action::PickerCancel => "picker_cancel",
        }
    }

    fn configured_keys<'a>(&self, config: &'a KeyConfig) -> &'a [String] {
        match self {
            Action::Quit => &config.quit,
            Action::CycleTheme => &config.cycle_theme,
            Action::OpenPicker => &config.open_picker,
            Action::PickerUp => &config.picker_up,
            Action::PickerDown => &config.picker_down,
            Action::PickerSelect => &config.picker_select,
            Action::PickerCancel => &config.picker_cancel,
        }
    }
}

/// A single key with its modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    /// Parse a key such as `"q"`, `"ctrl+c"`, `"up"` or `"esc"`
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return None;
        }

        // "+" on its own, or as the last key after a modifier ("ctrl++")
        let (mods_part, key_part) = match spec.strip_suffix("++") {
            Some(mods) => (Some(mods), "+"),
            None if spec == "+" => (None, "+"),
            None => match spec.rsplit_once('+') {
                Some((mods, key)) => (Some(mods), key),
                None => (None, spec),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        if let Some(mods) = mods_part {
            for m in mods.split('+') {
                modifiers |= match m.to_lowercase().as_str() {
                    "ctrl" | "control" => KeyModifiers::CONTROL,
                    "alt" => KeyModifiers::ALT,
                    "shift" => KeyModifiers::SHIFT,
                    _ => return None,
                };
            }
        }

        let code = parse_key_code(key_part)?;
        Some(Self { code, modifiers })
    }

    /// Whether this key event is this pattern.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether to report it for symbols like `?` or `/`.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                key.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => key.modifiers == self.modifiers,
        }
    }

    /// Whether typing this key would insert text into an input field
    pub fn is_printable(&self) -> bool {
        matches!(self.code, KeyCode::Char(_))
            && !self
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    /// Label for help lines, e.g. `q`, `ctrl+c`, `↑`
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "shift+tab".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "del".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pgup".to_string(),
            KeyCode::PageDown => "pgdown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            other => format!("{:?}", other).to_lowercase(),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            label.push_str("shift+");
        }
        label.push_str(&key);
        label
    }
}

fn parse_key_code(key: &str) -> Option<KeyCode> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = key.to_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        _ => return None,
    };
    Some(code)
}

/// The keys bound to one action
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub action: Action,
    pub keys: Vec<KeyPattern>,
}

impl KeyBinding {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys.iter().any(|k| k.matches(key))
    }

    /// Label of the first bound key, or an empty string if unbound
    pub fn label(&self) -> String {
        self.keys.first().map(KeyPattern::label).unwrap_or_default()
    }
}

/// Action-to-keys table passed to the reducer
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl KeyMap {
    /// Build the key map from configuration
    pub fn from_config(config: &KeyConfig) -> Result<Self> {
        let bindings = Action::all()
            .iter()
            .map(|&action| -> Result<KeyBinding> {
                let keys = action
                    .configured_keys(config)
                    .iter()
                    .map(|spec| {
                        KeyPattern::parse(spec).ok_or_else(|| ThemeError::InvalidKeyBinding {
                            action: action.config_name().to_string(),
                            key: spec.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(KeyBinding { action, keys })
            })
            .collect::<Result<Vec<_>>>()?;

        let keymap = Self { bindings };
        keymap.check_escape_routes()?;
        Ok(keymap)
    }

    /// Both modes must keep a way out, or raw mode traps the user
    fn check_escape_routes(&self) -> Result<()> {
        for action in [Action::Quit, Action::PickerSelect, Action::PickerCancel] {
            if self.binding(action).keys.is_empty() {
                return Err(ThemeError::MissingKeyBinding {
                    action: action.config_name().to_string(),
                    reason: "needs at least one key",
                });
            }
        }
        // Printable quit keys are filter text while the picker is open
        if self.binding(Action::Quit).keys.iter().all(KeyPattern::is_printable) {
            return Err(ThemeError::MissingKeyBinding {
                action: Action::Quit.config_name().to_string(),
                reason: "needs a non-printable key such as 'ctrl+c'",
            });
        }
        Ok(())
    }

    pub fn binding(&self, action: Action) -> &KeyBinding {
        self.bindings
            .iter()
            .find(|b| b.action == action)
            .expect("every action has a binding")
    }

    /// Whether the key triggers the action
    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.binding(action).matches(key)
    }

    /// Whether the key triggers the action without being a typeable character
    pub fn matches_non_printable(&self, action: Action, key: &KeyEvent) -> bool {
        self.binding(action)
            .keys
            .iter()
            .any(|k| !k.is_printable() && k.matches(key))
    }

    /// `"<key>: <help>"` for the action's first key
    pub fn help_entry(&self, action: Action) -> String {
        let binding = self.binding(action);
        if binding.keys.is_empty() {
            return format!("unbound: {}", action.help());
        }
        format!("{}: {}", binding.label(), action.help())
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default()).expect("default key bindings are valid")
    }
}

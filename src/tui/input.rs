//! Single-line text input used for the picker filter

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable line of text with a cursor.
///
/// The cursor is a char index (not a byte index) into `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    pub placeholder: String,
    pub char_limit: usize,
}

impl TextInput {
    pub fn new(placeholder: &str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: placeholder.to_string(),
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Clear the text and move the cursor home
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Apply a key press. Returns true if the text changed.
    ///
    /// Unfocused inputs ignore everything.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        let before = self.value.len();

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let idx = self.byte_index(self.cursor);
                self.value.replace_range(..idx, "");
                self.cursor = 0;
                return idx > 0;
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.len();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let idx = self.byte_index(self.cursor - 1);
                    self.value.remove(idx);
                    self.cursor -= 1;
                    return true;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    let idx = self.byte_index(self.cursor);
                    self.value.remove(idx);
                    return true;
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }

        self.value.len() != before
    }

    /// Text before the cursor, the char under it, and text after it
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let idx = self.byte_index(self.cursor);
        let (head, rest) = self.value.split_at(idx);
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => (head, Some(c), chars.as_str()),
            None => (head, None, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    fn focused() -> TextInput {
        let mut input = TextInput::new("Search themes...", 50);
        input.focus();
        input
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = TextInput::new("", 50);
        assert!(!press(&mut input, KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = focused();
        type_str(&mut input, "drac");
        assert_eq!(input.value(), "drac");
        assert_eq!(input.cursor(), 4);

        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "dra");

        press(&mut input, KeyCode::Home);
        assert!(!press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "dra");
    }

    #[test]
    fn test_cursor_movement_does_not_change_value() {
        let mut input = focused();
        type_str(&mut input, "nord");
        assert!(!press(&mut input, KeyCode::Left));
        assert!(!press(&mut input, KeyCode::Left));
        assert_eq!(input.cursor(), 2);
        type_str(&mut input, "X");
        assert_eq!(input.value(), "noXrd");

        press(&mut input, KeyCode::End);
        assert!(!press(&mut input, KeyCode::Right));
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = focused();
        type_str(&mut input, "abc");
        press(&mut input, KeyCode::Home);
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "bc");
        press(&mut input, KeyCode::End);
        assert!(!press(&mut input, KeyCode::Delete));
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new("", 3);
        input.focus();
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = focused();
        type_str(&mut input, "rosé");
        assert_eq!(input.cursor(), 4);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "ros");
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut input = focused();
        type_str(&mut input, "gruvbox");
        press(&mut input, KeyCode::Left);
        let changed = input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(changed);
        assert_eq!(input.value(), "x");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let mut input = focused();
        let changed = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!changed);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = focused();
        type_str(&mut input, "abc");
        assert_eq!(input.split_at_cursor(), ("abc", None, ""));
        press(&mut input, KeyCode::Left);
        assert_eq!(input.split_at_cursor(), ("ab", Some('c'), ""));
    }
}

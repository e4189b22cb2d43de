//! Main UI renderer
//!
//! Rendering reads the state and draws; it never changes anything.

use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::theme::Theme;
use crate::tui::input::TextInput;
use crate::tui::keymap::{Action, KeyMap};
use crate::tui::state::{AppState, Mode};

/// Rows of the picker list visible at once
pub const PICKER_ROWS: usize = 10;

const MAIN_BOX_WIDTH: u16 = 60;
const PICKER_BOX_WIDTH: u16 = 50;

/// Separator between help entries
const HELP_SEPARATOR: &str = "  •  ";

/// Render the UI
pub fn render(frame: &mut Frame, state: &AppState, keymap: &KeyMap) {
    match state.mode {
        Mode::Main => render_main(frame, frame.area(), state, keymap),
        Mode::Picker => render_picker(frame, frame.area(), state, keymap),
    }
}

/// Slice of the filtered list to show, keeping `selected` on screen.
///
/// The window starts at the selection and slides back only when fewer than
/// `PICKER_ROWS` names follow it, never before the first name.
pub fn picker_window(selected: usize, len: usize) -> Range<usize> {
    let start = selected.min(len.saturating_sub(PICKER_ROWS));
    start..(start + PICKER_ROWS).min(len)
}

/// Help line for the main view
pub fn main_help(keymap: &KeyMap) -> String {
    [Action::CycleTheme, Action::OpenPicker, Action::Quit]
        .iter()
        .map(|&a| keymap.help_entry(a))
        .collect::<Vec<_>>()
        .join(HELP_SEPARATOR)
}

/// Help line for the picker
pub fn picker_help(keymap: &KeyMap) -> String {
    [
        format!(
            "{}/{}: navigate",
            keymap.binding(Action::PickerUp).label(),
            keymap.binding(Action::PickerDown).label()
        ),
        keymap.help_entry(Action::PickerSelect),
        keymap.help_entry(Action::PickerCancel),
    ]
    .join(HELP_SEPARATOR)
}

/// Rounded, padded box bordered in the theme's magenta
fn themed_box(theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.magenta))
        .padding(Padding::symmetric(2, 1))
}

/// Split `area` into blank line, heading, box and help rows
fn page_layout(area: Rect, box_height: u16) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Spacer
            Constraint::Length(3),          // Heading
            Constraint::Length(box_height), // Box
            Constraint::Length(3),          // Help
            Constraint::Min(0),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn render_heading(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let heading = Paragraph::new(text.to_string())
        .style(
            Style::default()
                .fg(theme.bright_blue)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(heading, area);
}

fn render_help(frame: &mut Frame, area: Rect, text: String, theme: &Theme) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(theme.bright_black))
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(help, area);
}

/// Body of the main view box
pub fn main_lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;

    let theme_info = format!(
        " Current Theme: {} ({}/{}) ",
        state.active_name(),
        state.active_index + 1,
        state.all_names.len()
    );

    vec![
        Line::styled("Powered by gogh-themes/ratatui", Style::default().fg(theme.cyan)),
        Line::default(),
        Line::from(vec![
            Span::styled(
                state.spinner.frame(),
                Style::default().fg(theme.bright_magenta),
            ),
            Span::raw("  Loading with style..."),
        ]),
        Line::default(),
        Line::styled(
            "[OK] Themes working perfectly",
            Style::default().fg(theme.bright_green),
        ),
        Line::styled(
            "[ERROR] This would be an error",
            Style::default()
                .fg(theme.bright_red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "[WARN] This would be a warning",
            Style::default().fg(theme.bright_yellow),
        ),
        Line::default(),
        Line::styled(
            theme_info,
            Style::default().fg(theme.bright_cyan).bg(theme.background),
        ),
    ]
}

fn render_main(frame: &mut Frame, area: Rect, state: &AppState, keymap: &KeyMap) {
    let lines = main_lines(state);
    // Content plus vertical padding and borders
    let box_height = lines.len() as u16 + 4;
    let [_, heading, body, help] = page_layout(area, box_height);

    render_heading(frame, heading, "Gogh Theme Demo", &state.theme);

    let body = Rect {
        width: body.width.min(MAIN_BOX_WIDTH),
        ..body
    };
    frame.render_widget(
        Paragraph::new(lines).block(themed_box(&state.theme)),
        body,
    );

    render_help(frame, help, main_help(keymap), &state.theme);
}

/// Filter field: prompt, text (or placeholder) and a block cursor when focused
pub fn input_line(input: &TextInput, theme: &Theme) -> Line<'static> {
    let prompt = Span::styled("> ", Style::default().fg(theme.magenta));
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let text_style = Style::default().fg(theme.foreground);

    if input.value().is_empty() {
        let placeholder_style = Style::default().fg(theme.bright_black);
        let mut chars = input.placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_else(|| " ".into());
        let rest: String = chars.collect();

        return if input.is_focused() {
            Line::from(vec![
                prompt,
                Span::styled(first, placeholder_style.patch(cursor_style)),
                Span::styled(rest, placeholder_style),
            ])
        } else {
            Line::from(vec![
                prompt,
                Span::styled(input.placeholder.clone(), placeholder_style),
            ])
        };
    }

    if !input.is_focused() {
        return Line::from(vec![
            prompt,
            Span::styled(input.value().to_string(), text_style),
        ]);
    }

    let (head, at, tail) = input.split_at_cursor();
    let at = at.map(String::from).unwrap_or_else(|| " ".into());
    Line::from(vec![
        prompt,
        Span::styled(head.to_string(), text_style),
        Span::styled(at, text_style.patch(cursor_style)),
        Span::styled(tail.to_string(), text_style),
    ])
}

/// Body of the picker box
pub fn picker_lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let selected_style = Style::default()
        .fg(theme.bright_green)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    let normal_style = Style::default().fg(theme.foreground);

    let mut lines = vec![
        input_line(&state.filter, theme),
        Line::default(),
        Line::raw(format!(
            "Showing {} of {} themes:",
            state.filtered.len(),
            state.all_names.len()
        )),
        Line::default(),
    ];

    for i in picker_window(state.selected, state.filtered.len()) {
        let name = &state.filtered[i];
        lines.push(if i == state.selected {
            Line::styled(format!("> {}", name), selected_style)
        } else {
            Line::styled(format!("  {}", name), normal_style)
        });
    }

    lines
}

fn render_picker(frame: &mut Frame, area: Rect, state: &AppState, keymap: &KeyMap) {
    let lines = picker_lines(state);
    let box_height = lines.len() as u16 + 4;
    let [_, heading, body, help] = page_layout(area, box_height);

    render_heading(frame, heading, "Theme Picker", &state.theme);

    let body = Rect {
        width: body.width.min(PICKER_BOX_WIDTH),
        ..body
    };
    frame.render_widget(
        Paragraph::new(lines).block(themed_box(&state.theme)),
        body,
    );

    render_help(frame, help, picker_help(keymap), &state.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::AppEvent;
    use crate::tui::state::reduce;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let keymap = KeyMap::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, state, &keymap))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(state: AppState, chars: &str) -> AppState {
        let keymap = KeyMap::default();
        chars.chars().fold(state, |s, c| {
            reduce(
                s,
                AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                &keymap,
            )
        })
    }

    #[test]
    fn test_picker_window() {
        // Short lists show everything
        assert_eq!(picker_window(0, 3), 0..3);
        assert_eq!(picker_window(2, 3), 0..3);
        assert_eq!(picker_window(0, 0), 0..0);

        // Window starts at the selection...
        assert_eq!(picker_window(0, 50), 0..10);
        assert_eq!(picker_window(5, 50), 5..15);

        // ...until it would run past the end
        assert_eq!(picker_window(45, 50), 40..50);
        assert_eq!(picker_window(49, 50), 40..50);
    }

    #[test]
    fn test_picker_window_contains_selection() {
        for len in 1..30 {
            for selected in 0..len {
                let window = picker_window(selected, len);
                assert!(window.contains(&selected));
                assert!(window.len() <= PICKER_ROWS);
            }
        }
    }

    #[test]
    fn test_help_lines() {
        let keymap = KeyMap::default();
        assert_eq!(
            main_help(&keymap),
            "t: cycle theme  •  /: search themes  •  q: quit"
        );
        assert_eq!(
            picker_help(&keymap),
            "↑/↓: navigate  •  enter: select  •  esc: cancel"
        );
    }

    #[test]
    fn test_render_main_view() {
        let state = AppState::new("Dracula").unwrap();
        let screen = draw(&state);

        assert!(screen.contains("Gogh Theme Demo"));
        assert!(screen.contains("[OK] Themes working perfectly"));
        assert!(screen.contains(&format!(
            "Current Theme: Dracula ({}/{})",
            state.active_index + 1,
            state.all_names.len()
        )));
        assert!(screen.contains("q: quit"));
        assert!(screen.contains('╭'));
    }

    #[test]
    fn test_render_picker_view() {
        let state = press(AppState::new("Dracula").unwrap(), "/nord");
        let screen = draw(&state);

        assert!(screen.contains("Theme Picker"));
        assert!(screen.contains("> nord"));
        assert!(screen.contains(&format!("Showing 2 of {} themes:", state.all_names.len())));
        assert!(screen.contains("> Nord"));
        assert!(screen.contains("  Nord Light"));
        assert!(screen.contains("esc: cancel"));
    }

    #[test]
    fn test_picker_shows_at_most_ten_rows() {
        let state = press(AppState::new("Dracula").unwrap(), "/");
        let lines = picker_lines(&state);
        assert_eq!(lines.len(), 4 + PICKER_ROWS.min(state.filtered.len()));
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let state = press(AppState::new("Dracula").unwrap(), "/");
        let line = input_line(&state.filter, &state.theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "> Search themes...");
    }

    #[test]
    fn test_selected_row_uses_theme_colors() {
        let state = press(AppState::new("Dracula").unwrap(), "/");
        let lines = picker_lines(&state);
        let selected = &lines[4];
        assert_eq!(selected.style.fg, Some(state.theme.bright_green));
        assert_eq!(selected.style.bg, Some(state.theme.background));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let state = AppState::new("Dracula").unwrap();
        let keymap = KeyMap::default();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| render(frame, &state, &keymap))
            .unwrap();
    }
}

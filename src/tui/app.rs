//! Terminal shell around the demo state
//!
//! Owns the terminal and the event source; all decisions are made by
//! [`reduce`] and all drawing by [`ui::render`].

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::config::Config;
use crate::error::{Result, ThemeError};
use crate::tui::event::EventHandler;
use crate::tui::keymap::KeyMap;
use crate::tui::state::{reduce, AppState};
use crate::tui::ui;

/// The interactive theme demo
pub struct App {
    state: AppState,
    keymap: KeyMap,
    tick_rate: Duration,
}

impl App {
    /// Build the demo from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            state: AppState::new(&config.theme)?,
            keymap: KeyMap::from_config(&config.keys)?,
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
        })
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| ThemeError::Terminal(e.to_string()))?;
        undo_on_error(Self::enter_screen(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| ThemeError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| ThemeError::Terminal(e.to_string()))
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| ThemeError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| ThemeError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| ThemeError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the demo until a quit key is pressed
    pub async fn run(self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        // Restore even if the loop failed, then report the first error
        let restored = Self::restore_terminal(&mut terminal);
        result.and(restored)
    }

    async fn event_loop(self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let Self {
            mut state,
            keymap,
            tick_rate,
        } = self;
        let mut events = EventHandler::new(tick_rate);

        tracing::info!("Starting demo with theme '{}'", state.active_name());

        while !state.quitting {
            terminal
                .draw(|frame| ui::render(frame, &state, &keymap))
                .map_err(|e| ThemeError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(event) => state = reduce(state, event, &keymap),
                None => {
                    return Err(ThemeError::Terminal("Terminal event stream closed".into()));
                }
            }
        }

        tracing::info!("Quitting with theme '{}'", state.active_name());
        Ok(())
    }
}

/// Run `undo` when a half-finished setup step failed, keeping its error
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: Result<()> = undo_on_error(
            Err(ThemeError::Terminal("no alternate screen".into())),
            || undone.set(true),
        );
        assert!(undone.get());
        assert!(matches!(result, Err(ThemeError::Terminal(msg)) if msg == "no alternate screen"));
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);
        let result = undo_on_error(Ok(7), || undone.set(true));
        assert!(!undone.get());
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_new_rejects_unusable_key_config() {
        let mut config = Config::default();
        config.keys.quit = vec!["q".to_string()];
        assert!(matches!(
            App::new(&config),
            Err(ThemeError::MissingKeyBinding { .. })
        ));
    }
}

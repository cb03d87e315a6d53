//! Interactive fuzzy finder over the discovered repository list
//!
//! Runs a modal, single-threaded event loop: block on the next terminal
//! event, apply it to the session state, redraw. The UI renders to stderr
//! and key events come from the controlling terminal, so the finder works
//! even when stdout and stdin are captured by the shell wrapper's command
//! substitution.

pub mod error;
pub mod events;
pub mod render;
pub mod state;
pub mod theme;

pub use error::{FinderError, Result};
pub use theme::Theme;

use events::{EventResult, poll_and_handle};
use state::SessionState;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nucleo::{Config, Matcher};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stderr};
use std::time::Duration;

/// Outcome of a finder session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed a candidate
    Selected(String),
    /// The user cancelled without choosing; not an error
    Cancelled,
}

/// Interactive fuzzy finder
#[derive(Debug, Default)]
pub struct Finder {
    theme: Theme,
}

impl Finder {
    /// Create a finder with the given theme.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Setup terminal for the TUI, rendering on stderr
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after the TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run a selection session over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::TtyUnavailable`] when the controlling terminal
    /// cannot be opened — callers must not treat that like a cancellation —
    /// and [`FinderError::Io`] for terminal failures during the session.
    pub fn run(&self, items: Vec<String>) -> Result<Outcome> {
        // Key events are read from the controlling terminal, not the
        // possibly-redirected stdin. Probe /dev/tty up front so a missing
        // terminal surfaces as its own error instead of a dead session.
        File::open("/dev/tty").map_err(FinderError::TtyUnavailable)?;

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, items);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        items: Vec<String>,
    ) -> Result<Outcome> {
        let mut matcher = Matcher::new(Config::DEFAULT.match_paths());
        let mut state = SessionState::new(items);

        loop {
            terminal.draw(|frame| render::render(frame, &state, &self.theme))?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Confirm => state.confirm(),
                EventResult::Abort => state.abort(),
                EventResult::QueryChanged => state.refilter(&mut matcher),
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                break;
            }
        }

        if state.cancelled {
            return Ok(Outcome::Cancelled);
        }
        match state.selected {
            Some(item) => Ok(Outcome::Selected(item)),
            None => Ok(Outcome::Cancelled),
        }
    }
}

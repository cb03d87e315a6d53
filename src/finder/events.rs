//! Event handling for the finder
//!
//! Maps terminal events onto session state transitions. The mapping is a
//! pure function over a closed event set, so it can be exercised with
//! synthetic key events and no terminal.

use super::state::SessionState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The user confirmed the highlighted candidate
    Confirm,
    /// The user cancelled the session
    Abort,
    /// Query changed, needs re-filtering
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Apply one key event to the session state.
pub fn handle_key(state: &mut SessionState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Confirm,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('p' | 'k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('n' | 'j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Poll for the next terminal event and handle it.
///
/// # Errors
///
/// Returns an error if event polling or reading fails.
pub fn poll_and_handle(
    state: &mut SessionState,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> SessionState {
        SessionState::new(vec![
            "github.com/dsaiztc/dev".to_string(),
            "github.com/dsaiztc/dotfiles".to_string(),
            "github.com/apache/kafka".to_string(),
        ])
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_moves_cursor() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, plain(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_key(&mut state, ctrl('n')), EventResult::Continue);
        assert_eq!(state.cursor, 2);

        // Capped at the last row.
        handle_key(&mut state, plain(KeyCode::Down));
        assert_eq!(state.cursor, 2);

        assert_eq!(handle_key(&mut state, plain(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_key(&mut state, ctrl('p')), EventResult::Continue);
        assert_eq!(state.cursor, 0);

        // Floored at the first row.
        handle_key(&mut state, plain(KeyCode::Up));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_text_input_reports_query_changed() {
        let mut state = make_state();

        assert_eq!(
            handle_key(&mut state, plain(KeyCode::Char('d'))),
            EventResult::QueryChanged
        );
        assert_eq!(
            handle_key(&mut state, plain(KeyCode::Char('e'))),
            EventResult::QueryChanged
        );
        assert_eq!(state.query, "de");

        assert_eq!(
            handle_key(&mut state, plain(KeyCode::Backspace)),
            EventResult::QueryChanged
        );
        assert_eq!(state.query, "d");
    }

    #[test]
    fn test_backspace_on_empty_query_is_ignored() {
        let mut state = make_state();
        assert_eq!(
            handle_key(&mut state, plain(KeyCode::Backspace)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_cancel_keys_abort_regardless_of_prior_state() {
        for key in [plain(KeyCode::Esc), ctrl('c')] {
            let mut state = make_state();
            handle_key(&mut state, plain(KeyCode::Char('d')));
            handle_key(&mut state, plain(KeyCode::Down));

            assert_eq!(handle_key(&mut state, key), EventResult::Abort);
        }
    }

    #[test]
    fn test_enter_reports_confirm() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, plain(KeyCode::Enter)), EventResult::Confirm);
    }

    #[test]
    fn test_ctrl_u_clears_query() {
        let mut state = make_state();
        handle_key(&mut state, plain(KeyCode::Char('d')));
        handle_key(&mut state, plain(KeyCode::Char('e')));

        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::QueryChanged);
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut state = make_state();
        assert_eq!(
            handle_key(&mut state, plain(KeyCode::F(5))),
            EventResult::Ignored
        );
    }
}

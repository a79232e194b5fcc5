//! Keyboard input handling for TUI.
//!
//! # Keybindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `h` / Left | Focus panel to the left |
//! | `l` / Right | Focus panel to the right |
//! | `k` / Up | Focus panel above |
//! | `j` / Down | Focus panel below |
//! | `J` / PageDown | Next item / scroll response down |
//! | `K` / PageUp | Previous item / scroll response up |
//! | Enter | Open group / send request |
//! | `r` | Send the last request again |
//! | `q` / Esc / Ctrl+C | Exit TUI |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FetchJob};
use super::grid::Direction;

/// What a key asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Direction),
    Scroll(isize),
    Activate,
    Rerun,
    Quit,
}

/// Result of handling an input event.
#[derive(Debug)]
pub enum InputResult {
    /// Event was handled, continue running.
    Handled,
    /// Event was not handled (unknown key).
    NotHandled,
    /// A request was resolved and should be fetched.
    Fetch(FetchJob),
    /// User requested quit.
    Quit,
}

/// Map a key to an action.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('h') | KeyCode::Left => Action::Navigate(Direction::Left),
        KeyCode::Char('l') | KeyCode::Right => Action::Navigate(Direction::Right),
        KeyCode::Char('k') | KeyCode::Up => Action::Navigate(Direction::Up),
        KeyCode::Char('j') | KeyCode::Down => Action::Navigate(Direction::Down),
        KeyCode::Char('J') | KeyCode::PageDown => Action::Scroll(1),
        KeyCode::Char('K') | KeyCode::PageUp => Action::Scroll(-1),
        KeyCode::Enter => Action::Activate,
        KeyCode::Char('r') => Action::Rerun,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut App, event: Event) -> InputResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Resize(_, _) => InputResult::Handled, // Terminal resized, just redraw
        _ => InputResult::NotHandled,
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut App, key: KeyEvent) -> InputResult {
    let Some(action) = action_for(&key) else {
        return InputResult::NotHandled;
    };

    match action {
        Action::Navigate(direction) => app.navigate(direction),
        Action::Scroll(delta) => app.scroll_focused(delta),
        Action::Activate => {
            if let Some(job) = app.activate() {
                return InputResult::Fetch(job);
            }
        }
        Action::Rerun => {
            if let Some(job) = app.rerun() {
                return InputResult::Fetch(job);
            }
        }
        Action::Quit => {
            app.quit();
            return InputResult::Quit;
        }
    }

    InputResult::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse, Catalog};
    use crate::tui::panel::PanelKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let config = parse(
            r#"
endpoints:
  users:
    requests:
      list: { url: "http://localhost/users" }
"#,
        )
        .unwrap();
        App::new(Catalog::from_configs([config]))
    }

    #[test]
    fn test_vim_and_arrow_keys_agree() {
        let pairs = [
            (KeyCode::Char('h'), KeyCode::Left),
            (KeyCode::Char('l'), KeyCode::Right),
            (KeyCode::Char('k'), KeyCode::Up),
            (KeyCode::Char('j'), KeyCode::Down),
        ];
        for (vim, arrow) in pairs {
            assert_eq!(action_for(&key(vim)), action_for(&key(arrow)));
            assert!(action_for(&key(vim)).is_some());
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(&key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(&key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action_for(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_enter_on_request_yields_fetch() {
        let mut app = app();
        assert!(matches!(handle_key(&mut app, key(KeyCode::Char('l'))), InputResult::Handled));
        assert_eq!(app.focus(), PanelKind::Requests);

        match handle_key(&mut app, key(KeyCode::Enter)) {
            InputResult::Fetch(job) => assert_eq!(job.request.url, "http://localhost/users"),
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_not_handled() {
        let mut app = app();
        assert!(matches!(handle_key(&mut app, key(KeyCode::F(5))), InputResult::NotHandled));
    }

    #[test]
    fn test_quit_result() {
        let mut app = app();
        assert!(matches!(handle_event(&mut app, Event::Key(key(KeyCode::Esc))), InputResult::Quit));
        assert!(app.should_quit());
    }
}

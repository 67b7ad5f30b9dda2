use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::actions::Action;
use crate::state::State;

/// Map a terminal event to an action. `None` means quit.
pub fn handle_event(event: &Event, _state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => {
            // Windows reports releases too
            if key.kind == KeyEventKind::Release {
                return Some(Action::None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl {
                return match key.code {
                    KeyCode::Char('c') | KeyCode::Char('q') => None,
                    _ => Some(Action::None),
                };
            }

            let action = match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return None,
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::IncrementAmount,
                KeyCode::Char('-') | KeyCode::Left => Action::DecrementAmount,
                KeyCode::Char(c) if c.is_ascii_digit() => Action::AmountDigit(c as u8 - b'0'),
                KeyCode::Backspace => Action::AmountBackspace,
                KeyCode::Char('k') | KeyCode::Char('K') => Action::ToggleKidsOnly,
                KeyCode::Char('v') | KeyCode::Char('V') => Action::ToggleVegOnly,
                KeyCode::Char('r') | KeyCode::Char('R') => Action::Reroll,
                KeyCode::Up => Action::CursorUp,
                KeyCode::Down => Action::CursorDown,
                KeyCode::Char(' ') | KeyCode::Enter => Action::ToggleBought,
                _ => Action::None,
            };
            Some(action)
        }
        // Redraw on resize
        Event::Resize(_, _) => Some(Action::None),
        _ => Some(Action::None),
    }
}

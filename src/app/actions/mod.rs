mod selection;
mod shopping;

use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    IncrementAmount,
    DecrementAmount,
    AmountDigit(u8),
    AmountBackspace,
    ToggleKidsOnly,
    ToggleVegOnly,
    Reroll,
    CursorUp,
    CursorDown,
    ToggleBought,
    None,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ActionResult {
    Nothing,
    /// Selection changed, so the share link did too
    ShareChanged,
}

pub fn apply_action(state: &mut State, action: Action) -> ActionResult {
    match action {
        Action::IncrementAmount => selection::handle_increment(state),
        Action::DecrementAmount => selection::handle_decrement(state),
        Action::AmountDigit(d) => selection::handle_digit(state, d),
        Action::AmountBackspace => selection::handle_backspace(state),
        Action::ToggleKidsOnly => selection::handle_toggle_kids(state),
        Action::ToggleVegOnly => selection::handle_toggle_veg(state),
        Action::Reroll => selection::handle_reroll(state),
        Action::CursorUp => shopping::handle_cursor_up(state),
        Action::CursorDown => shopping::handle_cursor_down(state),
        Action::ToggleBought => shopping::handle_toggle_bought(state),
        Action::None => ActionResult::Nothing,
    }
}

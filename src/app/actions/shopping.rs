use crate::state::State;

use super::ActionResult;

pub fn handle_cursor_up(state: &mut State) -> ActionResult {
    state.cursor = state.cursor.saturating_sub(1);
    state.dirty = true;
    ActionResult::Nothing
}

pub fn handle_cursor_down(state: &mut State) -> ActionResult {
    let last = state.shopping.len().saturating_sub(1);
    state.cursor = (state.cursor + 1).min(last);
    state.dirty = true;
    ActionResult::Nothing
}

/// Flip the bought mark of the highlighted row
pub fn handle_toggle_bought(state: &mut State) -> ActionResult {
    if state.shopping.toggle(state.cursor).is_some() {
        state.dirty = true;
    }
    ActionResult::Nothing
}

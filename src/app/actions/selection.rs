use rl_base::share::new_seed;

use crate::infra::constants::MAX_AMOUNT;
use crate::state::{Change, State};

use super::ActionResult;

fn set_amount(state: &mut State, amount: usize) -> ActionResult {
    let amount = amount.min(MAX_AMOUNT);
    if amount == state.selection.amount {
        return ActionResult::Nothing;
    }
    state.selection.amount = amount;
    state.refresh(Change::Amount);
    ActionResult::ShareChanged
}

/// Handle IncrementAmount action. Not bounded by the eligible count: asking for
/// more dishes than exist yields an empty list.
pub fn handle_increment(state: &mut State) -> ActionResult {
    set_amount(state, state.selection.amount.saturating_add(1))
}

pub fn handle_decrement(state: &mut State) -> ActionResult {
    set_amount(state, state.selection.amount.saturating_sub(1))
}

/// Append a typed digit to the amount. Input that would pass MAX_AMOUNT is dropped.
pub fn handle_digit(state: &mut State, digit: u8) -> ActionResult {
    let typed = state.selection.amount.saturating_mul(10).saturating_add(usize::from(digit));
    if typed > MAX_AMOUNT {
        return ActionResult::Nothing;
    }
    set_amount(state, typed)
}

pub fn handle_backspace(state: &mut State) -> ActionResult {
    set_amount(state, state.selection.amount / 10)
}

pub fn handle_toggle_kids(state: &mut State) -> ActionResult {
    state.selection.filters.kids_only = !state.selection.filters.kids_only;
    state.refresh(Change::Filters);
    ActionResult::ShareChanged
}

pub fn handle_toggle_veg(state: &mut State) -> ActionResult {
    state.selection.filters.veg_only = !state.selection.filters.veg_only;
    state.refresh(Change::Filters);
    ActionResult::ShareChanged
}

pub fn handle_reroll(state: &mut State) -> ActionResult {
    state.selection.seed = new_seed();
    state.refresh(Change::Seed);
    ActionResult::ShareChanged
}

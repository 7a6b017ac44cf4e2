//! Fixed timestep spin orchestration
//!
//! One `tick` advances the game by a single timestep, applying the actions
//! requested from outside and driving the timed spin cycle:
//! `Idle -> Spinning -> Announcing -> Idle`. Because every mutation funnels
//! through here, only one cycle can ever be in flight and a winner drawn at
//! cycle start is always still in the pool when it commits.

use super::select;
use super::state::{GameState, SpinStatus};

/// Actions requested for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw text from the entry form, if submitted this tick
    pub add_name: Option<String>,
    /// Start the game
    pub start: bool,
    /// Request a spin
    pub spin: bool,
    /// Reset the game; overrides everything else this tick
    pub reset: bool,
}

/// Stage transition due this tick, decided before the store is touched
enum Step {
    None,
    Resolve,
    Commit,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
        return;
    }

    // Drive the in-flight cycle before accepting new actions, so a commit
    // and the next spin request can land on the same tick without overlap.
    let step = match &mut state.spin {
        SpinStatus::Idle => Step::None,
        SpinStatus::Spinning { ticks_left, .. } => {
            *ticks_left = ticks_left.saturating_sub(1);
            if *ticks_left == 0 { Step::Resolve } else { Step::None }
        }
        SpinStatus::Announcing { ticks_left, .. } => {
            *ticks_left = ticks_left.saturating_sub(1);
            if *ticks_left == 0 { Step::Commit } else { Step::None }
        }
    };
    match step {
        Step::Resolve => state.resolve_spin(),
        Step::Commit => state.commit_winner(),
        Step::None => {}
    }

    if input.start {
        state.start_game();
    }
    if let Some(name) = &input.add_name {
        state.add_participant(name);
    }
    if input.spin {
        request_spin(state);
    }

    state.time_ticks += 1;
}

/// Guard and start a spin cycle: draw the winner over the current pool
/// snapshot and fix it for the remainder of the cycle. Silently ignored if
/// the pool is empty, a cycle is in flight, or the quota is reached.
pub fn request_spin(state: &mut GameState) {
    if !state.can_spin() {
        return;
    }
    let index = select::pick_index(&mut state.rng, state.pool.len());
    state.begin_spin(index);
}

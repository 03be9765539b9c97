//! Discrete player inputs: jump, pause toggle, restart

use super::state::State;
use crate::consts::JUMP_SPEED;

/// Flap upward, unless that would cancel a collision bounce
pub fn jump(state: State) -> State {
    if !state.is_live() || state.invulnerable {
        return state;
    }
    State {
        velocity: JUMP_SPEED,
        ..state
    }
}

/// Flip the pause flag (inert once the run has ended)
pub fn toggle_pause(state: State) -> State {
    State {
        paused: !state.paused,
        ..state
    }
}

/// Fresh run from the initial snapshot, counting one more run
pub fn restart(state: &State, initial: &State) -> State {
    State {
        run_count: state.run_count + 1,
        ..initial.clone()
    }
}

//! Seeded input generator for headless runs
//!
//! Produces the same jump sequence for the same seed and state trajectory, so
//! a recorded autopilot run can be replayed exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::session::Event;
use crate::sim::State;

/// Simple flapper: aims for the next gap, with some random flaps mixed in
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    jump_chance: f64,
}

impl Autopilot {
    pub fn new(seed: u64, jump_chance: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jump_chance: if jump_chance.is_nan() {
                0.0
            } else {
                jump_chance.clamp(0.0, 1.0)
            },
        }
    }

    /// Input to send before the next clock period, if any
    pub fn next_input(&mut self, state: &State) -> Option<Event> {
        if !state.is_live() {
            return None;
        }

        // Always draw so the random stream stays aligned with the tick count
        let random_flap = self.rng.random_bool(self.jump_chance);

        let target = state
            .obstacles
            .iter()
            .find(|o| o.x + OBSTACLE_WIDTH >= AVATAR_X)
            .map(|o| o.gap_center - AVATAR_SIZE / 2.0)
            .filter(|y| y.is_finite())
            .unwrap_or(AVATAR_START_Y);

        let sinking_below = state.position < target && state.velocity <= 0.0;
        (sinking_below || random_flap).then_some(Event::Jump)
    }
}

//! Bonus and hazard pickups
//!
//! Each pickup periodically jumps to a fresh seeded position, drifts left in
//! between, and fires once when the avatar comes close enough.

use glam::Vec2;

use super::rng::{hash, random_in_range};
use super::state::State;
use crate::consts::*;

/// Which pickup an update applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Grants one extra life
    Bonus,
    /// Takes every remaining life
    Hazard,
}

impl PickupKind {
    fn period_ms(self) -> u64 {
        match self {
            PickupKind::Bonus => BONUS_PERIOD_MS,
            PickupKind::Hazard => HAZARD_PERIOD_MS,
        }
    }

    fn seed_offset(self) -> u32 {
        match self {
            PickupKind::Bonus => BONUS_SEED_OFFSET,
            PickupKind::Hazard => HAZARD_SEED_OFFSET,
        }
    }

    fn slot(self, state: &mut State) -> &mut Option<Vec2> {
        match self {
            PickupKind::Bonus => &mut state.bonus,
            PickupKind::Hazard => &mut state.hazard,
        }
    }
}

/// Seeded spawn point inside the playfield
pub fn relocation_point(kind: PickupKind, seed: u32) -> Vec2 {
    let seed = seed ^ kind.seed_offset();
    let y = random_in_range(PICKUP_RADIUS, PLAYFIELD_HEIGHT - PICKUP_RADIUS, seed);
    let x = random_in_range(PICKUP_MIN_X, PLAYFIELD_WIDTH, hash(seed));
    Vec2::new(x, y)
}

/// Relocate, drift, and apply the pickup's effect on contact
pub fn update(state: State, kind: PickupKind) -> State {
    if !state.is_live() {
        return state;
    }

    let mut next = state;
    let due = next.elapsed_ms > 0 && next.elapsed_ms % kind.period_ms() == 0;
    let seed = next.seed;
    let avatar = next.avatar_center();

    let slot = kind.slot(&mut next);
    if due {
        *slot = Some(relocation_point(kind, seed));
    } else if let Some(pos) = slot.as_mut() {
        pos.x -= PICKUP_SPEED;
        if pos.x + PICKUP_RADIUS < 0.0 {
            *slot = None;
        }
    }

    let touched = slot
        .as_ref()
        .is_some_and(|pos| pos.distance(avatar) <= PICKUP_RADIUS + AVATAR_SIZE / 2.0);
    if !touched {
        return next;
    }
    *slot = None;

    match kind {
        PickupKind::Bonus => {
            next.lives += 1;
            log::debug!("Bonus collected, {} lives", next.lives);
        }
        PickupKind::Hazard => {
            // The next tick ends the run
            next.lives = 0;
            log::debug!("Hazard hit, all lives lost");
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;
    use crate::sim::state::Phase;

    fn playing_at(elapsed_ms: u64) -> State {
        let mut state = State::new(&Course::default());
        state.phase = Phase::Playing;
        state.elapsed_ms = elapsed_ms;
        state
    }

    #[test]
    fn test_relocation_within_playfield() {
        for seed in [0, 1, 42, 0xdead_beef, u32::MAX] {
            for kind in [PickupKind::Bonus, PickupKind::Hazard] {
                let p = relocation_point(kind, seed);
                assert!(p.x >= PICKUP_MIN_X && p.x <= PLAYFIELD_WIDTH);
                assert!(p.y >= PICKUP_RADIUS && p.y <= PLAYFIELD_HEIGHT - PICKUP_RADIUS);
            }
        }
    }

    #[test]
    fn test_bonus_and_hazard_use_distinct_draws() {
        assert_ne!(
            relocation_point(PickupKind::Bonus, SEED),
            relocation_point(PickupKind::Hazard, SEED)
        );
    }

    #[test]
    fn test_relocates_on_period() {
        let next = update(playing_at(BONUS_PERIOD_MS), PickupKind::Bonus);
        assert_eq!(next.bonus, Some(relocation_point(PickupKind::Bonus, SEED)));
        assert_eq!(next.hazard, None);

        let next = update(playing_at(HAZARD_PERIOD_MS), PickupKind::Hazard);
        assert_eq!(next.hazard, Some(relocation_point(PickupKind::Hazard, SEED)));
    }

    #[test]
    fn test_no_relocation_at_time_zero() {
        assert_eq!(update(playing_at(0), PickupKind::Bonus).bonus, None);
    }

    #[test]
    fn test_drifts_between_relocations() {
        let mut state = playing_at(TICK_MS);
        state.bonus = Some(Vec2::new(500.0, 400.0));
        let next = update(state, PickupKind::Bonus);
        assert_eq!(next.bonus, Some(Vec2::new(500.0 - PICKUP_SPEED, 400.0)));
    }

    #[test]
    fn test_drifts_off_screen() {
        let mut state = playing_at(TICK_MS);
        state.hazard = Some(Vec2::new(-PICKUP_RADIUS + 1.0, 400.0));
        assert_eq!(update(state, PickupKind::Hazard).hazard, None);
    }

    #[test]
    fn test_bonus_grants_life_once() {
        let mut state = playing_at(TICK_MS);
        let center = state.avatar_center();
        state.bonus = Some(center + Vec2::new(PICKUP_SPEED, 0.0));

        let next = update(state, PickupKind::Bonus);
        assert_eq!(next.lives, START_LIVES + 1);
        assert_eq!(next.bonus, None);

        let again = update(next, PickupKind::Bonus);
        assert_eq!(again.lives, START_LIVES + 1);
    }

    #[test]
    fn test_hazard_takes_all_lives() {
        let mut state = playing_at(TICK_MS);
        let center = state.avatar_center();
        state.hazard = Some(center);

        let next = update(state, PickupKind::Hazard);
        assert_eq!(next.lives, 0);
        assert_eq!(next.hazard, None);
        // Ending is left to the next tick
        assert_eq!(next.phase, Phase::Playing);
    }

    #[test]
    fn test_far_pickup_has_no_effect() {
        let mut state = playing_at(TICK_MS);
        state.hazard = Some(Vec2::new(600.0, 20.0));
        let next = update(state, PickupKind::Hazard);
        assert_eq!(next.lives, START_LIVES);
        assert!(next.hazard.is_some());
    }

    #[test]
    fn test_not_live_is_noop() {
        let mut state = playing_at(BONUS_PERIOD_MS);
        state.paused = true;
        assert_eq!(update(state.clone(), PickupKind::Bonus), state);

        let mut state = playing_at(BONUS_PERIOD_MS);
        state.phase = Phase::NotStarted;
        assert_eq!(update(state.clone(), PickupKind::Bonus), state);
    }
}

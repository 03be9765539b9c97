//! Fixed timestep simulation tick
//!
//! Advances avatar physics by one step and resolves collisions. Rules are
//! applied in priority order; the first one that matches decides the result.

use super::collision::{HitSide, detect_hit};
use super::rng::{hash, random_in_range};
use super::state::{Outcome, Phase, State};
use crate::consts::*;

/// Advance the game state by one fixed timestep
pub fn tick(state: State) -> State {
    let mut next = state;

    // First tick only starts the run
    if next.phase == Phase::NotStarted {
        log::info!("Run {} started", next.run_count);
        next.phase = Phase::Playing;
        return next;
    }

    if next.phase == Phase::Playing
        && next.score >= next.target_score
        && next.obstacles.is_empty()
    {
        log::info!("Run {} won with score {}", next.run_count, next.score);
        next.phase = Phase::Ended(Outcome::Won);
        return next;
    }

    if next.paused || next.is_ended() {
        return next;
    }

    if next.lives == 0 {
        log::info!("Run {} lost with score {}", next.run_count, next.score);
        next.phase = Phase::Ended(Outcome::Lost);
        return next;
    }

    // Integrate physics
    let pre_tick_seed = next.seed;
    next.position += next.velocity;
    next.velocity += GRAVITY;
    next.seed = hash(next.seed);
    next.elapsed_ms += TICK_MS;

    match detect_hit(next.position, &next.obstacles) {
        Some(_) if next.invulnerable => {
            // Still inside whatever we hit: pass through without further loss
        }
        Some(side) => {
            next.lives = next.lives.saturating_sub(1);
            next.invulnerable = true;
            next.velocity = bounce_velocity(side, pre_tick_seed);
            log::debug!(
                "{:?} hit at y={:.1}, {} lives left, bounce {:.2}",
                side,
                next.position,
                next.lives,
                next.velocity
            );
        }
        None => {
            next.invulnerable = false;
        }
    }

    next
}

/// Velocity away from the surface that was hit
fn bounce_velocity(side: HitSide, seed: u32) -> f32 {
    match side {
        HitSide::Top => random_in_range(BOUNCE_TOP_MIN, BOUNCE_TOP_MAX, seed),
        HitSide::Bottom => random_in_range(BOUNCE_BOTTOM_MIN, BOUNCE_BOTTOM_MAX, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Course, CourseEntry};
    use crate::sim::state::Obstacle;
    use proptest::prelude::*;

    fn playing() -> State {
        let course = Course::new(vec![CourseEntry::new(0, 0.5, 0.3, 1.0, 1)]);
        let mut state = State::new(&course);
        state.phase = Phase::Playing;
        state
    }

    fn top_obstacle_over_avatar() -> Obstacle {
        // Gap 100..200 at the avatar's lane
        Obstacle {
            entry: 0,
            x: AVATAR_X,
            gap_center: 150.0,
            gap_height: 100.0,
            weight: 1,
            scored: false,
        }
    }

    #[test]
    fn test_first_tick_only_starts() {
        let course = Course::new(vec![CourseEntry::new(0, 0.5, 0.3, 1.0, 1)]);
        let state = State::new(&course);
        let next = tick(state.clone());
        assert_eq!(next.phase, Phase::Playing);
        assert_eq!(next.position, state.position);
        assert_eq!(next.seed, state.seed);
        assert_eq!(next.elapsed_ms, 0);
    }

    #[test]
    fn test_physics_integration() {
        let mut state = playing();
        state.velocity = 2.0;
        let next = tick(state.clone());
        assert_eq!(next.position, state.position + 2.0);
        assert_eq!(next.velocity, 2.0 + GRAVITY);
        assert_eq!(next.seed, hash(state.seed));
        assert_eq!(next.elapsed_ms, TICK_MS);
        assert!(!next.invulnerable);
    }

    #[test]
    fn test_paused_is_noop() {
        let mut state = playing();
        state.paused = true;
        assert_eq!(tick(state.clone()), state);
    }

    #[test]
    fn test_ended_is_noop() {
        let mut state = playing();
        state.phase = Phase::Ended(Outcome::Lost);
        assert_eq!(tick(state.clone()), state);
    }

    #[test]
    fn test_win_when_all_scored_and_clear() {
        let course = Course::new(vec![
            CourseEntry::new(0, 0.5, 0.3, 1.0, 1),
            CourseEntry::new(1, 0.5, 0.3, 2.0, 1),
            CourseEntry::new(2, 0.5, 0.3, 3.0, 1),
        ]);
        let mut state = State::new(&course);
        state.phase = Phase::Playing;
        state.score = 3;
        let next = tick(state);
        assert_eq!(next.phase, Phase::Ended(Outcome::Won));
        assert!(next.lives > 0);
    }

    #[test]
    fn test_no_win_while_obstacles_on_screen() {
        let mut state = playing();
        state.score = state.target_score;
        state.obstacles.push(Obstacle {
            scored: true,
            x: -10.0,
            ..top_obstacle_over_avatar()
        });
        assert_eq!(tick(state).phase, Phase::Playing);
    }

    #[test]
    fn test_last_life_lost_then_ended() {
        let mut state = playing();
        state.lives = 1;
        state.position = 190.0;
        state.obstacles.push(top_obstacle_over_avatar());

        let hit = tick(state.clone());
        assert_eq!(hit.lives, 0);
        assert!(hit.invulnerable);
        assert!(!hit.is_ended());
        let expected = random_in_range(BOUNCE_TOP_MIN, BOUNCE_TOP_MAX, state.seed);
        assert_eq!(hit.velocity, expected);
        assert!(hit.velocity < 0.0);

        let over = tick(hit);
        assert_eq!(over.phase, Phase::Ended(Outcome::Lost));
    }

    #[test]
    fn test_ground_contact_bounces_up() {
        let mut state = playing();
        state.position = GROUND;
        state.velocity = 0.0;
        let next = tick(state);
        assert_eq!(next.position, GROUND);
        assert_eq!(next.lives, START_LIVES - 1);
        assert!(next.invulnerable);
        assert!(next.velocity >= BOUNCE_BOTTOM_MIN && next.velocity <= BOUNCE_BOTTOM_MAX);
    }

    #[test]
    fn test_invulnerable_pass_through() {
        let mut state = playing();
        state.position = 190.0;
        state.velocity = 1.0;
        state.invulnerable = true;
        state.obstacles.push(top_obstacle_over_avatar());

        let next = tick(state.clone());
        assert_eq!(next.lives, state.lives);
        assert!(next.invulnerable);
        assert_eq!(next.velocity, 1.0 + GRAVITY);
    }

    #[test]
    fn test_invulnerability_clears_when_free() {
        let mut state = playing();
        state.invulnerable = true;
        let next = tick(state);
        assert!(!next.invulnerable);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing();
        a.velocity = 3.0;
        let mut b = a.clone();
        for _ in 0..200 {
            a = tick(a);
            b = tick(b);
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn at_most_one_life_per_tick(
            position in -50.0f32..500.0,
            velocity in -10.0f32..10.0,
            gap_center in 0.0f32..480.0,
            gap_height in 0.0f32..200.0,
            invulnerable in any::<bool>(),
        ) {
            let mut state = playing();
            state.position = position;
            state.velocity = velocity;
            state.invulnerable = invulnerable;
            state.obstacles.push(Obstacle {
                gap_center,
                gap_height,
                ..top_obstacle_over_avatar()
            });
            let lives = state.lives;
            let next = tick(state);
            prop_assert!(lives - next.lives <= 1);
            if invulnerable {
                prop_assert_eq!(next.lives, lives);
            }
        }
    }
}

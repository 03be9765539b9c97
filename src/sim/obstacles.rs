//! Obstacle spawning, scrolling, and scoring

use super::state::{Obstacle, State};
use crate::consts::*;
use crate::course::CourseEntry;
use crate::ms_to_secs;

/// Inject the obstacle for `entry` once its delay has elapsed
///
/// Re-firing after the obstacle was injected is a no-op, even after it has
/// scrolled off screen.
pub fn spawn(state: State, entry: &CourseEntry) -> State {
    if !state.is_live()
        || state.spawned.contains(&entry.id)
        || ms_to_secs(state.elapsed_ms) < entry.spawn_delay
    {
        return state;
    }

    let mut next = state;
    next.spawned.insert(entry.id);
    next.obstacles.push(Obstacle {
        entry: entry.id,
        x: PLAYFIELD_WIDTH,
        gap_center: entry.gap_center * PLAYFIELD_HEIGHT,
        gap_height: entry.gap_height * PLAYFIELD_HEIGHT,
        weight: entry.weight,
        scored: false,
    });
    log::debug!("Spawned obstacle {} at t={}ms", entry.id, next.elapsed_ms);
    next
}

/// Scroll every obstacle left, score the ones that just passed the avatar,
/// and drop the ones that left the screen
pub fn advance(state: State) -> State {
    if !state.is_live() {
        return state;
    }

    let mut next = state;
    let mut gained = 0u32;
    for obstacle in &mut next.obstacles {
        obstacle.x -= OBSTACLE_SPEED;
        if !obstacle.scored && obstacle.x + OBSTACLE_WIDTH < AVATAR_X {
            obstacle.scored = true;
            gained = gained.saturating_add(obstacle.weight);
            log::debug!("Passed obstacle {} (+{})", obstacle.entry, obstacle.weight);
        }
    }
    next.score = next.score.saturating_add(gained);
    next.obstacles.retain(|o| o.x + OBSTACLE_WIDTH >= 0.0);
    next
}

//! Skyflap - a side-scrolling flap-through-the-gaps arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, state transitions)
//! - `course`: Obstacle course model and text-table loader
//! - `session`: Event scheduler that folds transitions into one state stream
//! - `autopilot`: Seeded input scripts for headless runs
//! - `settings`: Runner preferences

pub mod autopilot;
pub mod course;
pub mod session;
pub mod settings;
pub mod sim;

pub use course::{Course, CourseEntry, CourseError};
pub use session::{Event, Session, StateSink, TrailLog, TrailSample};
pub use settings::{Settings, SettingsError};

/// Game configuration constants (fixed at build time)
pub mod consts {
    /// Fixed simulation timestep in milliseconds (50 Hz)
    pub const TICK_MS: u64 = 20;

    /// Playfield dimensions (y-up: 0 is the floor)
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;
    /// Floor coordinate; touching it counts as a bottom hit
    pub const GROUND: f32 = 0.0;
    /// Ceiling coordinate; touching it counts as a top hit
    pub const CEILING: f32 = PLAYFIELD_HEIGHT;

    /// Avatar is a square flying in a fixed horizontal lane
    pub const AVATAR_SIZE: f32 = 30.0;
    pub const AVATAR_X: f32 = 120.0;
    /// Starting vertical offset of the avatar's bottom edge
    pub const AVATAR_START_Y: f32 = (PLAYFIELD_HEIGHT - AVATAR_SIZE) / 2.0;
    pub const START_LIVES: u32 = 3;

    /// Physics (per tick)
    pub const GRAVITY: f32 = -0.5;
    pub const JUMP_SPEED: f32 = 7.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_SPEED: f32 = 4.0;

    /// Forgiveness margin shaved off every side before overlap tests
    pub const COLLISION_MARGIN: f32 = 2.0;

    /// Bounce velocity ranges after a collision (away from the surface hit)
    pub const BOUNCE_TOP_MIN: f32 = -8.0;
    pub const BOUNCE_TOP_MAX: f32 = -4.0;
    pub const BOUNCE_BOTTOM_MIN: f32 = 4.0;
    pub const BOUNCE_BOTTOM_MAX: f32 = 8.0;

    /// Bonus / hazard pickups
    pub const PICKUP_RADIUS: f32 = 12.0;
    pub const PICKUP_SPEED: f32 = 2.0;
    /// Leftmost x a pickup may relocate to (keeps it ahead of the avatar)
    pub const PICKUP_MIN_X: f32 = AVATAR_X + 4.0 * AVATAR_SIZE;
    pub const BONUS_PERIOD_MS: u64 = 7_000;
    pub const HAZARD_PERIOD_MS: u64 = 5_000;
    /// Seed offsets so bonus and hazard never share a draw
    pub const BONUS_SEED_OFFSET: u32 = 0x0000_b0b5;
    pub const HAZARD_SEED_OFFSET: u32 = 0x0000_4a2d;

    /// Initial RNG seed
    pub const SEED: u32 = 42;
}

/// Convert elapsed milliseconds to seconds
#[inline]
pub fn ms_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, threaded through `State`
//! - Every transition takes a `State` and returns its successor
//! - No rendering, timers, or platform dependencies

pub mod collision;
pub mod input;
pub mod obstacles;
pub mod pickups;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Aabb, HitSide, detect_hit, overlaps};
pub use input::{jump, restart, toggle_pause};
pub use pickups::PickupKind;
pub use rng::{hash, random_in_range, scale};
pub use state::{Obstacle, Outcome, Phase, State};
pub use tick::tick;

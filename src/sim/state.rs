//! Game state and core simulation types
//!
//! `State` is an immutable snapshot: every transition consumes the current
//! snapshot and returns its successor.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::course::Course;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first tick
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Terminal
    Ended(Outcome),
}

/// An obstacle on screen: a gap between a top and a bottom segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Course entry this obstacle was spawned from
    pub entry: u32,
    /// Left edge
    pub x: f32,
    /// Gap centre, measured up from the floor
    pub gap_center: f32,
    pub gap_height: f32,
    /// Score awarded for passing it
    pub weight: u32,
    /// Set once the trailing edge passes the avatar; never cleared
    pub scored: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    pub phase: Phase,
    pub paused: bool,
    /// Avatar's bottom edge
    pub position: f32,
    pub velocity: f32,
    pub lives: u32,
    pub score: u32,
    /// Sum of every course entry's weight
    pub target_score: u32,
    /// RNG state, advanced once per simulation tick
    pub seed: u32,
    pub elapsed_ms: u64,
    /// Set after a collision until the avatar is clear again
    pub invulnerable: bool,
    /// On-screen obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Course entries already injected
    pub spawned: BTreeSet<u32>,
    pub bonus: Option<Vec2>,
    pub hazard: Option<Vec2>,
    pub run_count: u32,
}

impl State {
    /// Initial snapshot for a course
    pub fn new(course: &Course) -> Self {
        Self {
            phase: Phase::NotStarted,
            paused: false,
            position: AVATAR_START_Y,
            velocity: 0.0,
            lives: START_LIVES,
            score: 0,
            target_score: course.target_score(),
            seed: SEED,
            elapsed_ms: 0,
            invulnerable: false,
            obstacles: Vec::new(),
            spawned: BTreeSet::new(),
            bonus: None,
            hazard: None,
            run_count: 0,
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Started, not ended, not paused
    #[inline]
    pub fn is_live(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Centre of the avatar, for proximity checks
    pub fn avatar_center(&self) -> Vec2 {
        Vec2::new(
            AVATAR_X + AVATAR_SIZE / 2.0,
            self.position + AVATAR_SIZE / 2.0,
        )
    }
}

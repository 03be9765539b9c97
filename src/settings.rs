//! Runner settings
//!
//! Preferences for the headless runner, stored as JSON next to the course.
//! Gameplay constants are not configurable here; they live in `consts`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Headless runner preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Clock periods to simulate
    pub ticks: u64,

    // === Autopilot ===
    /// Seed for the autopilot's random flaps
    pub autopilot_seed: u64,
    /// Chance of an extra random flap per tick (0.0 - 1.0)
    pub jump_chance: f64,

    // === Runs ===
    /// Start a new run when one ends, until the tick budget is spent
    pub restart_on_end: bool,
    /// Upper bound on runs, including the first
    pub max_runs: u32,

    // === Ghosts ===
    /// Report prior runs' positions alongside the live avatar
    pub ghost_trails: bool,
    /// Only the most recent N prior runs are reported
    pub max_ghost_runs: u32,

    /// Print the final state as JSON
    pub dump_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks: 3_000,

            autopilot_seed: 1,
            jump_chance: 0.02,

            restart_on_end: true,
            max_runs: 3,

            ghost_trails: true,
            max_ghost_runs: 2,

            dump_state: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from `path` if given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Is `run` recent enough to be drawn as a ghost during `current_run`?
    pub fn shows_ghost(&self, run: u32, current_run: u32) -> bool {
        self.ghost_trails && run < current_run && current_run - run <= self.max_ghost_runs
    }
}

//! Obstacle course model and loader
//!
//! A course is a text table: one header row (discarded), then one row per
//! obstacle with `gap_center,gap_height,spawn_delay[,weight]`. Gap fields are
//! fractions of playfield height, the delay is in seconds since the run
//! started.
//!
//! Malformed numeric fields are kept as `NaN` instead of rejecting the row.
//! Such obstacles still spawn, they just never collide.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a course
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("failed to read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One obstacle descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Row index, unique within the course
    pub id: u32,
    /// Gap centre as a fraction of playfield height, from the floor
    pub gap_center: f32,
    /// Gap height as a fraction of playfield height
    pub gap_height: f32,
    /// Seconds after the start before this obstacle appears
    pub spawn_delay: f64,
    pub weight: u32,
}

impl CourseEntry {
    pub fn new(id: u32, gap_center: f32, gap_height: f32, spawn_delay: f64, weight: u32) -> Self {
        Self {
            id,
            gap_center,
            gap_height,
            spawn_delay,
            weight,
        }
    }
}

/// Immutable list of obstacle descriptors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    entries: Vec<CourseEntry>,
}

impl Course {
    pub fn new(entries: Vec<CourseEntry>) -> Self {
        Self { entries }
    }

    /// Parse a course table. Never fails; bad numbers become `NaN`.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(id, line)| parse_row(id as u32, line))
            .collect();
        Self { entries }
    }

    /// Read and parse a course file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CourseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CourseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let course = Self::parse(&text);
        log::info!(
            "Loaded course {} ({} obstacles, target score {})",
            path.display(),
            course.len(),
            course.target_score()
        );
        Ok(course)
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CourseEntry> {
        self.entries.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total obtainable score
    pub fn target_score(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.weight)
            .fold(0u32, u32::saturating_add)
    }
}

fn parse_row(id: u32, line: &str) -> CourseEntry {
    let mut fields = line.split(',').map(str::trim);
    let gap_center = fields.next().map_or(f32::NAN, parse_or_nan);
    let gap_height = fields.next().map_or(f32::NAN, parse_or_nan);
    let spawn_delay = fields
        .next()
        .and_then(|f| f.parse::<f64>().ok())
        .unwrap_or(f64::NAN);
    let weight = fields
        .next()
        .and_then(|f| f.parse::<u32>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(1);

    if gap_center.is_nan() || gap_height.is_nan() || spawn_delay.is_nan() {
        log::warn!("Course row {} is malformed: {:?}", id + 1, line);
    }

    CourseEntry::new(id, gap_center, gap_height, spawn_delay, weight)
}

fn parse_or_nan(field: &str) -> f32 {
    field.parse().unwrap_or(f32::NAN)
}

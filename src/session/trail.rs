//! Append-only avatar trail shared by every run of a session
//!
//! Earlier runs are replayed as ghosts: a renderer asks for the samples of
//! prior runs that carry the same timestamp as the current frame.

use serde::{Deserialize, Serialize};

/// One recorded avatar position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub elapsed_ms: u64,
    pub position: f32,
    pub run: u32,
}

/// Every sample recorded so far, in recording order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailLog {
    samples: Vec<TrailSample>,
}

impl TrailLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: TrailSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrailSample] {
        &self.samples
    }

    /// Samples from runs before `current_run` taken at `elapsed_ms`
    pub fn ghosts(&self, current_run: u32, elapsed_ms: u64) -> impl Iterator<Item = &TrailSample> {
        self.samples
            .iter()
            .filter(move |s| s.run < current_run && s.elapsed_ms == elapsed_ms)
    }
}

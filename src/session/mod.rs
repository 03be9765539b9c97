//! Event scheduler
//!
//! Timer triggers and player inputs all land in one FIFO queue. The dispatch
//! loop pops one event at a time, applies its pure transition to the current
//! `State`, and publishes the result to every sink before popping the next.
//!
//! Each queued event is stamped with the fold generation it was queued in.
//! `Restart` starts a new generation; anything still queued from an older one
//! is dropped without being applied.

pub mod trail;

use std::collections::VecDeque;

use crate::course::Course;
use crate::sim::pickups::{self, PickupKind};
use crate::sim::{State, input, obstacles, tick};

pub use trail::{TrailLog, TrailSample};

/// A single trigger, each mapping to one state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Fixed-rate simulation step
    Tick,
    /// Spawn check for one course entry
    Spawn(u32),
    /// Obstacle scrolling and scoring
    Motion,
    /// Bonus pickup lifecycle
    Bonus,
    /// Hazard pickup lifecycle
    Hazard,
    /// Primary action
    Jump,
    TogglePause,
    Restart,
}

/// Observer of the state stream
pub trait StateSink {
    fn publish(&mut self, state: &State, trail: &TrailLog);
}

impl<F> StateSink for F
where
    F: FnMut(&State, &TrailLog),
{
    fn publish(&mut self, state: &State, trail: &TrailLog) {
        self(state, trail)
    }
}

#[derive(Debug, Clone, Copy)]
struct Queued {
    generation: u64,
    event: Event,
}

/// Owns the current state, the event queue, and the trail log
pub struct Session {
    course: Course,
    initial: State,
    state: State,
    trail: TrailLog,
    queue: VecDeque<Queued>,
    generation: u64,
    sinks: Vec<Box<dyn StateSink>>,
}

impl Session {
    pub fn new(course: Course) -> Self {
        let initial = State::new(&course);
        Self {
            state: initial.clone(),
            initial,
            course,
            trail: TrailLog::new(),
            queue: VecDeque::new(),
            generation: 0,
            sinks: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn trail(&self) -> &TrailLog {
        &self.trail
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Current fold generation (bumped by every restart)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of events waiting to be applied
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn subscribe(&mut self, sink: impl StateSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Queue an event in the current generation
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(Queued {
            generation: self.generation,
            event,
        });
    }

    /// Queue the timer-driven events of one tick period
    pub fn advance_clock(&mut self) {
        self.push(Event::Tick);
        for id in 0..self.course.len() as u32 {
            if !self.state.spawned.contains(&id) {
                self.push(Event::Spawn(id));
            }
        }
        self.push(Event::Motion);
        self.push(Event::Bonus);
        self.push(Event::Hazard);
    }

    /// Apply every queued event, returning how many were applied
    pub fn run_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(queued) = self.queue.pop_front() {
            if queued.generation != self.generation {
                log::trace!(
                    "Dropping stale {:?} from generation {}",
                    queued.event,
                    queued.generation
                );
                continue;
            }
            self.apply(queued.event);
            applied += 1;
        }
        applied
    }

    /// One clock period followed by everything queued
    pub fn step(&mut self) -> usize {
        self.advance_clock();
        self.run_pending()
    }

    fn apply(&mut self, event: Event) {
        let current = std::mem::take(&mut self.state);
        let elapsed_before = current.elapsed_ms;

        self.state = match event {
            Event::Tick => tick(current),
            Event::Spawn(id) => match self.course.get(id) {
                Some(entry) => obstacles::spawn(current, entry),
                None => current,
            },
            Event::Motion => obstacles::advance(current),
            Event::Bonus => pickups::update(current, PickupKind::Bonus),
            Event::Hazard => pickups::update(current, PickupKind::Hazard),
            Event::Jump => input::jump(current),
            Event::TogglePause => input::toggle_pause(current),
            Event::Restart => {
                self.generation += 1;
                log::info!(
                    "Restarting (run {} -> {})",
                    current.run_count,
                    current.run_count + 1
                );
                input::restart(&current, &self.initial)
            }
        };

        if event == Event::Tick && self.state.elapsed_ms != elapsed_before {
            self.trail.record(TrailSample {
                elapsed_ms: self.state.elapsed_ms,
                position: self.state.position,
                run: self.state.run_count,
            });
        }

        for sink in &mut self.sinks {
            sink.publish(&self.state, &self.trail);
        }
    }
}

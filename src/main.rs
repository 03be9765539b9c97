//! Skyflap entry point
//!
//! Headless runner: loads a course, drives the session with the autopilot,
//! and logs the state stream.

use std::path::PathBuf;
use std::process::ExitCode;

use skyflap::autopilot::Autopilot;
use skyflap::sim::{Phase, State};
use skyflap::{Course, Event, Session, Settings, TrailLog, ms_to_secs};

/// Sink that logs phase changes and nearby ghosts
struct LogSink {
    settings: Settings,
    last_phase: Option<(u32, Phase)>,
    last_lives: u32,
}

impl LogSink {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            last_phase: None,
            last_lives: 0,
        }
    }

    fn publish(&mut self, state: &State, trail: &TrailLog) {
        let key = (state.run_count, state.phase);
        if self.last_phase != Some(key) {
            log::info!(
                "Run {}: {:?} at t={:.2}s (score {}/{}, lives {})",
                state.run_count,
                state.phase,
                ms_to_secs(state.elapsed_ms),
                state.score,
                state.target_score,
                state.lives
            );
            self.last_phase = Some(key);
        }

        if state.lives != self.last_lives {
            log::debug!("Lives: {} -> {}", self.last_lives, state.lives);
            self.last_lives = state.lives;
        }

        if log::log_enabled!(log::Level::Trace) {
            for ghost in trail
                .ghosts(state.run_count, state.elapsed_ms)
                .filter(|g| self.settings.shows_ghost(g.run, state.run_count))
            {
                log::trace!(
                    "Ghost of run {} at y={:.1} (live y={:.1})",
                    ghost.run,
                    ghost.position,
                    state.position
                );
            }
        }
    }
}

fn run(
    course_path: PathBuf,
    settings_path: Option<PathBuf>,
) -> Result<State, Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default(settings_path.as_deref())?;
    let course = Course::load(&course_path)?;

    let mut session = Session::new(course);
    let mut sink = LogSink::new(settings.clone());
    session.subscribe(move |state: &State, trail: &TrailLog| sink.publish(state, trail));

    let mut autopilot = Autopilot::new(settings.autopilot_seed, settings.jump_chance);
    for _ in 0..settings.ticks {
        let state = session.state();
        if state.is_ended() {
            if !settings.restart_on_end || state.run_count + 1 >= settings.max_runs {
                break;
            }
            session.push(Event::Restart);
        } else if let Some(event) = autopilot.next_input(state) {
            session.push(event);
        }
        session.step();
    }

    log::info!(
        "Finished after {} runs, {} trail samples",
        session.state().run_count + 1,
        session.trail().len()
    );

    if settings.dump_state {
        println!("{}", serde_json::to_string_pretty(session.state())?);
    }

    Ok(session.state().clone())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);
    let Some(course_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: skyflap <course.csv> [settings.json]");
        return ExitCode::from(2);
    };
    let settings_path = args.next().map(PathBuf::from);

    match run(course_path, settings_path) {
        Ok(state) => {
            match state.outcome() {
                Some(outcome) => log::info!("Final run {:?} with score {}", outcome, state.score),
                None => log::info!("Tick budget spent with score {}", state.score),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

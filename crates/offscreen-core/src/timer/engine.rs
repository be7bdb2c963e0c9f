//! Focus timer engine implementation.
//!
//! The engine is a deterministic countdown state machine. It does not own a
//! thread or a timer registration - the caller drives it by calling `tick()`
//! once per elapsed second while the timer runs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused -> Running)* -> Completed
//!   any state -> Idle via reset()
//! ```
//!
//! ## Stale ticks
//!
//! After `start()`, the tick driver captures a [`TickToken`] stamped with
//! the engine's current generation. `pause()`, `reset()` and completion bump
//! the generation, so a tick scheduled before the cancellation arrives with
//! an outdated token and is ignored. This is the "forgot to clear the
//! interval" race, closed at delivery time:
//!
//! ```ignore
//! engine.start()?;
//! let token = engine.token();
//! // interval driver, once per second:
//! engine.tick(token); // Returns Some(Event) when the countdown completes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::events::Event;
use crate::format::format_mm_ss;
use crate::timer::progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Immutable countdown configuration. A reset re-reads it; changing the
/// duration means constructing a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    total_duration_secs: u64,
}

impl TimerConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// Returns `TimerError::InvalidConfiguration` if `secs` is zero or
    /// negative.
    pub fn new(secs: i64) -> Result<Self, TimerError> {
        if secs <= 0 {
            return Err(TimerError::InvalidConfiguration(secs));
        }
        Ok(Self {
            total_duration_secs: secs as u64,
        })
    }

    /// Convenience constructor for whole minutes.
    ///
    /// # Errors
    /// Returns `TimerError::InvalidConfiguration` if `minutes` is zero or
    /// negative.
    pub fn from_minutes(minutes: i64) -> Result<Self, TimerError> {
        Self::new(minutes.saturating_mul(60))
    }

    pub fn total_duration_secs(&self) -> u64 {
        self.total_duration_secs
    }
}

/// Proof that a tick was scheduled against the engine's current run.
///
/// Compared against the engine generation at delivery time; a token issued
/// before a `pause()`/`reset()`/completion no longer matches and the tick is
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickToken(u64);

/// Completion callback. Fired exactly once per completed run, after the
/// state has already transitioned to `Completed`.
type CompletionCallback = Box<dyn FnMut() + Send>;

/// Core countdown engine.
///
/// Owns the single `TimerState`; external callers read it or invoke the
/// operations - no other mutation path exists. Serializable so the CLI can
/// persist it between invocations (the completion callback is not carried
/// across serialization).
#[derive(Serialize, Deserialize)]
pub struct TimerEngine {
    config: TimerConfig,
    state: TimerState,
    /// Remaining whole seconds for the current run.
    remaining_secs: u64,
    /// Bumped on every start/pause/reset/completion; stale ticks carry an
    /// older value and are ignored.
    #[serde(default)]
    generation: u64,
    #[serde(skip)]
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("remaining_secs", &self.remaining_secs)
            .field("generation", &self.generation)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl TimerEngine {
    /// Create a new engine in the `Idle` state with the full duration
    /// remaining.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: TimerState::Idle,
            remaining_secs: config.total_duration_secs(),
            generation: 0,
            on_complete: None,
        }
    }

    /// Register the completion callback. Replaces any previous one.
    pub fn set_on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.config.total_duration_secs()
    }

    /// 0.0 .. 1.0 elapsed fraction of the configured duration.
    pub fn progress(&self) -> f64 {
        progress::fraction(self.remaining_secs, self.total_secs())
    }

    /// Token for the current run. Only meaningful while `Running`; a tick
    /// driver captures it at start and presents it with every delivery.
    pub fn token(&self) -> TickToken {
        TickToken(self.generation)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            display: format_mm_ss(self.remaining_secs),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin ticking. From `Idle` the countdown starts at the full duration;
    /// from `Paused` it resumes at the frozen remaining value.
    ///
    /// The tick driver captures the registration via [`token()`] after a
    /// successful start and presents it with every delivery.
    ///
    /// # Errors
    /// Returns `TimerError::InvalidTransition` from `Running` (at most one
    /// active tick registration) or `Completed` (a finished run must be
    /// reset first).
    ///
    /// [`token()`]: TimerEngine::token
    pub fn start(&mut self) -> Result<Event, TimerError> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                self.generation += 1;
                Ok(Event::TimerStarted {
                    total_secs: self.total_secs(),
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.generation += 1;
                Ok(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            from => Err(TimerError::InvalidTransition {
                operation: "start",
                from,
            }),
        }
    }

    /// Freeze the countdown at its current remaining value.
    ///
    /// Invalidates the outstanding tick token, so a tick already in flight
    /// lands stale and is dropped - no tick is observed after a pause.
    ///
    /// # Errors
    /// Returns `TimerError::InvalidTransition` unless `Running`.
    pub fn pause(&mut self) -> Result<Event, TimerError> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                self.generation += 1;
                Ok(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            from => Err(TimerError::InvalidTransition {
                operation: "pause",
                from,
            }),
        }
    }

    /// Pause when running, start otherwise.
    ///
    /// # Errors
    /// Returns `TimerError::InvalidTransition` only from `Completed`.
    pub fn toggle(&mut self) -> Result<Event, TimerError> {
        if self.state == TimerState::Running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Cancel the current run and restore the configured duration.
    ///
    /// Valid from any state. Never fires the completion callback.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.remaining_secs = self.config.total_duration_secs();
        self.generation += 1;
        Event::TimerReset {
            total_secs: self.total_secs(),
            at: Utc::now(),
        }
    }

    /// Deliver one one-second tick for the run identified by `token`.
    ///
    /// Ignored (returns `None`) when the engine is not `Running` or when the
    /// token is stale. On reaching zero the engine transitions to
    /// `Completed`, fires the completion callback exactly once, and returns
    /// `Some(Event::TimerCompleted)`.
    pub fn tick(&mut self, token: TickToken) -> Option<Event> {
        if self.state != TimerState::Running || token.0 != self.generation {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Completed;
            self.generation += 1;
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
            return Some(Event::TimerCompleted {
                total_secs: self.total_secs(),
                at: Utc::now(),
            });
        }
        None
    }
}

//! # Offscreen Core Library
//!
//! Core business logic for Offscreen, a digital wellbeing dashboard. The
//! library follows a CLI-first philosophy: every operation is available
//! through the standalone CLI binary, and any GUI shell is a thin layer over
//! the same core.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a deterministic countdown state machine; the caller
//!   drives it by invoking `tick()` once per second, and stale ticks are
//!   rejected by generation token
//! - **Progress**: pure projection of timer state onto a [0, 1] fraction and
//!   the progress-ring geometry
//! - **Usage**: seed-based simulated screen-time statistics (there is no
//!   OS-level instrumentation)
//! - **Storage**: SQLite session/kv storage and TOML configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core countdown state machine
//! - [`UsageSimulator`]: deterministic usage data generation
//! - [`Database`]: session, goal and schedule persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod format;
pub mod goals;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod usage;

pub use error::{ConfigError, CoreError, DatabaseError, TimerError, ValidationError};
pub use events::Event;
pub use goals::Goal;
pub use storage::{Config, Database, Stats, TodayStats};
pub use theme::{Palette, ThemeMode};
pub use timer::{FocusSchedule, TickToken, TimerConfig, TimerEngine, TimerState};
pub use usage::{TimeRange, UsageSimulator, UsageSummary};

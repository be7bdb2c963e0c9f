mod engine;
pub mod progress;
mod schedule;

pub use engine::{TickToken, TimerConfig, TimerEngine, TimerState};
pub use schedule::{default_schedules, FocusSchedule};

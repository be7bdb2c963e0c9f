use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use clap::Subcommand;
use offscreen_core::format::format_mm_ss;
use offscreen_core::storage::database::KEY_TIMER_ENGINE;
use offscreen_core::storage::{Config, Database};
use offscreen_core::{TimerConfig, TimerEngine, TimerError, TimerState};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown (resumes when paused)
    Start,
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Pause when running, start otherwise
    Toggle,
    /// Cancel the current run and restore the configured duration
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Run a foreground focus session, ticking once per second
    Run {
        /// Session length in minutes (defaults to timer.focus_minutes)
        #[arg(long)]
        minutes: Option<i64>,
    },
}

fn load_engine(db: &Database, config: &Config) -> Result<TimerEngine, Box<dyn std::error::Error>> {
    if let Ok(Some(json)) = db.kv_get(KEY_TIMER_ENGINE) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return Ok(engine);
        }
    }
    let timer_config = TimerConfig::from_minutes(i64::from(config.timer.focus_minutes))?;
    Ok(TimerEngine::new(timer_config))
}

fn save_engine(db: &Database, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(KEY_TIMER_ENGINE, &json)?;
    Ok(())
}

/// Apply a transition, treating `InvalidTransition` as a silent no-op the
/// way toggle-style controls do. Configuration errors still propagate.
fn silent<T>(result: Result<T, TimerError>) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(_) | Err(TimerError::InvalidTransition { .. }) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut engine = load_engine(&db, &config)?;

    match action {
        TimerAction::Start | TimerAction::Resume => {
            silent(engine.start())?;
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Pause => {
            silent(engine.pause())?;
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Toggle => {
            silent(engine.toggle())?;
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Reset => {
            let event = engine.reset();
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Run { minutes } => {
            let minutes = minutes.unwrap_or_else(|| i64::from(config.timer.focus_minutes));
            run_session(&db, minutes)?;
        }
    }
    Ok(())
}

/// Drive a full focus session in the foreground and record it on completion.
fn run_session(db: &Database, minutes: i64) -> Result<(), Box<dyn std::error::Error>> {
    let timer_config = TimerConfig::from_minutes(minutes)?;
    let mut engine = TimerEngine::new(timer_config);
    engine.set_on_complete(|| println!("\nFocus session complete"));

    let started_at = Utc::now();
    engine.start()?;
    let token = engine.token();
    print!("{}", format_mm_ss(engine.remaining_secs()));
    std::io::stdout().flush()?;

    while engine.state() == TimerState::Running {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(event) = engine.tick(token) {
            db.record_session(engine.total_secs() / 60, started_at, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        } else {
            print!("\r{}", format_mm_ss(engine.remaining_secs()));
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}

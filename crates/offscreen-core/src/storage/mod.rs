mod config;
pub mod database;

pub use config::Config;
pub use database::{Database, SessionRecord, Stats, TodayStats};

use std::path::PathBuf;

/// Returns `~/.config/offscreen[-dev]/` based on OFFSCREEN_ENV.
///
/// Set OFFSCREEN_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("OFFSCREEN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("offscreen-dev")
    } else {
        base_dir.join("offscreen")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

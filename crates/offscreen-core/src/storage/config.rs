//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Theme mode and accent color
//! - Notification preferences (reminders, goal alerts, weekly report)
//! - Tracking toggles (simulated screen time, data collection)
//! - Default focus timer duration and the preset buttons
//!
//! Configuration is stored at `~/.config/offscreen/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::theme::ThemeMode;

/// Focus timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSection {
    /// Default countdown length for a focus session.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Duration preset buttons shown on the focus screen.
    #[serde(default = "default_duration_presets")]
    pub duration_presets: Vec<u32>,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub usage_reminders: bool,
    #[serde(default = "default_true")]
    pub goal_alerts: bool,
    #[serde(default = "default_true")]
    pub weekly_report: bool,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Fallback when `theme = "system"` and no OS scheme is available.
    #[serde(default)]
    pub prefer_dark: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

/// Tracking configuration (all simulated in this build).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingSection {
    #[serde(default = "default_true")]
    pub screen_time: bool,
    #[serde(default = "default_true")]
    pub data_collection: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/offscreen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub notifications: NotificationsSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub tracking: TrackingSection,
}

fn default_focus_minutes() -> u32 {
    25
}
fn default_duration_presets() -> Vec<u32> {
    vec![5, 15, 25, 45, 60]
}
fn default_accent_color() -> String {
    "#5A78FF".into()
}
fn default_true() -> bool {
    true
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            duration_presets: default_duration_presets(),
        }
    }
}

impl Default for NotificationsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            usage_reminders: true,
            goal_alerts: true,
            weekly_report: true,
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            prefer_dark: false,
            accent_color: default_accent_color(),
        }
    }
}

impl Default for TrackingSection {
    fn default() -> Self {
        Self {
            screen_time: true,
            data_collection: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerSection::default(),
            notifications: NotificationsSection::default(),
            ui: UiSection::default(),
            tracking: TrackingSection::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| format!("cannot parse '{value}' as number"))?
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns error if key is
    /// unknown or the value does not parse as the existing type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

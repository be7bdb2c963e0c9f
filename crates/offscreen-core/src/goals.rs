//! Screen-time goals.
//!
//! A goal caps the daily minutes spent on an app or habit ("Reduce Instagram
//! Usage", 1h 30m). Progress is tracked against the cap and rendered as a
//! capped percentage with an exceeded flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Icon names and accent colors offered by the goal form.
pub const GOAL_ICONS: &[&str] = &[
    "instagram",
    "youtube",
    "facebook",
    "twitter",
    "phone",
    "message",
    "gamepad-variant",
    "shopping",
    "laptop",
    "television",
    "web",
    "account-group",
];

pub const GOAL_COLORS: &[&str] = &[
    "#5A78FF", "#FF6B6B", "#56CCF2", "#6FCF97", "#F2994A", "#9B51E0", "#2D9CDB", "#EB5757",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    /// Daily cap in minutes.
    pub target_minutes: u64,
    /// Minutes spent so far today.
    pub current_minutes: u64,
    pub icon: String,
    pub color: String,
}

impl Goal {
    /// Build a validated goal with zero progress.
    ///
    /// # Errors
    /// Returns a `ValidationError` for an empty name or a zero target.
    pub fn new(
        name: impl Into<String>,
        target_minutes: u64,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "goal name must not be empty".into(),
            });
        }
        if target_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "target_minutes".into(),
                message: "time limit must be positive".into(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            target_minutes,
            current_minutes: 0,
            icon: icon.into(),
            color: color.into(),
        })
    }

    /// Progress percentage, capped at 100.
    pub fn progress_pct(&self) -> u32 {
        let pct = (self.current_minutes as f64 / self.target_minutes as f64 * 100.0).round();
        (pct as u32).min(100)
    }

    /// Whether today's usage has gone past the cap.
    pub fn is_exceeded(&self) -> bool {
        self.current_minutes > self.target_minutes
    }

    /// Minutes left under the cap (zero once exceeded).
    pub fn remaining_minutes(&self) -> u64 {
        self.target_minutes.saturating_sub(self.current_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: u64, current: u64) -> Goal {
        let mut g = Goal::new("Reduce Instagram Usage", target, "instagram", "#E1306C").unwrap();
        g.current_minutes = current;
        g
    }

    #[test]
    fn new_goal_starts_at_zero() {
        let g = goal(90, 0);
        assert_eq!(g.current_minutes, 0);
        assert_eq!(g.progress_pct(), 0);
        assert!(!g.is_exceeded());
        assert_eq!(g.remaining_minutes(), 90);
    }

    #[test]
    fn progress_is_rounded_and_capped() {
        assert_eq!(goal(90, 45).progress_pct(), 50);
        assert_eq!(goal(90, 89).progress_pct(), 99);
        assert_eq!(goal(90, 90).progress_pct(), 100);
        assert_eq!(goal(90, 200).progress_pct(), 100);
    }

    #[test]
    fn exceeded_only_past_the_cap() {
        assert!(!goal(90, 90).is_exceeded());
        assert!(goal(90, 91).is_exceeded());
        assert_eq!(goal(90, 91).remaining_minutes(), 0);
    }

    #[test]
    fn validation_rejects_bad_input() {
        assert!(Goal::new("", 60, "web", "#5A78FF").is_err());
        assert!(Goal::new("  ", 60, "web", "#5A78FF").is_err());
        assert!(matches!(
            Goal::new("No Limit", 0, "web", "#5A78FF"),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}

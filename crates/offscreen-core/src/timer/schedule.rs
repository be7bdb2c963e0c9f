//! Recurring focus-mode windows.
//!
//! A schedule names a daily time window on a set of weekdays during which
//! focus mode should be active ("Work Focus" 09:00-17:00 Mon-Fri). Windows
//! where the end does not lie after the start span midnight.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSchedule {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub days: Vec<Weekday>,
    pub enabled: bool,
}

impl FocusSchedule {
    /// Build a validated schedule.
    ///
    /// # Errors
    /// Returns a `ValidationError` for an empty name, an empty day set, or a
    /// zero-length window (`start == end`).
    pub fn new(
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        days: Vec<Weekday>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "schedule name must not be empty".into(),
            });
        }
        if days.is_empty() {
            return Err(ValidationError::EmptyCollection("days".into()));
        }
        if start == end {
            return Err(ValidationError::EmptyTimeWindow {
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            start,
            end,
            days,
            enabled: true,
        })
    }

    /// Whether the window spans midnight (end lies before start).
    pub fn spans_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Whether focus mode should be active at the given local datetime.
    ///
    /// Disabled schedules are never active. For a midnight-spanning window
    /// the portion after midnight belongs to the weekday the window started
    /// on.
    pub fn active_at(&self, at: NaiveDateTime) -> bool {
        if !self.enabled {
            return false;
        }
        let time = at.time();
        let weekday = at.weekday();
        if self.spans_midnight() {
            let started_yesterday = time < self.end && self.days.contains(&weekday.pred());
            let started_today = time >= self.start && self.days.contains(&weekday);
            started_yesterday || started_today
        } else {
            self.days.contains(&weekday) && time >= self.start && time < self.end
        }
    }
}

/// The two example schedules the focus screen seeds on first launch.
pub fn default_schedules() -> Vec<FocusSchedule> {
    use Weekday::*;
    let work = FocusSchedule::new(
        "Work Focus",
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        vec![Mon, Tue, Wed, Thu, Fri],
    );
    let mut evening = FocusSchedule::new(
        "Evening Relaxation",
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        vec![Mon, Tue, Wed, Thu, Fri, Sat, Sun],
    );
    if let Ok(s) = evening.as_mut() {
        s.enabled = false;
    }
    [work, evening].into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn work_focus() -> FocusSchedule {
        FocusSchedule::new(
            "Work Focus",
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        )
        .unwrap()
    }

    #[test]
    fn active_inside_window_on_selected_day() {
        let s = work_focus();
        // 2024-06-03 is a Monday.
        assert!(s.active_at(at(2024, 6, 3, 10, 30)));
        assert!(!s.active_at(at(2024, 6, 3, 8, 59)));
        assert!(!s.active_at(at(2024, 6, 3, 17, 0)));
    }

    #[test]
    fn inactive_on_unselected_day() {
        let s = work_focus();
        // 2024-06-08 is a Saturday.
        assert!(!s.active_at(at(2024, 6, 8, 10, 30)));
    }

    #[test]
    fn disabled_schedule_is_never_active() {
        let mut s = work_focus();
        s.enabled = false;
        assert!(!s.active_at(at(2024, 6, 3, 10, 30)));
    }

    #[test]
    fn midnight_spanning_window() {
        let s = FocusSchedule::new(
            "Night Owl",
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            vec![Weekday::Fri],
        )
        .unwrap();
        assert!(s.spans_midnight());
        // Friday 23:00 is inside.
        assert!(s.active_at(at(2024, 6, 7, 23, 0)));
        // Saturday 05:00 belongs to the Friday window.
        assert!(s.active_at(at(2024, 6, 8, 5, 0)));
        // Saturday 23:00 is not.
        assert!(!s.active_at(at(2024, 6, 8, 23, 0)));
    }

    #[test]
    fn validation_rejects_bad_input() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(FocusSchedule::new("", nine, nine, vec![Weekday::Mon]).is_err());
        assert!(matches!(
            FocusSchedule::new("No Days", nine, NaiveTime::from_hms_opt(10, 0, 0).unwrap(), vec![]),
            Err(ValidationError::EmptyCollection(_))
        ));
        assert!(matches!(
            FocusSchedule::new("Zero", nine, nine, vec![Weekday::Mon]),
            Err(ValidationError::EmptyTimeWindow { .. })
        ));
    }

    #[test]
    fn default_schedules_match_seed_data() {
        let defaults = default_schedules();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].name, "Work Focus");
        assert!(defaults[0].enabled);
        assert_eq!(defaults[1].name, "Evening Relaxation");
        assert!(!defaults[1].enabled);
        assert_eq!(defaults[1].days.len(), 7);
    }
}

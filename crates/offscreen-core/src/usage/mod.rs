//! Simulated screen-time statistics.
//!
//! There is no OS-level instrumentation in this project; the dashboard runs
//! on generated data. Generation is seed-based and fully deterministic so
//! the same day always renders the same numbers and tests can pin exact
//! outputs. The default seed derives from the calendar date.

use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

use crate::format::percent_difference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl TimeRange {
    /// Chart bucket labels for the range.
    fn bucket_labels(self) -> &'static [&'static str] {
        match self {
            TimeRange::Daily => &["12AM", "3AM", "6AM", "9AM", "12PM", "3PM", "6PM", "9PM"],
            TimeRange::Weekly => &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            TimeRange::Monthly => &["Week 1", "Week 2", "Week 3", "Week 4"],
        }
    }

    /// Hour bounds for a single bucket.
    fn bucket_hours(self) -> std::ops::Range<f64> {
        match self {
            TimeRange::Daily => 0.0..2.5,
            TimeRange::Weekly => 3.0..7.5,
            TimeRange::Monthly => 28.0..42.0,
        }
    }
}

/// Per-app usage entry for the "top apps" list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsage {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub minutes: u64,
}

/// One chart bucket (an hour-of-day slot, a weekday, or a week).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageBucket {
    pub label: String,
    pub hours: f64,
}

/// Usage report for one time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSummary {
    pub range: TimeRange,
    pub total_hours: f64,
    pub buckets: Vec<UsageBucket>,
    pub top_apps: Vec<AppUsage>,
    /// Rounded change versus the previous period.
    pub percent_change: u32,
    pub is_increase: bool,
}

/// App catalog the simulator draws from: name, icon, accent color.
const APP_CATALOG: &[(&str, &str, &str)] = &[
    ("Instagram", "instagram", "#E1306C"),
    ("YouTube", "youtube", "#FF0000"),
    ("Twitter", "twitter", "#1DA1F2"),
    ("TikTok", "music-note", "#000000"),
    ("Messages", "message", "#4CAF50"),
    ("Chrome", "web", "#F2994A"),
];

/// Seed-based usage data generator.
pub struct UsageSimulator {
    rng: Pcg64Mcg,
}

impl UsageSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Simulator seeded from a calendar date, so a given day always reports
    /// the same numbers.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(u64::from(date.year_ce().1) * 10_000 + u64::from(date.ordinal()))
    }

    fn round_half_hours(h: f64) -> f64 {
        (h * 10.0).round() / 10.0
    }

    /// Generate the report for one time range.
    pub fn summary(&mut self, range: TimeRange) -> UsageSummary {
        let bounds = range.bucket_hours();
        let buckets: Vec<UsageBucket> = range
            .bucket_labels()
            .iter()
            .map(|label| UsageBucket {
                label: (*label).to_string(),
                hours: Self::round_half_hours(self.rng.gen_range(bounds.clone())),
            })
            .collect();
        let total_hours: f64 = buckets.iter().map(|b| b.hours).sum();

        // Previous period total, same distribution, for the trend arrow.
        let previous_total: f64 = (0..buckets.len())
            .map(|_| self.rng.gen_range(bounds.clone()))
            .sum();
        let (percent_change, is_increase) = percent_difference(total_hours, previous_total);

        let mut top_apps: Vec<AppUsage> = APP_CATALOG
            .iter()
            .map(|(name, icon, color)| AppUsage {
                name: (*name).to_string(),
                icon: (*icon).to_string(),
                color: (*color).to_string(),
                minutes: self.rng.gen_range(15..120),
            })
            .collect();
        top_apps.sort_by(|a, b| b.minutes.cmp(&a.minutes));
        top_apps.truncate(4);

        UsageSummary {
            range,
            total_hours: Self::round_half_hours(total_hours),
            buckets,
            top_apps,
            percent_change,
            is_increase,
        }
    }
}

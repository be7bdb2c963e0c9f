//! Time and number formatting helpers shared by the CLI and any GUI shell.

/// Render remaining seconds as `mm:ss`, each part zero-padded to two digits.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render a minute count as a readable duration.
///
/// Compact form yields `1h 35m` / `2h` / `45m`; the long form spells the
/// units out (`1 hour 35 minutes`).
pub fn format_minutes(minutes: u64, compact: bool) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if compact {
        match (hours, mins) {
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        }
    } else {
        let hour_part = match hours {
            0 => None,
            1 => Some("1 hour".to_string()),
            h => Some(format!("{h} hours")),
        };
        let min_part = match mins {
            0 if hours > 0 => None,
            1 => Some("1 minute".to_string()),
            m => Some(format!("{m} minutes")),
        };
        match (hour_part, min_part) {
            (Some(h), Some(m)) => format!("{h} {m}"),
            (Some(h), None) => h,
            (None, Some(m)) => m,
            (None, None) => "0 minutes".to_string(),
        }
    }
}

/// Percentage difference between two totals, rounded, with direction.
///
/// A zero baseline counts as a 100% increase when the current value is
/// positive, and no change otherwise.
pub fn percent_difference(current: f64, previous: f64) -> (u32, bool) {
    if previous == 0.0 {
        return if current > 0.0 { (100, true) } else { (0, false) };
    }
    let diff = current - previous;
    let percent = (diff.abs() / previous * 100.0).round() as u32;
    (percent, diff > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_ss_is_zero_padded() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(3600), "60:00");
    }

    #[test]
    fn compact_minutes() {
        assert_eq!(format_minutes(45, true), "45m");
        assert_eq!(format_minutes(120, true), "2h");
        assert_eq!(format_minutes(95, true), "1h 35m");
        assert_eq!(format_minutes(0, true), "0m");
    }

    #[test]
    fn long_minutes() {
        assert_eq!(format_minutes(95, false), "1 hour 35 minutes");
        assert_eq!(format_minutes(120, false), "2 hours");
        assert_eq!(format_minutes(1, false), "1 minute");
        assert_eq!(format_minutes(0, false), "0 minutes");
    }

    #[test]
    fn percent_difference_directions() {
        assert_eq!(percent_difference(6.0, 5.0), (20, true));
        assert_eq!(percent_difference(4.0, 5.0), (20, false));
        assert_eq!(percent_difference(5.0, 5.0), (0, false));
        assert_eq!(percent_difference(3.0, 0.0), (100, true));
        assert_eq!(percent_difference(0.0, 0.0), (0, false));
    }
}

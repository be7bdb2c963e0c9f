//! Progress projection for the countdown display.
//!
//! Pure functions mapping timer state to a normalized progress fraction and
//! to the ring geometry the progress circle renders from. No hidden state:
//! the same inputs always yield the same output.

/// Normalized elapsed fraction: `1 - remaining/total`, clamped to [0, 1].
///
/// 0.0 for a full (idle) countdown, 1.0 for a completed one. A zero total
/// projects to 0.0 rather than dividing by zero.
pub fn fraction(remaining_secs: u64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    let f = 1.0 - (remaining_secs as f64 / total_secs as f64);
    f.clamp(0.0, 1.0)
}

/// Circumference of the progress ring for a given radius.
pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// Stroke dash offset that renders `fraction` of the ring as filled.
///
/// A fraction of 0 leaves the full circumference offset (empty ring), a
/// fraction of 1 offsets nothing (full ring).
pub fn ring_dash_offset(fraction: f64, radius: f64) -> f64 {
    ring_circumference(radius) * (1.0 - fraction.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_projects_to_zero() {
        assert_eq!(fraction(600, 600), 0.0);
    }

    #[test]
    fn completed_projects_to_one() {
        assert_eq!(fraction(0, 600), 1.0);
    }

    #[test]
    fn partial_countdown() {
        // 10s total, 4 ticks elapsed.
        assert!((fraction(6, 10) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(fraction(20, 10), 0.0);
        assert_eq!(fraction(5, 0), 0.0);
    }

    #[test]
    fn ring_geometry() {
        let c = ring_circumference(120.0);
        assert!((c - 753.982_236_861_550_3).abs() < 1e-6);
        assert_eq!(ring_dash_offset(0.0, 120.0), c);
        assert_eq!(ring_dash_offset(1.0, 120.0), 0.0);
        assert!((ring_dash_offset(0.25, 120.0) - c * 0.75).abs() < 1e-9);
    }
}

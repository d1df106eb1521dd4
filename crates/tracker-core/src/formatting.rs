/// Format a whole-second session clock as `HH:MM:SS` with zero padding.
///
/// # Examples
///
/// ```
/// use tracker_core::formatting::format_clock;
///
/// assert_eq!(format_clock(0), "00:00:00");
/// assert_eq!(format_clock(61), "00:01:01");
/// assert_eq!(format_clock(3_661), "01:01:01");
/// ```
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a fractional hour count as a short display string, e.g. `"6.2h"`.
///
/// # Examples
///
/// ```
/// use tracker_core::formatting::format_hours;
///
/// assert_eq!(format_hours(6.2), "6.2h");
/// assert_eq!(format_hours(8.0), "8.0h");
/// assert_eq!(format_hours(0.0), "0.0h");
/// ```
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use tracker_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_clock ─────────────────────────────────────────────────────

    #[test]
    fn test_format_clock_zero() {
        assert_eq!(format_clock(0), "00:00:00");
    }

    #[test]
    fn test_format_clock_seconds_only() {
        assert_eq!(format_clock(59), "00:00:59");
    }

    #[test]
    fn test_format_clock_minute_rollover() {
        assert_eq!(format_clock(60), "00:01:00");
        assert_eq!(format_clock(61), "00:01:01");
    }

    #[test]
    fn test_format_clock_hour_rollover() {
        assert_eq!(format_clock(3600), "01:00:00");
        assert_eq!(format_clock(3661), "01:01:01");
    }

    #[test]
    fn test_format_clock_long_session() {
        // 10 hours, 2 minutes, 3 seconds.
        assert_eq!(format_clock(10 * 3600 + 2 * 60 + 3), "10:02:03");
    }

    // ── format_hours ─────────────────────────────────────────────────────

    #[test]
    fn test_format_hours_fractional() {
        assert_eq!(format_hours(6.2), "6.2h");
        assert_eq!(format_hours(1.85), "1.9h");
    }

    #[test]
    fn test_format_hours_whole() {
        assert_eq!(format_hours(8.0), "8.0h");
    }

    // ── percentage ───────────────────────────────────────────────────────

    #[test]
    fn test_percentage_basic() {
        let p = percentage(6.2, 8.0, 1);
        assert!((p - 77.5).abs() < 1e-9, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0, 2), 0.0);
    }

    #[test]
    fn test_percentage_full() {
        let p = percentage(100.0, 100.0, 0);
        assert!((p - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_rounding() {
        let p = percentage(1.0, 3.0, 2);
        assert!((p - 33.33).abs() < 1e-2, "percentage = {p}");
    }
}

//! Summary figures derived from the sample datasets.
//!
//! The screens display a handful of aggregates (goal progress, weekly
//! average, peak hour). They are computed from the datasets they accompany
//! so the rendered numbers always agree with the rendered charts.

use tracker_core::formatting::percentage;
use tracker_core::models::{DailyEfficiency, HourlyActivity, TodayOverview};

/// Percentage of today's goal covered by productive time, one decimal.
pub fn goal_progress(today: &TodayOverview) -> f64 {
    percentage(today.productive_hours, today.goal_hours, 1)
}

/// Hours still missing from today's goal, clamped at zero.
pub fn remaining_hours(today: &TodayOverview) -> f64 {
    (today.goal_hours - today.productive_hours).max(0.0)
}

/// Mean efficiency across the week, one decimal. Zero for an empty week.
pub fn weekly_average(week: &[DailyEfficiency]) -> f64 {
    if week.is_empty() {
        return 0.0;
    }
    let sum: u32 = week.iter().map(|d| u32::from(d.efficiency)).sum();
    let avg = f64::from(sum) / week.len() as f64;
    (avg * 10.0).round() / 10.0
}

/// The hour with the highest activity level, if any.
///
/// Ties resolve to the earliest hour, matching the dataset ordering.
pub fn peak_hour(hours: &[HourlyActivity]) -> Option<&HourlyActivity> {
    hours.iter().reduce(|best, h| {
        if h.activity > best.activity {
            h
        } else {
            best
        }
    })
}

/// Whole minutes the current session has been active.
pub fn active_minutes(session_seconds: u64) -> u64 {
    session_seconds / 60
}

/// Estimated productive minutes in the current session (80 % of active time,
/// rounded down).
pub fn productive_minutes(session_seconds: u64) -> u64 {
    ((session_seconds as f64 / 60.0) * 0.8).floor() as u64
}

// ── Tests ─────────────────────────────────────────────────────────────────────

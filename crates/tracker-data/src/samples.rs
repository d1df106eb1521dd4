//! Static sample datasets rendered by the dashboard screens.
//!
//! Each function builds a fresh copy of one dataset. The values are fixed
//! display data; no screen ever writes them back anywhere.

use chrono::NaiveDate;
use tracker_core::models::{
    AppCategory, AppUsage, CategoryRule, CategoryShare, DailyEfficiency, EfficiencyScore,
    EmailSettings, GoalPrefs, HourlyActivity, MonitoringPrefs, MonthlyTrend, PrivacyPrefs,
    ReportEntry, ReportOptions, ReportStatus, TodayOverview,
};

/// Focus score shown on the Analytics summary row, out of 10.
pub const FOCUS_SCORE: f64 = 8.2;

/// Today's headline numbers: an 8-hour goal with 6.2 productive hours.
pub fn today_overview() -> TodayOverview {
    TodayOverview {
        goal_hours: 8.0,
        productive_hours: 6.2,
        efficiency: EfficiencyScore::new(78),
    }
}

/// The five most-used applications today, ordered by share.
pub fn top_apps() -> Vec<AppUsage> {
    vec![
        AppUsage {
            name: "Visual Studio Code".to_string(),
            hours: 2.5,
            category: AppCategory::Productive,
            percentage: 35,
        },
        AppUsage {
            name: "Chrome - Documentation".to_string(),
            hours: 1.8,
            category: AppCategory::Productive,
            percentage: 25,
        },
        AppUsage {
            name: "Slack".to_string(),
            hours: 1.2,
            category: AppCategory::Neutral,
            percentage: 17,
        },
        AppUsage {
            name: "Email Client".to_string(),
            hours: 0.9,
            category: AppCategory::Productive,
            percentage: 13,
        },
        AppUsage {
            name: "Social Media".to_string(),
            hours: 0.7,
            category: AppCategory::NonProductive,
            percentage: 10,
        },
    ]
}

/// Per-day efficiency for the current week.
pub fn weekly_efficiency() -> Vec<DailyEfficiency> {
    let points = [
        ("Mon", 85, 6.8, 1.2),
        ("Tue", 78, 6.2, 1.8),
        ("Wed", 82, 6.6, 1.4),
        ("Thu", 75, 6.0, 2.0),
        ("Fri", 88, 7.0, 1.0),
        ("Sat", 45, 3.6, 4.4),
        ("Sun", 30, 2.4, 5.6),
    ];
    points
        .into_iter()
        .map(
            |(day, efficiency, productive_hours, non_productive_hours)| DailyEfficiency {
                day: day.to_string(),
                efficiency,
                productive_hours,
                non_productive_hours,
            },
        )
        .collect()
}

/// Activity levels across the working day (9 AM – 6 PM).
pub fn hourly_activity() -> Vec<HourlyActivity> {
    let points = [
        ("9 AM", 45),
        ("10 AM", 78),
        ("11 AM", 85),
        ("12 PM", 35),
        ("1 PM", 25),
        ("2 PM", 65),
        ("3 PM", 82),
        ("4 PM", 75),
        ("5 PM", 68),
        ("6 PM", 30),
    ];
    points
        .into_iter()
        .map(|(hour, activity)| HourlyActivity {
            hour: hour.to_string(),
            activity,
        })
        .collect()
}

/// Time distribution across application category groups. Shares sum to 100.
pub fn category_shares() -> Vec<CategoryShare> {
    let shares = [
        ("Development", 45),
        ("Communication", 25),
        ("Research", 20),
        ("Social Media", 10),
    ];
    shares
        .into_iter()
        .map(|(name, percent)| CategoryShare {
            name: name.to_string(),
            percent,
        })
        .collect()
}

/// Six months of efficiency and hours-worked figures.
pub fn monthly_trends() -> Vec<MonthlyTrend> {
    let points = [
        ("Jan", 72, 160),
        ("Feb", 75, 152),
        ("Mar", 78, 168),
        ("Apr", 80, 162),
        ("May", 82, 170),
        ("Jun", 85, 158),
    ];
    points
        .into_iter()
        .map(|(month, efficiency, hours_worked)| MonthlyTrend {
            month: month.to_string(),
            efficiency,
            hours_worked,
        })
        .collect()
}

/// The recent-reports table on the Reports screen.
pub fn recent_reports() -> Vec<ReportEntry> {
    vec![
        ReportEntry {
            report_type: "Daily Report".to_string(),
            date: date(2024, 6, 28),
            status: ReportStatus::Sent,
            recipients: 2,
        },
        ReportEntry {
            report_type: "Weekly Summary".to_string(),
            date: date(2024, 6, 24),
            status: ReportStatus::Sent,
            recipients: 3,
        },
        ReportEntry {
            report_type: "Monthly Analysis".to_string(),
            date: date(2024, 6, 1),
            status: ReportStatus::Draft,
            recipients: 1,
        },
        ReportEntry {
            report_type: "Custom Report".to_string(),
            date: date(2024, 6, 26),
            status: ReportStatus::Sent,
            recipients: 1,
        },
    ]
}

/// Initial application → category assignments on the Settings screen.
pub fn default_category_rules() -> Vec<CategoryRule> {
    let rules = [
        ("Visual Studio Code", AppCategory::Productive),
        ("Chrome - Documentation", AppCategory::Productive),
        ("Slack", AppCategory::Neutral),
        ("Email Client", AppCategory::Productive),
        ("Social Media", AppCategory::NonProductive),
        ("YouTube", AppCategory::NonProductive),
        ("Figma", AppCategory::Productive),
        ("Zoom", AppCategory::Neutral),
    ];
    rules
        .into_iter()
        .map(|(app_name, category)| CategoryRule {
            app_name: app_name.to_string(),
            category,
        })
        .collect()
}

/// Default monitoring preferences shown on the Settings screen.
pub fn default_monitoring_prefs() -> MonitoringPrefs {
    MonitoringPrefs {
        interval_secs: 1,
        start_with_system: false,
        minimize_to_tray: true,
        track_idle_time: true,
        idle_threshold_minutes: 5,
    }
}

/// Default goal preferences shown on the Settings screen.
pub fn default_goal_prefs() -> GoalPrefs {
    GoalPrefs {
        daily_goal_hours: 8,
        weekly_goal_hours: 40,
        efficiency_target: 80,
    }
}

/// Default privacy preferences shown on the Settings screen.
pub fn default_privacy_prefs() -> PrivacyPrefs {
    PrivacyPrefs {
        track_window_titles: true,
        data_retention_days: 90,
        export_enabled: true,
    }
}

/// Email-report configuration shown on the Reports screen.
pub fn default_email_settings() -> EmailSettings {
    EmailSettings {
        enabled: true,
        recipients: vec!["manager@company.com".to_string()],
        frequency: "daily".to_string(),
        time: "09:00".to_string(),
    }
}

/// Report content options shown on the Reports screen.
pub fn default_report_options() -> ReportOptions {
    ReportOptions {
        include_charts: true,
        include_raw_data: false,
        date_range: "7days".to_string(),
    }
}

/// Build a date from known-valid components, defaulting on the (unreachable)
/// invalid case rather than panicking.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

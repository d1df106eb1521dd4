use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Monitoring session ────────────────────────────────────────────────────────

/// Whether the simulated monitoring session is currently advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringState {
    /// The session clock is frozen and the activity label cannot change.
    Stopped,
    /// The session clock advances once per tick.
    Running,
}

impl MonitoringState {
    /// `true` when the state is [`MonitoringState::Running`].
    pub fn is_running(self) -> bool {
        matches!(self, MonitoringState::Running)
    }

    /// Human-readable status string shown next to the start/stop toggle.
    pub fn status_label(self) -> &'static str {
        match self {
            MonitoringState::Running => "Actively monitoring",
            MonitoringState::Stopped => "Monitoring stopped",
        }
    }
}

/// Fixed catalog of application labels the simulated session switches
/// between. The first entry is also the initial label.
pub const ACTIVITY_CATALOG: [&str; 5] = [
    "Visual Studio Code",
    "Chrome - Stack Overflow",
    "Slack",
    "Email Client",
    "Design Tool",
];

/// Immutable view of the simulated session, taken once per render.
///
/// Consumers never mutate session state; they receive one of these from the
/// runtime's snapshot channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Whether the session is running or stopped.
    pub state: MonitoringState,
    /// Whole seconds elapsed since monitoring last started. Retains its
    /// value across stop; only ever increments while running.
    pub session_seconds: u64,
    /// The application label the session is currently attributed to.
    pub current_activity: String,
}

impl SessionSnapshot {
    /// The snapshot before any session has been started.
    pub fn idle() -> Self {
        Self {
            state: MonitoringState::Stopped,
            session_seconds: 0,
            current_activity: ACTIVITY_CATALOG[0].to_string(),
        }
    }
}

// ── Efficiency ────────────────────────────────────────────────────────────────

/// A productivity efficiency percentage, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyScore(u8);

impl EfficiencyScore {
    /// Construct a score, clamping values above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// The raw percentage value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The qualitative rating band this score falls into.
    pub fn rating(self) -> EfficiencyRating {
        if self.0 >= 80 {
            EfficiencyRating::Excellent
        } else if self.0 >= 60 {
            EfficiencyRating::Good
        } else {
            EfficiencyRating::NeedsImprovement
        }
    }
}

/// Qualitative banding of an [`EfficiencyScore`].
///
/// * `>= 80` → Excellent
/// * `>= 60` → Good
/// * otherwise → Needs Improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl EfficiencyRating {
    /// Badge text shown in the status stat card.
    pub fn label(self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "Excellent",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

// ── Application categories ────────────────────────────────────────────────────

/// Productivity classification of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppCategory {
    Productive,
    Neutral,
    NonProductive,
}

impl AppCategory {
    /// Badge text for this category.
    pub fn label(self) -> &'static str {
        match self {
            AppCategory::Productive => "productive",
            AppCategory::Neutral => "neutral",
            AppCategory::NonProductive => "non-productive",
        }
    }

    /// The next category in the fixed cycling order used by the Settings
    /// screen (productive → neutral → non-productive → productive).
    pub fn next(self) -> Self {
        match self {
            AppCategory::Productive => AppCategory::Neutral,
            AppCategory::Neutral => AppCategory::NonProductive,
            AppCategory::NonProductive => AppCategory::Productive,
        }
    }
}

// ── Display datasets ──────────────────────────────────────────────────────────

/// Today's headline numbers shown by the Dashboard screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayOverview {
    /// Daily productive-time goal in hours.
    pub goal_hours: f64,
    /// Productive hours accumulated so far today.
    pub productive_hours: f64,
    /// Today's efficiency score.
    pub efficiency: EfficiencyScore,
}

/// One application's usage share for today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsage {
    pub name: String,
    /// Hours spent in this application today.
    pub hours: f64,
    pub category: AppCategory,
    /// Share of total tracked time, in whole percent.
    pub percentage: u8,
}

/// Efficiency figures for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEfficiency {
    /// Short weekday label ("Mon".."Sun").
    pub day: String,
    pub efficiency: u8,
    pub productive_hours: f64,
    pub non_productive_hours: f64,
}

/// Activity level for one hour of the working day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Hour label, e.g. "9 AM" or "12 PM".
    pub hour: String,
    /// Activity level in `[0, 100]`.
    pub activity: u8,
}

/// Share of tracked time attributed to one application category group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Group name, e.g. "Development".
    pub name: String,
    /// Whole-percent share of tracked time.
    pub percent: u8,
}

/// Long-term efficiency figures for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Short month label ("Jan".."Jun").
    pub month: String,
    pub efficiency: u8,
    pub hours_worked: u32,
}

/// Delivery state of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Sent,
    Draft,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Sent => "sent",
            ReportStatus::Draft => "draft",
        }
    }
}

/// One row of the recent-reports table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Report kind, e.g. "Daily Report" or "Weekly Summary".
    pub report_type: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
    /// Number of configured recipients.
    pub recipients: u32,
}

// ── Settings-screen form state ────────────────────────────────────────────────

/// A single application → category assignment shown on the Settings screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub app_name: String,
    pub category: AppCategory,
}

/// Monitoring behaviour preferences (display-only form state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringPrefs {
    /// Sampling interval in seconds.
    pub interval_secs: u32,
    pub start_with_system: bool,
    pub minimize_to_tray: bool,
    pub track_idle_time: bool,
    pub idle_threshold_minutes: u32,
}

/// Productivity goal preferences (display-only form state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPrefs {
    pub daily_goal_hours: u32,
    pub weekly_goal_hours: u32,
    /// Target efficiency percentage.
    pub efficiency_target: u8,
}

/// Privacy and data-handling preferences (display-only form state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyPrefs {
    pub track_window_titles: bool,
    pub data_retention_days: u32,
    pub export_enabled: bool,
}

/// Email-report configuration shown by the Reports screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    pub enabled: bool,
    pub recipients: Vec<String>,
    /// Delivery cadence, e.g. "daily".
    pub frequency: String,
    /// Delivery time of day, e.g. "09:00".
    pub time: String,
}

/// Report content options shown by the Reports screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    pub include_charts: bool,
    pub include_raw_data: bool,
    /// Covered period, e.g. "7days".
    pub date_range: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── MonitoringState ───────────────────────────────────────────────────

    #[test]
    fn test_monitoring_state_is_running() {
        assert!(MonitoringState::Running.is_running());
        assert!(!MonitoringState::Stopped.is_running());
    }

    #[test]
    fn test_monitoring_state_status_labels() {
        assert_eq!(
            MonitoringState::Running.status_label(),
            "Actively monitoring"
        );
        assert_eq!(
            MonitoringState::Stopped.status_label(),
            "Monitoring stopped"
        );
    }

    // ── SessionSnapshot ───────────────────────────────────────────────────

    #[test]
    fn test_idle_snapshot_defaults() {
        let snap = SessionSnapshot::idle();
        assert_eq!(snap.state, MonitoringState::Stopped);
        assert_eq!(snap.session_seconds, 0);
        assert_eq!(snap.current_activity, "Visual Studio Code");
    }

    #[test]
    fn test_idle_activity_is_first_catalog_entry() {
        assert_eq!(SessionSnapshot::idle().current_activity, ACTIVITY_CATALOG[0]);
    }

    #[test]
    fn test_catalog_has_five_distinct_labels() {
        let mut labels: Vec<&str> = ACTIVITY_CATALOG.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 5, "catalog labels must be distinct");
    }

    // ── EfficiencyScore ───────────────────────────────────────────────────

    #[test]
    fn test_score_clamped_to_100() {
        assert_eq!(EfficiencyScore::new(250).value(), 100);
        assert_eq!(EfficiencyScore::new(100).value(), 100);
        assert_eq!(EfficiencyScore::new(0).value(), 0);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(EfficiencyScore::new(80).rating(), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyScore::new(95).rating(), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyScore::new(79).rating(), EfficiencyRating::Good);
        assert_eq!(EfficiencyScore::new(60).rating(), EfficiencyRating::Good);
        assert_eq!(
            EfficiencyScore::new(59).rating(),
            EfficiencyRating::NeedsImprovement
        );
        assert_eq!(
            EfficiencyScore::new(0).rating(),
            EfficiencyRating::NeedsImprovement
        );
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(EfficiencyRating::Excellent.label(), "Excellent");
        assert_eq!(EfficiencyRating::Good.label(), "Good");
        assert_eq!(
            EfficiencyRating::NeedsImprovement.label(),
            "Needs Improvement"
        );
    }

    // ── AppCategory ───────────────────────────────────────────────────────

    #[test]
    fn test_category_labels() {
        assert_eq!(AppCategory::Productive.label(), "productive");
        assert_eq!(AppCategory::Neutral.label(), "neutral");
        assert_eq!(AppCategory::NonProductive.label(), "non-productive");
    }

    #[test]
    fn test_category_cycle_returns_to_start() {
        let start = AppCategory::Productive;
        assert_eq!(start.next(), AppCategory::Neutral);
        assert_eq!(start.next().next(), AppCategory::NonProductive);
        assert_eq!(start.next().next().next(), start);
    }

    // ── ReportStatus ──────────────────────────────────────────────────────

    #[test]
    fn test_report_status_labels() {
        assert_eq!(ReportStatus::Sent.label(), "sent");
        assert_eq!(ReportStatus::Draft.label(), "draft");
    }

    // ── serde round-trips for persisted-adjacent types ────────────────────

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = SessionSnapshot {
            state: MonitoringState::Running,
            session_seconds: 42,
            current_activity: "Slack".to_string(),
        };
        let json = serde_json::to_string(&snap).expect("serialize");
        let back: SessionSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snap);
    }

    #[test]
    fn test_monitoring_state_serde_lowercase() {
        let json = serde_json::to_string(&MonitoringState::Running).expect("serialize");
        assert_eq!(json, "\"running\"");
    }
}

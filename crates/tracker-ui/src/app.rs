//! Main application state and TUI event loop for the Efficiency Tracker.
//!
//! [`App`] owns the theme, the active tab, the latest session snapshot, and
//! the in-memory Settings form state. It polls the snapshot channel once per
//! render and forwards the start/stop toggle to the session controller.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::Tabs,
    Frame, Terminal,
};
use tokio::sync::watch;

use tracker_core::models::{
    AppUsage, CategoryShare, DailyEfficiency, EmailSettings, HourlyActivity, MonthlyTrend,
    ReportEntry, ReportOptions, SessionSnapshot, TodayOverview,
};
use tracker_data::samples;
use tracker_runtime::orchestrator::{SessionCommand, SessionController};

use crate::analytics_view::{self, AnalyticsData};
use crate::components::header::Header;
use crate::components::stat_cards::{self, StatCardsData};
use crate::dashboard_view::{self, DashboardData};
use crate::reports_view::{self, ReportsData};
use crate::settings_view::{self, SettingsState};
use crate::themes::Theme;

// ── Tab ───────────────────────────────────────────────────────────────────────

/// Which screen the TUI is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Analytics,
    Reports,
    Settings,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Analytics, Tab::Reports, Tab::Settings];

    /// Display title of the tab.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Analytics => "Analytics",
            Tab::Reports => "Reports",
            Tab::Settings => "Settings",
        }
    }

    /// Position of the tab in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Analytics => 1,
            Tab::Reports => 2,
            Tab::Settings => 3,
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a CLI view name. Unknown names fall back to the dashboard.
    pub fn from_name(name: &str) -> Tab {
        match name {
            "analytics" => Tab::Analytics,
            "reports" => Tab::Reports,
            "settings" => Tab::Settings,
            _ => Tab::Dashboard,
        }
    }
}

// ── Screen data ───────────────────────────────────────────────────────────────

/// All static datasets the screens display, loaded once at startup.
struct ScreenData {
    today: TodayOverview,
    apps: Vec<AppUsage>,
    week: Vec<DailyEfficiency>,
    hours: Vec<HourlyActivity>,
    shares: Vec<CategoryShare>,
    months: Vec<MonthlyTrend>,
    email: EmailSettings,
    options: ReportOptions,
    reports: Vec<ReportEntry>,
}

impl ScreenData {
    fn load() -> Self {
        Self {
            today: samples::today_overview(),
            apps: samples::top_apps(),
            week: samples::weekly_efficiency(),
            hours: samples::hourly_activity(),
            shares: samples::category_shares(),
            months: samples::monthly_trends(),
            email: samples::default_email_settings(),
            options: samples::default_report_options(),
            reports: samples::recent_reports(),
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the Efficiency Tracker TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Active screen tab.
    pub tab: Tab,
    /// Human-readable timezone string shown in the header.
    pub timezone: String,
    /// Most recent session snapshot, refreshed once per render.
    pub snapshot: SessionSnapshot,
    /// In-memory form state of the Settings screen.
    pub settings: SettingsState,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// Static display datasets.
    data: ScreenData,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, tab: Tab, timezone: String) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            tab,
            timezone,
            snapshot: SessionSnapshot::idle(),
            settings: SettingsState::from_samples(),
            should_quit: false,
            data: ScreenData::load(),
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Run the TUI event loop, reading snapshots from `rx` and sending
    /// start/stop commands through `controller`.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the terminal event loop stays on the current thread while snapshots
    /// arrive on the watch channel. The loop exits on `q` or `Ctrl+C`.
    pub async fn run(
        mut self,
        rx: watch::Receiver<SessionSnapshot>,
        controller: &SessionController,
    ) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            // One snapshot read per render; the watch channel always holds
            // the latest value.
            self.snapshot = rx.borrow().clone();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(cmd) = self.handle_key(key) {
                        let sent = match cmd {
                            SessionCommand::Start => controller.start().await,
                            SessionCommand::Stop => controller.stop().await,
                        };
                        if let Err(e) = sent {
                            tracing::warn!(error = %e, "session command failed");
                        }
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Apply one key event. Returns the session command to send, if the key
    /// was the monitoring toggle.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionCommand> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,

            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char('1') => self.tab = Tab::Dashboard,
            KeyCode::Char('2') => self.tab = Tab::Analytics,
            KeyCode::Char('3') => self.tab = Tab::Reports,
            KeyCode::Char('4') => self.tab = Tab::Settings,

            KeyCode::Char('s') | KeyCode::Char('S') => {
                return Some(if self.snapshot.state.is_running() {
                    SessionCommand::Stop
                } else {
                    SessionCommand::Start
                });
            }

            KeyCode::Up if self.tab == Tab::Settings => self.settings.select_prev(),
            KeyCode::Down if self.tab == Tab::Settings => self.settings.select_next(),
            KeyCode::Left | KeyCode::Right if self.tab == Tab::Settings => {
                self.settings.cycle_selected();
            }

            _ => {}
        }
        None
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Render the full frame: header, stat cards, tab bar, active screen.
    fn render(&self, frame: &mut Frame) {
        let sections = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

        // Header.
        let header = Header::new(self.tab.title(), &self.timezone, &self.theme);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(ratatui::text::Text::from(header.to_lines())),
            sections[0],
        );

        // Stat cards.
        let cards = StatCardsData {
            snapshot: &self.snapshot,
            efficiency: self.data.today.efficiency,
        };
        stat_cards::render_stat_cards(frame, sections[1], &cards, &self.theme);

        // Tab bar.
        let titles = Tab::ALL.iter().map(|t| t.title());
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(self.theme.tab_inactive)
            .highlight_style(self.theme.tab_active)
            .divider("|");
        frame.render_widget(tabs, sections[2]);

        // Active screen.
        let body = sections[3];
        match self.tab {
            Tab::Dashboard => {
                let data = DashboardData {
                    today: &self.data.today,
                    apps: &self.data.apps,
                    snapshot: &self.snapshot,
                };
                dashboard_view::render_dashboard(frame, body, &data, &self.theme);
            }
            Tab::Analytics => {
                let data = AnalyticsData {
                    week: &self.data.week,
                    hours: &self.data.hours,
                    shares: &self.data.shares,
                    months: &self.data.months,
                };
                analytics_view::render_analytics(frame, body, &data, &self.theme);
            }
            Tab::Reports => {
                let data = ReportsData {
                    email: &self.data.email,
                    options: &self.data.options,
                    reports: &self.data.reports,
                };
                reports_view::render_reports(frame, body, &data, &self.theme);
            }
            Tab::Settings => {
                settings_view::render_settings(frame, body, &self.settings, &self.theme);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::models::MonitoringState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new("dark", Tab::Dashboard, "UTC".to_string())
    }

    // ── Tab ───────────────────────────────────────────────────────────────

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Dashboard.next(), Tab::Analytics);
        assert_eq!(Tab::Settings.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Settings);
        assert_eq!(Tab::Analytics.prev(), Tab::Dashboard);
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(Tab::from_name("analytics"), Tab::Analytics);
        assert_eq!(Tab::from_name("reports"), Tab::Reports);
        assert_eq!(Tab::from_name("settings"), Tab::Settings);
        assert_eq!(Tab::from_name("dashboard"), Tab::Dashboard);
        assert_eq!(Tab::from_name("bogus"), Tab::Dashboard);
    }

    #[test]
    fn test_tab_titles_match_order() {
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["Dashboard", "Analytics", "Reports", "Settings"]);
    }

    // ── App::new ──────────────────────────────────────────────────────────

    #[test]
    fn test_app_creation_defaults() {
        let app = test_app();
        assert_eq!(app.tab, Tab::Dashboard);
        assert_eq!(app.timezone, "UTC");
        assert!(!app.should_quit);
        assert_eq!(app.snapshot, SessionSnapshot::idle());
    }

    // ── quit keys ─────────────────────────────────────────────────────────

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('c')));
        assert!(!app.should_quit);
    }

    // ── tab navigation keys ───────────────────────────────────────────────

    #[test]
    fn test_tab_key_cycles_screens() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Analytics);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Dashboard);
    }

    #[test]
    fn test_digit_keys_jump_to_screen() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Reports);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.tab, Tab::Dashboard);
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.tab, Tab::Settings);
    }

    // ── monitoring toggle ─────────────────────────────────────────────────

    #[test]
    fn test_s_starts_when_stopped() {
        let mut app = test_app();
        assert_eq!(
            app.handle_key(key(KeyCode::Char('s'))),
            Some(SessionCommand::Start)
        );
    }

    #[test]
    fn test_s_stops_when_running() {
        let mut app = test_app();
        app.snapshot.state = MonitoringState::Running;
        assert_eq!(
            app.handle_key(key(KeyCode::Char('s'))),
            Some(SessionCommand::Stop)
        );
    }

    // ── settings keys are scoped to the Settings tab ──────────────────────

    #[test]
    fn test_arrow_keys_ignored_outside_settings() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.settings.selected, 0);
        assert_eq!(
            app.settings.categories[0].category,
            tracker_core::models::AppCategory::Productive
        );
    }

    #[test]
    fn test_arrow_keys_drive_settings_selection() {
        let mut app = test_app();
        app.tab = Tab::Settings;
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.settings.selected, 2);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.settings.selected, 1);
    }

    #[test]
    fn test_right_key_cycles_category_on_settings() {
        let mut app = test_app();
        app.tab = Tab::Settings;
        let before = app.settings.categories[0].category;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.settings.categories[0].category, before.next());
    }
}

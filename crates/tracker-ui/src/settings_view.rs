//! Settings screen: the app-category list with a movable selection, plus the
//! monitoring / goals / privacy preference panels.
//!
//! All form state lives in [`SettingsState`] in memory; nothing is written
//! anywhere when it changes.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tracker_core::models::{CategoryRule, GoalPrefs, MonitoringPrefs, PrivacyPrefs};
use tracker_data::samples;

use crate::components::truncate_label;
use crate::themes::Theme;

// ── SettingsState ─────────────────────────────────────────────────────────────

/// In-memory form state of the Settings screen.
pub struct SettingsState {
    /// Application → category assignments, one row each.
    pub categories: Vec<CategoryRule>,
    /// Index of the selected category row.
    pub selected: usize,
    pub monitoring: MonitoringPrefs,
    pub goals: GoalPrefs,
    pub privacy: PrivacyPrefs,
}

impl SettingsState {
    /// Fresh state populated from the default sample data.
    pub fn from_samples() -> Self {
        Self {
            categories: samples::default_category_rules(),
            selected: 0,
            monitoring: samples::default_monitoring_prefs(),
            goals: samples::default_goal_prefs(),
            privacy: samples::default_privacy_prefs(),
        }
    }

    /// Move the selection one row down, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.categories.len() {
            self.selected += 1;
        }
    }

    /// Move the selection one row up, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Cycle the selected application's category to the next value.
    pub fn cycle_selected(&mut self) {
        if let Some(rule) = self.categories.get_mut(self.selected) {
            rule.category = rule.category.next();
        }
    }

    /// The currently selected rule, if any rows exist.
    pub fn selected_rule(&self) -> Option<&CategoryRule> {
        self.categories.get(self.selected)
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_samples()
    }
}

// ── Line builders ─────────────────────────────────────────────────────────────

/// One line per category rule, with a marker on the selected row.
pub fn build_category_lines<'a>(state: &SettingsState, theme: &'a Theme) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = state
        .categories
        .iter()
        .enumerate()
        .map(|(idx, rule)| {
            let is_selected = idx == state.selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected { theme.selected } else { theme.text };

            Line::from(vec![
                Span::styled(marker, theme.info),
                Span::styled(
                    format!("{:<26}", truncate_label(&rule.app_name, 25)),
                    name_style,
                ),
                Span::styled(rule.category.label(), theme.category_style(rule.category)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select   ←/→ change category",
        theme.dim,
    )));
    lines
}

/// Monitoring preference lines.
pub fn build_monitoring_lines<'a>(prefs: &MonitoringPrefs, theme: &'a Theme) -> Vec<Line<'a>> {
    vec![
        pair_line("Interval", format!("{}s", prefs.interval_secs), theme),
        toggle_line("Start with system", prefs.start_with_system, theme),
        toggle_line("Minimize to tray", prefs.minimize_to_tray, theme),
        toggle_line("Track idle time", prefs.track_idle_time, theme),
        pair_line(
            "Idle threshold",
            format!("{}m", prefs.idle_threshold_minutes),
            theme,
        ),
    ]
}

/// Goal preference lines.
pub fn build_goal_lines<'a>(prefs: &GoalPrefs, theme: &'a Theme) -> Vec<Line<'a>> {
    vec![
        pair_line("Daily goal", format!("{}h", prefs.daily_goal_hours), theme),
        pair_line("Weekly goal", format!("{}h", prefs.weekly_goal_hours), theme),
        pair_line(
            "Efficiency target",
            format!("{}%", prefs.efficiency_target),
            theme,
        ),
    ]
}

/// Privacy preference lines.
pub fn build_privacy_lines<'a>(prefs: &PrivacyPrefs, theme: &'a Theme) -> Vec<Line<'a>> {
    vec![
        toggle_line("Track window titles", prefs.track_window_titles, theme),
        pair_line(
            "Data retention",
            format!("{}d", prefs.data_retention_days),
            theme,
        ),
        toggle_line("Export enabled", prefs.export_enabled, theme),
    ]
}

fn pair_line<'a>(label: &'a str, value: String, theme: &'a Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), theme.label),
        Span::styled(value, theme.value),
    ])
}

fn toggle_line<'a>(label: &'a str, on: bool, theme: &'a Theme) -> Line<'a> {
    let state = if on {
        Span::styled("on", theme.success)
    } else {
        Span::styled("off", theme.dim)
    };
    Line::from(vec![Span::styled(format!("{:<20}", label), theme.label), state])
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render the settings screen into `area`.
pub fn render_settings(frame: &mut Frame, area: Rect, state: &SettingsState, theme: &Theme) {
    let sections = Layout::vertical([
        Constraint::Length(state.categories.len() as u16 + 4),
        Constraint::Min(0),
    ])
    .split(area);

    let categories = Paragraph::new(Text::from(build_category_lines(state, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" App Categories "),
    );
    frame.render_widget(categories, sections[0]);

    let panels = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(sections[1]);
    let panel_data = [
        (
            " Monitoring ",
            Text::from(build_monitoring_lines(&state.monitoring, theme)),
        ),
        (
            " Goals & Targets ",
            Text::from(build_goal_lines(&state.goals, theme)),
        ),
        (
            " Privacy & Data ",
            Text::from(build_privacy_lines(&state.privacy, theme)),
        ),
    ];

    for ((title, text), rect) in panel_data.into_iter().zip(panels.iter()) {
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(title),
        );
        frame.render_widget(widget, *rect);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::models::AppCategory;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── selection navigation ─────────────────────────────────────────────

    #[test]
    fn test_selection_starts_at_first_row() {
        let state = SettingsState::from_samples();
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.selected_rule().expect("rows").app_name,
            "Visual Studio Code"
        );
    }

    #[test]
    fn test_select_next_stops_at_last_row() {
        let mut state = SettingsState::from_samples();
        let rows = state.categories.len();
        for _ in 0..rows * 2 {
            state.select_next();
        }
        assert_eq!(state.selected, rows - 1);
    }

    #[test]
    fn test_select_prev_stops_at_first_row() {
        let mut state = SettingsState::from_samples();
        state.select_next();
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    // ── category cycling ─────────────────────────────────────────────────

    #[test]
    fn test_cycle_selected_changes_only_selected_row() {
        let mut state = SettingsState::from_samples();
        state.select_next();
        state.select_next(); // Slack, neutral

        let before: Vec<AppCategory> = state.categories.iter().map(|r| r.category).collect();
        state.cycle_selected();

        for (idx, rule) in state.categories.iter().enumerate() {
            if idx == state.selected {
                assert_eq!(rule.category, before[idx].next());
            } else {
                assert_eq!(rule.category, before[idx]);
            }
        }
    }

    #[test]
    fn test_cycle_selected_round_trips() {
        let mut state = SettingsState::from_samples();
        let original = state.categories[0].category;
        state.cycle_selected();
        state.cycle_selected();
        state.cycle_selected();
        assert_eq!(state.categories[0].category, original);
    }

    // ── line builders ────────────────────────────────────────────────────

    #[test]
    fn test_category_lines_mark_selected_row() {
        let theme = Theme::dark();
        let mut state = SettingsState::from_samples();
        state.select_next();

        let lines = build_category_lines(&state, &theme);
        assert!(!line_text(&lines[0]).starts_with('▸'));
        assert!(line_text(&lines[1]).starts_with('▸'));
    }

    #[test]
    fn test_category_lines_include_badges_and_hint() {
        let theme = Theme::dark();
        let state = SettingsState::from_samples();
        let lines = build_category_lines(&state, &theme);

        // 8 rules + blank + hint line.
        assert_eq!(lines.len(), state.categories.len() + 2);
        assert!(line_text(&lines[0]).ends_with("productive"));
        assert!(line_text(&lines[2]).ends_with("neutral"), "Slack row");
        let hint = line_text(lines.last().expect("hint line"));
        assert!(hint.contains("change category"), "got: {hint}");
    }

    #[test]
    fn test_monitoring_lines_values() {
        let theme = Theme::dark();
        let prefs = samples::default_monitoring_prefs();
        let lines = build_monitoring_lines(&prefs, &theme);
        assert_eq!(lines.len(), 5);
        assert!(line_text(&lines[0]).ends_with("1s"));
        assert!(line_text(&lines[1]).ends_with("off"));
        assert!(line_text(&lines[4]).ends_with("5m"));
    }

    #[test]
    fn test_goal_lines_values() {
        let theme = Theme::dark();
        let prefs = samples::default_goal_prefs();
        let lines = build_goal_lines(&prefs, &theme);
        assert!(line_text(&lines[0]).ends_with("8h"));
        assert!(line_text(&lines[1]).ends_with("40h"));
        assert!(line_text(&lines[2]).ends_with("80%"));
    }

    #[test]
    fn test_privacy_lines_values() {
        let theme = Theme::dark();
        let prefs = samples::default_privacy_prefs();
        let lines = build_privacy_lines(&prefs, &theme);
        assert!(line_text(&lines[0]).ends_with("on"));
        assert!(line_text(&lines[1]).ends_with("90d"));
        assert!(line_text(&lines[2]).ends_with("on"));
    }
}

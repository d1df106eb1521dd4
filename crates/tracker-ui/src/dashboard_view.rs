//! Dashboard screen: today's goal progress, the live session card, and the
//! top-applications list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tracker_core::formatting::format_hours;
use tracker_core::models::{AppUsage, SessionSnapshot, TodayOverview};
use tracker_data::summary;

use crate::components::progress_bar::{GoalProgressBar, ShareBar};
use crate::components::truncate_label;
use crate::themes::Theme;

/// Inputs for the dashboard screen.
pub struct DashboardData<'a> {
    pub today: &'a TodayOverview,
    pub apps: &'a [AppUsage],
    pub snapshot: &'a SessionSnapshot,
}

// ── Line builders ─────────────────────────────────────────────────────────────

/// Body of the "Today's Progress" card: hours line, goal bar, completion
/// summary.
pub fn build_progress_lines<'a>(today: &TodayOverview, theme: &'a Theme) -> Vec<Line<'a>> {
    let progress = summary::goal_progress(today);
    let remaining = summary::remaining_hours(today);

    vec![
        Line::from(vec![
            Span::styled("Productive Time  ", theme.label),
            Span::styled(format_hours(today.productive_hours), theme.value),
            Span::styled(" / ", theme.dim),
            Span::styled(format_hours(today.goal_hours), theme.dim),
        ]),
        GoalProgressBar::new(today.productive_hours, today.goal_hours, theme).to_line(),
        Line::from(vec![
            Span::styled(format!("{:.1}% complete", progress), theme.success),
            Span::styled(
                format!("   {} remaining", format_hours(remaining)),
                theme.dim,
            ),
        ]),
    ]
}

/// Body of the "Current Session" card: active/productive minutes and the
/// monitoring pill.
pub fn build_session_lines<'a>(snapshot: &SessionSnapshot, theme: &'a Theme) -> Vec<Line<'a>> {
    let active = summary::active_minutes(snapshot.session_seconds);
    let productive = summary::productive_minutes(snapshot.session_seconds);

    let pill_style = if snapshot.state.is_running() {
        theme.success
    } else {
        theme.dim
    };
    let pill = if snapshot.state.is_running() {
        "Currently Monitoring"
    } else {
        "Monitoring Paused"
    };

    vec![
        Line::from(vec![
            Span::styled("Minutes Active   ", theme.label),
            Span::styled(active.to_string(), theme.value),
        ]),
        Line::from(vec![
            Span::styled("Productive Min   ", theme.label),
            Span::styled(productive.to_string(), theme.value),
        ]),
        Line::from(Span::styled(pill, pill_style)),
    ]
}

/// One line per application: rank, name, hours, share bar, category badge.
pub fn build_top_app_lines<'a>(apps: &[AppUsage], theme: &'a Theme) -> Vec<Line<'a>> {
    apps.iter()
        .enumerate()
        .map(|(idx, app)| {
            let mut spans = vec![
                Span::styled(format!("{:>2}. ", idx + 1), theme.dim),
                Span::styled(
                    format!("{:<24}", truncate_label(&app.name, 23)),
                    theme.text,
                ),
                Span::styled(format!("{:>5} ", format_hours(app.hours)), theme.value),
            ];
            spans.extend(ShareBar::new(app.percentage, theme).to_line().spans);
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                app.category.label(),
                theme.category_style(app.category),
            ));
            Line::from(spans)
        })
        .collect()
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render the dashboard screen into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, data: &DashboardData<'_>, theme: &Theme) {
    let rows = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(area);
    let cards = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[0]);

    let progress = Paragraph::new(Text::from(build_progress_lines(data.today, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Today's Progress "),
    );
    frame.render_widget(progress, cards[0]);

    let session = Paragraph::new(Text::from(build_session_lines(data.snapshot, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Current Session "),
    );
    frame.render_widget(session, cards[1]);

    let apps = Paragraph::new(Text::from(build_top_app_lines(data.apps, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Top Applications Today "),
    );
    frame.render_widget(apps, rows[1]);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

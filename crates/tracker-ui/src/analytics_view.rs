//! Analytics screen: summary cards plus the weekly, hourly, category, and
//! monthly breakdowns, all drawn as styled text bars.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tracker_core::models::{
    CategoryShare, DailyEfficiency, EfficiencyScore, HourlyActivity, MonthlyTrend,
};
use tracker_data::{samples, summary};

use crate::components::progress_bar::CategorySplitBar;
use crate::themes::Theme;

/// Display width of the hourly activity meter.
const ACTIVITY_METER_WIDTH: usize = 30;

/// Columns drawn per productive / non-productive hour in the weekly chart.
const COLS_PER_HOUR: f64 = 4.0;

/// Inputs for the analytics screen.
pub struct AnalyticsData<'a> {
    pub week: &'a [DailyEfficiency],
    pub hours: &'a [HourlyActivity],
    pub shares: &'a [CategoryShare],
    pub months: &'a [MonthlyTrend],
}

// ── Line builders ─────────────────────────────────────────────────────────────

/// Summary row: weekly average, peak hour, focus score.
///
/// The average and peak are computed from the datasets rather than
/// hard-coded so they always agree with the charts below them.
pub fn build_summary_lines<'a>(
    week: &[DailyEfficiency],
    hours: &[HourlyActivity],
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let avg = summary::weekly_average(week);
    let avg_score = EfficiencyScore::new(avg.round() as u8);
    let peak = summary::peak_hour(hours);

    vec![
        Line::from(vec![
            Span::styled("Weekly Average   ", theme.label),
            Span::styled(format!("{:.1}%", avg), theme.efficiency_style(avg_score)),
        ]),
        Line::from(vec![
            Span::styled("Peak Hours       ", theme.label),
            Span::styled(
                peak.map(|p| p.hour.clone()).unwrap_or_else(|| "-".to_string()),
                theme.info,
            ),
            Span::styled("  Most productive time", theme.dim),
        ]),
        Line::from(vec![
            Span::styled("Focus Score      ", theme.label),
            Span::styled(format!("{:.1}/10", samples::FOCUS_SCORE), theme.value),
        ]),
    ]
}

/// One line per weekday: efficiency percentage plus stacked productive /
/// non-productive hour bars.
pub fn build_weekly_lines<'a>(week: &[DailyEfficiency], theme: &'a Theme) -> Vec<Line<'a>> {
    week.iter()
        .map(|day| {
            let score = EfficiencyScore::new(day.efficiency);
            let productive_cols = (day.productive_hours * COLS_PER_HOUR).round() as usize;
            let non_productive_cols = (day.non_productive_hours * COLS_PER_HOUR).round() as usize;

            Line::from(vec![
                Span::styled(format!("{:<5}", day.day), theme.label),
                Span::styled(
                    format!("{:>3}%  ", day.efficiency),
                    theme.efficiency_style(score),
                ),
                Span::styled("█".repeat(productive_cols), theme.category_productive),
                Span::styled(
                    "█".repeat(non_productive_cols),
                    theme.category_non_productive,
                ),
                Span::styled(
                    format!(
                        "  {:.1}h / {:.1}h",
                        day.productive_hours, day.non_productive_hours
                    ),
                    theme.dim,
                ),
            ])
        })
        .collect()
}

/// One line per hour of the working day with a horizontal activity meter.
pub fn build_hourly_lines<'a>(hours: &[HourlyActivity], theme: &'a Theme) -> Vec<Line<'a>> {
    hours
        .iter()
        .map(|point| {
            let filled = (usize::from(point.activity) * ACTIVITY_METER_WIDTH) / 100;
            let empty = ACTIVITY_METER_WIDTH - filled;

            Line::from(vec![
                Span::styled(format!("{:<6}", point.hour), theme.label),
                Span::styled("█".repeat(filled), theme.info),
                Span::styled("░".repeat(empty), theme.progress_empty),
                Span::styled(format!(" {:>3}", point.activity), theme.value),
            ])
        })
        .collect()
}

/// The category-share split bar.
pub fn build_category_line<'a>(shares: &[CategoryShare], theme: &'a Theme) -> Line<'a> {
    let pairs: Vec<(String, u8)> = shares
        .iter()
        .map(|s| (s.name.clone(), s.percent))
        .collect();
    CategorySplitBar::new(pairs, theme).to_line()
}

/// One line per month: efficiency and hours worked.
pub fn build_monthly_lines<'a>(months: &[MonthlyTrend], theme: &'a Theme) -> Vec<Line<'a>> {
    months
        .iter()
        .map(|month| {
            let score = EfficiencyScore::new(month.efficiency);
            Line::from(vec![
                Span::styled(format!("{:<5}", month.month), theme.label),
                Span::styled(
                    format!("{:>3}%  ", month.efficiency),
                    theme.efficiency_style(score),
                ),
                Span::styled("▪".repeat(usize::from(month.efficiency) / 4), theme.info),
                Span::styled(format!("  {}h worked", month.hours_worked), theme.dim),
            ])
        })
        .collect()
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render the analytics screen into `area`.
pub fn render_analytics(frame: &mut Frame, area: Rect, data: &AnalyticsData<'_>, theme: &Theme) {
    let sections = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(data.week.len() as u16 + 2),
        Constraint::Length(data.hours.len() as u16 + 2),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let blocks = [
        (
            " This Week ",
            Text::from(build_summary_lines(data.week, data.hours, theme)),
            sections[0],
        ),
        (
            " Weekly Efficiency Overview ",
            Text::from(build_weekly_lines(data.week, theme)),
            sections[1],
        ),
        (
            " Daily Activity Pattern ",
            Text::from(build_hourly_lines(data.hours, theme)),
            sections[2],
        ),
        (
            " Application Categories ",
            Text::from(build_category_line(data.shares, theme)),
            sections[3],
        ),
        (
            " Monthly Trends ",
            Text::from(build_monthly_lines(data.months, theme)),
            sections[4],
        ),
    ];

    for (title, text, rect) in blocks {
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(title),
        );
        frame.render_widget(widget, rect);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── build_summary_lines ──────────────────────────────────────────────

    #[test]
    fn test_summary_lines_computed_from_samples() {
        let theme = Theme::dark();
        let week = samples::weekly_efficiency();
        let hours = samples::hourly_activity();
        let lines = build_summary_lines(&week, &hours, &theme);
        assert_eq!(lines.len(), 3);

        assert!(
            line_text(&lines[0]).contains("69.0%"),
            "average should be computed from the week: {}",
            line_text(&lines[0])
        );
        assert!(line_text(&lines[1]).contains("11 AM"));
        assert!(line_text(&lines[2]).contains("8.2/10"));
    }

    #[test]
    fn test_summary_lines_empty_datasets() {
        let theme = Theme::dark();
        let lines = build_summary_lines(&[], &[], &theme);
        assert!(line_text(&lines[0]).contains("0.0%"));
        assert!(line_text(&lines[1]).contains('-'));
    }

    // ── build_weekly_lines ───────────────────────────────────────────────

    #[test]
    fn test_weekly_lines_one_per_day() {
        let theme = Theme::dark();
        let week = samples::weekly_efficiency();
        let lines = build_weekly_lines(&week, &theme);
        assert_eq!(lines.len(), 7);

        let monday = line_text(&lines[0]);
        assert!(monday.starts_with("Mon"), "got: {monday}");
        assert!(monday.contains("85%"), "got: {monday}");
        assert!(monday.contains("6.8h / 1.2h"), "got: {monday}");
    }

    #[test]
    fn test_weekly_lines_bar_widths_scale_with_hours() {
        let theme = Theme::dark();
        let week = samples::weekly_efficiency();
        let lines = build_weekly_lines(&week, &theme);

        // Monday: 6.8 productive hours → 27 columns; 1.2 non-productive → 5.
        assert_eq!(lines[0].spans[2].content.chars().count(), 27);
        assert_eq!(lines[0].spans[3].content.chars().count(), 5);
    }

    // ── build_hourly_lines ───────────────────────────────────────────────

    #[test]
    fn test_hourly_lines_meter_proportions() {
        let theme = Theme::dark();
        let hours = samples::hourly_activity();
        let lines = build_hourly_lines(&hours, &theme);
        assert_eq!(lines.len(), 10);

        // 9 AM is 45 → 13 of 30 columns filled.
        assert_eq!(lines[0].spans[1].content.chars().count(), 13);
        assert_eq!(lines[0].spans[2].content.chars().count(), 17);
        assert!(line_text(&lines[0]).contains("45"));
    }

    // ── build_category_line ──────────────────────────────────────────────

    #[test]
    fn test_category_line_names_all_groups() {
        let theme = Theme::dark();
        let text = line_text(&build_category_line(&samples::category_shares(), &theme));
        for group in ["Development", "Communication", "Research", "Social Media"] {
            assert!(text.contains(group), "missing {group}: {text}");
        }
    }

    // ── build_monthly_lines ──────────────────────────────────────────────

    #[test]
    fn test_monthly_lines_one_per_month() {
        let theme = Theme::dark();
        let months = samples::monthly_trends();
        let lines = build_monthly_lines(&months, &theme);
        assert_eq!(lines.len(), 6);

        let january = line_text(&lines[0]);
        assert!(january.starts_with("Jan"), "got: {january}");
        assert!(january.contains("72%"), "got: {january}");
        assert!(january.contains("160h worked"), "got: {january}");
    }
}

//! Reports screen: quick actions, email and content settings, and the
//! recent-reports table.
//!
//! Everything here is presentational; nothing is sent or exported.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use tracker_core::models::{EmailSettings, ReportEntry, ReportOptions};

use crate::themes::Theme;

/// Inputs for the reports screen.
pub struct ReportsData<'a> {
    pub email: &'a EmailSettings,
    pub options: &'a ReportOptions,
    pub reports: &'a [ReportEntry],
}

// ── Line builders ─────────────────────────────────────────────────────────────

/// The three quick-action descriptions at the top of the screen.
pub fn build_action_lines(theme: &Theme) -> Vec<Line<'_>> {
    let actions = [
        ("Send Report Now ", "Generate and send the current report"),
        ("Export Data     ", "Download productivity data (CSV / JSON)"),
        ("Schedule Report ", "Set up automated reporting"),
    ];
    actions
        .into_iter()
        .map(|(name, description)| {
            Line::from(vec![
                Span::styled(name, theme.value),
                Span::styled(description, theme.dim),
            ])
        })
        .collect()
}

/// Email configuration summary.
pub fn build_email_lines<'a>(email: &EmailSettings, theme: &'a Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled("Email Reports   ", theme.label),
            toggle_span(email.enabled, theme),
        ]),
        Line::from(vec![
            Span::styled("Recipients      ", theme.label),
            Span::styled(email.recipients.join(", "), theme.value),
        ]),
        Line::from(vec![
            Span::styled("Schedule        ", theme.label),
            Span::styled(format!("{} at {}", email.frequency, email.time), theme.value),
        ]),
    ]
}

/// Report content options summary.
pub fn build_options_lines<'a>(options: &ReportOptions, theme: &'a Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled("Include Charts  ", theme.label),
            toggle_span(options.include_charts, theme),
        ]),
        Line::from(vec![
            Span::styled("Include Raw Data", theme.label),
            Span::raw(" "),
            toggle_span(options.include_raw_data, theme),
        ]),
        Line::from(vec![
            Span::styled("Date Range      ", theme.label),
            Span::styled(options.date_range.clone(), theme.value),
        ]),
    ]
}

/// A styled on/off indicator.
fn toggle_span(on: bool, theme: &Theme) -> Span<'_> {
    if on {
        Span::styled("on", theme.success)
    } else {
        Span::styled("off", theme.dim)
    }
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render the reports screen into `area`.
pub fn render_reports(frame: &mut Frame, area: Rect, data: &ReportsData<'_>, theme: &Theme) {
    let sections = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .split(area);

    let actions = Paragraph::new(Text::from(build_action_lines(theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Quick Actions "),
    );
    frame.render_widget(actions, sections[0]);

    let halves = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(sections[1]);
    let email = Paragraph::new(Text::from(build_email_lines(data.email, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Email Settings "),
    );
    frame.render_widget(email, halves[0]);

    let options = Paragraph::new(Text::from(build_options_lines(data.options, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Report Options "),
    );
    frame.render_widget(options, halves[1]);

    render_recent_reports(frame, sections[2], data.reports, theme);
}

/// Render the recent-reports table with one row per entry.
fn render_recent_reports(frame: &mut Frame, area: Rect, reports: &[ReportEntry], theme: &Theme) {
    let header_cells = ["Type", "Date", "Status", "Recipients"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = reports
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(report.report_type.clone()),
                Cell::from(report.date.format("%Y-%m-%d").to_string()),
                Cell::from(report.status.label()).style(theme.report_status_style(report.status)),
                Cell::from(report.recipients.to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(" Recent Reports "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tracker_data::samples;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── builders ─────────────────────────────────────────────────────────

    #[test]
    fn test_action_lines_describe_all_three_actions() {
        let theme = Theme::dark();
        let lines = build_action_lines(&theme);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("Send Report Now"));
        assert!(line_text(&lines[1]).contains("Export Data"));
        assert!(line_text(&lines[2]).contains("Schedule Report"));
    }

    #[test]
    fn test_email_lines_show_schedule() {
        let theme = Theme::dark();
        let email = samples::default_email_settings();
        let lines = build_email_lines(&email, &theme);
        assert!(line_text(&lines[0]).ends_with("on"));
        assert!(line_text(&lines[1]).contains("manager@company.com"));
        assert!(line_text(&lines[2]).contains("daily at 09:00"));
    }

    #[test]
    fn test_options_lines_toggles() {
        let theme = Theme::dark();
        let options = samples::default_report_options();
        let lines = build_options_lines(&options, &theme);
        assert!(line_text(&lines[0]).ends_with("on"));
        assert!(line_text(&lines[1]).ends_with("off"));
        assert!(line_text(&lines[2]).contains("7days"));
    }

    // ── full-screen render ───────────────────────────────────────────────

    /// Collect the rendered buffer into a single string for content asserts.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_reports_table_contents() {
        let theme = Theme::dark();
        let email = samples::default_email_settings();
        let options = samples::default_report_options();
        let reports = samples::recent_reports();
        let data = ReportsData {
            email: &email,
            options: &options,
            reports: &reports,
        };

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render_reports(frame, frame.area(), &data, &theme))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Daily Report"), "missing table row");
        assert!(text.contains("2024-06-28"), "missing formatted date");
        assert!(text.contains("draft"), "missing draft status");
        assert!(text.contains("Recent Reports"), "missing table title");
    }

    #[test]
    fn test_render_reports_empty_table() {
        let theme = Theme::dark();
        let email = samples::default_email_settings();
        let options = samples::default_report_options();
        let data = ReportsData {
            email: &email,
            options: &options,
            reports: &[],
        };

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        // Must not panic with no rows.
        terminal
            .draw(|frame| render_reports(frame, frame.area(), &data, &theme))
            .expect("draw");
    }
}

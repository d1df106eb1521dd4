use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tracker_core::formatting::format_clock;
use tracker_core::models::{EfficiencyScore, SessionSnapshot};

use crate::components::truncate_label;
use crate::themes::Theme;

/// Maximum display width of the current-app label inside its card.
const APP_LABEL_WIDTH: usize = 22;

/// Inputs for the quick-stats card row.
pub struct StatCardsData<'a> {
    /// Latest session snapshot.
    pub snapshot: &'a SessionSnapshot,
    /// Today's efficiency score (static display input).
    pub efficiency: EfficiencyScore,
}

/// Build the four stat cards as `(title, body lines)` pairs:
/// Session Time, Current App, Today's Efficiency, Status.
pub fn build_cards<'a>(data: &StatCardsData<'_>, theme: &'a Theme) -> Vec<(&'static str, Vec<Line<'a>>)> {
    let snapshot = data.snapshot;

    // Session Time.
    let session_time = vec![
        Line::from(Span::styled(
            format_clock(snapshot.session_seconds),
            theme.value,
        )),
        Line::from(Span::styled(snapshot.state.status_label(), theme.dim)),
    ];

    // Current App, with the live-pulse dot underneath.
    let (dot, dot_style) = if snapshot.state.is_running() {
        ("●", theme.status_live)
    } else {
        ("○", theme.status_idle)
    };
    let current_app = vec![
        Line::from(Span::styled(
            truncate_label(&snapshot.current_activity, APP_LABEL_WIDTH),
            theme.value,
        )),
        Line::from(vec![
            Span::styled(dot, dot_style),
            Span::styled(
                if snapshot.state.is_running() {
                    " live"
                } else {
                    " idle"
                },
                theme.dim,
            ),
        ]),
    ];

    // Today's Efficiency, coloured by rating band.
    let efficiency = vec![
        Line::from(Span::styled(
            format!("{}%", data.efficiency.value()),
            theme.efficiency_style(data.efficiency),
        )),
        Line::from(Span::styled("today", theme.dim)),
    ];

    // Status badge.
    let status = vec![
        Line::from(Span::styled(
            data.efficiency.rating().label(),
            theme.efficiency_style(data.efficiency),
        )),
        Line::from(Span::styled(snapshot.state.status_label(), theme.dim)),
    ];

    vec![
        ("Session Time", session_time),
        ("Current App", current_app),
        ("Today's Efficiency", efficiency),
        ("Status", status),
    ]
}

/// Render the four stat cards side by side across `area`.
pub fn render_stat_cards(frame: &mut Frame, area: Rect, data: &StatCardsData<'_>, theme: &Theme) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((title, lines), column) in build_cards(data, theme).into_iter().zip(columns.iter()) {
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        );
        frame.render_widget(card, *column);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

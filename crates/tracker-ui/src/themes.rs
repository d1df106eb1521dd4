use ratatui::style::{Color, Modifier, Style};

use tracker_core::models::{AppCategory, EfficiencyRating, EfficiencyScore, ReportStatus};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the tracker
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Tabs ─────────────────────────────────────────────────────────────────
    pub tab_active: Style,
    pub tab_inactive: Style,

    // ── Progress bars ────────────────────────────────────────────────────────
    /// Filled portion of the goal progress bar.
    pub progress_fill: Style,
    /// Unfilled (empty) portion of a progress bar.
    pub progress_empty: Style,
    pub progress_label: Style,

    // ── Application categories ───────────────────────────────────────────────
    pub category_productive: Style,
    pub category_neutral: Style,
    pub category_non_productive: Style,

    // ── Monitoring indicator ─────────────────────────────────────────────────
    /// Pulse dot while monitoring runs.
    pub status_live: Style,
    /// Pulse dot while monitoring is stopped.
    pub status_idle: Style,

    // ── Tables ───────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,

    // ── Selection ────────────────────────────────────────────────────────────
    /// Highlight for the selected row on the Settings screen.
    pub selected: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            tab_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),

            progress_fill: Style::default().fg(Color::Cyan),
            progress_empty: Style::default().fg(Color::DarkGray),
            progress_label: Style::default().fg(Color::Gray),

            category_productive: Style::default().fg(Color::Green),
            category_neutral: Style::default().fg(Color::Yellow),
            category_non_productive: Style::default().fg(Color::Red),

            status_live: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            status_idle: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),

            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            tab_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),

            progress_fill: Style::default().fg(Color::Blue),
            progress_empty: Style::default().fg(Color::Gray),
            progress_label: Style::default().fg(Color::DarkGray),

            category_productive: Style::default().fg(Color::Green),
            category_neutral: Style::default().fg(Color::Yellow),
            category_non_productive: Style::default().fg(Color::Red),

            status_live: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            status_idle: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),

            selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_sparkle: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            tab_active: Style::default().fg(Color::Cyan),
            tab_inactive: Style::default().fg(Color::Gray),

            progress_fill: Style::default().fg(Color::Cyan),
            progress_empty: Style::default().fg(Color::DarkGray),
            progress_label: Style::default().fg(Color::White),

            category_productive: Style::default().fg(Color::Green),
            category_neutral: Style::default().fg(Color::Yellow),
            category_non_productive: Style::default().fg(Color::Red),

            status_live: Style::default().fg(Color::Green),
            status_idle: Style::default().fg(Color::DarkGray),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),

            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Style for an efficiency figure, by rating band.
    ///
    /// * Excellent → `success`
    /// * Good → `warning`
    /// * Needs Improvement → `error`
    pub fn efficiency_style(&self, score: EfficiencyScore) -> Style {
        match score.rating() {
            EfficiencyRating::Excellent => self.success,
            EfficiencyRating::Good => self.warning,
            EfficiencyRating::NeedsImprovement => self.error,
        }
    }

    /// Style for an application category badge.
    pub fn category_style(&self, category: AppCategory) -> Style {
        match category {
            AppCategory::Productive => self.category_productive,
            AppCategory::Neutral => self.category_neutral,
            AppCategory::NonProductive => self.category_non_productive,
        }
    }

    /// Style for a report delivery status cell.
    pub fn report_status_style(&self, status: ReportStatus) -> Style {
        match status {
            ReportStatus::Sent => self.success,
            ReportStatus::Draft => self.warning,
        }
    }

    /// Accent style for the `idx`-th category-share segment.
    ///
    /// Cycles through four accents so adjacent segments stay distinct.
    pub fn share_style(&self, idx: usize) -> Style {
        match idx % 4 {
            0 => self.success,
            1 => self.info,
            2 => self.warning,
            _ => self.error,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

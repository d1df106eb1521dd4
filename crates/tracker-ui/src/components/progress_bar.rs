use ratatui::text::{Line, Span};

use tracker_core::formatting::{format_hours, percentage};

use crate::themes::Theme;

/// Configuration controlling visual appearance of a progress bar.
pub struct ProgressBarConfig {
    /// Total width in terminal columns of the bar portion (excluding label).
    pub width: u16,
    /// Character used to fill the completed portion of the bar.
    pub filled_char: char,
    /// Character used to fill the empty portion of the bar.
    pub empty_char: char,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            width: 40,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── GoalProgressBar ──────────────────────────────────────────────────────────

/// Horizontal progress bar showing productive hours relative to the daily
/// goal.
///
/// Renders as a filled + empty portion followed by a label with the
/// percentage and the `current / goal` hours.
pub struct GoalProgressBar<'a> {
    /// Percentage of the goal covered, clamped to `[0.0, 100.0]`.
    pub percentage: f64,
    /// Productive hours so far.
    pub current_hours: f64,
    /// Goal in hours.
    pub goal_hours: f64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: ProgressBarConfig,
}

impl<'a> GoalProgressBar<'a> {
    /// Construct a new bar, computing the percentage automatically.
    pub fn new(current_hours: f64, goal_hours: f64, theme: &'a Theme) -> Self {
        let pct = percentage(current_hours, goal_hours, 1).min(100.0);
        Self {
            percentage: pct,
            current_hours,
            goal_hours,
            theme,
            config: ProgressBarConfig::default(),
        }
    }

    /// Render the progress bar as a [`Line`] suitable for embedding in any
    /// ratatui widget that accepts `Line` values.
    pub fn to_line(&self) -> Line<'a> {
        let filled = ((self.percentage / 100.0) * f64::from(self.config.width)) as u16;
        let empty = self.config.width.saturating_sub(filled);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let label = format!(
            " {:.1}% ({} / {})",
            self.percentage,
            format_hours(self.current_hours),
            format_hours(self.goal_hours),
        );

        Line::from(vec![
            Span::styled(filled_str, self.theme.progress_fill),
            Span::styled(empty_str, self.theme.progress_empty),
            Span::styled(label, self.theme.progress_label),
        ])
    }
}

// ── ShareBar ─────────────────────────────────────────────────────────────────

/// Small fixed-width bar visualising one application's share of tracked time.
pub struct ShareBar<'a> {
    /// Whole-percent share in `[0, 100]`.
    pub percentage: u8,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Total width of the bar in terminal columns.
    pub width: u16,
}

impl<'a> ShareBar<'a> {
    /// Construct a new share bar with the default 20-column width.
    pub fn new(percentage: u8, theme: &'a Theme) -> Self {
        Self {
            percentage: percentage.min(100),
            theme,
            width: 20,
        }
    }

    /// Render the bar plus a right-aligned percentage label as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let filled =
            ((f64::from(self.percentage) / 100.0) * f64::from(self.width)).round() as u16;
        let empty = self.width.saturating_sub(filled);

        Line::from(vec![
            Span::styled("█".repeat(filled as usize), self.theme.progress_fill),
            Span::styled("░".repeat(empty as usize), self.theme.progress_empty),
            Span::styled(
                format!(" {:>3}%", self.percentage),
                self.theme.progress_label,
            ),
        ])
    }
}

// ── CategorySplitBar ─────────────────────────────────────────────────────────

/// A proportional multi-coloured bar that visualises the share of each
/// application category group.
///
/// Each group is rendered as a contiguous coloured segment whose width is
/// proportional to its share of tracked time. Short text labels follow the
/// bar.
pub struct CategorySplitBar<'a> {
    /// Ordered list of `(group_name, percent)` pairs. Percentages should sum
    /// to ≤ 100.
    pub shares: Vec<(String, u8)>,
    /// Theme from which segment colour styles are taken.
    pub theme: &'a Theme,
    /// Total width of the bar in terminal columns.
    pub width: u16,
}

impl<'a> CategorySplitBar<'a> {
    /// Construct a new split bar.
    pub fn new(shares: Vec<(String, u8)>, theme: &'a Theme) -> Self {
        Self {
            shares,
            theme,
            width: 50,
        }
    }

    /// Render the bar as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = Vec::new();

        // Coloured segments proportional to each group's share.
        for (idx, (_, pct)) in self.shares.iter().enumerate() {
            let chars =
                ((f64::from(*pct) / 100.0) * f64::from(self.width)).round() as usize;
            if chars > 0 {
                spans.push(Span::styled("█".repeat(chars), self.theme.share_style(idx)));
            }
        }

        // Space between bar and labels.
        spans.push(Span::raw(" "));

        // Textual labels after the bar.
        for (idx, (name, pct)) in self.shares.iter().enumerate() {
            if *pct > 0 {
                spans.push(Span::styled(
                    format!("{}: {}% ", name, pct),
                    self.theme.share_style(idx),
                ));
            }
        }

        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

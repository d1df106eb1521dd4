use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering five lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. The application tagline.
/// 4. Active screen and timezone in `[ screen | timezone ]` format.
/// 5. An empty line.
pub struct Header<'a> {
    /// Title of the active screen (e.g. "Dashboard").
    pub screen: &'a str,
    /// Human-readable timezone string (e.g. "UTC", "America/New_York").
    pub timezone: &'a str,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(screen: &'a str, timezone: &'a str, theme: &'a Theme) -> Self {
        Self {
            screen,
            timezone,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly five lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" EMPLOYEE EFFICIENCY TRACKER ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Tagline.
            Line::from(Span::styled(
                "Monitor productivity and optimize your workflow",
                self.theme.dim,
            )),
            // Screen / timezone info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.screen.to_lowercase(), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.timezone.to_lowercase(), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

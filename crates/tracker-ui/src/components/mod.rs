//! Reusable display components shared by the screen views.

pub mod header;
pub mod progress_bar;
pub mod stat_cards;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate `label` to at most `max_width` display columns, appending `…`
/// when anything was cut.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis.
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short_passthrough() {
        assert_eq!(truncate_label("Slack", 20), "Slack");
    }

    #[test]
    fn test_truncate_label_exact_width_passthrough() {
        assert_eq!(truncate_label("Slack", 5), "Slack");
    }

    #[test]
    fn test_truncate_label_cuts_with_ellipsis() {
        let out = truncate_label("Chrome - Stack Overflow", 10);
        assert!(out.ends_with('…'), "got: {out}");
        assert!(
            unicode_width::UnicodeWidthStr::width(out.as_str()) <= 10,
            "got width {} for {out}",
            unicode_width::UnicodeWidthStr::width(out.as_str())
        );
    }

    #[test]
    fn test_truncate_label_handles_wide_chars() {
        // Fullwidth characters occupy two columns each.
        let out = truncate_label("ワークスペース", 6);
        assert!(out.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(out.as_str()) <= 6);
    }
}

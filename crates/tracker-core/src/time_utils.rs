use chrono::Utc;
use chrono_tz::Tz;
use tracing::warn;

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Uses the `iana-time-zone` crate directly – no subprocess calls.
/// Falls back to `"UTC"` if detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Parse an IANA timezone name, falling back to UTC with a warning when the
/// name is not recognised.
pub fn resolve_timezone(tz_name: &str) -> Tz {
    tz_name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("unrecognised timezone \"{}\", falling back to UTC", tz_name);
        Tz::UTC
    })
}

/// Current wall-clock time in the given timezone, formatted for display
/// (e.g. `"03:04:05 PM"`).
pub fn current_time_string(tz_name: &str) -> String {
    let tz = resolve_timezone(tz_name);
    Utc::now().with_timezone(&tz).format("%I:%M:%S %p").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_timezone_is_nonempty() {
        assert!(!get_system_timezone().is_empty());
    }

    #[test]
    fn test_resolve_known_timezone() {
        assert_eq!(resolve_timezone("Europe/Berlin"), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_resolve_unknown_timezone_falls_back_to_utc() {
        assert_eq!(resolve_timezone("Not/AZone"), Tz::UTC);
    }

    #[test]
    fn test_current_time_string_shape() {
        let s = current_time_string("UTC");
        // "HH:MM:SS AM" / "HH:MM:SS PM"
        assert_eq!(s.len(), 11, "unexpected time string: {s}");
        assert!(s.ends_with("AM") || s.ends_with("PM"), "time string: {s}");
    }
}

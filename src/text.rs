//! Display helpers for terminal output.

use chrono::{DateTime, NaiveDate};

/// Default preview length for clause content.
pub const PREVIEW_LEN: usize = 200;

/// Shorten text to at most `length` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split mid-char.
pub fn truncate_text(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let mut out: String = text.chars().take(length).collect();
    out.push_str("...");
    out
}

/// Render a service timestamp as a calendar date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; returns `None`
/// for anything else so callers can fall back to the raw value.
pub fn format_date(raw: &str) -> Option<String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.format("%Y-%m-%d").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("", 10), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_text("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2024-03-05T10:20:30Z").as_deref(),
            Some("2024-03-05")
        );
        assert_eq!(format_date("2024-03-05").as_deref(), Some("2024-03-05"));
        assert_eq!(format_date("yesterday"), None);
    }
}

//! Utility functions for timestamps, log truncation, and file locations.

use chrono::Local;
use std::path::PathBuf;

/// Timestamp for the report header, e.g. `2025-05-06 14:30:00`.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Default output filename, e.g. `news_headlines_20250506_143000.txt`.
pub fn timestamped_filename() -> String {
    Local::now()
        .format("news_headlines_%Y%m%d_%H%M%S.txt")
        .to_string()
}

/// The user's Desktop directory, used as the fallback write location when
/// the primary destination is not writable.
pub fn desktop_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Desktop"))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the characters dropped. Counts characters rather than bytes so scraped
/// non-ASCII headlines never split mid-character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 chars)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}…(+{} chars)", cut, len - max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 chars)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let s = "नरेंद्र मोदी ने संसद में बजट पेश किया और विपक्ष ने विरोध जताया";
        let result = truncate_for_log(s, 10);
        assert!(result.contains('…'));
        assert!(result.chars().count() < s.chars().count());
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn test_timestamped_filename_shape() {
        let name = timestamped_filename();
        assert!(name.starts_with("news_headlines_"));
        assert!(name.ends_with(".txt"));
        // news_headlines_YYYYMMDD_HHMMSS.txt
        assert_eq!(name.len(), "news_headlines_20250506_143000.txt".len());
    }
}

//! Shared utility functions.

use chrono::{DateTime, Utc};

/// Formats a timestamp for display.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Formats a sales figure in millions with two decimals.
pub fn format_millions(value: f64) -> String {
    format!("{value:.2}M")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(timestamp), "2024-01-01 12:00:00 UTC");
    }

    #[test]
    fn test_truncate_string() {
        let truncated = truncate_string("Role-Playing Strategy Adventure", 12);
        assert_eq!(truncated, "Role-Play...");
        assert_eq!(truncated.chars().count(), 12);

        assert_eq!(truncate_string("Action", 20), "Action");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(1.8), "1.80M");
        assert_eq!(format_millions(0.0), "0.00M");
    }
}

use chrono::DateTime;
use std::time::Duration;

use crate::services::timezone;

/// Human-readable run duration, e.g. `1 мин 05 сек` or `42 сек`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (minutes, seconds) = (total / 60, total % 60);
    if minutes > 0 {
        format!("{} мин {:02} сек", minutes, seconds)
    } else {
        format!("{} сек", seconds)
    }
}

/// Formats a stored RFC 3339 timestamp in Moscow time. Unparseable values
/// are returned unchanged.
pub fn format_timestamp(stored: &str) -> String {
    match DateTime::parse_from_rfc3339(stored) {
        Ok(dt) => dt
            .with_timezone(&timezone::moscow())
            .format("%d.%m.%Y %H:%M")
            .to_string(),
        Err(_) => stored.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(42)), "42 сек");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1 мин 05 сек");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "0 сек");
    }

    #[test]
    fn test_format_timestamp_in_moscow() {
        assert_eq!(format_timestamp("2024-03-11T07:00:00+00:00"), "11.03.2024 10:00");
        assert_eq!(format_timestamp("2024-03-11T22:30:00Z"), "12.03.2024 01:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}

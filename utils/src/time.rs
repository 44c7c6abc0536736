//! Time formatting helpers.

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only_below_one_minute() {
        assert_eq!(format_duration(45), "45s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_duration(125), "2m 5s");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_duration(3 * 3600 + 15 * 60), "3h 15m");
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(format_duration(2 * 86400 + 5 * 3600), "2d 5h");
    }
}

// crates/nuggetcut-core/src/helpers/time.rs
//
// Shared time-formatting utilities used by the UI panels.
// Canonical source for both formats — keep the timecode readout, the creator
// previews and the library cards from drifting apart.

/// Format a position in seconds as `M:SS` (whole seconds, floor).
///
/// Used by the timecode readout, the timeline markers and the creator's
/// live previews.
///
/// ```
/// use nuggetcut_core::helpers::time::format_time;
/// assert_eq!(format_time(0.0),   "0:00");
/// assert_eq!(format_time(75.9),  "1:15");
/// assert_eq!(format_time(600.0), "10:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a clip duration compactly: tenths of a second below one minute,
/// minutes + seconds above.
///
/// ```
/// use nuggetcut_core::helpers::time::format_duration;
/// assert_eq!(format_duration(4.25),  "4.2s");
/// assert_eq!(format_duration(187.0), "3m 7s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        // Truncate, don't round — 4.25s reads as 4.2s, never 4.3s.
        format!("{:.1}s", (seconds * 10.0).floor() / 10.0)
    } else {
        format!("{}m {}s", seconds as u64 / 60, seconds as u64 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_floors_to_whole_seconds() {
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(60.0),  "1:00");
        assert_eq!(format_time(61.5),  "1:01");
    }

    #[test]
    fn format_time_clamps_negatives_to_zero() {
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn short_durations_show_tenths() {
        assert_eq!(format_duration(0.0),  "0.0s");
        assert_eq!(format_duration(29.97), "29.9s");
    }

    #[test]
    fn long_durations_show_minutes_and_seconds() {
        assert_eq!(format_duration(60.0),  "1m 0s");
        assert_eq!(format_duration(125.4), "2m 5s");
    }
}

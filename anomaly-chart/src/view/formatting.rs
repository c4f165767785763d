//! Shared formatting utilities for the anomaly chart.

use crate::time::TimeZoneSetting;

/// Pattern for anomaly labels in the legend, e.g. "Jan 05, 03:45 PM".
pub const ANOMALY_LABEL_FORMAT: &str = "%b %d, %I:%M %p";

/// Pattern for x-axis ticks on a day boundary, e.g. "Jan 5 (Mon)".
pub const DAY_TICK_FORMAT: &str = "%b %-d (%a)";

/// Pattern for all other x-axis ticks, e.g. "3:45 pm".
pub const TIME_TICK_FORMAT: &str = "%-I:%M %P";

/// Humanize a numeric value for display with an appropriate scale suffix.
///
/// - NaN displays as "-", infinities as "∞" and "-∞"
/// - Values >= 1B display as "X.XB", >= 1M as "X.XM", >= 1K as "X.XK"
/// - Integer values display without decimal places
/// - Other values display with 2 decimal places
pub fn humanize_float(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else if value.abs() >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a timestamp (milliseconds) with a chrono pattern in the given zone.
///
/// Unrepresentable timestamps format to an empty string.
pub fn format_timestamp(timestamp_ms: i64, pattern: &str, timezone: &TimeZoneSetting) -> String {
    timezone
        .make_time(timestamp_ms)
        .map(|t| t.format(pattern).to_string())
        .unwrap_or_default()
}

/// Legend label for an anomaly starting at `start_time`.
pub fn format_anomaly_label(start_time: Option<i64>, timezone: &TimeZoneSetting) -> String {
    start_time
        .map(|ts| format_timestamp(ts, ANOMALY_LABEL_FORMAT, timezone))
        .unwrap_or_default()
}

/// Format an x-axis tick.
///
/// Ticks landing on the start of a day get the date and weekday, everything
/// else gets the hour and minute.
pub fn format_time_tick(timestamp_ms: i64, timezone: &TimeZoneSetting) -> String {
    if timezone.is_start_of_day(timestamp_ms) {
        format_timestamp(timestamp_ms, DAY_TICK_FORMAT, timezone)
    } else {
        format_timestamp(timestamp_ms, TIME_TICK_FORMAT, timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 3_600_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    #[test]
    fn test_humanize_float() {
        assert_eq!(humanize_float(0.0), "0");
        assert_eq!(humanize_float(42.0), "42");
        assert_eq!(humanize_float(7.25), "7.25");
        assert_eq!(humanize_float(1500.0), "1.5K");
        assert_eq!(humanize_float(2500000.0), "2.5M");
        assert_eq!(humanize_float(7_200_000_000.0), "7.2B");
        assert_eq!(humanize_float(-1500.0), "-1.5K");
        assert_eq!(humanize_float(f64::NAN), "-");
    }

    #[test]
    fn test_anomaly_label() {
        let utc = TimeZoneSetting::Utc;
        assert_eq!(format_anomaly_label(Some(1000), &utc), "Jan 01, 12:00 AM");
        // 1970-01-05 15:45 UTC
        let ts = 4 * DAY_MS + 15 * HOUR_MS + 45 * 60_000;
        assert_eq!(format_anomaly_label(Some(ts), &utc), "Jan 05, 03:45 PM");
        assert_eq!(format_anomaly_label(None, &utc), "");
    }

    #[test]
    fn test_time_tick_day_boundary() {
        let utc = TimeZoneSetting::Utc;
        assert_eq!(format_time_tick(0, &utc), "Jan 1 (Thu)");
        assert_eq!(format_time_tick(4 * DAY_MS, &utc), "Jan 5 (Mon)");
    }

    #[test]
    fn test_time_tick_within_day() {
        let utc = TimeZoneSetting::Utc;
        assert_eq!(format_time_tick(1000, &utc), "12:00 am");
        assert_eq!(
            format_time_tick(4 * DAY_MS + 15 * HOUR_MS + 45 * 60_000, &utc),
            "3:45 pm"
        );
    }

    #[test]
    fn test_time_tick_respects_zone() {
        let pacific: TimeZoneSetting = "-08:00".parse().unwrap();
        assert_eq!(format_time_tick(8 * HOUR_MS, &pacific), "Jan 1 (Thu)");
        assert_eq!(format_time_tick(0, &pacific), "4:00 pm");
    }

    #[test]
    fn test_time_tick_on_skipped_midnight() {
        let sao_paulo: TimeZoneSetting = "America/Sao_Paulo".parse().unwrap();
        // 2018-11-04 03:00 UTC, 01:00 local after the DST jump.
        let day_start = 1_541_300_400_000;
        assert_eq!(format_time_tick(day_start, &sao_paulo), "Nov 4 (Sun)");
        assert_eq!(format_time_tick(day_start + HOUR_MS, &sao_paulo), "2:00 am");
    }

    #[test]
    fn test_unrepresentable_timestamp() {
        assert_eq!(format_time_tick(i64::MAX, &TimeZoneSetting::Utc), "");
    }
}

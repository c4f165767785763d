//! Axis configuration handed to the chart widget.

use anomaly_chart_common::AnomalyRecord;
use serde::Serialize;

use super::formatting::{format_time_tick, humanize_float};
use crate::time::TimeZoneSetting;

/// Formatter for y-axis tick values.
pub type ValueFormatter = fn(f64) -> String;

/// Axis configuration: primary value axis, hidden secondary axis, time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisConfig {
    pub y: ValueAxis,
    pub y2: SecondaryAxis,
    pub x: TimeAxis,
}

/// The primary y-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub show: bool,
    pub tick: ValueTick,
}

/// Tick settings of the primary y-axis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueTick {
    #[serde(skip)]
    formatter: ValueFormatter,
}

impl ValueTick {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self { formatter }
    }

    /// Label for a tick at `value`.
    pub fn format(&self, value: f64) -> String {
        (self.formatter)(value)
    }
}

impl PartialEq for ValueTick {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.formatter, other.formatter)
    }
}

impl Default for ValueTick {
    fn default() -> Self {
        Self::new(humanize_float)
    }
}

/// The secondary y-axis, which the anomaly band is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecondaryAxis {
    pub show: bool,
    pub min: f64,
    pub max: f64,
}

impl Default for SecondaryAxis {
    fn default() -> Self {
        Self {
            show: false,
            min: 0.0,
            max: 1.0,
        }
    }
}

/// Scale type of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Timeseries,
}

/// The x-axis.
///
/// `min` and `max` are the anomaly window; they are `None` when there is no
/// anomaly (or the record lacks the bound), leaving the widget to fit the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    pub tick: TimeTick,
}

impl TimeAxis {
    /// Whether both bounds are known.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

/// Tick settings of the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeTick {
    pub fit: bool,
    #[serde(skip)]
    timezone: TimeZoneSetting,
}

impl TimeTick {
    pub fn new(timezone: TimeZoneSetting) -> Self {
        Self {
            fit: false,
            timezone,
        }
    }

    /// Label for a tick at `timestamp_ms`.
    pub fn format(&self, timestamp_ms: i64) -> String {
        format_time_tick(timestamp_ms, &self.timezone)
    }

    pub fn timezone(&self) -> TimeZoneSetting {
        self.timezone
    }
}

/// Build the axis configuration for an anomaly.
pub fn derive_axis(
    anomaly: &AnomalyRecord,
    timezone: TimeZoneSetting,
    value_formatter: ValueFormatter,
) -> AxisConfig {
    AxisConfig {
        y: ValueAxis {
            show: true,
            tick: ValueTick::new(value_formatter),
        },
        y2: SecondaryAxis::default(),
        x: TimeAxis {
            kind: AxisKind::Timeseries,
            show: true,
            min: anomaly.start_time,
            max: anomaly.end_time,
            tick: TimeTick::new(timezone),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_bounds_follow_anomaly() {
        let axis = derive_axis(
            &AnomalyRecord::new(1000, 2000),
            TimeZoneSetting::Utc,
            humanize_float,
        );

        assert!(axis.y.show);
        assert!(!axis.y2.show);
        assert_eq!((axis.y2.min, axis.y2.max), (0.0, 1.0));
        assert_eq!(axis.x.kind, AxisKind::Timeseries);
        assert_eq!(axis.x.min, Some(1000));
        assert_eq!(axis.x.max, Some(2000));
        assert!(axis.x.is_bounded());
        assert!(!axis.x.tick.fit);
    }

    #[test]
    fn test_empty_anomaly_leaves_bounds_unset() {
        let axis = derive_axis(
            &AnomalyRecord::default(),
            TimeZoneSetting::Utc,
            humanize_float,
        );
        assert_eq!(axis.x.min, None);
        assert_eq!(axis.x.max, None);
        assert!(!axis.x.is_bounded());
    }

    #[test]
    fn test_tick_formatters() {
        let axis = derive_axis(
            &AnomalyRecord::new(0, 86_400_000),
            TimeZoneSetting::Utc,
            humanize_float,
        );

        assert_eq!(axis.y.tick.format(1500.0), "1.5K");
        assert_eq!(axis.x.tick.format(0), "Jan 1 (Thu)");
        assert_eq!(axis.x.tick.format(13 * 3_600_000 + 5 * 60_000), "1:05 pm");
    }

    #[test]
    fn test_custom_value_formatter() {
        fn percent(v: f64) -> String {
            format!("{:.0}%", v * 100.0)
        }

        let axis = derive_axis(&AnomalyRecord::default(), TimeZoneSetting::Utc, percent);
        assert_eq!(axis.y.tick.format(0.25), "25%");
    }

    #[test]
    fn test_serialized_shape() {
        let axis = derive_axis(
            &AnomalyRecord::new(1000, 2000),
            TimeZoneSetting::Utc,
            humanize_float,
        );

        assert_eq!(
            serde_json::to_value(&axis).unwrap(),
            serde_json::json!({
                "y": { "show": true, "tick": {} },
                "y2": { "show": false, "min": 0.0, "max": 1.0 },
                "x": {
                    "type": "timeseries",
                    "show": true,
                    "min": 1000,
                    "max": 2000,
                    "tick": { "fit": false }
                }
            })
        );
    }
}

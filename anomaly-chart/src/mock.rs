//! Mock inputs for testing and demo output.
//!
//! Provides functions to build realistic anomaly chart inputs without an
//! upstream data source.

use anomaly_chart_common::{AnomalyRecord, ProjectionInput, SeriesInput};

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 3_600_000;

/// 2017-10-17 00:00:00 UTC.
pub const SAMPLE_START: i64 = 1_508_198_400_000;

/// Generate a mock anomaly record with an id and metric name.
pub fn anomaly(id: u64, start_time: i64, end_time: i64) -> AnomalyRecord {
    AnomalyRecord::new(start_time, end_time)
        .with_field("id", id)
        .with_field("metric", "page_views")
}

/// Generate an hourly series of `hours` points starting at `start`.
pub fn hourly_series(start: i64, hours: usize, value: impl Fn(usize) -> f64) -> SeriesInput {
    let timestamp = (0..hours).map(|h| start + h as i64 * HOUR_MS).collect();
    let value = (0..hours).map(value).collect();
    SeriesInput::new(timestamp, value)
}

/// Daily traffic pattern peaking mid-afternoon.
pub fn daily_wave(hour: usize) -> f64 {
    let phase = (hour % 24) as f64 / 24.0 * std::f64::consts::TAU;
    1000.0 - 400.0 * phase.cos()
}

/// Two days of traffic with a drop between hours 30 and 34.
pub fn sample_input() -> ProjectionInput {
    let start = SAMPLE_START;
    let anomaly_start = start + 30 * HOUR_MS;
    let anomaly_end = start + 34 * HOUR_MS;

    let current = hourly_series(start, 48, |h| {
        if (30..34).contains(&h) {
            daily_wave(h) * 0.4
        } else {
            daily_wave(h)
        }
    });
    let predicted = hourly_series(start, 48, daily_wave);

    ProjectionInput {
        anomaly: Some(anomaly(35219, anomaly_start, anomaly_end)),
        current: Some(current),
        predicted: Some(predicted),
    }
}

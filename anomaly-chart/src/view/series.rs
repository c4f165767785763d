//! Series map handed to the chart widget.

use anomaly_chart_common::{AnomalyRecord, SeriesInput};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::formatting::format_anomaly_label;
use crate::time::TimeZoneSetting;

/// Key of the observed series.
pub const CURRENT_KEY: &str = "current";

/// Key of the baseline series.
pub const PREDICTED_KEY: &str = "predicted";

/// How the chart widget draws a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Connected line through every point.
    Line,
    /// Shaded band between the first and last timestamp.
    Region,
}

/// Named color of a series, resolved through the color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Orange,
}

impl SeriesColor {
    /// Name used as key in the color mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesColor::Blue => "blue",
            SeriesColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the series map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub timestamps: Vec<i64>,
    pub values: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub color: SeriesColor,
}

impl SeriesEntry {
    /// A line series copied verbatim from an input series.
    pub fn line(input: &SeriesInput, color: SeriesColor) -> Self {
        Self {
            timestamps: input.timestamp.clone(),
            values: input.value.clone(),
            kind: SeriesKind::Line,
            color,
        }
    }

    /// A flat band at value 1 covering the anomaly window.
    ///
    /// Missing bounds are left out rather than invented.
    pub fn anomaly_region(anomaly: &AnomalyRecord) -> Self {
        let timestamps: Vec<i64> = [anomaly.start_time, anomaly.end_time]
            .into_iter()
            .flatten()
            .collect();
        let values = vec![1.0; timestamps.len()];
        Self {
            timestamps,
            values,
            kind: SeriesKind::Region,
            color: SeriesColor::Orange,
        }
    }
}

/// Insertion-ordered map from series label to entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesMap(IndexMap<String, SeriesEntry>);

impl SeriesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any entry with the same label in place.
    pub fn insert(&mut self, label: impl Into<String>, entry: SeriesEntry) -> Option<SeriesEntry> {
        self.0.insert(label.into(), entry)
    }

    pub fn get(&self, label: &str) -> Option<&SeriesEntry> {
        self.0.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Build the series map from the three upstream inputs.
///
/// Each entry is emitted independently: the anomaly band when the record is
/// non-empty, and each line when its input has values.
pub fn derive_series(
    anomaly: &AnomalyRecord,
    current: Option<&SeriesInput>,
    predicted: Option<&SeriesInput>,
    timezone: &TimeZoneSetting,
) -> SeriesMap {
    let mut series = SeriesMap::new();

    if !anomaly.is_empty() {
        let label = format_anomaly_label(anomaly.start_time, timezone);
        series.insert(label, SeriesEntry::anomaly_region(anomaly));
    }

    if let Some(current) = current.filter(|s| s.has_values()) {
        series.insert(CURRENT_KEY, SeriesEntry::line(current, SeriesColor::Blue));
    }

    if let Some(predicted) = predicted.filter(|s| s.has_values()) {
        series.insert(PREDICTED_KEY, SeriesEntry::line(predicted, SeriesColor::Orange));
    }

    series
}

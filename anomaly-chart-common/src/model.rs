use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Metadata describing a detected anomaly window.
///
/// Times are Unix epoch milliseconds. Fields other than the window bounds
/// (id, metric, dataset, ...) are carried through untouched in `extra`.
///
/// A decoded record remembers whether its source object had any key, so
/// `{"startTime": null}` is an anomaly even though no bound is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyRecord {
    /// Start of the anomaly window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// End of the anomaly window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    /// Any other fields supplied with the record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip)]
    keyed: bool,
}

impl AnomalyRecord {
    /// Create a record spanning `[start_time, end_time]`.
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            extra: Map::new(),
            keyed: true,
        }
    }

    /// Attach an additional field to this record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self.keyed = true;
        self
    }

    /// A record is empty when it carries no field at all.
    ///
    /// A key that was present with a `null` value still counts as a field.
    pub fn is_empty(&self) -> bool {
        !self.keyed
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.extra.is_empty()
    }
}

impl<'de> Deserialize<'de> for AnomalyRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        let keyed = !extra.is_empty();
        let start_time = take_time::<D::Error>(&mut extra, "startTime")?;
        let end_time = take_time::<D::Error>(&mut extra, "endTime")?;

        Ok(Self {
            start_time,
            end_time,
            extra,
            keyed,
        })
    }
}

/// Remove a time field from `fields`; absent and `null` both mean unknown.
fn take_time<E: serde::de::Error>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<i64>, E> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| E::custom(format!("{}: {}", key, e))),
    }
}

/// Read a sequence where `null` stands for an empty one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A time series as parallel, index-aligned timestamp and value arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    /// Timestamps in Unix epoch milliseconds.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timestamp: Vec<i64>,

    /// Values, one per timestamp.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: Vec<f64>,
}

impl SeriesInput {
    pub fn new(timestamp: Vec<i64>, value: Vec<f64>) -> Self {
        Self { timestamp, value }
    }

    /// Whether the value sequence has anything to plot.
    pub fn has_values(&self) -> bool {
        !self.value.is_empty()
    }
}

/// The upstream state of the anomaly chart screen, as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Anomaly metadata; `null` or missing means no anomaly.
    #[serde(default)]
    pub anomaly: Option<AnomalyRecord>,

    /// Observed time series.
    #[serde(default)]
    pub current: Option<SeriesInput>,

    /// Baseline (predicted) time series.
    #[serde(default)]
    pub predicted: Option<SeriesInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        assert!(AnomalyRecord::default().is_empty());
        assert!(!AnomalyRecord::new(1000, 2000).is_empty());
        assert!(!AnomalyRecord::default().with_field("id", 42).is_empty());
    }

    #[test]
    fn test_record_from_camel_case_json() {
        let json = r#"{"startTime": 1000, "endTime": 2000, "id": 7, "metric": "pageViews"}"#;
        let record: AnomalyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.start_time, Some(1000));
        assert_eq!(record.end_time, Some(2000));
        assert_eq!(record.extra.get("id"), Some(&Value::from(7)));
        assert_eq!(record.extra.get("metric"), Some(&Value::from("pageViews")));
    }

    #[test]
    fn test_empty_object_is_empty_record() {
        let record: AnomalyRecord = serde_json::from_str("{}").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_null_keys_make_a_record() {
        let json = r#"{"startTime": null, "endTime": null}"#;
        let record: AnomalyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time, None);
        assert!(record.extra.is_empty());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_decoded_record_matches_constructed() {
        let json = r#"{"startTime": 1000, "endTime": 2000, "id": 42}"#;
        let record: AnomalyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, AnomalyRecord::new(1000, 2000).with_field("id", 42));
    }

    #[test]
    fn test_non_integer_time_rejected() {
        let result: Result<AnomalyRecord, _> = serde_json::from_str(r#"{"startTime": "soon"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("startTime"));
    }

    #[test]
    fn test_null_series_arrays_are_empty() {
        let json = r#"{"timestamp": null, "value": null}"#;
        let series: SeriesInput = serde_json::from_str(json).unwrap();

        assert_eq!(series, SeriesInput::default());
        assert!(!series.has_values());
    }

    #[test]
    fn test_series_has_values() {
        assert!(!SeriesInput::default().has_values());
        assert!(SeriesInput::new(vec![1], vec![1.0]).has_values());
        // Only the value sequence decides.
        assert!(SeriesInput::new(vec![], vec![1.0]).has_values());
    }

    #[test]
    fn test_projection_input_nulls() {
        let json = r#"{"anomaly": null, "current": {"timestamp": [1, 2], "value": [3.0, 4.0]}}"#;
        let input: ProjectionInput = serde_json::from_str(json).unwrap();

        assert!(input.anomaly.is_none());
        assert_eq!(input.current.unwrap().value, vec![3.0, 4.0]);
        assert!(input.predicted.is_none());
    }
}

use anomaly_chart_common::{AnomalyRecord, ProjectionInput, SeriesInput};

/// Input updates for the view state projector.
///
/// These are produced by whatever loads the screen's data.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Anomaly metadata arrived.
    AnomalyLoaded(AnomalyRecord),

    /// The anomaly was cleared (navigated away, not found).
    AnomalyCleared,

    /// Observed series arrived, or was dropped with `None`.
    CurrentLoaded(Option<SeriesInput>),

    /// Baseline series arrived, or was dropped with `None`.
    PredictedLoaded(Option<SeriesInput>),

    /// A whole input document arrived at once.
    InputLoaded(ProjectionInput),

    /// Return every input to its default.
    Reset,
}

//! View state projector for the anomaly chart screen.
//!
//! Holds the three upstream inputs and serves the derived values the chart
//! view reads. Each derived value is cached until one of its dependencies is
//! reassigned:
//!
//! | derived       | depends on                           |
//! |---------------|--------------------------------------|
//! | `has_anomaly` | anomaly data                         |
//! | `series`      | anomaly data, current, predicted     |
//! | `axis`        | anomaly data                         |

use std::rc::Rc;

use anomaly_chart_common::{AnomalyRecord, ProjectionInput, SeriesInput};
use tracing::debug;

use crate::config::ChartConfig;
use crate::memo::Memo;
use crate::message::Message;
use crate::time::TimeZoneSetting;
use crate::view::axis::{AxisConfig, ValueFormatter, derive_axis};
use crate::view::formatting::humanize_float;
use crate::view::options::DisplayOptions;
use crate::view::series::{SeriesMap, derive_series};
use crate::view::state::ViewState;

/// An upstream input of the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    AnomalyData,
    Current,
    Predicted,
}

const HAS_ANOMALY_DEPS: &[Input] = &[Input::AnomalyData];
const SERIES_DEPS: &[Input] = &[Input::AnomalyData, Input::Current, Input::Predicted];
const AXIS_DEPS: &[Input] = &[Input::AnomalyData];

/// Derives chart series, axis configuration and the anomaly flag.
#[derive(Debug)]
pub struct ViewStateProjector {
    anomaly_data: AnomalyRecord,
    current: Option<SeriesInput>,
    predicted: Option<SeriesInput>,

    timezone: TimeZoneSetting,
    value_formatter: ValueFormatter,
    options: DisplayOptions,

    has_anomaly: Memo<bool>,
    series: Memo<SeriesMap>,
    axis: Memo<AxisConfig>,
}

impl Default for ViewStateProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateProjector {
    /// Create a projector with empty inputs, UTC time and default display options.
    pub fn new() -> Self {
        Self {
            anomaly_data: AnomalyRecord::default(),
            current: None,
            predicted: None,
            timezone: TimeZoneSetting::default(),
            value_formatter: humanize_float,
            options: DisplayOptions::default(),
            has_anomaly: Memo::new(),
            series: Memo::new(),
            axis: Memo::new(),
        }
    }

    /// Create a projector from configuration.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new()
            .with_timezone(config.timezone)
            .with_options(config.display_options())
    }

    /// Set the zone used for labels and tick formatting.
    pub fn with_timezone(mut self, timezone: TimeZoneSetting) -> Self {
        self.timezone = timezone;
        self.invalidate_all();
        self
    }

    /// Set the y-axis tick formatter.
    pub fn with_value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.value_formatter = formatter;
        self.axis.invalidate();
        self
    }

    /// Set the display options passed through to the widget.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn anomaly_data(&self) -> &AnomalyRecord {
        &self.anomaly_data
    }

    pub fn current(&self) -> Option<&SeriesInput> {
        self.current.as_ref()
    }

    pub fn predicted(&self) -> Option<&SeriesInput> {
        self.predicted.as_ref()
    }

    pub fn timezone(&self) -> TimeZoneSetting {
        self.timezone
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn set_anomaly_data(&mut self, anomaly_data: AnomalyRecord) {
        self.anomaly_data = anomaly_data;
        self.invalidate(Input::AnomalyData);
    }

    pub fn set_current(&mut self, current: Option<SeriesInput>) {
        self.current = current;
        self.invalidate(Input::Current);
    }

    pub fn set_predicted(&mut self, predicted: Option<SeriesInput>) {
        self.predicted = predicted;
        self.invalidate(Input::Predicted);
    }

    /// Apply an input update.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::AnomalyLoaded(record) => self.set_anomaly_data(record),
            Message::AnomalyCleared => self.set_anomaly_data(AnomalyRecord::default()),
            Message::CurrentLoaded(series) => self.set_current(series),
            Message::PredictedLoaded(series) => self.set_predicted(series),
            Message::InputLoaded(input) => self.load(input),
            Message::Reset => self.load(ProjectionInput::default()),
        }
    }

    fn load(&mut self, input: ProjectionInput) {
        self.set_anomaly_data(input.anomaly.unwrap_or_default());
        self.set_current(input.current);
        self.set_predicted(input.predicted);
    }

    /// Whether there is an anomaly to show.
    pub fn has_anomaly(&self) -> bool {
        *self
            .has_anomaly
            .get_or_compute(|| !self.anomaly_data.is_empty())
    }

    /// Series map for the chart widget.
    pub fn series(&self) -> Rc<SeriesMap> {
        self.series.get_or_compute(|| {
            let series = derive_series(
                &self.anomaly_data,
                self.current.as_ref(),
                self.predicted.as_ref(),
                &self.timezone,
            );
            debug!(entries = series.len(), "Recomputed chart series");
            series
        })
    }

    /// Axis configuration for the chart widget.
    ///
    /// The x bounds are only set when [`Self::has_anomaly`] holds.
    pub fn axis(&self) -> Rc<AxisConfig> {
        self.axis.get_or_compute(|| {
            let axis = derive_axis(&self.anomaly_data, self.timezone, self.value_formatter);
            debug!(
                min = ?axis.x.min,
                max = ?axis.x.max,
                "Recomputed chart axis"
            );
            axis
        })
    }

    /// Everything the rendering view consumes, as one serializable value.
    pub fn snapshot(&self) -> ViewState {
        ViewState::new(
            self.has_anomaly(),
            &self.series(),
            &self.axis(),
            &self.options,
        )
    }

    /// Number of times each derived value has been computed, as
    /// `(has_anomaly, series, axis)`.
    pub fn computations(&self) -> (u64, u64, u64) {
        (
            self.has_anomaly.computations(),
            self.series.computations(),
            self.axis.computations(),
        )
    }

    fn invalidate(&mut self, input: Input) {
        if HAS_ANOMALY_DEPS.contains(&input) {
            self.has_anomaly.invalidate();
        }
        if SERIES_DEPS.contains(&input) {
            self.series.invalidate();
        }
        if AXIS_DEPS.contains(&input) {
            self.axis.invalidate();
        }
    }

    fn invalidate_all(&mut self) {
        self.has_anomaly.invalidate();
        self.series.invalidate();
        self.axis.invalidate();
    }
}

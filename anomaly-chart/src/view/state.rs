use serde::Serialize;

use super::axis::AxisConfig;
use super::options::{ColorMapping, DisplayOptions, LegendOptions, PointOptions, ZoomOptions};
use super::series::SeriesMap;

/// What the rendering view binds to: derived values plus passthrough options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub anomaly: bool,
    pub series: SeriesMap,
    pub axis: AxisConfig,
    pub legend: LegendOptions,
    pub point: PointOptions,
    pub zoom: ZoomOptions,
    pub color_mapping: ColorMapping,
}

impl ViewState {
    pub fn new(
        anomaly: bool,
        series: &SeriesMap,
        axis: &AxisConfig,
        options: &DisplayOptions,
    ) -> Self {
        Self {
            anomaly,
            series: series.clone(),
            axis: axis.clone(),
            legend: options.legend,
            point: options.point,
            zoom: options.zoom,
            color_mapping: options.color_mapping.clone(),
        }
    }
}

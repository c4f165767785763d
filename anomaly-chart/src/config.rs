//! Configuration for the anomaly chart.

use std::path::Path;

use anomaly_chart_common::{LoggingConfig, Result, load_config, parse_config};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::time::TimeZoneSetting;
use crate::view::options::{
    ColorMapping, DisplayOptions, LegendOptions, PointOptions, ZoomOptions,
};

/// Complete chart configuration (JSON5).
///
/// ```json5
/// {
///     timezone: "-08:00",
///     colors: { orange: "#FFA500" },
///     legend: { position: "bottom" },
///     logging: { level: "debug", format: "json" },
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Zone in which labels and day boundaries are computed.
    #[serde(default)]
    pub timezone: TimeZoneSetting,

    /// Overrides applied on top of the default color mapping.
    #[serde(default)]
    pub colors: IndexMap<String, String>,

    #[serde(default)]
    pub legend: LegendOptions,

    #[serde(default)]
    pub point: PointOptions,

    #[serde(default)]
    pub zoom: ZoomOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ChartConfig {
    /// Load configuration from a JSON5 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_config(path)
    }

    /// Parse configuration from a JSON5 string.
    pub fn parse(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Display options the chart widget receives.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            legend: self.legend,
            point: self.point,
            zoom: self.zoom,
            color_mapping: ColorMapping::default().with_overrides(&self.colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::options::LegendPosition;
    use anomaly_chart_common::LogFormat;
    use chrono::FixedOffset;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::parse("{}").unwrap();

        assert_eq!(config.timezone, TimeZoneSetting::Utc);
        assert!(config.colors.is_empty());
        assert_eq!(config.display_options(), DisplayOptions::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let json5 = r##"
        {
            timezone: "-08:00",
            colors: { orange: "#FFA500" },
            legend: { position: "bottom" },
            point: { show: true },
            zoom: { enabled: true },
            logging: { level: "debug", format: "json" },
        }
        "##;

        let config = ChartConfig::parse(json5).unwrap();
        assert_eq!(
            config.timezone,
            TimeZoneSetting::Fixed(FixedOffset::west_opt(8 * 3600).unwrap())
        );

        let options = config.display_options();
        assert_eq!(options.legend.position, LegendPosition::Bottom);
        assert!(options.point.show);
        assert!(options.zoom.enabled);
        assert!(options.zoom.rescale);
        assert_eq!(options.color_mapping.get("orange"), Some("#FFA500"));
        assert_eq!(options.color_mapping.get("blue"), Some("#0091CA"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let result = ChartConfig::parse(r#"{ timezone: "Mars/Olympus" }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}

//! Static display options passed through to the chart widget unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::series::SeriesColor;

/// Where the legend sits relative to the plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
    #[default]
    Right,
    Inset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default)]
    pub position: LegendPosition,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::Right,
        }
    }
}

/// Per-point markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOptions {
    #[serde(default)]
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomOptions {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub rescale: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            rescale: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Palette from color name to hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMapping(IndexMap<String, String>);

impl ColorMapping {
    /// Hex code for a named color.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Hex code for a series color.
    pub fn resolve(&self, color: SeriesColor) -> Option<&str> {
        self.get(color.as_str())
    }

    /// Replace or add entries; unknown names are appended.
    pub fn with_overrides(mut self, overrides: &IndexMap<String, String>) -> Self {
        for (name, hex) in overrides {
            self.0.insert(name.clone(), hex.clone());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        let palette = [
            ("blue", "#0091CA"),
            ("green", "#469A1F"),
            ("red", "#FF2C33"),
            ("purple", "#827BE9"),
            ("orange", "#E55800"),
            ("teal", "#0E95A0"),
            ("pink", "#FF1B90"),
            ("light-blue", "#80C8E5"),
            ("light-green", "#A3CD8F"),
            ("light-red", "#FF9599"),
            ("light-purple", "#C1BDF4"),
            ("light-orange", "#F2AB7F"),
            ("light-teal", "#87CACF"),
            ("light-pink", "#FF8DC8"),
        ];
        Self(
            palette
                .into_iter()
                .map(|(name, hex)| (name.to_string(), hex.to_string()))
                .collect(),
        )
    }
}

/// Everything the chart widget receives verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub legend: LegendOptions,
    pub point: PointOptions,
    pub zoom: ZoomOptions,
    pub color_mapping: ColorMapping,
}

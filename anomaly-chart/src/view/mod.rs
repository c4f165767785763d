//! Values the chart view binds to.

pub mod axis;
pub mod formatting;
pub mod options;
pub mod series;
pub mod state;

//! Anomaly Chart - view state for a time-series anomaly chart.
//!
//! Projects anomaly metadata plus current and predicted series into the
//! series map, axis configuration and display options a chart widget
//! consumes. See [`projector::ViewStateProjector`].

pub mod config;
pub mod memo;
pub mod message;
pub mod mock;
pub mod projector;
pub mod time;
pub mod view;

// Re-export commonly used types
pub use config::ChartConfig;
pub use message::Message;
pub use projector::ViewStateProjector;
pub use time::TimeZoneSetting;
pub use view::state::ViewState;

//! incident-trend: daily incident-count trend charts.
//!
//! Raw incident records are normalized into a gap-free daily series, mapped
//! onto a pixel plot with "nice" count ticks, turned into backend-agnostic
//! draw primitives, and resolved back to the nearest day on pointer hover.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TrendChartConfig, TrendChartEngine, TrendStyle, build_trend_frame};
pub use error::{ChartError, ChartResult};

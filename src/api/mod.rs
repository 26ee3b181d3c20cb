mod engine;
mod engine_config;
mod render_style;
mod trend_frame_builder;

pub use engine::TrendChartEngine;
pub use engine_config::TrendChartConfig;
pub use render_style::TrendStyle;
pub use trend_frame_builder::build_trend_frame;

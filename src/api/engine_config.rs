use serde::{Deserialize, Serialize};

use crate::core::ticks::{DEFAULT_MAX_X_TICKS, DEFAULT_TARGET_Y_TICKS};
use crate::core::{Clock, DateRange, Margins, RangePreset, TickOptions, Viewport};
use crate::error::{ChartError, ChartResult};

/// Engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup; omitted fields take their
/// defaults on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendChartConfig {
    pub range: DateRange,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_target_y_tick_count")]
    pub target_y_tick_count: usize,
    #[serde(default = "default_max_x_ticks")]
    pub max_x_ticks: usize,
}

impl TrendChartConfig {
    #[must_use]
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            viewport: Viewport::default(),
            margins: Margins::default(),
            target_y_tick_count: DEFAULT_TARGET_Y_TICKS,
            max_x_ticks: DEFAULT_MAX_X_TICKS,
        }
    }

    /// Config over the default preset (last 30 days) as of `clock`.
    #[must_use]
    pub fn with_default_range(clock: &impl Clock) -> Self {
        Self::new(RangePreset::default().resolve(clock))
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_target_y_tick_count(mut self, target_y_tick_count: usize) -> Self {
        self.target_y_tick_count = target_y_tick_count;
        self
    }

    #[must_use]
    pub fn with_max_x_ticks(mut self, max_x_ticks: usize) -> Self {
        self.max_x_ticks = max_x_ticks;
        self
    }

    #[must_use]
    pub fn tick_options(self) -> TickOptions {
        TickOptions {
            target_y_tick_count: self.target_y_tick_count,
            max_x_ticks: self.max_x_ticks,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        if self.target_y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "target y tick count must be > 0".to_owned(),
            ));
        }
        if self.max_x_ticks == 0 {
            return Err(ChartError::InvalidData(
                "max x ticks must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_target_y_tick_count() -> usize {
    DEFAULT_TARGET_Y_TICKS
}

fn default_max_x_ticks() -> usize {
    DEFAULT_MAX_X_TICKS
}

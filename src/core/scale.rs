use chrono::NaiveDate;

use crate::core::series::NormalizedSeries;
use crate::core::ticks::{
    DEFAULT_MAX_X_TICKS, DEFAULT_TARGET_Y_TICKS, DayTicks, count_ticks, day_ticks,
};
use crate::core::types::{Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Linear map from a domain interval onto a pixel interval.
///
/// The pixel interval may be reversed (count axes grow upwards) or collapsed
/// to a single pixel; the domain may not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of `map`; a collapsed pixel range resolves to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Tick targets for `build_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOptions {
    pub target_y_tick_count: usize,
    pub max_x_ticks: usize,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            target_y_tick_count: DEFAULT_TARGET_Y_TICKS,
            max_x_ticks: DEFAULT_MAX_X_TICKS,
        }
    }
}

/// Day/count to pixel mapping derived from one `NormalizedSeries`.
///
/// `y_max` is the data maximum (at least 1) and the top of the count axis,
/// which spans `0..=y_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendScale {
    plot: PlotArea,
    days: Option<(NaiveDate, NaiveDate)>,
    time: Option<LinearScale>,
    count: Option<LinearScale>,
    y_max: u32,
    y_step: u32,
    y_ticks: Vec<u32>,
    x_ticks: DayTicks,
}

impl TrendScale {
    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    /// True when the viewport leaves no room inside the margins.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.plot.is_degenerate()
    }

    #[must_use]
    pub fn x_domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.days
    }

    #[must_use]
    pub fn y_max(&self) -> u32 {
        self.y_max
    }

    #[must_use]
    pub fn y_step(&self) -> u32 {
        self.y_step
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[u32] {
        &self.y_ticks
    }

    #[must_use]
    pub fn x_ticks(&self) -> &DayTicks {
        &self.x_ticks
    }

    /// Horizontal pixel of `day`. Without a usable time span every day maps to
    /// the plot center (single day) or the left margin (no data).
    #[must_use]
    pub fn time_to_x(&self, day: NaiveDate) -> f64 {
        match (self.days, self.time) {
            (Some((first, _)), Some(time)) => time.map((day - first).num_days() as f64),
            (Some(_), None) => self.plot.center().0,
            (None, _) => self.plot.left,
        }
    }

    #[must_use]
    pub fn count_to_y(&self, count: u32) -> f64 {
        match self.count {
            Some(scale) => scale.map(f64::from(count)),
            None => self.plot.top,
        }
    }

    /// Fractional day offset from the first day for a horizontal pixel.
    ///
    /// Returns `None` when the scale has no days.
    #[must_use]
    pub fn x_to_day_offset(&self, pixel_x: f64) -> Option<f64> {
        self.days?;
        Some(self.time.map_or(0.0, |time| time.invert(pixel_x)))
    }
}

/// Builds the day/count mapping for `series` inside `viewport` minus `margins`.
///
/// Never fails: undersized viewports collapse the plot so every coordinate
/// clamps onto the top-left margin corner.
#[must_use]
pub fn build_scale(
    series: &NormalizedSeries,
    viewport: Viewport,
    margins: Margins,
    options: TickOptions,
) -> TrendScale {
    let plot = PlotArea::resolve(viewport, margins);
    let y_max = series.max_count().max(1);
    let (y_step, y_ticks) = count_ticks(y_max, options.target_y_tick_count);

    let days = series.first_day().zip(series.last_day());
    let time = days.and_then(|(first, last)| {
        let span = (last - first).num_days() as f64;
        LinearScale::new(0.0, span, plot.left, plot.right()).ok()
    });
    let count = LinearScale::new(0.0, f64::from(y_max), plot.bottom(), plot.top).ok();

    TrendScale {
        plot,
        days,
        time,
        count,
        y_max,
        y_step,
        y_ticks,
        x_ticks: day_ticks(series, options.max_x_ticks),
    }
}

use crate::core::calendar::DateRange;
use crate::core::scale::{TickOptions, TrendScale, build_scale};
use crate::core::series::{NormalizedSeries, normalize};
use crate::core::types::{Margins, TimeSeriesPoint, Viewport};

/// A normalized series together with the scale derived from it.
///
/// The only way to obtain a scale here is to build it from the series it sits
/// next to, so hover resolution can never pair a series with an old scale.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    range: DateRange,
    viewport: Viewport,
    series: NormalizedSeries,
    scale: TrendScale,
}

impl TrendChart {
    #[must_use]
    pub fn build(
        observations: &[TimeSeriesPoint],
        range: DateRange,
        viewport: Viewport,
        margins: Margins,
        options: TickOptions,
    ) -> Self {
        let series = normalize(observations, range);
        let scale = build_scale(&series, viewport, margins, options);
        Self {
            range,
            viewport,
            series,
            scale,
        }
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn series(&self) -> &NormalizedSeries {
        &self.series
    }

    #[must_use]
    pub fn scale(&self) -> &TrendScale {
        &self.scale
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }
}

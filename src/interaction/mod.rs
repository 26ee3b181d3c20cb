use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::TrendChart;

pub const TOOLTIP_WIDTH: f64 = 132.0;
pub const TOOLTIP_HEIGHT: f64 = 36.0;
const TOOLTIP_GAP: f64 = 8.0;
const TOOLTIP_RISE: f64 = 30.0;

/// Sample nearest to the pointer, in both domain and pixel terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub day: NaiveDate,
    pub count: u32,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Text and placement of the tooltip box drawn next to a hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub title: String,
    pub body: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HoverState {
    /// Tooltip for this sample, kept inside the viewport's right edge and
    /// below the plot's top edge.
    #[must_use]
    pub fn tooltip(&self, chart: &TrendChart) -> TooltipPayload {
        let plot = chart.scale().plot();
        let max_x = f64::from(chart.viewport().width) - TOOLTIP_WIDTH - TOOLTIP_GAP;
        let x = (self.pixel_x + TOOLTIP_GAP).max(plot.left).min(max_x);
        let y = (self.pixel_y - TOOLTIP_RISE).max(plot.top + TOOLTIP_GAP);
        TooltipPayload {
            title: self.day.format("%Y-%m-%d").to_string(),
            body: format!("Incidents: {}", self.count),
            x,
            y,
            width: TOOLTIP_WIDTH,
            height: TOOLTIP_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverPhase {
    #[default]
    Idle,
    Hovering(HoverState),
}

/// Resolves a pointer position to the nearest sample of `chart`.
///
/// X is clamped into the plot before inversion, so pointers over the margins
/// still pick the closest edge day. Ties in day distance go to the earlier
/// day. Returns `None` for empty or collapsed charts and for pointers outside
/// the viewport.
#[must_use]
pub fn resolve_hover(chart: &TrendChart, pixel_x: f64, pixel_y: f64) -> Option<HoverState> {
    let scale = chart.scale();
    if !chart.has_data() || scale.is_degenerate() {
        return None;
    }
    if !pixel_x.is_finite() || !pixel_y.is_finite() || !chart.viewport().contains(pixel_x, pixel_y)
    {
        return None;
    }

    let clamped_x = scale.plot().clamp_x(pixel_x);
    let target = scale.x_to_day_offset(clamped_x)?;
    let first = chart.series().first_day()?;

    let nearest = chart.series().points().iter().min_by_key(|point| {
        let offset = (point.day - first).num_days() as f64;
        OrderedFloat((offset - target).abs())
    })?;

    Some(HoverState {
        day: nearest.day,
        count: nearest.count,
        pixel_x: scale.time_to_x(nearest.day),
        pixel_y: scale.count_to_y(nearest.count),
    })
}

/// Idle/Hovering state machine driven by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverTracker {
    phase: HoverPhase,
    cursor: Option<(f64, f64)>,
}

impl HoverTracker {
    #[must_use]
    pub fn phase(self) -> HoverPhase {
        self.phase
    }

    #[must_use]
    pub fn state(self) -> Option<HoverState> {
        match self.phase {
            HoverPhase::Idle => None,
            HoverPhase::Hovering(state) => Some(state),
        }
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pointer_move(
        &mut self,
        chart: &TrendChart,
        pixel_x: f64,
        pixel_y: f64,
    ) -> Option<HoverState> {
        let resolved = resolve_hover(chart, pixel_x, pixel_y);
        trace!(pixel_x, pixel_y, hit = resolved.is_some(), "hover pointer move");
        match resolved {
            Some(state) => {
                self.cursor = Some((pixel_x, pixel_y));
                self.phase = HoverPhase::Hovering(state);
            }
            None => {
                self.cursor = None;
                self.phase = HoverPhase::Idle;
            }
        }
        resolved
    }

    pub fn on_pointer_leave(&mut self) -> Option<HoverState> {
        trace!("hover pointer leave");
        self.cursor = None;
        self.phase = HoverPhase::Idle;
        None
    }

    /// Re-resolves the last pointer position against a rebuilt chart.
    pub fn refresh(&mut self, chart: &TrendChart) -> Option<HoverState> {
        match self.cursor {
            Some((x, y)) => self.on_pointer_move(chart, x, y),
            None => None,
        }
    }
}

use tracing::debug;

use crate::core::{
    Clock, DateRange, IngestDiagnostics, Margins, RangePreset, RawObservation, TimeSeriesPoint,
    TrendChart, Viewport, ingest_observations, parse_observations_json,
};
use crate::error::ChartResult;
use crate::interaction::{HoverPhase, HoverState, HoverTracker};
use crate::render::{RenderFrame, Renderer};

use super::{TrendChartConfig, TrendStyle, build_trend_frame};

/// Facade consumed by host pages.
///
/// Owns the observations, configuration and hover tracker. Every input change
/// rebuilds the `TrendChart` and re-resolves an active hover against it.
pub struct TrendChartEngine<R: Renderer> {
    renderer: R,
    config: TrendChartConfig,
    style: TrendStyle,
    observations: Vec<TimeSeriesPoint>,
    diagnostics: IngestDiagnostics,
    chart: TrendChart,
    hover: HoverTracker,
}

impl<R: Renderer> TrendChartEngine<R> {
    pub fn new(renderer: R, config: TrendChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let chart = build_chart(&[], config);
        Ok(Self {
            renderer,
            config,
            style: TrendStyle::default(),
            observations: Vec::new(),
            diagnostics: IngestDiagnostics::default(),
            chart,
            hover: HoverTracker::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TrendChartConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> &TrendStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TrendStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn chart(&self) -> &TrendChart {
        &self.chart
    }

    #[must_use]
    pub fn diagnostics(&self) -> IngestDiagnostics {
        self.diagnostics
    }

    #[must_use]
    pub fn observations(&self) -> &[TimeSeriesPoint] {
        &self.observations
    }

    /// Replaces the observations with already canonical points.
    pub fn set_points(&mut self, points: Vec<TimeSeriesPoint>) {
        self.diagnostics = IngestDiagnostics {
            accepted: points.len(),
            ..IngestDiagnostics::default()
        };
        self.observations = points;
        self.rebuild();
    }

    /// Replaces the observations, dropping records with unparsable days.
    pub fn set_observations(&mut self, records: &[RawObservation]) -> IngestDiagnostics {
        let report = ingest_observations(records);
        self.observations = report.points;
        self.diagnostics = report.diagnostics;
        self.rebuild();
        self.diagnostics
    }

    /// Replaces the observations from a JSON payload.
    ///
    /// On a payload-level error the previous observations stay in place.
    pub fn set_observations_json(&mut self, payload: &str) -> ChartResult<IngestDiagnostics> {
        let report = parse_observations_json(payload)?;
        self.observations = report.points;
        self.diagnostics = report.diagnostics;
        self.rebuild();
        Ok(self.diagnostics)
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.config.range = range;
        self.rebuild();
    }

    pub fn apply_preset(&mut self, preset: RangePreset, clock: &impl Clock) -> DateRange {
        let range = preset.resolve(clock);
        self.set_range(range);
        range
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        self.rebuild();
    }

    pub fn set_margins(&mut self, margins: Margins) -> ChartResult<()> {
        self.config.margins = margins.validate()?;
        self.rebuild();
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<HoverState> {
        self.hover.on_pointer_move(&self.chart, x, y)
    }

    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
    }

    #[must_use]
    pub fn hover_state(&self) -> Option<HoverState> {
        self.hover.state()
    }

    #[must_use]
    pub fn hover_phase(&self) -> HoverPhase {
        self.hover.phase()
    }

    /// Scene for the current chart and hover state.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        build_trend_frame(&self.chart, &self.style, self.hover.state().as_ref())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.render_frame().map(|_| ())
    }

    /// Builds the frame once, hands it to the renderer and returns it.
    pub fn render_frame(&mut self) -> ChartResult<RenderFrame> {
        let frame = self.frame();
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn rebuild(&mut self) {
        self.chart = build_chart(&self.observations, self.config);
        let hover = self.hover.refresh(&self.chart);
        debug!(
            days = self.chart.series().len(),
            y_max = self.chart.scale().y_max(),
            hovering = hover.is_some(),
            "rebuilt trend chart"
        );
    }
}

fn build_chart(observations: &[TimeSeriesPoint], config: TrendChartConfig) -> TrendChart {
    TrendChart::build(
        observations,
        config.range,
        config.viewport,
        config.margins,
        config.tick_options(),
    )
}

#![cfg(feature = "cairo-backend")]

use chrono::NaiveDate;
use incident_trend::ChartError;
use incident_trend::api::{TrendStyle, build_trend_frame};
use incident_trend::core::{
    DateRange, Margins, TickOptions, TimeSeriesPoint, TrendChart, Viewport,
};
use incident_trend::render::{CairoRenderStats, CairoRenderer, Renderer};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid day")
}

#[test]
fn cairo_renderer_draws_every_primitive() {
    let chart = TrendChart::build(
        &[TimeSeriesPoint::new(day(2025, 9, 2), 2)],
        DateRange::new(day(2025, 9, 1), day(2025, 9, 3)),
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );
    let frame = build_trend_frame(&chart, &TrendStyle::default(), None);

    let mut renderer = CairoRenderer::new(Viewport::default()).expect("cairo renderer");
    renderer.render(&frame).expect("render");

    assert_eq!(
        renderer.last_stats(),
        CairoRenderStats {
            rects_drawn: 1,
            lines_drawn: 4,
            paths_drawn: 1,
            circles_drawn: 3,
            texts_drawn: 8,
        }
    );

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_rejects_empty_surface() {
    let err = CairoRenderer::new(Viewport::new(0, 200)).expect_err("must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 200
        }
    ));
}

use approx::assert_relative_eq;
use chrono::NaiveDate;
use incident_trend::api::{TrendStyle, build_trend_frame};
use incident_trend::core::{
    DateRange, Margins, TickOptions, TimeSeriesPoint, TrendChart, Viewport,
};
use incident_trend::interaction::resolve_hover;
use incident_trend::render::{
    CanvasLayerKind, FrameNotice, LineStrokeStyle, NullRenderer, PathCommand, Renderer,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid day")
}

fn chart(points: &[TimeSeriesPoint], range: DateRange, viewport: Viewport) -> TrendChart {
    TrendChart::build(
        points,
        range,
        viewport,
        Margins::default(),
        TickOptions::default(),
    )
}

fn september_chart() -> TrendChart {
    chart(
        &[TimeSeriesPoint::new(day(2025, 9, 2), 2)],
        DateRange::new(day(2025, 9, 1), day(2025, 9, 3)),
        Viewport::default(),
    )
}

#[test]
fn series_layer_has_one_polyline_and_a_marker_per_day() {
    let frame = build_trend_frame(&september_chart(), &TrendStyle::default(), None);
    let series = frame
        .layer(CanvasLayerKind::Series)
        .expect("series layer");

    assert_eq!(series.paths.len(), 1);
    let path = &series.paths[0];
    assert_eq!(path.commands.len(), 3);
    assert!(matches!(path.commands[0], PathCommand::MoveTo { .. }));
    assert!(
        path.commands[1..]
            .iter()
            .all(|command| matches!(command, PathCommand::LineTo { .. }))
    );
    assert_eq!(path.svg_path_data(), "M 44 184 L 224 18 L 404 184");

    assert_eq!(series.circles.len(), 3);
    assert_relative_eq!(series.circles[1].cx, 224.0);
    assert_relative_eq!(series.circles[1].cy, 18.0);
}

#[test]
fn grid_and_axis_layers_carry_ticks_and_titles() {
    let frame = build_trend_frame(&september_chart(), &TrendStyle::default(), None);
    assert_eq!(frame.notice, None);

    let grid = frame.layer(CanvasLayerKind::Grid).expect("grid layer");
    let labels: Vec<_> = grid.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2"]);
    assert_eq!(grid.lines.len(), 3);
    assert_relative_eq!(grid.texts[0].x, 36.0);

    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis layer");
    assert_eq!(axis.lines.len(), 1);
    let labels: Vec<_> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["Sep 1", "Sep 2", "Sep 3", "Date", "Count"]);
    let count_title = axis.texts.last().expect("count title");
    assert_relative_eq!(count_title.rotation_deg, -90.0);
}

#[test]
fn layers_follow_canonical_order() {
    let frame = build_trend_frame(&september_chart(), &TrendStyle::default(), None);
    let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, CanvasLayerKind::CANONICAL.to_vec());
}

#[test]
fn no_hover_leaves_hover_layer_empty() {
    let frame = build_trend_frame(&september_chart(), &TrendStyle::default(), None);
    let hover = frame.layer(CanvasLayerKind::Hover).expect("hover layer");
    assert!(hover.is_empty());
}

#[test]
fn hover_overlay_draws_guide_marker_and_tooltip() {
    let chart = september_chart();
    let state = resolve_hover(&chart, 224.0, 100.0).expect("hover state");
    let frame = build_trend_frame(&chart, &TrendStyle::default(), Some(&state));
    let hover = frame.layer(CanvasLayerKind::Hover).expect("hover layer");

    assert_eq!(hover.lines.len(), 1);
    assert_eq!(hover.lines[0].stroke_style, LineStrokeStyle::Dashed(3));
    assert_relative_eq!(hover.lines[0].x1, 224.0);
    assert_relative_eq!(hover.lines[0].y1, 18.0);
    assert_relative_eq!(hover.lines[0].y2, 184.0);

    assert_eq!(hover.circles.len(), 1);
    assert_eq!(hover.rects.len(), 1);
    assert_relative_eq!(hover.rects[0].x, 232.0);

    let texts: Vec<_> = hover.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["2025-09-02", "Incidents: 2"]);
}

#[test]
fn empty_series_renders_no_data_placeholder() {
    let chart = chart(
        &[],
        DateRange::new(day(2025, 9, 3), day(2025, 9, 1)),
        Viewport::default(),
    );
    let frame = build_trend_frame(&chart, &TrendStyle::default(), None);

    assert_eq!(frame.notice, Some(FrameNotice::NoData));
    let series = frame.layer(CanvasLayerKind::Series).expect("series layer");
    assert!(series.is_empty());
    let background = frame
        .layer(CanvasLayerKind::Background)
        .expect("background layer");
    assert_eq!(background.texts.len(), 1);
    assert_eq!(background.texts[0].text, "No data");
    assert_relative_eq!(background.texts[0].x, 210.0);
    assert_relative_eq!(background.texts[0].y, 110.0);
}

#[test]
fn collapsed_plot_renders_too_small_notice() {
    let chart = chart(
        &[TimeSeriesPoint::new(day(2025, 9, 2), 2)],
        DateRange::new(day(2025, 9, 1), day(2025, 9, 3)),
        Viewport::new(50, 40),
    );
    let frame = build_trend_frame(&chart, &TrendStyle::default(), None);

    assert_eq!(frame.notice, Some(FrameNotice::TooSmall));
    assert_eq!(frame.primitive_count(), 2);
}

#[test]
fn zero_dash_style_draws_solid_hover_guide() {
    let chart = september_chart();
    let state = resolve_hover(&chart, 224.0, 100.0).expect("hover state");
    let style = TrendStyle {
        hover_guide_dash: 0,
        ..TrendStyle::default()
    };
    let frame = build_trend_frame(&chart, &style, Some(&state));
    let hover = frame.layer(CanvasLayerKind::Hover).expect("hover layer");
    assert_eq!(hover.lines[0].stroke_style, LineStrokeStyle::Solid);
}

#[test]
fn every_built_frame_passes_validation() {
    let chart = september_chart();
    let state = resolve_hover(&chart, 224.0, 100.0).expect("hover state");
    let frame = build_trend_frame(&chart, &TrendStyle::default(), Some(&state));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_primitive_count, frame.primitive_count());
    assert_eq!(renderer.last_notice, None);
}

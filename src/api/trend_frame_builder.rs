use crate::core::TrendChart;
use crate::interaction::HoverState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, FrameNotice, LinePrimitive, LineStrokeStyle, PathPrimitive,
    RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::TrendStyle;

const Y_LABEL_GAP: f64 = 8.0;
const X_LABEL_INSET: f64 = 10.0;
const X_TITLE_INSET: f64 = 2.0;
const Y_TITLE_X: f64 = 12.0;
const TOOLTIP_PADDING: f64 = 8.0;
const TOOLTIP_CORNER_RADIUS: f64 = 8.0;
const TOOLTIP_TITLE_BASELINE: f64 = 14.0;
const TOOLTIP_BODY_BASELINE: f64 = 26.0;

/// Builds the full draw scene for `chart`, with an optional hover overlay.
///
/// Empty series and collapsed plots produce a background plus a centered
/// notice instead of axes and geometry.
#[must_use]
pub fn build_trend_frame(
    chart: &TrendChart,
    style: &TrendStyle,
    hover: Option<&HoverState>,
) -> RenderFrame {
    let viewport = chart.viewport();
    let mut frame = RenderFrame::new(viewport);

    let notice = if !chart.has_data() {
        Some(FrameNotice::NoData)
    } else if chart.scale().is_degenerate() {
        Some(FrameNotice::TooSmall)
    } else {
        None
    };
    if let Some(notice) = notice {
        push_notice(&mut frame, style, notice);
        return frame;
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    frame.layer_mut(CanvasLayerKind::Background).rects.push(
        RectPrimitive::new(0.0, 0.0, width, height, style.background_color)
            .with_corner_radius(style.background_corner_radius),
    );

    push_grid(&mut frame, chart, style);
    push_axes(&mut frame, chart, style);
    push_series(&mut frame, chart, style);
    if let Some(hover) = hover {
        push_hover(&mut frame, chart, style, hover);
    }
    frame
}

fn push_notice(frame: &mut RenderFrame, style: &TrendStyle, notice: FrameNotice) {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);
    let text = match notice {
        FrameNotice::NoData => style.no_data_text.as_str(),
        FrameNotice::TooSmall => style.too_small_text.as_str(),
    };

    frame.notice = Some(notice);
    let layer = frame.layer_mut(CanvasLayerKind::Background);
    layer.rects.push(
        RectPrimitive::new(0.0, 0.0, width, height, style.notice_fill_color)
            .with_corner_radius(style.background_corner_radius),
    );
    layer.texts.push(
        TextPrimitive::new(
            text,
            width / 2.0,
            height / 2.0,
            style.axis_title_font_size_px,
            style.notice_text_color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle),
    );
}

fn push_grid(frame: &mut RenderFrame, chart: &TrendChart, style: &TrendStyle) {
    let scale = chart.scale();
    let plot = scale.plot();
    let layer = frame.layer_mut(CanvasLayerKind::Grid);

    for &tick in scale.y_ticks() {
        let y = scale.count_to_y(tick);
        layer.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            1.0,
            style.grid_line_color,
        ));
        layer.texts.push(
            TextPrimitive::new(
                tick.to_string(),
                plot.left - Y_LABEL_GAP,
                y,
                style.tick_font_size_px,
                style.tick_label_color,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }
}

fn push_axes(frame: &mut RenderFrame, chart: &TrendChart, style: &TrendStyle) {
    let scale = chart.scale();
    let plot = scale.plot();
    let height = f64::from(chart.viewport().height);
    let layer = frame.layer_mut(CanvasLayerKind::Axis);

    layer.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        1.0,
        style.axis_line_color,
    ));

    for tick in scale.x_ticks() {
        layer.texts.push(TextPrimitive::new(
            tick.label.clone(),
            scale.time_to_x(tick.day),
            height - X_LABEL_INSET,
            style.tick_font_size_px,
            style.tick_label_color,
            TextHAlign::Center,
        ));
    }

    let (center_x, center_y) = plot.center();
    if !style.x_axis_title.is_empty() {
        layer.texts.push(TextPrimitive::new(
            style.x_axis_title.clone(),
            center_x,
            height - X_TITLE_INSET,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        ));
    }
    if !style.y_axis_title.is_empty() {
        layer.texts.push(
            TextPrimitive::new(
                style.y_axis_title.clone(),
                Y_TITLE_X,
                center_y,
                style.axis_title_font_size_px,
                style.axis_title_color,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
    }
}

fn push_series(frame: &mut RenderFrame, chart: &TrendChart, style: &TrendStyle) {
    let scale = chart.scale();
    let mapped: Vec<(f64, f64)> = chart
        .series()
        .points()
        .iter()
        .map(|point| (scale.time_to_x(point.day), scale.count_to_y(point.count)))
        .collect();

    let layer = frame.layer_mut(CanvasLayerKind::Series);
    layer.paths.push(PathPrimitive::polyline(
        mapped.iter().copied(),
        style.series_line_width,
        style.series_line_color,
    ));
    layer.circles.extend(
        mapped
            .iter()
            .map(|&(x, y)| CirclePrimitive::new(x, y, style.marker_radius, style.series_line_color)),
    );
}

fn push_hover(frame: &mut RenderFrame, chart: &TrendChart, style: &TrendStyle, hover: &HoverState) {
    let plot = chart.scale().plot();
    let tooltip = hover.tooltip(chart);
    let guide_style = match style.hover_guide_dash {
        0 => LineStrokeStyle::Solid,
        dash => LineStrokeStyle::Dashed(dash),
    };

    let layer = frame.layer_mut(CanvasLayerKind::Hover);
    layer.lines.push(
        LinePrimitive::new(
            hover.pixel_x,
            plot.top,
            hover.pixel_x,
            plot.bottom(),
            1.0,
            style.hover_guide_color,
        )
        .with_stroke_style(guide_style),
    );
    layer.circles.push(
        CirclePrimitive::new(
            hover.pixel_x,
            hover.pixel_y,
            style.hover_marker_radius,
            style.tooltip_fill_color,
        )
        .with_stroke(2.0, style.series_line_color),
    );
    layer.rects.push(
        RectPrimitive::new(
            tooltip.x,
            tooltip.y,
            tooltip.width,
            tooltip.height,
            style.tooltip_fill_color,
        )
        .with_border(1.0, style.tooltip_border_color)
        .with_corner_radius(TOOLTIP_CORNER_RADIUS),
    );
    for (text, baseline) in [
        (tooltip.title, TOOLTIP_TITLE_BASELINE),
        (tooltip.body, TOOLTIP_BODY_BASELINE),
    ] {
        layer.texts.push(TextPrimitive::new(
            text,
            tooltip.x + TOOLTIP_PADDING,
            tooltip.y + baseline,
            style.tooltip_font_size_px,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
    }
}

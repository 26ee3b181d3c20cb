use approx::assert_relative_eq;
use chrono::NaiveDate;
use incident_trend::core::{
    DateRange, LinearScale, Margins, TickOptions, TimeSeriesPoint, TrendChart, Viewport,
    build_scale, normalize,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid day")
}

fn three_day_series() -> incident_trend::core::NormalizedSeries {
    normalize(
        &[TimeSeriesPoint::new(day(2025, 9, 2), 2)],
        DateRange::new(day(2025, 9, 1), day(2025, 9, 3)),
    )
}

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::new(0.0, 10.0, 100.0, 200.0).expect("valid scale");
    assert_relative_eq!(scale.map(2.5), 125.0);
    assert_relative_eq!(scale.invert(125.0), 2.5);
}

#[test]
fn linear_scale_supports_reversed_pixel_range() {
    let scale = LinearScale::new(0.0, 4.0, 184.0, 18.0).expect("valid scale");
    assert_relative_eq!(scale.map(0.0), 184.0);
    assert_relative_eq!(scale.map(4.0), 18.0);
    assert_relative_eq!(scale.invert(101.0), 2.0);
}

#[test]
fn linear_scale_rejects_zero_width_domain() {
    assert!(LinearScale::new(3.0, 3.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
}

#[test]
fn collapsed_pixel_range_inverts_to_domain_start() {
    let scale = LinearScale::new(0.0, 5.0, 44.0, 44.0).expect("valid scale");
    assert_relative_eq!(scale.map(3.0), 44.0);
    assert_relative_eq!(scale.invert(120.0), 0.0);
}

#[test]
fn default_layout_maps_days_across_plot_width() {
    let scale = build_scale(
        &three_day_series(),
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );

    assert_relative_eq!(scale.time_to_x(day(2025, 9, 1)), 44.0);
    assert_relative_eq!(scale.time_to_x(day(2025, 9, 2)), 224.0);
    assert_relative_eq!(scale.time_to_x(day(2025, 9, 3)), 404.0);
}

#[test]
fn count_axis_grows_upwards_from_plot_bottom() {
    let scale = build_scale(
        &three_day_series(),
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );

    assert_eq!(scale.y_max(), 2);
    assert_eq!(scale.y_ticks(), &[0, 1, 2]);
    assert_relative_eq!(scale.count_to_y(0), 184.0);
    assert_relative_eq!(scale.count_to_y(1), 101.0);
    assert_relative_eq!(scale.count_to_y(2), 18.0);
}

#[test]
fn off_step_maximum_is_a_tick_at_the_plot_top() {
    let chart = TrendChart::build(
        &[TimeSeriesPoint::new(day(2025, 9, 1), 7)],
        DateRange::new(day(2025, 9, 1), day(2025, 9, 2)),
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );
    let scale = chart.scale();

    assert_eq!(scale.y_max(), 7);
    assert_eq!(scale.y_step(), 2);
    assert_eq!(scale.y_ticks(), &[0, 2, 4, 6, 7]);
    assert_relative_eq!(scale.count_to_y(7), 18.0);
    assert_relative_eq!(scale.count_to_y(0), 184.0);
}

#[test]
fn all_zero_series_still_has_unit_axis() {
    let series = normalize(&[], DateRange::new(day(2025, 9, 1), day(2025, 9, 5)));
    let scale = build_scale(
        &series,
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );
    assert_eq!(scale.y_max(), 1);
    assert_eq!(scale.y_ticks(), &[0, 1]);
    assert_relative_eq!(scale.count_to_y(0), 184.0);
}

#[test]
fn single_day_is_centered_horizontally() {
    let d = day(2025, 9, 2);
    let series = normalize(&[TimeSeriesPoint::new(d, 3)], DateRange::new(d, d));
    let scale = build_scale(
        &series,
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );

    assert_relative_eq!(scale.time_to_x(d), 224.0);
    assert_relative_eq!(scale.count_to_y(3), 18.0);
    assert_eq!(scale.x_to_day_offset(10.0), Some(0.0));
}

#[test]
fn undersized_viewport_clamps_instead_of_failing() {
    let scale = build_scale(
        &three_day_series(),
        Viewport::new(50, 40),
        Margins::default(),
        TickOptions::default(),
    );

    assert!(scale.is_degenerate());
    for d in [day(2025, 9, 1), day(2025, 9, 3)] {
        let x = scale.time_to_x(d);
        assert!(x.is_finite());
        assert_relative_eq!(x, 44.0);
    }
    let y = scale.count_to_y(2);
    assert!(y.is_finite());
    assert_relative_eq!(y, 18.0);
}

#[test]
fn empty_series_maps_to_plot_origin() {
    let series = normalize(&[], DateRange::new(day(2025, 9, 3), day(2025, 9, 1)));
    let scale = build_scale(
        &series,
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );

    assert_eq!(scale.x_domain(), None);
    assert!(scale.x_ticks().is_empty());
    assert_relative_eq!(scale.time_to_x(day(2025, 9, 2)), 44.0);
    assert_eq!(scale.x_to_day_offset(200.0), None);
}

#[test]
fn x_to_day_offset_inverts_time_mapping() {
    let scale = build_scale(
        &three_day_series(),
        Viewport::default(),
        Margins::default(),
        TickOptions::default(),
    );
    let offset = scale.x_to_day_offset(134.0).expect("offset");
    assert_relative_eq!(offset, 0.5);
}

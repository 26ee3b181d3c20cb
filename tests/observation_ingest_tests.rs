use chrono::NaiveDate;
use incident_trend::core::{
    DateRange, RawObservation, TimeSeriesPoint, ingest_observations, normalize,
    parse_observations_json,
};
use incident_trend::ChartError;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid day")
}

#[test]
fn mixed_payload_counts_accepted_and_rejected_records() {
    let payload = r#"[
        {"day": "2025-09-02", "count": 2},
        {"date": "2025-09-02", "count": 1},
        {"occurredAt": "2025-09-03T23:30:00-05:00", "studentId": 7},
        {"day": "09/02/2025", "count": 1},
        {"foo": 1},
        {"day": "2025-09-01", "count": -1}
    ]"#;

    let report = parse_observations_json(payload).expect("payload decodes");
    assert_eq!(report.diagnostics.accepted, 3);
    assert_eq!(report.diagnostics.unparsable_day, 1);
    assert_eq!(report.diagnostics.malformed, 2);
    assert_eq!(report.diagnostics.rejected(), 3);
    assert!(!report.diagnostics.is_clean());

    let series = normalize(
        &report.points,
        DateRange::new(day(2025, 9, 1), day(2025, 9, 3)),
    );
    let counts: Vec<_> = series.points().iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![0, 3, 1]);
}

#[test]
fn timestamps_keep_their_local_calendar_day() {
    let records = [
        RawObservation::timestamp("2025-09-02T23:30:00-05:00"),
        RawObservation::timestamp("2025-09-03T00:15:00+09:00"),
        RawObservation::timestamp("2025-09-02T08:00:00Z"),
        RawObservation::timestamp("2025-09-02 14:05:00"),
    ];
    let report = ingest_observations(&records);

    assert!(report.diagnostics.is_clean());
    let days: Vec<_> = report.points.iter().map(|p| p.day).collect();
    assert_eq!(
        days,
        vec![day(2025, 9, 2), day(2025, 9, 3), day(2025, 9, 2), day(2025, 9, 2)]
    );
    assert!(report.points.iter().all(|p| p.count == 1));
}

#[test]
fn aggregated_records_accept_timestamps_as_day() {
    let point = RawObservation::aggregated("2025-09-02T10:00:00Z", 4)
        .to_point()
        .expect("point");
    assert_eq!(point, TimeSeriesPoint::new(day(2025, 9, 2), 4));
}

#[test]
fn unparsable_day_reports_invalid_day_error() {
    let err = RawObservation::aggregated("not a day", 1)
        .to_point()
        .expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidDay { .. }));

    let err = RawObservation::aggregated("   ", 1)
        .to_point()
        .expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidDay { .. }));
}

#[test]
fn analytics_envelope_is_unwrapped() {
    let payload = r#"{"byDay": [{"date": "2025-09-01", "count": 4}], "total": 4}"#;
    let report = parse_observations_json(payload).expect("payload decodes");
    assert_eq!(report.points, vec![TimeSeriesPoint::new(day(2025, 9, 1), 4)]);
}

#[test]
fn object_without_by_day_is_rejected() {
    let err = parse_observations_json(r#"{"totalIncidents": 3}"#).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn scalar_payload_is_rejected() {
    let err = parse_observations_json("42").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn broken_json_surfaces_decoder_error() {
    let err = parse_observations_json("[{").expect_err("must fail");
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn empty_array_is_a_clean_empty_report() {
    let report = parse_observations_json("[]").expect("payload decodes");
    assert!(report.points.is_empty());
    assert!(report.diagnostics.is_clean());
    assert_eq!(report.diagnostics.accepted, 0);
}

#[test]
fn snake_case_timestamp_alias_is_accepted() {
    let report =
        parse_observations_json(r#"[{"occurred_at": "2025-09-05T12:00:00Z"}]"#).expect("decodes");
    assert_eq!(report.points, vec![TimeSeriesPoint::new(day(2025, 9, 5), 1)]);
}

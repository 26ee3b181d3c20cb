use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Source of "today" for range defaults.
///
/// Any `Fn() -> NaiveDate` is a clock, so tests can pass a closure.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Inclusive calendar-day interval.
///
/// A range whose `start` is after its `end` is empty rather than invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Last `days` days ending today, inclusive. `days == 0` is treated as 1.
    #[must_use]
    pub fn last_days(days: u32, clock: &impl Clock) -> Self {
        let end = clock.today();
        let back = u64::from(days.max(1) - 1);
        let start = end
            .checked_sub_days(chrono::Days::new(back))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    #[must_use]
    pub fn year_to_date(clock: &impl Clock) -> Self {
        let end = clock.today();
        let start = NaiveDate::from_ymd_opt(end.year(), 1, 1).unwrap_or(end);
        Self { start, end }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    /// Whole days from `start` to `end`; `None` for an empty range.
    #[must_use]
    pub fn days_between(self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        u32::try_from((self.end - self.start).num_days()).ok()
    }

    /// Number of calendar days covered, `0` when empty.
    #[must_use]
    pub fn len_days(self) -> usize {
        self.days_between().map_or(0, |days| days as usize + 1)
    }

    #[must_use]
    pub fn contains(self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let count = self.len_days();
        self.start.iter_days().take(count)
    }
}

/// Quick range choices offered next to the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RangePreset {
    Last7Days,
    Last14Days,
    #[default]
    Last30Days,
    Last45Days,
    YearToDate,
    Custom(DateRange),
}

impl RangePreset {
    pub const QUICK: [RangePreset; 4] = [
        RangePreset::Last7Days,
        RangePreset::Last14Days,
        RangePreset::Last30Days,
        RangePreset::Last45Days,
    ];

    #[must_use]
    pub fn resolve(self, clock: &impl Clock) -> DateRange {
        match self {
            RangePreset::Last7Days => DateRange::last_days(7, clock),
            RangePreset::Last14Days => DateRange::last_days(14, clock),
            RangePreset::Last30Days => DateRange::last_days(30, clock),
            RangePreset::Last45Days => DateRange::last_days(45, clock),
            RangePreset::YearToDate => DateRange::year_to_date(clock),
            RangePreset::Custom(range) => range,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RangePreset::Last7Days => "Last 7 days",
            RangePreset::Last14Days => "Last 14 days",
            RangePreset::Last30Days => "Last 30 days",
            RangePreset::Last45Days => "Last 45 days",
            RangePreset::YearToDate => "Year to date",
            RangePreset::Custom(_) => "Custom",
        }
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a day or timestamp string into the calendar day it names.
///
/// Timestamps keep their wall-clock date as written: `2025-09-02T23:30:00-05:00`
/// is Sep 2, never shifted to UTC.
pub fn parse_calendar_day(raw: &str) -> ChartResult<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid_day(raw, "value is empty"));
    }

    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day);
    }
    local_date_only(value)
}

/// Calendar day of a timestamp, taken from its local wall-clock part.
pub fn local_date_only(occurred_at: &str) -> ChartResult<NaiveDate> {
    let value = occurred_at.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamp.naive_local().date());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(stamp.date());
        }
    }
    Err(invalid_day(
        occurred_at,
        "expected YYYY-MM-DD or an ISO-8601 timestamp",
    ))
}

/// Short axis label such as `Sep 2`.
#[must_use]
pub fn short_day_label(day: NaiveDate) -> String {
    day.format("%b %-d").to_string()
}

fn invalid_day(value: &str, reason: &str) -> ChartError {
    ChartError::InvalidDay {
        value: value.to_owned(),
        reason: reason.to_owned(),
    }
}

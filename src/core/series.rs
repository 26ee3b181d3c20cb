use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::calendar::DateRange;
use crate::core::types::TimeSeriesPoint;

/// Gap-free daily series covering one `DateRange`, ascending by day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedSeries {
    points: Vec<TimeSeriesPoint>,
}

impl NormalizedSeries {
    #[must_use]
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.points.first().map(|point| point.day)
    }

    #[must_use]
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.day)
    }

    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.points.iter().map(|point| point.count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.points.iter().map(|point| u64::from(point.count)).sum()
    }

    #[must_use]
    pub fn get(&self, day: NaiveDate) -> Option<TimeSeriesPoint> {
        let first = self.first_day()?;
        let offset = usize::try_from((day - first).num_days()).ok()?;
        self.points.get(offset).copied()
    }
}

/// Fills `range` with one entry per day, summing observations that share a day.
///
/// Observations outside the range are ignored. An empty range (start after
/// end) yields an empty series.
#[must_use]
pub fn normalize(observations: &[TimeSeriesPoint], range: DateRange) -> NormalizedSeries {
    if range.is_empty() {
        return NormalizedSeries::default();
    }

    let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for observation in observations {
        if !range.contains(observation.day) {
            continue;
        }
        let total = by_day.entry(observation.day).or_insert(0);
        *total = total.saturating_add(observation.count);
    }

    let points = range
        .days()
        .map(|day| TimeSeriesPoint::new(day, by_day.get(&day).copied().unwrap_or(0)))
        .collect();

    NormalizedSeries { points }
}

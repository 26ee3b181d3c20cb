use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::core::calendar::short_day_label;
use crate::core::series::NormalizedSeries;

pub const DEFAULT_TARGET_Y_TICKS: usize = 4;
pub const DEFAULT_MAX_X_TICKS: usize = 6;

/// Rounds `x` to 1, 2, 5 or 10 times its power of ten.
///
/// Mantissa cut-offs are 1.5, 3 and 7. Non-positive or non-finite input
/// returns `1.0`.
#[must_use]
pub fn nice_number(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return 1.0;
    }

    let exponent = x.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);
    let mantissa = x / magnitude;
    let nice = if mantissa < 1.5 {
        1.0
    } else if mantissa < 3.0 {
        2.0
    } else if mantissa < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Integer step for a count axis; never below one incident.
#[must_use]
pub fn count_tick_step(y_max: u32, target_count: usize) -> u32 {
    let target = target_count.max(1) as f64;
    let raw = nice_number(f64::from(y_max.max(1)) / target).round();
    if raw >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    (raw as u32).max(1)
}

/// Count-axis ticks: step multiples from zero up to `y_max`, then `y_max`
/// itself when it is not a multiple.
///
/// The list is strictly ascending, starts at zero and ends at `y_max`.
#[must_use]
pub fn count_ticks(y_max: u32, target_count: usize) -> (u32, Vec<u32>) {
    let y_max = y_max.max(1);
    let step = count_tick_step(y_max, target_count);

    let mut ticks: Vec<u32> = (0..=y_max).step_by(step as usize).collect();
    if ticks.last() != Some(&y_max) {
        ticks.push(y_max);
    }
    (step, ticks)
}

/// Labeled day on the time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTick {
    pub index: usize,
    pub day: NaiveDate,
    pub label: String,
}

pub type DayTicks = SmallVec<[DayTick; DEFAULT_MAX_X_TICKS]>;

/// Picks up to `max_ticks` samples spread evenly by index, not by time.
#[must_use]
pub fn day_ticks(series: &NormalizedSeries, max_ticks: usize) -> DayTicks {
    let points = series.points();
    let count = max_ticks.min(points.len());
    let mut ticks = DayTicks::new();
    if count == 0 {
        return ticks;
    }

    let last_index = points.len() - 1;
    let divisor = if count > 1 { (count - 1) as f64 } else { 1.0 };
    for i in 0..count {
        let index = ((i as f64 / divisor) * last_index as f64).round() as usize;
        if ticks.last().is_some_and(|tick: &DayTick| tick.index == index) {
            continue;
        }
        let day = points[index].day;
        ticks.push(DayTick {
            index,
            day,
            label: short_day_label(day),
        });
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_number_follows_one_two_five_table() {
        assert_eq!(nice_number(1.2), 1.0);
        assert_eq!(nice_number(1.5), 2.0);
        assert_eq!(nice_number(2.9), 2.0);
        assert_eq!(nice_number(3.0), 5.0);
        assert_eq!(nice_number(6.9), 5.0);
        assert_eq!(nice_number(7.0), 10.0);
        assert_eq!(nice_number(25.0), 20.0);
        assert!((nice_number(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nice_number_rejects_non_positive_input() {
        assert_eq!(nice_number(0.0), 1.0);
        assert_eq!(nice_number(-3.0), 1.0);
        assert_eq!(nice_number(f64::NAN), 1.0);
    }

    #[test]
    fn small_maxima_use_unit_step() {
        assert_eq!(count_ticks(1, 4), (1, vec![0, 1]));
        assert_eq!(count_ticks(2, 4), (1, vec![0, 1, 2]));
        assert_eq!(count_ticks(0, 4), (1, vec![0, 1]));
    }

    #[test]
    fn off_step_maximum_is_appended() {
        assert_eq!(count_ticks(7, 4), (2, vec![0, 2, 4, 6, 7]));
        assert_eq!(count_ticks(10, 4), (2, vec![0, 2, 4, 6, 8, 10]));
        assert_eq!(count_ticks(37, 4), (10, vec![0, 10, 20, 30, 37]));
    }

    #[test]
    fn huge_maximum_does_not_overflow() {
        let (step, ticks) = count_ticks(u32::MAX, 4);
        assert_eq!(ticks.first(), Some(&0));
        assert_eq!(ticks.last(), Some(&u32::MAX));
        assert!(ticks[1..ticks.len() - 1].iter().all(|tick| tick % step == 0));
    }
}

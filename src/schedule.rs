// src/schedule.rs
// ============================================================================
// CALENDAR-DATED VESTING TIMELINES
// ============================================================================
// Expands vesting terms into a sequence of real calendar dates for dashboard
// timelines: the start date, the cliff end (when a cliff exists), and N
// evenly spaced release dates between cliff end and vesting end.
//
// Unlike the point-in-time calculator in `vesting`, this module uses true
// calendar month arithmetic. Failures (out-of-range date math) surface as an
// explicit error; the swallow-and-return-empty behavior wanted by display
// code lives in `utils::format`, not here.
// ============================================================================

use crate::params::{DAYS_PER_MONTH, DEFAULT_SCHEDULE_PERIODS};
use chrono::{DateTime, Duration, Months, Utc};
use thiserror::Error;


/// Date schedule generation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Date arithmetic out of range ({0} months from base date)")]
    DateOutOfRange(f64),
}


/// Generate the calendar release timeline for a vesting position.
///
/// The sequence is `[start]`, then the cliff end date if `cliff_months > 0`,
/// then `period_count` dates stepping from the cliff end toward the vesting
/// end in equal fractions of the remaining months - length
/// `1 + (cliff > 0) + period_count`.
///
/// `remaining = vesting_duration_months - cliff_months` may be zero or
/// negative; neither is rejected. Zero remaining collapses every period date
/// onto the cliff end, negative remaining steps backwards from it. A zero
/// `period_count` yields only the start (and cliff) entries.
pub fn vesting_date_list(
    start: DateTime<Utc>,
    cliff_months: u32,
    vesting_duration_months: u32,
    period_count: u32,
) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
    let mut dates = vec![start];

    let cliff_end = add_calendar_months(start, i64::from(cliff_months))?;
    if cliff_months > 0 {
        dates.push(cliff_end);
    }

    if period_count == 0 {
        tracing::warn!("zero-period date list requested, returning boundary dates only");
        return Ok(dates);
    }

    let remaining_months = i64::from(vesting_duration_months) - i64::from(cliff_months);
    let per_period_months = remaining_months as f64 / f64::from(period_count);

    for i in 1..=period_count {
        dates.push(add_fractional_months(
            cliff_end,
            per_period_months * f64::from(i),
        )?);
    }

    tracing::debug!(
        entries = dates.len(),
        cliff_months,
        vesting_duration_months,
        "generated vesting date list"
    );
    Ok(dates)
}


/// [`vesting_date_list`] with the default period count
/// ([`DEFAULT_SCHEDULE_PERIODS`]).
pub fn vesting_date_list_default(
    start: DateTime<Utc>,
    cliff_months: u32,
    vesting_duration_months: u32,
) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
    vesting_date_list(
        start,
        cliff_months,
        vesting_duration_months,
        DEFAULT_SCHEDULE_PERIODS,
    )
}


/// Add a signed whole number of calendar months (day-of-month clamped by
/// chrono, e.g. Jan 31 + 1 month = Feb 28).
fn add_calendar_months(
    date: DateTime<Utc>,
    months: i64,
) -> Result<DateTime<Utc>, ScheduleError> {
    let magnitude = u32::try_from(months.unsigned_abs())
        .map_err(|_| ScheduleError::DateOutOfRange(months as f64))?;

    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(ScheduleError::DateOutOfRange(months as f64))
}


/// Add a possibly fractional number of months: whole months calendar-wise,
/// the fractional remainder as a fraction of the fixed 30-day month. Keeps
/// period dates evenly spaced when the period count does not divide the
/// remaining months.
fn add_fractional_months(
    date: DateTime<Utc>,
    months: f64,
) -> Result<DateTime<Utc>, ScheduleError> {
    let whole = months.trunc() as i64;
    let with_whole = add_calendar_months(date, whole)?;

    let remainder_ms = (months.fract() * DAYS_PER_MONTH * 86_400_000.0).round() as i64;
    with_whole
        .checked_add_signed(Duration::milliseconds(remainder_ms))
        .ok_or(ScheduleError::DateOutOfRange(months))
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_no_cliff_sequence_length_and_spacing() {
        let start = date(2025, 1, 1);
        let dates = vesting_date_list(start, 0, 12, 4).unwrap();

        // [start] + 4 period dates, no cliff entry
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[1], date(2025, 4, 1));
        assert_eq!(dates[2], date(2025, 7, 1));
        assert_eq!(dates[3], date(2025, 10, 1));
        assert_eq!(dates[4], date(2026, 1, 1));
    }

    #[test]
    fn test_cliff_entry_included() {
        let start = date(2025, 1, 1);
        let dates = vesting_date_list(start, 6, 18, 4).unwrap();

        // [start, cliff] + 4 period dates
        assert_eq!(dates.len(), 6);
        assert_eq!(dates[1], date(2025, 7, 1));
        assert_eq!(dates[2], date(2025, 10, 1));
        assert_eq!(dates[5], date(2026, 7, 1));
    }

    #[test]
    fn test_fractional_period_months() {
        let start = date(2025, 1, 1);
        // remaining 10 months over 4 periods = 2.5 months per period
        let dates = vesting_date_list(start, 0, 10, 4).unwrap();

        assert_eq!(dates.len(), 5);
        // 2.5 months = 2 calendar months + 15 days
        assert_eq!(dates[1], date(2025, 3, 16));
        assert_eq!(dates[2], date(2025, 6, 1));
        assert_eq!(dates[3], date(2025, 8, 16));
        assert_eq!(dates[4], date(2025, 11, 1));

        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_duration_not_exceeding_cliff() {
        let start = date(2025, 1, 1);

        // remaining == 0: every period date collapses onto the cliff end
        let dates = vesting_date_list(start, 6, 6, 3).unwrap();
        assert_eq!(dates.len(), 5);
        assert!(dates[2..].iter().all(|d| *d == date(2025, 7, 1)));

        // remaining < 0: steps walk backwards from the cliff end
        let dates = vesting_date_list(start, 6, 3, 2).unwrap();
        assert_eq!(dates.len(), 4);
        let cliff_end = date(2025, 7, 1);
        assert!(dates[2] < cliff_end);
        assert!(dates[3] < dates[2]);
        assert_eq!(dates[3], date(2025, 4, 1));
    }

    #[test]
    fn test_zero_period_count() {
        let start = date(2025, 1, 1);
        let dates = vesting_date_list(start, 3, 12, 0).unwrap();
        assert_eq!(dates, vec![start, date(2025, 4, 1)]);
    }

    #[test]
    fn test_month_end_clamping() {
        let start = date(2025, 1, 31);
        let dates = vesting_date_list(start, 1, 1, 0).unwrap();
        // Jan 31 + 1 calendar month clamps to Feb 28
        assert_eq!(dates[1], date(2025, 2, 28));
    }

    #[test]
    fn test_default_period_count() {
        let start = date(2025, 1, 1);
        let dates = vesting_date_list_default(start, 0, 24).unwrap();
        assert_eq!(dates.len(), 1 + DEFAULT_SCHEDULE_PERIODS as usize);
        assert_eq!(dates[12], date(2027, 1, 1));
    }

    #[test]
    fn test_fresh_sequence_per_call() {
        let start = date(2025, 1, 1);
        let a = vesting_date_list(start, 2, 14, 6).unwrap();
        let b = vesting_date_list(start, 2, 14, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        // Stepping past chrono's representable range must surface, not panic
        let start = date(200_000, 1, 1);
        let result = vesting_date_list(start, 0, u32::MAX, 1);
        assert!(matches!(result, Err(ScheduleError::DateOutOfRange(_))));
    }
}

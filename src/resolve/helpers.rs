//! Shared date arithmetic for the resolvers.

use super::TimeValue;
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

pub(crate) fn day_start(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(0, 0, 0).unwrap()
}

pub(crate) fn day_end(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(23, 59, 59).unwrap()
}

/// A bare date expands to its full-day interval.
pub(crate) fn day_range(d: NaiveDate) -> TimeValue {
    TimeValue::Interval { start: day_start(d), end: day_end(d) }
}

/// Monday-based week containing `d`.
pub(crate) fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = d - Days::new(d.weekday().num_days_from_monday() as u64);
    (monday, monday + Days::new(6))
}

pub(crate) fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next - Days::new(1)))
}

/// Q1 = Jan–Mar … Q4 = Oct–Dec.
pub(crate) fn quarter_bounds(d: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start_month = (d.month0() / 3) * 3 + 1;
    let (first, _) = month_bounds(d.year(), start_month)?;
    let (_, last) = month_bounds(d.year(), start_month + 2)?;
    Some((first, last))
}

pub(crate) fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
}

/// Two-digit years widen: < 49 → 2000s, < 100 → 1900s.
pub(crate) fn normalize_year(year: i32) -> Option<i32> {
    let y = if year < 49 {
        year + 2000
    } else if year < 100 {
        year + 1900
    } else {
        year
    };
    (1..=9999).contains(&y).then_some(y)
}

pub(crate) fn add_months_signed(dt: NaiveDateTime, n: i64) -> Option<NaiveDateTime> {
    if n >= 0 {
        dt.checked_add_months(Months::new(u32::try_from(n).ok()?))
    } else {
        dt.checked_sub_months(Months::new(u32::try_from(-n).ok()?))
    }
}

/// Apply signed calendar offsets to `dt`, largest unit first.
#[allow(clippy::too_many_arguments)]
pub(crate) fn shift(
    dt: NaiveDateTime,
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Option<NaiveDateTime> {
    let dt = add_months_signed(dt, years * 12 + months)?;
    dt.checked_add_signed(
        Duration::weeks(weeks)
            + Duration::days(days)
            + Duration::hours(hours)
            + Duration::minutes(minutes)
            + Duration::seconds(seconds),
    )
}

/// Replace explicit date fields, tolerating transiently invalid
/// combinations (setting month before day can pass through Feb 30).
pub(crate) fn set_date_fields(
    dt: NaiveDateTime,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> Option<NaiveDateTime> {
    let y = year.unwrap_or(dt.year());
    let m = month.unwrap_or(dt.month());
    let d = day.unwrap_or(dt.day());
    Some(NaiveDateTime::new(NaiveDate::from_ymd_opt(y, m, d)?, dt.time()))
}

pub(crate) fn at(d: NaiveDate, hour: u32, minute: u32, second: u32) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(d, NaiveTime::from_hms_opt(hour, minute, second)?))
}

/// The N-th week of a month: week 1 runs from the 1st to the first Sunday,
/// later weeks are full Monday–Sunday weeks.
pub(crate) fn month_nth_week_bounds(year: i32, month: u32, n: u32) -> Option<(NaiveDate, NaiveDate)> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let until_sunday = 6 - first.weekday().num_days_from_monday() as u64;
    let first_week_end = first + Days::new(until_sunday);
    let (start, end) = if n == 1 {
        (first, first_week_end)
    } else {
        let start = first_week_end + Days::new(1 + (n as u64 - 2) * 7);
        (start, start + Days::new(6))
    };
    (start.month() == month).then_some((start, end.min(month_bounds(year, month)?.1)))
}

/// The N-th ISO-style week of a year, counted from the first Monday.
pub(crate) fn year_nth_week_bounds(year: i32, n: u32) -> Option<(NaiveDate, NaiveDate)> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let until_monday = (7 - first.weekday().num_days_from_monday() as u64) % 7;
    let first_monday = first + Days::new(until_monday);
    let start = first_monday + Days::new((n as u64 - 1) * 7);
    (start.year() == year).then_some((start, start + Days::new(6)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_bounds_are_monday_based() {
        // 2025-01-21 is a Tuesday.
        let (start, end) = week_bounds(d(2025, 1, 21));
        assert_eq!(start, d(2025, 1, 20));
        assert_eq!(end, d(2025, 1, 26));
    }

    #[test]
    fn month_bounds_handle_leap_years() {
        assert_eq!(month_bounds(2024, 2).unwrap().1, d(2024, 2, 29));
        assert_eq!(month_bounds(2025, 2).unwrap().1, d(2025, 2, 28));
    }

    #[test]
    fn year_widening() {
        assert_eq!(normalize_year(25), Some(2025));
        assert_eq!(normalize_year(99), Some(1999));
        assert_eq!(normalize_year(1980), Some(1980));
    }

    #[test]
    fn quarter_of_january_is_q1() {
        let (start, end) = quarter_bounds(d(2025, 1, 21)).unwrap();
        assert_eq!(start, d(2025, 1, 1));
        assert_eq!(end, d(2025, 3, 31));
    }

    #[test]
    fn nth_week_of_month() {
        // January 2025: the 1st is a Wednesday, so week 1 ends Sunday the 5th.
        let (start, end) = month_nth_week_bounds(2025, 1, 1).unwrap();
        assert_eq!((start, end), (d(2025, 1, 1), d(2025, 1, 5)));
        let (start, end) = month_nth_week_bounds(2025, 1, 2).unwrap();
        assert_eq!((start, end), (d(2025, 1, 6), d(2025, 1, 12)));
    }
}

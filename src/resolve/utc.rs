//! Absolute-date resolution.

use super::helpers::{day_end, day_range, day_start, month_bounds, normalize_year, year_bounds};
use super::{TimeValue, clock};
use crate::tag::DateFields;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// The concrete day a fully specified date points at, if it has one.
pub(crate) fn anchor_day(f: &DateFields, base: NaiveDateTime) -> Option<NaiveDate> {
    let day = f.day?;
    let month = f.month?;
    let year = match f.year {
        Some(y) => normalize_year(y)?,
        None => base.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

pub(crate) fn resolve(f: &DateFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    match (f.year, f.month, f.day) {
        (_, Some(_), Some(_)) => {
            let day = anchor_day(f, base)?;
            match f.clock {
                Some(c) => Some(vec![TimeValue::Instant(clock::on_day(day, &c, None)?)]),
                None => Some(vec![day_range(day)]),
            }
        }
        (year, Some(month), None) => {
            let year = match year {
                Some(y) => normalize_year(y)?,
                None => base.year(),
            };
            let (start, end) = month_bounds(year, month)?;
            Some(vec![TimeValue::Interval { start: day_start(start), end: day_end(end) }])
        }
        (Some(year), None, None) => {
            let (start, end) = year_bounds(normalize_year(year)?)?;
            Some(vec![TimeValue::Interval { start: day_start(start), end: day_end(end) }])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn bare_date_expands_to_full_day() {
        let f = DateFields { year: Some(2025), month: Some(3), day: Some(5), clock: None };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Interval {
                start: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap().and_hms_opt(23, 59, 59).unwrap(),
            }]
        );
    }

    #[test]
    fn month_without_year_uses_base_year() {
        let f = DateFields { month: Some(11), ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
    }

    #[test]
    fn invalid_calendar_dates_drop() {
        let f = DateFields { year: Some(2025), month: Some(2), day: Some(30), clock: None };
        assert!(resolve(&f, base()).is_none());
    }

    #[test]
    fn two_digit_year_widens() {
        let f = DateFields { year: Some(99), month: Some(1), day: Some(1), clock: None };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().year(), 1999);
    }
}

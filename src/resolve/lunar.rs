//! Lunar-date resolution via the bundled lunisolar tables.
//!
//! Without an explicit year, a lunar expression resolves to its occurrence
//! within the base instant's Gregorian year; twelfth-month dates therefore
//! come from the previous lunar year. An explicit year ("农历2024年八月")
//! names the lunar year directly.

use super::TimeValue;
use super::helpers::{day_end, day_range, day_start, normalize_year};
use crate::calendar::lunar;
use crate::tag::{LunarFields, MonthPeriod};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// The lunar year whose `month` intersects Gregorian `year`.
fn lunar_year_for_month(year: i32, month: u32) -> Option<i32> {
    for lunar_year in [year, year - 1] {
        if let Some((start, end)) = lunar::lunar_month_range(lunar_year, month) {
            if start.year() == year || end.year() == year {
                return Some(lunar_year);
            }
        }
    }
    None
}

fn lunar_day_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    for lunar_year in [year, year - 1] {
        if let Some(date) = lunar::lunar_to_solar(lunar_year, month, day) {
            if date.year() == year {
                return Some(date);
            }
        }
    }
    None
}

pub(crate) fn resolve(f: &LunarFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    let month = f.month?;
    let lunar_year = match f.year {
        Some(y) => normalize_year(y)?,
        None => {
            let gregorian = base.year() + f.offset_year.unwrap_or(0);
            lunar_year_for_month(gregorian, month)?
        }
    };

    if let Some(period) = f.month_period {
        let (start_day, end_day) = match period {
            MonthPeriod::Early => (1, 10),
            MonthPeriod::Mid => (11, 20),
            MonthPeriod::Late => (21, 30),
        };
        let start = lunar::lunar_to_solar(lunar_year, month, start_day)?;
        // Short months end on the 29th.
        let end = lunar::lunar_to_solar(lunar_year, month, end_day)
            .or_else(|| lunar::lunar_to_solar(lunar_year, month, 29))?;
        return Some(vec![TimeValue::Interval { start: day_start(start), end: day_end(end) }]);
    }

    match f.day {
        Some(day) => {
            let date = match f.year {
                Some(_) => lunar::lunar_to_solar(lunar_year, month, day)?,
                None => {
                    lunar_day_in_year(base.year() + f.offset_year.unwrap_or(0), month, day)?
                }
            };
            Some(vec![day_range(date)])
        }
        None => {
            let (start, end) = lunar::lunar_month_range(lunar_year, month)?;
            Some(vec![TimeValue::Interval { start: day_start(start), end: day_end(end) }])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn lunar_day_resolves_within_the_gregorian_year() {
        // 农历八月十五 during 2025 = 2025-10-06.
        let f = LunarFields { month: Some(8), day: Some(15), ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
    }

    #[test]
    fn first_lunar_month_is_the_upcoming_one() {
        let f = LunarFields { month: Some(1), ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
    }

    #[test]
    fn twelfth_month_comes_from_the_previous_lunar_year() {
        // 农历腊月 overlapping 2025 runs from the end of 2024.
        let f = LunarFields { month: Some(12), ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 1, 28).unwrap());
    }

    #[test]
    fn explicit_year_names_the_lunar_year() {
        let f = LunarFields { year: Some(2024), month: Some(8), day: Some(15), ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2024, 9, 17).unwrap());
    }

    #[test]
    fn month_period_slices_the_lunar_month() {
        // 农历正月中旬 2025: days 11-20 from 2025-01-29.
        let f = LunarFields {
            month: Some(1),
            month_period: Some(MonthPeriod::Mid),
            ..Default::default()
        };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 2, 8).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 2, 17).unwrap());
    }

    #[test]
    fn out_of_table_years_drop() {
        let f = LunarFields { year: Some(1950), month: Some(1), day: Some(1), ..Default::default() };
        assert!(resolve(&f, base()).is_none());
    }
}

//! Holiday and solar-term resolution.

use super::TimeValue;
use super::helpers::{day_end, day_range, day_start, month_bounds, normalize_year};
use crate::calendar::{
    Festival, FestivalRule, easter_sunday, last_weekday_of_month, lunar, nth_weekday_of_month,
};
use crate::tag::HolidayFields;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

fn target_year(f: &HolidayFields, base: NaiveDateTime) -> Option<i32> {
    match f.year {
        Some(y) => normalize_year(y),
        None => Some(base.year() + f.offset_year.unwrap_or(0)),
    }
}

/// The occurrence of lunar month/day that falls inside Gregorian `year`.
/// Festivals in the 12th lunar month belong to the previous lunar year.
fn lunar_in_gregorian_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    for lunar_year in [year, year - 1] {
        if let Some(date) = lunar::lunar_to_solar(lunar_year, month, day) {
            if date.year() == year {
                return Some(date);
            }
        }
    }
    None
}

/// Dates for `festival` in a Gregorian `year`. Multi-day spans return both
/// endpoints; single days return the same date twice.
fn festival_bounds(festival: Festival, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    match festival.rule() {
        FestivalRule::Fixed { month, day } => {
            let d = NaiveDate::from_ymd_opt(year, month, day)?;
            Some((d, d))
        }
        FestivalRule::Span { start, end } => Some((
            NaiveDate::from_ymd_opt(year, start.0, start.1)?,
            NaiveDate::from_ymd_opt(year, end.0, end.1)?,
        )),
        FestivalRule::MonthEndSpan { start, end_month } => Some((
            NaiveDate::from_ymd_opt(year, start.0, start.1)?,
            month_bounds(year, end_month)?.1,
        )),
        FestivalRule::NthWeekday { month, weekday, nth } => {
            let d = nth_weekday_of_month(year, month, weekday, nth)?
                .checked_add_signed(Duration::days(festival.rule_day_offset()))?;
            Some((d, d))
        }
        FestivalRule::LastWeekday { month, weekday } => {
            let d = last_weekday_of_month(year, month, weekday)?;
            Some((d, d))
        }
        FestivalRule::EasterOffset(offset) => {
            let d = easter_sunday(year)?.checked_add_signed(Duration::days(offset))?;
            Some((d, d))
        }
        FestivalRule::Lunar { month, day } => {
            let d = lunar_in_gregorian_year(year, month, day)?;
            Some((d, d))
        }
        FestivalRule::LunarEve => {
            for lunar_year in [year, year - 1] {
                if let Some(d) = lunar::lunar_new_year_eve(lunar_year) {
                    if d.year() == year {
                        return Some((d, d));
                    }
                }
            }
            None
        }
        FestivalRule::Term(term) => {
            let d = term.date(year)?;
            Some((d, d))
        }
    }
}

pub(crate) fn resolve(f: &HolidayFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    let year = target_year(f, base)?;

    if let Some(term) = f.solar_term {
        let d = term.date(year)?.checked_add_signed(Duration::days(f.day_offset as i64))?;
        return Some(vec![day_range(d)]);
    }

    let festival = f.festival?;
    let mut bounds = festival_bounds(festival, year)?;

    // "next <holiday>": if this year's occurrence is today or already past,
    // take next year's.
    if f.next && bounds.0 <= base.date() {
        bounds = festival_bounds(festival, year + 1)?;
    }

    let (start, end) = bounds;
    if f.day_offset != 0 {
        // Day qualifiers anchor on the first day of the span.
        let shifted = start.checked_add_signed(Duration::days(f.day_offset as i64))?;
        return Some(vec![day_range(shifted)]);
    }
    Some(vec![TimeValue::Interval { start: day_start(start), end: day_end(end) }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn holiday(festival: Festival) -> HolidayFields {
        HolidayFields { festival: Some(festival), ..Default::default() }
    }

    #[test]
    fn fixed_date_holiday() {
        let v = resolve(&holiday(Festival::Christmas), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    }

    #[test]
    fn thanksgiving_2025() {
        let v = resolve(&holiday(Festival::Thanksgiving), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 11, 27).unwrap());
        let v = resolve(&holiday(Festival::BlackFriday), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 11, 28).unwrap());
    }

    #[test]
    fn national_day_is_a_week_long_span() {
        let v = resolve(&holiday(Festival::NationalDay), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 10, 7).unwrap());
    }

    #[test]
    fn lunar_festivals_anchor_on_the_gregorian_year() {
        // 春节 within Gregorian 2025 is 2025-01-29.
        let v = resolve(&holiday(Festival::SpringFestival), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
        // 除夕 within Gregorian 2025 belongs to lunar year 2024.
        let v = resolve(&holiday(Festival::LunarNewYearEve), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 28).unwrap());
        // 腊八 within Gregorian 2025 also falls early in January.
        let v = resolve(&holiday(Festival::Laba), base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
    }

    #[test]
    fn mid_autumn_2025() {
        let mid = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let v = resolve(&holiday(Festival::MidAutumn), mid).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
    }

    #[test]
    fn next_advances_past_occurrences() {
        // "next new year's day" asked in January after the 1st.
        let f = HolidayFields { next: true, ..holiday(Festival::NewYearsDay) };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn day_offset_shifts_by_one() {
        let f = HolidayFields { day_offset: -1, ..holiday(Festival::NationalDay) };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(v[0].end().date(), NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
    }
}

//! Bounded lunisolar calendar tables.
//!
//! Month-by-month data covers lunar years 2024–2026 (which includes the 2025
//! leap sixth month); lunar new year dates cover 2015–2030. Dates outside the
//! tables resolve to `None` and the requesting tag is dropped, per the
//! out-of-range policy.

use chrono::{Days, NaiveDate};

/// One lunisolar year: the Gregorian date of its first day, the leap month
/// number (0 = none), and the day count of each month in order. When a leap
/// month exists it is listed directly after its ordinary month.
struct LunarYear {
    year: i32,
    new_year: (i32, u32, u32),
    leap_month: u32,
    month_days: &'static [u8],
}

static LUNAR_YEARS: &[LunarYear] = &[
    LunarYear {
        year: 2024,
        new_year: (2024, 2, 10),
        leap_month: 0,
        month_days: &[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29],
    },
    LunarYear {
        year: 2025,
        new_year: (2025, 1, 29),
        leap_month: 6,
        month_days: &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29],
    },
    LunarYear {
        year: 2026,
        new_year: (2026, 2, 17),
        leap_month: 0,
        month_days: &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29],
    },
];

/// Lunar new year (正月初一) dates, wider than the month tables so that the
/// new-year-anchored festivals (春节, 元宵, 除夕) cover more years.
static NEW_YEAR_DATES: &[(i32, u32, u32)] = &[
    (2015, 2, 19),
    (2016, 2, 8),
    (2017, 1, 28),
    (2018, 2, 16),
    (2019, 2, 5),
    (2020, 1, 25),
    (2021, 2, 12),
    (2022, 2, 1),
    (2023, 1, 22),
    (2024, 2, 10),
    (2025, 1, 29),
    (2026, 2, 17),
    (2027, 2, 6),
    (2028, 1, 26),
    (2029, 2, 13),
    (2030, 2, 3),
];

fn year_entry(year: i32) -> Option<&'static LunarYear> {
    LUNAR_YEARS.iter().find(|y| y.year == year)
}

/// Gregorian date of 正月初一 for the given lunar year.
pub(crate) fn lunar_new_year(year: i32) -> Option<NaiveDate> {
    let (y, m, d) = *NEW_YEAR_DATES.iter().find(|(y, _, _)| *y == year)?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Days from 正月初一 to the first day of `month` (1-based, ordinary months).
fn days_before_month(entry: &LunarYear, month: u32) -> Option<u64> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let mut days = 0u64;
    let mut ordinal = 0u32;
    for (idx, len) in entry.month_days.iter().enumerate() {
        let is_leap_slot = entry.leap_month != 0 && idx as u32 == entry.leap_month;
        if !is_leap_slot {
            ordinal += 1;
        }
        if ordinal == month && !is_leap_slot {
            return Some(days);
        }
        days += *len as u64;
    }
    None
}

fn month_len(entry: &LunarYear, month: u32) -> Option<u32> {
    let mut ordinal = 0u32;
    for (idx, len) in entry.month_days.iter().enumerate() {
        let is_leap_slot = entry.leap_month != 0 && idx as u32 == entry.leap_month;
        if !is_leap_slot {
            ordinal += 1;
            if ordinal == month {
                return Some(*len as u32);
            }
        }
    }
    None
}

/// Convert a lunar date (ordinary month) to its Gregorian date.
pub(crate) fn lunar_to_solar(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let entry = year_entry(year)?;
    if day == 0 || day > month_len(entry, month)? {
        return None;
    }
    let (y, m, d) = entry.new_year;
    let new_year = NaiveDate::from_ymd_opt(y, m, d)?;
    let offset = days_before_month(entry, month)? + (day as u64 - 1);
    new_year.checked_add_days(Days::new(offset))
}

/// Gregorian range `[first day, last day]` of a lunar month.
pub(crate) fn lunar_month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let entry = year_entry(year)?;
    let start = lunar_to_solar(year, month, 1)?;
    let end = start.checked_add_days(Days::new(month_len(entry, month)? as u64 - 1))?;
    Some((start, end))
}

/// 除夕: the last day of the lunar year, i.e. the day before the next lunar
/// new year.
pub(crate) fn lunar_new_year_eve(year: i32) -> Option<NaiveDate> {
    lunar_new_year(year + 1)?.checked_sub_days(Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_year_anchors() {
        assert_eq!(lunar_new_year(2025), Some(d(2025, 1, 29)));
        assert_eq!(lunar_new_year(2024), Some(d(2024, 2, 10)));
        assert_eq!(lunar_new_year_eve(2024), Some(d(2025, 1, 28)));
        assert_eq!(lunar_new_year_eve(2025), Some(d(2026, 2, 16)));
    }

    #[test]
    fn festival_dates_2025() {
        // 元宵 1-15, 端午 5-5, 七夕 7-7, 中秋 8-15, 重阳 9-9.
        assert_eq!(lunar_to_solar(2025, 1, 15), Some(d(2025, 2, 12)));
        assert_eq!(lunar_to_solar(2025, 5, 5), Some(d(2025, 5, 31)));
        assert_eq!(lunar_to_solar(2025, 7, 7), Some(d(2025, 8, 29)));
        assert_eq!(lunar_to_solar(2025, 8, 15), Some(d(2025, 10, 6)));
        assert_eq!(lunar_to_solar(2025, 9, 9), Some(d(2025, 10, 29)));
    }

    #[test]
    fn festival_dates_2024() {
        assert_eq!(lunar_to_solar(2024, 5, 5), Some(d(2024, 6, 10)));
        assert_eq!(lunar_to_solar(2024, 8, 15), Some(d(2024, 9, 17)));
    }

    #[test]
    fn leap_month_is_skipped_by_ordinary_numbering() {
        // 2025 has a leap 6th month; the ordinary 7th month starts after it.
        let (start, _) = lunar_month_range(2025, 7).unwrap();
        assert_eq!(start, d(2025, 8, 23));
    }

    #[test]
    fn out_of_table_years_are_none() {
        assert_eq!(lunar_to_solar(1980, 1, 1), None);
        assert_eq!(lunar_new_year(1900), None);
    }
}

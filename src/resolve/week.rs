//! Weekday resolution: offsets, weekends, nth/last occurrence in a month.

use super::helpers::{day_end, day_range, day_start};
use super::{TimeValue, clock, period};
use crate::calendar::{last_weekday_of_month, nth_weekday_of_month};
use crate::tag::WeekFields;
use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, Weekday};

fn chrono_weekday(n: u32) -> Option<Weekday> {
    Some(match n {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    })
}

/// The concrete day a weekday reference points at.
pub(crate) fn anchor_day(f: &WeekFields, base: NaiveDateTime) -> Option<NaiveDate> {
    // Month-anchored: "first tuesday of october", "十月的最后一个周二".
    if f.nth.is_some() || f.last {
        let weekday = chrono_weekday(f.weekday?)?;
        let month = f.month.unwrap_or(base.month());
        return if f.last {
            last_weekday_of_month(base.year(), month, weekday)
        } else {
            nth_weekday_of_month(base.year(), month, weekday, f.nth?)
        };
    }

    let current = base.weekday().number_from_monday() as i64;
    let target = f.weekday.map(|w| w as i64).unwrap_or(1);
    let diff = target - current + f.offset_week as i64 * 7;
    base.date().checked_add_signed(Duration::days(diff))
}

pub(crate) fn resolve(f: &WeekFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    if f.weekend {
        // Monday of the target week, then Saturday through Sunday.
        let current = base.weekday().number_from_monday() as i64;
        let monday = base.date().checked_add_signed(Duration::days(1 - current + f.offset_week as i64 * 7))?;
        let saturday = monday + Days::new(5);
        let sunday = monday + Days::new(6);
        if let Some(kind) = f.period {
            // "周末下午": one span per weekend day.
            let mut out = Vec::new();
            out.push(period::span_on_day(saturday, kind)?);
            out.push(period::span_on_day(sunday, kind)?);
            return Some(out);
        }
        return Some(vec![TimeValue::Interval { start: day_start(saturday), end: day_end(sunday) }]);
    }

    let day = anchor_day(f, base)?;
    if let Some(kind) = f.period {
        return period::resolve_on_day(day, kind, f.clock);
    }
    if let Some(c) = f.clock {
        return Some(vec![TimeValue::Instant(clock::on_day(day, &c, None)?)]);
    }
    Some(vec![day_range(day)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> NaiveDateTime {
        // A Tuesday.
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn this_thursday() {
        let f = WeekFields { weekday: Some(4), ..Default::default() };
        assert_eq!(anchor_day(&f, base()), NaiveDate::from_ymd_opt(2025, 1, 23));
    }

    #[test]
    fn next_monday() {
        let f = WeekFields { weekday: Some(1), offset_week: 1, ..Default::default() };
        assert_eq!(anchor_day(&f, base()), NaiveDate::from_ymd_opt(2025, 1, 27));
    }

    #[test]
    fn monday_three_weeks_out() {
        let f = WeekFields { weekday: Some(1), offset_week: 3, ..Default::default() };
        assert_eq!(anchor_day(&f, base()), NaiveDate::from_ymd_opt(2025, 2, 10));
    }

    #[test]
    fn weekend_spans_saturday_to_sunday() {
        let f = WeekFields { weekend: true, ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Interval {
                start: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap().and_hms_opt(0, 0, 0).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 1, 26).unwrap().and_hms_opt(23, 59, 59).unwrap(),
            }]
        );
    }

    #[test]
    fn first_tuesday_of_october() {
        let f = WeekFields { weekday: Some(2), nth: Some(1), month: Some(10), ..Default::default() };
        assert_eq!(anchor_day(&f, base()), NaiveDate::from_ymd_opt(2025, 10, 7));
    }

    #[test]
    fn last_friday_of_month_defaults_to_base_month() {
        let f = WeekFields { weekday: Some(5), last: true, ..Default::default() };
        assert_eq!(anchor_day(&f, base()), NaiveDate::from_ymd_opt(2025, 1, 31));
    }
}

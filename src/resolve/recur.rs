//! Recurring-expression resolution: emit the next representative
//! occurrence at or after the base instant.

use super::helpers::{day_range, month_bounds, week_bounds, year_bounds};
use super::{TimeValue, clock};
use crate::tag::{RecurFields, RecurUnit};
use chrono::{Datelike, Days, Duration, NaiveDateTime};

pub(crate) fn resolve(f: &RecurFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    // A weekday pins the occurrence to the next such day (today included).
    let day = match f.weekday {
        Some(weekday) => {
            let diff =
                (weekday as i64 - base.weekday().number_from_monday() as i64).rem_euclid(7);
            base.date().checked_add_signed(Duration::days(diff))?
        }
        None => base.date(),
    };

    if let Some(c) = f.clock {
        let mut occurrence = clock::on_day(day, &c, None)?;
        if occurrence < base {
            let step = match (f.unit, f.weekday) {
                (RecurUnit::Day, _) => 1,
                (_, Some(_)) => 7,
                (RecurUnit::Week, None) => 7,
                _ => 1,
            };
            occurrence = occurrence.checked_add_days(Days::new(step))?;
        }
        return Some(vec![TimeValue::Instant(occurrence)]);
    }

    let value = match (f.unit, f.weekday) {
        (_, Some(_)) => day_range(day),
        (RecurUnit::Day, None) => day_range(base.date()),
        (RecurUnit::Week, None) => {
            let (start, end) = week_bounds(base.date());
            span(start, end)
        }
        (RecurUnit::Month, None) => {
            let (start, end) = month_bounds(base.year(), base.month())?;
            span(start, end)
        }
        (RecurUnit::Year, None) => {
            let (start, end) = year_bounds(base.year())?;
            span(start, end)
        }
    };
    Some(vec![value])
}

fn span(start: chrono::NaiveDate, end: chrono::NaiveDate) -> TimeValue {
    TimeValue::Interval {
        start: super::helpers::day_start(start),
        end: super::helpers::day_end(end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn every_day_at_eight_is_today_while_still_ahead() {
        let f = RecurFields {
            unit: RecurUnit::Day,
            weekday: None,
            clock: Some(crate::tag::ClockFields { hour: 9, ..Default::default() }),
        };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Instant(
                NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(9, 0, 0).unwrap()
            )]
        );
    }

    #[test]
    fn every_day_at_a_past_hour_moves_to_tomorrow() {
        let f = RecurFields {
            unit: RecurUnit::Day,
            weekday: None,
            clock: Some(crate::tag::ClockFields { hour: 7, ..Default::default() }),
        };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 22).unwrap());
    }

    #[test]
    fn every_monday_is_the_coming_monday() {
        let f = RecurFields { unit: RecurUnit::Week, weekday: Some(1), clock: None };
        let v = resolve(&f, base()).unwrap();
        // Base is Tuesday, so the next Monday is the 27th.
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
    }
}

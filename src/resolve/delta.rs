//! Delta resolution: the base instant plus or minus amount × unit.

use super::TimeValue;
use super::helpers::{day_range, shift};
use crate::tag::DeltaFields;
use chrono::NaiveDateTime;

fn landing(f: &DeltaFields, base: NaiveDateTime) -> Option<NaiveDateTime> {
    let dir = f.direction as i64;
    shift(
        base,
        f.years.unwrap_or(0) * dir,
        f.months.unwrap_or(0) * dir,
        f.weeks.unwrap_or(0) * dir,
        f.days.unwrap_or(0) * dir,
        f.hours.unwrap_or(0) * dir,
        f.minutes.unwrap_or(0) * dir,
        f.seconds.unwrap_or(0) * dir,
    )
}

pub(crate) fn resolve(f: &DeltaFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    let t = landing(f, base)?;

    // "近一年" / "recently": the bracket from the landing point back up to
    // the base instant.
    if f.recent {
        return Some(vec![TimeValue::Interval { start: t.min(base), end: t.max(base) }]);
    }

    // Day-or-coarser deltas land on a whole day; finer ones are instants.
    if f.day_granular() {
        Some(vec![day_range(t.date())])
    } else {
        Some(vec![TimeValue::Instant(t)])
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
    fn three_days_later_is_a_day_range() {
        let f = DeltaFields { days: Some(3), direction: 1, ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 1, 24).unwrap());
    }

    #[test]
    fn two_hours_ago_is_an_instant() {
        let f = DeltaFields { hours: Some(2), direction: -1, ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Instant(
                NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(6, 0, 0).unwrap()
            )]
        );
    }

    #[test]
    fn recent_year_is_a_past_bracket() {
        let f = DeltaFields { years: Some(1), direction: -1, recent: true, ..Default::default() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Interval {
                start: NaiveDate::from_ymd_opt(2024, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap(),
                end: base(),
            }]
        );
    }

    #[test]
    fn month_delta_respects_calendar_lengths() {
        // One month before March 31 lands on the end of February.
        let end_of_march =
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let f = DeltaFields { months: Some(1), direction: -1, ..Default::default() };
        let v = resolve(&f, end_of_march).unwrap();
        assert_eq!(v[0].start().date(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}

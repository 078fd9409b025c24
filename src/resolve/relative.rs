//! Relative-reference resolution: signed unit offsets against the base.

use super::helpers::{
    day_range, month_bounds, quarter_bounds, set_date_fields, shift, week_bounds, year_bounds,
    year_nth_week_bounds,
};
use super::{TimeValue, clock, period};
use crate::tag::RelFields;
use chrono::{Datelike, NaiveDateTime};

/// Anchor instant after applying every offset and explicit field.
pub(crate) fn anchor(f: &RelFields, base: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut t = shift(
        base,
        f.offset_year.unwrap_or(0) as i64,
        f.offset_month.unwrap_or(0) as i64 + f.offset_quarter.unwrap_or(0) as i64 * 3,
        f.offset_week.unwrap_or(0) as i64,
        f.offset_day.unwrap_or(0) as i64,
        0,
        0,
        0,
    )?;
    if f.month.is_some() || f.day.is_some() {
        t = set_date_fields(t, None, f.month, f.day)?;
    }
    Some(t)
}

pub(crate) fn resolve(f: &RelFields, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    let t = anchor(f, base)?;

    if let Some(kind) = f.period {
        return period::resolve_on_day(t.date(), kind, f.clock);
    }
    if let Some(c) = f.clock {
        return Some(vec![TimeValue::Instant(clock::on_day(t.date(), &c, None)?)]);
    }

    // Ordinal-within-year forms.
    if f.week_order.is_some() || f.month_order.is_some() {
        if let Some(n) = f.week_order {
            let (start, end) = year_nth_week_bounds(t.year(), n)?;
            return Some(vec![TimeValue::Interval {
                start: super::helpers::day_start(start),
                end: super::helpers::day_end(end),
            }]);
        }
        let n = f.month_order?;
        let (start, end) = month_bounds(t.year(), n)?;
        return Some(vec![TimeValue::Interval {
            start: super::helpers::day_start(start),
            end: super::helpers::day_end(end),
        }]);
    }

    // Shape the result by the coarsest thing the expression pinned down.
    let only_year = f.offset_year.is_some()
        && f.offset_month.is_none()
        && f.offset_week.is_none()
        && f.offset_day.is_none()
        && f.offset_quarter.is_none();

    let value = if only_year && f.month.is_none() && f.day.is_none() {
        let (start, end) = year_bounds(t.year())?;
        interval(start, end)
    } else if (only_year || f.offset_month.is_some()) && f.month.is_some() && f.day.is_none() {
        let (start, end) = month_bounds(t.year(), t.month())?;
        interval(start, end)
    } else if f.offset_month.is_some() && f.month.is_none() && f.day.is_none() {
        let (start, end) = month_bounds(t.year(), t.month())?;
        interval(start, end)
    } else if f.offset_week.is_some() && f.offset_day.is_none() && f.day.is_none() {
        let (start, end) = week_bounds(t.date());
        interval(start, end)
    } else if f.offset_quarter.is_some() && f.offset_month.is_none() && f.day.is_none() {
        let (start, end) = quarter_bounds(t.date())?;
        interval(start, end)
    } else {
        day_range(t.date())
    };
    Some(vec![value])
}

fn interval(start: chrono::NaiveDate, end: chrono::NaiveDate) -> TimeValue {
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

    fn rel() -> RelFields {
        RelFields::default()
    }

    #[test]
    fn tomorrow_is_a_day_range() {
        let f = RelFields { offset_day: Some(1), ..rel() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Interval {
                start: NaiveDate::from_ymd_opt(2025, 1, 22).unwrap().and_hms_opt(0, 0, 0).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 1, 22).unwrap().and_hms_opt(23, 59, 59).unwrap(),
            }]
        );
    }

    #[test]
    fn next_year_is_a_year_range() {
        let f = RelFields { offset_year: Some(1), ..rel() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v[0].start(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            v[0].end(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn last_year_with_month_is_a_month_range() {
        let f = RelFields { offset_year: Some(-1), month: Some(9), ..rel() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v[0].start(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            v[0].end(),
            NaiveDate::from_ymd_opt(2024, 9, 30).unwrap().and_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn next_next_next_week_snaps_to_week() {
        let f = RelFields { offset_week: Some(3), ..rel() };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v[0].start(),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn tomorrow_forenoon_nine_is_an_instant() {
        let f = RelFields {
            offset_day: Some(1),
            period: Some(crate::tag::PeriodKind::Forenoon),
            clock: Some(crate::tag::ClockFields { hour: 9, ..Default::default() }),
            ..rel()
        };
        let v = resolve(&f, base()).unwrap();
        assert_eq!(
            v,
            vec![TimeValue::Instant(
                NaiveDate::from_ymd_opt(2025, 1, 22).unwrap().and_hms_opt(9, 0, 0).unwrap()
            )]
        );
    }
}

//! Century and decade resolution.

use super::TimeValue;
use super::helpers::{day_end, day_start};
use crate::tag::{CenturyFields, DecadeFields, SpanQualifier};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Narrow `[start_year, end_year]` to a third per the qualifier.
fn qualify(start: i32, end: i32, q: Option<SpanQualifier>) -> (i32, i32) {
    let Some(q) = q else {
        return (start, end);
    };
    let third = (end - start + 1) / 3;
    match q {
        SpanQualifier::Early => (start, start + third - 1),
        SpanQualifier::Mid => (start + third, start + 2 * third - 1),
        SpanQualifier::Late => (start + 2 * third, end),
        SpanQualifier::All => (start, end),
    }
}

fn year_interval(start: i32, end: i32) -> Option<TimeValue> {
    Some(TimeValue::Interval {
        start: day_start(NaiveDate::from_ymd_opt(start, 1, 1)?),
        end: day_end(NaiveDate::from_ymd_opt(end, 12, 31)?),
    })
}

pub(crate) fn resolve_century(f: &CenturyFields, base: NaiveDateTime) -> Option<TimeValue> {
    let start = match (f.century, f.offset) {
        // The ordinal 20th century is 1900–1999.
        (Some(c), _) => (c as i32 - 1) * 100,
        (None, Some(offset)) => (base.year() / 100 + offset) * 100,
        (None, None) => return None,
    };
    let (start, end) = qualify(start, start + 99, f.qualifier);
    year_interval(start, end)
}

pub(crate) fn resolve_decade(f: &DecadeFields, base: NaiveDateTime) -> Option<TimeValue> {
    let century_start = match (f.century, f.century_offset) {
        (Some(c), _) => (c as i32 - 1) * 100,
        (None, Some(offset)) => (base.year() / 100 + offset) * 100,
        (None, None) => {
            // Bare "the 80s": the current century unless that decade is
            // still ahead of us, in which case the previous one.
            let current = base.year() / 100 * 100;
            let current_decade = (base.year() % 100 / 10 * 10) as u32;
            if f.decade > current_decade { current - 100 } else { current }
        }
    };
    let start = century_start + f.decade as i32;
    let (start, end) = qualify(start, start + 9, f.qualifier);
    year_interval(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn bare_eighties_land_in_the_previous_century() {
        let f = DecadeFields { decade: 80, ..Default::default() };
        let v = resolve_decade(&f, base()).unwrap();
        assert_eq!(v.start().date(), NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
        assert_eq!(v.end().date(), NaiveDate::from_ymd_opt(1989, 12, 31).unwrap());
    }

    #[test]
    fn bare_twenties_stay_in_this_century() {
        let f = DecadeFields { decade: 20, ..Default::default() };
        let v = resolve_decade(&f, base()).unwrap();
        assert_eq!(v.start().date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn twentieth_century_sixties_early() {
        // "20世纪60年代前期" = 1960–1962.
        let f = DecadeFields {
            decade: 60,
            century: Some(20),
            qualifier: Some(SpanQualifier::Early),
            ..Default::default()
        };
        let v = resolve_decade(&f, base()).unwrap();
        assert_eq!(v.start().date(), NaiveDate::from_ymd_opt(1960, 1, 1).unwrap());
        assert_eq!(v.end().date(), NaiveDate::from_ymd_opt(1962, 12, 31).unwrap());
    }

    #[test]
    fn last_century() {
        let f = CenturyFields { offset: Some(-1), ..Default::default() };
        let v = resolve_century(&f, base()).unwrap();
        assert_eq!(v.start().date(), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
        assert_eq!(v.end().date(), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    }
}

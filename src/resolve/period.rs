//! Part-of-day bounds and the period + clock combination.

use super::helpers::at;
use super::{TimeValue, clock};
use crate::tag::{ClockFields, PeriodKind};
use chrono::{Days, NaiveDate};

/// Default bounds per period kind:
/// `(start day-offset, h, m, s, end day-offset, h, m, s)`.
/// A zero-length entry resolves to a single instant.
fn bounds(kind: PeriodKind) -> (i64, u32, u32, u32, i64, u32, u32, u32) {
    match kind {
        PeriodKind::Daybreak => (0, 1, 0, 0, 0, 5, 0, 0),
        PeriodKind::Dawn => (0, 4, 0, 0, 0, 6, 0, 0),
        PeriodKind::EarlyMorning => (0, 5, 0, 0, 0, 10, 0, 0),
        PeriodKind::Morning => (0, 6, 0, 0, 0, 12, 0, 0),
        PeriodKind::Forenoon => (0, 8, 0, 0, 0, 12, 0, 0),
        PeriodKind::Noon => (0, 12, 0, 0, 0, 12, 0, 0),
        PeriodKind::EarlyAfternoon => (0, 13, 0, 0, 0, 15, 0, 0),
        PeriodKind::Afternoon => (0, 12, 0, 0, 0, 18, 0, 0),
        PeriodKind::Dusk => (0, 17, 0, 0, 0, 19, 0, 0),
        PeriodKind::Evening => (0, 18, 0, 0, 0, 23, 59, 59),
        PeriodKind::Night => (0, 18, 0, 0, 0, 23, 59, 59),
        PeriodKind::LateNight => (0, 22, 0, 0, 1, 2, 0, 0),
        PeriodKind::Midnight => (0, 0, 0, 0, 0, 0, 0, 0),
        PeriodKind::FirstHalfNight => (0, 0, 0, 0, 0, 3, 0, 0),
        PeriodKind::SecondHalfNight => (0, 3, 0, 0, 0, 6, 0, 0),
    }
}

/// The period's interval on `day`; a degenerate entry yields an instant.
pub(crate) fn span_on_day(day: NaiveDate, kind: PeriodKind) -> Option<TimeValue> {
    let (sd, sh, sm, ss, ed, eh, em, es) = bounds(kind);
    let start = at(day.checked_add_days(Days::new(sd as u64))?, sh, sm, ss)?;
    let end = at(day.checked_add_days(Days::new(ed as u64))?, eh, em, es)?;
    Some(if start == end { TimeValue::Instant(start) } else { TimeValue::Interval { start, end } })
}

/// Period on a day, optionally collapsed to an instant by a clock.
///
/// The period disambiguates the clock's meridiem: an afternoon-ish period
/// pushes an hour ≤ 12 forward, and noon pushes hours below 11 forward
/// ("中午1点" = 13:00). Hour 24 rolls into the next day.
pub(crate) fn resolve_on_day(
    day: NaiveDate,
    kind: PeriodKind,
    clock_fields: Option<ClockFields>,
) -> Option<Vec<TimeValue>> {
    let Some(c) = clock_fields else {
        return Some(vec![span_on_day(day, kind)?]);
    };
    Some(vec![TimeValue::Instant(clock::on_day(day, &c, Some(kind))?)])
}

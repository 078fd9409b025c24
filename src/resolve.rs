//! Tag resolution.
//!
//! One resolver per tag family, each a pure function
//! `(payload, base) → Option<Vec<TimeValue>>` with no I/O. The context
//! merger usually drives the finer-grained helpers directly (so it can
//! combine a date anchor with a later clock); [`resolve`] is the standalone
//! dispatch used when a tag stands on its own.
//!
//! Every produced value passes [`TimeValue::validated`]: calendar-valid,
//! years within 0001–9999, interval start ≤ end. Violations drop the tag
//! rather than erroring.

#[path = "resolve/century.rs"]
pub(crate) mod century;
#[path = "resolve/clock.rs"]
pub(crate) mod clock;
#[path = "resolve/delta.rs"]
pub(crate) mod delta;
#[path = "resolve/helpers.rs"]
pub(crate) mod helpers;
#[path = "resolve/holiday.rs"]
pub(crate) mod holiday;
#[path = "resolve/lunar.rs"]
pub(crate) mod lunar;
#[path = "resolve/period.rs"]
pub(crate) mod period;
#[path = "resolve/relative.rs"]
pub(crate) mod relative;
#[path = "resolve/recur.rs"]
pub(crate) mod recur;
#[path = "resolve/utc.rs"]
pub(crate) mod utc;
#[path = "resolve/week.rs"]
pub(crate) mod week;

use crate::metrics::counters;
use crate::tag::TagKind;
use chrono::{Datelike, NaiveDateTime};

/// A resolved absolute value: a single instant or an ordered interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeValue {
    Instant(NaiveDateTime),
    Interval { start: NaiveDateTime, end: NaiveDateTime },
}

impl TimeValue {
    pub fn start(&self) -> NaiveDateTime {
        match self {
            TimeValue::Instant(t) => *t,
            TimeValue::Interval { start, .. } => *start,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        match self {
            TimeValue::Instant(t) => *t,
            TimeValue::Interval { end, .. } => *end,
        }
    }

    /// Enforce the output invariants; `None` drops the tag.
    pub fn validated(self) -> Option<Self> {
        let ok = |t: NaiveDateTime| (1..=9999).contains(&t.year());
        let valid = match self {
            TimeValue::Instant(t) => ok(t),
            TimeValue::Interval { start, end } => ok(start) && ok(end) && start <= end,
        };
        if !valid {
            counters().dropped_out_of_range.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            return None;
        }
        Some(self)
    }
}

/// Resolve a standalone tag against the base instant.
pub(crate) fn resolve(kind: &TagKind, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    let values = match kind {
        TagKind::Utc(f) => utc::resolve(f, base)?,
        TagKind::Clock(c) => vec![TimeValue::Instant(clock::resolve_bare(c, base)?)],
        TagKind::Rel(f) => relative::resolve(f, base)?,
        TagKind::Week(f) => week::resolve(f, base)?,
        TagKind::Period(f) => period::resolve_on_day(base.date(), f.kind, f.clock)?,
        TagKind::Holiday(f) => holiday::resolve(f, base)?,
        TagKind::Lunar(f) => lunar::resolve(f, base)?,
        TagKind::Delta(f) => delta::resolve(f, base)?,
        TagKind::Century(f) => vec![century::resolve_century(f, base)?],
        TagKind::Decade(f) => vec![century::resolve_decade(f, base)?],
        TagKind::Recur(f) => recur::resolve(f, base)?,
        _ => return None,
    };
    let values: Vec<TimeValue> = values.into_iter().filter_map(TimeValue::validated).collect();
    (!values.is_empty()).then_some(values)
}

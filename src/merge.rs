//! Context merging: walk the ordered tag sequence, combine adjacent
//! compatible tags into full expressions, pair range endpoints, and emit
//! the final results plus the query tag.
//!
//! The walk is a small state machine over expressions:
//!
//! ```text
//! Idle ── date-like ──▶ HaveDate ── PERIOD ──▶ narrowed ── CLOCK ──▶ HaveDateTime
//!   │                                                        ▲
//!   ├── CLOCK ──▶ HaveClock (anchored on the base day) ───────┘
//!   └── RANGE_OPEN ──▶ InRange: start … SEP … end ──▶ Interval
//! ```
//!
//! Endpoint field inheritance mirrors the resolver policies: a range end
//! lacking a date inherits the start's day, a bare end clock inherits the
//! start's part-of-day for meridiem disambiguation, and a trailing date
//! ("… on thursday") anchors clock-only endpoints on both sides.

use crate::api::QueryTag;
use crate::resolve::{
    self, TimeValue, clock, delta, holiday, lunar, period, relative, utc, week,
};
use crate::tag::{ClockFields, PeriodKind, Tag, TagKind};
use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Bytes of unmatched text two tags may be separated by and still combine
/// ("的", " at ", " on the ").
const MAX_GAP: usize = 8;

pub(crate) struct MergeOutcome {
    pub results: Vec<TimeValue>,
    pub query_tag: QueryTag,
}

/// One combinable expression: a date anchor plus refinements.
#[derive(Default)]
struct Expr<'a> {
    date: Option<&'a Tag>,
    delta: Option<&'a Tag>,
    /// Century, decade, or recurring tag; never combines.
    standalone: Option<&'a Tag>,
    period: Option<PeriodKind>,
    clock: Option<ClockFields>,
}

/// Inherited context for resolving one range endpoint.
#[derive(Default, Clone, Copy)]
struct EndpointCtx {
    day: Option<NaiveDate>,
    period: Option<PeriodKind>,
}

pub(crate) fn merge(tags: &[Tag], base: NaiveDateTime) -> MergeOutcome {
    let mut results: Vec<TimeValue> = Vec::new();
    let mut query: Option<QueryTag> = None;
    let mut range_used = false;
    let mut recur_seen = false;

    let mut i = 0;
    while i < tags.len() {
        match &tags[i].kind {
            TagKind::RangeOpen => {
                if let Some((values, next)) = try_range(tags, i + 1, base, true) {
                    query.get_or_insert(QueryTag::Range);
                    range_used = true;
                    results.extend(values);
                    i = next;
                    continue;
                }
                i += 1;
            }
            TagKind::RangeSep { .. } | TagKind::RangeClose | TagKind::Ordinal(_) | TagKind::Noise => {
                i += 1;
            }
            _ => {
                let Some((expr, next)) = parse_expr(tags, i) else {
                    i += 1;
                    continue;
                };
                if matches!(expr.standalone.map(|t| &t.kind), Some(TagKind::Recur(_))) {
                    recur_seen = true;
                }

                // "A 到 B" without an opening marker.
                if next < tags.len()
                    && matches!(tags[next].kind, TagKind::RangeSep { .. })
                    && adjacent(&tags[next - 1], &tags[next])
                {
                    if let Some((values, after)) = try_range(tags, i, base, false) {
                        query.get_or_insert(QueryTag::Range);
                        range_used = true;
                        results.extend(values);
                        i = after;
                        continue;
                    }
                }

                if let Some(values) = resolve_expr(&expr, base, EndpointCtx::default()) {
                    query.get_or_insert(expr_query(&expr));
                    results.extend(values);
                }
                i = next;
            }
        }
    }

    dedup(&mut results);

    let query_tag = if results.is_empty() {
        QueryTag::None
    } else if recur_seen {
        QueryTag::Recurring
    } else if range_used {
        QueryTag::Range
    } else {
        query.unwrap_or(QueryTag::None)
    };

    debug!(results = results.len(), ?query_tag, "merge complete");
    MergeOutcome { results, query_tag }
}

fn adjacent(a: &Tag, b: &Tag) -> bool {
    b.pspan.start >= a.pspan.end && b.pspan.start - a.pspan.end <= MAX_GAP
}

/// Consume one maximal expression starting at `i`.
fn parse_expr<'a>(tags: &'a [Tag], i: usize) -> Option<(Expr<'a>, usize)> {
    let first = tags.get(i)?;
    let mut expr = Expr::default();

    match &first.kind {
        kind if kind.is_date_like() => expr.date = Some(first),
        TagKind::Delta(_) => expr.delta = Some(first),
        TagKind::Period(f) => {
            expr.period = Some(f.kind);
            expr.clock = f.clock;
        }
        TagKind::Clock(c) => expr.clock = Some(*c),
        TagKind::Century(_) | TagKind::Decade(_) | TagKind::Recur(_) => {
            expr.standalone = Some(first);
            return Some((expr, i + 1));
        }
        _ => return None,
    }

    let mut j = i + 1;
    while j < tags.len() && adjacent(&tags[j - 1], &tags[j]) {
        match &tags[j].kind {
            TagKind::Period(f)
                if (expr.date.is_some() || expr.delta.is_some())
                    && expr.period.is_none()
                    && expr.clock.is_none() =>
            {
                expr.period = Some(f.kind);
                expr.clock = f.clock;
            }
            TagKind::Clock(c) if expr.clock.is_none() => expr.clock = Some(*c),
            kind if kind.is_date_like()
                && expr.date.is_none()
                && expr.delta.is_none()
                && expr.clock.is_some() =>
            {
                // "5pm tomorrow", "11:00 on thursday".
                expr.date = Some(&tags[j]);
            }
            _ => break,
        }
        j += 1;
    }
    Some((expr, j))
}

/// Attempt to build `start SEP end` beginning at `i`. Returns the interval
/// values and the index after the consumed tags.
///
/// A weak separator only pairs endpoints when the range was explicitly
/// opened ("between A and B") or closed ("A和B之间"); otherwise "A and B"
/// stays two independent expressions.
fn try_range(
    tags: &[Tag],
    i: usize,
    base: NaiveDateTime,
    opened: bool,
) -> Option<(Vec<TimeValue>, usize)> {
    let (start_expr, mut j) = parse_expr(tags, i)?;
    if start_expr.standalone.is_some() {
        return None;
    }
    let Some(TagKind::RangeSep { weak }) = tags.get(j).map(|t| &t.kind) else {
        return None;
    };
    let weak = *weak;
    j += 1;
    let (end_expr, mut next) = parse_expr(tags, j)?;
    if end_expr.standalone.is_some() {
        return None;
    }
    let mut closed = false;
    if matches!(tags.get(next).map(|t| &t.kind), Some(TagKind::RangeClose)) {
        next += 1;
        closed = true;
    }
    if weak && !opened && !closed {
        return None;
    }

    let start_day = expr_anchor_day(&start_expr, base);
    let end_day = expr_anchor_day(&end_expr, base);
    let start_period = expr_period(&start_expr);
    let end_period = expr_period(&end_expr);

    let start_ctx = EndpointCtx {
        day: if start_expr.date.is_none() { end_day } else { None },
        period: end_period.filter(|_| start_period.is_none()),
    };
    let end_ctx = EndpointCtx {
        day: if end_expr.date.is_none() { start_day } else { None },
        period: start_period.filter(|_| end_period.is_none()),
    };

    let start_vals = resolve_expr(&start_expr, base, start_ctx)?;
    let end_vals = resolve_expr(&end_expr, base, end_ctx)?;
    let start = start_vals.first()?.start();
    let mut end = end_vals.last()?.end();

    // Cross-midnight: a clock-only end earlier than the start rolls into
    // the next day.
    if end < start && end_expr.date.is_none() && end_expr.clock.is_some() {
        end = end.checked_add_days(Days::new(1))?;
    }
    if end < start {
        return None;
    }

    let value = TimeValue::Interval { start, end }.validated()?;
    Some((vec![value], next))
}

/// The part of day an expression carries, including one folded into a
/// relative or weekday payload by the grammar ("明天下午2点").
fn expr_period(expr: &Expr<'_>) -> Option<PeriodKind> {
    expr.period.or_else(|| match expr.date.map(|t| &t.kind) {
        Some(TagKind::Rel(f)) => f.period,
        Some(TagKind::Week(f)) => f.period,
        _ => None,
    })
}

/// The concrete day an expression anchors on, if any.
fn expr_anchor_day(expr: &Expr<'_>, base: NaiveDateTime) -> Option<NaiveDate> {
    if let Some(tag) = expr.date {
        return match &tag.kind {
            TagKind::Utc(f) => utc::anchor_day(f, base),
            TagKind::Rel(f) => relative::anchor(f, base).map(|t| t.date()),
            TagKind::Week(f) => week::anchor_day(f, base),
            TagKind::Holiday(f) => holiday::resolve(f, base)?.first().map(|v| v.start().date()),
            TagKind::Lunar(f) => lunar::resolve(f, base)?.first().map(|v| v.start().date()),
            _ => None,
        };
    }
    if let Some(tag) = expr.delta {
        if let TagKind::Delta(f) = &tag.kind {
            return delta::resolve(f, base)?.first().map(|v| v.start().date());
        }
    }
    None
}

fn resolve_expr(
    expr: &Expr<'_>,
    base: NaiveDateTime,
    ctx: EndpointCtx,
) -> Option<Vec<TimeValue>> {
    if let Some(tag) = expr.standalone {
        return resolve::resolve(&tag.kind, base);
    }

    if let Some(tag) = expr.delta {
        let TagKind::Delta(f) = &tag.kind else { return None };
        if expr.period.is_none() && expr.clock.is_none() {
            return validated(delta::resolve(f, base)?);
        }
        let day = delta::resolve(f, base)?.first()?.start().date();
        return combine_on_day(day, expr.period, expr.clock);
    }

    if let Some(tag) = expr.date {
        return validated(resolve_date_tag(tag, expr, base)?);
    }

    if let Some(kind) = expr.period {
        let day = ctx.day.unwrap_or(base.date());
        return validated(period::resolve_on_day(day, kind, expr.clock)?);
    }

    if let Some(c) = expr.clock {
        let instant = if ctx.day.is_some() || ctx.period.is_some() {
            clock::on_day(ctx.day.unwrap_or(base.date()), &c, ctx.period)?
        } else {
            clock::resolve_bare(&c, base)?
        };
        return validated(vec![TimeValue::Instant(instant)]);
    }

    None
}

/// Resolve a date-like tag, folding in any period/clock the surrounding
/// expression contributed.
fn resolve_date_tag(tag: &Tag, expr: &Expr<'_>, base: NaiveDateTime) -> Option<Vec<TimeValue>> {
    match &tag.kind {
        TagKind::Rel(f) => {
            let mut f = *f;
            f.period = f.period.or(expr.period);
            f.clock = f.clock.or(expr.clock);
            relative::resolve(&f, base)
        }
        TagKind::Week(f) => {
            let mut f = *f;
            f.period = f.period.or(expr.period);
            f.clock = f.clock.or(expr.clock);
            week::resolve(&f, base)
        }
        TagKind::Utc(f) => {
            let clock_fields = f.clock.or(expr.clock);
            match utc::anchor_day(f, base) {
                Some(day) if expr.period.is_some() || clock_fields.is_some() => {
                    combine_on_day(day, expr.period, clock_fields)
                }
                _ => utc::resolve(f, base),
            }
        }
        TagKind::Holiday(f) => {
            let values = holiday::resolve(f, base)?;
            refine_single_day(values, expr)
        }
        TagKind::Lunar(f) => {
            let values = lunar::resolve(f, base)?;
            refine_single_day(values, expr)
        }
        _ => None,
    }
}

/// Narrow a single-day value by a trailing period/clock ("元旦上午9点").
fn refine_single_day(values: Vec<TimeValue>, expr: &Expr<'_>) -> Option<Vec<TimeValue>> {
    if expr.period.is_none() && expr.clock.is_none() {
        return Some(values);
    }
    let first = values.first()?;
    if first.start().date() != first.end().date() {
        // Multi-day spans ignore finer refinements.
        return Some(values);
    }
    combine_on_day(first.start().date(), expr.period, expr.clock)
}

fn combine_on_day(
    day: NaiveDate,
    kind: Option<PeriodKind>,
    clock_fields: Option<ClockFields>,
) -> Option<Vec<TimeValue>> {
    match (kind, clock_fields) {
        (Some(kind), c) => period::resolve_on_day(day, kind, c),
        (None, Some(c)) => Some(vec![TimeValue::Instant(clock::on_day(day, &c, None)?)]),
        (None, None) => Some(vec![crate::resolve::helpers::day_range(day)]),
    }
}

fn validated(values: Vec<TimeValue>) -> Option<Vec<TimeValue>> {
    let out: Vec<TimeValue> = values.into_iter().filter_map(TimeValue::validated).collect();
    (!out.is_empty()).then_some(out)
}

fn expr_query(expr: &Expr<'_>) -> QueryTag {
    if let Some(tag) = expr.standalone {
        return match &tag.kind {
            TagKind::Recur(_) => QueryTag::Recurring,
            _ => QueryTag::Range,
        };
    }
    if let Some(tag) = expr.date {
        return match &tag.kind {
            TagKind::Utc(_) => QueryTag::Absolute,
            TagKind::Holiday(_) => QueryTag::Holiday,
            TagKind::Lunar(_) => QueryTag::Lunar,
            _ => QueryTag::Relative,
        };
    }
    if expr.delta.is_some() || expr.period.is_some() {
        return QueryTag::Relative;
    }
    QueryTag::Absolute
}

fn dedup(results: &mut Vec<TimeValue>) {
    let mut seen: Vec<TimeValue> = Vec::new();
    results.retain(|v| {
        if seen.contains(v) {
            false
        } else {
            seen.push(*v);
            true
        }
    });
}

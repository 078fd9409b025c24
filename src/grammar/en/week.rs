//! Weekday references with modifiers, weekends, and nth-weekday-of-month.

use super::{month_name, period_kind, weekday_name};
use crate::grammar::fragment::{Fragment, W_WEEK};
use crate::grammar::numbers::en_ordinal;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "week_day_after_next",
            pattern: regex!(
                r"\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday) after next\b"
            ),
            weight: W_WEEK,
            emit: emit_after_next,
        },
        Fragment {
            name: "week_day",
            pattern: regex!(concat!(
                r"\b(?:(this|next|last|on) )?",
                r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday|tues|thurs|thur)\b",
                r"(?: (early morning|morning|afternoon|evening|night))?",
            )),
            weight: W_WEEK,
            emit: emit_week_day,
        },
        Fragment {
            name: "weekend",
            pattern: regex!(r"\b(?:(this|next|last) )?weekend\b"),
            weight: W_WEEK,
            emit: emit_weekend,
        },
        Fragment {
            name: "week_nth_of_month",
            pattern: regex!(concat!(
                r"\b(first|second|third|fourth|fifth|[1-5](?:st|nd|rd|th)|last) ",
                r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
                r"(?: (?:of|in) (january|february|march|april|may|june|july|august|september|october|november|december))?\b",
            )),
            weight: W_WEEK,
            emit: emit_nth_of_month,
        },
    ]
}

fn modifier_offset(s: &str) -> i32 {
    match s {
        "next" => 1,
        "last" => -1,
        _ => 0,
    }
}

fn emit_after_next(caps: &Captures<'_>) -> Option<WireTag> {
    let weekday = weekday_name(caps.get(1)?.as_str())?;
    Some(WireTag::new("week").field("week_day", weekday).field("offset_week", 2))
}

fn emit_week_day(caps: &Captures<'_>) -> Option<WireTag> {
    let weekday = weekday_name(caps.get(2)?.as_str())?;
    Some(
        WireTag::new("week")
            .field("week_day", weekday)
            .field("offset_week", caps.get(1).map(|m| modifier_offset(m.as_str())).unwrap_or(0))
            .field_opt("period", caps.get(3).and_then(|p| period_kind(p.as_str())).map(|k| k.as_wire())),
    )
}

fn emit_weekend(caps: &Captures<'_>) -> Option<WireTag> {
    Some(
        WireTag::new("week")
            .flag("weekend", true)
            .field("offset_week", caps.get(1).map(|m| modifier_offset(m.as_str())).unwrap_or(0)),
    )
}

fn emit_nth_of_month(caps: &Captures<'_>) -> Option<WireTag> {
    let weekday = weekday_name(caps.get(2)?.as_str())?;
    let tag = WireTag::new("week")
        .field("week_day", weekday)
        .field_opt("month", caps.get(3).and_then(|m| month_name(m.as_str())));
    match caps.get(1)?.as_str() {
        "last" => Some(tag.flag("last", true)),
        nth => {
            let n = en_ordinal(nth)?;
            (1..=5).contains(&n).then(|| tag.field("nth", n))
        }
    }
}

//! Recurring expressions: "every day", "every monday", "weekly".

use super::weekday_name;
use crate::grammar::fragment::{Fragment, W_RECUR};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "recur_every",
            pattern: regex!(concat!(
                r"\bevery (day|week|month|year|",
                r"monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
            )),
            weight: W_RECUR,
            emit: emit_every,
        },
        Fragment {
            name: "recur_adverb",
            pattern: regex!(r"\b(daily|weekly|monthly|yearly|annually)\b"),
            weight: W_RECUR,
            emit: emit_adverb,
        },
    ]
}

fn emit_every(caps: &Captures<'_>) -> Option<WireTag> {
    let word = caps.get(1)?.as_str();
    if let Some(weekday) = weekday_name(word) {
        return Some(WireTag::new("recur").field("unit", "week").field("week_day", weekday));
    }
    Some(WireTag::new("recur").field("unit", word))
}

fn emit_adverb(caps: &Captures<'_>) -> Option<WireTag> {
    let unit = match caps.get(1)?.as_str() {
        "daily" => "day",
        "weekly" => "week",
        "monthly" => "month",
        _ => "year",
    };
    Some(WireTag::new("recur").field("unit", unit))
}

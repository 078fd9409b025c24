//! Relative day and unit references.

use super::period_kind;
use crate::grammar::fragment::{Fragment, W_REL};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "rel_day",
            pattern: regex!(concat!(
                r"\b((?:the )?day after tomorrow|(?:the )?day before yesterday|tomorrow|tmrw|today|yesterday)\b",
                r"(?: (early morning|morning|afternoon|evening|night))?",
            )),
            weight: W_REL,
            emit: emit_rel_day,
        },
        Fragment {
            name: "rel_tonight",
            pattern: regex!(r"\btonight\b"),
            weight: W_REL,
            emit: emit_tonight,
        },
        Fragment {
            name: "rel_last_night",
            pattern: regex!(r"\blast night\b"),
            weight: W_REL,
            emit: emit_last_night,
        },
        Fragment {
            name: "rel_unit",
            pattern: regex!(r"\b(this|next|last) (week|month|year|quarter)\b"),
            weight: W_REL,
            emit: emit_rel_unit,
        },
        Fragment {
            name: "rel_now",
            pattern: regex!(r"\b(right now|now|immediately|at the moment)\b"),
            weight: W_REL,
            emit: emit_now,
        },
    ]
}

fn emit_rel_day(caps: &Captures<'_>) -> Option<WireTag> {
    let word = caps.get(1)?.as_str();
    let offset = if word.ends_with("after tomorrow") {
        2
    } else if word.ends_with("before yesterday") {
        -2
    } else {
        match word {
            "tomorrow" | "tmrw" => 1,
            "today" => 0,
            "yesterday" => -1,
            _ => return None,
        }
    };
    Some(
        WireTag::new("rel")
            .field("offset_day", offset)
            .field_opt("period", caps.get(2).and_then(|p| period_kind(p.as_str())).map(|k| k.as_wire())),
    )
}

fn emit_tonight(_caps: &Captures<'_>) -> Option<WireTag> {
    // "tonight" is today's evening.
    Some(WireTag::new("rel").field("offset_day", 0).field("period", "evening"))
}

fn emit_last_night(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("rel").field("offset_day", -1).field("period", "night"))
}

fn emit_rel_unit(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = match caps.get(1)?.as_str() {
        "this" => 0,
        "next" => 1,
        "last" => -1,
        _ => return None,
    };
    let key = match caps.get(2)?.as_str() {
        "week" => "offset_week",
        "month" => "offset_month",
        "year" => "offset_year",
        "quarter" => "offset_quarter",
        _ => return None,
    };
    Some(WireTag::new("rel").field(key, offset))
}

fn emit_now(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("delta").field("second", 0).field("direction", 1))
}

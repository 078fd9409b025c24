//! Offsets from the base instant: "in 3 days", "2 hours ago",
//! "a couple of weeks later", "half an hour ago", "recently".

use crate::grammar::fragment::{Fragment, W_DELTA, W_RANGE};
use crate::grammar::numbers::en_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "delta_in",
            pattern: regex!(concat!(
                r"\bin ([0-9]{1,3}|a couple of|a few|several|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|twenty|thirty|half an?) ",
                r"(year|month|week|day|hour|minute|second)s?\b",
            )),
            weight: W_DELTA,
            emit: emit_delta_in,
        },
        Fragment {
            name: "delta_ago_later",
            pattern: regex!(concat!(
                r"\b([0-9]{1,3}|a couple of|a few|several|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|twenty|thirty|half an?) ",
                r"(year|month|week|day|hour|minute|second)s? ",
                r"(ago|earlier|before|later|from now|after)\b",
            )),
            weight: W_DELTA,
            emit: emit_delta_ago_later,
        },
        Fragment {
            name: "delta_recent",
            pattern: regex!(r"\b(recently|lately|in the last few days|in recent days)\b"),
            weight: W_RANGE,
            emit: emit_recent,
        },
    ]
}

fn unit_key(unit: &str) -> Option<&'static str> {
    Some(match unit {
        "year" => "year",
        "month" => "month",
        "week" => "week",
        "day" => "day",
        "hour" => "hour",
        "minute" => "minute",
        "second" => "second",
        _ => return None,
    })
}

/// Returns (amount, fuzzy, halved). "half an hour" → amount 1 halved.
fn amount(s: &str) -> Option<(i64, bool, bool)> {
    if s == "half an" || s == "half a" {
        return Some((1, false, true));
    }
    let fuzzy = matches!(s, "a couple of" | "a few" | "several");
    Some((en_number(s)? as i64, fuzzy, false))
}

fn build(tag: WireTag, unit: &str, value: i64, halved: bool) -> Option<WireTag> {
    if halved {
        // Half of the unit, expressed one grain finer.
        return match unit {
            "hour" => Some(tag.field("minute", 30)),
            "day" => Some(tag.field("hour", 12)),
            "week" => Some(tag.field("day", 3)),
            "month" => Some(tag.field("day", 15)),
            "year" => Some(tag.field("month", 6)),
            _ => None,
        };
    }
    Some(tag.field(unit_key(unit)?, value))
}

fn emit_delta_in(caps: &Captures<'_>) -> Option<WireTag> {
    let (value, fuzzy, halved) = amount(caps.get(1)?.as_str())?;
    let tag = WireTag::new("delta").field("direction", 1).flag("fuzzy", fuzzy);
    build(tag, caps.get(2)?.as_str(), value, halved)
}

fn emit_delta_ago_later(caps: &Captures<'_>) -> Option<WireTag> {
    let (value, fuzzy, halved) = amount(caps.get(1)?.as_str())?;
    let direction = match caps.get(3)?.as_str() {
        "ago" | "earlier" | "before" => -1,
        _ => 1,
    };
    let tag = WireTag::new("delta").field("direction", direction).flag("fuzzy", fuzzy);
    build(tag, caps.get(2)?.as_str(), value, halved)
}

fn emit_recent(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(
        WireTag::new("delta")
            .field("month", 3)
            .field("direction", -1)
            .flag("fuzzy", true)
            .flag("recent", true),
    )
}

//! Century and decade expressions: "the 80s", "early nineties",
//! "19th century", "last century".

use crate::grammar::fragment::{Fragment, W_CENTURY};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "decade_digits",
            pattern: regex!(r"\b(?:the )?(?:(early|mid|late)[ -])?'?([0-9]{4}|[0-9]{2})s\b"),
            weight: W_CENTURY,
            emit: emit_decade_digits,
        },
        Fragment {
            name: "decade_words",
            pattern: regex!(concat!(
                r"\b(?:the )?(?:(early|mid|late)[ -])?",
                r"(twenties|thirties|forties|fifties|sixties|seventies|eighties|nineties)\b",
            )),
            weight: W_CENTURY,
            emit: emit_decade_words,
        },
        Fragment {
            name: "century_ordinal",
            pattern: regex!(concat!(
                r"\b(?:the )?(?:(early|mid|late) )?([0-9]{1,2})(?:st|nd|rd|th) century\b",
            )),
            weight: W_CENTURY,
            emit: emit_century_ordinal,
        },
        Fragment {
            name: "century_relative",
            pattern: regex!(r"\b(?:(early|mid|late) )?(last|this) century\b"),
            weight: W_CENTURY,
            emit: emit_century_relative,
        },
    ]
}

fn emit_decade_digits(caps: &Captures<'_>) -> Option<WireTag> {
    let raw = caps.get(2)?.as_str();
    let value: u32 = raw.parse().ok()?;
    if value % 10 != 0 {
        return None;
    }
    let mut tag = WireTag::new("decade").field_opt("qualifier", caps.get(1).map(|q| q.as_str()));
    if raw.len() == 4 {
        // "the 1980s": the century is explicit.
        tag = tag.field("decade", value % 100).field("century", value / 100 + 1);
    } else {
        tag = tag.field("decade", value);
    }
    Some(tag)
}

fn emit_decade_words(caps: &Captures<'_>) -> Option<WireTag> {
    let decade = match caps.get(2)?.as_str() {
        "twenties" => 20,
        "thirties" => 30,
        "forties" => 40,
        "fifties" => 50,
        "sixties" => 60,
        "seventies" => 70,
        "eighties" => 80,
        "nineties" => 90,
        _ => return None,
    };
    Some(
        WireTag::new("decade")
            .field("decade", decade)
            .field_opt("qualifier", caps.get(1).map(|q| q.as_str())),
    )
}

fn emit_century_ordinal(caps: &Captures<'_>) -> Option<WireTag> {
    let century: u32 = caps.get(2)?.as_str().parse().ok()?;
    if !(1..=99).contains(&century) {
        return None;
    }
    Some(
        WireTag::new("century")
            .field("century", century)
            .field_opt("qualifier", caps.get(1).map(|q| q.as_str())),
    )
}

fn emit_century_relative(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = match caps.get(2)?.as_str() {
        "last" => -1,
        _ => 0,
    };
    Some(
        WireTag::new("century")
            .field("offset", offset)
            .field_opt("qualifier", caps.get(1).map(|q| q.as_str())),
    )
}

//! Absolute dates and clock times.

use super::month_name;
use crate::grammar::fragment::{Fragment, W_CLOCK, W_UTC};
use crate::grammar::numbers::en_ordinal;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "utc_iso",
            pattern: regex!(
                r"\b([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})(?:[ t]([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?)?\b"
            ),
            weight: W_UTC,
            emit: emit_iso,
        },
        Fragment {
            name: "utc_slash",
            pattern: regex!(r"\b([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\b"),
            weight: W_UTC,
            emit: emit_slash,
        },
        Fragment {
            name: "utc_month_day",
            pattern: regex!(concat!(
                r"\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)",
                r"\.? (?:the )?([0-9]{1,2})(?:st|nd|rd|th)?(?:,? ([0-9]{4}))?\b",
            )),
            weight: W_UTC,
            emit: emit_month_day,
        },
        Fragment {
            name: "utc_day_of_month",
            pattern: regex!(concat!(
                r"\b(?:the )?([0-9]{1,2})(?:st|nd|rd|th)?(?: day)? of ",
                r"(january|february|march|april|may|june|july|august|september|october|november|december)",
                r"(?:,? ([0-9]{4}))?\b",
            )),
            weight: W_UTC,
            emit: emit_day_of_month,
        },
        Fragment {
            name: "utc_month_year",
            pattern: regex!(concat!(
                r"\b(january|february|march|april|may|june|july|august|september|october|november|december)",
                r" ([0-9]{4})\b",
            )),
            weight: W_UTC,
            emit: emit_month_year,
        },
        Fragment {
            // "may" alone is far more often the modal verb, so it is absent
            // from the standalone month list.
            name: "utc_month_alone",
            pattern: regex!(
                r"\b(january|february|march|april|june|july|august|september|october|november|december)\b"
            ),
            weight: W_UTC,
            emit: emit_month_alone,
        },
        Fragment {
            name: "clock_colon",
            pattern: regex!(r"\b([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?(?: ?(am|pm|a\.m\.|p\.m\.))?"),
            weight: W_CLOCK,
            emit: emit_clock_colon,
        },
        Fragment {
            name: "clock_hour_meridiem",
            pattern: regex!(r"\b([0-9]{1,2}) ?(am|pm|a\.m\.|p\.m\.)"),
            weight: W_CLOCK,
            emit: emit_clock_meridiem,
        },
        Fragment {
            name: "clock_oclock",
            pattern: regex!(r"\b([0-9]{1,2}) ?o'?clock\b"),
            weight: W_CLOCK,
            emit: emit_clock_oclock,
        },
        Fragment {
            name: "clock_half_quarter",
            pattern: regex!(r"\b(half|quarter) (past|to) ([0-9]{1,2})\b"),
            weight: W_CLOCK,
            emit: emit_clock_half_quarter,
        },
    ]
}

fn valid_md(month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn emit_iso(caps: &Captures<'_>) -> Option<WireTag> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    if !valid_md(month, day) {
        return None;
    }
    let mut tag = WireTag::new("utc").field("year", year).field("month", month).field("day", day);
    if let Some(h) = caps.get(4) {
        let hour: u32 = h.as_str().parse().ok()?;
        if hour > 24 {
            return None;
        }
        tag = tag
            .field("hour", hour)
            .field("minute", caps.get(5)?.as_str().parse::<u32>().ok()?)
            .field_opt("second", caps.get(6).and_then(|s| s.as_str().parse::<u32>().ok()));
    }
    Some(tag)
}

fn emit_slash(caps: &Captures<'_>) -> Option<WireTag> {
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    valid_md(month, day).then(|| {
        WireTag::new("utc").field("year", year).field("month", month).field("day", day)
    })
}

fn emit_month_day(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_name(caps.get(1)?.as_str())?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    if !valid_md(month, day) {
        return None;
    }
    Some(
        WireTag::new("utc")
            .field_opt("year", caps.get(3).and_then(|y| y.as_str().parse::<i32>().ok()))
            .field("month", month)
            .field("day", day),
    )
}

fn emit_day_of_month(caps: &Captures<'_>) -> Option<WireTag> {
    let day = en_ordinal(caps.get(1)?.as_str()).or_else(|| caps.get(1)?.as_str().parse().ok())?;
    let month = month_name(caps.get(2)?.as_str())?;
    if !valid_md(month, day) {
        return None;
    }
    Some(
        WireTag::new("utc")
            .field_opt("year", caps.get(3).and_then(|y| y.as_str().parse::<i32>().ok()))
            .field("month", month)
            .field("day", day),
    )
}

fn emit_month_year(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_name(caps.get(1)?.as_str())?;
    let year: i32 = caps.get(2)?.as_str().parse().ok()?;
    Some(WireTag::new("utc").field("year", year).field("month", month))
}

fn emit_month_alone(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_name(caps.get(1)?.as_str())?;
    Some(WireTag::new("utc").field("month", month))
}

fn meridiem_value(s: &str) -> &'static str {
    if s.starts_with('p') { "pm" } else { "am" }
}

fn emit_clock_colon(caps: &Captures<'_>) -> Option<WireTag> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    if hour > 24 || minute > 59 {
        return None;
    }
    Some(
        WireTag::new("clock")
            .field("hour", hour)
            .field("minute", minute)
            .field_opt("second", caps.get(3).and_then(|s| s.as_str().parse::<u32>().ok()))
            .field_opt("meridiem", caps.get(4).map(|m| meridiem_value(m.as_str()))),
    )
}

fn emit_clock_meridiem(caps: &Captures<'_>) -> Option<WireTag> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    if hour == 0 || hour > 12 {
        return None;
    }
    Some(
        WireTag::new("clock")
            .field("hour", hour)
            .field("minute", 0)
            .field("meridiem", meridiem_value(caps.get(2)?.as_str())),
    )
}

fn emit_clock_oclock(caps: &Captures<'_>) -> Option<WireTag> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    (1..=12).contains(&hour).then(|| WireTag::new("clock").field("hour", hour).field("minute", 0))
}

fn emit_clock_half_quarter(caps: &Captures<'_>) -> Option<WireTag> {
    let hour: u32 = caps.get(3)?.as_str().parse().ok()?;
    if hour == 0 || hour > 12 {
        return None;
    }
    let past = caps.get(2)?.as_str() == "past";
    let (h, m) = match (caps.get(1)?.as_str(), past) {
        ("half", true) => (hour, 30),
        ("quarter", true) => (hour, 15),
        ("quarter", false) => (if hour == 1 { 12 } else { hour - 1 }, 45),
        // "half to" is not idiomatic.
        _ => return None,
    };
    Some(WireTag::new("clock").field("hour", h).field("minute", m))
}

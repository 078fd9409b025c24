//! Strict absolute dates: 年/月/日 forms and dashed or slashed numeric dates.

use super::{clock_hour, clock_minute, day_number, month_number, year_number};
use crate::grammar::fragment::{Fragment, W_CLOCK, W_UTC};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "utc_dashed_date",
            pattern: regex!(
                r"([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})(?: ?([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?)?"
            ),
            weight: W_UTC,
            emit: emit_dashed,
        },
        Fragment {
            name: "utc_cn_date",
            pattern: regex!(concat!(
                "(?:([0-9]{2,4}|[零〇一二两三四五六七八九]{2,4})年)?",
                "([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月",
                "([0-9]{1,2}|三十[一]?|二?十[一二三四五六七八九]?|廿[一二三四五六七八九]?|卅|[一二三四五六七八九])[日号]?",
            )),
            weight: W_UTC,
            emit: emit_cn_date,
        },
        Fragment {
            name: "utc_cn_year_month",
            pattern: regex!(concat!(
                "([0-9]{2,4}|[零〇一二两三四五六七八九]{2,4})年",
                "([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月(?:份)?",
            )),
            weight: W_UTC,
            emit: emit_cn_year_month,
        },
        Fragment {
            name: "utc_cn_year",
            pattern: regex!("([0-9]{4}|[零〇一二两三四五六七八九]{4})年"),
            weight: W_UTC,
            emit: emit_cn_year,
        },
        Fragment {
            name: "utc_cn_month",
            pattern: regex!("([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月(?:份)?"),
            weight: W_UTC,
            emit: emit_cn_month,
        },
        Fragment {
            name: "clock_cn",
            pattern: regex!(concat!(
                "([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
                "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?",
                "(?:([0-9]{1,2}|[零一二两三四五六七八九十]{1,3})秒)?",
            )),
            weight: W_CLOCK,
            emit: emit_clock_cn,
        },
        Fragment {
            name: "clock_colon",
            pattern: regex!(r"([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?"),
            weight: W_CLOCK,
            emit: emit_clock_colon,
        },
    ]
}

fn emit_dashed(caps: &Captures<'_>) -> Option<WireTag> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
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

fn emit_cn_date(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(2)?.as_str())?;
    let day = day_number(caps.get(3)?.as_str())?;
    Some(
        WireTag::new("utc")
            .field_opt("year", caps.get(1).and_then(|y| year_number(y.as_str())))
            .field("month", month)
            .field("day", day),
    )
}

fn emit_cn_year_month(caps: &Captures<'_>) -> Option<WireTag> {
    let year = year_number(caps.get(1)?.as_str())?;
    let month = month_number(caps.get(2)?.as_str())?;
    Some(WireTag::new("utc").field("year", year).field("month", month))
}

fn emit_cn_year(caps: &Captures<'_>) -> Option<WireTag> {
    let year = year_number(caps.get(1)?.as_str())?;
    Some(WireTag::new("utc").field("year", year))
}

fn emit_cn_month(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(1)?.as_str())?;
    Some(WireTag::new("utc").field("month", month))
}

fn emit_clock_cn(caps: &Captures<'_>) -> Option<WireTag> {
    let hour = clock_hour(caps.get(1)?.as_str())?;
    let minute = match caps.get(2) {
        Some(m) => clock_minute(m.as_str())?,
        None => 0,
    };
    Some(
        WireTag::new("clock")
            .field("hour", hour)
            .field("minute", minute)
            .field_opt("second", caps.get(3).and_then(|s| zh_number(s.as_str()))),
    )
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
            .field_opt("second", caps.get(3).and_then(|s| s.as_str().parse::<u32>().ok())),
    )
}

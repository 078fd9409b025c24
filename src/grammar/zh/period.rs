//! Standalone parts of day, with an optional attached clock ("下午5点").

use super::{clock_hour, clock_minute, period_kind};
use crate::grammar::fragment::{Fragment, W_PERIOD};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "period_clock",
            pattern: regex!(concat!(
                "(上半夜|下半夜|凌晨|黎明|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜间|深夜|午夜|现在)",
                "(?:([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
                "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?",
                "(?:([0-9]{1,2}|[零一二两三四五六七八九十]{1,3})秒)?)?",
            )),
            weight: W_PERIOD,
            emit: emit_period,
        },
    ]
}

fn emit_period(caps: &Captures<'_>) -> Option<WireTag> {
    let word = caps.get(1)?.as_str();
    if word == "现在" {
        // "现在" is the base instant itself: a zero delta.
        return Some(WireTag::new("delta").field("second", 0).field("direction", 1));
    }
    let kind = period_kind(word)?;
    let mut tag = WireTag::new("period").field("period", kind.as_wire());
    if let Some(h) = caps.get(2) {
        let hour = clock_hour(h.as_str())?;
        let minute = match caps.get(3) {
            Some(m) => clock_minute(m.as_str())?,
            None => 0,
        };
        tag = tag
            .field("hour", hour)
            .field("minute", minute)
            .field_opt("second", caps.get(4).and_then(|s| zh_number(s.as_str())));
    }
    Some(tag)
}

//! Weekday references: 周X / 星期X / 礼拜X with offsets, weekends, and
//! nth-weekday-of-month forms.

use super::relative::week_word_offset;
use super::{clock_hour, clock_minute, month_number, period_kind};
use crate::grammar::fragment::{Fragment, W_WEEK};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "week_day",
            pattern: regex!(concat!(
                "((?:上|下)+个?|本|这个?)?(?:周|星期|礼拜)([一二三四五六日天])",
                "的?(上半夜|下半夜|凌晨|黎明|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜间|深夜|午夜)?",
                "(?:([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
                "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?)?",
            )),
            weight: W_WEEK,
            emit: emit_week_day,
        },
        Fragment {
            name: "weekend",
            pattern: regex!(concat!(
                "((?:上|下)+个?|本|这个?)?周末",
                "的?(上半夜|下半夜|凌晨|黎明|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜间|深夜|午夜)?",
            )),
            weight: W_WEEK,
            emit: emit_weekend,
        },
        Fragment {
            name: "week_nth_of_month",
            pattern: regex!(concat!(
                "([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月(?:份)?的?",
                "第([1-5一二三四五])个?(?:周|星期|礼拜)([一二三四五六日天])",
            )),
            weight: W_WEEK,
            emit: emit_week_nth,
        },
        Fragment {
            name: "week_last_of_month",
            pattern: regex!(concat!(
                "([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月(?:份)?的?",
                "最后一个?(?:周|星期|礼拜)([一二三四五六日天])",
            )),
            weight: W_WEEK,
            emit: emit_week_last,
        },
    ]
}

fn weekday_number(s: &str) -> Option<u32> {
    Some(match s {
        "一" => 1,
        "二" => 2,
        "三" => 3,
        "四" => 4,
        "五" => 5,
        "六" => 6,
        "日" | "天" => 7,
        _ => return None,
    })
}

fn prefix_offset(caps: &Captures<'_>, idx: usize) -> i32 {
    caps.get(idx).map(|m| week_word_offset(m.as_str())).unwrap_or(0)
}

fn emit_week_day(caps: &Captures<'_>) -> Option<WireTag> {
    let weekday = weekday_number(caps.get(2)?.as_str())?;
    let mut tag = WireTag::new("week")
        .field("week_day", weekday)
        .field("offset_week", prefix_offset(caps, 1))
        .field_opt("period", caps.get(3).and_then(|p| period_kind(p.as_str())).map(|k| k.as_wire()));
    if let Some(h) = caps.get(4) {
        let hour = clock_hour(h.as_str())?;
        let minute = match caps.get(5) {
            Some(m) => clock_minute(m.as_str())?,
            None => 0,
        };
        tag = tag.field("hour", hour).field("minute", minute);
    }
    Some(tag)
}

fn emit_weekend(caps: &Captures<'_>) -> Option<WireTag> {
    Some(
        WireTag::new("week")
            .flag("weekend", true)
            .field("offset_week", prefix_offset(caps, 1))
            .field_opt("period", caps.get(2).and_then(|p| period_kind(p.as_str())).map(|k| k.as_wire())),
    )
}

fn emit_week_nth(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(1)?.as_str())?;
    let nth = zh_number(caps.get(2)?.as_str())?;
    let weekday = weekday_number(caps.get(3)?.as_str())?;
    Some(WireTag::new("week").field("month", month).field("nth", nth).field("week_day", weekday))
}

fn emit_week_last(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(1)?.as_str())?;
    let weekday = weekday_number(caps.get(2)?.as_str())?;
    Some(WireTag::new("week").field("month", month).flag("last", true).field("week_day", weekday))
}

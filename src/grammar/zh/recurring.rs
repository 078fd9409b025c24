//! Recurring expressions: "每天", "每周一", "每天早上8点".

use super::{clock_hour, clock_minute, period_kind};
use crate::grammar::fragment::{Fragment, W_RECUR};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![Fragment {
        name: "recur",
        pattern: regex!(concat!(
            "每(?:一)?(?:逢)?(天|日|个?月|年|(?:周|星期|礼拜)([一二三四五六日天])?)",
            "的?(上半夜|下半夜|凌晨|黎明|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜间|深夜|午夜)?",
            "(?:([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
            "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?)?",
        )),
        weight: W_RECUR,
        emit: emit_recur,
    }]
}

fn emit_recur(caps: &Captures<'_>) -> Option<WireTag> {
    let unit_raw = caps.get(1)?.as_str();
    let weekday = caps.get(2).and_then(|w| {
        Some(match w.as_str() {
            "一" => 1u32,
            "二" => 2,
            "三" => 3,
            "四" => 4,
            "五" => 5,
            "六" => 6,
            "日" | "天" => 7,
            _ => return None,
        })
    });
    let unit = match unit_raw {
        "天" | "日" => "day",
        "月" | "个月" => "month",
        "年" => "year",
        _ => "week",
    };

    let mut tag = WireTag::new("recur").field("unit", unit).field_opt("week_day", weekday);

    // An attached clock narrows the representative occurrence; an attached
    // period contributes its meridiem.
    if let Some(h) = caps.get(4) {
        let mut hour = clock_hour(h.as_str())?;
        if let Some(kind) = caps.get(3).and_then(|p| period_kind(p.as_str())) {
            if kind.is_pm() && hour <= 12 {
                hour = (hour + 12) % 24;
            }
        }
        let minute = match caps.get(5) {
            Some(m) => clock_minute(m.as_str())?,
            None => 0,
        };
        tag = tag.field("hour", hour).field("minute", minute);
    }
    Some(tag)
}

//! Relative day/week/month/year/quarter references.

use super::{clock_hour, clock_minute, day_number, month_number, period_kind};
use crate::grammar::fragment::{Fragment, W_ORDINAL, W_REL};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "rel_day",
            pattern: regex!(concat!(
                "(大前天|大后天|前天|后天|昨天|昨日|今天|今日|今儿|明天|明日|明儿)",
                "的?(上半夜|下半夜|凌晨|黎明|清晨|早晨|早上|上午|中午|午后|下午|傍晚|晚上|夜间|深夜|午夜)?",
                "(?:([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
                "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?",
                "(?:([0-9]{1,2}|[零一二两三四五六七八九十]{1,3})秒)?)?",
            )),
            weight: W_REL,
            emit: emit_rel_day,
        },
        Fragment {
            name: "rel_day_contracted",
            pattern: regex!(concat!(
                "(今晚|明晚|昨晚|今早|明早)",
                "(?:([0-9]{1,2}|[零〇一二两三四五六七八九十廿卅]{1,3})[点时]",
                "(半|一刻|三刻|[0-9]{1,2}分?|[零一二两三四五六七八九十]{1,3}分)?)?",
            )),
            weight: W_REL,
            emit: emit_rel_contracted,
        },
        Fragment {
            name: "rel_year",
            pattern: regex!(concat!(
                "(前年|去年|今年|明年|后年)",
                "(?:的?([0-9]{1,2}|十[一二]?|[一二三四五六七八九])月",
                "(?:([0-9]{1,2}|三十[一]?|二?十[一二三四五六七八九]?|廿[一二三四五六七八九]?|[一二三四五六七八九])[日号]?)?)?",
            )),
            weight: W_REL,
            emit: emit_rel_year,
        },
        Fragment {
            name: "rel_year_ordinal",
            pattern: regex!(concat!(
                "(前年|去年|今年|明年|后年)",
                "第([0-9]{1,2}|[一二三四五六七八九十]{1,3})(个月|周|星期)",
            )),
            weight: W_REL,
            emit: emit_rel_year_ordinal,
        },
        Fragment {
            name: "rel_month",
            pattern: regex!(concat!(
                "(上上个月|下下个月|上个月|上月|这个月|本月|当月|下个月|下月)",
                "(?:的?([0-9]{1,2}|三十[一]?|二?十[一二三四五六七八九]?|廿[一二三四五六七八九]?|[一二三四五六七八九])[日号])?",
            )),
            weight: W_REL,
            emit: emit_rel_month,
        },
        Fragment {
            name: "rel_week_whole",
            pattern: regex!("((?:上|下)+个?(?:周|星期|礼拜)|本周|这周|本星期|这个星期|次周)"),
            weight: W_REL,
            emit: emit_rel_week,
        },
        Fragment {
            name: "rel_quarter",
            pattern: regex!("(上上|下下|上|下|这|本)个?季度"),
            weight: W_REL,
            emit: emit_rel_quarter,
        },
        Fragment {
            // Standalone ordinal; only meaningful next to a unit, which the
            // merger checks. Longer composed rules win the cover when the
            // ordinal is part of a bigger expression.
            name: "ordinal",
            pattern: regex!("第([0-9]{1,2}|[一二三四五六七八九十]{1,3})个?"),
            weight: W_ORDINAL,
            emit: emit_ordinal,
        },
    ]
}

fn emit_ordinal(caps: &Captures<'_>) -> Option<WireTag> {
    let n = zh_number(caps.get(1)?.as_str())?;
    (n >= 1).then(|| WireTag::new("ordinal").field("value", n))
}

fn day_word_offset(s: &str) -> Option<i32> {
    Some(match s {
        "大前天" => -3,
        "前天" => -2,
        "昨天" | "昨日" => -1,
        "今天" | "今日" | "今儿" => 0,
        "明天" | "明日" | "明儿" => 1,
        "后天" => 2,
        "大后天" => 3,
        _ => return None,
    })
}

fn year_word_offset(s: &str) -> Option<i32> {
    Some(match s {
        "前年" => -2,
        "去年" => -1,
        "今年" => 0,
        "明年" => 1,
        "后年" => 2,
        _ => return None,
    })
}

fn attach_clock(tag: WireTag, caps: &Captures<'_>, hour_idx: usize) -> Option<WireTag> {
    let Some(h) = caps.get(hour_idx) else {
        return Some(tag);
    };
    let hour = clock_hour(h.as_str())?;
    let minute = match caps.get(hour_idx + 1) {
        Some(m) => clock_minute(m.as_str())?,
        None => 0,
    };
    Some(
        tag.field("hour", hour)
            .field("minute", minute)
            .field_opt("second", caps.get(hour_idx + 2).and_then(|s| zh_number(s.as_str()))),
    )
}

fn emit_rel_day(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = day_word_offset(caps.get(1)?.as_str())?;
    let tag = WireTag::new("rel")
        .field("offset_day", offset)
        .field_opt("period", caps.get(2).and_then(|p| period_kind(p.as_str())).map(|k| k.as_wire()));
    attach_clock(tag, caps, 3)
}

fn emit_rel_contracted(caps: &Captures<'_>) -> Option<WireTag> {
    let (offset, period) = match caps.get(1)?.as_str() {
        "今晚" => (0, "evening"),
        "明晚" => (1, "evening"),
        "昨晚" => (-1, "evening"),
        "今早" => (0, "morning"),
        "明早" => (1, "morning"),
        _ => return None,
    };
    let tag = WireTag::new("rel").field("offset_day", offset).field("period", period);
    attach_clock(tag, caps, 2)
}

fn emit_rel_year(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = year_word_offset(caps.get(1)?.as_str())?;
    Some(
        WireTag::new("rel")
            .field("offset_year", offset)
            .field_opt("month", caps.get(2).and_then(|m| month_number(m.as_str())))
            .field_opt("day", caps.get(3).and_then(|d| day_number(d.as_str()))),
    )
}

fn emit_rel_year_ordinal(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = year_word_offset(caps.get(1)?.as_str())?;
    let n = zh_number(caps.get(2)?.as_str())?;
    let tag = WireTag::new("rel").field("offset_year", offset);
    match caps.get(3)?.as_str() {
        "个月" => {
            if !(1..=12).contains(&n) {
                return None;
            }
            Some(tag.field("month_order", n))
        }
        "周" | "星期" => {
            if !(1..=53).contains(&n) {
                return None;
            }
            Some(tag.field("week_order", n))
        }
        _ => None,
    }
}

fn emit_rel_month(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = match caps.get(1)?.as_str() {
        "上上个月" => -2,
        "上个月" | "上月" => -1,
        "这个月" | "本月" | "当月" => 0,
        "下个月" | "下月" => 1,
        "下下个月" => 2,
        _ => return None,
    };
    Some(
        WireTag::new("rel")
            .field("offset_month", offset)
            .field_opt("day", caps.get(2).and_then(|d| day_number(d.as_str()))),
    )
}

fn emit_rel_week(caps: &Captures<'_>) -> Option<WireTag> {
    let word = caps.get(1)?.as_str();
    let offset = week_word_offset(word);
    Some(WireTag::new("rel").field("offset_week", offset))
}

pub(super) fn week_word_offset(word: &str) -> i32 {
    if word == "次周" {
        return 1;
    }
    let ups = word.chars().filter(|c| *c == '上').count() as i32;
    let downs = word.chars().filter(|c| *c == '下').count() as i32;
    downs - ups
}

fn emit_rel_quarter(caps: &Captures<'_>) -> Option<WireTag> {
    let offset = match caps.get(1)?.as_str() {
        "上上" => -2,
        "上" => -1,
        "这" | "本" => 0,
        "下" => 1,
        "下下" => 2,
        _ => return None,
    };
    Some(WireTag::new("rel").field("offset_quarter", offset))
}

//! Signed offsets from the base instant: "3天后", "两个小时前", "过三天",
//! fuzzy "几天后", and the recency bracket "近一年".

use crate::grammar::fragment::{Fragment, W_DELTA, W_RANGE};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "delta_unit",
            pattern: regex!(concat!(
                "([0-9]{1,3}|[零〇一二两三四五六七八九十廿卅]{1,3}|几|半)个?",
                "(年|月|星期|周|天|日|小时|钟头|分钟|秒钟|秒)",
                "(之前|以前|之后|以后|前|后)",
            )),
            weight: W_DELTA,
            emit: emit_delta_unit,
        },
        Fragment {
            name: "delta_half_unit",
            pattern: regex!(concat!(
                "([0-9]{1,3}|[零〇一二两三四五六七八九十]{1,3})个半",
                "(小时|钟头|月|星期|周)",
                "(之前|以前|之后|以后|前|后)",
            )),
            weight: W_DELTA,
            emit: emit_delta_half,
        },
        Fragment {
            name: "delta_after_verb",
            pattern: regex!("过([0-9]{1,3}|[零〇一二两三四五六七八九十廿卅]{1,3}|几)个?(天|日|小时|钟头|分钟|月|年|星期|周)"),
            weight: W_DELTA,
            emit: emit_delta_after_verb,
        },
        Fragment {
            name: "delta_recent",
            pattern: regex!("最?近([0-9]{1,3}|[零〇一二两三四五六七八九十廿卅]{1,3}|几|半)个?(年|月|星期|周|天|日|小时|分钟)"),
            weight: W_RANGE,
            emit: emit_delta_recent,
        },
    ]
}

fn unit_key(unit: &str) -> Option<&'static str> {
    Some(match unit {
        "年" => "year",
        "月" => "month",
        "星期" | "周" => "week",
        "天" | "日" => "day",
        "小时" | "钟头" => "hour",
        "分钟" => "minute",
        "秒" | "秒钟" => "second",
        _ => return None,
    })
}

/// Amount word → (value, fuzzy). "几" is the fuzzy "a few".
fn amount(s: &str) -> Option<(i64, bool)> {
    if s == "几" {
        return Some((3, true));
    }
    Some((zh_number(s)? as i64, false))
}

fn direction(s: &str) -> i32 {
    match s {
        "之前" | "以前" | "前" => -1,
        _ => 1,
    }
}

fn emit_delta_unit(caps: &Captures<'_>) -> Option<WireTag> {
    let raw = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();
    let dir = direction(caps.get(3)?.as_str());

    // "半小时后" = 30 minutes; "半个月后" = 15 days.
    if raw == "半" {
        let tag = WireTag::new("delta").field("direction", dir);
        return match unit {
            "小时" | "钟头" => Some(tag.field("minute", 30)),
            "天" | "日" => Some(tag.field("hour", 12)),
            "月" => Some(tag.field("day", 15)),
            "年" => Some(tag.field("month", 6)),
            _ => None,
        };
    }

    let (value, fuzzy) = amount(raw)?;
    Some(
        WireTag::new("delta")
            .field(unit_key(unit)?, value)
            .field("direction", dir)
            .flag("fuzzy", fuzzy),
    )
}

fn emit_delta_half(caps: &Captures<'_>) -> Option<WireTag> {
    let (value, _) = amount(caps.get(1)?.as_str())?;
    let dir = direction(caps.get(3)?.as_str());
    let tag = WireTag::new("delta").field("direction", dir);
    match caps.get(2)?.as_str() {
        // "一个半小时" = 1h30m.
        "小时" | "钟头" => Some(tag.field("hour", value).field("minute", 30)),
        "月" => Some(tag.field("month", value).field("day", 15)),
        "星期" | "周" => Some(tag.field("week", value).field("day", 3)),
        _ => None,
    }
}

fn emit_delta_after_verb(caps: &Captures<'_>) -> Option<WireTag> {
    let (value, fuzzy) = amount(caps.get(1)?.as_str())?;
    Some(
        WireTag::new("delta")
            .field(unit_key(caps.get(2)?.as_str())?, value)
            .field("direction", 1)
            .flag("fuzzy", fuzzy),
    )
}

fn emit_delta_recent(caps: &Captures<'_>) -> Option<WireTag> {
    let raw = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();
    let tag = WireTag::new("delta").field("direction", -1).flag("recent", true);
    if raw == "半" {
        return match unit {
            "年" => Some(tag.field("month", 6)),
            "月" => Some(tag.field("day", 15)),
            "天" | "日" => Some(tag.field("hour", 12)),
            "小时" => Some(tag.field("minute", 30)),
            _ => None,
        };
    }
    let (value, fuzzy) = amount(raw)?;
    Some(tag.field(unit_key(unit)?, value).flag("fuzzy", fuzzy))
}

//! Lunar-calendar dates: 农历X月X日, 正月初八, 腊月廿三, and month periods.

use super::{month_number, year_number};
use crate::grammar::fragment::{Fragment, W_LUNAR};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "lunar_date",
            pattern: regex!(concat!(
                "(?:农历|阴历)(?:([0-9]{4})年)?",
                "(正|冬|腊|[0-9]{1,2}|十[一二]?|[一二三四五六七八九])月",
                "(?:(初[一二三四五六七八九十]|二?十[一二三四五六七八九]?|廿[一二三四五六七八九]?|三十|[0-9]{1,2})[日号]?)?",
            )),
            weight: W_LUNAR,
            emit: emit_lunar_date,
        },
        Fragment {
            name: "lunar_named_month_day",
            pattern: regex!(concat!(
                "(正|腊)月",
                "(初[一二三四五六七八九十]|二?十[一二三四五六七八九]?|廿[一二三四五六七八九]?|三十)[日号]?",
            )),
            weight: W_LUNAR,
            emit: emit_named_month_day,
        },
        Fragment {
            name: "lunar_month_period",
            pattern: regex!(concat!(
                "(?:农历|阴历)(?:([0-9]{4})年)?",
                "(正|冬|腊|[0-9]{1,2}|十[一二]?|[一二三四五六七八九])月",
                "(初|月初|上旬|中旬|下旬|月末|末)",
            )),
            weight: W_LUNAR,
            emit: emit_month_period,
        },
    ]
}

fn lunar_day(s: &str) -> Option<u32> {
    let d = zh_number(s.trim_start_matches('初'))?;
    (1..=30).contains(&d).then_some(d)
}

fn emit_lunar_date(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(2)?.as_str())?;
    Some(
        WireTag::new("lunar")
            .field_opt("lunar_year", caps.get(1).and_then(|y| year_number(y.as_str())))
            .field("lunar_month", month)
            .field_opt("lunar_day", caps.get(3).and_then(|d| lunar_day(d.as_str()))),
    )
}

fn emit_named_month_day(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(1)?.as_str())?;
    let day = lunar_day(caps.get(2)?.as_str())?;
    Some(WireTag::new("lunar").field("lunar_month", month).field("lunar_day", day))
}

fn emit_month_period(caps: &Captures<'_>) -> Option<WireTag> {
    let month = month_number(caps.get(2)?.as_str())?;
    let period = match caps.get(3)?.as_str() {
        "初" | "月初" | "上旬" => "early",
        "中旬" => "mid",
        _ => "late",
    };
    Some(
        WireTag::new("lunar")
            .field_opt("lunar_year", caps.get(1).and_then(|y| year_number(y.as_str())))
            .field("lunar_month", month)
            .field("month_period", period),
    )
}

//! Century and decade expressions: "20世纪60年代前期", "上个世纪", "80年代".

use crate::grammar::fragment::{Fragment, W_CENTURY};
use crate::grammar::numbers::zh_number;
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "century_decade",
            pattern: regex!(concat!(
                "(?:([0-9]{1,2}|[一二三四五六七八九十]{1,2})世纪|(上上|上|本|这)个?世纪)",
                "([0-9]{2}|[一二三四五六七八九]十)年代",
                "(前期|初期|初|早期|中期|末期|末|后期|晚期)?",
            )),
            weight: W_CENTURY,
            emit: emit_century_decade,
        },
        Fragment {
            name: "century_alone",
            pattern: regex!(concat!(
                "(?:([0-9]{1,2}|[一二三四五六七八九十]{1,2})世纪|(上上|上|本|这)个?世纪)",
                "(前期|初期|初|早期|中期|末期|末|后期|晚期)?",
            )),
            weight: W_CENTURY,
            emit: emit_century_alone,
        },
        Fragment {
            name: "decade_alone",
            pattern: regex!("([0-9]{2}|[一二三四五六七八九]十)年代(前期|初期|初|早期|中期|末期|末|后期|晚期)?"),
            weight: W_CENTURY,
            emit: emit_decade_alone,
        },
    ]
}

fn century_offset(word: &str) -> i32 {
    match word {
        "上上" => -2,
        "上" => -1,
        _ => 0,
    }
}

fn decade_value(s: &str) -> Option<u32> {
    let d = zh_number(s)?;
    (d % 10 == 0 && d <= 90).then_some(d)
}

fn qualifier(s: &str) -> &'static str {
    match s {
        "前期" | "初期" | "初" | "早期" => "early",
        "中期" => "mid",
        _ => "late",
    }
}

fn emit_century_decade(caps: &Captures<'_>) -> Option<WireTag> {
    let decade = decade_value(caps.get(3)?.as_str())?;
    let tag = WireTag::new("decade")
        .field("decade", decade)
        .field_opt("qualifier", caps.get(4).map(|q| qualifier(q.as_str())));
    if let Some(c) = caps.get(1) {
        let century = zh_number(c.as_str())?;
        (1..=99).contains(&century).then(|| tag.field("century", century))
    } else {
        Some(tag.field("century_offset", century_offset(caps.get(2)?.as_str())))
    }
}

fn emit_century_alone(caps: &Captures<'_>) -> Option<WireTag> {
    let tag = WireTag::new("century")
        .field_opt("qualifier", caps.get(3).map(|q| qualifier(q.as_str())));
    if let Some(c) = caps.get(1) {
        let century = zh_number(c.as_str())?;
        (1..=99).contains(&century).then(|| tag.field("century", century))
    } else {
        Some(tag.field("offset", century_offset(caps.get(2)?.as_str())))
    }
}

fn emit_decade_alone(caps: &Captures<'_>) -> Option<WireTag> {
    let decade = decade_value(caps.get(1)?.as_str())?;
    Some(
        WireTag::new("decade")
            .field("decade", decade)
            .field_opt("qualifier", caps.get(2).map(|q| qualifier(q.as_str()))),
    )
}

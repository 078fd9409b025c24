//! Named holidays and solar terms, with optional year context and day
//! qualifiers ("国庆节前一天", "明年春节", "冬至那天").

use super::year_number;
use crate::calendar::{Festival, SolarTerm};
use crate::grammar::fragment::{Fragment, W_HOLIDAY};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "holiday_festival",
            pattern: regex!(concat!(
                "(前年|去年|今年|明年|后年|([0-9]{4})年)?的?",
                "(大年三十|大年初一|元旦|春节|过年|除夕|元宵节|元宵|情人节|妇女节|三八节|植树节|愚人节|清明节|",
                "劳动节|五一|母亲节|儿童节|六一|父亲节|端午节|端午|建党节|七夕节|七夕|建军节|中元节|教师节|",
                "中秋节|中秋|重阳节|重阳|国庆节|国庆|万圣节|感恩节|平安夜|圣诞节|圣诞|腊八节|腊八|暑假|寒假)",
                "(?:假期|期间)?(那天|当天|的?前一天|的?后一天)?",
            )),
            weight: W_HOLIDAY,
            emit: emit_festival,
        },
        Fragment {
            name: "holiday_solar_term",
            pattern: regex!(concat!(
                "(前年|去年|今年|明年|后年|([0-9]{4})年)?的?",
                "(小寒|大寒|立春|雨水|惊蛰|春分|清明|谷雨|立夏|小满|芒种|夏至|小暑|大暑|立秋|处暑|白露|秋分|寒露|霜降|立冬|小雪|大雪|冬至)",
                "(?:节气)?(那天|当天|的?前一天|的?后一天)?",
            )),
            weight: W_HOLIDAY,
            emit: emit_solar_term,
        },
    ]
}

fn festival_id(name: &str) -> Option<Festival> {
    Some(match name {
        "元旦" => Festival::NewYearsDay,
        "春节" | "过年" | "大年初一" => Festival::SpringFestival,
        "除夕" | "大年三十" => Festival::LunarNewYearEve,
        "元宵节" | "元宵" => Festival::LanternFestival,
        "情人节" => Festival::Valentine,
        "妇女节" | "三八节" => Festival::WomensDay,
        "植树节" => Festival::ArborDay,
        "愚人节" => Festival::AprilFools,
        "清明节" => Festival::QingmingFestival,
        "劳动节" | "五一" => Festival::LaborDay,
        "母亲节" => Festival::MothersDay,
        "儿童节" | "六一" => Festival::ChildrensDay,
        "父亲节" => Festival::FathersDay,
        "端午节" | "端午" => Festival::DragonBoat,
        "建党节" => Festival::PartyFoundingDay,
        "七夕节" | "七夕" => Festival::Qixi,
        "建军节" => Festival::ArmyDay,
        "中元节" => Festival::GhostFestival,
        "教师节" => Festival::TeachersDay,
        "中秋节" | "中秋" => Festival::MidAutumn,
        "重阳节" | "重阳" => Festival::DoubleNinth,
        "国庆节" | "国庆" => Festival::NationalDay,
        "万圣节" => Festival::Halloween,
        "感恩节" => Festival::Thanksgiving,
        "平安夜" => Festival::ChristmasEve,
        "圣诞节" | "圣诞" => Festival::Christmas,
        "腊八节" | "腊八" => Festival::Laba,
        "暑假" => Festival::SummerVacation,
        "寒假" => Festival::WinterVacation,
        _ => return None,
    })
}

fn year_offset_word(s: &str) -> Option<i32> {
    Some(match s {
        "前年" => -2,
        "去年" => -1,
        "今年" => 0,
        "明年" => 1,
        "后年" => 2,
        _ => return None,
    })
}

fn day_qualifier(s: &str) -> i32 {
    if s.ends_with("前一天") {
        -1
    } else if s.ends_with("后一天") {
        1
    } else {
        // 那天 / 当天
        0
    }
}

fn apply_year_context(tag: WireTag, caps: &Captures<'_>) -> WireTag {
    let tag = tag.field_opt("year", caps.get(2).and_then(|y| year_number(y.as_str())));
    match caps.get(1) {
        Some(w) if caps.get(2).is_none() => {
            tag.field_opt("offset_year", year_offset_word(w.as_str()))
        }
        _ => tag,
    }
}

fn emit_festival(caps: &Captures<'_>) -> Option<WireTag> {
    let festival = festival_id(caps.get(3)?.as_str())?;
    let tag = WireTag::new("holiday")
        .field("festival", festival.as_id())
        .field("day_offset", caps.get(4).map(|q| day_qualifier(q.as_str())).unwrap_or(0));
    Some(apply_year_context(tag, caps))
}

fn emit_solar_term(caps: &Captures<'_>) -> Option<WireTag> {
    let term = match caps.get(3)?.as_str() {
        "小寒" => SolarTerm::XiaoHan,
        "大寒" => SolarTerm::DaHan,
        "立春" => SolarTerm::LiChun,
        "雨水" => SolarTerm::YuShui,
        "惊蛰" => SolarTerm::JingZhe,
        "春分" => SolarTerm::ChunFen,
        "清明" => SolarTerm::QingMing,
        "谷雨" => SolarTerm::GuYu,
        "立夏" => SolarTerm::LiXia,
        "小满" => SolarTerm::XiaoMan,
        "芒种" => SolarTerm::MangZhong,
        "夏至" => SolarTerm::XiaZhi,
        "小暑" => SolarTerm::XiaoShu,
        "大暑" => SolarTerm::DaShu,
        "立秋" => SolarTerm::LiQiu,
        "处暑" => SolarTerm::ChuShu,
        "白露" => SolarTerm::BaiLu,
        "秋分" => SolarTerm::QiuFen,
        "寒露" => SolarTerm::HanLu,
        "霜降" => SolarTerm::ShuangJiang,
        "立冬" => SolarTerm::LiDong,
        "小雪" => SolarTerm::XiaoXue,
        "大雪" => SolarTerm::DaXue,
        "冬至" => SolarTerm::DongZhi,
        _ => return None,
    };
    let tag = WireTag::new("holiday")
        .field("solar_term", term.as_id())
        .field("day_offset", caps.get(4).map(|q| day_qualifier(q.as_str())).unwrap_or(0));
    Some(apply_year_context(tag, caps))
}

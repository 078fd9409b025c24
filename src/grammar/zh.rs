//! Chinese rule modules.
//!
//! One file per rule family, mirroring the grammar composition order:
//! absolute dates, relative days, weekdays, parts of day, deltas, holidays,
//! lunar dates, range markers, century/decade, recurring, and the negative
//! disambiguation guards.

#[path = "zh/century.rs"]
mod century;
#[path = "zh/delta.rs"]
mod delta;
#[path = "zh/holiday.rs"]
mod holiday;
#[path = "zh/lunar.rs"]
mod lunar;
#[path = "zh/noise.rs"]
mod noise;
#[path = "zh/period.rs"]
mod period;
#[path = "zh/range.rs"]
mod range;
#[path = "zh/recurring.rs"]
mod recurring;
#[path = "zh/relative.rs"]
mod relative;
#[path = "zh/utc.rs"]
mod utc;
#[path = "zh/week.rs"]
mod week;

use super::fragment::Fragment;
use super::numbers::zh_number;
use crate::tag::PeriodKind;

pub(crate) fn fragments() -> Vec<Fragment> {
    let mut v = Vec::new();
    v.extend(noise::fragments());
    v.extend(utc::fragments());
    v.extend(relative::fragments());
    v.extend(period::fragments());
    v.extend(delta::fragments());
    v.extend(week::fragments());
    v.extend(range::fragments());
    v.extend(holiday::fragments());
    v.extend(lunar::fragments());
    v.extend(recurring::fragments());
    v.extend(century::fragments());
    v
}

// --- Shared surface helpers --------------------------------------------------

pub(super) fn period_kind(s: &str) -> Option<PeriodKind> {
    Some(match s {
        "凌晨" => PeriodKind::Daybreak,
        "黎明" => PeriodKind::Dawn,
        "清晨" | "早晨" => PeriodKind::EarlyMorning,
        "早上" => PeriodKind::Morning,
        "上午" => PeriodKind::Forenoon,
        "中午" => PeriodKind::Noon,
        "午后" => PeriodKind::EarlyAfternoon,
        "下午" => PeriodKind::Afternoon,
        "傍晚" => PeriodKind::Dusk,
        "晚上" | "当晚" => PeriodKind::Evening,
        "夜间" => PeriodKind::Night,
        "深夜" => PeriodKind::LateNight,
        "午夜" => PeriodKind::Midnight,
        "上半夜" => PeriodKind::FirstHalfNight,
        "下半夜" => PeriodKind::SecondHalfNight,
        _ => return None,
    })
}

/// Parse a clock minute part: "半" = 30, "一刻" = 15, "三刻" = 45, digits
/// with or without a trailing 分, numeral words with 分.
pub(super) fn clock_minute(s: &str) -> Option<u32> {
    let m = match s {
        "半" => 30,
        "一刻" => 15,
        "三刻" => 45,
        other => zh_number(other.trim_end_matches('分'))?,
    };
    (m < 60).then_some(m)
}

/// Validate an hour word; 24 is accepted (rolls over during resolution).
pub(super) fn clock_hour(s: &str) -> Option<u32> {
    let h = zh_number(s)?;
    (h <= 24).then_some(h)
}

/// Chinese month word, including 正月/冬月/腊月.
pub(super) fn month_number(s: &str) -> Option<u32> {
    let m = match s {
        "正" => 1,
        "冬" => 11,
        "腊" => 12,
        other => zh_number(other)?,
    };
    (1..=12).contains(&m).then_some(m)
}

pub(super) fn day_number(s: &str) -> Option<u32> {
    let d = zh_number(s.trim_start_matches('初'))?;
    (1..=31).contains(&d).then_some(d)
}

/// Two- or four-digit year; two-digit years are widened during resolution.
pub(super) fn year_number(s: &str) -> Option<i32> {
    let y = zh_number(s)? as i32;
    (y <= 9999).then_some(y)
}

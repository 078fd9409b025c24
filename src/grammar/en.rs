//! English rule modules.

#[path = "en/century.rs"]
mod century;
#[path = "en/delta.rs"]
mod delta;
#[path = "en/holiday.rs"]
mod holiday;
#[path = "en/noise.rs"]
mod noise;
#[path = "en/period.rs"]
mod period;
#[path = "en/range.rs"]
mod range;
#[path = "en/recurring.rs"]
mod recurring;
#[path = "en/relative.rs"]
mod relative;
#[path = "en/utc.rs"]
mod utc;
#[path = "en/week.rs"]
mod week;

use super::fragment::Fragment;
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
    v.extend(recurring::fragments());
    v.extend(century::fragments());
    v
}

// --- Shared surface helpers --------------------------------------------------

pub(super) fn period_kind(s: &str) -> Option<PeriodKind> {
    Some(match s {
        "early morning" => PeriodKind::EarlyMorning,
        "morning" => PeriodKind::Morning,
        "afternoon" => PeriodKind::Afternoon,
        "evening" => PeriodKind::Evening,
        "night" => PeriodKind::Night,
        "noon" | "midday" => PeriodKind::Noon,
        "midnight" => PeriodKind::Midnight,
        "dawn" | "sunrise" => PeriodKind::Dawn,
        "dusk" | "sunset" => PeriodKind::Dusk,
        _ => return None,
    })
}

pub(super) fn month_name(s: &str) -> Option<u32> {
    Some(match s {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    })
}

pub(super) fn weekday_name(s: &str) -> Option<u32> {
    Some(match s {
        "monday" => 1,
        "tuesday" | "tues" => 2,
        "wednesday" => 3,
        "thursday" | "thurs" | "thur" => 4,
        "friday" => 5,
        "saturday" => 6,
        "sunday" => 7,
        _ => return None,
    })
}

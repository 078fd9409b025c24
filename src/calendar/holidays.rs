//! Per-locale festival tables.
//!
//! Each festival maps to a date rule: a fixed month/day, a multi-day
//! statutory span, an nth/last-weekday rule, an Easter-derived offset, a
//! lunar-calendar anchor, or a solar-term day. The grammar maps surface
//! names to [`Festival`] ids; the holiday resolver turns a rule plus a year
//! into concrete dates.

use super::solar_term::SolarTerm;
use chrono::{Datelike, Days, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Festival {
    // Fixed-date festivals shared by both locales.
    NewYearsDay,
    Valentine,
    WomensDay,
    ArborDay,
    AprilFools,
    EarthDay,
    ChildrensDay,
    PartyFoundingDay,
    ArmyDay,
    TeachersDay,
    Halloween,
    ChristmasEve,
    Christmas,
    NewYearsEve,
    StPatricks,
    VeteransDay,
    IndependenceDay,
    MayDay,
    // Weekday-rule festivals.
    MothersDay,
    FathersDay,
    Thanksgiving,
    MemorialDay,
    LaborDayUs,
    MlkDay,
    PresidentsDay,
    BlackFriday,
    // Easter cycle.
    Easter,
    GoodFriday,
    // Chinese statutory spans.
    LaborDay,
    NationalDay,
    QingmingFestival,
    SummerVacation,
    WinterVacation,
    // Lunar-anchored festivals.
    SpringFestival,
    LanternFestival,
    DragonBoat,
    Qixi,
    GhostFestival,
    MidAutumn,
    DoubleNinth,
    Laba,
    LunarNewYearEve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FestivalRule {
    Fixed { month: u32, day: u32 },
    /// Multi-day span with explicit endpoints.
    Span { start: (u32, u32), end: (u32, u32) },
    /// Span running from a fixed start to the last day of `end_month`.
    MonthEndSpan { start: (u32, u32), end_month: u32 },
    NthWeekday { month: u32, weekday: Weekday, nth: u32 },
    LastWeekday { month: u32, weekday: Weekday },
    /// Days relative to Easter Sunday.
    EasterOffset(i64),
    /// Lunar month/day.
    Lunar { month: u32, day: u32 },
    /// Last day of the lunar year.
    LunarEve,
    /// The day of a solar term.
    Term(SolarTerm),
}

static FESTIVALS: &[(Festival, &str, FestivalRule)] = &[
    (Festival::NewYearsDay, "new_years_day", FestivalRule::Fixed { month: 1, day: 1 }),
    (Festival::Valentine, "valentine", FestivalRule::Fixed { month: 2, day: 14 }),
    (Festival::WomensDay, "womens_day", FestivalRule::Fixed { month: 3, day: 8 }),
    (Festival::ArborDay, "arbor_day", FestivalRule::Fixed { month: 3, day: 12 }),
    (Festival::AprilFools, "april_fools", FestivalRule::Fixed { month: 4, day: 1 }),
    (Festival::EarthDay, "earth_day", FestivalRule::Fixed { month: 4, day: 22 }),
    (Festival::ChildrensDay, "childrens_day", FestivalRule::Fixed { month: 6, day: 1 }),
    (Festival::PartyFoundingDay, "party_founding_day", FestivalRule::Fixed { month: 7, day: 1 }),
    (Festival::ArmyDay, "army_day", FestivalRule::Fixed { month: 8, day: 1 }),
    (Festival::TeachersDay, "teachers_day", FestivalRule::Fixed { month: 9, day: 10 }),
    (Festival::Halloween, "halloween", FestivalRule::Fixed { month: 10, day: 31 }),
    (Festival::ChristmasEve, "christmas_eve", FestivalRule::Fixed { month: 12, day: 24 }),
    (Festival::Christmas, "christmas", FestivalRule::Fixed { month: 12, day: 25 }),
    (Festival::NewYearsEve, "new_years_eve", FestivalRule::Fixed { month: 12, day: 31 }),
    (Festival::StPatricks, "st_patricks", FestivalRule::Fixed { month: 3, day: 17 }),
    (Festival::VeteransDay, "veterans_day", FestivalRule::Fixed { month: 11, day: 11 }),
    (Festival::IndependenceDay, "independence_day", FestivalRule::Fixed { month: 7, day: 4 }),
    (Festival::MayDay, "may_day", FestivalRule::Fixed { month: 5, day: 1 }),
    (
        Festival::MothersDay,
        "mothers_day",
        FestivalRule::NthWeekday { month: 5, weekday: Weekday::Sun, nth: 2 },
    ),
    (
        Festival::FathersDay,
        "fathers_day",
        FestivalRule::NthWeekday { month: 6, weekday: Weekday::Sun, nth: 3 },
    ),
    (
        Festival::Thanksgiving,
        "thanksgiving",
        FestivalRule::NthWeekday { month: 11, weekday: Weekday::Thu, nth: 4 },
    ),
    (
        Festival::MemorialDay,
        "memorial_day",
        FestivalRule::LastWeekday { month: 5, weekday: Weekday::Mon },
    ),
    (
        Festival::LaborDayUs,
        "labor_day_us",
        FestivalRule::NthWeekday { month: 9, weekday: Weekday::Mon, nth: 1 },
    ),
    (
        Festival::MlkDay,
        "mlk_day",
        FestivalRule::NthWeekday { month: 1, weekday: Weekday::Mon, nth: 3 },
    ),
    (
        Festival::PresidentsDay,
        "presidents_day",
        FestivalRule::NthWeekday { month: 2, weekday: Weekday::Mon, nth: 3 },
    ),
    (Festival::BlackFriday, "black_friday", FestivalRule::EasterOffset(0)), // replaced below
    (Festival::Easter, "easter", FestivalRule::EasterOffset(0)),
    (Festival::GoodFriday, "good_friday", FestivalRule::EasterOffset(-2)),
    (Festival::LaborDay, "labor_day", FestivalRule::Span { start: (5, 1), end: (5, 5) }),
    (Festival::NationalDay, "national_day", FestivalRule::Span { start: (10, 1), end: (10, 7) }),
    (Festival::QingmingFestival, "qingming_festival", FestivalRule::Term(SolarTerm::QingMing)),
    (
        Festival::SummerVacation,
        "summer_vacation",
        FestivalRule::MonthEndSpan { start: (7, 1), end_month: 8 },
    ),
    (
        Festival::WinterVacation,
        "winter_vacation",
        FestivalRule::MonthEndSpan { start: (2, 1), end_month: 2 },
    ),
    (Festival::SpringFestival, "spring_festival", FestivalRule::Lunar { month: 1, day: 1 }),
    (Festival::LanternFestival, "lantern_festival", FestivalRule::Lunar { month: 1, day: 15 }),
    (Festival::DragonBoat, "dragon_boat", FestivalRule::Lunar { month: 5, day: 5 }),
    (Festival::Qixi, "qixi", FestivalRule::Lunar { month: 7, day: 7 }),
    (Festival::GhostFestival, "ghost_festival", FestivalRule::Lunar { month: 7, day: 15 }),
    (Festival::MidAutumn, "mid_autumn", FestivalRule::Lunar { month: 8, day: 15 }),
    (Festival::DoubleNinth, "double_ninth", FestivalRule::Lunar { month: 9, day: 9 }),
    (Festival::Laba, "laba", FestivalRule::Lunar { month: 12, day: 8 }),
    (Festival::LunarNewYearEve, "lunar_new_year_eve", FestivalRule::LunarEve),
];

impl Festival {
    pub fn from_id(id: &str) -> Option<Self> {
        FESTIVALS.iter().find(|(_, fid, _)| *fid == id).map(|(f, _, _)| *f)
    }

    pub fn as_id(&self) -> &'static str {
        FESTIVALS.iter().find(|(f, _, _)| f == self).map(|(_, id, _)| *id).unwrap()
    }

    pub fn rule(&self) -> FestivalRule {
        // Black Friday is the day after Thanksgiving, which is itself an
        // nth-weekday rule; encode it directly here.
        if *self == Festival::BlackFriday {
            return FestivalRule::NthWeekday { month: 11, weekday: Weekday::Thu, nth: 4 };
        }
        FESTIVALS.iter().find(|(f, _, _)| f == self).map(|(_, _, r)| *r).unwrap()
    }

    /// Extra day offset baked into the rule (Black Friday = Thanksgiving + 1).
    pub fn rule_day_offset(&self) -> i64 {
        if *self == Festival::BlackFriday { 1 } else { 0 }
    }
}

/// The `nth` occurrence (1-based) of `weekday` in `year`/`month`.
pub(crate) fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    let date = first.checked_add_days(Days::new(offset as u64 + (nth as u64 - 1) * 7))?;
    (date.month() == month).then_some(date)
}

/// The final occurrence of `weekday` in `year`/`month`.
pub(crate) fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let mut nth = 5;
    while nth >= 1 {
        if let Some(date) = nth_weekday_of_month(year, month, weekday, nth) {
            return Some(date);
        }
        nth -= 1;
    }
    None
}

/// Easter Sunday via the anonymous Gregorian computus.
pub(crate) fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn nth_weekday() {
        // 4th Thursday of November 2025 = Thanksgiving = Nov 27.
        assert_eq!(nth_weekday_of_month(2025, 11, Weekday::Thu, 4), Some(d(2025, 11, 27)));
        // 2nd Sunday of May 2025 = Mother's Day = May 11.
        assert_eq!(nth_weekday_of_month(2025, 5, Weekday::Sun, 2), Some(d(2025, 5, 11)));
        // No 5th Friday in January 2025.
        assert_eq!(nth_weekday_of_month(2025, 1, Weekday::Fri, 5), Some(d(2025, 1, 31)));
        assert_eq!(nth_weekday_of_month(2025, 2, Weekday::Fri, 5), None);
    }

    #[test]
    fn last_weekday() {
        // Memorial Day 2025 = last Monday of May = May 26.
        assert_eq!(last_weekday_of_month(2025, 5, Weekday::Mon), Some(d(2025, 5, 26)));
    }

    #[test]
    fn easter() {
        assert_eq!(easter_sunday(2025), Some(d(2025, 4, 20)));
        assert_eq!(easter_sunday(2024), Some(d(2024, 3, 31)));
    }

    #[test]
    fn festival_ids() {
        assert_eq!(Festival::from_id("mid_autumn"), Some(Festival::MidAutumn));
        assert_eq!(Festival::MidAutumn.as_id(), "mid_autumn");
        assert_eq!(Festival::BlackFriday.rule_day_offset(), 1);
    }
}

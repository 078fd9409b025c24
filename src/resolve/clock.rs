//! Clock resolution, including the 12-hour ambiguity policy.

use super::helpers::at;
use crate::tag::{ClockFields, Meridiem, PeriodKind};
use chrono::{Days, Duration, NaiveDate, NaiveDateTime};

/// Concretize a clock on a known day.
///
/// Meridiem wins when explicit; otherwise an afternoon-ish period hint
/// pushes an ambiguous hour into the afternoon. Hour 24 rolls over to the
/// next day's midnight.
pub(crate) fn on_day(
    day: NaiveDate,
    c: &ClockFields,
    period_hint: Option<PeriodKind>,
) -> Option<NaiveDateTime> {
    let mut day = day;
    let mut hour = c.hour;

    match c.meridiem {
        Some(Meridiem::Pm) => {
            if hour < 12 {
                hour += 12;
            }
        }
        Some(Meridiem::Am) => {
            if hour == 12 {
                hour = 0;
            }
        }
        None => {
            if let Some(kind) = period_hint {
                if kind.is_pm() && hour <= 12 {
                    hour += 12;
                } else if kind == PeriodKind::Noon && hour < 11 {
                    hour += 12;
                }
            }
        }
    }

    if hour >= 24 {
        hour -= 24;
        day = day.checked_add_days(Days::new(1))?;
    }
    at(day, hour, c.minute, c.second.unwrap_or(0))
}

/// A clock with no date anchor and no meridiem is ambiguous: take the next
/// future occurrence after the base when it lies within 12 hours, else keep
/// the base day's reading.
pub(crate) fn resolve_bare(c: &ClockFields, base: NaiveDateTime) -> Option<NaiveDateTime> {
    if c.meridiem.is_some() || c.hour > 12 {
        return on_day(base.date(), c, None);
    }

    let today = on_day(base.date(), c, None)?;
    let candidates = [
        today,
        at(base.date(), (c.hour + 12) % 24, c.minute, c.second.unwrap_or(0))?,
        today.checked_add_days(Days::new(1))?,
    ];
    let next = candidates.into_iter().filter(|t| *t >= base).min()?;
    if next - base <= Duration::hours(12) { Some(next) } else { Some(today) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn pm_meridiem_is_explicit() {
        let c = ClockFields { hour: 5, minute: 0, second: None, meridiem: Some(Meridiem::Pm) };
        assert_eq!(on_day(base().date(), &c, None).unwrap().to_string(), "2025-01-21 17:00:00");
    }

    #[test]
    fn ambiguous_hour_prefers_next_occurrence_within_12h() {
        // Base 08:00; "3点" resolves to 15:00 the same day.
        let c = ClockFields { hour: 3, minute: 0, second: None, meridiem: None };
        assert_eq!(resolve_bare(&c, base()).unwrap().to_string(), "2025-01-21 15:00:00");
        // "9点" is still ahead this morning.
        let c = ClockFields { hour: 9, minute: 30, second: None, meridiem: None };
        assert_eq!(resolve_bare(&c, base()).unwrap().to_string(), "2025-01-21 09:30:00");
    }

    #[test]
    fn period_hint_disambiguates() {
        let c = ClockFields { hour: 5, minute: 0, second: None, meridiem: None };
        assert_eq!(
            on_day(base().date(), &c, Some(PeriodKind::Afternoon)).unwrap().to_string(),
            "2025-01-21 17:00:00"
        );
        let c = ClockFields { hour: 1, minute: 0, second: None, meridiem: None };
        assert_eq!(
            on_day(base().date(), &c, Some(PeriodKind::Noon)).unwrap().to_string(),
            "2025-01-21 13:00:00"
        );
    }

    #[test]
    fn hour_24_rolls_over() {
        let c = ClockFields { hour: 24, minute: 0, second: None, meridiem: None };
        assert_eq!(on_day(base().date(), &c, None).unwrap().to_string(), "2025-01-22 00:00:00");
    }
}

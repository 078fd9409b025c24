//! Tag model and the bracketed wire format.
//!
//! Rule fragments emit tags as bracketed strings, `family { key: "value" … }`,
//! which is the markup the tagging grammar writes into its output lattice.
//! The postprocessor parses those strings back into the typed [`Tag`] records
//! consumed by the resolvers and the context merger.
//!
//! Keeping the string stage explicit (instead of emitting typed values
//! directly from the fragments) keeps the grammar side purely declarative and
//! makes the wire format testable on its own.

use crate::Span;
use crate::calendar::{Festival, SolarTerm};
use std::fmt;

/// A typed, positioned tag produced by the grammar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tag {
    /// Span in the original input.
    pub span: Span,
    /// Span in the preprocessed text; the merger uses it for adjacency.
    pub pspan: Span,
    /// Name of the rule fragment that emitted this tag.
    pub rule: &'static str,
    /// Priority weight of the emitting fragment (lower wins).
    pub weight: f32,
    pub kind: TagKind,
}

/// Tag families and their payloads.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagKind {
    /// Fully or partially specified absolute date, optionally with a clock.
    Utc(DateFields),
    /// Bare clock time with no date anchor.
    Clock(ClockFields),
    /// Relative reference: signed offsets per calendar unit.
    Rel(RelFields),
    /// Weekday reference with an optional modifier.
    Week(WeekFields),
    /// Named part of day.
    Period(PeriodFields),
    /// Named holiday or solar term.
    Holiday(HolidayFields),
    /// Lunar-calendar date.
    Lunar(LunarFields),
    /// Signed amount + unit offset from the base instant.
    Delta(DeltaFields),
    /// "从" / "from" / "between" — start of a range follows.
    RangeOpen,
    /// "到" / "to" / "and" — separates range endpoints. Weak separators
    /// ("和", "and") only pair endpoints inside an opened or closed range.
    RangeSep { weak: bool },
    /// Explicit range terminator ("之间").
    RangeClose,
    Century(CenturyFields),
    Decade(DecadeFields),
    /// Recurring expression; resolves to its next representative occurrence.
    Recur(RecurFields),
    /// Standalone ordinal ("第3个").
    Ordinal(u32),
    /// Disambiguation guard: suppresses its span from extraction.
    Noise,
}

impl TagKind {
    pub fn family(&self) -> &'static str {
        match self {
            TagKind::Utc(_) => "utc",
            TagKind::Clock(_) => "clock",
            TagKind::Rel(_) => "rel",
            TagKind::Week(_) => "week",
            TagKind::Period(_) => "period",
            TagKind::Holiday(_) => "holiday",
            TagKind::Lunar(_) => "lunar",
            TagKind::Delta(_) => "delta",
            TagKind::RangeOpen => "range_open",
            TagKind::RangeSep { .. } => "range_sep",
            TagKind::RangeClose => "range_close",
            TagKind::Century(_) => "century",
            TagKind::Decade(_) => "decade",
            TagKind::Recur(_) => "recur",
            TagKind::Ordinal(_) => "ordinal",
            TagKind::Noise => "noise",
        }
    }

    /// Specificity rank used by the postprocessor when two candidates cover
    /// the same span. Higher wins.
    pub fn specificity(&self) -> u8 {
        match self {
            TagKind::Noise => 13,
            TagKind::Utc(_) => 12,
            TagKind::Lunar(_) => 11,
            TagKind::Holiday(_) => 10,
            TagKind::Rel(f) if f.clock.is_some() => 9,
            TagKind::Rel(_) => 8,
            TagKind::Week(_) => 7,
            TagKind::Period(_) => 6,
            TagKind::Clock(_) => 5,
            TagKind::Delta(_) => 4,
            TagKind::Century(_) | TagKind::Decade(_) => 3,
            TagKind::Recur(_) => 3,
            _ => 2,
        }
    }

    /// True for families that can anchor a day on their own.
    pub fn is_date_like(&self) -> bool {
        matches!(
            self,
            TagKind::Utc(_)
                | TagKind::Rel(_)
                | TagKind::Week(_)
                | TagKind::Holiday(_)
                | TagKind::Lunar(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ClockFields {
    pub hour: u32,
    pub minute: u32,
    pub second: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DateFields {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub clock: Option<ClockFields>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct RelFields {
    pub offset_year: Option<i32>,
    pub offset_month: Option<i32>,
    pub offset_week: Option<i32>,
    pub offset_day: Option<i32>,
    pub offset_quarter: Option<i32>,
    /// Explicit month under a year offset ("明年三月").
    pub month: Option<u32>,
    /// Explicit day under a month offset ("下个月5号").
    pub day: Option<u32>,
    /// "今年第37周".
    pub week_order: Option<u32>,
    /// "今年第三个月".
    pub month_order: Option<u32>,
    pub period: Option<PeriodKind>,
    pub clock: Option<ClockFields>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct WeekFields {
    /// 1 = Monday … 7 = Sunday; `None` means the whole week.
    pub weekday: Option<u32>,
    pub offset_week: i32,
    pub weekend: bool,
    /// k-th occurrence within the anchoring month.
    pub nth: Option<u32>,
    /// Final occurrence within the anchoring month.
    pub last: bool,
    /// Anchoring month for nth/last ("first tuesday of october").
    pub month: Option<u32>,
    pub period: Option<PeriodKind>,
    pub clock: Option<ClockFields>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PeriodFields {
    pub kind: PeriodKind,
    pub clock: Option<ClockFields>,
}

/// Named parts of day. Hour bounds live in `resolve::period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PeriodKind {
    Daybreak,
    Dawn,
    EarlyMorning,
    Morning,
    Forenoon,
    Noon,
    EarlyAfternoon,
    Afternoon,
    Dusk,
    Evening,
    Night,
    LateNight,
    Midnight,
    FirstHalfNight,
    SecondHalfNight,
}

impl PeriodKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            PeriodKind::Daybreak => "daybreak",
            PeriodKind::Dawn => "dawn",
            PeriodKind::EarlyMorning => "early_morning",
            PeriodKind::Morning => "morning",
            PeriodKind::Forenoon => "forenoon",
            PeriodKind::Noon => "noon",
            PeriodKind::EarlyAfternoon => "early_afternoon",
            PeriodKind::Afternoon => "afternoon",
            PeriodKind::Dusk => "dusk",
            PeriodKind::Evening => "evening",
            PeriodKind::Night => "night",
            PeriodKind::LateNight => "late_night",
            PeriodKind::Midnight => "midnight",
            PeriodKind::FirstHalfNight => "first_half_night",
            PeriodKind::SecondHalfNight => "second_half_night",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "daybreak" => PeriodKind::Daybreak,
            "dawn" => PeriodKind::Dawn,
            "early_morning" => PeriodKind::EarlyMorning,
            "morning" => PeriodKind::Morning,
            "forenoon" => PeriodKind::Forenoon,
            "noon" => PeriodKind::Noon,
            "early_afternoon" => PeriodKind::EarlyAfternoon,
            "afternoon" => PeriodKind::Afternoon,
            "dusk" => PeriodKind::Dusk,
            "evening" => PeriodKind::Evening,
            "night" => PeriodKind::Night,
            "late_night" => PeriodKind::LateNight,
            "midnight" => PeriodKind::Midnight,
            "first_half_night" => PeriodKind::FirstHalfNight,
            "second_half_night" => PeriodKind::SecondHalfNight,
            _ => return None,
        })
    }

    /// Periods that push an ambiguous 12-hour clock into the afternoon.
    pub fn is_pm(&self) -> bool {
        matches!(
            self,
            PeriodKind::EarlyAfternoon
                | PeriodKind::Afternoon
                | PeriodKind::Dusk
                | PeriodKind::Evening
                | PeriodKind::Night
                | PeriodKind::LateNight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct HolidayFields {
    pub festival: Option<Festival>,
    pub solar_term: Option<SolarTerm>,
    pub year: Option<i32>,
    pub offset_year: Option<i32>,
    /// "国庆前一天" = −1, "春节后一天" = +1.
    pub day_offset: i32,
    /// Explicit "next" qualifier ("next christmas").
    pub next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthPeriod {
    Early,
    Mid,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct LunarFields {
    pub year: Option<i32>,
    pub offset_year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub month_period: Option<MonthPeriod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct DeltaFields {
    pub years: Option<i64>,
    pub months: Option<i64>,
    pub weeks: Option<i64>,
    pub days: Option<i64>,
    pub hours: Option<i64>,
    pub minutes: Option<i64>,
    pub seconds: Option<i64>,
    /// +1 = future, −1 = past.
    pub direction: i8,
    pub fuzzy: bool,
    /// "近一年" / "recently": a past bracket ending at the base instant.
    pub recent: bool,
}

impl DeltaFields {
    /// True when the finest unit is a day or coarser.
    pub fn day_granular(&self) -> bool {
        self.hours.is_none() && self.minutes.is_none() && self.seconds.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanQualifier {
    Early,
    Mid,
    Late,
    All,
}

impl SpanQualifier {
    fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "early" => SpanQualifier::Early,
            "mid" => SpanQualifier::Mid,
            "late" => SpanQualifier::Late,
            "all" => SpanQualifier::All,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct CenturyFields {
    /// Ordinal century ("20世纪" = 20, "19th century" = 19).
    pub century: Option<u32>,
    /// Offset from the current century ("上个世纪" = −1).
    pub offset: Option<i32>,
    pub qualifier: Option<SpanQualifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct DecadeFields {
    /// Tens digit decade within a century: 80 for "the 80s".
    pub decade: u32,
    pub century: Option<u32>,
    pub century_offset: Option<i32>,
    pub qualifier: Option<SpanQualifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecurUnit {
    Day,
    Week,
    Month,
    Year,
}

impl RecurUnit {
    fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "day" => RecurUnit::Day,
            "week" => RecurUnit::Week,
            "month" => RecurUnit::Month,
            "year" => RecurUnit::Year,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RecurFields {
    pub unit: RecurUnit,
    pub weekday: Option<u32>,
    pub clock: Option<ClockFields>,
}

// --- Wire format -------------------------------------------------------------

/// Builder for the bracketed wire form emitted by rule fragments.
#[derive(Debug, Clone)]
pub(crate) struct WireTag {
    family: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl WireTag {
    pub fn new(family: &'static str) -> Self {
        WireTag { family, fields: Vec::new() }
    }

    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub fn field_opt(self, key: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn flag(self, key: &'static str, on: bool) -> Self {
        if on { self.field(key, 1) } else { self }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(24 + self.fields.len() * 16);
        out.push_str(self.family);
        out.push_str(" { ");
        for (k, v) in &self.fields {
            out.push_str(k);
            out.push_str(": \"");
            out.push_str(v);
            out.push_str("\" ");
        }
        out.push('}');
        out
    }
}

/// Error raised when an emitted tag string does not parse against the tag
/// schema. Logged and skipped by the postprocessor, never propagated.
#[derive(Debug)]
pub(crate) struct TagParseError(pub String);

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag parse error: {}", self.0)
    }
}

struct Fields<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn get_i32(&self, key: &str) -> Result<Option<i32>, TagParseError> {
        self.get(key)
            .map(|v| v.parse::<i32>().map_err(|_| TagParseError(format!("bad {key}: {v:?}"))))
            .transpose()
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>, TagParseError> {
        self.get(key)
            .map(|v| v.parse::<i64>().map_err(|_| TagParseError(format!("bad {key}: {v:?}"))))
            .transpose()
    }

    fn get_u32(&self, key: &str) -> Result<Option<u32>, TagParseError> {
        self.get(key)
            .map(|v| v.parse::<u32>().map_err(|_| TagParseError(format!("bad {key}: {v:?}"))))
            .transpose()
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("1")
    }
}

/// Parse one bracketed tag string into a typed [`TagKind`].
pub(crate) fn parse_wire(wire: &str) -> Result<TagKind, TagParseError> {
    let open = wire.find('{').ok_or_else(|| TagParseError(format!("no body: {wire:?}")))?;
    let close = wire.rfind('}').ok_or_else(|| TagParseError(format!("no close: {wire:?}")))?;
    let family = wire[..open].trim();
    let body = &wire[open + 1..close];

    let kv = regex!(r#"(\w+)\s*:\s*"([^"]*)""#);
    let pairs = kv
        .captures_iter(body)
        .map(|c| {
            let k = c.get(1).unwrap().as_str();
            let v = c.get(2).unwrap().as_str();
            (k, v)
        })
        .collect();
    let f = Fields { pairs };

    let clock = parse_clock(&f)?;

    match family {
        "utc" => Ok(TagKind::Utc(DateFields {
            year: f.get_i32("year")?,
            month: f.get_u32("month")?,
            day: f.get_u32("day")?,
            clock,
        })),
        "clock" => {
            let clock = clock.ok_or_else(|| TagParseError("clock without hour".into()))?;
            Ok(TagKind::Clock(clock))
        }
        "rel" => Ok(TagKind::Rel(RelFields {
            offset_year: f.get_i32("offset_year")?,
            offset_month: f.get_i32("offset_month")?,
            offset_week: f.get_i32("offset_week")?,
            offset_day: f.get_i32("offset_day")?,
            offset_quarter: f.get_i32("offset_quarter")?,
            month: f.get_u32("month")?,
            day: f.get_u32("day")?,
            week_order: f.get_u32("week_order")?,
            month_order: f.get_u32("month_order")?,
            period: parse_period_kind(&f)?,
            clock,
        })),
        "week" => Ok(TagKind::Week(WeekFields {
            weekday: f.get_u32("week_day")?,
            offset_week: f.get_i32("offset_week")?.unwrap_or(0),
            weekend: f.flag("weekend"),
            nth: f.get_u32("nth")?,
            last: f.flag("last"),
            month: f.get_u32("month")?,
            period: parse_period_kind(&f)?,
            clock,
        })),
        "period" => {
            let kind = parse_period_kind(&f)?
                .ok_or_else(|| TagParseError("period without kind".into()))?;
            Ok(TagKind::Period(PeriodFields { kind, clock }))
        }
        "holiday" => {
            let festival = f
                .get("festival")
                .map(|v| {
                    Festival::from_id(v).ok_or_else(|| TagParseError(format!("unknown festival {v:?}")))
                })
                .transpose()?;
            let solar_term = f
                .get("solar_term")
                .map(|v| {
                    SolarTerm::from_id(v)
                        .ok_or_else(|| TagParseError(format!("unknown solar term {v:?}")))
                })
                .transpose()?;
            if festival.is_none() && solar_term.is_none() {
                return Err(TagParseError("holiday without id".into()));
            }
            Ok(TagKind::Holiday(HolidayFields {
                festival,
                solar_term,
                year: f.get_i32("year")?,
                offset_year: f.get_i32("offset_year")?,
                day_offset: f.get_i32("day_offset")?.unwrap_or(0),
                next: f.flag("next"),
            }))
        }
        "lunar" => Ok(TagKind::Lunar(LunarFields {
            year: f.get_i32("lunar_year")?,
            offset_year: f.get_i32("offset_year")?,
            month: f.get_u32("lunar_month")?,
            day: f.get_u32("lunar_day")?,
            month_period: match f.get("month_period") {
                None => None,
                Some("early") => Some(MonthPeriod::Early),
                Some("mid") => Some(MonthPeriod::Mid),
                Some("late") => Some(MonthPeriod::Late),
                Some(v) => return Err(TagParseError(format!("bad month_period: {v:?}"))),
            },
        })),
        "delta" => Ok(TagKind::Delta(DeltaFields {
            years: f.get_i64("year")?,
            months: f.get_i64("month")?,
            weeks: f.get_i64("week")?,
            days: f.get_i64("day")?,
            hours: f.get_i64("hour")?,
            minutes: f.get_i64("minute")?,
            seconds: f.get_i64("second")?,
            direction: match f.get("direction") {
                Some("-1") => -1,
                _ => 1,
            },
            fuzzy: f.flag("fuzzy"),
            recent: f.flag("recent"),
        })),
        "range_open" => Ok(TagKind::RangeOpen),
        "range_sep" => Ok(TagKind::RangeSep { weak: f.flag("weak") }),
        "range_close" => Ok(TagKind::RangeClose),
        "century" => Ok(TagKind::Century(CenturyFields {
            century: f.get_u32("century")?,
            offset: f.get_i32("offset")?,
            qualifier: parse_qualifier(&f)?,
        })),
        "decade" => Ok(TagKind::Decade(DecadeFields {
            decade: f
                .get_u32("decade")?
                .ok_or_else(|| TagParseError("decade without value".into()))?,
            century: f.get_u32("century")?,
            century_offset: f.get_i32("century_offset")?,
            qualifier: parse_qualifier(&f)?,
        })),
        "recur" => {
            let unit = f
                .get("unit")
                .and_then(RecurUnit::from_wire)
                .ok_or_else(|| TagParseError("recur without unit".into()))?;
            Ok(TagKind::Recur(RecurFields { unit, weekday: f.get_u32("week_day")?, clock }))
        }
        "ordinal" => {
            let n = f
                .get_u32("value")?
                .ok_or_else(|| TagParseError("ordinal without value".into()))?;
            Ok(TagKind::Ordinal(n))
        }
        "noise" => Ok(TagKind::Noise),
        other => Err(TagParseError(format!("unknown family {other:?}"))),
    }
}

fn parse_clock(f: &Fields<'_>) -> Result<Option<ClockFields>, TagParseError> {
    let Some(hour) = f.get_u32("hour")? else {
        return Ok(None);
    };
    Ok(Some(ClockFields {
        hour,
        minute: f.get_u32("minute")?.unwrap_or(0),
        second: f.get_u32("second")?,
        meridiem: match f.get("meridiem") {
            None => None,
            Some("am") => Some(Meridiem::Am),
            Some("pm") => Some(Meridiem::Pm),
            Some(v) => return Err(TagParseError(format!("bad meridiem: {v:?}"))),
        },
    }))
}

fn parse_period_kind(f: &Fields<'_>) -> Result<Option<PeriodKind>, TagParseError> {
    match f.get("period") {
        None => Ok(None),
        Some(v) => PeriodKind::from_wire(v)
            .map(Some)
            .ok_or_else(|| TagParseError(format!("unknown period {v:?}"))),
    }
}

fn parse_qualifier(f: &Fields<'_>) -> Result<Option<SpanQualifier>, TagParseError> {
    match f.get("qualifier") {
        None => Ok(None),
        Some(v) => SpanQualifier::from_wire(v)
            .map(Some)
            .ok_or_else(|| TagParseError(format!("unknown qualifier {v:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip_rel() {
        let wire = WireTag::new("rel")
            .field("offset_day", 1)
            .field("period", PeriodKind::Forenoon.as_wire())
            .field("hour", 9)
            .render();
        assert_eq!(wire, r#"rel { offset_day: "1" period: "forenoon" hour: "9" }"#);

        let kind = parse_wire(&wire).unwrap();
        match kind {
            TagKind::Rel(f) => {
                assert_eq!(f.offset_day, Some(1));
                assert_eq!(f.period, Some(PeriodKind::Forenoon));
                assert_eq!(f.clock.unwrap().hour, 9);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn wire_rejects_unknown_family() {
        assert!(parse_wire(r#"time_bogus { hour: "9" }"#).is_err());
    }

    #[test]
    fn wire_rejects_bad_numbers() {
        assert!(parse_wire(r#"utc { year: "20x5" }"#).is_err());
    }

    #[test]
    fn markers_have_no_fields() {
        assert_eq!(parse_wire("range_open { }").unwrap(), TagKind::RangeOpen);
        assert_eq!(parse_wire("noise { }").unwrap(), TagKind::Noise);
    }
}

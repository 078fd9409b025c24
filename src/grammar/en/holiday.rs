//! Named holidays, with optional next/last qualifiers and explicit years.

use crate::calendar::Festival;
use crate::grammar::fragment::{Fragment, W_HOLIDAY};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![Fragment {
        name: "holiday_festival",
        pattern: regex!(concat!(
            r"\b(?:(next|last|this) )?",
            r"(christmas eve|christmas|new year'?s eve|new year'?s day|new year|thanksgiving day|thanksgiving|",
            r"black friday|halloween|valentine'?s day|easter sunday|easter|good friday|",
            r"independence day|(?:the )?(?:4th|fourth) of july|labor day|memorial day|may day|",
            r"mlk day|martin luther king(?:,? jr\.?)? day|presidents'? day|veterans day|",
            r"mother'?s'? day|father'?s'? day|st\.? patrick'?s day|april fools'? day|earth day)",
            r"(?:,? ([0-9]{4}))?\b",
        )),
        weight: W_HOLIDAY,
        emit: emit_festival,
    }]
}

fn festival_id(name: &str) -> Option<Festival> {
    let name = name.trim_start_matches("the ").replace('\'', "");
    Some(match name.as_str() {
        "christmas" => Festival::Christmas,
        "christmas eve" => Festival::ChristmasEve,
        "new years eve" | "new year eve" => Festival::NewYearsEve,
        "new years day" | "new year" | "new year day" => Festival::NewYearsDay,
        "thanksgiving" | "thanksgiving day" => Festival::Thanksgiving,
        "black friday" => Festival::BlackFriday,
        "halloween" => Festival::Halloween,
        "valentines day" | "valentine day" => Festival::Valentine,
        "easter" | "easter sunday" => Festival::Easter,
        "good friday" => Festival::GoodFriday,
        "independence day" | "4th of july" | "fourth of july" => Festival::IndependenceDay,
        "labor day" => Festival::LaborDayUs,
        "memorial day" => Festival::MemorialDay,
        "may day" => Festival::MayDay,
        "mothers day" | "mother s day" => Festival::MothersDay,
        "fathers day" | "father s day" => Festival::FathersDay,
        "st patricks day" | "st. patricks day" => Festival::StPatricks,
        "april fools day" | "april fool day" => Festival::AprilFools,
        "earth day" => Festival::EarthDay,
        "veterans day" => Festival::VeteransDay,
        _ => {
            if name.starts_with("mlk") || name.starts_with("martin luther king") {
                return Some(Festival::MlkDay);
            }
            if name.starts_with("presidents") {
                return Some(Festival::PresidentsDay);
            }
            return None;
        }
    })
}

fn emit_festival(caps: &Captures<'_>) -> Option<WireTag> {
    let festival = festival_id(caps.get(2)?.as_str())?;
    let mut tag = WireTag::new("holiday")
        .field("festival", festival.as_id())
        .field("day_offset", 0)
        .field_opt("year", caps.get(3).and_then(|y| y.as_str().parse::<i32>().ok()));
    match caps.get(1).map(|m| m.as_str()) {
        Some("next") => tag = tag.flag("next", true),
        Some("last") => tag = tag.field("offset_year", -1),
        _ => {}
    }
    Some(tag)
}

//! Named parts of day.

use super::period_kind;
use crate::grammar::fragment::{Fragment, W_PERIOD};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "period",
            pattern: regex!(concat!(
                r"\b(?:in the |at |this )?",
                r"(early morning|morning|afternoon|evening|night|noon|midday|midnight|dawn|dusk|sunrise|sunset)\b",
            )),
            weight: W_PERIOD,
            emit: emit_period,
        },
    ]
}

fn emit_period(caps: &Captures<'_>) -> Option<WireTag> {
    let kind = period_kind(caps.get(1)?.as_str())?;
    Some(WireTag::new("period").field("period", kind.as_wire()))
}

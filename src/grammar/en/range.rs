//! Range markers: "from A to B", "between A and B", "9:30-11:00".

use crate::grammar::fragment::{Fragment, W_MARKER};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "range_open",
            pattern: regex!(r"\b(from|between|starting)\b"),
            weight: W_MARKER,
            emit: emit_open,
        },
        Fragment {
            name: "range_sep",
            pattern: regex!(r"\b(to|until|till|through)\b|[–—~]|-"),
            weight: W_MARKER,
            emit: emit_sep,
        },
        Fragment {
            name: "range_sep_weak",
            pattern: regex!(r"\band\b"),
            weight: W_MARKER,
            emit: emit_sep_weak,
        },
    ]
}

fn emit_open(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("range_open"))
}

fn emit_sep(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("range_sep"))
}

fn emit_sep_weak(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("range_sep").flag("weak", true))
}

//! Range markers: "从 A 到 B", "A 至 B", "A和B之间".
//!
//! The markers are purely syntactic; the context merger pairs the
//! surrounding expressions into an interval. A marker with nothing to pair
//! is dropped silently.

use crate::grammar::fragment::{Fragment, W_MARKER};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "range_open",
            pattern: regex!("从|介于"),
            weight: W_MARKER,
            emit: emit_open,
        },
        Fragment {
            name: "range_sep",
            pattern: regex!("到|至|~|～|—"),
            weight: W_MARKER,
            emit: emit_sep,
        },
        Fragment {
            name: "range_sep_weak",
            pattern: regex!("和|与"),
            weight: W_MARKER,
            emit: emit_sep_weak,
        },
        Fragment {
            name: "range_close",
            pattern: regex!("之间|期间|之内"),
            weight: W_MARKER,
            emit: emit_close,
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

fn emit_close(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("range_close"))
}

//! Negative disambiguation guards.

use crate::grammar::fragment::{Fragment, W_NOISE};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            // Order numbers, tracking ids, phone numbers.
            name: "noise_digit_run",
            pattern: regex!(r"\b[0-9]{5,}\b"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            // The modal verb, not the month.
            name: "noise_modal_may",
            pattern: regex!(r"\bmay (i|we|you|he|she|it|they|be|have|not|as well)\b"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            // "a second" as in "wait a second" is not a delta.
            name: "noise_wait_a_second",
            pattern: regex!(r"\b(wait|hold on|give me|just) a (second|minute|moment)\b"),
            weight: W_NOISE,
            emit: emit_noise,
        },
    ]
}

fn emit_noise(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("noise"))
}

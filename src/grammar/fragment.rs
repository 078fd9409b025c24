//! Rule fragment type.

use crate::tag::WireTag;
use regex::{Captures, Regex};

/// One declarative grammar rule: a surface pattern plus an emit function
/// producing the bracketed tag body.
///
/// Fragments never look at anything but their own captures; combination
/// across fragments is the context merger's job.
pub(crate) struct Fragment {
    pub name: &'static str,
    /// Static pattern (created via the `regex!` macro).
    pub pattern: &'static Regex,
    /// Priority weight; lower wins on ambiguity between equal spans.
    pub weight: f32,
    /// Maps a match to a tag, or `None` to reject it after inspection.
    pub emit: fn(&Captures<'_>) -> Option<WireTag>,
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("weight", &self.weight)
            .finish()
    }
}

// Weight bands, mirroring the priority order the grammar composition uses:
// guards first, then absolute dates, relative days, ranges, periods, deltas,
// weekdays, range markers, holidays, lunar, recurring, century, bare clocks.
pub(crate) const W_NOISE: f32 = 0.50;
pub(crate) const W_UTC: f32 = 0.90;
pub(crate) const W_REL: f32 = 0.91;
pub(crate) const W_RANGE: f32 = 0.915;
pub(crate) const W_PERIOD: f32 = 0.92;
pub(crate) const W_DELTA: f32 = 0.93;
pub(crate) const W_WEEK: f32 = 0.94;
pub(crate) const W_MARKER: f32 = 0.95;
pub(crate) const W_HOLIDAY: f32 = 0.96;
pub(crate) const W_LUNAR: f32 = 0.97;
pub(crate) const W_RECUR: f32 = 0.98;
pub(crate) const W_CENTURY: f32 = 0.99;
pub(crate) const W_CLOCK: f32 = 1.00;
pub(crate) const W_ORDINAL: f32 = 1.01;

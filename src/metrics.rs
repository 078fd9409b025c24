//! Run timings and process-wide counters.
//!
//! `RunMetrics` is per-call and returned alongside verbose extractions;
//! the counters are global, updated with relaxed atomic increments, and are
//! the only shared mutable state touched during extraction.

use std::sync::OnceLock;
use std::sync::atomic::AtomicU64;
use std::time::Duration;

/// Stage-by-stage timing for one `extract` call.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub total: Duration,
    pub preprocess: Duration,
    pub tagging: Duration,
    pub resolve: Duration,
    /// Tags surviving postprocessing.
    pub tags_emitted: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub extractions: AtomicU64,
    pub tag_parse_failures: AtomicU64,
    pub dropped_out_of_range: AtomicU64,
}

pub(crate) fn counters() -> &'static Counters {
    static COUNTERS: OnceLock<Counters> = OnceLock::new();
    COUNTERS.get_or_init(Counters::default)
}

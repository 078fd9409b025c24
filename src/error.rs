//! Error types for extraction operations.

use thiserror::Error;

/// Construction-time failures.
///
/// These propagate to the caller: an extractor without a compiled grammar is
/// unusable, so nothing is swallowed here.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("grammar load failure: {0}")]
    GrammarLoad(String),

    #[error("cache manifest io: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("cache manifest format: {0}")]
    CacheFormat(#[from] serde_json::Error),
}

/// Failures surfaced by [`crate::Extractor::extract`].
///
/// Malformed *text* never errors (it yields an empty result); only a
/// malformed base instant does.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid base time {0:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidBaseTime(String),
}

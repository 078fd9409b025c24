//! Public API: [`Extractor`] and the `extract` convenience functions.

use crate::error::{BuildError, ExtractError};
use crate::grammar::{self, CompiledGrammar};
use crate::merge;
use crate::metrics::{RunMetrics, counters};
use crate::postprocess;
use crate::preprocess::preprocess;
use crate::resolve::TimeValue;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

const BASE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Supported extraction languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chinese" | "zh" => Ok(Language::Chinese),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unsupported language {other:?} (expected chinese|english)")),
        }
    }
}

/// Constructor options.
#[derive(Debug, Clone, Default)]
pub struct ExtractorOptions {
    /// Directory for the grammar cache manifest.
    pub cache_dir: Option<PathBuf>,
    /// Force recompilation, discarding the registered grammar.
    pub overwrite_cache: bool,
}

/// Coarse classification of the dominant expression kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryTag {
    Absolute,
    Relative,
    Range,
    Holiday,
    Lunar,
    Recurring,
    None,
}

impl std::fmt::Display for QueryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QueryTag::Absolute => "absolute",
            QueryTag::Relative => "relative",
            QueryTag::Range => "range",
            QueryTag::Holiday => "holiday",
            QueryTag::Lunar => "lunar",
            QueryTag::Recurring => "recurring",
            QueryTag::None => "none",
        };
        f.write_str(s)
    }
}

/// One extraction result: a single UTC instant or a `[start, end]` pair,
/// both serialized as `YYYY-MM-DDTHH:MM:SSZ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TimeResult {
    Instant(String),
    Interval(String, String),
}

/// Result of one [`Extractor::extract`] call.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub results: Vec<TimeResult>,
    pub query_tag: QueryTag,
}

/// A compiled, shareable extractor for one language.
///
/// Construction compiles (or fetches) the grammar; afterwards the extractor
/// is immutable and `extract` is reentrant.
pub struct Extractor {
    language: Language,
    grammar: Arc<CompiledGrammar>,
}

impl Extractor {
    pub fn new(language: Language) -> Self {
        Extractor { language, grammar: grammar::grammar_for(language, false) }
    }

    pub fn with_options(language: Language, options: &ExtractorOptions) -> Result<Self, BuildError> {
        let grammar = grammar::grammar_for(language, options.overwrite_cache);
        if let Some(dir) = &options.cache_dir {
            grammar::sync_manifest(&grammar, dir)?;
        }
        Ok(Extractor { language, grammar })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Extract every time expression from `text`.
    ///
    /// `base_time` is an ISO-8601 UTC instant (`YYYY-MM-DDTHH:MM:SSZ`);
    /// absent, the current UTC wall clock is used. Malformed *text* never
    /// errors — it yields an empty result with query tag `none`.
    pub fn extract(
        &self,
        text: &str,
        base_time: Option<&str>,
    ) -> Result<Extraction, ExtractError> {
        self.extract_with_metrics(text, base_time).map(|(extraction, _)| extraction)
    }

    /// Like [`extract`](Self::extract), also returning stage timings.
    pub fn extract_with_metrics(
        &self,
        text: &str,
        base_time: Option<&str>,
    ) -> Result<(Extraction, RunMetrics), ExtractError> {
        let base = match base_time {
            Some(raw) => NaiveDateTime::parse_from_str(raw, BASE_TIME_FORMAT)
                .map_err(|_| ExtractError::InvalidBaseTime(raw.to_string()))?,
            None => Utc::now().naive_utc(),
        };
        Ok(self.run(text, base))
    }

    fn run(&self, text: &str, base: NaiveDateTime) -> (Extraction, RunMetrics) {
        counters().extractions.fetch_add(1, Ordering::Relaxed);
        let total_start = Instant::now();

        let pre_start = Instant::now();
        let pre = preprocess(text, self.language);
        let preprocess_time = pre_start.elapsed();

        let tag_start = Instant::now();
        let raw = grammar::tag_text(&self.grammar, &pre);
        let tags = postprocess::select_tags(raw);
        let tagging = tag_start.elapsed();

        let resolve_start = Instant::now();
        let outcome = merge::merge(&tags, base);
        let resolve = resolve_start.elapsed();

        let extraction = Extraction {
            results: outcome.results.iter().map(format_value).collect(),
            query_tag: outcome.query_tag,
        };
        let metrics = RunMetrics {
            total: total_start.elapsed(),
            preprocess: preprocess_time,
            tagging,
            resolve,
            tags_emitted: tags.len(),
        };
        (extraction, metrics)
    }
}

fn format_value(value: &TimeValue) -> TimeResult {
    match value {
        TimeValue::Instant(t) => TimeResult::Instant(t.format(BASE_TIME_FORMAT).to_string()),
        TimeValue::Interval { start, end } => TimeResult::Interval(
            start.format(BASE_TIME_FORMAT).to_string(),
            end.format(BASE_TIME_FORMAT).to_string(),
        ),
    }
}

/// Extract with the current UTC wall clock as the base.
pub fn extract(text: &str, language: Language) -> Extraction {
    // The base is generated, not parsed, so this cannot fail.
    Extractor::new(language).extract(text, None).expect("wall-clock base is always valid")
}

/// Extract against an explicit base instant.
pub fn extract_with(
    text: &str,
    base_time: &str,
    language: Language,
) -> Result<Extraction, ExtractError> {
    Extractor::new(language).extract(text, Some(base_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "2025-01-21T08:00:00Z";

    #[test]
    fn invalid_base_time_fails_fast() {
        let ex = Extractor::new(Language::Chinese);
        let err = ex.extract("明天", Some("2025-01-21 08:00:00")).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidBaseTime(_)));
    }

    #[test]
    fn empty_text_yields_none() {
        let ex = Extractor::new(Language::Chinese);
        let out = ex.extract("", Some(BASE)).unwrap();
        assert!(out.results.is_empty());
        assert_eq!(out.query_tag, QueryTag::None);
    }

    #[test]
    fn extraction_serializes_to_the_wire_shape() {
        let ex = Extractor::new(Language::Chinese);
        let out = ex.extract("明天上午9点", Some(BASE)).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"{"results":["2025-01-22T09:00:00Z"],"query_tag":"relative"}"#);
    }

    #[test]
    fn metrics_cover_the_stages() {
        let ex = Extractor::new(Language::English);
        let (_, metrics) = ex.extract_with_metrics("tomorrow 5pm", Some(BASE)).unwrap();
        assert!(metrics.total >= metrics.tagging);
        assert!(metrics.tags_emitted > 0);
    }

    #[test]
    fn extractor_is_shareable_across_threads() {
        let ex = std::sync::Arc::new(Extractor::new(Language::English));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ex = ex.clone();
                std::thread::spawn(move || ex.extract("tomorrow", Some(BASE)).unwrap())
            })
            .collect();
        for h in handles {
            let out = h.join().unwrap();
            assert_eq!(out.query_tag, QueryTag::Relative);
        }
    }
}

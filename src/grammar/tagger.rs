//! Tag application: run every fragment over the preprocessed text and
//! collect candidate matches.
//!
//! Cover selection (dropping overlapping and dominated candidates) is the
//! postprocessor's job; the tagger only gathers raw material. Spans are
//! mapped back to original-text offsets here so everything downstream talks
//! about the caller's string.

use super::compile::CompiledGrammar;
use crate::Span;
use crate::preprocess::Preprocessed;
use tracing::trace;

/// One candidate match prior to parsing and cover selection.
#[derive(Debug, Clone)]
pub(crate) struct RawMatch {
    /// Span in the original input.
    pub span: Span,
    /// Span in the preprocessed text (used for adjacency checks).
    pub pspan: Span,
    pub weight: f32,
    pub rule: &'static str,
    pub wire: String,
}

pub(crate) fn tag_text(grammar: &CompiledGrammar, pre: &Preprocessed) -> Vec<RawMatch> {
    let mut out = Vec::new();
    if pre.text.is_empty() {
        return out;
    }

    for frag in &grammar.fragments {
        for caps in frag.pattern.captures_iter(&pre.text) {
            let m = caps.get(0).unwrap();
            if m.start() == m.end() {
                continue;
            }
            let Some(tag) = (frag.emit)(&caps) else {
                continue;
            };
            let wire = tag.render();
            trace!(rule = frag.name, start = m.start(), end = m.end(), %wire, "fragment match");
            out.push(RawMatch {
                span: pre.map_span(m.start(), m.end()),
                pspan: Span { start: m.start(), end: m.end() },
                weight: frag.weight,
                rule: frag.name,
                wire,
            });
        }
    }
    out
}

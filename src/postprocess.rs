//! Tag postprocessing: parse the emitted wire strings, suppress NOISE
//! spans, and pick a single best non-overlapping cover.
//!
//! Candidate ordering favors longer spans, then family specificity, then
//! the fragment weight, then the leftmost match; accepted spans are locked
//! so later candidates cannot overlap them. Filtering happens after parsing
//! so a malformed emission can be skipped without disturbing the cover.

use crate::grammar::RawMatch;
use crate::metrics::counters;
use crate::tag::{Tag, TagKind, parse_wire};
use tracing::warn;

/// Turn raw fragment matches into the final ordered, non-overlapping tag
/// sequence.
pub(crate) fn select_tags(raw: Vec<RawMatch>) -> Vec<Tag> {
    let mut candidates: Vec<Tag> = Vec::with_capacity(raw.len());
    for m in raw {
        match parse_wire(&m.wire) {
            Ok(kind) => candidates.push(Tag {
                span: m.span,
                pspan: m.pspan,
                rule: m.rule,
                weight: m.weight,
                kind,
            }),
            Err(err) => {
                counters().tag_parse_failures.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                warn!(rule = m.rule, wire = %m.wire, %err, "skipping unparseable tag");
            }
        }
    }

    // A NOISE match suppresses every candidate lying entirely inside it,
    // regardless of how the cover would otherwise fall.
    let noise_spans: Vec<crate::Span> = candidates
        .iter()
        .filter(|t| matches!(t.kind, TagKind::Noise))
        .map(|t| t.pspan)
        .collect();
    candidates.retain(|t| {
        matches!(t.kind, TagKind::Noise) || !noise_spans.iter().any(|n| n.contains(&t.pspan))
    });

    // Longer first, then specificity, then lower weight, then leftmost.
    candidates.sort_by(|a, b| {
        b.pspan
            .len()
            .cmp(&a.pspan.len())
            .then(b.kind.specificity().cmp(&a.kind.specificity()))
            .then(a.weight.total_cmp(&b.weight))
            .then(a.pspan.start.cmp(&b.pspan.start))
    });

    let mut accepted: Vec<Tag> = Vec::new();
    for cand in candidates {
        if accepted.iter().any(|t| t.pspan.overlaps(&cand.pspan)) {
            continue;
        }
        accepted.push(cand);
    }

    // NOISE did its job during selection; it never reaches the merger.
    accepted.retain(|t| !matches!(t.kind, TagKind::Noise));
    accepted.sort_by_key(|t| (t.pspan.start, t.pspan.end));
    for t in &accepted {
        tracing::trace!(
            family = t.kind.family(),
            rule = t.rule,
            start = t.span.start,
            end = t.span.end,
            "tag emitted"
        );
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;
    use crate::grammar::RawMatch;

    fn raw(start: usize, end: usize, weight: f32, wire: &str) -> RawMatch {
        RawMatch {
            span: Span { start, end },
            pspan: Span { start, end },
            weight,
            rule: "test",
            wire: wire.to_string(),
        }
    }

    #[test]
    fn longer_match_wins() {
        let tags = select_tags(vec![
            raw(0, 4, 1.0, r#"clock { hour: "9" }"#),
            raw(0, 10, 0.91, r#"rel { offset_day: "1" hour: "9" }"#),
        ]);
        assert_eq!(tags.len(), 1);
        assert!(matches!(tags[0].kind, TagKind::Rel(_)));
    }

    #[test]
    fn noise_suppresses_contained_tags() {
        let tags = select_tags(vec![
            raw(0, 9, 0.5, "noise { }"),
            raw(3, 9, 1.0, r#"clock { hour: "1" }"#),
        ]);
        assert!(tags.is_empty());
    }

    #[test]
    fn unparseable_wire_is_skipped() {
        let tags = select_tags(vec![
            raw(0, 4, 1.0, "garbage"),
            raw(6, 10, 1.0, r#"clock { hour: "9" }"#),
        ]);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn result_is_sorted_and_disjoint() {
        let tags = select_tags(vec![
            raw(10, 16, 0.92, r#"period { period: "afternoon" }"#),
            raw(0, 6, 0.91, r#"rel { offset_day: "1" }"#),
        ]);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].pspan.start < tags[1].pspan.start);
    }
}

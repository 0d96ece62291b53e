use cardex_protocol::SearchResult;
use std::cmp::Ordering;

/// Final ordering across heterogeneous result types: relevance score
/// descending, ties broken by fixed entity-type priority
/// (card > player > team > series).
pub struct RelevanceRanker;

impl RelevanceRanker {
    #[must_use]
    pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.entity_type.priority().cmp(&a.entity_type.priority()))
        });
        results
    }
}

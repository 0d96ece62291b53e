use cardex_protocol::{EntityType, SearchResult};
use std::collections::HashSet;

/// Drops repeat `(entity type, id)` hits, keeping the first occurrence.
///
/// Stability matters: upstream concatenation is already in strategy-priority
/// order, so the first sighting of a key is the one the higher-priority
/// strategy produced, regardless of score.
pub struct Deduplicator;

impl Deduplicator {
    #[must_use]
    pub fn dedupe(results: Vec<SearchResult>) -> Vec<SearchResult> {
        let mut seen: HashSet<(EntityType, String)> = HashSet::with_capacity(results.len());
        results
            .into_iter()
            .filter(|result| seen.insert((result.entity_type, result.id.clone())))
            .collect()
    }
}

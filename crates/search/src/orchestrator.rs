use crate::config::SearchConfig;
use crate::dedupe::Deduplicator;
use crate::error::{Result, SearchError};
use crate::intent::QueryAnalyzer;
use crate::plan::select_strategies;
use crate::rank::RelevanceRanker;
use crate::strategy::{self, StrategyKind};
use cardex_protocol::{SearchCategory, SearchResponse, SearchResult};
use cardex_store::CardStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::Instant;

/// The search entry point: analyzes the query, fans the selected strategies
/// out as concurrent tasks against the injected store, then merges, dedupes,
/// ranks, and truncates.
///
/// Holds no cache or cross-request state; one instance is safe to share
/// across requests.
pub struct SearchOrchestrator {
    store: Arc<dyn CardStore>,
    config: SearchConfig,
}

impl SearchOrchestrator {
    #[must_use]
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn CardStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Runs one search. Queries shorter than two characters after trimming
    /// return an empty response without touching the store.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        category: SearchCategory,
    ) -> Result<SearchResponse> {
        let trimmed = query.trim();
        if trimmed.chars().count() < 2 {
            log::debug!("query '{trimmed}' below minimum length, short-circuiting");
            return Ok(SearchResponse::empty(trimmed));
        }
        // Limit 0 reads as "use the configured default".
        let limit = if limit == 0 { self.config.default_limit } else { limit };

        let intent = QueryAnalyzer::analyze(trimmed);
        log::debug!("query '{trimmed}': intent {intent:?}");

        let plan = select_strategies(category, &intent);
        if plan.is_empty() {
            return Ok(SearchResponse::empty(trimmed));
        }
        let per_strategy_limit = self.config.strategy_limit(limit);

        let mut tasks: JoinSet<(StrategyKind, cardex_store::Result<Vec<SearchResult>>)> =
            JoinSet::new();
        for kind in &plan {
            let kind = *kind;
            let store = Arc::clone(&self.store);
            let intent = intent.clone();
            let raw_query = trimmed.to_string();
            tasks.spawn(async move {
                let outcome =
                    strategy::run(kind, store.as_ref(), &intent, &raw_query, per_strategy_limit)
                        .await;
                (kind, outcome)
            });
        }

        let mut by_kind: HashMap<StrategyKind, Vec<SearchResult>> = HashMap::new();
        let mut unavailable = 0usize;
        let deadline = Instant::now() + self.config.strategy_deadline;

        while !tasks.is_empty() {
            match tokio::time::timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(Ok((kind, Ok(results))))) => {
                    by_kind.insert(kind, results);
                }
                Ok(Some(Ok((kind, Err(err))))) => {
                    // A failing strategy contributes nothing; the others
                    // still answer.
                    log::warn!("strategy {} failed: {err}", kind.name());
                    if err.is_unavailable() {
                        unavailable += 1;
                    }
                }
                Ok(Some(Err(join_err))) => {
                    log::warn!("strategy task aborted: {join_err}");
                }
                Ok(None) => break,
                Err(_) => {
                    log::warn!(
                        "strategy deadline elapsed, dropping {} pending strategies",
                        tasks.len()
                    );
                    tasks.abort_all();
                    break;
                }
            }
        }

        if unavailable == plan.len() {
            return Err(SearchError::StoreUnavailable);
        }

        // Merge in plan order so dedup keeps the higher-priority sighting.
        let mut merged = Vec::new();
        for kind in &plan {
            if let Some(results) = by_kind.remove(kind) {
                merged.extend(results);
            }
        }

        let deduped = Deduplicator::dedupe(merged);
        let mut ranked = RelevanceRanker::rank(deduped);
        ranked.truncate(limit);

        log::debug!("query '{trimmed}': {} results", ranked.len());
        Ok(SearchResponse::new(trimmed, ranked))
    }
}

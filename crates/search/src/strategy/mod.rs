mod cards;
mod players;
mod series;
mod teams;

use crate::intent::DetectedIntent;
use cardex_protocol::SearchResult;
use cardex_store::{CardStore, Result};

/// The six independent retrieval units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    CardNumberPlayer,
    CardNumber,
    CardType,
    Player,
    Team,
    Series,
}

impl StrategyKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CardNumberPlayer => "card_number_player",
            Self::CardNumber => "card_number",
            Self::CardType => "card_type",
            Self::Player => "player",
            Self::Team => "team",
            Self::Series => "series",
        }
    }
}

/// Runs one strategy against the store. Strategies are read-only and
/// independent; the orchestrator fans them out concurrently and handles
/// errors at this boundary.
pub(crate) async fn run(
    kind: StrategyKind,
    store: &dyn CardStore,
    intent: &DetectedIntent,
    raw_query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let results = match kind {
        StrategyKind::CardNumberPlayer => cards::by_number_and_player(store, intent, limit).await?,
        StrategyKind::CardNumber => cards::by_number(store, intent, limit).await?,
        StrategyKind::CardType => cards::by_type(store, intent, limit).await?,
        StrategyKind::Player => players::search(store, raw_query, limit).await?,
        StrategyKind::Team => teams::search(store, raw_query, limit).await?,
        StrategyKind::Series => series::search(store, raw_query, limit).await?,
    };
    log::debug!("strategy {}: {} candidates", kind.name(), results.len());
    Ok(results)
}

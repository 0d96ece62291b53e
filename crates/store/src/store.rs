use crate::error::Result;
use crate::types::{CardRecord, CardTypeFilter, PlayerQuery, PlayerRecord, SeriesRecord, TeamRecord};
use async_trait::async_trait;

/// Read-only lookup surface the search engine requires of its data store.
///
/// Every textual term is a bound parameter of the call; implementations must
/// never splice terms into query text. All matching is case-insensitive
/// substring matching unless stated otherwise.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Cards whose number contains `number`, optionally restricted to cards
    /// whose associated player names contain `player`.
    async fn find_cards_by_number(
        &self,
        number: &str,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>>;

    /// Cards matching ANY flag set in `filter`, optionally restricted by a
    /// player-name substring.
    async fn find_cards_by_type(
        &self,
        filter: CardTypeFilter,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>>;

    /// Players matched over first/last/nickname and concatenated name
    /// variants, ordered by card count descending.
    async fn find_players(&self, query: &PlayerQuery, limit: usize) -> Result<Vec<PlayerRecord>>;

    /// Teams matched over name, city, mascot, or abbreviation.
    async fn find_teams(&self, term: &str, limit: usize) -> Result<Vec<TeamRecord>>;

    /// Series matched over series name, set name, or manufacturer name.
    async fn find_series(&self, term: &str, limit: usize) -> Result<Vec<SeriesRecord>>;
}

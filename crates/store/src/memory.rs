use crate::error::Result;
use crate::store::CardStore;
use crate::types::{
    Catalog, CardRecord, CardTypeFilter, PlayerQuery, PlayerRecord, SeriesRecord, TeamRecord,
};
use async_trait::async_trait;

/// In-memory [`CardStore`] over an owned catalog.
///
/// Used as the test double for the search pipeline and as the backing store
/// for the demo CLI. Matching semantics are the trait's: case-insensitive
/// substring over the documented fields, card-count ordering for players.
pub struct MemoryStore {
    catalog: Catalog,
}

impl MemoryStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        log::info!(
            "MemoryStore loaded: {} cards, {} players, {} teams, {} series",
            catalog.cards.len(),
            catalog.players.len(),
            catalog.teams.len(),
            catalog.series.len()
        );
        Self { catalog }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(Self::new(catalog))
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn card_has_player(card: &CardRecord, player_lower: &str) -> bool {
    card.players.iter().any(|name| contains_ci(name, player_lower))
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn find_cards_by_number(
        &self,
        number: &str,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>> {
        let number_lower = number.to_lowercase();
        let player_lower = player.map(str::to_lowercase);

        let hits: Vec<CardRecord> = self
            .catalog
            .cards
            .iter()
            .filter(|card| contains_ci(&card.card_number, &number_lower))
            .filter(|card| match &player_lower {
                Some(p) => card_has_player(card, p),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn find_cards_by_type(
        &self,
        filter: CardTypeFilter,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>> {
        let player_lower = player.map(str::to_lowercase);

        let hits: Vec<CardRecord> = self
            .catalog
            .cards
            .iter()
            .filter(|card| filter.matches(card))
            .filter(|card| match &player_lower {
                Some(p) => card_has_player(card, p),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn find_players(&self, query: &PlayerQuery, limit: usize) -> Result<Vec<PlayerRecord>> {
        let term_lower = query.term.to_lowercase();
        let split_lower = query
            .split
            .as_ref()
            .map(|(first, last)| (first.to_lowercase(), last.to_lowercase()));

        let mut hits: Vec<PlayerRecord> = self
            .catalog
            .players
            .iter()
            .filter(|player| {
                let field_match = contains_ci(&player.first_name, &term_lower)
                    || contains_ci(&player.last_name, &term_lower)
                    || player
                        .nickname
                        .as_deref()
                        .is_some_and(|nick| contains_ci(nick, &term_lower))
                    || player
                        .name_variants()
                        .iter()
                        .any(|variant| contains_ci(variant, &term_lower));
                let split_match = split_lower.as_ref().is_some_and(|(first, last)| {
                    contains_ci(&player.first_name, first) && contains_ci(&player.last_name, last)
                });
                field_match || split_match
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| b.card_count.cmp(&a.card_count));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn find_teams(&self, term: &str, limit: usize) -> Result<Vec<TeamRecord>> {
        let term_lower = term.to_lowercase();

        let hits: Vec<TeamRecord> = self
            .catalog
            .teams
            .iter()
            .filter(|team| {
                contains_ci(&team.name, &term_lower)
                    || contains_ci(&team.city, &term_lower)
                    || contains_ci(&team.mascot, &term_lower)
                    || contains_ci(&team.abbreviation, &term_lower)
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn find_series(&self, term: &str, limit: usize) -> Result<Vec<SeriesRecord>> {
        let term_lower = term.to_lowercase();

        let hits: Vec<SeriesRecord> = self
            .catalog
            .series
            .iter()
            .filter(|series| {
                contains_ci(&series.name, &term_lower)
                    || series
                        .set_name
                        .as_deref()
                        .is_some_and(|set| contains_ci(set, &term_lower))
                    || series
                        .manufacturer
                        .as_deref()
                        .is_some_and(|m| contains_ci(m, &term_lower))
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(hits)
    }
}

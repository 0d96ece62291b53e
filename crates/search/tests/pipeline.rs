use async_trait::async_trait;
use cardex_protocol::{EntityData, EntityType, SearchCategory};
use cardex_search::{SearchConfig, SearchError, SearchOrchestrator};
use cardex_store::{
    CardRecord, CardStore, CardTypeFilter, Catalog, MemoryStore, PlayerQuery, PlayerRecord,
    SeriesRecord, StoreError, TeamRecord,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn card(id: i64, number: &str, player: &str) -> CardRecord {
    CardRecord {
        id,
        card_number: number.to_string(),
        year: Some(2011),
        players: vec![player.to_string()],
        series_name: Some("Update".to_string()),
        set_name: Some("Topps Update".to_string()),
        manufacturer: Some("Topps".to_string()),
        is_rookie: false,
        is_autograph: false,
        is_relic: false,
        parallel: None,
    }
}

fn player(id: i64, first: &str, last: &str, card_count: u32) -> PlayerRecord {
    PlayerRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        nickname: None,
        is_hall_of_fame: false,
        card_count,
    }
}

fn fixture_catalog() -> Catalog {
    Catalog {
        cards: vec![
            card(1, "108", "Justin Bieber"),
            card(2, "1089", "Buster Posey"),
            CardRecord {
                is_rookie: true,
                ..card(3, "RC-1", "Mike Trout")
            },
            CardRecord {
                is_rookie: true,
                ..card(4, "US175", "Mike Trout")
            },
        ],
        players: vec![
            player(10, "Mike", "Trout", 1874),
            player(11, "Mike", "Troutman", 12),
        ],
        teams: vec![TeamRecord {
            id: 20,
            name: "Yankees".to_string(),
            city: "New York".to_string(),
            mascot: "Bronx Bombers".to_string(),
            abbreviation: "NYY".to_string(),
            card_count: 5400,
        }],
        series: vec![SeriesRecord {
            id: 30,
            name: "Update".to_string(),
            set_name: Some("Topps Update".to_string()),
            manufacturer: Some("Topps".to_string()),
            year: Some(2011),
        }],
    }
}

fn orchestrator() -> SearchOrchestrator {
    SearchOrchestrator::new(Arc::new(MemoryStore::new(fixture_catalog())))
}

#[tokio::test]
async fn short_queries_return_empty_without_store_contact() {
    let store = Arc::new(CountingStore::default());
    let engine = SearchOrchestrator::new(store.clone());

    for query in ["", " ", "a", " b "] {
        let response = engine
            .search(query, 50, SearchCategory::All)
            .await
            .unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
    }
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn number_plus_player_uses_combo_strategy() {
    let response = orchestrator()
        .search("108 bieber", 50, SearchCategory::All)
        .await
        .unwrap();

    // Card 2 ("1089", Posey) would match a plain number lookup; the combo
    // strategy must exclude it.
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].id, "1");
    assert_eq!(response.results[0].entity_type, EntityType::Card);
    assert_eq!(response.results[0].relevance_score, 95.0);
}

#[tokio::test]
async fn bare_number_scores_exact_above_contains() {
    let response = orchestrator()
        .search("108", 50, SearchCategory::All)
        .await
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].id, "1");
    assert_eq!(response.results[0].relevance_score, 100.0);
    assert_eq!(response.results[1].id, "2");
    assert_eq!(response.results[1].relevance_score, 80.0);
}

#[tokio::test]
async fn rookie_keyword_returns_only_rookie_cards() {
    let response = orchestrator()
        .search("rookie trout", 50, SearchCategory::Cards)
        .await
        .unwrap();

    assert!(!response.results.is_empty());
    for result in &response.results {
        match &result.data {
            EntityData::Card(data) => assert!(data.is_rookie),
            other => panic!("expected card payload, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn duplicate_hits_collapse_to_first_strategy() {
    // "RC-1" is both an exact card number and (via the "rc" substring) a
    // rookie-type query, so card 3 comes back from two strategies.
    let response = orchestrator()
        .search("RC-1", 50, SearchCategory::Cards)
        .await
        .unwrap();

    let hits: Vec<_> = response.results.iter().filter(|r| r.id == "3").collect();
    assert_eq!(hits.len(), 1);
    // The number strategy ran first, so its exact-match score survives.
    assert_eq!(hits[0].relevance_score, 100.0);
}

#[tokio::test]
async fn equal_scores_order_by_type_priority() {
    let store = MemoryStore::new(Catalog {
        players: vec![player(40, "Joe", "Millerton", 10)],
        teams: vec![TeamRecord {
            id: 41,
            name: "Millers".to_string(),
            city: "Duluth".to_string(),
            mascot: "Mill".to_string(),
            abbreviation: "DUL".to_string(),
            card_count: 12,
        }],
        series: vec![SeriesRecord {
            id: 42,
            name: "Miller Signatures".to_string(),
            set_name: None,
            manufacturer: None,
            year: None,
        }],
        ..Catalog::default()
    });
    let engine = SearchOrchestrator::new(Arc::new(store));

    let response = engine
        .search("miller", 50, SearchCategory::All)
        .await
        .unwrap();

    // Player 75 (contains), team 75 (name contains), series 75 (flat).
    assert_eq!(response.results.len(), 3);
    assert!(response.results.iter().all(|r| r.relevance_score == 75.0));
    let kinds: Vec<EntityType> = response.results.iter().map(|r| r.entity_type).collect();
    assert_eq!(
        kinds,
        vec![EntityType::Player, EntityType::Team, EntityType::Series]
    );
}

#[tokio::test]
async fn player_exact_match_outscores_contains() {
    let response = orchestrator()
        .search("Mike Trout", 50, SearchCategory::Players)
        .await
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].title, "Mike Trout");
    // 50 base + 40 exact + 5 large catalog.
    assert_eq!(response.results[0].relevance_score, 95.0);
    assert_eq!(response.results[1].title, "Mike Troutman");
    assert_eq!(response.results[1].relevance_score, 75.0);
}

#[tokio::test]
async fn limit_truncates_ranked_results() {
    let players = (0..20)
        .map(|i| player(100 + i, "Sam", &format!("Smith{i}"), 1200 - i as u32))
        .collect();
    let engine = SearchOrchestrator::new(Arc::new(MemoryStore::new(Catalog {
        players,
        ..Catalog::default()
    })));

    let response = engine
        .search("smith", 5, SearchCategory::Players)
        .await
        .unwrap();

    assert_eq!(response.results.len(), 5);
    assert_eq!(response.total_results, 5);
    for pair in response.results.windows(2) {
        assert!(pair[0].relevance_score >= pair[1].relevance_score);
    }
}

#[tokio::test]
async fn response_echoes_trimmed_query() {
    let response = orchestrator()
        .search("  108  ", 50, SearchCategory::All)
        .await
        .unwrap();
    assert_eq!(response.query, "108");
    assert_eq!(response.total_results, response.results.len());
}

#[tokio::test]
async fn one_failing_strategy_yields_partial_results() {
    let store = Arc::new(FlakyStore {
        inner: MemoryStore::new(fixture_catalog()),
    });
    let engine = SearchOrchestrator::new(store);

    let response = engine
        .search("yankees", 50, SearchCategory::All)
        .await
        .unwrap();

    // Players failed, teams still answered.
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].entity_type, EntityType::Team);
}

#[tokio::test]
async fn fully_unreachable_store_surfaces_as_unavailable() {
    let engine = SearchOrchestrator::new(Arc::new(DownStore));
    let err = engine
        .search("trout", 50, SearchCategory::All)
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable));
}

#[tokio::test(start_paused = true)]
async fn slow_strategy_is_dropped_at_the_deadline() {
    let store = Arc::new(StallingTeamsStore {
        inner: MemoryStore::new(fixture_catalog()),
    });
    let config = SearchConfig {
        strategy_deadline: Duration::from_millis(100),
        ..SearchConfig::default()
    };
    let engine = SearchOrchestrator::with_config(store, config);

    let response = engine
        .search("trout", 50, SearchCategory::All)
        .await
        .unwrap();

    // Teams never answered; player hits still came back.
    assert!(response
        .results
        .iter()
        .any(|r| r.entity_type == EntityType::Player));
    assert!(response
        .results
        .iter()
        .all(|r| r.entity_type != EntityType::Team));
}

// --- store doubles -------------------------------------------------------

#[derive(Default)]
struct CountingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl CardStore for CountingStore {
    async fn find_cards_by_number(
        &self,
        _number: &str,
        _player: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_cards_by_type(
        &self,
        _filter: CardTypeFilter,
        _player: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_players(
        &self,
        _query: &PlayerQuery,
        _limit: usize,
    ) -> Result<Vec<PlayerRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_teams(&self, _term: &str, _limit: usize) -> Result<Vec<TeamRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_series(
        &self,
        _term: &str,
        _limit: usize,
    ) -> Result<Vec<SeriesRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

/// Delegates everything to an inner [`MemoryStore`] except player lookups,
/// which always fail.
struct FlakyStore {
    inner: MemoryStore,
}

#[async_trait]
impl CardStore for FlakyStore {
    async fn find_cards_by_number(
        &self,
        number: &str,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.inner.find_cards_by_number(number, player, limit).await
    }

    async fn find_cards_by_type(
        &self,
        filter: CardTypeFilter,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.inner.find_cards_by_type(filter, player, limit).await
    }

    async fn find_players(
        &self,
        _query: &PlayerQuery,
        _limit: usize,
    ) -> Result<Vec<PlayerRecord>, StoreError> {
        Err(StoreError::Query("player index offline".to_string()))
    }

    async fn find_teams(&self, term: &str, limit: usize) -> Result<Vec<TeamRecord>, StoreError> {
        self.inner.find_teams(term, limit).await
    }

    async fn find_series(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SeriesRecord>, StoreError> {
        self.inner.find_series(term, limit).await
    }
}

/// Every lookup fails as if no connection could be established.
struct DownStore;

#[async_trait]
impl CardStore for DownStore {
    async fn find_cards_by_number(
        &self,
        _number: &str,
        _player: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_cards_by_type(
        &self,
        _filter: CardTypeFilter,
        _player: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_players(
        &self,
        _query: &PlayerQuery,
        _limit: usize,
    ) -> Result<Vec<PlayerRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_teams(&self, _term: &str, _limit: usize) -> Result<Vec<TeamRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_series(
        &self,
        _term: &str,
        _limit: usize,
    ) -> Result<Vec<SeriesRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Team lookups hang forever; everything else delegates.
struct StallingTeamsStore {
    inner: MemoryStore,
}

#[async_trait]
impl CardStore for StallingTeamsStore {
    async fn find_cards_by_number(
        &self,
        number: &str,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.inner.find_cards_by_number(number, player, limit).await
    }

    async fn find_cards_by_type(
        &self,
        filter: CardTypeFilter,
        player: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CardRecord>, StoreError> {
        self.inner.find_cards_by_type(filter, player, limit).await
    }

    async fn find_players(
        &self,
        query: &PlayerQuery,
        limit: usize,
    ) -> Result<Vec<PlayerRecord>, StoreError> {
        self.inner.find_players(query, limit).await
    }

    async fn find_teams(&self, _term: &str, _limit: usize) -> Result<Vec<TeamRecord>, StoreError> {
        std::future::pending::<()>().await;
        unreachable!()
    }

    async fn find_series(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SeriesRecord>, StoreError> {
        self.inner.find_series(term, limit).await
    }
}

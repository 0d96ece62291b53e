use cardex_protocol::{EntityData, PlayerData, SearchResult};
use cardex_store::{CardStore, PlayerQuery, PlayerRecord, Result};

const SCORE_BASE: f32 = 50.0;
const BONUS_FULL_NAME_EXACT: f32 = 40.0;
const BONUS_FULL_NAME_CONTAINS: f32 = 25.0;
const BONUS_FIRST_NAME_EXACT: f32 = 30.0;
const BONUS_LAST_NAME_EXACT: f32 = 30.0;
const BONUS_NICKNAME_EXACT: f32 = 35.0;
const BONUS_HALL_OF_FAME: f32 = 10.0;
const BONUS_LARGE_CATALOG: f32 = 5.0;

/// Player catalog count above which a small popularity bonus applies.
const LARGE_CATALOG_THRESHOLD: u32 = 1000;

pub(crate) async fn search(
    store: &dyn CardStore,
    raw_query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let query = PlayerQuery::from_term(raw_query);
    let players = store.find_players(&query, limit).await?;
    Ok(players
        .into_iter()
        .map(|player| {
            let score = score_player(&player, raw_query);
            to_result(player, score)
        })
        .collect())
}

/// Additive, non-exclusive scoring heuristics. A player can collect the
/// full-name-contains and last-name-exact bonuses at once.
fn score_player(player: &PlayerRecord, query: &str) -> f32 {
    let q = query.trim().to_lowercase();
    let full_name = player.full_name().to_lowercase();

    let mut score = SCORE_BASE;
    if full_name == q {
        score += BONUS_FULL_NAME_EXACT;
    } else if full_name.contains(&q) {
        score += BONUS_FULL_NAME_CONTAINS;
    }
    if player.first_name.to_lowercase() == q {
        score += BONUS_FIRST_NAME_EXACT;
    }
    if player.last_name.to_lowercase() == q {
        score += BONUS_LAST_NAME_EXACT;
    }
    if player
        .nickname
        .as_deref()
        .is_some_and(|nick| nick.to_lowercase() == q)
    {
        score += BONUS_NICKNAME_EXACT;
    }
    if player.is_hall_of_fame {
        score += BONUS_HALL_OF_FAME;
    }
    if player.card_count > LARGE_CATALOG_THRESHOLD {
        score += BONUS_LARGE_CATALOG;
    }
    score
}

fn to_result(player: PlayerRecord, score: f32) -> SearchResult {
    SearchResult::new(
        player.id,
        player.full_name(),
        score,
        EntityData::Player(PlayerData {
            first_name: player.first_name,
            last_name: player.last_name,
            nickname: player.nickname,
            is_hall_of_fame: player.is_hall_of_fame,
            card_count: player.card_count,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(first: &str, last: &str) -> PlayerRecord {
        PlayerRecord {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            nickname: None,
            is_hall_of_fame: false,
            card_count: 0,
        }
    }

    #[test]
    fn exact_full_name_beats_contains() {
        // Two-token query: neither name field equals it alone, so only the
        // full-name bonus applies.
        assert_eq!(score_player(&player("Mike", "Trout"), "Mike Trout"), 90.0);
        assert_eq!(score_player(&player("Mike", "Troutman"), "Mike Trout"), 75.0);
    }

    #[test]
    fn single_token_collects_field_bonuses() {
        // "trout": full name contains it (+25) and last name equals it (+30).
        assert_eq!(score_player(&player("Mike", "Trout"), "trout"), 105.0);
    }

    #[test]
    fn nickname_hof_and_catalog_bonuses_stack() {
        let reggie = PlayerRecord {
            id: 2,
            first_name: "Reggie".to_string(),
            last_name: "Jackson".to_string(),
            nickname: Some("Mr. October".to_string()),
            is_hall_of_fame: true,
            card_count: 1500,
        };
        // 50 base + 35 nickname + 10 HOF + 5 catalog.
        assert_eq!(score_player(&reggie, "mr. october"), 100.0);
    }

    #[tokio::test]
    async fn search_maps_store_hits_to_scored_results() {
        use cardex_store::{Catalog, MemoryStore};

        let store = MemoryStore::new(Catalog {
            players: vec![PlayerRecord {
                id: 10,
                first_name: "Mike".to_string(),
                last_name: "Trout".to_string(),
                nickname: None,
                is_hall_of_fame: false,
                card_count: 1874,
            }],
            ..Catalog::default()
        });

        let results = search(&store, "Mike Trout", 10).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Mike Trout");
        // 50 + 40 exact + 5 catalog.
        assert_eq!(results[0].relevance_score, 95.0);
    }
}

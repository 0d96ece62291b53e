use cardex_protocol::{EntityData, SearchResult, TeamData};
use cardex_store::{CardStore, Result, TeamRecord};

const SCORE_BASE: f32 = 50.0;
const BONUS_ABBREVIATION_EXACT: f32 = 40.0;
const BONUS_NAME_CONTAINS: f32 = 25.0;
const BONUS_CITY_CONTAINS: f32 = 20.0;
const BONUS_MASCOT_CONTAINS: f32 = 20.0;

pub(crate) async fn search(
    store: &dyn CardStore,
    raw_query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let teams = store.find_teams(raw_query.trim(), limit).await?;
    Ok(teams
        .into_iter()
        .map(|team| {
            let score = score_team(&team, raw_query);
            to_result(team, score)
        })
        .collect())
}

fn score_team(team: &TeamRecord, query: &str) -> f32 {
    let q = query.trim().to_lowercase();

    let mut score = SCORE_BASE;
    if team.abbreviation.to_lowercase() == q {
        score += BONUS_ABBREVIATION_EXACT;
    }
    if team.name.to_lowercase().contains(&q) {
        score += BONUS_NAME_CONTAINS;
    }
    if team.city.to_lowercase().contains(&q) {
        score += BONUS_CITY_CONTAINS;
    }
    if team.mascot.to_lowercase().contains(&q) {
        score += BONUS_MASCOT_CONTAINS;
    }
    score
}

fn to_result(team: TeamRecord, score: f32) -> SearchResult {
    SearchResult::new(
        team.id,
        format!("{} {}", team.city, team.name),
        score,
        EntityData::Team(TeamData {
            name: team.name,
            city: team.city,
            mascot: team.mascot,
            abbreviation: team.abbreviation,
            card_count: team.card_count,
        }),
    )
}

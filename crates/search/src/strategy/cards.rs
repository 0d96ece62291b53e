use crate::intent::{CardType, DetectedIntent};
use cardex_protocol::{CardData, EntityData, SearchResult};
use cardex_store::{CardRecord, CardStore, CardTypeFilter, Result};

const SCORE_NUMBER_AND_PLAYER: f32 = 95.0;
const SCORE_NUMBER_EXACT: f32 = 100.0;
const SCORE_NUMBER_PARTIAL: f32 = 80.0;
const SCORE_TYPE_MATCH: f32 = 85.0;

/// Cards whose number contains the detected number AND whose player names
/// contain the trailing text. Runs only on combo intent.
pub(crate) async fn by_number_and_player(
    store: &dyn CardStore,
    intent: &DetectedIntent,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let (Some(number), Some(player)) = (&intent.card_number, &intent.player_name_remainder) else {
        return Ok(Vec::new());
    };

    let cards = store
        .find_cards_by_number(number, Some(player), limit)
        .await?;
    Ok(cards
        .into_iter()
        .map(|card| to_result(card, SCORE_NUMBER_AND_PLAYER))
        .collect())
}

/// Cards whose number contains the detected number. An exact number match
/// outranks a containing one.
pub(crate) async fn by_number(
    store: &dyn CardStore,
    intent: &DetectedIntent,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let Some(number) = &intent.card_number else {
        return Ok(Vec::new());
    };

    let cards = store.find_cards_by_number(number, None, limit).await?;
    Ok(cards
        .into_iter()
        .map(|card| {
            let score = if card.card_number.eq_ignore_ascii_case(number) {
                SCORE_NUMBER_EXACT
            } else {
                SCORE_NUMBER_PARTIAL
            };
            to_result(card, score)
        })
        .collect())
}

/// Cards carrying any of the detected type flags, optionally narrowed by the
/// player-name remainder.
pub(crate) async fn by_type(
    store: &dyn CardStore,
    intent: &DetectedIntent,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let filter = type_filter(intent);
    if filter.is_empty() {
        return Ok(Vec::new());
    }

    let player = intent.player_name_remainder.as_deref();
    let cards = store.find_cards_by_type(filter, player, limit).await?;
    Ok(cards
        .into_iter()
        .map(|card| to_result(card, SCORE_TYPE_MATCH))
        .collect())
}

fn type_filter(intent: &DetectedIntent) -> CardTypeFilter {
    CardTypeFilter {
        rookie: intent.card_types.contains(&CardType::Rookie),
        autograph: intent.card_types.contains(&CardType::Autograph),
        relic: intent.card_types.contains(&CardType::Relic),
        parallel: intent.card_types.contains(&CardType::Parallel),
    }
}

fn to_result(card: CardRecord, score: f32) -> SearchResult {
    SearchResult::new(
        card.id,
        card_title(&card),
        score,
        EntityData::Card(CardData {
            card_number: card.card_number,
            year: card.year,
            players: card.players,
            series_name: card.series_name,
            set_name: card.set_name,
            manufacturer: card.manufacturer,
            is_rookie: card.is_rookie,
            is_autograph: card.is_autograph,
            is_relic: card.is_relic,
            parallel: card.parallel,
        }),
    )
}

fn card_title(card: &CardRecord) -> String {
    let mut title = String::new();
    if let Some(year) = card.year {
        title.push_str(&year.to_string());
        title.push(' ');
    }
    if let Some(set) = &card.set_name {
        title.push_str(set);
        title.push(' ');
    }
    title.push('#');
    title.push_str(&card.card_number);
    if !card.players.is_empty() {
        title.push(' ');
        title.push_str(&card.players.join(", "));
    }
    title
}

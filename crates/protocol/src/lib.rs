use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four searchable record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Card,
    Player,
    Team,
    Series,
}

impl EntityType {
    /// Fixed tie-break priority used when relevance scores are equal.
    /// Higher sorts first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Card => 4,
            Self::Player => 3,
            Self::Team => 2,
            Self::Series => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Player => "player",
            Self::Team => "team",
            Self::Series => "series",
        }
    }
}

/// Caller-requested restriction on which entity types to search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    #[default]
    All,
    Cards,
    Players,
    Teams,
    Series,
}

impl SearchCategory {
    #[must_use]
    pub const fn includes(self, entity: EntityType) -> bool {
        matches!(
            (self, entity),
            (Self::All, _)
                | (Self::Cards, EntityType::Card)
                | (Self::Players, EntityType::Player)
                | (Self::Teams, EntityType::Team)
                | (Self::Series, EntityType::Series)
        )
    }
}

impl std::str::FromStr for SearchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "cards" => Ok(Self::Cards),
            "players" => Ok(Self::Players),
            "teams" => Ok(Self::Teams),
            "series" => Ok(Self::Series),
            other => Err(format!(
                "unknown category '{other}' (expected all|cards|players|teams|series)"
            )),
        }
    }
}

/// Card attributes carried on a card hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub card_number: String,
    pub year: Option<u16>,
    pub players: Vec<String>,
    pub series_name: Option<String>,
    pub set_name: Option<String>,
    pub manufacturer: Option<String>,
    pub is_rookie: bool,
    pub is_autograph: bool,
    pub is_relic: bool,
    pub parallel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub is_hall_of_fame: bool,
    pub card_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub name: String,
    pub city: String,
    pub mascot: String,
    pub abbreviation: String,
    pub card_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub name: String,
    pub set_name: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<u16>,
}

/// Entity-specific payload. The top-level `type` field on [`SearchResult`]
/// already discriminates, so the union serializes untagged; each variant has
/// required fields the others lack, which keeps deserialization unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EntityData {
    Card(CardData),
    Player(PlayerData),
    Team(TeamData),
    Series(SeriesData),
}

impl EntityData {
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::Card(_) => EntityType::Card,
            Self::Player(_) => EntityType::Player,
            Self::Team(_) => EntityType::Team,
            Self::Series(_) => EntityType::Series,
        }
    }
}

/// One ranked hit, as served to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub relevance_score: f32,
    pub data: EntityData,
}

impl SearchResult {
    /// Build a result from a store record id. Store ids are wide integers;
    /// they are stringified here so JSON consumers without native 64-bit
    /// integers cannot lose precision.
    #[must_use]
    pub fn new(id: i64, title: String, relevance_score: f32, data: EntityData) -> Self {
        Self {
            entity_type: data.entity_type(),
            id: id.to_string(),
            title,
            subtitle: None,
            description: None,
            relevance_score,
            data,
        }
    }

    /// Identity for deduplication.
    #[must_use]
    pub fn dedupe_key(&self) -> (EntityType, &str) {
        (self.entity_type, self.id.as_str())
    }
}

/// The envelope returned by the search entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
}

impl SearchResponse {
    #[must_use]
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        let total_results = results.len();
        Self {
            query: query.into(),
            results,
            total_results,
        }
    }

    #[must_use]
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

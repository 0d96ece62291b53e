use serde::{Deserialize, Serialize};

/// One card row as returned by the store, joined to its player names and
/// series/set/manufacturer labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: i64,
    pub card_number: String,
    pub year: Option<u16>,
    #[serde(default)]
    pub players: Vec<String>,
    pub series_name: Option<String>,
    pub set_name: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub is_rookie: bool,
    #[serde(default)]
    pub is_autograph: bool,
    #[serde(default)]
    pub is_relic: bool,
    /// Parallels are stored as a named variant; `Some(_)` is what the
    /// boolean "parallel" type filter keys on.
    #[serde(default)]
    pub parallel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    #[serde(default)]
    pub is_hall_of_fame: bool,
    #[serde(default)]
    pub card_count: u32,
}

impl PlayerRecord {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Concatenated display variants a query may be typed against:
    /// "first last", "first nick last", "nick last".
    #[must_use]
    pub fn name_variants(&self) -> Vec<String> {
        let mut variants = vec![self.full_name()];
        if let Some(nick) = &self.nickname {
            variants.push(format!("{} {} {}", self.first_name, nick, self.last_name));
            variants.push(format!("{} {}", nick, self.last_name));
        }
        variants
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub mascot: String,
    pub abbreviation: String,
    #[serde(default)]
    pub card_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub id: i64,
    pub name: String,
    pub set_name: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<u16>,
}

/// OR-combined boolean card-type filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardTypeFilter {
    pub rookie: bool,
    pub autograph: bool,
    pub relic: bool,
    pub parallel: bool,
}

impl CardTypeFilter {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.rookie || self.autograph || self.relic || self.parallel)
    }

    #[must_use]
    pub const fn matches(self, card: &CardRecord) -> bool {
        (self.rookie && card.is_rookie)
            || (self.autograph && card.is_autograph)
            || (self.relic && card.is_relic)
            || (self.parallel && card.parallel.is_some())
    }
}

/// Player lookup terms. `term` is matched as a substring against individual
/// name fields and concatenated variants; `split` carries the
/// first-token-as-first-name reading of multi-token queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub term: String,
    pub split: Option<(String, String)>,
}

impl PlayerQuery {
    #[must_use]
    pub fn from_term(term: &str) -> Self {
        let term = term.trim();
        let mut tokens = term.split_whitespace();
        let split = match tokens.next() {
            Some(first) => {
                let rest = tokens.collect::<Vec<_>>().join(" ");
                if rest.is_empty() {
                    None
                } else {
                    Some((first.to_string(), rest))
                }
            }
            None => None,
        };
        Self {
            term: term.to_string(),
            split,
        }
    }
}

/// A whole searchable catalog, as loaded from JSON by the CLI and by test
/// fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cards: Vec<CardRecord>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub series: Vec<SeriesRecord>,
}

use std::collections::BTreeSet;

/// Card-type keywords a query can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CardType {
    Rookie,
    Autograph,
    Relic,
    Parallel,
}

/// Signals derived from one raw query. Stateless, recomputed per request.
///
/// Invariant: `card_number_with_player` implies `card_number` is set AND
/// `player_name_remainder` is a non-empty trimmed string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedIntent {
    pub card_number: Option<String>,
    pub player_name_remainder: Option<String>,
    pub card_number_with_player: bool,
    pub card_types: BTreeSet<CardType>,
    pub year_hint: Option<u16>,
    pub team_abbreviation_hints: Vec<String>,
}

pub struct QueryAnalyzer;

/// Known team abbreviations, matched as substrings. Currently a weak hint
/// only; ranking does not consume it.
const TEAM_ABBREVIATIONS: &[&str] = &[
    "NYY", "BOS", "LAD", "SFG", "CHC", "STL", "ATL", "HOU", "PHI", "NYM", "SDP", "TBR", "TOR",
    "SEA", "TEX", "MIN", "CLE", "DET", "KCR", "MIL", "OAK", "BAL", "PIT", "CIN", "COL", "ARI",
    "WSN", "MIA", "LAA", "CWS",
];

impl QueryAnalyzer {
    #[must_use]
    pub fn analyze(query: &str) -> DetectedIntent {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return DetectedIntent::default();
        }

        let mut intent = DetectedIntent::default();
        let lower = trimmed.to_lowercase();

        // Leading token as a card number; anything after it reads as a
        // player name.
        if let Some(first) = trimmed.split_whitespace().next() {
            if Self::is_card_number(first) {
                intent.card_number = Some(first.to_string());
                let remainder = trimmed[first.len()..].trim();
                if !remainder.is_empty() {
                    intent.player_name_remainder = Some(remainder.to_string());
                    intent.card_number_with_player = true;
                }
            }
        }

        if lower.contains("rookie") || lower.contains("rc") {
            intent.card_types.insert(CardType::Rookie);
        }
        if lower.contains("autograph") || lower.contains("auto") {
            intent.card_types.insert(CardType::Autograph);
        }
        if lower.contains("relic") || lower.contains("jersey") || lower.contains("patch") {
            intent.card_types.insert(CardType::Relic);
        }
        // Serial-numbered parallels are conventionally written "12/99".
        if lower.contains("parallel") || lower.contains('/') {
            intent.card_types.insert(CardType::Parallel);
        }

        intent.year_hint = trimmed.split_whitespace().find_map(Self::parse_year);

        for abbr in TEAM_ABBREVIATIONS {
            if lower.contains(&abbr.to_lowercase()) {
                intent.team_abbreviation_hints.push((*abbr).to_string());
            }
        }

        intent
    }

    /// A card number is either digits with an optional alphabetic suffix
    /// ("108", "108a") or an uppercase prefix joined to digits with a hyphen
    /// ("RC-1", "SP-12", "BDC-7").
    fn is_card_number(token: &str) -> bool {
        Self::is_digits_with_suffix(token) || Self::is_prefixed_number(token)
    }

    fn is_digits_with_suffix(token: &str) -> bool {
        let digits = token.chars().take_while(char::is_ascii_digit).count();
        digits > 0 && token.chars().skip(digits).all(|c| c.is_ascii_alphabetic())
    }

    fn is_prefixed_number(token: &str) -> bool {
        let Some((prefix, digits)) = token.split_once('-') else {
            return false;
        };
        !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_uppercase())
            && !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit())
    }

    fn parse_year(token: &str) -> Option<u16> {
        if token.len() == 4
            && token.chars().all(|c| c.is_ascii_digit())
            && (token.starts_with("19") || token.starts_with("20"))
        {
            return token.parse().ok();
        }
        None
    }
}

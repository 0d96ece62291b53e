use crate::intent::DetectedIntent;
use crate::strategy::StrategyKind;
use cardex_protocol::{EntityType, SearchCategory};

/// Explicit `(category, intent) -> strategies` dispatch table.
///
/// Returned order is the merge-priority order the deduplicator relies on:
/// card strategies first, then players, teams, series. The two card-number
/// strategies are mutually exclusive; the type strategy composes with
/// either.
#[must_use]
pub fn select_strategies(category: SearchCategory, intent: &DetectedIntent) -> Vec<StrategyKind> {
    let mut plan = Vec::new();

    if category.includes(EntityType::Card) {
        if intent.card_number_with_player {
            plan.push(StrategyKind::CardNumberPlayer);
        } else if intent.card_number.is_some() {
            plan.push(StrategyKind::CardNumber);
        }
        if !intent.card_types.is_empty() {
            plan.push(StrategyKind::CardType);
        }
    }
    if category.includes(EntityType::Player) {
        plan.push(StrategyKind::Player);
    }
    if category.includes(EntityType::Team) {
        plan.push(StrategyKind::Team);
    }
    if category.includes(EntityType::Series) {
        plan.push(StrategyKind::Series);
    }

    plan
}

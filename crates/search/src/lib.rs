mod config;
mod dedupe;
mod error;
mod intent;
mod orchestrator;
mod plan;
mod rank;
mod strategy;

pub use config::SearchConfig;
pub use dedupe::Deduplicator;
pub use error::{Result, SearchError};
pub use intent::{CardType, DetectedIntent, QueryAnalyzer};
pub use orchestrator::SearchOrchestrator;
pub use plan::select_strategies;
pub use rank::RelevanceRanker;
pub use strategy::StrategyKind;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Tuning knobs for one orchestrator instance.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Limit applied when the caller passes none.
    pub default_limit: usize,
    /// Single deadline applied to the joined strategy fan-out wait.
    pub strategy_deadline: Duration,
    /// Upper bound on per-strategy retrieval headroom.
    pub headroom_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            strategy_deadline: Duration::from_secs(2),
            headroom_cap: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSearchConfig {
    default_limit: Option<usize>,
    strategy_deadline_ms: Option<u64>,
    headroom_cap: Option<usize>,
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawSearchConfig = toml::from_str(text).context("parsing search config")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSearchConfig) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(limit) = raw.default_limit {
            cfg.default_limit = limit;
        }
        if let Some(ms) = raw.strategy_deadline_ms {
            cfg.strategy_deadline = Duration::from_millis(ms);
        }
        if let Some(cap) = raw.headroom_cap {
            cfg.headroom_cap = cap;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            bail!("default_limit must be at least 1");
        }
        if self.headroom_cap == 0 {
            bail!("headroom_cap must be at least 1");
        }
        if self.strategy_deadline.is_zero() {
            bail!("strategy_deadline_ms must be non-zero");
        }
        Ok(())
    }

    /// Per-strategy retrieval headroom: twice the requested limit, capped.
    /// The headroom lets ranking discard lower-relevance duplicates without
    /// starving any single entity type.
    #[must_use]
    pub fn strategy_limit(&self, requested: usize) -> usize {
        (requested.saturating_mul(2)).min(self.headroom_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn defaults_are_sane() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.default_limit, 50);
        assert_eq!(cfg.headroom_cap, 30);
    }

    #[test]
    fn strategy_limit_doubles_then_caps() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.strategy_limit(5), 10);
        assert_eq!(cfg.strategy_limit(14), 28);
        assert_eq!(cfg.strategy_limit(50), 30);
        assert_eq!(cfg.strategy_limit(0), 0);
    }

    #[test]
    fn toml_overrides_and_validation() {
        let cfg = SearchConfig::from_toml_str(
            "default_limit = 25\nstrategy_deadline_ms = 500\nheadroom_cap = 20\n",
        )
        .unwrap();
        assert_eq!(cfg.default_limit, 25);
        assert_eq!(cfg.strategy_deadline, Duration::from_millis(500));
        assert_eq!(cfg.headroom_cap, 20);

        assert!(SearchConfig::from_toml_str("default_limit = 0").is_err());
        assert!(SearchConfig::from_toml_str("strategy_deadline_ms = 0").is_err());
        assert!(SearchConfig::from_toml_str("not toml at all [").is_err());
    }
}

//! Runtime configuration for the simulation.
//!
//! Tuning values live in `voidrush_core::constants`; this holds the knobs a
//! host may want to change per run. Loadable from JSON, every field optional.

use serde::{Deserialize, Serialize};

use voidrush_core::constants::{DEBRIS_CAPACITY, MAX_FRAME_DT, PARTICLE_CAPACITY};
use voidrush_core::enums::Rarity;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Draft sampling weight per rarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 5,
            uncommon: 2,
            rare: 1,
            epic: 1,
            legendary: 1,
        }
    }
}

impl RarityWeights {
    pub fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same run.
    pub seed: u64,
    /// Frame deltas above this are clamped before integration.
    pub max_frame_dt: f64,
    pub particle_capacity: usize,
    pub debris_capacity: usize,
    pub rarity_weights: RarityWeights,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_dt: MAX_FRAME_DT,
            particle_capacity: PARTICLE_CAPACITY,
            debris_capacity: DEBRIS_CAPACITY,
            rarity_weights: RarityWeights::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        let w = &self.rarity_weights;
        let total: u64 = [w.common, w.uncommon, w.rare, w.epic, w.legendary]
            .into_iter()
            .map(u64::from)
            .sum();
        if total == 0 {
            return Err(ConfigError::Invalid(
                "rarity weights cannot all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            SimConfig::from_json(r#"{"seed": 7, "rarity_weights": {"epic": 3}}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.rarity_weights.epic, 3);
        assert_eq!(config.rarity_weights.common, 5, "unset weights keep defaults");
    }

    #[test]
    fn test_rejects_bad_frame_cap() {
        let err = SimConfig::from_json(r#"{"max_frame_dt": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_accepts_huge_weights() {
        let config = SimConfig::from_json(
            r#"{"rarity_weights": {"common": 4294967295, "uncommon": 4294967295}}"#,
        )
        .unwrap();
        assert_eq!(config.rarity_weights.common, u32::MAX);
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let err = SimConfig::from_json(
            r#"{"rarity_weights": {"common": 0, "uncommon": 0, "rare": 0, "epic": 0, "legendary": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json("{seed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

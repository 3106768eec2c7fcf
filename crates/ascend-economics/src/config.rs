//! Engine configuration.
//!
//! Tier rates, package rules, and the rank ladder ship as deployment
//! configuration rather than code. Every field carries a default matching
//! the platform's launch values, so a partial (or empty) config file
//! yields a working engine.
//!
//! Config documents quote money in whole USDT (TOML integers are 64-bit);
//! conversion into smallest units happens when the validated tables are
//! built.

use crate::ranks::{Rank, RankTable};
use crate::tiers::{StakingTier, TierSchedule};
use ascend_core::money::usdt;
use ascend_core::{EngineError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Staking tier schedule
    #[serde(default)]
    pub staking: StakingSection,

    /// ROI package rules
    #[serde(default)]
    pub packages: PackageSection,

    /// Rank ladder
    #[serde(default)]
    pub ranks: RankSection,
}

/// Staking configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakingSection {
    /// Offered tiers
    #[serde(default = "default_tiers")]
    pub tiers: Vec<StakingTier>,
}

fn default_tiers() -> Vec<StakingTier> {
    TierSchedule::default().tiers().to_vec()
}

impl Default for StakingSection {
    fn default() -> Self {
        Self { tiers: default_tiers() }
    }
}

/// ROI package configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackageSection {
    /// Minimum package size in whole USDT
    #[serde(default = "default_min_amount_usdt")]
    pub min_amount_usdt: u64,

    /// ROI rates offered, in basis points
    #[serde(default = "default_roi_rates_bps")]
    pub roi_rates_bps: Vec<u32>,
}

fn default_min_amount_usdt() -> u64 {
    100
}

fn default_roi_rates_bps() -> Vec<u32> {
    vec![800, 1_000, 1_200]
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            min_amount_usdt: default_min_amount_usdt(),
            roi_rates_bps: default_roi_rates_bps(),
        }
    }
}

impl PackageSection {
    /// Minimum package size in smallest units.
    pub fn min_amount(&self) -> u128 {
        usdt(self.min_amount_usdt)
    }
}

/// Rank ladder configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankSection {
    /// Ranks, ascending
    #[serde(default = "default_ranks")]
    pub ranks: Vec<RankEntry>,
}

/// One configured rank, money in whole USDT
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankEntry {
    /// Display name
    pub name: String,

    /// Ladder position
    pub order: u32,

    /// Team business required, whole USDT
    pub required_business_usdt: u64,

    /// One-time bonus, whole USDT
    #[serde(default)]
    pub bonus_usdt: u64,

    /// Royalty share in basis points
    #[serde(default)]
    pub royalty_bps: u32,

    /// Optional marketing copy
    #[serde(default)]
    pub description: Option<String>,
}

impl RankEntry {
    fn to_rank(&self) -> Rank {
        Rank {
            name: self.name.clone(),
            order: self.order,
            required_business: usdt(self.required_business_usdt),
            bonus_amount: usdt(self.bonus_usdt),
            royalty_bps: self.royalty_bps,
            description: self.description.clone(),
        }
    }
}

fn default_ranks() -> Vec<RankEntry> {
    let entry = |name: &str, order: u32, required: u64, bonus: u64, royalty_bps: u32| RankEntry {
        name: name.to_string(),
        order,
        required_business_usdt: required,
        bonus_usdt: bonus,
        royalty_bps,
        description: None,
    };

    vec![
        entry("NONE", 0, 0, 0, 0),
        entry("STARTER", 1, 1_000, 50, 0),
        entry("EXPLORER", 2, 5_000, 200, 100),
        entry("VOYAGER", 3, 15_000, 500, 150),
        entry("PIONEER", 4, 50_000, 1_500, 200),
        entry("AMBASSADOR", 5, 150_000, 5_000, 300),
    ]
}

impl Default for RankSection {
    fn default() -> Self {
        Self { ranks: default_ranks() }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the document without building anything the caller keeps.
    pub fn validate(&self) -> Result<()> {
        self.tier_schedule()?;
        self.rank_table()?;

        if self.packages.min_amount_usdt == 0 {
            return Err(EngineError::Config(
                "packages.min_amount_usdt must be positive".to_string(),
            ));
        }
        if self.packages.roi_rates_bps.is_empty() {
            return Err(EngineError::Config(
                "packages.roi_rates_bps must list at least one rate".to_string(),
            ));
        }

        debug!(
            "engine config: {} tiers, {} roi rates, {} ranks",
            self.staking.tiers.len(),
            self.packages.roi_rates_bps.len(),
            self.ranks.ranks.len()
        );

        Ok(())
    }

    /// Build the validated tier schedule.
    pub fn tier_schedule(&self) -> Result<TierSchedule> {
        TierSchedule::new(self.staking.tiers.clone())
    }

    /// Build the validated rank table.
    pub fn rank_table(&self) -> Result<RankTable> {
        RankTable::new(self.ranks.ranks.iter().map(RankEntry::to_rank).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();

        assert_eq!(config.staking.tiers.len(), 5);
        assert_eq!(config.packages.min_amount(), usdt(100));
        assert_eq!(config.ranks.ranks.len(), 6);

        let schedule = config.tier_schedule().unwrap();
        assert_eq!(schedule.find(12).unwrap().monthly_rate_bps, 225);

        let table = config.rank_table().unwrap();
        assert_eq!(table.get("EXPLORER").unwrap().required_business, usdt(5_000));
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"
            [packages]
            min_amount_usdt = 250

            [[staking.tiers]]
            duration_months = 6
            monthly_rate_bps = 200
        "#;

        let config = EngineConfig::from_toml_str(raw).unwrap();

        assert_eq!(config.packages.min_amount(), usdt(250));
        // overriding tiers replaces the whole schedule
        let schedule = config.tier_schedule().unwrap();
        assert_eq!(schedule.tiers().len(), 1);
        assert_eq!(schedule.find(6).unwrap().monthly_rate_bps, 200);
        assert!(schedule.find(12).is_err());
        // untouched sections keep their defaults
        assert_eq!(config.ranks.ranks.len(), 6);
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("packages = 3"),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let raw = r#"
            [packages]
            min_amount_usdt = 0
        "#;
        assert!(matches!(
            EngineConfig::from_toml_str(raw),
            Err(EngineError::Config(_))
        ));

        let raw = r#"
            [[ranks.ranks]]
            name = "A"
            order = 1
            required_business_usdt = 0

            [[ranks.ranks]]
            name = "A"
            order = 2
            required_business_usdt = 10
        "#;
        assert!(matches!(
            EngineConfig::from_toml_str(raw),
            Err(EngineError::InvalidRankTable(_))
        ));
    }

    #[test]
    fn test_default_ladder_is_strictly_increasing() {
        let ranks = default_ranks();
        for pair in ranks.windows(2) {
            assert!(pair[0].required_business_usdt < pair[1].required_business_usdt);
            assert!(pair[0].order < pair[1].order);
        }
    }
}

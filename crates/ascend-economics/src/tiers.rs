//! Staking tier schedule.
//!
//! A tier fixes the flat monthly rate earned by a stake of a given
//! duration. The schedule is injected by callers (ultimately from
//! platform configuration) rather than baked into call sites, so rate
//! changes ship as config, not code.

use ascend_core::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// A fixed-term staking tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingTier {
    /// Stake duration in contract months
    pub duration_months: u32,

    /// Flat monthly rate in basis points
    pub monthly_rate_bps: u32,
}

impl StakingTier {
    /// Total rate earned over the full term, in basis points.
    pub fn term_rate_bps(&self) -> u64 {
        self.monthly_rate_bps as u64 * self.duration_months as u64
    }
}

/// Validated, duration-ordered tier table.
///
/// Invariant: non-empty, exactly one tier per duration, no zero-month
/// tiers. Construction sorts and checks; lookups rely on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierSchedule {
    tiers: Vec<StakingTier>,
}

impl TierSchedule {
    /// Build a schedule from arbitrary tier input.
    pub fn new(mut tiers: Vec<StakingTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(EngineError::InvalidTierSchedule("no tiers supplied".to_string()));
        }

        tiers.sort_by_key(|t| t.duration_months);

        for tier in &tiers {
            if tier.duration_months == 0 {
                return Err(EngineError::InvalidTierSchedule(
                    "tier duration must be at least one month".to_string(),
                ));
            }
        }

        for pair in tiers.windows(2) {
            if pair[0].duration_months == pair[1].duration_months {
                return Err(EngineError::InvalidTierSchedule(format!(
                    "duplicate tier for {}-month duration",
                    pair[0].duration_months
                )));
            }
        }

        Ok(Self { tiers })
    }

    /// Look up the tier for an exact duration.
    pub fn find(&self, duration_months: u32) -> Result<StakingTier> {
        self.tiers
            .iter()
            .copied()
            .find(|t| t.duration_months == duration_months)
            .ok_or(EngineError::InvalidDuration { months: duration_months })
    }

    /// All tiers, ascending by duration.
    pub fn tiers(&self) -> &[StakingTier] {
        &self.tiers
    }

    /// Shortest offered duration in months.
    pub fn min_duration(&self) -> u32 {
        self.tiers[0].duration_months
    }

    /// Longest offered duration in months.
    pub fn max_duration(&self) -> u32 {
        self.tiers[self.tiers.len() - 1].duration_months
    }
}

impl Default for TierSchedule {
    /// The platform's launch schedule.
    fn default() -> Self {
        Self {
            tiers: vec![
                StakingTier { duration_months: 3, monthly_rate_bps: 150 },
                StakingTier { duration_months: 6, monthly_rate_bps: 180 },
                StakingTier { duration_months: 12, monthly_rate_bps: 225 },
                StakingTier { duration_months: 18, monthly_rate_bps: 260 },
                StakingTier { duration_months: 24, monthly_rate_bps: 300 },
            ],
        }
    }
}

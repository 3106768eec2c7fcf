//! Dashboard aggregation over a user's positions.
//!
//! Rolls the stake and package listings up into the totals the dashboard
//! stats endpoint serves. Pure fold over the supplied records at an
//! injected observation time.

use crate::packages::Package;
use crate::staking::Stake;
use ascend_core::Result;
use serde::{Deserialize, Serialize};

/// Aggregate position totals for one user at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Observation timestamp the aggregation was made at
    pub as_of: i64,

    /// Stakes still inside their term
    pub active_stakes: u64,

    /// Stakes whose term has elapsed at `as_of`
    pub matured_stakes: u64,

    /// Principal across all stakes
    pub total_staked: u128,

    /// Interest all stakes will have earned by maturity
    pub projected_interest: u128,

    /// Packages below their payout cap
    pub active_packages: u64,

    /// Packages at or past their payout cap
    pub capped_packages: u64,

    /// Principal across all packages
    pub total_invested: u128,

    /// Lifetime ROI paid across all packages
    pub total_roi_paid: u128,

    /// Payout headroom left across all packages
    pub cap_headroom: u128,
}

/// Aggregate a user's stakes and packages at `now`.
///
/// Fails on the first malformed record (zero principal, inverted dates)
/// rather than silently skipping it; listing payloads that violate the
/// engine contract should surface loudly.
pub fn summarize_portfolio(
    stakes: &[Stake],
    packages: &[Package],
    now: i64,
) -> Result<PortfolioSummary> {
    let mut summary = PortfolioSummary { as_of: now, ..Default::default() };

    for stake in stakes {
        let projected = stake.projected()?;

        summary.total_staked += stake.principal;
        summary.projected_interest += projected.total_interest;

        if stake.is_mature(now) {
            summary.matured_stakes += 1;
        } else {
            summary.active_stakes += 1;
        }
    }

    for package in packages {
        let cap = package.cap_progress()?;

        summary.total_invested += package.amount;
        summary.total_roi_paid += package.total_roi_paid;
        summary.cap_headroom += cap.remaining;

        if cap.is_capped() {
            summary.capped_packages += 1;
        } else {
            summary.active_packages += 1;
        }
    }

    Ok(summary)
}

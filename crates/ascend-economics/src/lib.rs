//! # Ascend Economics - Return & Rank Computation Engine
//!
//! The business-rule core behind the Ascend dashboards: staking yield
//! projection, ROI package cap tracking, position progress, and rank
//! progression. Every computation is a pure, deterministic transform over
//! explicit inputs - no clock reads, no I/O, no shared state - so the same
//! code serves the staking calculator, the investments page, and any
//! backend endpoint without coordination.
//!
//! ## Staking Tiers
//!
//! | Duration | Monthly Rate | Term ROI |
//! |----------|--------------|----------|
//! | 3 months | 1.50% | 4.5% |
//! | 6 months | 1.80% | 10.8% |
//! | 12 months | 2.25% | 27.0% |
//! | 18 months | 2.60% | 46.8% |
//! | 24 months | 3.00% | 72.0% |
//!
//! Accrual is simple and linear: monthly interest is a flat share of
//! principal, never compounded.
//!
//! ## ROI Package Caps
//!
//! | ROI Rate | Cap Multiplier | Cap on 100 USDT |
//! |----------|----------------|-----------------|
//! | 8%/month | 2.5x | 250 USDT |
//! | 10%/month | 3.0x | 300 USDT |
//! | 12%/month | 4.0x | 400 USDT |
//!
//! A package stops earning once lifetime payouts reach its cap; the
//! backend enforces the stop, this engine reports progress toward it.
//!
//! ## Ranks
//!
//! Rank is a pure function of cumulative team business volume against an
//! ordered threshold table sourced from platform configuration. The
//! engine computes what a user's rank *should* be; the nightly backend
//! job owns the persisted assignment.

pub mod config;
pub mod packages;
pub mod portfolio;
pub mod progress;
pub mod ranks;
pub mod staking;
pub mod tiers;

// Re-exports
pub use config::EngineConfig;
pub use packages::{CapProgress, Package, compute_cap_progress};
pub use portfolio::{PortfolioSummary, summarize_portfolio};
pub use progress::{TimeProgress, compute_time_progress};
pub use ranks::{Rank, RankProgress, RankTable, evaluate_rank_progress, evaluate_ranks};
pub use staking::{Stake, StakeReturn, compute_stake_return};
pub use tiers::{StakingTier, TierSchedule};

/// Platform economics constants
pub mod constants {
    use ascend_core::money::ONE_USDT;

    /// Minimum ROI package size: 100 USDT
    pub const MIN_PACKAGE_AMOUNT: u128 = 100 * ONE_USDT;

    /// Basic package ROI rate: 8%/month
    pub const ROI_RATE_BASIC_BPS: u32 = 800;

    /// Standard package ROI rate: 10%/month
    pub const ROI_RATE_STANDARD_BPS: u32 = 1_000;

    /// Premium package ROI rate: 12%/month
    pub const ROI_RATE_PREMIUM_BPS: u32 = 1_200;

    /// Basic cap multiplier: 2.5x principal (in hundredths)
    pub const CAP_MULTIPLIER_BASIC: u32 = 250;

    /// Standard cap multiplier: 3x principal (in hundredths)
    pub const CAP_MULTIPLIER_STANDARD: u32 = 300;

    /// Premium cap multiplier: 4x principal (in hundredths)
    pub const CAP_MULTIPLIER_PREMIUM: u32 = 400;

    /// Supported stake durations in contract months
    pub const SUPPORTED_DURATIONS: [u32; 5] = [3, 6, 12, 18, 24];
}

pub use constants::*;

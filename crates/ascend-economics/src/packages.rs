//! ROI package caps.
//!
//! A package pays a fixed monthly ROI until lifetime payouts reach a cap
//! expressed as a multiple of principal. The multiplier steps with the
//! package's ROI rate; thresholds are checked in descending order.

use crate::constants::*;
use ascend_core::money::{apply_bps, clamped_ratio_bps};
use ascend_core::types::PositionStatus;
use ascend_core::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Cap multiplier for an ROI rate, in hundredths (250 = 2.5x).
pub fn cap_multiplier_hundredths(roi_rate_bps: u32) -> u32 {
    if roi_rate_bps >= ROI_RATE_PREMIUM_BPS {
        CAP_MULTIPLIER_PREMIUM
    } else if roi_rate_bps >= ROI_RATE_STANDARD_BPS {
        CAP_MULTIPLIER_STANDARD
    } else {
        CAP_MULTIPLIER_BASIC
    }
}

/// Lifetime payout position of a package against its cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapProgress {
    /// Package principal
    pub amount: u128,

    /// Cap multiplier in hundredths
    pub cap_multiplier_hundredths: u32,

    /// Maximum lifetime payout
    pub cap_limit: u128,

    /// ROI paid out so far
    pub total_roi_paid: u128,

    /// Payout progress in basis points, clamped at 10,000
    pub progress_bps: u64,

    /// Headroom left before the cap
    pub remaining: u128,
}

impl CapProgress {
    /// Cap multiplier as a display factor (2.5, 3.0, 4.0).
    pub fn multiplier(&self) -> f64 {
        self.cap_multiplier_hundredths as f64 / 100.0
    }

    /// Payout progress as a display percentage.
    pub fn progress_percent(&self) -> f64 {
        ascend_core::money::bps_to_percent(self.progress_bps)
    }

    /// Whether lifetime payouts have reached the cap.
    pub fn is_capped(&self) -> bool {
        self.total_roi_paid >= self.cap_limit
    }
}

/// Compute a package's position against its payout cap.
///
/// Progress clamps at 100% even if the backend overpaid past the cap;
/// refusing further payouts is the backend's job, not this engine's.
pub fn compute_cap_progress(
    amount: u128,
    roi_rate_bps: u32,
    total_roi_paid: u128,
) -> Result<CapProgress> {
    if amount == 0 {
        return Err(EngineError::InvalidAmount);
    }

    let cap_multiplier = cap_multiplier_hundredths(roi_rate_bps);
    let cap_limit = amount * cap_multiplier as u128 / 100;

    Ok(CapProgress {
        amount,
        cap_multiplier_hundredths: cap_multiplier,
        cap_limit,
        total_roi_paid,
        progress_bps: clamped_ratio_bps(total_roi_paid, cap_limit),
        remaining: cap_limit.saturating_sub(total_roi_paid),
    })
}

/// An ROI package, as carried by the investments listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Invested principal
    pub amount: u128,

    /// Monthly ROI rate in basis points
    pub roi_rate_bps: u32,

    /// Lifetime ROI paid out
    pub total_roi_paid: u128,

    /// Purchase timestamp (unix seconds)
    pub start_time: i64,

    /// Timestamp of the most recent ROI payout, if any
    pub last_roi_time: Option<i64>,

    /// Backend-owned lifecycle status
    pub status: PositionStatus,
}

impl Package {
    /// Open a package at `start_time`, enforcing the platform minimum.
    pub fn open(amount: u128, roi_rate_bps: u32, start_time: i64, minimum: u128) -> Result<Self> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if amount < minimum {
            return Err(EngineError::BelowMinimum { minimum });
        }

        Ok(Self {
            amount,
            roi_rate_bps,
            total_roi_paid: 0,
            start_time,
            last_roi_time: None,
            status: PositionStatus::Active,
        })
    }

    /// Expected payout for one ROI cycle.
    pub fn monthly_roi(&self) -> u128 {
        apply_bps(self.amount, self.roi_rate_bps)
    }

    /// Current position against the payout cap.
    pub fn cap_progress(&self) -> Result<CapProgress> {
        compute_cap_progress(self.amount, self.roi_rate_bps, self.total_roi_paid)
    }
}

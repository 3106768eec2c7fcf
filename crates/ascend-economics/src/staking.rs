//! Fixed-term stake returns.
//!
//! Accrual is simple and linear: `monthly_interest = principal * rate`,
//! `total_interest = monthly_interest * months`. Interest is never
//! compounded into principal.

use crate::progress::{TimeProgress, compute_time_progress};
use crate::tiers::TierSchedule;
use ascend_core::money::{apply_bps, ratio_bps};
use ascend_core::time::stake_end_time;
use ascend_core::types::PositionStatus;
use ascend_core::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Projected earnings for a fixed-term stake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeReturn {
    /// Committed principal
    pub principal: u128,

    /// Term length in contract months
    pub duration_months: u32,

    /// Contracted monthly rate in basis points
    pub monthly_rate_bps: u32,

    /// Interest paid out each month
    pub monthly_interest: u128,

    /// Interest over the full term
    pub total_interest: u128,

    /// Principal plus total interest at maturity
    pub total_return: u128,

    /// Term ROI in basis points (27% = 2700)
    pub roi_bps: u64,
}

impl StakeReturn {
    fn project(principal: u128, duration_months: u32, monthly_rate_bps: u32) -> Result<Self> {
        if principal == 0 {
            return Err(EngineError::InvalidAmount);
        }

        let monthly_interest = apply_bps(principal, monthly_rate_bps);
        let total_interest = monthly_interest * duration_months as u128;

        Ok(Self {
            principal,
            duration_months,
            monthly_rate_bps,
            monthly_interest,
            total_interest,
            total_return: principal + total_interest,
            roi_bps: ratio_bps(total_interest, principal),
        })
    }

    /// Term ROI as a display percentage.
    pub fn roi_percent(&self) -> f64 {
        ascend_core::money::bps_to_percent(self.roi_bps)
    }
}

/// Project the return of staking `principal` for `duration_months`.
///
/// The duration must match a tier in `schedule` exactly; there is no
/// interpolation between terms.
pub fn compute_stake_return(
    principal: u128,
    duration_months: u32,
    schedule: &TierSchedule,
) -> Result<StakeReturn> {
    let tier = schedule.find(duration_months)?;
    StakeReturn::project(principal, duration_months, tier.monthly_rate_bps)
}

/// A committed fixed-term deposit, as carried by the investments listing.
///
/// The record stores its contracted rate so projections stay stable even
/// after the offered schedule changes. The engine derives from stakes but
/// never mutates them; the backend owns the maturity transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    /// Committed principal
    pub principal: u128,

    /// Term length in contract months
    pub duration_months: u32,

    /// Monthly rate contracted at commit time, in basis points
    pub monthly_rate_bps: u32,

    /// Commit timestamp (unix seconds)
    pub start_time: i64,

    /// Maturity timestamp (start plus term)
    pub end_time: i64,

    /// Backend-owned lifecycle status
    pub status: PositionStatus,
}

impl Stake {
    /// Open a stake at `start_time` under the tier matching
    /// `duration_months` in `schedule`.
    pub fn open(
        principal: u128,
        duration_months: u32,
        schedule: &TierSchedule,
        start_time: i64,
    ) -> Result<Self> {
        if principal == 0 {
            return Err(EngineError::InvalidAmount);
        }
        let tier = schedule.find(duration_months)?;

        Ok(Self {
            principal,
            duration_months,
            monthly_rate_bps: tier.monthly_rate_bps,
            start_time,
            end_time: stake_end_time(start_time, duration_months),
            status: PositionStatus::Active,
        })
    }

    /// Projected earnings under the contracted rate.
    pub fn projected(&self) -> Result<StakeReturn> {
        StakeReturn::project(self.principal, self.duration_months, self.monthly_rate_bps)
    }

    /// Whether the term has elapsed at `now`.
    ///
    /// A mature stake may still be marked `Active` until the backend's
    /// maturity sweep runs; display layers use this to show "matured,
    /// settling" states.
    pub fn is_mature(&self, now: i64) -> bool {
        now >= self.end_time
    }

    /// Elapsed-term progress at `now`.
    pub fn progress(&self, now: i64) -> Result<TimeProgress> {
        compute_time_progress(self.start_time, self.end_time, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascend_core::money::usdt;
    use ascend_core::time::SECONDS_PER_MONTH;

    #[test]
    fn test_twelve_month_projection() {
        let schedule = TierSchedule::default();
        let ret = compute_stake_return(usdt(10_000), 12, &schedule).unwrap();

        assert_eq!(ret.monthly_rate_bps, 225);
        assert_eq!(ret.monthly_interest, usdt(225));
        assert_eq!(ret.total_interest, usdt(2_700));
        assert_eq!(ret.total_return, usdt(12_700));
        assert_eq!(ret.roi_bps, 2_700);
        assert_eq!(ret.roi_percent(), 27.0);
    }

    #[test]
    fn test_accrual_is_linear_not_compound() {
        let schedule = TierSchedule::default();
        let ret = compute_stake_return(usdt(1_000), 24, &schedule).unwrap();

        // 24 flat months at 3%, not (1.03)^24
        assert_eq!(ret.total_interest, usdt(720));
    }

    #[test]
    fn test_unsupported_duration() {
        let schedule = TierSchedule::default();
        assert_eq!(
            compute_stake_return(usdt(500), 9, &schedule),
            Err(EngineError::InvalidDuration { months: 9 })
        );
    }

    #[test]
    fn test_zero_principal_rejected() {
        let schedule = TierSchedule::default();
        assert_eq!(
            compute_stake_return(0, 12, &schedule),
            Err(EngineError::InvalidAmount)
        );
    }

    #[test]
    fn test_open_and_mature() {
        let schedule = TierSchedule::default();
        let stake = Stake::open(usdt(2_000), 6, &schedule, 1_000).unwrap();

        assert_eq!(stake.end_time, 1_000 + 6 * SECONDS_PER_MONTH);
        assert!(stake.status.is_active());
        assert!(!stake.is_mature(stake.end_time - 1));
        assert!(stake.is_mature(stake.end_time));

        let ret = stake.projected().unwrap();
        assert_eq!(ret.total_interest, usdt(2_000) * 180 * 6 / 10_000);
    }

    proptest::proptest! {
        #[test]
        fn projection_is_scale_invariant(p in 1u64..1_000_000, k in 1u128..1_000) {
            let schedule = TierSchedule::default();
            let base = compute_stake_return(usdt(p), 12, &schedule).unwrap();
            let scaled = compute_stake_return(usdt(p) * k, 12, &schedule).unwrap();
            proptest::prop_assert_eq!(scaled.total_interest, base.total_interest * k);
        }

        #[test]
        fn total_return_is_exactly_linear(p in 1u64..10_000_000, months in proptest::sample::select(vec![3u32, 6, 12, 18, 24])) {
            let schedule = TierSchedule::default();
            let tier = schedule.find(months).unwrap();
            let ret = compute_stake_return(usdt(p), months, &schedule).unwrap();
            let expected = usdt(p) + usdt(p) * tier.monthly_rate_bps as u128 / 10_000 * months as u128;
            proptest::prop_assert_eq!(ret.total_return, expected);
        }
    }
}

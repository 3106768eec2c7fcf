//! Elapsed-time progress for fixed-term positions.

use ascend_core::money::BPS_DENOMINATOR;
use ascend_core::time::days_remaining;
use ascend_core::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Elapsed fraction of a position's term at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeProgress {
    /// Elapsed term in basis points, clamped to [0, 10,000]
    pub progress_bps: u64,

    /// Whole days until maturity, rounded up; 0 once matured
    pub days_remaining: u32,
}

impl TimeProgress {
    /// Elapsed term as a display percentage.
    pub fn progress_percent(&self) -> f64 {
        ascend_core::money::bps_to_percent(self.progress_bps)
    }

    /// Whether the term has fully elapsed.
    pub fn is_complete(&self) -> bool {
        self.progress_bps == BPS_DENOMINATOR as u64
    }
}

/// Compute elapsed-term progress for a position running from `start` to
/// `end`, observed at `now`.
///
/// All three are unix-second timestamps supplied by the caller; the
/// engine never reads the clock. `now` before `start` reads as 0%, past
/// `end` as 100%.
pub fn compute_time_progress(start: i64, end: i64, now: i64) -> Result<TimeProgress> {
    if end <= start {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    let total = (end - start) as u128;
    let elapsed = (now.clamp(start, end) - start) as u128;

    Ok(TimeProgress {
        progress_bps: (elapsed * BPS_DENOMINATOR / total) as u64,
        days_remaining: days_remaining(end, now),
    })
}

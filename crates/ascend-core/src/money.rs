//! Fixed-point monetary arithmetic.
//!
//! Amounts are `u128` in micro-USDT; rates are integer basis points
//! (1 bp = 0.01%). Percent-valued results produced by the engine are also
//! basis points, so arithmetic stays exact end to end. Division truncates
//! toward zero, in the platform's favor.

/// One USDT in smallest units (the token carries 6 decimals).
pub const ONE_USDT: u128 = 1_000_000;

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Convert a whole-USDT figure into smallest units.
pub fn usdt(whole: u64) -> u128 {
    whole as u128 * ONE_USDT
}

/// Scale an amount by a basis-point rate.
pub fn apply_bps(amount: u128, rate_bps: u32) -> u128 {
    amount * rate_bps as u128 / BPS_DENOMINATOR
}

/// Express `part` as basis points of `whole`.
///
/// `whole` must be non-zero; callers validate before dividing. The result
/// is unclamped and may exceed 10,000 when `part > whole`.
pub fn ratio_bps(part: u128, whole: u128) -> u64 {
    (part * BPS_DENOMINATOR / whole) as u64
}

/// Express `part` as basis points of `whole`, clamped to 10,000.
pub fn clamped_ratio_bps(part: u128, whole: u128) -> u64 {
    ratio_bps(part, whole).min(BPS_DENOMINATOR as u64)
}

/// Display conversion from basis points to percent.
pub fn bps_to_percent(bps: u64) -> f64 {
    bps as f64 / 100.0
}

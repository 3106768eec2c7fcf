//! # Ascend Core
//!
//! Shared primitives for the Ascend earnings engine: fixed-point monetary
//! units, basis-point rate arithmetic, timestamp helpers, and the engine
//! error taxonomy.
//!
//! All monetary amounts across the workspace are `u128` values denominated
//! in micro-USDT (10^6 per USDT, matching the platform token's on-chain
//! decimals). Rates are integer basis points. Money paths never touch
//! floating point; `f64` appears only in display accessors.

pub mod error;
pub mod money;
pub mod time;
pub mod types;

pub use error::{EngineError, Result};
pub use money::{ONE_USDT, apply_bps, bps_to_percent, clamped_ratio_bps, ratio_bps, usdt};
pub use time::{SECONDS_PER_DAY, SECONDS_PER_MONTH, days_remaining, stake_end_time};
pub use types::PositionStatus;

//! Error types for Ascend engine computations.
//!
//! Every variant is a caller contract violation on malformed input. None
//! are transient and none should be retried; the engine rejects bad input
//! explicitly instead of coercing it to zero, so presentation layers opt
//! into their own degradation.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur in Ascend engine computations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No staking tier matches the requested duration
    #[error("no staking tier for {months}-month duration")]
    InvalidDuration { months: u32 },

    /// Zero principal or package amount
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Amount below the platform minimum
    #[error("amount below minimum of {minimum} micro-USDT")]
    BelowMinimum { minimum: u128 },

    /// Position end does not follow its start
    #[error("invalid date range: end {end} does not follow start {start}")]
    InvalidDateRange { start: i64, end: i64 },

    /// No ranks supplied
    #[error("rank table is empty")]
    EmptyRankTable,

    /// Malformed rank table (duplicate name or order)
    #[error("invalid rank table: {0}")]
    InvalidRankTable(String),

    /// Malformed tier schedule
    #[error("invalid tier schedule: {0}")]
    InvalidTierSchedule(String),

    /// Configuration parse or validation failure
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error codes matching the platform API specification
impl EngineError {
    /// Get the error code for API responses
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidDuration { .. } => 2001,
            Self::InvalidAmount | Self::BelowMinimum { .. } => 2002,
            Self::InvalidDateRange { .. } => 2003,
            Self::EmptyRankTable | Self::InvalidRankTable(_) => 2004,
            Self::InvalidTierSchedule(_) => 2005,
            Self::Config(_) => 9999,
        }
    }
}

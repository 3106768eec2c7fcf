//! Shared position types.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an investment position.
///
/// The engine only reads this; the backend owns the `Active` →
/// `Completed` transition (applied at stake maturity or once a package
/// reaches its payout cap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// Position is accruing.
    Active,
    /// Position has matured or reached its cap.
    Completed,
}

impl PositionStatus {
    /// Whether the position still accrues.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for PositionStatus {
    fn default() -> Self {
        Self::Active
    }
}

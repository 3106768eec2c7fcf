//! Rank progression.
//!
//! Rank is a pure function of cumulative team business volume against an
//! ordered threshold table. The table arrives from the platform's rank
//! configuration endpoint as plain data; this module validates it once
//! and answers display queries. Persisting a user's rank is the nightly
//! backend job's responsibility, never this engine's.

use ascend_core::money::{apply_bps, clamped_ratio_bps};
use ascend_core::{EngineError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// A rank in the platform hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Display name, unique across the table
    pub name: String,

    /// Position in the ladder, unique and ascending
    pub order: u32,

    /// Team business volume required to hold this rank
    pub required_business: u128,

    /// One-time bonus paid on first reaching this rank
    pub bonus_amount: u128,

    /// Royalty share of team volume while holding this rank, in basis points
    pub royalty_bps: u32,

    /// Optional marketing copy
    #[serde(default)]
    pub description: Option<String>,
}

impl Rank {
    /// Royalty amount earned on a volume while holding this rank.
    pub fn royalty_on(&self, volume: u128) -> u128 {
        apply_bps(volume, self.royalty_bps)
    }
}

/// Validated, order-sorted rank ladder.
///
/// Invariant: non-empty, unique names, unique orders, sorted ascending by
/// `order`. Construction sorts defensively; the configuration endpoint
/// does not guarantee ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankTable {
    ranks: Vec<Rank>,
}

impl RankTable {
    /// Build a table from arbitrary rank input.
    pub fn new(mut ranks: Vec<Rank>) -> Result<Self> {
        if ranks.is_empty() {
            return Err(EngineError::EmptyRankTable);
        }

        if !ranks.windows(2).all(|pair| pair[0].order <= pair[1].order) {
            warn!("rank table arrived unsorted; sorting by order");
        }
        ranks.sort_by_key(|r| r.order);

        for pair in ranks.windows(2) {
            if pair[0].order == pair[1].order {
                return Err(EngineError::InvalidRankTable(format!(
                    "duplicate order {} ({} and {})",
                    pair[0].order, pair[0].name, pair[1].name
                )));
            }
        }

        for (i, rank) in ranks.iter().enumerate() {
            if ranks[..i].iter().any(|r| r.name == rank.name) {
                return Err(EngineError::InvalidRankTable(format!(
                    "duplicate rank name {}",
                    rank.name
                )));
            }
        }

        Ok(Self { ranks })
    }

    /// Parse and validate the rank configuration endpoint's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let ranks: Vec<Rank> =
            serde_json::from_str(payload).map_err(|e| EngineError::Config(e.to_string()))?;
        Self::new(ranks)
    }

    /// All ranks, ascending by order.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Look up a rank by name.
    pub fn get(&self, name: &str) -> Option<&Rank> {
        self.ranks.iter().find(|r| r.name == name)
    }
}

/// A user's position on the rank ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankProgress {
    /// Highest rank whose requirement the user meets.
    ///
    /// `None` only when the table has no zero-requirement floor and the
    /// user sits below every threshold; the platform's ladder always
    /// carries a baseline rank at 0.
    pub current: Option<Rank>,

    /// Next rank up the ladder, if any
    pub next: Option<Rank>,

    /// Business required for the next rank (0 at the top)
    pub required_business: u128,

    /// The team business the evaluation was made against
    pub team_business: u128,

    /// Progress toward the next rank in basis points; 10,000 at the top
    pub progress_bps: u64,
}

impl RankProgress {
    /// Progress toward the next rank as a display percentage.
    pub fn progress_percent(&self) -> f64 {
        ascend_core::money::bps_to_percent(self.progress_bps)
    }
}

/// Evaluate a user's rank position against a validated table.
pub fn evaluate_rank_progress(team_business: u128, table: &RankTable) -> RankProgress {
    let ranks = table.ranks();

    // highest-order rank whose requirement is met; table is sorted
    let current_idx = ranks
        .iter()
        .rposition(|r| r.required_business <= team_business);

    let next = match current_idx {
        Some(i) => ranks.get(i + 1),
        None => ranks.first(),
    };

    let (required_business, progress_bps) = match next {
        Some(rank) if rank.required_business > 0 => (
            rank.required_business,
            clamped_ratio_bps(team_business, rank.required_business),
        ),
        _ => (0, 10_000),
    };

    RankProgress {
        current: current_idx.map(|i| ranks[i].clone()),
        next: next.cloned(),
        required_business,
        team_business,
        progress_bps,
    }
}

/// Evaluate against a raw rank slice, validating it first.
///
/// Convenience for callers holding the configuration payload directly;
/// fails with [`EngineError::EmptyRankTable`] when no ranks are supplied.
pub fn evaluate_ranks(team_business: u128, ranks: &[Rank]) -> Result<RankProgress> {
    let table = RankTable::new(ranks.to_vec())?;
    Ok(evaluate_rank_progress(team_business, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascend_core::money::usdt;

    fn ladder() -> Vec<Rank> {
        let rank = |name: &str, order: u32, required: u128| Rank {
            name: name.to_string(),
            order,
            required_business: required,
            bonus_amount: 0,
            royalty_bps: 0,
            description: None,
        };

        vec![
            rank("NONE", 0, 0),
            rank("STARTER", 1, usdt(1_000)),
            rank("EXPLORER", 2, usdt(5_000)),
        ]
    }

    #[test]
    fn test_mid_ladder_position() {
        let table = RankTable::new(ladder()).unwrap();
        let progress = evaluate_rank_progress(usdt(1_500), &table);

        assert_eq!(progress.current.as_ref().unwrap().name, "STARTER");
        assert_eq!(progress.next.as_ref().unwrap().name, "EXPLORER");
        assert_eq!(progress.required_business, usdt(5_000));
        assert_eq!(progress.progress_bps, 3_000);
        assert_eq!(progress.progress_percent(), 30.0);
    }

    #[test]
    fn test_exact_threshold_qualifies() {
        let table = RankTable::new(ladder()).unwrap();
        let progress = evaluate_rank_progress(usdt(1_000), &table);

        assert_eq!(progress.current.as_ref().unwrap().name, "STARTER");
    }

    #[test]
    fn test_top_of_ladder() {
        let table = RankTable::new(ladder()).unwrap();
        let progress = evaluate_rank_progress(usdt(9_000), &table);

        assert_eq!(progress.current.as_ref().unwrap().name, "EXPLORER");
        assert_eq!(progress.next, None);
        assert_eq!(progress.required_business, 0);
        assert_eq!(progress.progress_bps, 10_000);
    }

    #[test]
    fn test_zero_business_holds_baseline() {
        let table = RankTable::new(ladder()).unwrap();
        let progress = evaluate_rank_progress(0, &table);

        assert_eq!(progress.current.as_ref().unwrap().name, "NONE");
        assert_eq!(progress.next.as_ref().unwrap().name, "STARTER");
        assert_eq!(progress.progress_bps, 0);
    }

    #[test]
    fn test_no_floor_table() {
        let mut ranks = ladder();
        ranks.remove(0); // drop the zero-requirement baseline
        let table = RankTable::new(ranks).unwrap();

        let progress = evaluate_rank_progress(usdt(400), &table);
        assert_eq!(progress.current, None);
        assert_eq!(progress.next.as_ref().unwrap().name, "STARTER");
        assert_eq!(progress.progress_bps, 4_000);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut ranks = ladder();
        ranks.reverse();
        let table = RankTable::new(ranks).unwrap();

        let progress = evaluate_rank_progress(usdt(1_500), &table);
        assert_eq!(progress.current.as_ref().unwrap().name, "STARTER");
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(evaluate_ranks(usdt(100), &[]), Err(EngineError::EmptyRankTable));
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut ranks = ladder();
        ranks[2].order = 1;
        assert!(matches!(
            RankTable::new(ranks),
            Err(EngineError::InvalidRankTable(_))
        ));

        let mut ranks = ladder();
        ranks[2].name = "STARTER".to_string();
        assert!(matches!(
            RankTable::new(ranks),
            Err(EngineError::InvalidRankTable(_))
        ));
    }

    #[test]
    fn test_royalty_share() {
        let rank = Rank {
            name: "PIONEER".to_string(),
            order: 4,
            required_business: usdt(50_000),
            bonus_amount: usdt(500),
            royalty_bps: 200,
            description: None,
        };

        assert_eq!(rank.royalty_on(usdt(10_000)), usdt(200));
    }

    #[test]
    fn test_table_from_json_payload() {
        let payload = r#"[
            {"name": "NONE", "order": 0, "required_business": 0, "bonus_amount": 0, "royalty_bps": 0},
            {"name": "STARTER", "order": 1, "required_business": 1000000000, "bonus_amount": 50000000, "royalty_bps": 100}
        ]"#;

        let table = RankTable::from_json(payload).unwrap();
        assert_eq!(table.ranks().len(), 2);
        assert_eq!(table.get("STARTER").unwrap().royalty_bps, 100);

        assert!(matches!(
            RankTable::from_json("not json"),
            Err(EngineError::Config(_))
        ));
    }
}

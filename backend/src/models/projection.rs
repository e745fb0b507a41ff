//! Cost projection sequence
//!
//! The output of a projection run: one entry per month over the horizon,
//! each carrying the demand-adjusted volume, the full cost breakdown at
//! that volume, and a running cumulative total.
//!
//! # Critical Invariants
//! - Entries are contiguous, 1-indexed months
//! - `cumulative_cost` accumulates the rounded monthly totals and is
//!   non-decreasing across the sequence
//! - A projection always covers at least one month

use serde::{Deserialize, Serialize};

use crate::models::breakdown::CostBreakdown;

/// One month of a cost projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthProjection {
    /// 1-indexed projection month
    pub month: usize,

    /// Growth- and seasonality-adjusted call volume for this month
    ///
    /// Derived from the baseline, so it may exceed the validated input
    /// maximum late in the horizon.
    pub call_volume: u32,

    /// Per-service cost breakdown at the adjusted volume
    pub costs: CostBreakdown,

    /// Running total of monthly costs through this month (USD, cents)
    pub cumulative_cost: f64,
}

/// A complete projection over a horizon of months
///
/// # Example
/// ```
/// use cost_projection_core_rs::{CallVolume, CostEngine};
///
/// let engine = CostEngine::with_defaults();
/// let volume = CallVolume::new(1000).unwrap();
/// let projection = engine.project(volume, 60);
///
/// assert_eq!(projection.horizon_months(), 60);
/// assert_eq!(projection.months()[0].month, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    /// Validated baseline volume the projection started from
    baseline_volume: u32,

    /// Number of months covered
    horizon_months: usize,

    /// Monthly entries, month 1 first
    months: Vec<MonthProjection>,
}

impl CostProjection {
    /// Assemble a projection from its monthly entries
    ///
    /// Callers (the engine) guarantee a non-empty, contiguous sequence.
    pub(crate) fn new(baseline_volume: u32, months: Vec<MonthProjection>) -> Self {
        assert!(!months.is_empty(), "projection must cover at least one month");
        Self {
            baseline_volume,
            horizon_months: months.len(),
            months,
        }
    }

    /// Get the baseline volume the projection started from
    pub fn baseline_volume(&self) -> u32 {
        self.baseline_volume
    }

    /// Get the number of months covered
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Get the monthly entries, month 1 first
    pub fn months(&self) -> &[MonthProjection] {
        &self.months
    }

    /// Cumulative cost at the end of the horizon (USD, cents)
    pub fn final_cumulative_cost(&self) -> f64 {
        // non-empty by construction
        self.months[self.months.len() - 1].cumulative_cost
    }

    /// Sum of the rounded monthly totals, without output rounding
    ///
    /// Summary and savings figures round this once at their own output
    /// boundary instead of accumulating rounded intermediates.
    pub(crate) fn total_cost_raw(&self) -> f64 {
        self.months
            .iter()
            .map(|entry| entry.costs.total_monthly_cost)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::breakdown::{BedrockCosts, ConnectCosts, LexCosts};

    fn entry(month: usize, total: f64, cumulative: f64) -> MonthProjection {
        MonthProjection {
            month,
            call_volume: 1000,
            costs: CostBreakdown {
                connect: ConnectCosts {
                    voice_minutes: 0,
                    chat_messages: 0,
                    monthly_cost: total,
                },
                lex: LexCosts {
                    text_requests: 0,
                    voice_requests: 0,
                    monthly_cost: 0.0,
                },
                bedrock: BedrockCosts {
                    knowledge_base_queries: 0,
                    agent_invocations: 0,
                    monthly_cost: 0.0,
                },
                total_monthly_cost: total,
            },
            cumulative_cost: cumulative,
        }
    }

    #[test]
    #[should_panic(expected = "projection must cover at least one month")]
    fn test_empty_projection_panics() {
        CostProjection::new(1000, Vec::new());
    }

    #[test]
    fn test_accessors() {
        let projection = CostProjection::new(
            1000,
            vec![entry(1, 10.0, 10.0), entry(2, 12.5, 22.5)],
        );
        assert_eq!(projection.baseline_volume(), 1000);
        assert_eq!(projection.horizon_months(), 2);
        assert_eq!(projection.final_cumulative_cost(), 22.5);
        assert_eq!(projection.total_cost_raw(), 22.5);
    }
}

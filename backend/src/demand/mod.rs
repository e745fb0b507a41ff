//! Demand modelling for projections.
//!
//! This module turns the validated baseline volume into a per-month volume
//! schedule by applying compound growth and the repeating seasonality curve.
//! All adjustment is deterministic: the same baseline and the same
//! assumptions always produce the same schedule.
//!
//! # Key Principles
//!
//! 1. **Compound growth**: month `m` carries a multiplier of `(1 + g)^(m-1)`,
//!    so month 1 is always the unadjusted baseline
//! 2. **Periodic seasonality**: the 12-factor curve repeats across the
//!    horizon, independent of growth
//! 3. **Whole interactions**: the adjusted volume is rounded to the nearest
//!    whole interaction before costing
//!
//! # Example
//!
//! ```
//! use cost_projection_core_rs::demand::DemandCurve;
//! use cost_projection_core_rs::BusinessAssumptions;
//!
//! let curve = DemandCurve::from_assumptions(&BusinessAssumptions::default());
//!
//! // month 1: no growth yet, January factor 1.1
//! assert_eq!(curve.volume_for_month(1000, 1), 1100);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::assumptions::{BusinessAssumptions, Seasonality};

/// Deterministic volume schedule over a projection horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandCurve {
    /// Compound month-over-month growth rate
    growth_rate: f64,

    /// Seasonal multipliers, periodic with period 12
    seasonality: Seasonality,
}

impl DemandCurve {
    /// Create a demand curve from a growth rate and seasonality table.
    pub fn new(growth_rate: f64, seasonality: Seasonality) -> Self {
        Self {
            growth_rate,
            seasonality,
        }
    }

    /// Build the curve embedded in a set of business assumptions.
    pub fn from_assumptions(assumptions: &BusinessAssumptions) -> Self {
        Self::new(
            assumptions.monthly_growth_rate,
            assumptions.seasonality.clone(),
        )
    }

    /// Compound growth multiplier for a 1-indexed month.
    ///
    /// Month 1 has a multiplier of exactly 1.0.
    pub fn growth_multiplier(&self, month: usize) -> f64 {
        assert!(month > 0, "projection months are 1-indexed");
        (1.0 + self.growth_rate).powi((month - 1) as i32)
    }

    /// Seasonal multiplier for a 1-indexed month.
    pub fn seasonal_factor(&self, month: usize) -> f64 {
        self.seasonality.factor_for(month)
    }

    /// Adjusted whole-interaction volume for a 1-indexed month.
    ///
    /// Applies growth and seasonality to the baseline and rounds to the
    /// nearest whole interaction. Not clamped to the validated input range:
    /// growth is allowed to carry derived volumes past the slider maximum.
    pub fn volume_for_month(&self, baseline_volume: u32, month: usize) -> u32 {
        let adjusted = baseline_volume as f64
            * self.growth_multiplier(month)
            * self.seasonal_factor(month);
        adjusted.round() as u32
    }
}

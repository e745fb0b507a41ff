//! Trend and summary aggregation over cost projections
//!
//! Consumes a finished [`CostProjection`] and produces the derived views
//! the surrounding application renders: per-service time series for charts,
//! summary statistics for the headline cards, per-year service totals for
//! the stacked yearly chart, and the standard-versus-optimized savings
//! comparison.
//!
//! Aggregation never re-costs anything. It only reads the rounded monthly
//! figures already present in the projection, so every number here is
//! consistent with the table a user would sum by hand.

use serde::{Deserialize, Serialize};

use crate::core::money::round_to_cents;
use crate::core::timeline::{Timeline, MONTHS_PER_YEAR};
use crate::models::breakdown::Service;
use crate::models::projection::CostProjection;

/// Discount applied to the optimized savings scenario
///
/// Placeholder rate for the modeled optimization program (reserved
/// capacity, prompt tuning, caching). Not derived from usage; revisit
/// when real optimization levers are modeled.
pub const OPTIMIZED_DISCOUNT_RATE: f64 = 0.15;

// ============================================================================
// Summary Statistics
// ============================================================================

/// Headline statistics over a projection
///
/// All figures are USD rounded to cents at this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Total cost of the first 12 projected months
    pub first_year_total: f64,

    /// Total cost of the whole horizon
    pub horizon_total: f64,

    /// First-year total averaged over 12 months
    pub average_monthly_first_year: f64,

    /// Horizon total averaged over the actual horizon length
    pub average_monthly_total: f64,

    /// Most expensive single month
    pub peak_monthly_cost: f64,

    /// Cheapest single month
    pub lowest_monthly_cost: f64,
}

impl CostSummary {
    /// Summarize a projection
    ///
    /// # Example
    ///
    /// ```rust
    /// use cost_projection_core_rs::{CallVolume, CostEngine, CostSummary};
    ///
    /// let engine = CostEngine::with_defaults();
    /// let projection = engine.project(CallVolume::new(1000).unwrap(), 60);
    /// let summary = CostSummary::from_projection(&projection);
    ///
    /// assert!(summary.first_year_total <= summary.horizon_total);
    /// assert!(summary.lowest_monthly_cost <= summary.peak_monthly_cost);
    /// ```
    pub fn from_projection(projection: &CostProjection) -> Self {
        let months = projection.months();

        let first_year_total: f64 = months
            .iter()
            .take(MONTHS_PER_YEAR)
            .map(|entry| entry.costs.total_monthly_cost)
            .sum();
        let horizon_total = projection.total_cost_raw();

        let mut peak = f64::NEG_INFINITY;
        let mut lowest = f64::INFINITY;
        for entry in months {
            peak = peak.max(entry.costs.total_monthly_cost);
            lowest = lowest.min(entry.costs.total_monthly_cost);
        }

        Self {
            first_year_total: round_to_cents(first_year_total),
            horizon_total: round_to_cents(horizon_total),
            // Averaged over a nominal 12 months even for short horizons,
            // so the first-year card always reads as a monthly run rate
            average_monthly_first_year: round_to_cents(
                first_year_total / MONTHS_PER_YEAR as f64,
            ),
            average_monthly_total: round_to_cents(horizon_total / months.len() as f64),
            peak_monthly_cost: round_to_cents(peak),
            lowest_monthly_cost: round_to_cents(lowest),
        }
    }
}

// ============================================================================
// Savings Scenario
// ============================================================================

/// Standard-versus-optimized cost comparison over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsScenario {
    /// Horizon total at list behavior (USD, cents)
    pub standard: f64,

    /// Horizon total with the optimization discount applied (USD, cents)
    pub optimized: f64,

    /// Absolute savings over the horizon (USD, cents)
    pub savings: f64,

    /// Savings as a percentage of the standard total
    pub savings_percentage: f64,
}

impl SavingsScenario {
    /// Compare the projection against its discounted counterpart
    ///
    /// # Example
    ///
    /// ```rust
    /// use cost_projection_core_rs::{CallVolume, CostEngine, SavingsScenario};
    ///
    /// let engine = CostEngine::with_defaults();
    /// let projection = engine.project(CallVolume::new(1000).unwrap(), 60);
    /// let scenario = SavingsScenario::from_projection(&projection);
    ///
    /// assert_eq!(scenario.savings_percentage, 15.0);
    /// ```
    pub fn from_projection(projection: &CostProjection) -> Self {
        let standard = projection.total_cost_raw();
        let optimized = standard * (1.0 - OPTIMIZED_DISCOUNT_RATE);
        let savings = standard - optimized;
        // Zero-cost configs (all-free pricing) would otherwise divide 0 by 0
        let savings_percentage = if standard > 0.0 {
            savings / standard * 100.0
        } else {
            0.0
        };

        Self {
            standard: round_to_cents(standard),
            optimized: round_to_cents(optimized),
            savings: round_to_cents(savings),
            savings_percentage: round_to_cents(savings_percentage),
        }
    }
}

// ============================================================================
// Service Trends
// ============================================================================

/// One month of a single service's trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 1-indexed projection month
    pub month: usize,

    /// Service cost for the month (USD, cents)
    pub cost: f64,

    /// Service usage proxy (sum of the service's two unit counts)
    pub volume: u64,
}

/// Per-service cost trend over the whole horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTrend {
    /// Which service this trend describes
    pub service: Service,

    /// One point per projected month
    pub monthly_data: Vec<TrendPoint>,

    /// Service cost summed over the horizon (USD, cents)
    pub total_cost: f64,

    /// Horizon total averaged per month (USD, cents)
    pub average_monthly_cost: f64,
}

/// Build the three per-service trends from a projection
///
/// Services appear in reporting order: Connect, Lex, Bedrock.
pub fn service_trends(projection: &CostProjection) -> Vec<ServiceTrend> {
    Service::ALL
        .iter()
        .map(|&service| {
            let monthly_data: Vec<TrendPoint> = projection
                .months()
                .iter()
                .map(|entry| TrendPoint {
                    month: entry.month,
                    cost: entry.costs.service_cost(service),
                    volume: entry.costs.service_volume(service),
                })
                .collect();

            let total_cost: f64 = monthly_data.iter().map(|point| point.cost).sum();
            let average_monthly_cost = total_cost / monthly_data.len() as f64;

            ServiceTrend {
                service,
                monthly_data,
                total_cost: round_to_cents(total_cost),
                average_monthly_cost: round_to_cents(average_monthly_cost),
            }
        })
        .collect()
}

// ============================================================================
// Yearly Totals
// ============================================================================

/// Per-service cost totals for one projection year
///
/// The final year of an uneven horizon covers fewer than 12 months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearServiceTotals {
    /// 1-indexed projection year
    pub year: usize,

    /// Amazon Connect total for the year (USD, cents)
    pub connect: f64,

    /// Amazon Lex total for the year (USD, cents)
    pub lex: f64,

    /// Amazon Bedrock total for the year (USD, cents)
    pub bedrock: f64,
}

impl YearServiceTotals {
    /// Combined cost of all three services for the year
    pub fn total(&self) -> f64 {
        self.connect + self.lex + self.bedrock
    }
}

/// Sum each service's costs into 12-month buckets
///
/// # Example
///
/// ```rust
/// use cost_projection_core_rs::{yearly_service_totals, CallVolume, CostEngine};
///
/// let engine = CostEngine::with_defaults();
/// let projection = engine.project(CallVolume::new(1000).unwrap(), 60);
/// let years = yearly_service_totals(&projection);
///
/// assert_eq!(years.len(), 5);
/// assert_eq!(years[0].year, 1);
/// ```
pub fn yearly_service_totals(projection: &CostProjection) -> Vec<YearServiceTotals> {
    let timeline = Timeline::new(projection.horizon_months());
    let mut years = Vec::with_capacity(timeline.num_years());

    for (index, chunk) in projection.months().chunks(MONTHS_PER_YEAR).enumerate() {
        let mut connect = 0.0;
        let mut lex = 0.0;
        let mut bedrock = 0.0;
        for entry in chunk {
            connect += entry.costs.connect.monthly_cost;
            lex += entry.costs.lex.monthly_cost;
            bedrock += entry.costs.bedrock.monthly_cost;
        }
        years.push(YearServiceTotals {
            year: index + 1,
            connect: round_to_cents(connect),
            lex: round_to_cents(lex),
            bedrock: round_to_cents(bedrock),
        });
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::volume::CallVolume;
    use crate::projection::engine::CostEngine;

    fn projection(horizon: usize) -> CostProjection {
        let engine = CostEngine::with_defaults();
        engine.project(CallVolume::new(1000).unwrap(), horizon)
    }

    #[test]
    fn test_summary_short_horizon_still_averages_over_twelve() {
        let summary = CostSummary::from_projection(&projection(6));
        // first-year total covers the 6 available months but the average
        // divides by 12, reading as a run rate against a full year
        assert_eq!(
            summary.average_monthly_first_year,
            round_to_cents(summary.first_year_total / 12.0)
        );
    }

    #[test]
    fn test_savings_percentage_is_the_discount() {
        let scenario = SavingsScenario::from_projection(&projection(60));
        assert_eq!(scenario.savings_percentage, 15.0);
    }

    #[test]
    fn test_trends_cover_all_services_in_order() {
        let trends = service_trends(&projection(12));
        let services: Vec<Service> = trends.iter().map(|t| t.service).collect();
        assert_eq!(services, vec![Service::Connect, Service::Lex, Service::Bedrock]);
    }

    #[test]
    fn test_yearly_totals_partial_final_year() {
        let years = yearly_service_totals(&projection(14));
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 1);
        assert_eq!(years[1].year, 2);
    }
}

//! Cost Projection Engine
//!
//! Main costing pipeline integrating all components:
//! - Monthly cost calculation (per-service usage and pricing)
//! - Demand adjustment (compound growth plus seasonality)
//! - Multi-month projection with cumulative totals
//!
//! # Architecture
//!
//! The engine derives everything from one validated baseline volume:
//!
//! ```text
//! For each month m in 1..=horizon:
//! 1. Adjust baseline volume for growth and seasonality
//! 2. Derive per-service usage (minutes, messages, requests, tokens)
//! 3. Price usage against the injected pricing table
//! 4. Round counts and costs for the month entry
//! 5. Accumulate the cumulative total
//! ```
//!
//! All arithmetic is deterministic. The same config and baseline always
//! produce identical projections, which is what makes report fingerprints
//! meaningful.
//!
//! # Example
//!
//! ```rust
//! use cost_projection_core_rs::{CallVolume, CostEngine, EngineConfig};
//!
//! let engine = CostEngine::new(EngineConfig::default()).unwrap();
//! let volume = CallVolume::new(1000).unwrap();
//!
//! let costs = engine.monthly_costs(volume);
//! assert_eq!(costs.connect.voice_minutes, 2450);
//!
//! let projection = engine.project(volume, 60);
//! assert_eq!(projection.months().len(), 60);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::money::{round_count, round_to_cents};
use crate::demand::DemandCurve;
use crate::models::assumptions::BusinessAssumptions;
use crate::models::breakdown::{BedrockCosts, ConnectCosts, CostBreakdown, LexCosts};
use crate::models::pricing::PricingTable;
use crate::models::projection::{CostProjection, MonthProjection};
use crate::models::volume::CallVolume;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete engine configuration
///
/// Bundles the pricing table and business assumptions for one engine run.
/// Defaults reproduce the calibrated US-East model; tests and what-if runs
/// override individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Unit prices for the three services
    pub pricing: PricingTable,

    /// Usage ratios, rates, and the demand curve
    pub assumptions: BusinessAssumptions,
}

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid pricing: {0}")]
    InvalidPricing(String),

    #[error("invalid assumptions: {0}")]
    InvalidAssumptions(String),
}

// ============================================================================
// Engine
// ============================================================================

/// Deterministic cost projection engine
///
/// Owns a validated configuration and derives monthly breakdowns and
/// multi-month projections from baseline call volumes. Construction
/// validates the config once; after that every costing call is total.
#[derive(Debug)]
pub struct CostEngine {
    /// Unit prices, validated non-negative and finite
    pricing: PricingTable,

    /// Usage assumptions, validated in range
    assumptions: BusinessAssumptions,

    /// Volume schedule derived from the assumptions
    demand: DemandCurve,
}

impl CostEngine {
    /// Create a new engine from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Pricing table and business assumptions
    ///
    /// # Returns
    ///
    /// * `Ok(CostEngine)` - Successfully validated engine
    /// * `Err(ConfigError)` - A price or assumption is out of range
    ///
    /// # Example
    ///
    /// ```rust
    /// use cost_projection_core_rs::{CostEngine, EngineConfig};
    ///
    /// assert!(CostEngine::new(EngineConfig::default()).is_ok());
    ///
    /// let mut config = EngineConfig::default();
    /// config.pricing.connect.voice_per_minute = -1.0;
    /// assert!(CostEngine::new(config).is_err());
    /// ```
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::validate_config(&config)?;

        let demand = DemandCurve::from_assumptions(&config.assumptions);

        Ok(Self {
            pricing: config.pricing,
            assumptions: config.assumptions,
            demand,
        })
    }

    /// Create an engine with the default pricing table and assumptions
    ///
    /// The defaults are valid by construction, so this never fails.
    pub fn with_defaults() -> Self {
        let config = EngineConfig::default();
        let demand = DemandCurve::from_assumptions(&config.assumptions);
        Self {
            pricing: config.pricing,
            assumptions: config.assumptions,
            demand,
        }
    }

    /// Validate configuration
    fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
        for (name, price) in config.pricing.named_prices() {
            if !price.is_finite() || price < 0.0 {
                return Err(ConfigError::InvalidPricing(format!(
                    "{} must be a non-negative number",
                    name
                )));
            }
        }

        let a = &config.assumptions;

        for (name, ratio) in [
            ("chat_to_voice_ratio", a.chat_to_voice_ratio),
            ("knowledge_base_query_rate", a.knowledge_base_query_rate),
            ("agent_invocation_rate", a.agent_invocation_rate),
        ] {
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::InvalidAssumptions(format!(
                    "{} must be within [0, 1]",
                    name
                )));
            }
        }

        for (name, quantity) in [
            ("avg_call_duration_minutes", a.avg_call_duration_minutes),
            ("avg_messages_per_chat", a.avg_messages_per_chat),
            (
                "avg_text_interactions_per_chat",
                a.avg_text_interactions_per_chat,
            ),
            ("avg_tokens_per_query", a.avg_tokens_per_query),
            ("avg_tokens_per_response", a.avg_tokens_per_response),
        ] {
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(ConfigError::InvalidAssumptions(format!(
                    "{} must be a non-negative number",
                    name
                )));
            }
        }

        // Growth below -100% would turn demand negative
        if !a.monthly_growth_rate.is_finite() || a.monthly_growth_rate <= -1.0 {
            return Err(ConfigError::InvalidAssumptions(
                "monthly_growth_rate must be greater than -1".to_string(),
            ));
        }

        for (index, factor) in a.seasonality.factors().iter().enumerate() {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(ConfigError::InvalidAssumptions(format!(
                    "seasonality factor for month {} must be positive",
                    index + 1
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the pricing table in effect
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Get the business assumptions in effect
    pub fn assumptions(&self) -> &BusinessAssumptions {
        &self.assumptions
    }

    /// Clone the effective configuration
    ///
    /// Reports serialize this to fingerprint the run.
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            pricing: self.pricing.clone(),
            assumptions: self.assumptions.clone(),
        }
    }

    // ========================================================================
    // Monthly Costing
    // ========================================================================

    /// Calculate the per-service cost breakdown at a validated volume
    ///
    /// # Example
    ///
    /// ```rust
    /// use cost_projection_core_rs::{CallVolume, CostEngine};
    ///
    /// let engine = CostEngine::with_defaults();
    /// let costs = engine.monthly_costs(CallVolume::new(1000).unwrap());
    ///
    /// // 1000 interactions split 70/30 voice/chat at the defaults
    /// assert_eq!(costs.connect.voice_minutes, 2450);
    /// assert_eq!(costs.connect.chat_messages, 1500);
    /// ```
    pub fn monthly_costs(&self, volume: CallVolume) -> CostBreakdown {
        self.breakdown_for(volume.get())
    }

    /// Core costing at a raw volume
    ///
    /// Used for both the validated baseline and growth-derived volumes,
    /// which may legitimately exceed the validated input maximum.
    fn breakdown_for(&self, call_volume: u32) -> CostBreakdown {
        let volume = call_volume as f64;
        let pricing = &self.pricing;
        let a = &self.assumptions;

        // Amazon Connect: voice minutes plus chat messages
        let voice_minutes = volume * a.voice_share() * a.avg_call_duration_minutes;
        let chat_messages = volume * a.chat_to_voice_ratio * a.avg_messages_per_chat;
        let connect_cost = voice_minutes * pricing.connect.voice_per_minute
            + chat_messages * pricing.connect.chat_per_message;

        // Amazon Lex: gross requests, free tier floored at zero
        let voice_requests = volume * a.voice_share();
        let text_requests = volume * a.chat_to_voice_ratio * a.avg_text_interactions_per_chat;
        let billable_voice = (voice_requests - pricing.lex.free_voice_requests).max(0.0);
        let billable_text = (text_requests - pricing.lex.free_text_requests).max(0.0);
        let lex_cost = billable_voice * pricing.lex.voice_request_price
            + billable_text * pricing.lex.text_request_price;

        // Amazon Bedrock: per-query and per-invocation charges plus tokens
        let kb_queries = volume * a.knowledge_base_query_rate;
        let agent_invocations = volume * a.agent_invocation_rate;
        let input_tokens = (kb_queries + agent_invocations) * a.avg_tokens_per_query;
        let output_tokens = (kb_queries + agent_invocations) * a.avg_tokens_per_response;
        let token_cost = (input_tokens / 1000.0) * pricing.bedrock.input_token_price_per_1k
            + (output_tokens / 1000.0) * pricing.bedrock.output_token_price_per_1k;
        let bedrock_cost = token_cost
            + kb_queries * pricing.bedrock.knowledge_base_query_price
            + agent_invocations * pricing.bedrock.agent_invocation_price;

        CostBreakdown {
            connect: ConnectCosts {
                voice_minutes: round_count(voice_minutes),
                chat_messages: round_count(chat_messages),
                monthly_cost: round_to_cents(connect_cost),
            },
            lex: LexCosts {
                text_requests: round_count(text_requests),
                voice_requests: round_count(voice_requests),
                monthly_cost: round_to_cents(lex_cost),
            },
            bedrock: BedrockCosts {
                knowledge_base_queries: round_count(kb_queries),
                agent_invocations: round_count(agent_invocations),
                monthly_cost: round_to_cents(bedrock_cost),
            },
            // Rounded from the unrounded sum, not the rounded parts
            total_monthly_cost: round_to_cents(connect_cost + lex_cost + bedrock_cost),
        }
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Project costs over a horizon of months
    ///
    /// Each month the baseline is adjusted by compound growth and the
    /// seasonality curve, costed, and appended with a running cumulative
    /// total. The cumulative total accumulates the rounded monthly totals,
    /// matching what a reader summing the monthly column would get.
    ///
    /// # Arguments
    ///
    /// * `baseline` - Validated baseline volume for month 1 (before seasonality)
    /// * `horizon_months` - Number of months to project, at least 1
    ///
    /// # Panics
    ///
    /// Panics if `horizon_months` is zero. A zero-length projection is a
    /// caller bug; input validation belongs at the volume boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cost_projection_core_rs::{CallVolume, CostEngine, DEFAULT_HORIZON_MONTHS};
    ///
    /// let engine = CostEngine::with_defaults();
    /// let volume = CallVolume::new(1000).unwrap();
    /// let projection = engine.project(volume, DEFAULT_HORIZON_MONTHS);
    ///
    /// assert_eq!(projection.horizon_months(), 60);
    /// let first = &projection.months()[0];
    /// assert_eq!(first.cumulative_cost, first.costs.total_monthly_cost);
    /// ```
    pub fn project(&self, baseline: CallVolume, horizon_months: usize) -> CostProjection {
        assert!(horizon_months > 0, "horizon_months must be positive");

        let mut months = Vec::with_capacity(horizon_months);
        let mut cumulative = 0.0_f64;

        for month in 1..=horizon_months {
            let call_volume = self.demand.volume_for_month(baseline.get(), month);
            let costs = self.breakdown_for(call_volume);
            cumulative += costs.total_monthly_cost;
            months.push(MonthProjection {
                month,
                call_volume,
                costs,
                cumulative_cost: round_to_cents(cumulative),
            });
        }

        CostProjection::new(baseline.get(), months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CostEngine::new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut config = EngineConfig::default();
        config.pricing.lex.text_request_price = -0.1;
        let err = CostEngine::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPricing(_)));
        assert!(err.to_string().contains("lex.text_request_price"));
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        let mut config = EngineConfig::default();
        config.assumptions.chat_to_voice_ratio = 1.5;
        let err = CostEngine::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAssumptions(_)));
    }

    #[test]
    fn test_growth_at_or_below_negative_one_rejected() {
        let mut config = EngineConfig::default();
        config.assumptions.monthly_growth_rate = -1.0;
        assert!(CostEngine::new(config).is_err());

        let mut config = EngineConfig::default();
        config.assumptions.monthly_growth_rate = -0.5;
        assert!(CostEngine::new(config).is_ok());
    }

    #[test]
    fn test_non_positive_seasonal_factor_rejected() {
        let mut config = EngineConfig::default();
        let mut factors = *config.assumptions.seasonality.factors();
        factors[4] = 0.0;
        config.assumptions.seasonality = crate::models::Seasonality::new(factors);
        let err = CostEngine::new(config).unwrap_err();
        assert!(err.to_string().contains("month 5"));
    }

    #[test]
    fn test_nan_price_rejected() {
        let mut config = EngineConfig::default();
        config.pricing.bedrock.agent_invocation_price = f64::NAN;
        assert!(CostEngine::new(config).is_err());
    }

    #[test]
    fn test_accessors_expose_the_effective_config() {
        let mut config = EngineConfig::default();
        config.assumptions.monthly_growth_rate = 0.03;
        let engine = CostEngine::new(config.clone()).unwrap();

        assert_eq!(engine.assumptions().monthly_growth_rate, 0.03);
        assert_eq!(engine.pricing(), &config.pricing);
        assert_eq!(engine.config(), config);
    }

    #[test]
    #[should_panic(expected = "horizon_months must be positive")]
    fn test_zero_horizon_panics() {
        let engine = CostEngine::with_defaults();
        engine.project(CallVolume::new(1000).unwrap(), 0);
    }
}

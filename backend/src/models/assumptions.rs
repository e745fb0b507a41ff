//! Business assumptions driving the cost model
//!
//! Converts a single baseline volume (customer interactions per month) into
//! per-service usage: how interactions split between voice and chat, how much
//! traffic each interaction generates downstream, and how demand moves over
//! time (compound growth plus a repeating 12-month seasonality curve).
//!
//! Defaults reflect the contact-center profile the projections were built
//! for. Like pricing, assumptions are injected at engine construction.

use serde::{Deserialize, Serialize};

use crate::core::timeline::MONTHS_PER_YEAR;

/// Seasonal demand multipliers, one per calendar month
///
/// Indexed by projection month with a period of 12, so month 13 sees the
/// January factor again. Factors above 1.0 model busy months, below 1.0
/// quiet ones.
///
/// # Example
/// ```
/// use cost_projection_core_rs::Seasonality;
///
/// let seasonality = Seasonality::default();
/// assert_eq!(seasonality.factor_for(1), 1.1);   // January
/// assert_eq!(seasonality.factor_for(13), 1.1);  // January again
/// assert_eq!(seasonality.factor_for(7), 1.3);   // July peak
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seasonality([f64; MONTHS_PER_YEAR]);

impl Seasonality {
    /// Create a seasonality curve from 12 monthly factors (January first)
    pub fn new(factors: [f64; MONTHS_PER_YEAR]) -> Self {
        Self(factors)
    }

    /// Multiplier for a 1-indexed projection month
    ///
    /// # Panics
    /// Panics if `month` is zero; projection months are 1-indexed.
    pub fn factor_for(&self, month: usize) -> f64 {
        assert!(month > 0, "projection months are 1-indexed");
        self.0[(month - 1) % MONTHS_PER_YEAR]
    }

    /// Get the underlying factor table (January first)
    pub fn factors(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.0
    }
}

impl Default for Seasonality {
    fn default() -> Self {
        // January through December
        Self([
            1.1, 0.9, 1.0, 1.0, 1.1, 1.2, 1.3, 1.2, 1.0, 1.0, 1.1, 1.2,
        ])
    }
}

/// Usage and demand assumptions for one engine run
///
/// # Example
/// ```
/// use cost_projection_core_rs::BusinessAssumptions;
///
/// let assumptions = BusinessAssumptions::default();
/// assert_eq!(assumptions.chat_to_voice_ratio, 0.3);
/// assert_eq!(assumptions.voice_share(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessAssumptions {
    /// Average duration of a voice call in minutes
    pub avg_call_duration_minutes: f64,

    /// Fraction of interactions arriving as chat (the rest are voice)
    pub chat_to_voice_ratio: f64,

    /// Chat messages exchanged per chat interaction
    pub avg_messages_per_chat: f64,

    /// Lex text requests generated per chat interaction
    pub avg_text_interactions_per_chat: f64,

    /// Fraction of interactions that trigger a knowledge base query
    pub knowledge_base_query_rate: f64,

    /// Fraction of interactions that trigger an agent invocation
    pub agent_invocation_rate: f64,

    /// Foundation model input tokens per query or invocation
    pub avg_tokens_per_query: f64,

    /// Foundation model output tokens per query or invocation
    pub avg_tokens_per_response: f64,

    /// Compound month-over-month demand growth rate (0.02 = 2%)
    pub monthly_growth_rate: f64,

    /// Seasonal demand curve applied on top of growth
    pub seasonality: Seasonality,
}

impl BusinessAssumptions {
    /// Fraction of interactions arriving as voice calls
    pub fn voice_share(&self) -> f64 {
        1.0 - self.chat_to_voice_ratio
    }
}

impl Default for BusinessAssumptions {
    fn default() -> Self {
        Self {
            avg_call_duration_minutes: 3.5,
            chat_to_voice_ratio: 0.3,
            avg_messages_per_chat: 5.0,
            avg_text_interactions_per_chat: 3.0,
            knowledge_base_query_rate: 0.6,
            agent_invocation_rate: 0.8,
            avg_tokens_per_query: 500.0,
            avg_tokens_per_response: 300.0,
            monthly_growth_rate: 0.02,
            seasonality: Seasonality::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonality_period_wraps() {
        let seasonality = Seasonality::default();
        for month in 1..=12 {
            assert_eq!(
                seasonality.factor_for(month),
                seasonality.factor_for(month + 12)
            );
        }
    }

    #[test]
    #[should_panic(expected = "projection months are 1-indexed")]
    fn test_seasonality_month_zero_panics() {
        Seasonality::default().factor_for(0);
    }

    #[test]
    fn test_voice_share_complements_chat_ratio() {
        let assumptions = BusinessAssumptions {
            chat_to_voice_ratio: 0.25,
            ..Default::default()
        };
        assert_eq!(assumptions.voice_share(), 0.75);
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let assumptions: BusinessAssumptions =
            serde_json::from_str(r#"{"monthly_growth_rate": 0.05}"#)
                .expect("valid assumptions JSON");
        assert_eq!(assumptions.monthly_growth_rate, 0.05);
        assert_eq!(assumptions.avg_call_duration_minutes, 3.5);
        assert_eq!(assumptions.seasonality, Seasonality::default());
    }
}

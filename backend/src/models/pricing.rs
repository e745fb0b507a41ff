//! Service pricing tables
//!
//! Unit prices for the three billed services: Amazon Connect (voice minutes
//! and chat messages), Amazon Lex (voice and text requests with a monthly
//! free tier), and Amazon Bedrock (knowledge base queries, agent invocations,
//! and foundation-model tokens priced per 1K).
//!
//! Defaults carry the US-East list prices the model was calibrated against.
//! The whole table is injected at engine construction, so tests and what-if
//! runs can substitute their own prices without touching the engine.
//!
//! CRITICAL: All prices are f64 dollars per unit. Amounts are only rounded
//! to cents at output boundaries, never inside the tables.

use serde::{Deserialize, Serialize};

/// Amazon Connect unit prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectPricing {
    /// Price per voice minute (USD)
    pub voice_per_minute: f64,

    /// Price per chat message (USD)
    pub chat_per_message: f64,
}

impl Default for ConnectPricing {
    fn default() -> Self {
        Self {
            voice_per_minute: 0.018,
            chat_per_message: 0.004,
        }
    }
}

/// Amazon Lex unit prices and free tier
///
/// Free-tier allowances are subtracted from the monthly request counts
/// before pricing; months below the allowance bill at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexPricing {
    /// Price per voice request (USD)
    pub voice_request_price: f64,

    /// Price per text request (USD)
    pub text_request_price: f64,

    /// Voice requests covered by the free tier each month
    pub free_voice_requests: f64,

    /// Text requests covered by the free tier each month
    pub free_text_requests: f64,
}

impl Default for LexPricing {
    fn default() -> Self {
        Self {
            voice_request_price: 0.004,
            text_request_price: 0.00075,
            free_voice_requests: 1_000.0,
            free_text_requests: 10_000.0,
        }
    }
}

/// Amazon Bedrock unit prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockPricing {
    /// Price per knowledge base query (USD)
    pub knowledge_base_query_price: f64,

    /// Price per agent invocation (USD)
    pub agent_invocation_price: f64,

    /// Foundation model input token price per 1K tokens (USD)
    pub input_token_price_per_1k: f64,

    /// Foundation model output token price per 1K tokens (USD)
    pub output_token_price_per_1k: f64,
}

impl Default for BedrockPricing {
    fn default() -> Self {
        Self {
            knowledge_base_query_price: 0.0004,
            agent_invocation_price: 0.002,
            input_token_price_per_1k: 0.0008,
            output_token_price_per_1k: 0.0016,
        }
    }
}

/// Complete pricing table for one engine run
///
/// # Example
/// ```
/// use cost_projection_core_rs::PricingTable;
///
/// let pricing = PricingTable::default();
/// assert_eq!(pricing.connect.voice_per_minute, 0.018);
/// assert_eq!(pricing.lex.free_text_requests, 10_000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub connect: ConnectPricing,
    pub lex: LexPricing,
    pub bedrock: BedrockPricing,
}

impl PricingTable {
    /// Iterate every price in the table with a dotted field name
    ///
    /// Used by config validation to reject negative or non-finite prices
    /// with a message naming the offending field.
    pub(crate) fn named_prices(&self) -> [(&'static str, f64); 10] {
        [
            ("connect.voice_per_minute", self.connect.voice_per_minute),
            ("connect.chat_per_message", self.connect.chat_per_message),
            ("lex.voice_request_price", self.lex.voice_request_price),
            ("lex.text_request_price", self.lex.text_request_price),
            ("lex.free_voice_requests", self.lex.free_voice_requests),
            ("lex.free_text_requests", self.lex.free_text_requests),
            (
                "bedrock.knowledge_base_query_price",
                self.bedrock.knowledge_base_query_price,
            ),
            (
                "bedrock.agent_invocation_price",
                self.bedrock.agent_invocation_price,
            ),
            (
                "bedrock.input_token_price_per_1k",
                self.bedrock.input_token_price_per_1k,
            ),
            (
                "bedrock.output_token_price_per_1k",
                self.bedrock.output_token_price_per_1k,
            ),
        ]
    }
}

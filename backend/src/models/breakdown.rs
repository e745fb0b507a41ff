//! Monthly cost breakdown
//!
//! One month of estimated usage and cost, split across the three billed
//! services. Usage counts are rounded to whole units for display; each cost
//! is computed from the unrounded quantities and then rounded to cents.
//!
//! CRITICAL: `total_monthly_cost` is rounded from the sum of the unrounded
//! service costs. It can therefore differ from the sum of the three rounded
//! service costs by a cent; consumers must not recompute the total.

use serde::{Deserialize, Serialize};

/// The three billed services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Amazon Connect")]
    Connect,
    #[serde(rename = "Amazon Lex")]
    Lex,
    #[serde(rename = "Amazon Bedrock")]
    Bedrock,
}

impl Service {
    /// All services, in reporting order
    pub const ALL: [Service; 3] = [Service::Connect, Service::Lex, Service::Bedrock];

    /// Display name used in trend output and tables
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Connect => "Amazon Connect",
            Service::Lex => "Amazon Lex",
            Service::Bedrock => "Amazon Bedrock",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Amazon Connect usage and cost for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectCosts {
    /// Estimated voice minutes
    pub voice_minutes: u64,

    /// Estimated chat messages
    pub chat_messages: u64,

    /// Monthly cost (USD, cents precision)
    pub monthly_cost: f64,
}

/// Amazon Lex usage and cost for one month
///
/// Request counts are the gross counts before the free tier is applied;
/// `monthly_cost` reflects only the billable remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexCosts {
    /// Estimated text requests (gross, before free tier)
    pub text_requests: u64,

    /// Estimated voice requests (gross, before free tier)
    pub voice_requests: u64,

    /// Monthly cost (USD, cents precision)
    pub monthly_cost: f64,
}

/// Amazon Bedrock usage and cost for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockCosts {
    /// Estimated knowledge base queries
    pub knowledge_base_queries: u64,

    /// Estimated agent invocations
    pub agent_invocations: u64,

    /// Monthly cost including token charges (USD, cents precision)
    pub monthly_cost: f64,
}

/// Complete per-service cost breakdown for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub connect: ConnectCosts,
    pub lex: LexCosts,
    pub bedrock: BedrockCosts,

    /// Total monthly cost (USD, cents precision)
    pub total_monthly_cost: f64,
}

impl CostBreakdown {
    /// Cost of a single service in this breakdown
    pub fn service_cost(&self, service: Service) -> f64 {
        match service {
            Service::Connect => self.connect.monthly_cost,
            Service::Lex => self.lex.monthly_cost,
            Service::Bedrock => self.bedrock.monthly_cost,
        }
    }

    /// Usage proxy for a service: the sum of its two unit counts
    ///
    /// Connect reports minutes plus messages, Lex gross requests, Bedrock
    /// queries plus invocations. Used as the volume axis in trend charts.
    pub fn service_volume(&self, service: Service) -> u64 {
        match service {
            Service::Connect => self.connect.voice_minutes + self.connect.chat_messages,
            Service::Lex => self.lex.text_requests + self.lex.voice_requests,
            Service::Bedrock => {
                self.bedrock.knowledge_base_queries + self.bedrock.agent_invocations
            }
        }
    }
}

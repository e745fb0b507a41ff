//! Domain models for the cost projection engine

pub mod assumptions;
pub mod breakdown;
pub mod pricing;
pub mod projection;
pub mod volume;

// Re-exports
pub use assumptions::{BusinessAssumptions, Seasonality};
pub use breakdown::{BedrockCosts, ConnectCosts, CostBreakdown, LexCosts, Service};
pub use pricing::{BedrockPricing, ConnectPricing, LexPricing, PricingTable};
pub use projection::{CostProjection, MonthProjection};
pub use volume::{CallVolume, VolumeError, MAX_CALL_VOLUME, MIN_CALL_VOLUME};

//! Cost Projection Core - Rust Engine
//!
//! Deterministic cost projection engine for a conversational AI contact
//! center running on Amazon Connect, Amazon Lex, and Amazon Bedrock.
//!
//! # Architecture
//!
//! - **core**: Money rounding and the projection timeline
//! - **models**: Domain types (pricing, assumptions, volume, breakdowns)
//! - **demand**: Growth and seasonality volume scheduling
//! - **projection**: The costing engine and serializable reports
//! - **analysis**: Summary statistics, trends, and savings scenarios
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 dollars, rounded to cents only at output
//! 2. All derivation is deterministic (same config + volume = same output)
//! 3. Baseline volumes are validated once at the boundary; derived volumes
//!    are trusted
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod analysis;
pub mod core;
pub mod demand;
pub mod models;
pub mod projection;

// Re-exports for convenience
pub use crate::analysis::{
    service_trends, yearly_service_totals, CostSummary, SavingsScenario, ServiceTrend,
    TrendPoint, YearServiceTotals, OPTIMIZED_DISCOUNT_RATE,
};
pub use crate::core::money::{round_count, round_to_cents};
pub use crate::core::timeline::{Timeline, DEFAULT_HORIZON_MONTHS, MONTHS_PER_YEAR};
pub use crate::demand::DemandCurve;
pub use crate::models::{
    assumptions::{BusinessAssumptions, Seasonality},
    breakdown::{BedrockCosts, ConnectCosts, CostBreakdown, LexCosts, Service},
    pricing::{BedrockPricing, ConnectPricing, LexPricing, PricingTable},
    projection::{CostProjection, MonthProjection},
    volume::{CallVolume, VolumeError, MAX_CALL_VOLUME, MIN_CALL_VOLUME},
};
pub use crate::projection::{
    compute_config_hash, validate_report, ConfigError, CostEngine, EngineConfig,
    ProjectionReport, ReportError,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cost_projection_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyCostEngine>()?;
    Ok(())
}

//! Projection engine and report output

pub mod engine;
pub mod report;

// Re-exports
pub use engine::{ConfigError, CostEngine, EngineConfig};
pub use report::{compute_config_hash, validate_report, ProjectionReport, ReportError};

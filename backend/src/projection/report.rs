//! Projection Report - Serializable Engine Output
//!
//! Bundles one complete engine run (projection, summary, savings, trends)
//! into a single serializable artifact that a frontend or script can consume
//! without re-running the engine.
//!
//! # Critical Invariants
//!
//! - **Determinism**: the config fingerprint is a canonical-JSON SHA256, so
//!   the same config always fingerprints identically regardless of field
//!   ordering at serialization time
//! - **Sequence Integrity**: a report's months are contiguous from 1 and its
//!   cumulative costs never decrease
//! - **Config Matching**: a report can be verified against the config that
//!   is about to reuse it; a mismatch means the report is stale

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::{service_trends, CostSummary, SavingsScenario, ServiceTrend};
use crate::models::projection::CostProjection;
use crate::models::volume::CallVolume;
use crate::projection::engine::{CostEngine, EngineConfig};

/// Report errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("config mismatch: expected hash {expected}, got {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("report integrity error: {0}")]
    Integrity(String),
}

// ============================================================================
// Report Structure
// ============================================================================

/// Complete output of one engine run
///
/// # Example
///
/// ```rust
/// use cost_projection_core_rs::{CallVolume, CostEngine, ProjectionReport};
///
/// let engine = CostEngine::with_defaults();
/// let volume = CallVolume::new(1000).unwrap();
/// let report = ProjectionReport::generate(&engine, volume, 60).unwrap();
///
/// assert_eq!(report.horizon_months, 60);
/// assert!(report.verify_against(&engine.config()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// Unique report identifier (UUID v4)
    pub report_id: String,

    /// Validated baseline volume the run started from
    pub baseline_volume: u32,

    /// Number of months projected
    pub horizon_months: usize,

    /// SHA256 fingerprint of the engine config that produced this report
    pub config_hash: String,

    /// Full monthly projection
    pub projection: CostProjection,

    /// Headline statistics
    pub summary: CostSummary,

    /// Standard-versus-optimized comparison
    pub savings: SavingsScenario,

    /// Per-service trend series
    pub trends: Vec<ServiceTrend>,
}

impl ProjectionReport {
    /// Run the engine and bundle everything into a report
    ///
    /// # Arguments
    ///
    /// * `engine` - Validated engine to run
    /// * `baseline` - Validated baseline volume
    /// * `horizon_months` - Months to project, at least 1
    pub fn generate(
        engine: &CostEngine,
        baseline: CallVolume,
        horizon_months: usize,
    ) -> Result<Self, ReportError> {
        let projection = engine.project(baseline, horizon_months);
        let summary = CostSummary::from_projection(&projection);
        let savings = SavingsScenario::from_projection(&projection);
        let trends = service_trends(&projection);
        let config_hash = compute_config_hash(&engine.config())?;

        Ok(Self {
            report_id: Uuid::new_v4().to_string(),
            baseline_volume: baseline.get(),
            horizon_months,
            config_hash,
            projection,
            summary,
            savings,
            trends,
        })
    }

    /// Serialize the report to JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Serialization(format!("report serialization failed: {}", e)))
    }

    /// Deserialize a report from JSON and check its integrity
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json).map_err(|e| {
            ReportError::Deserialization(format!("report deserialization failed: {}", e))
        })?;
        validate_report(&report)?;
        Ok(report)
    }

    /// Verify the report was produced by `config` and is internally sound
    ///
    /// Returns `ConfigMismatch` when the fingerprints differ, so callers can
    /// tell a stale report from a corrupted one.
    pub fn verify_against(&self, config: &EngineConfig) -> Result<(), ReportError> {
        let actual = compute_config_hash(config)?;
        if actual != self.config_hash {
            return Err(ReportError::ConfigMismatch {
                expected: self.config_hash.clone(),
                actual,
            });
        }
        validate_report(self)
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a config
///
/// Uses canonical JSON serialization with recursively sorted object keys,
/// so the fingerprint is independent of map iteration order and field
/// declaration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, ReportError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config)
        .map_err(|e| ReportError::Serialization(format!("config serialization failed: {}", e)))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical_value = canonicalize(value);

    let json = serde_json::to_string(&canonical_value)
        .map_err(|e| ReportError::Serialization(format!("config serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate report integrity
///
/// Checks critical invariants:
/// - Horizon matches the projection length
/// - Months are contiguous starting at 1
/// - Cumulative cost never decreases
/// - Trend series cover the same months as the projection
pub fn validate_report(report: &ProjectionReport) -> Result<(), ReportError> {
    let months = report.projection.months();

    if report.horizon_months != months.len() {
        return Err(ReportError::Integrity(format!(
            "horizon is {} months but projection has {}",
            report.horizon_months,
            months.len()
        )));
    }

    if report.baseline_volume != report.projection.baseline_volume() {
        return Err(ReportError::Integrity(format!(
            "report baseline {} does not match projection baseline {}",
            report.baseline_volume,
            report.projection.baseline_volume()
        )));
    }

    let mut previous_cumulative = 0.0_f64;
    for (index, entry) in months.iter().enumerate() {
        if entry.month != index + 1 {
            return Err(ReportError::Integrity(format!(
                "months must be contiguous from 1: found month {} at position {}",
                entry.month, index
            )));
        }
        if entry.cumulative_cost < previous_cumulative {
            return Err(ReportError::Integrity(format!(
                "cumulative cost decreased at month {}",
                entry.month
            )));
        }
        previous_cumulative = entry.cumulative_cost;
    }

    for trend in &report.trends {
        if trend.monthly_data.len() != months.len() {
            return Err(ReportError::Integrity(format!(
                "trend for {} covers {} months, projection has {}",
                trend.service,
                trend.monthly_data.len(),
                months.len()
            )));
        }
    }

    Ok(())
}

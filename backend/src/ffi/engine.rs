//! PyO3 wrapper for CostEngine
//!
//! This module provides the Python interface to the Rust projection engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    breakdown_to_py, month_projection_to_py, parse_engine_config, savings_to_py, summary_to_py,
    trend_to_py, year_totals_to_py,
};
use crate::analysis::{
    service_trends, yearly_service_totals, CostSummary, SavingsScenario,
};
use crate::models::volume::CallVolume;
use crate::projection::engine::CostEngine as RustCostEngine;
use crate::projection::report::ProjectionReport;

/// Python wrapper for the Rust cost projection engine
///
/// # Example (from Python)
///
/// ```python
/// from cost_projection._core import CostEngine
///
/// engine = CostEngine.with_defaults()
/// costs = engine.monthly_costs(1000)
/// print(costs["total_monthly_cost"])
///
/// custom = CostEngine.new({
///     "assumptions": {"monthly_growth_rate": 0.05},
/// })
/// projection = custom.project(1000, 60)
/// print(projection[-1]["cumulative_cost"])
/// ```
#[pyclass(name = "CostEngine")]
pub struct PyCostEngine {
    inner: RustCostEngine,
}

#[pymethods]
impl PyCostEngine {
    /// Create an engine from a (possibly partial) configuration dict
    ///
    /// # Arguments
    ///
    /// * `config` - Dictionary with optional `pricing` and `assumptions` keys
    ///
    /// # Errors
    ///
    /// Raises ValueError if a field has the wrong type or a validated
    /// price or assumption is out of range.
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_engine_config(config)?;

        let inner = RustCostEngine::new(rust_config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid engine config: {}",
                e
            ))
        })?;

        Ok(PyCostEngine { inner })
    }

    /// Create an engine with the calibrated default config
    #[staticmethod]
    fn with_defaults() -> Self {
        PyCostEngine {
            inner: RustCostEngine::with_defaults(),
        }
    }

    /// Validate a baseline call volume without running the engine
    ///
    /// Returns a dict with `is_valid` and, when invalid, an `error` message.
    /// Mirrors the shape the UI layer binds its input field to.
    #[staticmethod]
    fn validate_call_volume(py: Python, volume: f64) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new(py);
        match CallVolume::from_f64(volume) {
            Ok(_) => {
                dict.set_item("is_valid", true)?;
                dict.set_item("error", py.None())?;
            }
            Err(e) => {
                dict.set_item("is_valid", false)?;
                dict.set_item("error", e.to_string())?;
            }
        }
        Ok(dict.into())
    }

    /// Calculate the monthly cost breakdown at a baseline volume
    ///
    /// # Errors
    ///
    /// Raises ValueError if the volume is outside the accepted range.
    fn monthly_costs(&self, py: Python, volume: f64) -> PyResult<Py<PyDict>> {
        let volume = parse_volume(volume)?;
        breakdown_to_py(py, &self.inner.monthly_costs(volume))
    }

    /// Project costs over a horizon of months
    ///
    /// Returns a list of per-month dicts with `month`, `call_volume`,
    /// `costs`, and `cumulative_cost`.
    fn project(&self, py: Python, volume: f64, horizon_months: usize) -> PyResult<Py<PyList>> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;
        let projection = self.inner.project(volume, horizon_months);

        let list = PyList::empty(py);
        for entry in projection.months() {
            list.append(month_projection_to_py(py, entry)?)?;
        }
        Ok(list.into())
    }

    /// Summarize a projection run
    fn summary(&self, py: Python, volume: f64, horizon_months: usize) -> PyResult<Py<PyDict>> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;
        let projection = self.inner.project(volume, horizon_months);
        summary_to_py(py, &CostSummary::from_projection(&projection))
    }

    /// Compare standard and optimized scenarios over a projection run
    fn savings_scenario(
        &self,
        py: Python,
        volume: f64,
        horizon_months: usize,
    ) -> PyResult<Py<PyDict>> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;
        let projection = self.inner.project(volume, horizon_months);
        savings_to_py(py, &SavingsScenario::from_projection(&projection))
    }

    /// Per-service trend series over a projection run
    fn service_trends(
        &self,
        py: Python,
        volume: f64,
        horizon_months: usize,
    ) -> PyResult<Py<PyList>> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;
        let projection = self.inner.project(volume, horizon_months);

        let list = PyList::empty(py);
        for trend in service_trends(&projection) {
            list.append(trend_to_py(py, &trend)?)?;
        }
        Ok(list.into())
    }

    /// Per-year service totals over a projection run
    fn yearly_totals(
        &self,
        py: Python,
        volume: f64,
        horizon_months: usize,
    ) -> PyResult<Py<PyList>> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;
        let projection = self.inner.project(volume, horizon_months);

        let list = PyList::empty(py);
        for year in yearly_service_totals(&projection) {
            list.append(year_totals_to_py(py, &year)?)?;
        }
        Ok(list.into())
    }

    /// Generate a complete report and return it as a JSON string
    ///
    /// The report bundles the projection, summary, savings scenario, and
    /// trends, fingerprinted against this engine's config.
    fn generate_report_json(&self, volume: f64, horizon_months: usize) -> PyResult<String> {
        let volume = parse_volume(volume)?;
        let horizon_months = parse_horizon(horizon_months)?;

        let report =
            ProjectionReport::generate(&self.inner, volume, horizon_months).map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Report generation failed: {}",
                    e
                ))
            })?;

        report.to_json().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Report serialization failed: {}",
                e
            ))
        })
    }
}

/// Map a raw float volume to a validated CallVolume or a ValueError
fn parse_volume(volume: f64) -> PyResult<CallVolume> {
    CallVolume::from_f64(volume)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Reject zero horizons before they hit the engine's assert
fn parse_horizon(horizon_months: usize) -> PyResult<usize> {
    if horizon_months == 0 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "horizon_months must be at least 1",
        ));
    }
    Ok(horizon_months)
}

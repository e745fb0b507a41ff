//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).
//! Config parsing accepts partial dicts: any field left out falls back to
//! the calibrated default, mirroring the JSON override behavior.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::analysis::{CostSummary, SavingsScenario, ServiceTrend, YearServiceTotals};
use crate::core::timeline::MONTHS_PER_YEAR;
use crate::models::assumptions::{BusinessAssumptions, Seasonality};
use crate::models::breakdown::CostBreakdown;
use crate::models::pricing::PricingTable;
use crate::models::projection::MonthProjection;
use crate::projection::engine::EngineConfig;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract an f64 field, falling back to a default when the key is absent.
///
/// # Errors
/// Returns PyValueError only when the key exists but is not a number.
fn extract_f64(dict: &Bound<'_, PyDict>, key: &str, default: f64) -> PyResult<f64> {
    match dict.get_item(key)? {
        Some(value) => value.extract().map_err(|_| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Field '{}' must be a number",
                key
            ))
        }),
        None => Ok(default),
    }
}

/// Extract a nested dict field, or None when the key is absent.
fn extract_dict<'py>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<Bound<'py, PyDict>>> {
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.downcast_into().map_err(|_| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Field '{}' must be a dict",
                key
            ))
        })?)),
        None => Ok(None),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a Python dict to an EngineConfig
///
/// Recognized top-level keys are `pricing` and `assumptions`, each itself a
/// partial dict. Missing keys keep their defaults.
///
/// # Errors
///
/// Raises ValueError if a present field has the wrong type or the
/// seasonality list is not exactly 12 numbers.
pub fn parse_engine_config(py_config: &Bound<'_, PyDict>) -> PyResult<EngineConfig> {
    let pricing = match extract_dict(py_config, "pricing")? {
        Some(pricing_dict) => parse_pricing_table(&pricing_dict)?,
        None => PricingTable::default(),
    };

    let assumptions = match extract_dict(py_config, "assumptions")? {
        Some(assumptions_dict) => parse_assumptions(&assumptions_dict)?,
        None => BusinessAssumptions::default(),
    };

    Ok(EngineConfig {
        pricing,
        assumptions,
    })
}

/// Convert a Python dict to a PricingTable
pub fn parse_pricing_table(py_pricing: &Bound<'_, PyDict>) -> PyResult<PricingTable> {
    let mut pricing = PricingTable::default();

    if let Some(connect) = extract_dict(py_pricing, "connect")? {
        pricing.connect.voice_per_minute = extract_f64(
            &connect,
            "voice_per_minute",
            pricing.connect.voice_per_minute,
        )?;
        pricing.connect.chat_per_message = extract_f64(
            &connect,
            "chat_per_message",
            pricing.connect.chat_per_message,
        )?;
    }

    if let Some(lex) = extract_dict(py_pricing, "lex")? {
        pricing.lex.voice_request_price =
            extract_f64(&lex, "voice_request_price", pricing.lex.voice_request_price)?;
        pricing.lex.text_request_price =
            extract_f64(&lex, "text_request_price", pricing.lex.text_request_price)?;
        pricing.lex.free_voice_requests =
            extract_f64(&lex, "free_voice_requests", pricing.lex.free_voice_requests)?;
        pricing.lex.free_text_requests =
            extract_f64(&lex, "free_text_requests", pricing.lex.free_text_requests)?;
    }

    if let Some(bedrock) = extract_dict(py_pricing, "bedrock")? {
        pricing.bedrock.knowledge_base_query_price = extract_f64(
            &bedrock,
            "knowledge_base_query_price",
            pricing.bedrock.knowledge_base_query_price,
        )?;
        pricing.bedrock.agent_invocation_price = extract_f64(
            &bedrock,
            "agent_invocation_price",
            pricing.bedrock.agent_invocation_price,
        )?;
        pricing.bedrock.input_token_price_per_1k = extract_f64(
            &bedrock,
            "input_token_price_per_1k",
            pricing.bedrock.input_token_price_per_1k,
        )?;
        pricing.bedrock.output_token_price_per_1k = extract_f64(
            &bedrock,
            "output_token_price_per_1k",
            pricing.bedrock.output_token_price_per_1k,
        )?;
    }

    Ok(pricing)
}

/// Convert a Python dict to BusinessAssumptions
pub fn parse_assumptions(py_assumptions: &Bound<'_, PyDict>) -> PyResult<BusinessAssumptions> {
    let mut assumptions = BusinessAssumptions::default();

    assumptions.avg_call_duration_minutes = extract_f64(
        py_assumptions,
        "avg_call_duration_minutes",
        assumptions.avg_call_duration_minutes,
    )?;
    assumptions.chat_to_voice_ratio = extract_f64(
        py_assumptions,
        "chat_to_voice_ratio",
        assumptions.chat_to_voice_ratio,
    )?;
    assumptions.avg_messages_per_chat = extract_f64(
        py_assumptions,
        "avg_messages_per_chat",
        assumptions.avg_messages_per_chat,
    )?;
    assumptions.avg_text_interactions_per_chat = extract_f64(
        py_assumptions,
        "avg_text_interactions_per_chat",
        assumptions.avg_text_interactions_per_chat,
    )?;
    assumptions.knowledge_base_query_rate = extract_f64(
        py_assumptions,
        "knowledge_base_query_rate",
        assumptions.knowledge_base_query_rate,
    )?;
    assumptions.agent_invocation_rate = extract_f64(
        py_assumptions,
        "agent_invocation_rate",
        assumptions.agent_invocation_rate,
    )?;
    assumptions.avg_tokens_per_query = extract_f64(
        py_assumptions,
        "avg_tokens_per_query",
        assumptions.avg_tokens_per_query,
    )?;
    assumptions.avg_tokens_per_response = extract_f64(
        py_assumptions,
        "avg_tokens_per_response",
        assumptions.avg_tokens_per_response,
    )?;
    assumptions.monthly_growth_rate = extract_f64(
        py_assumptions,
        "monthly_growth_rate",
        assumptions.monthly_growth_rate,
    )?;

    if let Some(py_seasonality) = py_assumptions.get_item("seasonality")? {
        let factors: Vec<f64> = py_seasonality.extract().map_err(|_| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Field 'seasonality' must be a list of numbers",
            )
        })?;
        if factors.len() != MONTHS_PER_YEAR {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Field 'seasonality' must have exactly {} factors, got {}",
                MONTHS_PER_YEAR,
                factors.len()
            )));
        }
        let mut table = [0.0_f64; MONTHS_PER_YEAR];
        table.copy_from_slice(&factors);
        assumptions.seasonality = Seasonality::new(table);
    }

    Ok(assumptions)
}

// ========================================================================
// Output Converters
// ========================================================================

/// Convert a CostBreakdown to a Python dict
pub fn breakdown_to_py(py: Python, breakdown: &CostBreakdown) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    let connect = PyDict::new(py);
    connect.set_item("voice_minutes", breakdown.connect.voice_minutes)?;
    connect.set_item("chat_messages", breakdown.connect.chat_messages)?;
    connect.set_item("monthly_cost", breakdown.connect.monthly_cost)?;
    dict.set_item("connect", connect)?;

    let lex = PyDict::new(py);
    lex.set_item("text_requests", breakdown.lex.text_requests)?;
    lex.set_item("voice_requests", breakdown.lex.voice_requests)?;
    lex.set_item("monthly_cost", breakdown.lex.monthly_cost)?;
    dict.set_item("lex", lex)?;

    let bedrock = PyDict::new(py);
    bedrock.set_item("knowledge_base_queries", breakdown.bedrock.knowledge_base_queries)?;
    bedrock.set_item("agent_invocations", breakdown.bedrock.agent_invocations)?;
    bedrock.set_item("monthly_cost", breakdown.bedrock.monthly_cost)?;
    dict.set_item("bedrock", bedrock)?;

    dict.set_item("total_monthly_cost", breakdown.total_monthly_cost)?;

    Ok(dict.into())
}

/// Convert one projection month to a Python dict
pub fn month_projection_to_py(py: Python, entry: &MonthProjection) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("month", entry.month)?;
    dict.set_item("call_volume", entry.call_volume)?;
    dict.set_item("costs", breakdown_to_py(py, &entry.costs)?)?;
    dict.set_item("cumulative_cost", entry.cumulative_cost)?;

    Ok(dict.into())
}

/// Convert a CostSummary to a Python dict
pub fn summary_to_py(py: Python, summary: &CostSummary) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("first_year_total", summary.first_year_total)?;
    dict.set_item("horizon_total", summary.horizon_total)?;
    dict.set_item("average_monthly_first_year", summary.average_monthly_first_year)?;
    dict.set_item("average_monthly_total", summary.average_monthly_total)?;
    dict.set_item("peak_monthly_cost", summary.peak_monthly_cost)?;
    dict.set_item("lowest_monthly_cost", summary.lowest_monthly_cost)?;

    Ok(dict.into())
}

/// Convert a SavingsScenario to a Python dict
pub fn savings_to_py(py: Python, scenario: &SavingsScenario) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("standard", scenario.standard)?;
    dict.set_item("optimized", scenario.optimized)?;
    dict.set_item("savings", scenario.savings)?;
    dict.set_item("savings_percentage", scenario.savings_percentage)?;

    Ok(dict.into())
}

/// Convert a ServiceTrend to a Python dict
pub fn trend_to_py(py: Python, trend: &ServiceTrend) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("service", trend.service.display_name())?;

    let monthly = PyList::empty(py);
    for point in &trend.monthly_data {
        let point_dict = PyDict::new(py);
        point_dict.set_item("month", point.month)?;
        point_dict.set_item("cost", point.cost)?;
        point_dict.set_item("volume", point.volume)?;
        monthly.append(point_dict)?;
    }
    dict.set_item("monthly_data", monthly)?;

    dict.set_item("total_cost", trend.total_cost)?;
    dict.set_item("average_monthly_cost", trend.average_monthly_cost)?;

    Ok(dict.into())
}

/// Convert YearServiceTotals to a Python dict
pub fn year_totals_to_py(py: Python, year: &YearServiceTotals) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("year", year.year)?;
    dict.set_item("connect", year.connect)?;
    dict.set_item("lex", year.lex)?;
    dict.set_item("bedrock", year.bedrock)?;
    dict.set_item("total", year.total())?;

    Ok(dict.into())
}

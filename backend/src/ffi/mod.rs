//! Python FFI bindings (feature `pyo3`)
//!
//! Exposes the projection engine to Python as dict-in, dict-out calls.

pub mod engine;
pub mod types;

pub use engine::PyCostEngine;

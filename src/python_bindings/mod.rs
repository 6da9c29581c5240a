//! Python bindings for redos-guard.
//!
//! Records cross the boundary as JSON strings so Python callers get the
//! same shape the CLI prints.

pub mod engine;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    engine::register_engine_bindings(py, m)
}

//! Python bindings for the analysis engine.

use pyo3::prelude::*;

/// Register engine functions on the top-level module.
pub fn register_engine_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_pattern_py, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_patterns_py, m)?)?;
    m.add_function(wrap_pyfunction!(fix_pattern_py, m)?)?;
    m.add_function(wrap_pyfunction!(benchmark_pattern_py, m)?)?;
    Ok(())
}

/// Analyze one pattern; returns an Analysis as JSON.
#[pyfunction]
#[pyo3(name = "analyze_pattern")]
pub fn analyze_pattern_py(pattern: &str) -> PyResult<String> {
    Ok(crate::engine::analyze(pattern).to_json_string()?)
}

/// Analyze a batch of patterns; returns a BatchReport as JSON.
#[pyfunction]
#[pyo3(name = "analyze_patterns")]
pub fn analyze_patterns_py(patterns: Vec<String>) -> PyResult<String> {
    Ok(crate::engine::analyze_batch(&patterns).to_json_string()?)
}

#[pyfunction]
#[pyo3(name = "fix_pattern")]
pub fn fix_pattern_py(pattern: &str, vulnerability_type: &str) -> PyResult<String> {
    Ok(crate::engine::fix(pattern, vulnerability_type).to_json_string()?)
}

/// Time a pattern against sample strings. Raises ValueError for an empty
/// sample list or a pattern that does not compile.
#[pyfunction]
#[pyo3(name = "benchmark_pattern")]
pub fn benchmark_pattern_py(pattern: &str, samples: Vec<String>) -> PyResult<String> {
    let result = crate::engine::benchmark(pattern, &samples)?;
    Ok(result.to_json_string()?)
}

//! redos-guard: ReDoS analysis and auto-fix for WAF regex rules.
//!
//! ```
//! let analysis = redos_guard::analyze("(a+)+");
//! assert!(analysis.is_vulnerable);
//!
//! let fixed = redos_guard::fix("(a+)+", "nested_quantifiers");
//! assert!(!redos_guard::analyze(&fixed.fixed_pattern).is_vulnerable);
//! ```

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

pub mod budget;
/// Core data types module
pub mod core;
pub mod engine;
pub mod error;
pub mod logging;

#[cfg(feature = "python-ext")]
mod python_bindings;

pub use crate::core::analysis::{
    Analysis, BatchReport, BenchmarkResult, ComplexityBand, ComplexityClass, CompatibilityMap,
    FixResult, PerformanceTier, RegexEngine, Severity,
};
pub use crate::engine::{analyze, analyze_batch, benchmark, fix, Engine, EngineConfig};
pub use crate::error::{GuardError, Result};

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn redos_guard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}

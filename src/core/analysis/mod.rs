//! Pattern analysis data types organized by submodule.

pub mod compatibility;
pub mod levels;
pub mod record;

// Re-exports for convenient access under crate::core::analysis::*
pub use compatibility::{CompatibilityMap, RegexEngine};
pub use levels::{ComplexityBand, ComplexityClass, PerformanceTier, Severity};
pub use record::{Analysis, BatchReport, BenchmarkResult, FixResult};

//! Analysis, rewrite and benchmark records.

use super::compatibility::CompatibilityMap;
use super::levels::{ComplexityBand, ComplexityClass, PerformanceTier, Severity};
use crate::error::GuardError;
use serde::{Deserialize, Serialize};

/// Result of analyzing a single pattern.
///
/// Built once per analysis call and never mutated afterwards.
/// `is_vulnerable` is true exactly when `vulnerability_type` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub pattern: String,
    pub is_vulnerable: bool,
    pub vulnerability_type: Option<String>,
    pub severity: Severity,
    pub complexity_class: ComplexityClass,
    pub complexity_score: u32,
    pub complexity_band: ComplexityBand,
    pub performance_tier: PerformanceTier,
    /// Higher is better, always within [10, 100].
    pub performance_score: f64,
    /// Estimated capacity units (WCU) to evaluate this pattern.
    pub estimated_cost_units: f64,
    pub compatibility: CompatibilityMap,
    pub suggested_fix: Option<String>,
    pub recommendations: Vec<String>,
    pub explanation: String,
}

impl Analysis {
    pub fn to_json_string(&self) -> Result<String, GuardError> {
        serde_json::to_string(self)
            .map_err(|e| GuardError::Serialization(format!("JSON serialization error: {}", e)))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, GuardError> {
        serde_json::from_str(json_str)
            .map_err(|e| GuardError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}

/// Outcome of rewriting a pattern to neutralize a flagged risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixResult {
    pub original_pattern: String,
    pub fixed_pattern: String,
    pub vulnerability_fixed: String,
    /// Names of the transformations that changed the pattern, in order.
    pub transformations_applied: Vec<String>,
}

impl FixResult {
    /// True when the rewrite produced a different pattern.
    pub fn changed(&self) -> bool {
        self.original_pattern != self.fixed_pattern
    }

    pub fn to_json_string(&self) -> Result<String, GuardError> {
        serde_json::to_string(self)
            .map_err(|e| GuardError::Serialization(format!("JSON serialization error: {}", e)))
    }
}

/// Aggregate result of scanning several patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total_patterns: usize,
    pub vulnerable_patterns: usize,
    pub results: Vec<Analysis>,
}

impl BatchReport {
    pub fn from_results(results: Vec<Analysis>) -> Self {
        let vulnerable_patterns = results.iter().filter(|a| a.is_vulnerable).count();
        Self {
            total_patterns: results.len(),
            vulnerable_patterns,
            results,
        }
    }

    pub fn to_json_string(&self) -> Result<String, GuardError> {
        serde_json::to_string(self)
            .map_err(|e| GuardError::Serialization(format!("JSON serialization error: {}", e)))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, GuardError> {
        serde_json::from_str(json_str)
            .map_err(|e| GuardError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}

/// Empirical match latency of a pattern over a sample corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub pattern: String,
    pub samples: usize,
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub rating: PerformanceTier,
    /// Samples whose match attempt was cut off by the backtrack limit.
    pub backtrack_limit_hits: usize,
}

impl BenchmarkResult {
    pub fn to_json_string(&self) -> Result<String, GuardError> {
        serde_json::to_string(self)
            .map_err(|e| GuardError::Serialization(format!("JSON serialization error: {}", e)))
    }
}

//! Ordered classification levels used across analysis records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Security severity of a detected vulnerability.
///
/// Ordered from least to most severe so callers can compare results of
/// an analyze → fix → re-analyze loop directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Coarse asymptotic matching cost of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityClass {
    Linear,
    Polynomial,
    Exponential,
}

impl ComplexityClass {
    /// Big-O notation for reporting.
    pub fn notation(&self) -> &'static str {
        match self {
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Polynomial => "O(n^2)",
            ComplexityClass::Exponential => "O(2^n)",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityClass::Linear => write!(f, "LINEAR"),
            ComplexityClass::Polynomial => write!(f, "POLYNOMIAL"),
            ComplexityClass::Exponential => write!(f, "EXPONENTIAL"),
        }
    }
}

/// Band of the integer complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityBand {
    Low,
    Medium,
    High,
}

/// Performance tier, best first.
///
/// The derived ordering places `Excellent` lowest, so "no better than"
/// reads as `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PerformanceTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::Excellent => write!(f, "EXCELLENT"),
            PerformanceTier::Good => write!(f, "GOOD"),
            PerformanceTier::Fair => write!(f, "FAIR"),
            PerformanceTier::Poor => write!(f, "POOR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(Severity::default(), Severity::Low);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&ComplexityClass::Exponential).unwrap(),
            "\"EXPONENTIAL\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceTier::Excellent).unwrap(),
            "\"EXCELLENT\""
        );
    }

    #[test]
    fn tier_ordering_is_worst_last() {
        assert!(PerformanceTier::Excellent < PerformanceTier::Poor);
        assert_eq!(ComplexityClass::Polynomial.notation(), "O(n^2)");
    }
}

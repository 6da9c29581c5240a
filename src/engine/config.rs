//! Configuration for the pattern analysis engine.
//!
//! Provides centralized configuration for all engine components with
//! sensible defaults. Every table the engine consults (probed engines,
//! ordered rule set, scoring weights, capacity base unit, benchmark
//! thresholds) lives here so operators can tune sensitivity from a JSON
//! file without rebuilding.

use crate::core::analysis::{RegexEngine, Severity};
use crate::error::{GuardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Master configuration for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engines probed for compatibility, one map entry each.
    pub engines: Vec<RegexEngine>,
    /// Ordered vulnerability rules; the first match wins.
    pub rules: Vec<RuleConfig>,
    /// Complexity scoring weights and thresholds.
    pub scoring: ScoringConfig,
    /// Capacity-unit estimation.
    pub capacity: CapacityConfig,
    /// Benchmark harness limits and rating thresholds.
    pub benchmark: BenchmarkConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engines: RegexEngine::ALL.to_vec(),
            rules: default_rules(),
            scoring: ScoringConfig::default(),
            capacity: CapacityConfig::default(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration. Missing sections take
    /// their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GuardError::Config(format!("invalid configuration JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading engine configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GuardError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            warn!("No regex engines configured; compatibility maps will be empty");
        }
        for rule in &self.rules {
            if rule.label.trim().is_empty() {
                return Err(GuardError::Config("rule label must not be empty".into()));
            }
            if let ProbeConfig::Textual { regex } = &rule.probe {
                regex::Regex::new(regex).map_err(|e| {
                    GuardError::Config(format!("rule '{}' has an invalid regex: {}", rule.label, e))
                })?;
            }
        }
        self.scoring.validate()?;
        self.capacity.validate()?;
        self.benchmark.validate()
    }
}

/// One entry of the ordered vulnerability rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub label: String,
    pub severity: Severity,
    pub probe: ProbeConfig,
}

impl RuleConfig {
    pub fn new(label: impl Into<String>, severity: Severity, probe: ProbeConfig) -> Self {
        Self {
            label: label.into(),
            severity,
            probe,
        }
    }
}

/// Structural test a rule applies to a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeConfig {
    /// Repeated group whose body ends in an unbounded quantifier.
    NestedQuantifier,
    /// Group under `{n,}` with a quantified body or a trailing `?`.
    OpenEndedRepetition,
    /// At least `min_spans` unconstrained `.*`/`.+` spans.
    WildcardSpans { min_spans: usize },
    /// More than `max_operators` alternation operators.
    Alternation { max_operators: usize },
    /// Operator-supplied regex evaluated against the raw pattern text.
    Textual { regex: String },
}

/// Default ordered rule table.
pub fn default_rules() -> Vec<RuleConfig> {
    vec![
        RuleConfig::new(
            "nested_quantifiers",
            Severity::Critical,
            ProbeConfig::NestedQuantifier,
        ),
        RuleConfig::new(
            "exponential_quantifiers",
            Severity::High,
            ProbeConfig::OpenEndedRepetition,
        ),
        RuleConfig::new(
            "multiple_wildcards",
            Severity::Medium,
            ProbeConfig::WildcardSpans { min_spans: 3 },
        ),
        RuleConfig::new(
            "excessive_alternation",
            Severity::Medium,
            ProbeConfig::Alternation { max_operators: 10 },
        ),
    ]
}

/// Complexity scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight per quantifier token.
    pub quantifier_weight: u32,
    /// Weight per alternation operator.
    pub alternation_weight: u32,
    /// Weight per `(` construct: group openers and bare inline flags.
    pub group_weight: u32,
    /// Pattern length beyond this stops adding to the score.
    pub length_cap: usize,
    /// Capped length is divided by this before being added.
    pub length_divisor: usize,
    /// Score at which the MEDIUM complexity band starts.
    pub medium_band: u32,
    /// Score at which the HIGH complexity band starts.
    pub high_band: u32,
    /// Tier thresholds on the complexity score.
    pub tiers: TierThresholds,
    /// More quantifiers than this makes a pattern POLYNOMIAL.
    pub polynomial_quantifier_threshold: usize,
    /// Patterns longer than this get a split recommendation.
    pub long_pattern_length: usize,
    /// Deductions from the performance score.
    pub penalties: PerformancePenalties,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            quantifier_weight: 2,
            alternation_weight: 3,
            group_weight: 1,
            length_cap: 500,
            length_divisor: 10,
            medium_band: 10,
            high_band: 25,
            tiers: TierThresholds::default(),
            polynomial_quantifier_threshold: 2,
            long_pattern_length: 500,
            penalties: PerformancePenalties::default(),
        }
    }
}

impl ScoringConfig {
    fn validate(&self) -> Result<()> {
        if self.length_divisor == 0 {
            return Err(GuardError::Config("length_divisor must be positive".into()));
        }
        if self.medium_band > self.high_band {
            return Err(GuardError::Config(format!(
                "complexity bands out of order: medium {} > high {}",
                self.medium_band, self.high_band
            )));
        }
        self.tiers.validate()?;
        self.penalties.validate()
    }
}

/// Complexity-score thresholds at which each worse tier begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub good: u32,
    pub fair: u32,
    pub poor: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            good: 10,
            fair: 25,
            poor: 50,
        }
    }
}

impl TierThresholds {
    fn validate(&self) -> Result<()> {
        if self.good <= self.fair && self.fair <= self.poor {
            Ok(())
        } else {
            Err(GuardError::Config(format!(
                "tier thresholds must be non-decreasing (good {}, fair {}, poor {})",
                self.good, self.fair, self.poor
            )))
        }
    }
}

/// Deductions applied to a base performance score of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformancePenalties {
    pub polynomial: f64,
    pub exponential: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl Default for PerformancePenalties {
    fn default() -> Self {
        Self {
            polynomial: 30.0,
            exponential: 60.0,
            good: 5.0,
            fair: 10.0,
            poor: 20.0,
        }
    }
}

impl PerformancePenalties {
    fn validate(&self) -> Result<()> {
        let all = [
            self.polynomial,
            self.exponential,
            self.good,
            self.fair,
            self.poor,
        ];
        if all.iter().all(|p| p.is_finite() && *p >= 0.0) {
            Ok(())
        } else {
            Err(GuardError::Config(
                "performance penalties must be finite and non-negative".into(),
            ))
        }
    }
}

/// Capacity-unit estimation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Cost of a trivial pattern, in WCU.
    pub base_unit: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self { base_unit: 1.0 }
    }
}

impl CapacityConfig {
    fn validate(&self) -> Result<()> {
        if self.base_unit.is_finite() && self.base_unit >= 0.0 {
            Ok(())
        } else {
            Err(GuardError::Config(format!(
                "base_unit must be finite and non-negative, got {}",
                self.base_unit
            )))
        }
    }
}

/// Benchmark harness configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Average latency below this rates EXCELLENT (milliseconds).
    pub excellent_ms: f64,
    /// Average latency below this rates GOOD (milliseconds).
    pub good_ms: f64,
    /// Average latency below this rates FAIR (milliseconds).
    pub fair_ms: f64,
    /// Backtracking steps allowed per match attempt.
    pub backtrack_limit: usize,
    /// Wall-clock ceiling for a whole run, in seconds.
    pub max_seconds: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            excellent_ms: 1.0,
            good_ms: 10.0,
            fair_ms: 100.0,
            backtrack_limit: 1_000_000,
            max_seconds: crate::budget::DEFAULT_BUDGET_SECONDS,
        }
    }
}

impl BenchmarkConfig {
    fn validate(&self) -> Result<()> {
        let ordered = self.excellent_ms <= self.good_ms && self.good_ms <= self.fair_ms;
        if !ordered || !self.excellent_ms.is_finite() || !self.fair_ms.is_finite() {
            return Err(GuardError::Config(
                "benchmark rating thresholds must be finite and non-decreasing".into(),
            ));
        }
        if self.backtrack_limit == 0 {
            return Err(GuardError::Config("backtrack_limit must be positive".into()));
        }
        Ok(())
    }
}

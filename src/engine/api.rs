//! Public engine API: analyze, fix, benchmark and batch scanning.

use crate::core::analysis::{Analysis, BatchReport, BenchmarkResult, FixResult};
use crate::engine::autofix;
use crate::engine::bench;
use crate::engine::capacity;
use crate::engine::compat::CompatibilityProber;
use crate::engine::config::EngineConfig;
use crate::engine::recommend::{self, Findings};
use crate::engine::rules::RuleSet;
use crate::engine::score::ComplexityScorer;
use crate::engine::syntax::PatternSyntax;
use crate::error::Result;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use tracing::{debug, info, warn};

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// A configured analysis engine.
///
/// Holds only immutable tables compiled from an [`EngineConfig`]; every
/// method takes `&self` and may be called from many threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    rules: RuleSet,
    scorer: ComplexityScorer,
    prober: CompatibilityProber,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            rules: RuleSet::default(),
            scorer: ComplexityScorer::new(config.scoring.clone()),
            prober: CompatibilityProber::new(&config.engines),
            config,
        }
    }
}

impl Engine {
    /// Validate `config` and compile its rule table.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rules = RuleSet::from_config(&config.rules)?;
        if rules.is_empty() {
            warn!("Rule table is empty; no pattern will be flagged");
        }
        let prober = CompatibilityProber::new(&config.engines);
        debug!(
            rules = rules.len(),
            engines = prober.engines().len(),
            "Engine configured"
        );
        Ok(Self {
            rules,
            scorer: ComplexityScorer::new(config.scoring.clone()),
            prober,
            config,
        })
    }

    /// Full diagnostic record for one pattern. Never fails.
    pub fn analyze(&self, pattern: &str) -> Analysis {
        let _span = crate::span_trace!("analyze", pattern_len = pattern.len()).entered();

        let syntax = PatternSyntax::parse(pattern);
        let detection = self.rules.detect(&syntax);
        let complexity = self.scorer.report(&syntax);
        let compatibility = self.prober.probe_syntax(&syntax);
        let estimated_cost_units =
            capacity::estimate(pattern, complexity.score, &self.config.capacity);

        let label = detection.as_ref().map(|d| d.label.as_str());
        let recommendations = recommend::recommendations(&Findings {
            vulnerability_type: label,
            band: complexity.band,
            tier: complexity.tier,
            pattern_length: pattern.chars().count(),
            long_pattern_length: self.scorer.config().long_pattern_length,
            compatibility: &compatibility,
        });
        let explanation = recommend::explanation(label);
        let suggested_fix = label.map(|l| autofix::fix(pattern, l).fixed_pattern);
        debug!(
            score = complexity.score,
            class = complexity.class.notation(),
            vulnerable = detection.is_some(),
            "Pattern analyzed"
        );

        Analysis {
            pattern: pattern.to_string(),
            is_vulnerable: detection.is_some(),
            vulnerability_type: detection.as_ref().map(|d| d.label.clone()),
            severity: detection.map(|d| d.severity).unwrap_or_default(),
            complexity_class: complexity.class,
            complexity_score: complexity.score,
            complexity_band: complexity.band,
            performance_tier: complexity.tier,
            performance_score: complexity.performance_score,
            estimated_cost_units,
            compatibility,
            suggested_fix,
            recommendations,
            explanation,
        }
    }

    /// Analyze many patterns in parallel; results keep input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, patterns: &[S]) -> BatchReport {
        let _span = crate::span_trace!("analyze_batch", patterns = patterns.len()).entered();

        let results: Vec<Analysis> = patterns
            .par_iter()
            .map(|p| self.analyze(p.as_ref()))
            .collect();
        let report = BatchReport::from_results(results);
        info!(
            total = report.total_patterns,
            vulnerable = report.vulnerable_patterns,
            "Batch analysis complete"
        );
        report
    }

    pub fn fix(&self, pattern: &str, vulnerability_type: &str) -> FixResult {
        let _span = crate::span_trace!("fix", label = vulnerability_type).entered();
        autofix::fix(pattern, vulnerability_type)
    }

    pub fn benchmark<S: AsRef<str>>(&self, pattern: &str, samples: &[S]) -> Result<BenchmarkResult> {
        let _span = crate::span_trace!("benchmark", samples = samples.len()).entered();
        bench::benchmark(pattern, samples, &self.config.benchmark).inspect_err(|e| {
            crate::log_error!(e, "benchmark");
        })
    }
}

/// [`Engine::analyze`] with the default configuration.
pub fn analyze(pattern: &str) -> Analysis {
    DEFAULT_ENGINE.analyze(pattern)
}

/// [`Engine::analyze_batch`] with the default configuration.
pub fn analyze_batch<S: AsRef<str> + Sync>(patterns: &[S]) -> BatchReport {
    DEFAULT_ENGINE.analyze_batch(patterns)
}

/// Rewrite a flagged pattern; see [`autofix::fix`].
pub fn fix(pattern: &str, vulnerability_type: &str) -> FixResult {
    DEFAULT_ENGINE.fix(pattern, vulnerability_type)
}

/// [`Engine::benchmark`] with the default configuration.
pub fn benchmark<S: AsRef<str>>(pattern: &str, samples: &[S]) -> Result<BenchmarkResult> {
    DEFAULT_ENGINE.benchmark(pattern, samples)
}

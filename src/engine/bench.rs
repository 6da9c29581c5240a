//! Latency benchmark for a single pattern.
//!
//! `fancy-regex` hands patterns without lookaround or backreferences to
//! the linear-time `regex` engine, which would hide catastrophic shapes.
//! The harness therefore compiles `(?:pattern)(?=)`: the trailing empty
//! lookahead matches everywhere but forces the backtracking VM for the
//! whole expression. Each match attempt is bounded by the configured
//! backtrack limit and the whole run by an [`IterationBudget`]. A run with
//! any backtrack-limit hit rates POOR regardless of its timings.

use crate::budget::IterationBudget;
use crate::core::analysis::{BenchmarkResult, PerformanceTier};
use crate::engine::config::BenchmarkConfig;
use crate::error::{GuardError, Result};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Time `pattern` against every sample, in order.
pub fn benchmark<S: AsRef<str>>(
    pattern: &str,
    samples: &[S],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    if samples.is_empty() {
        return Err(GuardError::InvalidInput(
            "benchmark requires at least one sample string".into(),
        ));
    }

    let regex = compile_backtracking(pattern, config.backtrack_limit)?;

    let mut budget = IterationBudget::new(Duration::from_secs(config.max_seconds), "benchmark");
    let mut timings = Vec::with_capacity(samples.len());
    let mut backtrack_limit_hits = 0;

    for sample in samples {
        let start = Instant::now();
        let outcome = regex.is_match(sample.as_ref());
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        if let Err(e) = outcome {
            // Only runtime limits can fail a match on a compiled pattern.
            warn!(error = %e, elapsed_ms = ms, "Match attempt hit the backtrack limit");
            backtrack_limit_hits += 1;
        }
        timings.push(ms);
        budget.check()?;
    }

    let total: f64 = timings.iter().sum();
    let average_ms = total / timings.len() as f64;
    let min_ms = timings.iter().copied().fold(f64::INFINITY, f64::min);
    let max_ms = timings.iter().copied().fold(0.0, f64::max);
    let rating = if backtrack_limit_hits > 0 {
        PerformanceTier::Poor
    } else {
        rate(average_ms, config)
    };

    debug!(
        pattern,
        samples = timings.len(),
        average_ms,
        %rating,
        backtrack_limit_hits,
        "Benchmark complete"
    );

    Ok(BenchmarkResult {
        pattern: pattern.to_string(),
        samples: timings.len(),
        average_ms,
        min_ms,
        max_ms,
        rating,
        backtrack_limit_hits,
    })
}

/// Compile `pattern` so that matching runs on the backtracking VM.
///
/// The pattern is validated on its own first: wrapping it could otherwise
/// balance a stray `)`. When the wrapped form does not compile (an `(?x)`
/// comment swallowing the suffix, say) the plain pattern is used.
fn compile_backtracking(pattern: &str, backtrack_limit: usize) -> Result<fancy_regex::Regex> {
    let build = |text: &str| {
        fancy_regex::RegexBuilder::new(text)
            .backtrack_limit(backtrack_limit)
            .build()
    };
    let plain =
        build(pattern).map_err(|e| GuardError::PatternError(format!("{}: {}", pattern, e)))?;
    match build(&format!("(?:{})(?=)", pattern)) {
        Ok(forced) => Ok(forced),
        Err(e) => {
            debug!(error = %e, "Backtracking wrapper rejected; timing the plain pattern");
            Ok(plain)
        }
    }
}

/// Latency rating for an average match time.
pub fn rate(average_ms: f64, config: &BenchmarkConfig) -> PerformanceTier {
    if average_ms < config.excellent_ms {
        PerformanceTier::Excellent
    } else if average_ms < config.good_ms {
        PerformanceTier::Good
    } else if average_ms < config.fair_ms {
        PerformanceTier::Fair
    } else {
        PerformanceTier::Poor
    }
}

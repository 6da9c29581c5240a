//! Complexity scoring and performance tiers.
//!
//! The score is a weighted sum of structural counts. Every weight is
//! non-negative and the length term is a floor of a capped length. The
//! tokenizer never folds an operator into a later token when text is
//! appended, so a longer pattern never scores lower than its prefix.

use crate::core::analysis::{ComplexityBand, ComplexityClass, PerformanceTier};
use crate::engine::config::ScoringConfig;
use crate::engine::syntax::PatternSyntax;

/// Everything the scorer derives for one pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityReport {
    pub score: u32,
    pub class: ComplexityClass,
    pub band: ComplexityBand,
    pub tier: PerformanceTier,
    /// Higher is better, within [10, 100].
    pub performance_score: f64,
}

/// Scoring engine parameterized by [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct ComplexityScorer {
    config: ScoringConfig,
}

impl ComplexityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// `(complexity_score, complexity_class)` for raw pattern text.
    pub fn score(&self, pattern: &str) -> (u32, ComplexityClass) {
        let syntax = PatternSyntax::parse(pattern);
        (self.complexity_score(&syntax), self.complexity_class(&syntax))
    }

    pub fn complexity_score(&self, syntax: &PatternSyntax<'_>) -> u32 {
        let c = &self.config;
        let length = syntax.text.chars().count().min(c.length_cap) / c.length_divisor.max(1);
        weighted(syntax.quantifier_count(), c.quantifier_weight)
            .saturating_add(weighted(
                syntax.alternation_count(),
                c.alternation_weight,
            ))
            .saturating_add(weighted(syntax.paren_count(), c.group_weight))
            .saturating_add(u32::try_from(length).unwrap_or(u32::MAX))
    }

    pub fn complexity_class(&self, syntax: &PatternSyntax<'_>) -> ComplexityClass {
        let nested_repetition = syntax.groups.iter().any(|g| {
            g.kind.is_backtrackable()
                && syntax.body_has_unbounded(g)
                && syntax
                    .group_quantifier(g)
                    .is_some_and(|q| q.is_backtracking_unbounded())
        });
        if nested_repetition {
            ComplexityClass::Exponential
        } else if syntax.quantifier_count() > self.config.polynomial_quantifier_threshold {
            ComplexityClass::Polynomial
        } else {
            ComplexityClass::Linear
        }
    }

    pub fn band(&self, score: u32) -> ComplexityBand {
        if score < self.config.medium_band {
            ComplexityBand::Low
        } else if score < self.config.high_band {
            ComplexityBand::Medium
        } else {
            ComplexityBand::High
        }
    }

    /// Tier for a score; never improves as the score grows.
    pub fn tier(&self, score: u32) -> PerformanceTier {
        let t = &self.config.tiers;
        if score < t.good {
            PerformanceTier::Excellent
        } else if score < t.fair {
            PerformanceTier::Good
        } else if score < t.poor {
            PerformanceTier::Fair
        } else {
            PerformanceTier::Poor
        }
    }

    pub fn performance_score(&self, class: ComplexityClass, tier: PerformanceTier) -> f64 {
        let p = &self.config.penalties;
        let class_penalty = match class {
            ComplexityClass::Linear => 0.0,
            ComplexityClass::Polynomial => p.polynomial,
            ComplexityClass::Exponential => p.exponential,
        };
        let tier_penalty = match tier {
            PerformanceTier::Excellent => 0.0,
            PerformanceTier::Good => p.good,
            PerformanceTier::Fair => p.fair,
            PerformanceTier::Poor => p.poor,
        };
        (100.0 - class_penalty - tier_penalty).clamp(10.0, 100.0)
    }

    pub fn report(&self, syntax: &PatternSyntax<'_>) -> ComplexityReport {
        let score = self.complexity_score(syntax);
        let class = self.complexity_class(syntax);
        let tier = self.tier(score);
        ComplexityReport {
            score,
            class,
            band: self.band(score),
            tier,
            performance_score: self.performance_score(class, tier),
        }
    }
}

fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(p: &str) -> ComplexityReport {
        ComplexityScorer::default().report(&PatternSyntax::parse(p))
    }

    #[test]
    fn simple_literal_is_linear_and_excellent() {
        let r = report("simple");
        assert_eq!(r.score, 0);
        assert_eq!(r.class, ComplexityClass::Linear);
        assert_eq!(r.band, ComplexityBand::Low);
        assert_eq!(r.tier, PerformanceTier::Excellent);
        assert_eq!(r.performance_score, 100.0);
    }

    #[test]
    fn nested_repetition_is_exponential() {
        let r = report("(a+)+");
        // 2 quantifiers * 2 + 1 group
        assert_eq!(r.score, 5);
        assert_eq!(r.class, ComplexityClass::Exponential);
        assert_eq!(r.performance_score, 40.0);

        assert_eq!(report("(a+b)*").class, ComplexityClass::Exponential);
        assert_eq!(report("(?>a+)+").class, ComplexityClass::Linear);
    }

    #[test]
    fn many_quantifiers_are_polynomial() {
        assert_eq!(report("a+b*c?").class, ComplexityClass::Polynomial);
        assert_eq!(report("a+b*").class, ComplexityClass::Linear);
    }

    #[test]
    fn weights_follow_config() {
        // 2 alternations * 3 + 1 group + 0 length
        assert_eq!(report("(a|b|c)").score, 7);
        let long = "a".repeat(2_000);
        // length capped at 500 / 10
        assert_eq!(report(&long).score, 50);
        assert_eq!(report(&long).tier, PerformanceTier::Poor);
    }

    #[test]
    fn closing_a_construct_never_lowers_the_score() {
        let scorer = ComplexityScorer::default();
        for (short, long) in [
            ("[(a|b|c)", "[(a|b|c)]"),
            ("(?<a+", "(?<a+>"),
            ("(?i", "(?i)"),
            ("(", "(?"),
        ] {
            assert!(
                scorer.score(long).0 >= scorer.score(short).0,
                "{short:?} -> {long:?}"
            );
        }
    }

    #[test]
    fn inline_flags_count_as_a_construct() {
        // 1 paren construct + 1 quantifier * 2
        assert_eq!(report("(?i)a+").score, 3);
    }

    #[test]
    fn tiers_are_monotone() {
        let scorer = ComplexityScorer::default();
        let mut last = PerformanceTier::Excellent;
        for s in 0..200 {
            let t = scorer.tier(s);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn performance_score_floors_at_ten() {
        let scorer = ComplexityScorer::default();
        let v = scorer.performance_score(ComplexityClass::Exponential, PerformanceTier::Poor);
        assert_eq!(v, 20.0);
        let mut config = ScoringConfig::default();
        config.penalties.exponential = 95.0;
        let v = ComplexityScorer::new(config)
            .performance_score(ComplexityClass::Exponential, PerformanceTier::Poor);
        assert_eq!(v, 10.0);
    }

    #[test]
    fn contract_tuple() {
        let (score, class) = ComplexityScorer::default().score("(a+)+");
        assert_eq!(score, 5);
        assert_eq!(class, ComplexityClass::Exponential);
    }
}

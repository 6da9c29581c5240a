//! Vulnerability rule set and detector.
//!
//! Rules are evaluated in table order and the first probe that fires
//! decides the vulnerability label and severity. Probes are structural
//! tests over the token stream, not an automaton-ambiguity analysis, so
//! both false positives and false negatives are possible.

use crate::core::analysis::Severity;
use crate::engine::config::{default_rules, ProbeConfig, RuleConfig};
use crate::engine::syntax::{PatternSyntax, QuantifierKind, TokenKind};
use crate::error::{GuardError, Result};
use regex::Regex;
use tracing::debug;

/// The rule that fired for a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub label: String,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
enum Probe {
    NestedQuantifier,
    OpenEndedRepetition,
    WildcardSpans(usize),
    Alternation(usize),
    Textual(Regex),
}

impl Probe {
    fn matches(&self, syntax: &PatternSyntax<'_>) -> bool {
        match self {
            Probe::NestedQuantifier => !nested_quantifier_groups(syntax).is_empty(),
            Probe::OpenEndedRepetition => !open_ended_groups(syntax).is_empty(),
            Probe::WildcardSpans(min) => *min > 0 && syntax.wildcard_spans() >= *min,
            Probe::Alternation(max) => syntax.alternation_count() > *max,
            Probe::Textual(re) => re.is_match(syntax.text),
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    label: String,
    severity: Severity,
    probe: Probe,
}

/// Ordered, immutable rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        // The default table has no textual probes, so building it cannot fail.
        let rules = default_rules()
            .iter()
            .filter_map(|r| compile_rule(r).ok())
            .collect();
        Self { rules }
    }
}

fn compile_rule(rule: &RuleConfig) -> Result<Rule> {
    let probe = match &rule.probe {
        ProbeConfig::NestedQuantifier => Probe::NestedQuantifier,
        ProbeConfig::OpenEndedRepetition => Probe::OpenEndedRepetition,
        ProbeConfig::WildcardSpans { min_spans } => Probe::WildcardSpans(*min_spans),
        ProbeConfig::Alternation { max_operators } => Probe::Alternation(*max_operators),
        ProbeConfig::Textual { regex } => Probe::Textual(Regex::new(regex).map_err(|e| {
            GuardError::Config(format!("rule '{}' has an invalid regex: {}", rule.label, e))
        })?),
    };
    Ok(Rule {
        label: rule.label.clone(),
        severity: rule.severity,
        probe,
    })
}

impl RuleSet {
    /// Compile a rule table, preserving its order.
    pub fn from_config(rules: &[RuleConfig]) -> Result<Self> {
        let rules = rules.iter().map(compile_rule).collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First matching rule, if any.
    pub fn detect(&self, syntax: &PatternSyntax<'_>) -> Option<Detection> {
        let hit = self.rules.iter().find(|r| r.probe.matches(syntax))?;
        debug!(
            rule = %hit.label,
            severity = %hit.severity,
            "Vulnerability rule matched"
        );
        Some(Detection {
            label: hit.label.clone(),
            severity: hit.severity,
        })
    }

    /// `(is_vulnerable, vulnerability_type, severity)` for raw pattern text.
    /// Severity is LOW when nothing matched.
    pub fn classify(&self, pattern: &str) -> (bool, Option<String>, Severity) {
        match self.detect(&PatternSyntax::parse(pattern)) {
            Some(d) => (true, Some(d.label), d.severity),
            None => (false, None, Severity::Low),
        }
    }
}

/// Groups that can be re-entered, end in an unbounded backtracking
/// quantifier and are themselves repeated without bound.
///
/// Returns indices into `syntax.groups`.
pub fn nested_quantifier_groups(syntax: &PatternSyntax<'_>) -> Vec<usize> {
    syntax
        .groups
        .iter()
        .enumerate()
        .filter(|(_, g)| {
            g.kind.is_backtrackable()
                && syntax.body_ends_in_unbounded(g)
                && syntax
                    .group_quantifier(g)
                    .is_some_and(|q| q.is_backtracking_unbounded())
        })
        .map(|(i, _)| i)
        .collect()
}

/// Groups under a backtracking `{n,}` whose body is quantified or which
/// are followed later by an optional `?`.
///
/// Returns indices into `syntax.groups`.
pub fn open_ended_groups(syntax: &PatternSyntax<'_>) -> Vec<usize> {
    syntax
        .groups
        .iter()
        .enumerate()
        .filter(|(_, g)| {
            let Some(close) = g.close else { return false };
            let open_ended = syntax.group_quantifier(g).is_some_and(|q| {
                matches!(q.kind, QuantifierKind::AtLeast(_)) && !q.is_possessive()
            });
            if !g.kind.is_backtrackable() || !open_ended {
                return false;
            }
            let trailing_optional = syntax.tokens[close + 2..].iter().any(|t| {
                matches!(
                    t.kind,
                    TokenKind::Quantifier(q) if q.kind == QuantifierKind::Optional
                )
            });
            syntax.body_has_quantifier(g) || trailing_optional
        })
        .map(|(i, _)| i)
        .collect()
}

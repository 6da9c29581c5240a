//! Deterministic rewriting of flagged patterns.
//!
//! Two passes run over the token stream:
//!
//! 1. For `nested_quantifiers` and `exponential_quantifiers` (alias
//!    `exponential_backtracking`), every offending group becomes atomic.
//!    Plain and non-capturing groups have their opener replaced by `(?>`;
//!    named and flag-scoped groups keep their opener and gain an inner
//!    atomic group so names and flags survive.
//! 2. Always: each greedy `+` and `*` gains a trailing `+`, making it
//!    possessive. Lazy, possessive, `?` and counted quantifiers are left
//!    alone, as is anything inside a class or escape.
//!
//! Unknown labels skip the first pass. The result is not re-analyzed
//! here; callers feed `fixed_pattern` back to the analyzer.

use crate::core::analysis::FixResult;
use crate::engine::rules::{nested_quantifier_groups, open_ended_groups};
use crate::engine::syntax::{Greediness, GroupKind, PatternSyntax, QuantifierKind};
use std::collections::BTreeSet;
use tracing::debug;

pub const ATOMIC_GROUPS: &str = "atomic_groups";
pub const POSSESSIVE_QUANTIFIERS: &str = "possessive_quantifiers";

const ATOMIC_OPEN: &str = "(?>";

/// Rewrite `pattern` to remove the structural risk named by
/// `vulnerability_type`.
pub fn fix(pattern: &str, vulnerability_type: &str) -> FixResult {
    let syntax = PatternSyntax::parse(pattern);
    let targets = match vulnerability_type {
        "nested_quantifiers" => nested_quantifier_groups(&syntax),
        "exponential_quantifiers" | "exponential_backtracking" => open_ended_groups(&syntax),
        other => {
            debug!(label = other, "No group rewrite for label; possessive pass only");
            Vec::new()
        }
    };

    // Token indices: openers to replace, openers to wrap after, closers
    // to wrap before.
    let mut replace_open = BTreeSet::new();
    let mut wrap_open = BTreeSet::new();
    let mut wrap_close = BTreeSet::new();
    for group in targets.iter().map(|&i| syntax.groups[i]) {
        let Some(close) = group.close else { continue };
        match group.kind {
            GroupKind::Capturing | GroupKind::NonCapturing => {
                replace_open.insert(group.open);
            }
            _ => {
                wrap_open.insert(group.open);
                wrap_close.insert(close);
            }
        }
    }

    let mut fixed = String::with_capacity(pattern.len() + 8);
    let mut possessive = 0usize;
    for (idx, token) in syntax.tokens.iter().enumerate() {
        if wrap_close.contains(&idx) {
            fixed.push(')');
        }
        if replace_open.contains(&idx) {
            fixed.push_str(ATOMIC_OPEN);
        } else {
            fixed.push_str(syntax.slice(token));
        }
        if wrap_open.contains(&idx) {
            fixed.push_str(ATOMIC_OPEN);
        }
        if let Some(q) = token.quantifier() {
            let plain = matches!(q.kind, QuantifierKind::Star | QuantifierKind::Plus);
            if plain && q.greediness == Greediness::Greedy {
                fixed.push('+');
                possessive += 1;
            }
        }
    }

    let atomic = replace_open.len() + wrap_open.len();
    let mut transformations_applied = Vec::new();
    if atomic > 0 {
        transformations_applied.push(ATOMIC_GROUPS.to_string());
    }
    if possessive > 0 {
        transformations_applied.push(POSSESSIVE_QUANTIFIERS.to_string());
    }
    let result = FixResult {
        original_pattern: pattern.to_string(),
        fixed_pattern: fixed,
        vulnerability_fixed: vulnerability_type.to_string(),
        transformations_applied,
    };
    debug!(
        label = vulnerability_type,
        atomic_groups = atomic,
        possessive_quantifiers = possessive,
        changed = result.changed(),
        "Pattern rewritten"
    );
    result
}

use crate::common::vulnerable_samples;
use redos_guard::{analyze, fix};

#[test]
fn fix_never_raises_severity() {
    for (label, pattern) in vulnerable_samples() {
        let before = analyze(&pattern);
        let result = fix(&pattern, &label);
        let after = analyze(&result.fixed_pattern);
        assert!(
            after.severity <= before.severity,
            "{pattern:?} -> {:?} went from {} to {}",
            result.fixed_pattern,
            before.severity,
            after.severity
        );
        assert_eq!(result.original_pattern, pattern);
        assert_eq!(result.vulnerability_fixed, label);
    }
}

#[test]
fn nested_and_open_ended_flags_are_cleared() {
    for (label, pattern) in vulnerable_samples() {
        if label != "nested_quantifiers" && label != "exponential_quantifiers" {
            continue;
        }
        let fixed = fix(&pattern, &label).fixed_pattern;
        assert!(fixed.contains("(?>"), "no atomic group in {fixed:?}");
        let after = analyze(&fixed);
        assert_ne!(
            after.vulnerability_type.as_deref(),
            Some(label.as_str()),
            "{fixed:?} still flagged"
        );
    }
}

#[test]
fn suggested_fix_matches_explicit_fix() {
    for (label, pattern) in vulnerable_samples() {
        let a = analyze(&pattern);
        assert_eq!(a.suggested_fix, Some(fix(&pattern, &label).fixed_pattern));
    }
}

#[test]
fn unknown_label_only_makes_quantifiers_possessive() {
    let r = fix("(a+)+x*", "made_up");
    assert_eq!(r.fixed_pattern, "(a++)++x*+");
    assert_eq!(r.transformations_applied, vec!["possessive_quantifiers"]);
}

#[test]
fn group_without_trailing_repetition_in_body_is_not_wrapped() {
    let fixed = fix("(ab|cd)+x", "nested_quantifiers");
    assert_eq!(fixed.fixed_pattern, "(ab|cd)++x");
    assert_eq!(fixed.transformations_applied, vec!["possessive_quantifiers"]);
}

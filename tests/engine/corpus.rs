use crate::common::{safe_samples, vulnerable_samples};
use redos_guard::{analyze, RegexEngine, Severity};

#[test]
fn vulnerable_corpus_is_labelled() {
    let samples = vulnerable_samples();
    assert!(samples.len() >= 10);
    for (label, pattern) in samples {
        let a = analyze(&pattern);
        assert!(a.is_vulnerable, "expected {pattern:?} to be flagged");
        assert_eq!(
            a.vulnerability_type.as_deref(),
            Some(label.as_str()),
            "wrong label for {pattern:?}"
        );
        assert!(a.severity >= Severity::Medium);
        assert!(a.suggested_fix.is_some());
    }
}

#[test]
fn safe_corpus_is_clean() {
    for pattern in safe_samples() {
        let a = analyze(&pattern);
        assert!(
            !a.is_vulnerable,
            "{pattern:?} flagged as {:?}",
            a.vulnerability_type
        );
        assert_eq!(a.severity, Severity::Low);
        assert_eq!(a.suggested_fix, None);
        assert_eq!(a.compatibility.len(), RegexEngine::ALL.len());
    }
}

#[test]
fn every_record_is_internally_consistent() {
    let patterns = vulnerable_samples()
        .into_iter()
        .map(|(_, p)| p)
        .chain(safe_samples());
    for pattern in patterns {
        let a = analyze(&pattern);
        assert_eq!(a.is_vulnerable, a.vulnerability_type.is_some());
        assert!((10.0..=100.0).contains(&a.performance_score));
        assert!(a.estimated_cost_units >= 1.0);
        assert!(!a.recommendations.is_empty());
        assert!(!a.explanation.is_empty());
    }
}

use crate::common::{safe_samples, vulnerable_samples};
use redos_guard::{analyze, analyze_batch};

#[test]
fn batch_matches_sequential_analysis() {
    let mut patterns: Vec<String> = vulnerable_samples().into_iter().map(|(_, p)| p).collect();
    patterns.extend(safe_samples());

    let report = analyze_batch(&patterns);
    assert_eq!(report.total_patterns, patterns.len());
    assert_eq!(report.vulnerable_patterns, vulnerable_samples().len());
    for (pattern, result) in patterns.iter().zip(&report.results) {
        assert_eq!(&result.pattern, pattern);
        assert_eq!(result, &analyze(pattern));
    }
}

#[test]
fn broken_patterns_do_not_affect_neighbours() {
    let report = analyze_batch(&["[", "simple", "(?<", ")"]);
    assert_eq!(report.total_patterns, 4);
    assert_eq!(report.results[1], analyze("simple"));
    assert!(report.results[0].compatibility.none_accepted());
    assert!(report.results[3].compatibility.none_accepted());
}

#[test]
fn empty_batch() {
    let report = analyze_batch::<&str>(&[]);
    assert_eq!(report.total_patterns, 0);
    assert_eq!(report.vulnerable_patterns, 0);
    assert!(report.results.is_empty());
}

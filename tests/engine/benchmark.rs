use redos_guard::engine::config::BenchmarkConfig;
use redos_guard::{benchmark, Engine, EngineConfig, GuardError, PerformanceTier};

#[test]
fn empty_sample_set_is_an_input_error() {
    let err = benchmark::<&str>("(a+)+", &[]).unwrap_err();
    assert!(matches!(err, GuardError::InvalidInput(_)));
}

#[test]
fn benchmark_reports_finite_aggregates() {
    let samples = ["aaaa", "bbbb", "aaaab"];
    let r = benchmark(r"a+b", &samples).unwrap();
    assert_eq!(r.pattern, "a+b");
    assert_eq!(r.samples, 3);
    assert!(r.average_ms.is_finite() && r.average_ms >= 0.0);
    assert!(r.min_ms <= r.average_ms);
    assert!(r.average_ms <= r.max_ms);
    assert!(r.backtrack_limit_hits <= r.samples);
}

#[test]
fn uncompilable_pattern_is_a_pattern_error() {
    let err = benchmark("(a", &["a"]).unwrap_err();
    assert!(matches!(err, GuardError::PatternError(_)));
}

#[test]
fn rating_thresholds_come_from_config() {
    // Every run rates POOR when all thresholds are zero.
    let config = EngineConfig {
        benchmark: BenchmarkConfig {
            excellent_ms: 0.0,
            good_ms: 0.0,
            fair_ms: 0.0,
            ..BenchmarkConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = Engine::new(config).unwrap();
    let r = engine.benchmark("abc", &["abc"]).unwrap();
    assert_eq!(r.rating, PerformanceTier::Poor);
}

#[test]
fn benchmark_result_serializes() {
    let r = benchmark("x", &["x"]).unwrap();
    let json = r.to_json_string().unwrap();
    assert!(json.contains(r#""samples":1"#));
    assert!(json.contains(r#""backtrack_limit_hits":0"#));
}

#[test]
fn textbook_redos_is_rated_poor() {
    let config = EngineConfig {
        benchmark: BenchmarkConfig {
            backtrack_limit: 50_000,
            ..BenchmarkConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = Engine::new(config).unwrap();
    let attack = format!("{}!", "a".repeat(40));
    let samples = [attack.as_str(), "aaaa"];

    let r = engine.benchmark("^(a+)+$", &samples).unwrap();
    assert_eq!(r.backtrack_limit_hits, 1);
    assert_eq!(r.rating, PerformanceTier::Poor);

    // The rewritten pattern no longer backtracks into the group.
    let fixed = redos_guard::fix("^(a+)+$", "nested_quantifiers").fixed_pattern;
    let r = engine.benchmark(&fixed, &samples).unwrap();
    assert_eq!(r.backtrack_limit_hits, 0);
}

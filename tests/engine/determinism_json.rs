use crate::common::vulnerable_samples;
use redos_guard::{analyze, Analysis, BatchReport};

#[test]
fn analysis_is_deterministic() {
    for (_, pattern) in vulnerable_samples() {
        let a = analyze(&pattern);
        let b = analyze(&pattern);
        assert_eq!(a, b);
        assert_eq!(a.to_json_string().unwrap(), b.to_json_string().unwrap());
    }
}

#[test]
fn analysis_json_round_trips() {
    let a = analyze("(a+)+");
    let json = a.to_json_string().unwrap();
    assert!(json.contains(r#""vulnerability_type":"nested_quantifiers""#));
    assert!(json.contains(r#""complexity_class":"EXPONENTIAL""#));
    assert!(json.contains(r#""severity":"critical""#));
    assert_eq!(Analysis::from_json_str(&json).unwrap(), a);
}

#[test]
fn compatibility_serializes_by_engine_name() {
    let json = analyze("simple").to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let compat = value["compatibility"].as_object().unwrap();
    let keys: Vec<&str> = compat.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    for k in ["pcre", "re2", "rust", "javascript", "java"] {
        assert_eq!(compat[k], serde_json::Value::Bool(true), "engine {k}");
    }
}

#[test]
fn batch_report_round_trips() {
    let report = redos_guard::analyze_batch(&["(a+)+", "plain"]);
    let json = report.to_json_string().unwrap();
    assert_eq!(BatchReport::from_json_str(&json).unwrap(), report);
    assert!(BatchReport::from_json_str("{not json").is_err());
}

use redos_guard::engine::compat::CompatibilityProber;
use redos_guard::{analyze, Engine, EngineConfig, RegexEngine};

#[test]
fn single_dialect_constructs_are_not_shared() {
    // Atomic groups: backtracking dialects other than JavaScript.
    let a = analyze("(?>ab|a)c");
    assert_eq!(a.compatibility.get(RegexEngine::Pcre), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Java), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Javascript), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Re2), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Rust), Some(false));
}

#[test]
fn lookbehind_is_rejected_by_automaton_engines() {
    let a = analyze("(?<=admin)=");
    assert_eq!(a.compatibility.get(RegexEngine::Rust), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Re2), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Pcre), Some(true));
}

#[test]
fn inline_flags_are_not_javascript() {
    let a = analyze("(?i)select");
    assert_eq!(a.compatibility.get(RegexEngine::Javascript), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Rust), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Pcre), Some(true));
}

#[test]
fn unparsable_pattern_is_false_everywhere() {
    for p in ["(", "[a-", "a)", "(?<name"] {
        let a = analyze(p);
        assert_eq!(a.compatibility.len(), 5, "{p:?}");
        assert!(a.compatibility.none_accepted(), "{p:?} accepted somewhere");
        assert!(a
            .recommendations
            .iter()
            .any(|r| r.contains("does not compile")));
    }
}

#[test]
fn map_holds_exactly_the_configured_engines() {
    let config = EngineConfig {
        engines: vec![RegexEngine::Javascript, RegexEngine::Re2, RegexEngine::Re2],
        ..EngineConfig::default()
    };
    let engine = Engine::new(config).unwrap();
    for p in ["simple", "(", "(?>a)"] {
        let engines: Vec<_> = engine.analyze(p).compatibility.engines().collect();
        assert_eq!(engines, vec![RegexEngine::Re2, RegexEngine::Javascript]);
    }
}

#[test]
fn prober_can_be_used_directly() {
    let prober = CompatibilityProber::new(&[RegexEngine::Pcre]);
    assert_eq!(prober.probe(r"(a)\1").get(RegexEngine::Pcre), Some(true));
    assert_eq!(prober.engines(), &[RegexEngine::Pcre]);
}

#[test]
fn stacked_quantifiers_are_rejected_by_re2_and_javascript() {
    for p in ["a**", "a{2}{3}", "x+?+"] {
        let a = analyze(p);
        assert_eq!(a.compatibility.get(RegexEngine::Re2), Some(false), "{p}");
        assert_eq!(a.compatibility.get(RegexEngine::Javascript), Some(false), "{p}");
    }
    assert_eq!(analyze("a**").compatibility.get(RegexEngine::Rust), Some(true));
}

#[test]
fn re2_and_rust_are_gated_separately() {
    // Quoted literals are RE2 syntax the host engine lacks.
    let a = analyze(r"\Q../\E");
    assert_eq!(a.compatibility.get(RegexEngine::Re2), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Rust), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Pcre), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Java), Some(true));
}

#[test]
fn variable_lookbehind_is_javascript_only() {
    let a = analyze("(?<=id=\\d+)&");
    assert_eq!(a.compatibility.get(RegexEngine::Javascript), Some(true));
    assert_eq!(a.compatibility.get(RegexEngine::Pcre), Some(false));
    assert_eq!(a.compatibility.get(RegexEngine::Java), Some(false));
}

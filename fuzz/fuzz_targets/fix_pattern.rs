#![no_main]
use libfuzzer_sys::fuzz_target;

const LABELS: [&str; 4] = [
    "nested_quantifiers",
    "exponential_quantifiers",
    "multiple_wildcards",
    "unknown",
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if let Ok(pattern) = std::str::from_utf8(rest) {
        let label = LABELS[selector as usize % LABELS.len()];
        let result = redos_guard::fix(pattern, label);
        let _ = redos_guard::analyze(&result.fixed_pattern);
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = std::str::from_utf8(data) {
        let analysis = redos_guard::analyze(pattern);
        assert_eq!(analysis.is_vulnerable, analysis.vulnerability_type.is_some());
    }
});

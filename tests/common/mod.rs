//! Common test utilities and helpers.

use std::path::{Path, PathBuf};

/// Get the full path to a sample file
pub fn sample_file_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(relative_path)
}

/// Non-comment, non-blank lines of a sample file.
pub fn sample_lines<P: AsRef<Path>>(relative_path: P) -> Vec<String> {
    let path = sample_file_path(relative_path);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read sample {:?}: {}", path, e));
    text.lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `(expected_label, pattern)` pairs from `rules/vulnerable.txt`.
pub fn vulnerable_samples() -> Vec<(String, String)> {
    sample_lines("rules/vulnerable.txt")
        .into_iter()
        .map(|line| {
            let (label, pattern) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("malformed sample line: {line}"));
            (label.to_string(), pattern.to_string())
        })
        .collect()
}

/// Patterns from `rules/safe.txt`.
pub fn safe_samples() -> Vec<String> {
    sample_lines("rules/safe.txt")
}

//! Advisory explanation and recommendation tables.

use crate::core::analysis::{ComplexityBand, CompatibilityMap, PerformanceTier};

/// Signals the recommendation table is keyed on.
#[derive(Debug, Clone, Copy)]
pub struct Findings<'a> {
    pub vulnerability_type: Option<&'a str>,
    pub band: ComplexityBand,
    pub tier: PerformanceTier,
    pub pattern_length: usize,
    pub long_pattern_length: usize,
    pub compatibility: &'a CompatibilityMap,
}

/// One-sentence summary of the detected risk.
pub fn explanation(vulnerability_type: Option<&str>) -> String {
    let text = match vulnerability_type {
        None => "This pattern appears safe from ReDoS attacks.",
        Some("nested_quantifiers") => "Nested quantifiers can cause exponential backtracking.",
        Some("exponential_quantifiers" | "exponential_backtracking") => {
            "Open-ended quantifiers can cause exponential performance issues."
        }
        Some("multiple_wildcards") => {
            "Several unconstrained wildcards multiply the paths the matcher must explore."
        }
        Some("excessive_alternation") => {
            "Many alternation branches multiply the paths the matcher must explore."
        }
        Some(_) => "This pattern may be vulnerable to ReDoS attacks.",
    };
    text.to_string()
}

/// Ordered advice for the caller. Never empty.
pub fn recommendations(findings: &Findings<'_>) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(label) = findings.vulnerability_type {
        let advice = match label {
            "nested_quantifiers" => {
                "Convert the repeated group to an atomic group (?>...) or use possessive quantifiers"
            }
            "exponential_quantifiers" | "exponential_backtracking" => {
                "Bound open-ended repetition with an explicit upper limit {n,m}"
            }
            "multiple_wildcards" => "Replace .* and .+ spans with specific character classes",
            "excessive_alternation" => {
                "Reduce alternation by merging branches into character classes or shared prefixes"
            }
            _ => "Security risks detected - consider using atomic groups",
        };
        out.push(advice.to_string());
    }

    if findings.band == ComplexityBand::High {
        out.push("High complexity pattern - consider simplification".to_string());
    }
    if findings.tier >= PerformanceTier::Fair {
        out.push("Performance optimization recommended".to_string());
    }
    if findings.pattern_length > findings.long_pattern_length {
        out.push("Long pattern - consider splitting it into several rules".to_string());
    }

    if findings.compatibility.none_accepted() {
        out.push("Pattern does not compile under any probed engine - check its syntax".to_string());
    } else {
        let rejected = findings.compatibility.incompatible();
        if !rejected.is_empty() {
            let names: Vec<&str> = rejected.iter().map(|e| e.as_str()).collect();
            out.push(format!("Not portable to: {}", names.join(", ")));
        }
    }

    if out.is_empty() {
        out.push("Pattern is well optimized".to_string());
    }
    out
}

//! Capacity-unit (WCU) estimation.

use crate::engine::config::CapacityConfig;

/// `base_unit × (1 + score/100) × (1 + len/1000)`, rounded to cents.
///
/// `len` counts characters, not bytes.
pub fn estimate(pattern: &str, complexity_score: u32, config: &CapacityConfig) -> f64 {
    let len = pattern.chars().count() as f64;
    let raw = config.base_unit * (1.0 + f64::from(complexity_score) / 100.0) * (1.0 + len / 1000.0);
    (raw * 100.0).round() / 100.0
}

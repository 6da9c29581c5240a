//! Time budget guard for measurement loops.
//!
//! The benchmark harness runs caller-supplied samples against
//! caller-supplied patterns; a pathological combination must not hold a
//! thread indefinitely. The guard is checked once per sample.

use crate::error::{GuardError, Result};
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Default ceiling for a single benchmark run, in seconds
pub const DEFAULT_BUDGET_SECONDS: u64 = 30;

/// Synchronous elapsed-time check for loop iterations
#[derive(Debug)]
pub struct IterationBudget {
    start: Instant,
    max_duration: Duration,
    iteration_count: usize,
    operation_name: String,
}

impl IterationBudget {
    /// Create a new iteration budget
    pub fn new(max_duration: Duration, operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            max_duration,
            iteration_count: 0,
            operation_name: operation.into(),
        }
    }

    /// Record one iteration and fail once the ceiling has been exceeded.
    pub fn check(&mut self) -> Result<()> {
        self.iteration_count += 1;
        let elapsed = self.start.elapsed();

        if elapsed > self.max_duration {
            error!(
                "Operation '{}' exceeded its budget after {} iterations and {:?}",
                self.operation_name, self.iteration_count, elapsed
            );
            return Err(GuardError::Timeout {
                seconds: elapsed.as_secs(),
            });
        }

        if elapsed > self.max_duration / 2 {
            warn!(
                "Operation '{}' has used over half its budget ({:?})",
                self.operation_name, elapsed
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_allows_fast_loops() {
        let mut budget = IterationBudget::new(Duration::from_secs(60), "fast_loop");
        for _ in 0..50 {
            budget.check().unwrap();
        }
    }

    #[test]
    fn test_budget_expires() {
        let mut budget = IterationBudget::new(Duration::from_millis(10), "slow_loop");
        std::thread::sleep(Duration::from_millis(30));
        let result = budget.check();
        assert!(matches!(result, Err(GuardError::Timeout { .. })));
    }
}

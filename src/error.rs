//! Error types for the redos-guard pattern analysis engine.
//!
//! Analysis itself never fails: a broken pattern is reported through the
//! compatibility map. The variants below cover the operations that do have
//! caller-facing failure modes (benchmarking, configuration loading and
//! record serialization).

use thiserror::Error;

/// Main error type for redos-guard operations.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Invalid caller input (e.g. an empty benchmark sample set)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pattern could not be compiled where compilation is required
    #[error("Pattern error: {0}")]
    PatternError(String),

    /// Operation exceeded its time budget
    #[error("Operation timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Configuration is malformed or inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for redos-guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

/// Convert engine errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<GuardError> for pyo3::PyErr {
    fn from(err: GuardError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyTimeoutError, PyValueError};

        match err {
            GuardError::Io(e) => PyIOError::new_err(e.to_string()),
            GuardError::Timeout { seconds } => {
                PyTimeoutError::new_err(format!("Operation timed out after {}s", seconds))
            }
            GuardError::InvalidInput(msg)
            | GuardError::PatternError(msg)
            | GuardError::Config(msg) => PyValueError::new_err(msg),
            _ => PyException::new_err(err.to_string()),
        }
    }
}

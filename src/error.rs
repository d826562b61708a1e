//! Error taxonomy for the estimators
//!
//! Two kinds of failure exist:
//!
//! - [`InfoError::InvalidInput`]: the caller broke a contract (empty data,
//!   mismatched lengths, a zero history length). Raised immediately.
//! - [`InfoError::InsufficientSamples`]: the data is well formed but too
//!   short to populate the joint distribution. This is a property of the
//!   data; the orchestrator records it as an invalid measure and carries on.
//!
//! Degenerate inputs (constant fields, single-symbol alphabets) are not
//! errors. They produce 0 bits.

use thiserror::Error;

/// Errors produced by the information estimators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    /// Contract violation by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Not enough samples to estimate the requested measure.
    #[error("insufficient samples for {measure}: need {needed}, have {available}")]
    InsufficientSamples {
        /// Measure that could not be estimated
        measure: &'static str,
        /// Minimum number of samples required
        needed: usize,
        /// Number of samples actually available
        available: usize,
    },
}

impl InfoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        InfoError::InvalidInput(msg.into())
    }

    pub(crate) fn insufficient(measure: &'static str, needed: usize, available: usize) -> Self {
        InfoError::InsufficientSamples { measure, needed, available }
    }

    /// True when the failure is a property of the data rather than a caller mistake
    pub fn is_insufficient_samples(&self) -> bool {
        matches!(self, InfoError::InsufficientSamples { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, InfoError>;

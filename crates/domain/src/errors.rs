//! Domain Errors - rejected inputs and undefined results
//!
//! Contains ONLY computation errors, no I/O or configuration errors

use thiserror::Error;

/// Errors raised by strategies and the contexts that use them
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Validation: cart amount must be a finite, non-negative number
    #[error("Invalid amount: {0}, must be a finite value >= 0")]
    InvalidAmount(f64),

    /// Validation: scores must be finite
    #[error("Invalid score: {0}, must be a finite value")]
    InvalidScore(f64),

    /// Validation: no discount policy with this name
    #[error("Unknown discount policy: {0}")]
    UnknownDiscountPolicy(String),

    /// Validation: no averaging strategy with this name
    #[error("Unknown average strategy: {0}")]
    UnknownAverageStrategy(String),

    /// Undefined result: square root of a negative product
    #[error("Geometric average undefined for scores {score1} and {score2}: product is negative")]
    UndefinedGeometricAverage { score1: f64, score2: f64 },

    /// Undefined result: average overflows the f64 range
    #[error("Average of scores {score1} and {score2} is not a finite number")]
    NonFiniteAverage { score1: f64, score2: f64 },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Check if error rejects an argument before any computation ran
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAmount(_)
                | DomainError::InvalidScore(_)
                | DomainError::UnknownDiscountPolicy(_)
                | DomainError::UnknownAverageStrategy(_)
        )
    }

    /// Check if error reports a formula with no real result for its inputs
    pub fn is_undefined_result(&self) -> bool {
        matches!(
            self,
            DomainError::UndefinedGeometricAverage { .. } | DomainError::NonFiniteAverage { .. }
        )
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        if self.is_validation_error() {
            ErrorCategory::Validation
        } else {
            ErrorCategory::UndefinedResult
        }
    }
}

/// Categories of domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input rejected at assignment or selection time
    Validation,
    /// Formula undefined for the given inputs
    UndefinedResult,
}

//! Error types for complex arithmetic.

use thiserror::Error;

/// Errors that can occur during complex arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Divisor has both components exactly equal to zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

/// Result type for fallible complex operations.
pub type ComplexResult<T> = Result<T, ComplexError>;

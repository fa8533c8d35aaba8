// ============================================================================
// Calculator Errors
// Failure kinds reported by calculator operations and numeric helpers
// ============================================================================

use std::fmt;

/// Errors that can occur during a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// Divisor was zero (integer zero, `0.0` or `-0.0`)
    DivisionByZero,
    /// An aggregate was requested over an empty sequence
    EmptyInput,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero"),
            CalcError::EmptyInput => write!(f, "Cannot calculate average of empty list"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

// ============================================================================
// Calculator Library
// Arithmetic with exact big integers, operation history and numeric helpers
// ============================================================================

//! # Calculator
//!
//! A small arithmetic calculator that keeps a log of every successful
//! operation, plus two standalone helpers.
//!
//! ## Features
//!
//! - **Exact integers** of any size, with real promotion only where needed
//! - **Operation history** as formatted entries, copied out on read
//! - **Explicit errors** for division by zero and empty averages
//! - **Thread-safe handle** for sharing one calculator across threads
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//!
//! let sum = calc.add(10, 5);
//! let product = calc.multiply(sum, 2);
//! assert_eq!(calc.subtract(product, 3), Number::from(27));
//!
//! assert_eq!(calc.divide(1, 0), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.get_history()[0], "10 + 5 = 15");
//! assert_eq!(calc.history_len(), 3);
//!
//! assert_eq!(calculate_average([1, 2, 3, 4, 5]), Ok(3.0));
//! assert!(is_prime(17));
//! ```

pub mod domain;
pub mod helpers;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculator, CalculatorConfig, Operation, SharedCalculator};
    pub use crate::helpers::{calculate_average, is_prime, is_prime_bigint};
    pub use crate::numeric::{CalcError, CalcResult, Number};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_complex_calculation_workflow() {
        let mut calc = Calculator::new();

        // (10 + 5) * 2 - 3 = 27
        let sum = calc.add(10, 5);
        assert_eq!(sum, Number::from(15));
        let product = calc.multiply(sum, 2);
        assert_eq!(product, Number::from(30));
        let difference = calc.subtract(product, 3);
        assert_eq!(difference, Number::from(27));

        let history = calc.get_history();
        assert_eq!(history.len(), 3);
        assert!(history[0].contains("10 + 5 = 15"));
        assert_eq!(history[1], "15 * 2 = 30");
        assert_eq!(history[2], "30 - 3 = 27");
    }

    #[test]
    fn test_calculator_maintains_state() {
        let mut calc = Calculator::new();
        calc.add(1, 1);
        let first_len = calc.get_history().len();

        calc.multiply(2, 3);
        assert_eq!(calc.get_history().len(), first_len + 1);
    }

    #[test]
    fn test_failures_surface_as_errors() {
        let mut calc = Calculator::new();
        calc.add(2, 2);

        let division: CalcResult<Number> = calc.divide(4, 0);
        assert_eq!(division, Err(CalcError::DivisionByZero));
        assert_eq!(calc.history_len(), 1);

        let average = calculate_average(Vec::<Number>::new());
        assert_eq!(average, Err(CalcError::EmptyInput));
    }

    #[test]
    fn test_helpers_consume_calculator_results() {
        let mut calc = Calculator::new();
        let results = vec![calc.add(1, 2), calc.multiply(3, 3), calc.power(2, 4)];
        assert_eq!(calculate_average(results), Ok(28.0 / 3.0));

        let power = calc.power(2, 31);
        let mersenne = calc.subtract(power, 1);
        let exact = mersenne.as_integer().cloned().unwrap_or_default();
        assert!(is_prime_bigint(&exact));
        assert_eq!(calc.last_entry(), Some("2147483648 - 1 = 2147483647"));
    }
}

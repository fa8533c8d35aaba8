// ============================================================================
// Calculator
// Arithmetic operations with an append-only operation history
// ============================================================================

use super::{CalculatorConfig, Operation};
use crate::numeric::{CalcResult, Number};

/// Stateful calculator recording every successful operation.
///
/// Each successful call appends exactly one entry of the form
/// `"{a} {symbol} {b} = {result}"`. Failed calls leave the history as it was.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Formatted entries in insertion order
    history: Vec<String>,

    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator with an explicit configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            history: Vec::with_capacity(config.history_capacity),
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = &a + &b;
        self.record(Operation::Add, &a, &b, &result);
        result
    }

    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = &a - &b;
        self.record(Operation::Subtract, &a, &b, &result);
        result
    }

    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = &a * &b;
        self.record(Operation::Multiply, &a, &b, &result);
        result
    }

    /// True division; the quotient is always a real.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b` is zero. History is not touched.
    pub fn divide(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Raise `base` to `exponent`. Negative exponents yield a real.
    pub fn power(&mut self, base: impl Into<Number>, exponent: impl Into<Number>) -> Number {
        let (base, exponent) = (base.into(), exponent.into());
        let result = base.pow(&exponent);
        self.record(Operation::Power, &base, &exponent, &result);
        result
    }

    /// Run any [`Operation`], recording it on success.
    ///
    /// # Errors
    /// Propagates the operation's error. History is not touched.
    pub fn evaluate(
        &mut self,
        operation: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let result = operation.apply(&a, &b).inspect_err(|err| {
            tracing::warn!(lhs = %a, operation = %operation, rhs = %b, "rejected: {}", err);
        })?;
        self.record(operation, &a, &b, &result);
        Ok(result)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Owned copy of the history in insertion order.
    ///
    /// Mutating the returned vector never affects the calculator.
    pub fn get_history(&self) -> Vec<String> {
        self.history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recent entry, if any
    pub fn last_entry(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Empty the history. Calling it on an empty history is a no-op.
    pub fn clear_history(&mut self) {
        tracing::trace!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }

    fn record(&mut self, operation: Operation, a: &Number, b: &Number, result: &Number) {
        let entry = operation.describe(a, b, result);
        if self.config.trace_operations {
            tracing::debug!(index = self.history.len(), "recorded {}", entry);
        }
        self.history.push(entry);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

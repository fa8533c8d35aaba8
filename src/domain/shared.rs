// ============================================================================
// Shared Calculator
// Thread-safe handle over a single calculator and its history
// ============================================================================

use super::{Calculator, CalculatorConfig, Operation};
use crate::numeric::{CalcResult, Number};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one [`Calculator`].
///
/// Every call holds the lock for the whole compute-and-append step, so an
/// entry always lands next to the result that produced it.
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::from(Calculator::with_config(config))
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        self.inner.lock().add(a, b)
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        self.inner.lock().subtract(a, b)
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        self.inner.lock().multiply(a, b)
    }

    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.inner.lock().divide(a, b)
    }

    pub fn power(&self, base: impl Into<Number>, exponent: impl Into<Number>) -> Number {
        self.inner.lock().power(base, exponent)
    }

    pub fn evaluate(
        &self,
        operation: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> CalcResult<Number> {
        self.inner.lock().evaluate(operation, a, b)
    }

    pub fn get_history(&self) -> Vec<String> {
        self.inner.lock().get_history()
    }

    pub fn history_len(&self) -> usize {
        self.inner.lock().history_len()
    }

    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calculator: Calculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CalcError;
    use std::thread;

    #[test]
    fn test_clones_share_history() {
        let calc = SharedCalculator::new();
        let other = calc.clone();

        calc.add(1, 2);
        other.multiply(3, 4);

        assert_eq!(calc.get_history(), vec!["1 + 2 = 3", "3 * 4 = 12"]);
        assert_eq!(other.history_len(), 2);

        other.clear_history();
        assert_eq!(calc.history_len(), 0);
    }

    #[test]
    fn test_failed_division_not_recorded() {
        let calc = SharedCalculator::from(Calculator::new());
        assert_eq!(calc.divide(1, 0), Err(CalcError::DivisionByZero));
        assert_eq!(calc.divide(1, 4).unwrap(), Number::from(0.25));
        assert_eq!(calc.get_history(), vec!["1 / 4 = 0.25"]);
    }

    #[test]
    fn test_concurrent_operations() {
        const THREADS: usize = 8;
        const OPS_PER_THREAD: usize = 250;

        let calc = SharedCalculator::with_config(
            CalculatorConfig::default().with_history_capacity(THREADS * OPS_PER_THREAD),
        );

        thread::scope(|scope| {
            for t in 0..THREADS {
                let calc = calc.clone();
                scope.spawn(move || {
                    for i in 0..OPS_PER_THREAD {
                        calc.add(t, i);
                        let _ = calc.divide(i, 0);
                    }
                });
            }
        });

        let history = calc.get_history();
        assert_eq!(history.len(), THREADS * OPS_PER_THREAD);
        assert!(history.iter().all(|entry| entry.contains(" + ")));
    }

    #[test]
    fn test_power_and_evaluate() {
        let calc = SharedCalculator::new();
        assert_eq!(calc.power(2, 10), Number::from(1024));
        assert_eq!(
            calc.evaluate(Operation::Subtract, 10, 4).unwrap(),
            Number::from(6)
        );
        assert_eq!(calc.history_len(), 2);
    }
}

// ============================================================================
// Operation
// The five arithmetic operations and their history symbols
// ============================================================================

use crate::numeric::{CalcResult, Number};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operation supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// All operations, in display order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Operator symbol used in history entries
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
        }
    }

    /// Apply the operation. Only `Divide` can fail.
    pub fn apply(self, lhs: &Number, rhs: &Number) -> CalcResult<Number> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide => lhs.checked_div(rhs),
            Operation::Power => Ok(lhs.pow(rhs)),
        }
    }

    /// Render one history entry: `"{lhs} {symbol} {rhs} = {result}"`
    pub fn describe(self, lhs: &Number, rhs: &Number, result: &Number) -> String {
        format!("{} {} {} = {}", lhs, self, rhs, result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

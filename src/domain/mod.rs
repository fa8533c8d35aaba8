// ============================================================================
// Domain Module
// Calculator state, operations and configuration
// ============================================================================

pub mod calculator;
pub mod config;
pub mod operation;
pub mod shared;

pub use calculator::Calculator;
pub use config::{CalculatorConfig, DEFAULT_HISTORY_CAPACITY};
pub use operation::Operation;
pub use shared::SharedCalculator;

// ============================================================================
// Numeric Module
// Operand representation and error types for calculator arithmetic
// ============================================================================
//
// This module provides:
// - Number: exact big integer or f64 real, with natural display
// - CalcError: failure kinds surfaced to callers
//
// Design principles:
// - Integer arithmetic never loses precision
// - True division and any real operand yield a real
// - Fallible operations return Result (no panics)

mod errors;
mod number;

pub use errors::{CalcError, CalcResult};
pub use number::Number;

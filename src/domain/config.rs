// ============================================================================
// Calculator Configuration
// Tuning knobs for history allocation and operation tracing
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of history slots allocated up front
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

/// Configuration for creating a [`Calculator`](super::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// History entries to pre-allocate.
    /// Only a hint: the log grows past it as needed.
    pub history_capacity: usize,

    /// Emit a `tracing` debug event for every recorded operation
    pub trace_operations: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            trace_operations: true,
        }
    }
}

impl CalculatorConfig {
    /// Builder method: Set history pre-allocation
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Builder method: Toggle per-operation tracing
    pub fn with_trace_operations(mut self, enabled: bool) -> Self {
        self.trace_operations = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

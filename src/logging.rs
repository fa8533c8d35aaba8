// ============================================================================
// Logging
// Subscriber bootstrap for binaries and demos
// ============================================================================

/// Install a `fmt` subscriber filtering at `level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

// ============================================================================
// Numeric Helpers
// Stateless functions over numeric sequences and integers
// ============================================================================

mod average;
mod prime;

pub use average::calculate_average;
pub use prime::{is_prime, is_prime_bigint};

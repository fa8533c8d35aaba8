// ============================================================================
// Primality
// Trial division up to the integer square root
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// Check if `n` is prime.
///
/// Values below 2 are never prime. Odd candidates are trial-divided by
/// odd integers from 3 through `isqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    (3..=n.isqrt()).step_by(2).all(|divisor| n % divisor != 0)
}

/// Arbitrary-precision variant of [`is_prime`] with the same policy.
///
/// Still plain trial division: cost grows with `sqrt(n)`, so composites
/// with a small factor return quickly but a prime much past `i64` does not
/// finish in practical time.
pub fn is_prime_bigint(n: &BigInt) -> bool {
    if let Some(small) = n.to_i64() {
        return is_prime(small);
    }
    if n.is_negative() || n.is_even() {
        return false;
    }

    let limit = n.sqrt();
    let two = BigInt::from(2);
    let mut divisor = BigInt::from(3);
    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += &two;
    }
    true
}

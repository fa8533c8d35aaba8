// ============================================================================
// Number
// Exact big-integer or IEEE-754 real operand with natural display
// ============================================================================

use super::errors::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A calculator operand or result.
///
/// Integers are exact and unbounded. Any operation that involves a
/// `Real`, as well as true division, produces a `Real`.
///
/// # Example
/// ```
/// use calculator::numeric::Number;
///
/// let big = Number::from(10).pow(&Number::from(30));
/// assert_eq!(big.to_string(), "1000000000000000000000000000000");
///
/// let half = Number::from(1).checked_div(&Number::from(2)).unwrap();
/// assert_eq!(half.to_string(), "0.5");
/// ```
#[derive(Debug, Clone)]
pub enum Number {
    /// Exact arbitrary-precision integer
    Integer(BigInt),
    /// Double-precision real
    Real(f64),
}

impl Number {
    /// Integer zero
    pub fn zero() -> Self {
        Number::Integer(BigInt::zero())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero (`-0.0` included).
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => i.is_zero(),
            Number::Real(r) => *r == 0.0,
        }
    }

    /// Check if value is carried as an exact integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Borrow the exact integer, if any.
    #[inline]
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Real(_) => None,
        }
    }

    /// Nearest `f64`. Integers beyond the `f64` range become infinities.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => i.to_f64().unwrap_or(if i.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Real(r) => *r,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    fn combine(
        &self,
        rhs: &Self,
        int_op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
        real_op: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(int_op(a, b)),
            _ => Number::Real(real_op(self.to_f64(), rhs.to_f64())),
        }
    }

    /// True division. Always yields a `Real`.
    ///
    /// Integer operands are divided as an exact ratio and rounded to `f64`
    /// once, so operands past 2^53 (or past the `f64` range) still give the
    /// nearest real to the true quotient.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> CalcResult<Self> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }

        let quotient = match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => BigRational::new(a.clone(), b.clone())
                .to_f64()
                .unwrap_or_else(|| self.to_f64() / rhs.to_f64()),
            _ => self.to_f64() / rhs.to_f64(),
        };

        Ok(Number::Real(quotient))
    }

    /// Exponentiation.
    ///
    /// Integer base with a non-negative integer exponent stays exact.
    /// Negative exponents and real operands go through `f64::powf`.
    pub fn pow(&self, exponent: &Self) -> Self {
        let (base, exp) = match (self, exponent) {
            (Number::Integer(base), Number::Integer(exp)) if !exp.is_negative() => (base, exp),
            _ => return Number::Real(self.to_f64().powf(exponent.to_f64())),
        };

        if let Some(e) = exp.to_u32() {
            return Number::Integer(base.pow(e));
        }

        // Exponent past u32: only the unit bases have a representable result
        if base.is_zero() || base.is_one() {
            Number::Integer(base.clone())
        } else if *base == -BigInt::one() {
            if exp.is_even() {
                Number::Integer(BigInt::one())
            } else {
                Number::Integer(-BigInt::one())
            }
        } else {
            Number::Real(self.to_f64().powf(exponent.to_f64()))
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Real(a), Number::Real(b)) => a == b,
            (Number::Integer(i), Number::Real(r)) | (Number::Real(r), Number::Integer(i)) => {
                r.is_finite() && r.fract() == 0.0 && BigInt::from_f64(*r).as_ref() == Some(i)
            },
        }
    }
}

impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        self.combine(rhs, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub<&Number> for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        self.combine(rhs, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul<&Number> for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        self.combine(rhs, |a, b| a * b, |a, b| a * b)
    }
}

impl Add for Number {
    type Output = Number;

    #[inline]
    fn add(self, rhs: Number) -> Number {
        &self + &rhs
    }
}

impl Sub for Number {
    type Output = Number;

    #[inline]
    fn sub(self, rhs: Number) -> Number {
        &self - &rhs
    }
}

impl Mul for Number {
    type Output = Number;

    #[inline]
    fn mul(self, rhs: Number) -> Number {
        &self * &rhs
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Number::Integer(i) => Number::Integer(-i),
            Number::Real(r) => Number::Real(-r),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Number {
    #[inline]
    fn from(value: BigInt) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Real(f64::from(value))
    }
}

impl From<rust_decimal::Decimal> for Number {
    /// Integral decimals (`42`, `42.00`) become exact integers, the rest reals.
    fn from(value: rust_decimal::Decimal) -> Self {
        let normalized = value.normalize();
        if normalized.scale() == 0 {
            Number::Integer(BigInt::from(normalized.mantissa()))
        } else {
            Number::Real(normalized.to_f64().unwrap_or(f64::NAN))
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Real(r) => fmt_real(*r, f),
        }
    }
}

/// Shortest round-trip digits; fixed notation for decimal exponents in
/// `-4..16`, scientific (`1e-07`, `1.5e+16`) outside it.
fn fmt_real(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let sci = format!("{:e}", value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.write_str(&sci);
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return write!(f, "{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    f.write_str(sign)?;

    if exp < 0 {
        let zeros = (-exp - 1) as usize;
        write!(f, "0.{}{}", "0".repeat(zeros), digits)
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            write!(f, "{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

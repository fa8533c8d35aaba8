// ============================================================================
// Arithmetic Mean
// ============================================================================

use crate::numeric::{CalcError, CalcResult, Number};

/// Arithmetic mean of a sequence of numbers.
///
/// Integer inputs are summed exactly before the single true division by
/// the element count, so large integer sums do not accumulate rounding.
///
/// # Errors
/// Returns `EmptyInput` if the sequence has no elements.
///
/// # Example
/// ```
/// use calculator::helpers::calculate_average;
///
/// assert_eq!(calculate_average([1, 2, 3, 4, 5]).unwrap(), 3.0);
/// assert!(calculate_average(Vec::<i64>::new()).is_err());
/// ```
pub fn calculate_average<I>(numbers: I) -> CalcResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let mut sum = Number::zero();
    let mut count: usize = 0;

    for item in numbers {
        let value: Number = item.into();
        sum = &sum + &value;
        count += 1;
    }

    if count == 0 {
        tracing::warn!("average requested over an empty sequence");
        return Err(CalcError::EmptyInput);
    }

    let mean = sum.checked_div(&Number::from(count))?;
    Ok(mean.to_f64())
}

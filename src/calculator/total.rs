//! Summation with an optional scaling factor

use crate::error::{CalcError, Result};
use crate::number::Number;

/// Calculate the total of a list of numbers, with optional multiplier.
///
/// Without a multiplier the result keeps the kind of its inputs, so a list of
/// decimals sums to an exact decimal. With a multiplier the result is a float.
///
/// # Arguments
/// * `numbers` - Values to sum. `None` is an error, an empty slice sums to zero
/// * `multiplier` - Optional non-negative factor applied to the sum
///
/// # Errors
/// * `CalcError::MissingInput` if `numbers` is `None`
/// * `CalcError::Domain` if `multiplier` is negative or NaN
/// * `CalcError::Overflow` if a decimal sum leaves the representable range
pub fn calculate_total(numbers: Option<&[Number]>, multiplier: Option<f64>) -> Result<Number> {
    let numbers = numbers.ok_or(CalcError::MissingInput {
        argument: "Numbers list",
    })?;
    log::trace!("calculate_total: {} values, multiplier {:?}", numbers.len(), multiplier);

    let total = numbers
        .iter()
        .try_fold(Number::zero(), |acc, &n| acc.checked_add(n))?;

    match multiplier {
        None => Ok(total),
        Some(m) if m.is_nan() => Err(CalcError::domain("Multiplier", "must be a number")),
        Some(m) if m < 0.0 => Err(CalcError::domain("Multiplier", "cannot be negative")),
        Some(m) => Ok(Number::Float(total.to_f64() * m)),
    }
}

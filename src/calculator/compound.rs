//! Periodic compound interest

use super::{ensure_non_negative, ensure_rate};
use crate::error::{CalcError, Result};
use crate::number::Number;

/// Calculate the value of `principal` after compounding interest over time.
///
/// Pass [`DEFAULT_COMPOUNDS_PER_YEAR`](super::DEFAULT_COMPOUNDS_PER_YEAR) for
/// monthly compounding. Zero years returns the principal unchanged.
///
/// # Arguments
/// * `principal` - Starting amount, cannot be negative
/// * `rate` - Annual interest rate as percentage
/// * `years` - Number of years, cannot be negative
/// * `compounds_per_year` - Compounding periods per year, at least 1
///
/// # Errors
/// `CalcError::Domain` naming the first violated constraint
pub fn calculate_compound_interest(
    principal: impl Into<Number>,
    rate: f64,
    years: i32,
    compounds_per_year: u32,
) -> Result<f64> {
    let principal = principal.into();
    ensure_non_negative(principal, "Principal")?;
    ensure_rate(rate)?;
    if years < 0 {
        return Err(CalcError::domain("Years", "cannot be negative"));
    }
    if compounds_per_year < 1 {
        return Err(CalcError::domain("Compounds per year", "must be at least 1"));
    }
    log::trace!(
        "calculate_compound_interest: {} at {}% for {} years, {} periods/yr",
        principal,
        rate,
        years,
        compounds_per_year
    );

    let periods = compounds_per_year as f64;
    let periodic_rate = rate / 100.0 / periods;
    Ok(principal.to_f64() * (1.0 + periodic_rate).powf(periods * years as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{round_to_cents, DEFAULT_COMPOUNDS_PER_YEAR};
    use approx::assert_relative_eq;

    #[test]
    fn test_calculate_compound_interest_basic() {
        let result = calculate_compound_interest(1_000, 5.0, 1, DEFAULT_COMPOUNDS_PER_YEAR).unwrap();
        assert_eq!(round_to_cents(result), 1_051.16);
    }

    #[test]
    fn test_calculate_compound_interest_quarterly() {
        let result = calculate_compound_interest(1_000.0, 5.0, 2, 4).unwrap();
        assert_relative_eq!(result, 1_104.486101181412, epsilon = 1e-9);
    }

    #[test]
    fn test_calculate_compound_interest_zero_rate() {
        let result = calculate_compound_interest(1_000, 0.0, 1, DEFAULT_COMPOUNDS_PER_YEAR).unwrap();
        assert_eq!(result, 1_000.0);
    }

    #[test]
    fn test_calculate_compound_interest_zero_years() {
        let result = calculate_compound_interest(2_500, 7.5, 0, DEFAULT_COMPOUNDS_PER_YEAR).unwrap();
        assert_eq!(result, 2_500.0);
    }

    #[test]
    fn test_calculate_compound_interest_is_pure() {
        assert_eq!(
            calculate_compound_interest(5_000, 3.5, 20, 4),
            calculate_compound_interest(5_000, 3.5, 20, 4)
        );
    }

    #[test]
    fn test_calculate_compound_interest_invalid_inputs() {
        let err = calculate_compound_interest(-1_000, 5.0, 1, 12).unwrap_err();
        assert_eq!(err.to_string(), "Principal cannot be negative");

        let err = calculate_compound_interest(1_000, -5.0, 1, 12).unwrap_err();
        assert_eq!(err.to_string(), "Interest rate cannot be negative");

        let err = calculate_compound_interest(1_000, 5.0, -1, 12).unwrap_err();
        assert_eq!(err.to_string(), "Years cannot be negative");

        let err = calculate_compound_interest(1_000, 5.0, 1, 0).unwrap_err();
        assert_eq!(err.to_string(), "Compounds per year must be at least 1");
    }
}

//! Level-payment loan amortization

use super::{ensure_positive, ensure_rate, MONTHS_PER_YEAR};
use crate::error::{CalcError, Result};
use crate::number::Number;

/// Calculate monthly payment for a loan.
///
/// # Arguments
/// * `principal` - Loan amount, must be positive
/// * `annual_rate` - Annual interest rate as percentage (e.g., 5.0 for 5%)
/// * `years` - Loan term in years, must be positive
///
/// # Returns
/// Monthly payment amount. A zero rate spreads the principal evenly.
///
/// # Errors
/// `CalcError::Domain` naming the first input that is negative or invalid
pub fn calculate_loan_payment(principal: impl Into<Number>, annual_rate: f64, years: i32) -> Result<f64> {
    let principal = principal.into();
    ensure_positive(principal, "Principal")?;
    ensure_rate(annual_rate)?;
    if years <= 0 {
        return Err(CalcError::domain("Years", "must be positive"));
    }
    log::trace!("calculate_loan_payment: {} at {}% for {} years", principal, annual_rate, years);

    let monthly_rate = annual_rate / (100.0 * MONTHS_PER_YEAR as f64);
    let num_payments = (years as f64) * MONTHS_PER_YEAR as f64;
    let principal = principal.to_f64();

    if monthly_rate == 0.0 {
        return Ok(principal / num_payments);
    }

    let growth = (1.0 + monthly_rate).powf(num_payments);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

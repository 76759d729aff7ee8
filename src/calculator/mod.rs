//! Stateless financial calculations
//!
//! Every function validates its inputs up front and returns a
//! `CalcError::Domain` naming the first violated constraint.

mod compound;
mod investment;
mod loan;
mod margin;
mod total;

pub use compound::calculate_compound_interest;
pub use investment::{calculate_investment_returns, InvestmentReturns};
pub use loan::calculate_loan_payment;
pub use margin::calculate_profit_margin;
pub use total::calculate_total;

use crate::error::{CalcError, Result};
use crate::number::Number;
use rust_decimal::{Decimal, RoundingStrategy};

/// Compounding frequency used when the caller has no preference (monthly)
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

/// Payments per year for loan amortization
pub const MONTHS_PER_YEAR: u32 = 12;

/// Round to two decimal places, half to even, on the exact binary value.
///
/// Non-finite values and magnitudes beyond the decimal range are returned
/// unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .map(|d| Number::Decimal(d).to_f64())
        .unwrap_or(value)
}

fn ensure_positive(value: Number, parameter: &'static str) -> Result<()> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(CalcError::domain(parameter, "must be positive"))
    }
}

fn ensure_non_negative(value: Number, parameter: &'static str) -> Result<()> {
    if value.is_negative() || value.is_nan() {
        Err(CalcError::domain(parameter, "cannot be negative"))
    } else {
        Ok(())
    }
}

fn ensure_rate(rate: f64) -> Result<()> {
    // NaN fails this comparison too
    if rate >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::domain("Interest rate", "cannot be negative"))
    }
}

//! Financial Calculator - pure functions for everyday financial arithmetic
//!
//! This library provides:
//! - Loan amortization (level monthly payment)
//! - Compound interest at any compounding frequency
//! - Investment growth with yearly contributions
//! - Profit margin as a percentage of revenue
//! - Totals over mixed integer, float and decimal amounts
//!
//! Every function is stateless and safe to call from any thread.

pub mod calculator;
pub mod error;
pub mod number;

// Re-export commonly used types
pub use calculator::{
    calculate_compound_interest, calculate_investment_returns, calculate_loan_payment,
    calculate_profit_margin, calculate_total, round_to_cents, InvestmentReturns,
    DEFAULT_COMPOUNDS_PER_YEAR, MONTHS_PER_YEAR,
};
pub use error::{CalcError, Result};
pub use number::Number;

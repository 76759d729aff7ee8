//! Investment growth with regular yearly contributions

use super::{ensure_non_negative, round_to_cents};
use crate::error::{CalcError, Result};
use crate::number::Number;
use serde::{Deserialize, Serialize};

/// Outcome of an investment projection, all amounts rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturns {
    /// Final investment value
    pub total_value: f64,

    /// Principal plus every yearly contribution
    pub total_contributions: f64,

    /// `total_value - total_contributions`
    pub total_earnings: f64,
}

/// Calculate investment growth with regular contributions.
///
/// Each year the contribution is added first and the whole balance then grows
/// by `annual_rate`. The rate is not range-checked, so a negative rate models
/// a loss.
///
/// # Arguments
/// * `principal` - Initial investment amount
/// * `annual_contribution` - Yearly additional investment
/// * `annual_rate` - Expected annual return rate as percentage
/// * `years` - Investment timeframe in years
///
/// # Errors
/// `CalcError::Domain` if an amount is negative or `years` is not positive
pub fn calculate_investment_returns(
    principal: impl Into<Number>,
    annual_contribution: impl Into<Number>,
    annual_rate: f64,
    years: i32,
) -> Result<InvestmentReturns> {
    let principal = principal.into();
    let annual_contribution = annual_contribution.into();
    ensure_non_negative(principal, "Investment amounts")?;
    ensure_non_negative(annual_contribution, "Investment amounts")?;
    if years <= 0 {
        return Err(CalcError::domain("Years", "must be positive"));
    }
    log::trace!(
        "calculate_investment_returns: {} + {}/yr at {}% for {} years",
        principal,
        annual_contribution,
        annual_rate,
        years
    );

    let growth = 1.0 + annual_rate / 100.0;
    let contribution = annual_contribution.to_f64();

    let mut total_value = principal.to_f64();
    for _ in 0..years {
        total_value += contribution;
        total_value *= growth;
    }

    let total_value = round_to_cents(total_value);
    let total_contributions = round_to_cents(principal.to_f64() + contribution * years as f64);

    Ok(InvestmentReturns {
        total_value,
        total_contributions,
        total_earnings: round_to_cents(total_value - total_contributions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calculate_investment_returns_basic() {
        let result = calculate_investment_returns(10_000, 1_200, 7.0, 10).unwrap();
        assert_eq!(result.total_contributions, 22_000.00);
        assert!(result.total_value > result.total_contributions);
        assert!(result.total_earnings > 0.0);
        assert_eq!(result.total_value, 37_411.83);
        assert_eq!(result.total_earnings, 15_411.83);
    }

    #[test]
    fn test_contribution_is_added_before_growth() {
        // 1000 * 1.1 = 1100; (1100 + 1000) * 1.1 = 2310; (2310 + 1000) * 1.1 = 3641
        let result = calculate_investment_returns(0, 1_000, 10.0, 3).unwrap();
        assert_eq!(result.total_value, 3_641.0);
        assert_eq!(result.total_contributions, 3_000.0);
        assert_eq!(result.total_earnings, 641.0);
    }

    #[test]
    fn test_long_horizon_keeps_cents() {
        let result = calculate_investment_returns(10_000, 1_200, 7.0, 345).unwrap();
        assert_eq!(result.total_value, 388_908_046_854_492.1);
        assert_eq!(result.total_contributions, 424_000.0);
        assert_eq!(result.total_earnings, 388_908_046_430_492.1);

        let result = calculate_investment_returns(10_000, 1_200, 7.0, 378).unwrap();
        assert_eq!(result.total_value, 3_626_699_670_224_008.5);
        assert_eq!(result.total_earnings, 3_626_699_669_760_408.5);
    }

    #[test]
    fn test_calculate_investment_returns_is_pure() {
        assert_eq!(
            calculate_investment_returns(2_500, 300, 5.5, 25),
            calculate_investment_returns(2_500, 300, 5.5, 25)
        );
    }

    #[test]
    fn test_calculate_investment_returns_no_growth() {
        let result = calculate_investment_returns(10_000, 1_200, 0.0, 10).unwrap();
        assert_eq!(result.total_contributions, 22_000.00);
        assert_eq!(result.total_value, 22_000.00);
        assert_eq!(result.total_earnings, 0.00);
    }

    #[test]
    fn test_negative_rate_shrinks_balance() {
        let result = calculate_investment_returns(1_000, 0, -10.0, 2).unwrap();
        assert_abs_diff_eq!(result.total_value, 810.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_earnings, -190.0, epsilon = 1e-9);
    }

    #[test]
    fn test_earnings_match_value_minus_contributions() {
        let result = calculate_investment_returns(2_500.5, 333.33, 4.25, 17).unwrap();
        assert_eq!(
            result.total_earnings,
            round_to_cents(result.total_value - result.total_contributions)
        );
    }

    #[test]
    fn test_calculate_investment_returns_invalid_inputs() {
        let err = calculate_investment_returns(-10_000, 1_200, 7.0, 10).unwrap_err();
        assert_eq!(err.to_string(), "Investment amounts cannot be negative");

        let err = calculate_investment_returns(10_000, -1_200, 7.0, 10).unwrap_err();
        assert!(err.is_domain());

        let err = calculate_investment_returns(10_000, 1_200, 7.0, 0).unwrap_err();
        assert_eq!(err.to_string(), "Years must be positive");
    }

    #[test]
    fn test_serializes_as_flat_record() {
        let result = calculate_investment_returns(10_000, 1_200, 0.0, 10).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["total_value"], 22_000.0);
        assert_eq!(json["total_contributions"], 22_000.0);
        assert_eq!(json["total_earnings"], 0.0);
    }
}

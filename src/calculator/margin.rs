//! Profit margin as a percentage of revenue

use super::ensure_positive;
use crate::error::{CalcError, Result};
use crate::number::Number;
use rust_decimal::Decimal;

/// Calculate the profit margin as a percentage of revenue.
///
/// The profit is taken in the inputs' own kind, so large integers and decimals
/// keep their exact difference. Costs above revenue give a negative margin.
///
/// # Arguments
/// * `revenue` - Total revenue, must be positive
/// * `costs` - Total costs, unconstrained
///
/// # Errors
/// * `CalcError::Domain` if `revenue` is zero, negative or NaN
/// * `CalcError::Overflow` if a decimal margin leaves the representable range
pub fn calculate_profit_margin(revenue: impl Into<Number>, costs: impl Into<Number>) -> Result<f64> {
    let revenue = revenue.into();
    let costs = costs.into();
    ensure_positive(revenue, "Revenue")?;
    log::trace!("calculate_profit_margin: revenue {}, costs {}", revenue, costs);

    let profit = revenue.checked_sub(costs)?;
    match (profit, revenue) {
        (Number::Decimal(_), _) | (_, Number::Decimal(_)) => {
            let margin = profit
                .to_decimal()?
                .checked_div(revenue.to_decimal()?)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(CalcError::Overflow {
                    operation: "dividing decimals",
                })?;
            Ok(Number::Decimal(margin).to_f64())
        }
        _ => Ok((profit.to_f64() / revenue.to_f64()) * 100.0),
    }
}

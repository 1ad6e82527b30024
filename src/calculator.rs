//! The profit calculator.

use crate::error::ValidationError;
use crate::input::CalculationInput;
use crate::result::{CalculationResult, CostBreakdown};
use crate::suggest::suggest_prices;

/// Compute per-unit profit, margin, projection and price suggestions.
///
/// Total and pure: any numeric input yields a result, and the same input
/// always yields the same result. Degenerate states live in the result's
/// shape (a 0% margin when revenue is not positive, unreachable
/// suggestions), never in panics or NaN.
///
/// The platform fee is charged on the gross sale price, while tax is
/// charged on revenue after discount.
///
/// ```
/// use profitcalc::{compute, CalculationInput};
///
/// let input = CalculationInput::new(100.0)
///     .with_product_cost(40.0)
///     .with_platform_fee_rate(10.0)
///     .with_projection(2, 10);
/// let result = compute(&input);
///
/// assert_eq!(result.breakdown.platform_fee, 10.0);
/// assert_eq!(result.net_profit, 50.0);
/// assert_eq!(result.profit_margin, 50.0);
/// assert_eq!(result.total_units, 20);
/// assert_eq!(result.projected_profit, 1000.0);
/// ```
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let revenue = input.sale_price - input.discount;
    let platform_fee = input.sale_price * input.platform_fee_rate / 100.0;
    let tax_amount = revenue * input.tax_rate / 100.0;

    let total_costs = input.product_cost
        + platform_fee
        + input.shipping_cost
        + input.packaging_cost
        + input.ads_cost
        + tax_amount;
    let net_profit = revenue - total_costs;

    let profit_margin = if revenue > 0.0 {
        net_profit / revenue * 100.0
    } else {
        0.0
    };

    let total_units = u64::from(input.units_per_day) * u64::from(input.days);
    let projected_profit = net_profit * total_units as f64;

    CalculationResult {
        net_profit,
        profit_margin,
        total_units,
        projected_profit,
        breakdown: CostBreakdown {
            revenue,
            product_cost: input.product_cost,
            platform_fee,
            shipping_cost: input.shipping_cost,
            packaging_cost: input.packaging_cost,
            ads_cost: input.ads_cost,
            tax_amount,
            total_costs,
        },
        suggestions: suggest_prices(input),
    }
}

/// [`compute`] after rejecting inputs that fail [`CalculationInput::validate`].
pub fn compute_checked(input: &CalculationInput) -> Result<CalculationResult, ValidationError> {
    input.validate()?;
    Ok(compute(input))
}

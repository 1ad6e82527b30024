//! Inverse pricing: the sale price needed to reach a target margin.
//!
//! With fixed costs `F` and a combined percentage rate `r`, a price `P`
//! yields margin `m` when `P - F - r*P = m*P`, so `P = F / (1 - r - m)`.
//! A non-positive denominator means percentage costs plus the target
//! already consume the whole price, and no finite price works.

use std::fmt;

use crate::input::CalculationInput;
use crate::result::{PriceSuggestions, Suggestion};

/// Denominators at or below this are treated as zero, so rates that sum to
/// 100% up to rounding never produce a huge finite price.
const MIN_DENOMINATOR: f64 = 1e-12;

/// The margin targets the engine always reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarginTarget {
    BreakEven,
    Ten,
    Twenty,
    Thirty,
}

impl MarginTarget {
    pub const ALL: [MarginTarget; 4] = [
        MarginTarget::BreakEven,
        MarginTarget::Ten,
        MarginTarget::Twenty,
        MarginTarget::Thirty,
    ];

    /// Target margin as a fraction of revenue.
    pub fn fraction(self) -> f64 {
        match self {
            MarginTarget::BreakEven => 0.0,
            MarginTarget::Ten => 0.10,
            MarginTarget::Twenty => 0.20,
            MarginTarget::Thirty => 0.30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarginTarget::BreakEven => "Break-even",
            MarginTarget::Ten => "10% margin",
            MarginTarget::Twenty => "20% margin",
            MarginTarget::Thirty => "30% margin",
        }
    }
}

impl fmt::Display for MarginTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price needed for `margin` (a fraction) given fixed costs and a combined
/// variable cost rate (also a fraction).
///
/// ```
/// use profitcalc::{price_for_margin, Suggestion};
///
/// assert_eq!(price_for_margin(50.0, 0.25, 0.25), Suggestion::Price(100.0));
/// assert_eq!(price_for_margin(50.0, 0.80, 0.20), Suggestion::Unreachable);
/// ```
pub fn price_for_margin(fixed_costs: f64, variable_cost_rate: f64, margin: f64) -> Suggestion {
    let denominator = 1.0 - variable_cost_rate - margin;
    if denominator.is_nan() || denominator <= MIN_DENOMINATOR {
        return Suggestion::Unreachable;
    }
    let price = fixed_costs / denominator;
    if price.is_finite() {
        Suggestion::Price(price)
    } else {
        Suggestion::Unreachable
    }
}

/// Break-even and 10/20/30% margin prices for `input`.
pub fn suggest_prices(input: &CalculationInput) -> PriceSuggestions {
    let fixed = input.fixed_costs();
    let rate = input.variable_cost_rate();
    let at = |target: MarginTarget| price_for_margin(fixed, rate, target.fraction());
    PriceSuggestions {
        break_even: at(MarginTarget::BreakEven),
        margin10: at(MarginTarget::Ten),
        margin20: at(MarginTarget::Twenty),
        margin30: at(MarginTarget::Thirty),
    }
}

/// Price needed for an arbitrary margin, given as a percentage (`25.0` = 25%).
pub fn suggest_custom(input: &CalculationInput, margin_pct: f64) -> Suggestion {
    price_for_margin(
        input.fixed_costs(),
        input.variable_cost_rate(),
        margin_pct / 100.0,
    )
}

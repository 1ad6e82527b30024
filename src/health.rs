//! Loss and low-margin classification of a calculation result.

use std::fmt;

use crate::result::CalculationResult;

/// Margin below which a profitable product is flagged, in percent.
pub const DEFAULT_LOW_MARGIN_PCT: f64 = 15.0;

/// Coarse verdict a front-end turns into a warning banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProfitHealth {
    /// Each unit loses money or breaks exactly even
    Loss,
    /// Profitable, but below the low-margin threshold
    LowMargin,
    Healthy,
}

impl fmt::Display for ProfitHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitHealth::Loss => write!(f, "LOSS"),
            ProfitHealth::LowMargin => write!(f, "LOW MARGIN"),
            ProfitHealth::Healthy => write!(f, "HEALTHY"),
        }
    }
}

impl ProfitHealth {
    /// One-line advice for the verdict.
    pub fn advice(self) -> &'static str {
        match self {
            ProfitHealth::Loss => {
                "the sale price does not cover all costs; adjust values or use a suggested price"
            }
            ProfitHealth::LowMargin => "margin is thin; consider raising the price or cutting costs",
            ProfitHealth::Healthy => "price covers costs with a comfortable margin",
        }
    }
}

/// Classify `result` against a low-margin threshold (percent).
///
/// ```
/// use profitcalc::{assess, compute, CalculationInput, ProfitHealth, DEFAULT_LOW_MARGIN_PCT};
///
/// let result = compute(&CalculationInput::new(100.0).with_product_cost(90.0));
/// assert_eq!(assess(&result, DEFAULT_LOW_MARGIN_PCT), ProfitHealth::LowMargin);
/// ```
pub fn assess(result: &CalculationResult, low_margin_pct: f64) -> ProfitHealth {
    if result.is_loss() {
        ProfitHealth::Loss
    } else if result.profit_margin < low_margin_pct {
        ProfitHealth::LowMargin
    } else {
        ProfitHealth::Healthy
    }
}

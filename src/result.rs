//! Result types produced by the calculator.

use std::fmt;

use crate::suggest::MarginTarget;

/// Outcome of an inverse-price query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Suggestion {
    /// Sale price that reaches the target margin
    Price(f64),
    /// Percentage costs plus the target margin leave nothing to cover fixed costs
    Unreachable,
}

impl Suggestion {
    /// The suggested price, if reachable.
    pub fn price(self) -> Option<f64> {
        match self {
            Suggestion::Price(p) => Some(p),
            Suggestion::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Suggestion::Price(_))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Price(p) => write!(f, "{p:.2}"),
            Suggestion::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Per-unit revenue and the six cost components that sum to `total_costs`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    /// Sale price minus discount
    pub revenue: f64,
    pub product_cost: f64,
    /// Commission on the gross sale price
    pub platform_fee: f64,
    pub shipping_cost: f64,
    pub packaging_cost: f64,
    pub ads_cost: f64,
    /// Tax on discounted revenue
    pub tax_amount: f64,
    pub total_costs: f64,
}

/// Suggested sale prices for the four standard margin targets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSuggestions {
    pub break_even: Suggestion,
    pub margin10: Suggestion,
    pub margin20: Suggestion,
    pub margin30: Suggestion,
}

impl PriceSuggestions {
    pub fn get(&self, target: MarginTarget) -> Suggestion {
        match target {
            MarginTarget::BreakEven => self.break_even,
            MarginTarget::Ten => self.margin10,
            MarginTarget::Twenty => self.margin20,
            MarginTarget::Thirty => self.margin30,
        }
    }

    /// Targets in ascending margin order, paired with their suggestion.
    pub fn iter(&self) -> impl Iterator<Item = (MarginTarget, Suggestion)> + '_ {
        MarginTarget::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// True if no target can be reached at any price.
    pub fn all_unreachable(&self) -> bool {
        self.iter().all(|(_, s)| !s.is_reachable())
    }
}

/// Profitability of one product at its current price.
///
/// Built fresh by [`compute`](crate::compute); never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Profit per unit (`revenue - total_costs`)
    pub net_profit: f64,
    /// Profit as a percentage of revenue, 0 when revenue is not positive
    pub profit_margin: f64,
    /// `units_per_day * days`
    pub total_units: u64,
    /// `net_profit * total_units`
    pub projected_profit: f64,
    pub breakdown: CostBreakdown,
    pub suggestions: PriceSuggestions,
}

impl CalculationResult {
    /// Returns true if each unit sold loses money or breaks exactly even.
    pub fn is_loss(&self) -> bool {
        self.net_profit <= 0.0
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        writeln!(f, "Profit")?;
        writeln!(f, "  Net profit/unit:  {:>10.2}", self.net_profit)?;
        writeln!(f, "  Margin:           {:>9.2}%", self.profit_margin)?;
        writeln!(
            f,
            "  Projected:        {:>10.2}  ({} units)",
            self.projected_profit, self.total_units
        )?;
        writeln!(f, "Breakdown")?;
        writeln!(f, "  Revenue:          {:>10.2}", b.revenue)?;
        writeln!(f, "  Product cost:     {:>10.2}", b.product_cost)?;
        writeln!(f, "  Platform fee:     {:>10.2}", b.platform_fee)?;
        writeln!(f, "  Shipping:         {:>10.2}", b.shipping_cost)?;
        writeln!(f, "  Packaging:        {:>10.2}", b.packaging_cost)?;
        writeln!(f, "  Ads:              {:>10.2}", b.ads_cost)?;
        writeln!(f, "  Tax:              {:>10.2}", b.tax_amount)?;
        writeln!(f, "  Total costs:      {:>10.2}", b.total_costs)?;
        writeln!(f, "Suggested prices")?;
        for (target, suggestion) in self.suggestions.iter() {
            writeln!(f, "  {:<17} {:>10}", format!("{target}:"), suggestion.to_string())?;
        }
        Ok(())
    }
}

//! Calculation input record and boundary validation.

use crate::error::ValidationError;
use crate::platform::PlatformFeeTable;

/// Everything the engine needs to price one product.
///
/// Monetary fields share a single currency unit. Rates are percentages on a
/// 0–100 scale (`12.0` = 12%).
///
/// ```
/// use profitcalc::CalculationInput;
///
/// let input = CalculationInput::new(79.90)
///     .with_product_cost(35.0)
///     .with_platform_fee_rate(12.0)
///     .with_projection(4, 30);
/// assert!(input.validate().is_ok());
/// assert_eq!(input.fixed_costs(), 35.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationInput {
    /// Unit list price before discount.
    pub sale_price: f64,
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub packaging_cost: f64,
    pub ads_cost: f64,
    /// Deducted from the sale price to get revenue.
    pub discount: f64,
    /// Platform commission, charged on the gross sale price.
    pub platform_fee_rate: f64,
    /// Tax, charged on discounted revenue.
    pub tax_rate: f64,
    /// Informational. The engine never branches on it; see
    /// [`with_free_shipping_applied`](Self::with_free_shipping_applied).
    #[cfg_attr(feature = "serde", serde(default))]
    pub free_shipping: bool,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub units_per_day: u32,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub days: u32,
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            sale_price: 0.0,
            product_cost: 0.0,
            shipping_cost: 0.0,
            packaging_cost: 0.0,
            ads_cost: 0.0,
            discount: 0.0,
            platform_fee_rate: 0.0,
            tax_rate: 0.0,
            free_shipping: false,
            units_per_day: 1,
            days: 1,
        }
    }
}

impl CalculationInput {
    /// Input with the given sale price and every other field at its default.
    pub fn new(sale_price: f64) -> Self {
        Self {
            sale_price,
            ..Self::default()
        }
    }

    /// Input pre-populated with the default commission for `platform_id`.
    pub fn for_platform(
        table: &PlatformFeeTable,
        platform_id: &str,
        sale_price: f64,
    ) -> Result<Self, ValidationError> {
        let rate = table
            .get(platform_id)
            .ok_or(ValidationError::UnknownPlatform)?;
        Ok(Self::new(sale_price).with_platform_fee_rate(rate))
    }

    pub fn with_product_cost(mut self, cost: f64) -> Self {
        self.product_cost = cost;
        self
    }

    pub fn with_shipping_cost(mut self, cost: f64) -> Self {
        self.shipping_cost = cost;
        self
    }

    pub fn with_packaging_cost(mut self, cost: f64) -> Self {
        self.packaging_cost = cost;
        self
    }

    pub fn with_ads_cost(mut self, cost: f64) -> Self {
        self.ads_cost = cost;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_platform_fee_rate(mut self, rate: f64) -> Self {
        self.platform_fee_rate = rate;
        self
    }

    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_free_shipping(mut self, free_shipping: bool) -> Self {
        self.free_shipping = free_shipping;
        self
    }

    pub fn with_projection(mut self, units_per_day: u32, days: u32) -> Self {
        self.units_per_day = units_per_day;
        self.days = days;
        self
    }

    /// Returns a copy with `shipping_cost` forced to zero when `free_shipping`
    /// is set. Collaborators call this before [`compute`](crate::compute).
    pub fn with_free_shipping_applied(self) -> Self {
        if self.free_shipping {
            Self {
                shipping_cost: 0.0,
                ..self
            }
        } else {
            self
        }
    }

    /// True once both a sale price and a product cost have been entered.
    ///
    /// Interactive front-ends hold off recomputing until this holds, so a
    /// half-filled form does not flash a loss.
    pub fn is_ready(&self) -> bool {
        self.sale_price > 0.0 && self.product_cost > 0.0
    }

    /// Cost components that do not depend on the sale price.
    pub fn fixed_costs(&self) -> f64 {
        self.product_cost + self.shipping_cost + self.packaging_cost + self.ads_cost
    }

    /// Combined platform fee and tax as a fraction (`0.20` = 20%).
    ///
    /// Treats the fee (a share of gross price) and the tax (a share of
    /// discounted revenue) as one rate on price.
    pub fn variable_cost_rate(&self) -> f64 {
        (self.platform_fee_rate + self.tax_rate) / 100.0
    }

    /// Reject inputs outside the domain the engine is meant for.
    ///
    /// Nothing is clamped: the first offending field is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [
            ("sale_price", self.sale_price),
            ("product_cost", self.product_cost),
            ("shipping_cost", self.shipping_cost),
            ("packaging_cost", self.packaging_cost),
            ("ads_cost", self.ads_cost),
            ("discount", self.discount),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeAmount { field });
            }
        }

        let rates = [
            ("platform_fee_rate", self.platform_fee_rate),
            ("tax_rate", self.tax_rate),
        ];
        for (field, value) in rates {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::RateOutOfRange { field, value });
            }
        }

        if self.units_per_day == 0 {
            return Err(ValidationError::ZeroProjection {
                field: "units_per_day",
            });
        }
        if self.days == 0 {
            return Err(ValidationError::ZeroProjection { field: "days" });
        }
        Ok(())
    }
}

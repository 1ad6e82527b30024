//! # profitcalc
//!
//! A deterministic profit calculator for products sold on online marketplaces.
//!
//! ## Features
//!
//! - **Per-unit profit**: revenue, six-way cost breakdown, net profit and margin
//! - **Projection**: profit over `units_per_day * days`
//! - **Price suggestions**: break-even and 10/20/30% margin prices, with
//!   unreachable targets reported explicitly
//! - **Platform defaults**: a static commission table for Shopee,
//!   Mercado Livre and Amazon
//! - **Pure**: no I/O, no shared state, same input gives the same output
//!
//! ## Quick Start
//!
//! ```
//! use profitcalc::{compute, CalculationInput, PlatformFeeTable, Suggestion};
//!
//! let table = PlatformFeeTable::default();
//! let input = CalculationInput::for_platform(&table, "shopee", 79.90)
//!     .unwrap()
//!     .with_discount(10.0)
//!     .with_product_cost(35.0)
//!     .with_shipping_cost(12.0)
//!     .with_packaging_cost(5.0)
//!     .with_ads_cost(5.0)
//!     .with_tax_rate(8.0)
//!     .with_projection(4, 30);
//!
//! let result = compute(&input);
//! assert!(result.is_loss());
//! assert_eq!(result.total_units, 120);
//! assert!((result.net_profit - -2.28).abs() < 1e-9);
//!
//! // Break-even: 57 fixed / (1 - 0.20)
//! let break_even = result.suggestions.break_even.price().unwrap();
//! assert!((break_even - 71.25).abs() < 1e-9);
//! ```
//!
//! ## Unreachable Margins
//!
//! When the platform fee and tax already eat the whole price, no finite price
//! reaches the target:
//!
//! ```
//! use profitcalc::{compute, CalculationInput};
//!
//! let input = CalculationInput::new(100.0)
//!     .with_product_cost(30.0)
//!     .with_platform_fee_rate(60.0)
//!     .with_tax_rate(45.0);
//! assert!(compute(&input).suggestions.all_unreachable());
//! ```
//!
//! ## Validation
//!
//! [`compute`] accepts any numbers. [`compute_checked`] rejects negative
//! amounts, rates outside 0–100 and a zero projection horizon first:
//!
//! ```
//! use profitcalc::{compute_checked, CalculationInput, ValidationError};
//!
//! let input = CalculationInput::new(50.0).with_shipping_cost(-3.0);
//! assert_eq!(
//!     compute_checked(&input),
//!     Err(ValidationError::NegativeAmount { field: "shipping_cost" })
//! );
//! ```

mod calculator;
mod error;
mod health;
mod input;
mod platform;
mod result;
mod suggest;

// Re-export public API
pub use calculator::{compute, compute_checked};
pub use error::ValidationError;
pub use health::{DEFAULT_LOW_MARGIN_PCT, ProfitHealth, assess};
pub use input::CalculationInput;
pub use platform::{Platform, PlatformFeeTable};
pub use result::{CalculationResult, CostBreakdown, PriceSuggestions, Suggestion};
pub use suggest::{MarginTarget, price_for_margin, suggest_custom, suggest_prices};

//! Listing scenario (scenario.json) loading and resolution into engine input.

use std::path::Path;

use log::{info, warn};
use profitcalc::{CalculationInput, PlatformFeeTable};
use serde::Deserialize;

use crate::config::ProjectionConfig;
use crate::error::{Error, Result};

/// One product listing as written by the user.
///
/// Only `sale_price` is required. The commission comes from
/// `platform_fee_rate` if present, otherwise from the fee table entry for
/// `platform`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    pub sale_price: f64,
    #[serde(default)]
    pub product_cost: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub packaging_cost: f64,
    #[serde(default)]
    pub ads_cost: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub platform_fee_rate: Option<f64>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub free_shipping: bool,
    #[serde(default)]
    pub units_per_day: Option<u32>,
    #[serde(default)]
    pub days: Option<u32>,
}

impl Scenario {
    /// Load a scenario.json file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ScenarioRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string (useful for testing).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a validated engine input.
    ///
    /// `platform_override` (the `--platform` flag) wins over the file's
    /// `platform`. An explicit `platform_fee_rate` wins over both, but the
    /// platform id must still exist in `table`. Free shipping zeroes the
    /// shipping cost.
    pub fn resolve(
        &self,
        table: &PlatformFeeTable,
        platform_override: Option<&str>,
        projection: &ProjectionConfig,
    ) -> Result<CalculationInput> {
        let platform = platform_override.or(self.platform.as_deref());
        let default_rate = platform
            .map(|id| {
                table
                    .get(id)
                    .ok_or_else(|| Error::Scenario(format!("unknown platform '{id}'")))
            })
            .transpose()?;

        let platform_fee_rate = match (self.platform_fee_rate, platform, default_rate) {
            (Some(rate), Some(id), _) => {
                info!("Scenario sets platform_fee_rate {rate}%; ignoring default for '{id}'");
                rate
            }
            (Some(rate), None, _) => rate,
            (None, Some(id), Some(rate)) => {
                info!("Using default {rate}% commission for platform '{id}'");
                rate
            }
            (None, _, _) => {
                return Err(Error::Scenario(
                    "no commission: set platform_fee_rate or platform".into(),
                ));
            }
        };

        if self.free_shipping && self.shipping_cost > 0.0 {
            warn!(
                "Free shipping enabled: ignoring shipping cost of {:.2}",
                self.shipping_cost
            );
        }

        let input = CalculationInput {
            sale_price: self.sale_price,
            product_cost: self.product_cost,
            shipping_cost: self.shipping_cost,
            packaging_cost: self.packaging_cost,
            ads_cost: self.ads_cost,
            discount: self.discount,
            platform_fee_rate,
            tax_rate: self.tax_rate,
            free_shipping: self.free_shipping,
            units_per_day: self.units_per_day.unwrap_or(projection.units_per_day),
            days: self.days.unwrap_or(projection.days),
        }
        .with_free_shipping_applied();

        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitcalc::ValidationError;

    fn listing_json() -> &'static str {
        r#"{
            "name": "Phone case",
            "platform": "shopee",
            "sale_price": 79.90,
            "discount": 10.0,
            "product_cost": 35.0,
            "shipping_cost": 12.0,
            "packaging_cost": 5.0,
            "ads_cost": 5.0,
            "tax_rate": 8.0,
            "units_per_day": 4,
            "days": 30
        }"#
    }

    fn resolve(scenario: &Scenario, platform: Option<&str>) -> Result<CalculationInput> {
        scenario.resolve(
            &PlatformFeeTable::default(),
            platform,
            &ProjectionConfig::default(),
        )
    }

    #[test]
    fn parse_listing() {
        let s = Scenario::from_json(listing_json()).unwrap();
        assert_eq!(s.name.as_deref(), Some("Phone case"));
        assert_eq!(s.sale_price, 79.90);
        assert_eq!(s.platform_fee_rate, None);
        assert!(!s.free_shipping);
    }

    #[test]
    fn platform_default_fills_fee() {
        let s = Scenario::from_json(listing_json()).unwrap();
        let input = resolve(&s, None).unwrap();
        assert_eq!(input.platform_fee_rate, 12.0);
        assert_eq!(input.units_per_day, 4);
        assert_eq!(input.days, 30);
    }

    #[test]
    fn flag_overrides_file_platform() {
        let s = Scenario::from_json(listing_json()).unwrap();
        let input = resolve(&s, Some("amazon")).unwrap();
        assert_eq!(input.platform_fee_rate, 15.0);
    }

    #[test]
    fn explicit_rate_wins() {
        let json = r#"{ "platform": "shopee", "sale_price": 50.0, "platform_fee_rate": 9.5 }"#;
        let s = Scenario::from_json(json).unwrap();
        assert_eq!(resolve(&s, Some("amazon")).unwrap().platform_fee_rate, 9.5);
    }

    #[test]
    fn explicit_rate_still_checks_platform_id() {
        let json = r#"{ "sale_price": 50.0, "platform_fee_rate": 9.5 }"#;
        let s = Scenario::from_json(json).unwrap();
        let err = resolve(&s, Some("ebay")).unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));
        assert!(err.to_string().contains("ebay"));
        assert_eq!(resolve(&s, None).unwrap().platform_fee_rate, 9.5);
    }

    #[test]
    fn missing_commission_is_an_error() {
        let s = Scenario::from_json(r#"{ "sale_price": 50.0 }"#).unwrap();
        assert!(matches!(resolve(&s, None), Err(Error::Scenario(_))));
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let s = Scenario::from_json(listing_json()).unwrap();
        let err = resolve(&s, Some("ebay")).unwrap_err();
        assert!(err.to_string().contains("ebay"));
    }

    #[test]
    fn projection_defaults_from_config() {
        let s = Scenario::from_json(r#"{ "platform": "amazon", "sale_price": 50.0 }"#).unwrap();
        let projection = ProjectionConfig {
            units_per_day: 3,
            days: 7,
        };
        let input = s
            .resolve(&PlatformFeeTable::default(), None, &projection)
            .unwrap();
        assert_eq!(input.units_per_day, 3);
        assert_eq!(input.days, 7);
    }

    #[test]
    fn free_shipping_drops_shipping_cost() {
        let json = r#"{
            "platform": "shopee",
            "sale_price": 50.0,
            "shipping_cost": 8.0,
            "free_shipping": true
        }"#;
        let s = Scenario::from_json(json).unwrap();
        let input = resolve(&s, None).unwrap();
        assert_eq!(input.shipping_cost, 0.0);
        assert!(input.free_shipping);
    }

    #[test]
    fn negative_cost_rejected() {
        let json = r#"{ "platform": "shopee", "sale_price": 50.0, "ads_cost": -1.0 }"#;
        let s = Scenario::from_json(json).unwrap();
        assert!(matches!(
            resolve(&s, None),
            Err(Error::Invalid(ValidationError::NegativeAmount { field: "ads_cost" }))
        ));
    }

    #[test]
    fn unknown_field_rejected() {
        let json = r#"{ "sale_price": 50.0, "salePrice": 40.0 }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(Error::ScenarioParse(_))
        ));
    }
}

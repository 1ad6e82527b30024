//! Marketplace identifiers and their default commission rates.
//!
//! The engine only ever sees a numeric `platform_fee_rate`. This table is
//! configuration for collaborators that pre-populate that field.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::error::ValidationError;

/// Built-in marketplaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    Shopee,
    MercadoLivre,
    Amazon,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Shopee, Platform::MercadoLivre, Platform::Amazon];

    /// Stable lowercase identifier used as the fee table key.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Shopee => "shopee",
            Platform::MercadoLivre => "mercadolivre",
            Platform::Amazon => "amazon",
        }
    }

    /// Human-readable marketplace name.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Shopee => "Shopee",
            Platform::MercadoLivre => "Mercado Livre",
            Platform::Amazon => "Amazon",
        }
    }

    /// Default commission percentage.
    pub fn default_fee_rate(self) -> f64 {
        match self {
            Platform::Shopee => 12.0,
            Platform::MercadoLivre | Platform::Amazon => 15.0,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or(ValidationError::UnknownPlatform)
    }
}

/// Immutable mapping from platform id to default commission percentage.
///
/// ```
/// use profitcalc::{Platform, PlatformFeeTable};
///
/// let table = PlatformFeeTable::default();
/// assert_eq!(table.fee_for(Platform::Shopee), 12.0);
///
/// let table = table.with_override("etsy", 6.5).unwrap();
/// assert_eq!(table.get("etsy"), Some(6.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformFeeTable {
    fees: FxHashMap<String, f64>,
}

impl PlatformFeeTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            fees: FxHashMap::default(),
        }
    }

    /// Default commission for `id`, matched case-insensitively.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.fees.get(&id.trim().to_ascii_lowercase()).copied()
    }

    /// Default commission for a built-in marketplace.
    ///
    /// Falls back to the built-in rate if an override table dropped it.
    pub fn fee_for(&self, platform: Platform) -> f64 {
        self.get(platform.id())
            .unwrap_or_else(|| platform.default_fee_rate())
    }

    /// Returns a new table with `id` set to `rate`.
    ///
    /// Rejects rates outside `[0, 100]` and empty ids.
    pub fn with_override(mut self, id: &str, rate: f64) -> Result<Self, ValidationError> {
        let key = id.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(ValidationError::EmptyPlatformId);
        }
        if !rate.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "platform_fee_rate",
            });
        }
        if !(0.0..=100.0).contains(&rate) {
            return Err(ValidationError::RateOutOfRange {
                field: "platform_fee_rate",
                value: rate,
            });
        }
        self.fees.insert(key, rate);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    /// Entries sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<(&str, f64)> =
            self.fees.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl Default for PlatformFeeTable {
    fn default() -> Self {
        let fees = Platform::ALL
            .into_iter()
            .map(|p| (p.id().to_string(), p.default_fee_rate()))
            .collect();
        Self { fees }
    }
}

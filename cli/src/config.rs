//! TOML configuration loading and validation.

use std::path::Path;

use profitcalc::{DEFAULT_LOW_MARGIN_PCT, PlatformFeeTable};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Platform id -> default commission percentage, merged over the built-ins.
    #[serde(default)]
    pub platforms: FxHashMap<String, f64>,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_low_margin")]
    pub low_margin_pct: f64,
}

fn default_low_margin() -> f64 {
    DEFAULT_LOW_MARGIN_PCT
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_margin_pct: default_low_margin(),
        }
    }
}

/// Projection horizon used when a scenario file leaves it out.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_one")]
    pub units_per_day: u32,
    #[serde(default = "default_one")]
    pub days: u32,
}

fn default_one() -> u32 {
    1
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            units_per_day: 1,
            days: 1,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Load config from `path`, or fall back to defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string (useful for testing).
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        for (id, rate) in &self.platforms {
            if id.trim().is_empty() {
                return Err(Error::Config("platform id must not be empty".into()));
            }
            if !rate.is_finite() || *rate < 0.0 || *rate > 100.0 {
                return Err(Error::Config(format!(
                    "fee for platform '{id}' must be in [0, 100], got {rate}"
                )));
            }
        }
        let low = self.report.low_margin_pct;
        if !low.is_finite() || !(0.0..=100.0).contains(&low) {
            return Err(Error::Config(format!(
                "low_margin_pct must be in [0, 100], got {low}"
            )));
        }
        if self.projection.units_per_day == 0 {
            return Err(Error::Config("units_per_day must be >= 1".into()));
        }
        if self.projection.days == 0 {
            return Err(Error::Config("days must be >= 1".into()));
        }
        Ok(())
    }

    /// Built-in fee table with this config's overrides applied.
    pub fn fee_table(&self) -> Result<PlatformFeeTable> {
        let mut table = PlatformFeeTable::default();
        for (id, rate) in &self.platforms {
            table = table.with_override(id, *rate)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_toml() -> &'static str {
        r#"
[platforms]
mercadolivre = 13.0
etsy = 6.5

[report]
low_margin_pct = 20.0

[projection]
units_per_day = 4
days = 30
"#
    }

    #[test]
    fn parse_example_config() {
        let config = Config::from_toml(example_toml()).unwrap();
        assert_eq!(config.platforms.len(), 2);
        assert_eq!(config.report.low_margin_pct, 20.0);
        assert_eq!(config.projection.units_per_day, 4);
        assert_eq!(config.projection.days, 30);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.platforms.is_empty());
        assert_eq!(config.report.low_margin_pct, DEFAULT_LOW_MARGIN_PCT);
        assert_eq!(config.projection.units_per_day, 1);
        assert_eq!(config.projection.days, 1);
    }

    #[test]
    fn fee_table_merges_overrides() {
        let table = Config::from_toml(example_toml())
            .unwrap()
            .fee_table()
            .unwrap();
        assert_eq!(table.get("shopee"), Some(12.0));
        assert_eq!(table.get("mercadolivre"), Some(13.0));
        assert_eq!(table.get("etsy"), Some(6.5));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn validate_catches_bad_fee() {
        let err = Config::from_toml("[platforms]\nshopee = 112.0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_catches_bad_threshold() {
        let mut config = Config::default();
        config.report.low_margin_pct = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_zero_days() {
        assert!(Config::from_toml("[projection]\ndays = 0\n").is_err());
    }

    #[test]
    fn parse_error_surfaces() {
        let err = Config::from_toml("[report\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let config = Config::load_or_default(Path::new("/nonexistent/profitcalc.toml")).unwrap();
        assert_eq!(config.report.low_margin_pct, DEFAULT_LOW_MARGIN_PCT);
    }
}

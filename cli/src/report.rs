//! Text and JSON rendering of calculation reports.

use std::io::Write;

use profitcalc::{CalculationInput, CalculationResult, PlatformFeeTable, ProfitHealth, assess};
use serde::Serialize;

use crate::error::Result;

/// Everything printed for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub health: ProfitHealth,
}

impl Report {
    pub fn new(name: Option<String>, input: CalculationInput, low_margin_pct: f64) -> Self {
        let result = profitcalc::compute(&input);
        Self {
            name,
            input,
            health: assess(&result, low_margin_pct),
            result,
        }
    }

    /// Write a human-readable report.
    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        if let Some(name) = &self.name {
            writeln!(out, "{name}")?;
            writeln!(out, "{}", "=".repeat(name.chars().count()))?;
        }
        writeln!(
            out,
            "Price {:.2}, commission {}%, tax {}%{}",
            self.input.sale_price,
            self.input.platform_fee_rate,
            self.input.tax_rate,
            if self.input.free_shipping {
                ", free shipping"
            } else {
                ""
            },
        )?;
        writeln!(out)?;
        write!(out, "{}", self.result)?;
        writeln!(out)?;
        writeln!(out, "[{}] {}", self.health, self.health.advice())?;
        Ok(())
    }

    /// Write the report as a single pretty-printed JSON document.
    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{json}")?;
        Ok(())
    }

    pub fn is_loss(&self) -> bool {
        self.health == ProfitHealth::Loss
    }
}

/// Write the effective fee table, one platform per line.
pub fn write_fee_table(table: &PlatformFeeTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<16} {:>8}", "PLATFORM", "FEE")?;
    for (id, rate) in table.iter() {
        writeln!(out, "{id:<16} {rate:>7.2}%")?;
    }
    Ok(())
}

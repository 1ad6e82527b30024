//! CLI entry point for profitcalc.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, info};

use profitcalc_cli::config::Config;
use profitcalc_cli::error::Result;
use profitcalc_cli::report::{self, Report};
use profitcalc_cli::scenario::Scenario;

#[derive(Parser)]
#[command(name = "profitcalc")]
#[command(about = "Marketplace profit calculator: margins, projections and suggested prices")]
#[command(version)]
struct Cli {
    /// Path to profitcalc.toml (built-in defaults if missing)
    #[arg(long, default_value = "profitcalc.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute profit and suggested prices for a listing
    Calc {
        /// Path to scenario.json
        scenario: PathBuf,

        /// Platform id whose default commission to use (overrides the file's platform;
        /// ignored when the file sets platform_fee_rate)
        #[arg(long)]
        platform: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 2 when the listing loses money
        #[arg(long)]
        fail_on_loss: bool,
    },

    /// Show the platform commission table
    Platforms,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Calc {
            scenario,
            platform,
            json,
            fail_on_loss,
        } => run_calc(&config, &scenario, platform.as_deref(), json).map(|is_loss| {
            if is_loss && fail_on_loss {
                process::exit(2);
            }
        }),
        Command::Platforms => run_platforms(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Compute and print one scenario. Returns whether the listing loses money.
fn run_calc(config: &Config, path: &Path, platform: Option<&str>, json: bool) -> Result<bool> {
    let table = config.fee_table()?;
    let scenario = Scenario::load(path)?;
    info!("Loaded scenario from {}", path.display());

    let input = scenario.resolve(&table, platform, &config.projection)?;
    if !input.is_ready() {
        info!("Sale price or product cost is zero; results will be degenerate");
    }

    let report = Report::new(scenario.name.clone(), input, config.report.low_margin_pct);
    debug!(
        "net_profit={} margin={} projected={}",
        report.result.net_profit, report.result.profit_margin, report.result.projected_profit
    );

    let mut stdout = io::stdout().lock();
    if json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }
    Ok(report.is_loss())
}

fn run_platforms(config: &Config) -> Result<()> {
    let table = config.fee_table()?;
    report::write_fee_table(&table, &mut io::stdout().lock())
}

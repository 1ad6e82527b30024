//! Error types for the CLI.

use std::path::PathBuf;

use profitcalc::ValidationError;

/// All errors that can occur while loading inputs and rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("failed to read scenario file {path}: {source}")]
    ScenarioRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario JSON: {0}")]
    ScenarioParse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

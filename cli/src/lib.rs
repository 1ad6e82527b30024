//! profitcalc-cli: command-line front-end for the profitcalc engine.
//!
//! Reads a listing from a JSON scenario file, fills in the platform's default
//! commission from a TOML-configurable fee table, and prints the profit
//! breakdown, health verdict and suggested prices as text or JSON.

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;

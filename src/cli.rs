//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Plans production for a wind park and optionally serves the REST API.
#[derive(Debug, Parser)]
#[command(name = "windpark", version)]
#[command(about = "Cost-ordered production planning for a wind turbine park")]
pub struct Cli {
    /// Load the park from a TOML config file
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (reference, empty)
    #[arg(long)]
    pub preset: Option<String>,

    /// Override the configured market price
    #[arg(long, allow_negative_numbers = true)]
    pub market_price: Option<i64>,

    /// Override the configured production target
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Export the computed plan to CSV
    #[arg(long)]
    pub plan_out: Option<PathBuf>,

    /// Start the REST API server after printing the plan
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port (defaults to the configured port)
    #[cfg(feature = "api")]
    #[arg(long)]
    pub port: Option<u16>,
}

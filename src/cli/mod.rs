//! Command-line interface definitions.

pub mod output;
pub mod solve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bauxplan - supply-chain cost minimization for the bauxite network.
#[derive(Parser, Debug)]
#[command(name = "bauxplan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the supply plan and print the report
    Solve(SolveArgs),
}

/// Arguments for the `solve` subcommand.
///
/// Without overrides this solves the all-hardcoded standard network; each
/// `--fixed-cost-*` flag replaces one plant's fixed cost. Values arrive as
/// raw strings so that non-numeric input is rejected by our own boundary
/// check rather than by clap.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "bauxplan.toml")]
    pub config: PathBuf,

    /// Override the fixed cost of plant B
    #[arg(long, value_name = "COST")]
    pub fixed_cost_b: Option<String>,

    /// Override the fixed cost of plant C
    #[arg(long, value_name = "COST")]
    pub fixed_cost_c: Option<String>,

    /// Override the fixed cost of plant D
    #[arg(long, value_name = "COST")]
    pub fixed_cost_d: Option<String>,

    /// Override the fixed cost of plant E
    #[arg(long, value_name = "COST")]
    pub fixed_cost_e: Option<String>,
}

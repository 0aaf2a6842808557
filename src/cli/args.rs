//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{allocate::AllocateArgs, goals::GoalsArgs, predict::PredictArgs};

#[derive(Parser)]
#[command(name = "relcalc")]
#[command(author, version, about = "MIL-HDBK-217F reliability prediction and allocation")]
#[command(
    long_about = "Computes parts count and parts stress hazard rates, dormant rates, \
overstress findings, goal conversions, and reliability apportionment for \
electronic and electromechanical hardware records kept as plain YAML files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict hazard rates for the records in a file
    Predict(PredictArgs),

    /// Convert a goal between reliability, hazard rate, and MTBF
    Goals(GoalsArgs),

    /// Apportion a system goal across the records in a file
    Allocate(AllocateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table for terminals
    #[default]
    Table,
    /// JSON (for programming)
    Json,
    /// YAML (full fidelity)
    Yaml,
}

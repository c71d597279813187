//! Command-line interface for match-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **marriage**: Solve a stable marriage instance
//! - **hospital-resident**: Solve a hospital/resident instance
//!
//! ## Usage
//!
//! ```text
//! # Suitor-optimal stable marriage
//! match-solver marriage couples.json
//!
//! # Reviewer-optimal, checked for blocking pairs, as JSON
//! match-solver --format json marriage couples.json --optimal reviewer --verify
//!
//! # Hospital-optimal residency allocation read from stdin
//! cat residency.json | match-solver hospital-resident - --optimal hospital
//! ```

use clap::{Parser, Subcommand};

pub mod hospital;
pub mod marriage;

#[derive(Parser)]
#[command(name = "match-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Compute stable matchings for stable marriage and hospital/resident instances")]
#[command(
    long_about = "match-solver computes stable matchings from ranked preference lists.\n\nInstances are JSON files (or '-' for stdin). It supports:\n- Stable marriage (one-to-one), suitor- or reviewer-optimal\n- Hospital/resident (many-to-one with capacities), resident- or hospital-optimal\n- Verification that the result has no blocking pairs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a stable marriage instance
    Marriage(marriage::MarriageArgs),

    /// Solve a hospital/resident instance
    HospitalResident(hospital::HospitalResidentArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

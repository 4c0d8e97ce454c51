//! Command-line interface for seed-search.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Report occurrence positions of each read in the reference
//! - **compare**: Cross-validate the naive and suffix-array engines
//!
//! ## Usage
//!
//! ```text
//! # Search reads with the suffix-array engine
//! seed-search search --reference ref.fa --reads reads.fa
//!
//! # Naive baseline, first 100 reads only
//! seed-search search --reference ref.fa --reads reads.fa --engine naive --limit 100
//!
//! # JSON output for scripting
//! seed-search search --reference ref.fa --reads reads.fa --format json
//!
//! # Check that both engines agree
//! seed-search compare --reference ref.fa --reads reads.fa
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod search;

#[derive(Parser)]
#[command(name = "seed-search")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Exact-occurrence search of sequencing reads against a reference genome")]
#[command(
    long_about = "seed-search reports, for every read in a FASTA file, the positions at which the read occurs verbatim in a single-record reference FASTA.\n\nTwo engines are available:\n- suffix-array: one-time index build, then logarithmic lookups (all occurrences)\n- naive: repeated scan-and-mask, the linear-time correctness baseline (non-overlapping occurrences)"
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
    /// Search reads against the reference
    Search(search::SearchArgs),

    /// Run both engines and report disagreements
    Compare(compare::CompareArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

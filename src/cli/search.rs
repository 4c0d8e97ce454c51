use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::{Read, Reference};
use crate::parsing;
use crate::search::{naive_search_with_mode, suffix_search, NaiveMode};

#[derive(Args)]
pub struct SearchArgs {
    /// Reference FASTA file (exactly one record; may be gzipped)
    #[arg(long)]
    pub reference: PathBuf,

    /// Reads FASTA file (may be gzipped)
    #[arg(long)]
    pub reads: PathBuf,

    /// Search engine
    #[arg(long, value_enum, default_value = "suffix-array")]
    pub engine: Engine,

    /// Only search the first N reads
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Report overlapping occurrences from the naive engine
    /// (the suffix-array engine always reports them)
    #[arg(long)]
    pub overlapping: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Engine {
    /// Scan-and-mask baseline
    Naive,
    /// Suffix-array binary search
    SuffixArray,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if either FASTA file cannot be parsed, the reference
/// does not hold exactly one record, or a read fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = parsing::read_reference(&args.reference)?;
    let reads = parsing::read_reads(&args.reads)?;
    let limit = args.limit.map(|n| n as usize);

    if verbose {
        eprintln!(
            "Loaded reference '{}' ({} bases) and {} reads",
            reference.name,
            reference.len(),
            reads.len(),
        );
    }

    let results = match args.engine {
        Engine::Naive => {
            let mode = if args.overlapping {
                NaiveMode::Overlapping
            } else {
                NaiveMode::NonOverlapping
            };
            naive_search_with_mode(&reference, &reads, limit, mode)?
        }
        Engine::SuffixArray => suffix_search(&reference, &reads, limit)?,
    };

    let searched = reads.take(limit);
    match format {
        OutputFormat::Text => print_text_results(searched, &results),
        OutputFormat::Json => print_json_results(&reference, searched, &results)?,
        OutputFormat::Tsv => print_tsv_results(searched, &results),
    }

    Ok(())
}

fn print_text_results(reads: &[Read], results: &[Vec<usize>]) {
    for (read, positions) in reads.iter().zip(results) {
        if positions.is_empty() {
            println!("{}: no matches", read.name);
        } else {
            let joined = positions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("{}: {} match(es) at {}", read.name, positions.len(), joined);
        }
    }
}

fn print_json_results(
    reference: &Reference,
    reads: &[Read],
    results: &[Vec<usize>],
) -> anyhow::Result<()> {
    let entries: Vec<serde_json::Value> = reads
        .iter()
        .zip(results)
        .map(|(read, positions)| {
            serde_json::json!({
                "read": read.name,
                "matches": positions.len(),
                "positions": positions,
            })
        })
        .collect();

    let output = serde_json::json!({
        "reference": reference.name,
        "reads": entries,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(reads: &[Read], results: &[Vec<usize>]) {
    println!("read\tmatches\tpositions");
    for (read, positions) in reads.iter().zip(results) {
        let joined = positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!("{}\t{}\t{}", read.name, positions.len(), joined);
    }
}

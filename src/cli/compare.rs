use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::Read;
use crate::index::SuffixArray;
use crate::parsing;
use crate::search::{naive_search_with_mode, suffix_search_with_index, NaiveMode};

#[derive(Args)]
pub struct CompareArgs {
    /// Reference FASTA file (exactly one record; may be gzipped)
    #[arg(long)]
    pub reference: PathBuf,

    /// Reads FASTA file (may be gzipped)
    #[arg(long)]
    pub reads: PathBuf,

    /// Only compare the first N reads
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}

/// Per-read comparison of the two engines against the brute-force oracle.
struct Comparison<'a> {
    read: &'a Read,
    /// Oracle: every occurrence by exhaustive scan
    oracle: Vec<usize>,
    /// Suffix-array engine result
    indexed: Vec<usize>,
    /// Masking scanner result (non-overlapping subset)
    masked: Vec<usize>,
}

impl Comparison<'_> {
    /// The indexed engine must reproduce the oracle exactly.
    fn indexed_agrees(&self) -> bool {
        self.indexed == self.oracle
    }

    /// Every masked occurrence must also be found by the indexed engine.
    fn masked_is_subset(&self) -> bool {
        self.masked.iter().all(|p| self.indexed.contains(p))
    }

    fn consistent(&self) -> bool {
        self.indexed_agrees() && self.masked_is_subset()
    }
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed, a read fails
/// validation, or the engines disagree on any read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = parsing::read_reference(&args.reference)?;
    let reads = parsing::read_reads(&args.reads)?;
    let limit = args.limit.map(|n| n as usize);

    let selected = reads.take(limit);
    let suffix_array = SuffixArray::build(&reference)?;

    if verbose {
        eprintln!(
            "Comparing engines on {} reads against '{}' ({} bases)",
            selected.len(),
            reference.name,
            reference.len(),
        );
    }

    // Validation (empty reads, bad symbols) happens once, in the driver
    let oracle = naive_search_with_mode(&reference, &reads, limit, NaiveMode::Overlapping)?;
    let masked = naive_search_with_mode(&reference, &reads, limit, NaiveMode::NonOverlapping)?;
    let indexed = suffix_search_with_index(&reference, &suffix_array, &reads, limit)?;

    let comparisons: Vec<Comparison> = selected
        .iter()
        .zip(oracle.into_iter().zip(masked).zip(indexed))
        .map(|(read, ((oracle, masked), indexed))| Comparison {
            read,
            oracle,
            indexed,
            masked,
        })
        .collect();

    let disagreements = comparisons.iter().filter(|c| !c.consistent()).count();

    match format {
        OutputFormat::Text => print_text(&comparisons, verbose),
        OutputFormat::Json => print_json(&comparisons)?,
        OutputFormat::Tsv => print_tsv(&comparisons),
    }

    if disagreements > 0 {
        bail!("{disagreements} of {} reads disagree between engines", comparisons.len());
    }

    Ok(())
}

fn print_text(comparisons: &[Comparison], verbose: bool) {
    for c in comparisons {
        if c.consistent() {
            if verbose {
                println!(
                    "{}: OK ({} occurrence(s), {} non-overlapping)",
                    c.read.name,
                    c.oracle.len(),
                    c.masked.len(),
                );
            }
        } else {
            println!("{}: MISMATCH", c.read.name);
            println!("   oracle:  {:?}", c.oracle);
            println!("   indexed: {:?}", c.indexed);
            println!("   masked:  {:?}", c.masked);
        }
    }

    let agreeing = comparisons.iter().filter(|c| c.consistent()).count();
    println!("{agreeing}/{} reads agree", comparisons.len());
}

fn print_json(comparisons: &[Comparison]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = comparisons
        .iter()
        .map(|c| {
            serde_json::json!({
                "read": c.read.name,
                "consistent": c.consistent(),
                "occurrences": c.oracle.len(),
                "non_overlapping": c.masked.len(),
                "oracle": c.oracle,
                "indexed": c.indexed,
                "masked": c.masked,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(comparisons: &[Comparison]) {
    println!("read\tconsistent\toccurrences\tnon_overlapping");
    for c in comparisons {
        println!(
            "{}\t{}\t{}\t{}",
            c.read.name,
            c.consistent(),
            c.oracle.len(),
            c.masked.len(),
        );
    }
}

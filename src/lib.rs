#![doc = r#"
This library validates network-based gene prioritization ("GBA centrality")
against a Random Walk with Restart (RWR) baseline and a random-ranking null model.

It covers the statistical part of the study only. Scores and ranks are produced
by external tools and read from tab-separated files:

- [`parser`]: Readers for score, rank, expression, alias, causal gene and interactome files
- [`percentile`]: Positional top-x% split of ranked gene lists
- [`stats::fisher`]: 2x2 contingency tables and the one-sided Fisher exact test
- [`stats::ranks`]: Random rank baseline and empirical rank CDF curves
- [`stats::wilcoxon`]: One-sided Wilcoxon signed-rank test
- [`pipeline`]: The tissue enrichment, head-to-head and leave-one-out analyses
- [`config`]: Parameters of a run and the input file layout
- [`report`]: Text summary and TSV export of the figure data

# Examples

```
use std::collections::HashSet;
use gba_validation::{GeneId, Interactome};
use gba_validation::stats::fisher::{fisher_exact_greater, ContingencyTable};

let mut interactome = Interactome::default();
for i in 0..20u32 {
    interactome.add_edge(format!("ENSG{i:011}").into(), format!("ENSG{:011}", (i + 1) % 20).into());
}

let predicted: HashSet<GeneId> = (0..5u32).map(|i| format!("ENSG{i:011}").into()).collect();
let tissue: HashSet<GeneId> = (2..7u32).map(|i| format!("ENSG{i:011}").into()).collect();

let table = ContingencyTable::from_partitions(&interactome, &predicted, &tissue);
assert_eq!(table.as_matrix(), [[3, 2], [2, 13]]);

let pvalue = fisher_exact_greater(&table);
assert!((pvalue - 0.072_626).abs() < 1e-5);
```
"#]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

pub mod config;
pub mod genes;
pub mod interactome;
pub mod parser;
pub mod percentile;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::{BaselineMode, ResultFiles, ValidationConfig, ValidationConfigBuilder};
pub use genes::{CausalGenes, Expression, GeneAliases, GeneId, GeneScores, Ranks};
pub use interactome::Interactome;

/// Error type for all fallible operations of this crate
#[derive(Error, Debug)]
pub enum GbaError {
    /// The file is missing or can't be opened
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Reading from an open file or writing an output failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A row does not contain the expected number of tab-separated fields
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A header line does not start with the expected text
    #[error("unexpected header, expected it to start with `{expected}`, found `{found}`")]
    HeaderMismatch { expected: String, found: String },
    /// A numeric column can't be parsed
    #[error("invalid number `{value}` at line {line}")]
    InvalidNumber { line: usize, value: String },
    /// Ranks are 1-based, so `0` is never a valid rank
    #[error("gene {0} has rank 0, ranks start at 1")]
    ZeroRank(GeneId),
    /// A gene identifier appears more than once in a file
    #[error("duplicate gene {0}")]
    DuplicateGene(GeneId),
    /// A gene is absent from a table it is looked up in
    #[error("gene {0} is missing from {1}")]
    MissingGene(GeneId, &'static str),
    /// Percentages must be within `[0, 100]`
    #[error("invalid percentage {0}, must be within [0, 100]")]
    InvalidPercentage(f64),
    /// The configuration or the arguments of a computation are invalid
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A statistical test has no data to operate on
    #[error("degenerate test input: {0}")]
    DegenerateTest(&'static str),
}

/// Shortcut for `Result<T, GbaError>`
pub type GbaResult<T> = Result<T, GbaError>;

/// Converts a count into `f64`
///
/// Counts in this crate are bounded by the size of the interactome,
/// so the conversion through `u32` never loses precision.
///
/// # Panics
///
/// If `n` does not fit into `u32`
pub(crate) fn f64_from_usize(n: usize) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large usize");
    intermediate.into()
}

/// Same as [`f64_from_usize`] for `u64` counts
///
/// # Panics
///
/// If `n` does not fit into `u32`
pub(crate) fn f64_from_u64(n: u64) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large u64");
    intermediate.into()
}

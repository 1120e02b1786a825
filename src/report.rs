//! Plain-text summary of a validation run and TSV export of the figure data
//!
//! Plotting happens outside of this crate. [`Report::save`] writes the
//! numbers behind each figure so that any plotting tool can pick them up.
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::ValidationConfig;
use crate::pipeline::{EnrichmentResult, HeldOutRank, LeaveOneOutResult};
use crate::stats::fisher::ContingencyTable;
use crate::stats::format_pvalue;
use crate::stats::wilcoxon::WilcoxonResult;
use crate::GbaResult;

/// File name of the leave-one-out CDF curves in the figures directory
pub const CDF_FILE: &str = "loo_cdf.tsv";

/// File name of the per-gene leave-one-out ranks in the figures directory
pub const RANKS_FILE: &str = "loo_ranks.tsv";

/// Results of all analyses of one validation run
#[derive(Debug, Clone)]
pub struct Report {
    phenotype: String,
    tissue: String,
    alpha: f64,
    d_max: u32,
    causal_genes: usize,
    enrichment: Vec<EnrichmentResult>,
    head_to_head: EnrichmentResult,
    leave_one_out: LeaveOneOutResult,
}

impl Report {
    pub fn new(
        config: &ValidationConfig,
        causal_genes: usize,
        enrichment: Vec<EnrichmentResult>,
        head_to_head: EnrichmentResult,
        leave_one_out: LeaveOneOutResult,
    ) -> Self {
        Self {
            phenotype: config.phenotype().to_string(),
            tissue: config.tissue().to_string(),
            alpha: config.alpha(),
            d_max: config.d_max(),
            causal_genes,
            enrichment,
            head_to_head,
            leave_one_out,
        }
    }

    /// The tissue enrichment of each method
    pub fn enrichment(&self) -> &[EnrichmentResult] {
        &self.enrichment
    }

    pub fn head_to_head(&self) -> &EnrichmentResult {
        &self.head_to_head
    }

    pub fn leave_one_out(&self) -> &LeaveOneOutResult {
        &self.leave_one_out
    }

    /// Writes the data behind all figures into `dir`
    ///
    /// - `loo_cdf.tsv`: the leave-one-out CDF curves
    /// - `loo_ranks.tsv`: the GBA and RWR rank of every held-out gene
    /// - one contingency table per enrichment test, named after its label
    ///
    /// `dir` is created if it does not exist.
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::Io`] if a file can't be written
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> GbaResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let loo = &self.leave_one_out;
        let mut writer = BufWriter::new(File::create(dir.join(CDF_FILE))?);
        write_cdf_tsv(
            &mut writer,
            &[
                ("GBA", &loo.cdf_gba),
                ("RWR", &loo.cdf_rwr),
                ("random", &loo.cdf_random),
            ],
        )?;
        writer.flush()?;

        let mut writer = BufWriter::new(File::create(dir.join(RANKS_FILE))?);
        write_ranks_tsv(&mut writer, &loo.ranks)?;
        writer.flush()?;

        for result in self.enrichment.iter().chain([&self.head_to_head]) {
            let filename = format!("{}.tsv", result.label().replace(' ', "_"));
            let mut writer = BufWriter::new(File::create(dir.join(filename))?);
            write_table_tsv(&mut writer, result.table())?;
            writer.flush()?;
        }
        info!("Saved figure data to {}", dir.display());
        Ok(())
    }
}

/// Writes CDF curves as columns, one row per rank threshold
///
/// ```text
/// threshold   GBA RWR random
/// 0   0   0   0
/// 1   1   0   0
/// ```
///
/// Curves of different length are padded with their last value.
///
/// # Errors
///
/// [`crate::GbaError::Io`] if writing fails
pub fn write_cdf_tsv<W: Write>(writer: &mut W, curves: &[(&str, &Vec<usize>)]) -> GbaResult<()> {
    write!(writer, "threshold")?;
    for (name, _) in curves {
        write!(writer, "\t{name}")?;
    }
    writeln!(writer)?;

    let len = curves.iter().map(|(_, curve)| curve.len()).max().unwrap_or(0);
    for threshold in 0..len {
        write!(writer, "{threshold}")?;
        for (_, curve) in curves {
            let value = curve
                .get(threshold)
                .or_else(|| curve.last())
                .copied()
                .unwrap_or(0);
            write!(writer, "\t{value}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the GBA and RWR rank of each held-out gene
///
/// ```text
/// ENSG    GENE    GBA RWR
/// ENSG00000114841 DNAH1   4   17
/// ```
///
/// # Errors
///
/// [`crate::GbaError::Io`] if writing fails
pub fn write_ranks_tsv<W: Write>(writer: &mut W, ranks: &[HeldOutRank]) -> GbaResult<()> {
    writeln!(writer, "ENSG\tGENE\tGBA\tRWR")?;
    for rank in ranks {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            rank.gene, rank.name, rank.gba, rank.rwr
        )?;
    }
    Ok(())
}

/// Writes a contingency table with row and column labels
///
/// The last column holds the proportion of `S1` genes per row, the
/// last row the odds ratio. Undefined values are written as `NaN` or `inf`.
///
/// ```text
///         in_S1   not_in_S1   proportion_S1
/// in_S2   3   2   0.6
/// not_in_S2   2   13  0.13333333333333333
/// odds_ratio  9.75
/// ```
///
/// # Errors
///
/// [`crate::GbaError::Io`] if writing fails
pub fn write_table_tsv<W: Write>(writer: &mut W, table: &ContingencyTable) -> GbaResult<()> {
    let [[a, b], [c, d]] = table.as_matrix();
    let (in_s2, outside_s2) = table.proportions();
    writeln!(writer, "\tin_S1\tnot_in_S1\tproportion_S1")?;
    writeln!(writer, "in_S2\t{a}\t{b}\t{in_s2}")?;
    writeln!(writer, "not_in_S2\t{c}\t{d}\t{outside_s2}")?;
    writeln!(writer, "odds_ratio\t{}", table.odds_ratio())?;
    Ok(())
}

fn fmt_enrichment(f: &mut std::fmt::Formatter<'_>, result: &EnrichmentResult) -> std::fmt::Result {
    let (in_s2, outside_s2) = result.table().proportions();
    writeln!(
        f,
        "  {}: {} vs {} genes, table {}, proportions {:.3} vs {:.3}, odds ratio {:.2}, {}",
        result.label(),
        result.s1_size(),
        result.s2_size(),
        result.table(),
        in_s2,
        outside_s2,
        result.table().odds_ratio(),
        format_pvalue(result.pvalue())
    )
}

fn fmt_wilcoxon(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    result: &WilcoxonResult,
) -> std::fmt::Result {
    writeln!(
        f,
        "  {label}: W+ = {}, n = {} ({}), {}",
        result.statistic(),
        result.samples(),
        result.method(),
        format_pvalue(result.pvalue())
    )
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Validation of {} (alpha {}, d_max {}), {} causal genes",
            self.phenotype, self.alpha, self.d_max, self.causal_genes
        )?;
        writeln!(f, "Tissue enrichment ({}):", self.tissue)?;
        for result in &self.enrichment {
            fmt_enrichment(f, result)?;
        }
        writeln!(f, "Head-to-head:")?;
        fmt_enrichment(f, &self.head_to_head)?;

        let loo = &self.leave_one_out;
        writeln!(
            f,
            "Leave-one-out ({} genes ranked among {}):",
            loo.held_out, loo.universe_size
        )?;
        fmt_wilcoxon(f, "GBA vs random", &loo.gba_vs_random)?;
        fmt_wilcoxon(f, "RWR vs random", &loo.rwr_vs_random)?;
        fmt_wilcoxon(f, "GBA vs RWR", &loo.gba_vs_rwr)?;
        writeln!(f, "  gene\tGBA\tRWR")?;
        for rank in &loo.ranks {
            writeln!(f, "  {}\t{}\t{}", rank.name, rank.gba, rank.rwr)?;
        }
        Ok(())
    }
}

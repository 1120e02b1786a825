//! The analyses of the validation study, wired together from a [`ValidationConfig`]
//!
//! Every stage receives its inputs explicitly and returns a new value, nothing
//! is shared or mutated between stages. [`run`] executes all of them in order.
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{ResultFiles, ValidationConfig};
use crate::genes::{CausalGenes, Expression, GeneAliases, GeneId, GeneScores, Ranks};
use crate::interactome::Interactome;
use crate::parser;
use crate::percentile::take_top_percent;
use crate::report::Report;
use crate::stats::fisher::{fisher_exact_greater, ContingencyTable};
use crate::stats::ranks::{empirical_cdf, random_rank_baseline, LeaveOneOut};
use crate::stats::wilcoxon::WilcoxonResult;
use crate::GbaResult;

/// The input data that all analyses share
#[derive(Debug, Clone)]
pub struct StudyData {
    interactome: Interactome,
    aliases: GeneAliases,
    causal_genes: CausalGenes,
}

impl StudyData {
    pub fn new(interactome: Interactome, aliases: GeneAliases, causal_genes: CausalGenes) -> Self {
        Self {
            interactome,
            aliases,
            causal_genes,
        }
    }

    /// Loads the interactome, the gene aliases and the causal genes of `phenotype`
    ///
    /// # Errors
    ///
    /// Any parser error of [`parser::interactome`], [`parser::gene2ensg`]
    /// or [`parser::causal_genes`]
    pub fn load(files: &ResultFiles, phenotype: &str) -> GbaResult<Self> {
        let interactome = parser::interactome::parse(&files.interactome)?;
        let aliases = parser::gene2ensg::parse(&files.gene2ensg)?;
        let causal_genes =
            parser::causal_genes::parse(&files.causal_genes, phenotype, &aliases, &interactome)?;
        info!(
            "Loaded interactome with {} genes and {} causal genes for {}",
            interactome.len(),
            causal_genes.len(),
            phenotype
        );
        Ok(Self::new(interactome, aliases, causal_genes))
    }

    pub fn interactome(&self) -> &Interactome {
        &self.interactome
    }

    pub fn aliases(&self) -> &GeneAliases {
        &self.aliases
    }

    /// Gives the score parsers access to the aliases, so they can add
    /// the symbols of their files
    pub fn aliases_mut(&mut self) -> &mut GeneAliases {
        &mut self.aliases
    }

    /// The known causal genes, used as seeds of the scoring methods
    pub fn causal_genes(&self) -> &CausalGenes {
        &self.causal_genes
    }

    /// All interactome genes that are not seeds
    pub fn candidates(&self) -> impl Iterator<Item = &GeneId> {
        self.interactome
            .nodes()
            .filter(|id| !self.causal_genes.contains(*id))
    }

    /// Removes the seeds and all genes outside of the interactome
    fn candidate_scores(&self, scores: &GeneScores) -> GeneScores {
        scores
            .without(&self.causal_genes)
            .restrict_to(&self.interactome)
    }
}

/// Outcome of one Fisher exact test between two gene sets
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentResult {
    label: String,
    s1: usize,
    s2: usize,
    table: ContingencyTable,
    pvalue: f64,
}

impl EnrichmentResult {
    /// Tests `s1` for over-representation in `s2`, both within `universe`
    pub fn test<'a, U>(label: &str, universe: U, s1: &HashSet<GeneId>, s2: &HashSet<GeneId>) -> Self
    where
        U: IntoIterator<Item = &'a GeneId>,
    {
        let table = ContingencyTable::from_partitions(universe, s1, s2);
        let pvalue = fisher_exact_greater(&table);
        info!("{}: {} p = {}", label, table, pvalue);
        Self {
            label: label.to_string(),
            s1: s1.len(),
            s2: s2.len(),
            table,
            pvalue,
        }
    }

    /// Short description of the compared sets, e.g. `GBA in testis`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Size of the first gene set
    pub fn s1_size(&self) -> usize {
        self.s1
    }

    /// Size of the second gene set
    pub fn s2_size(&self) -> usize {
        self.s2
    }

    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }
}

/// Returns the top `percent` genes of `scores`
fn top_genes(scores: &GeneScores, percent: f64) -> GbaResult<HashSet<GeneId>> {
    let ranked = scores.ranked();
    let (top, _) = take_top_percent(&ranked, percent)?;
    Ok(top.iter().cloned().collect())
}

/// Tests whether the top scoring genes of a method are enriched in tissue-specific genes
///
/// Seeds are removed from `scores` and `expression` before ranking. The
/// top `causal_percent` of the remaining scored genes are the predicted
/// causal genes, the top `tissue_percent` of the expressed genes are
/// the tissue-enriched genes. The universe are all non-seed genes of
/// the interactome.
///
/// # Errors
///
/// [`crate::GbaError::InvalidPercentage`] if a percentage of `config` is invalid
pub fn tissue_enrichment(
    data: &StudyData,
    method: &str,
    scores: &GeneScores,
    expression: &Expression,
    config: &ValidationConfig,
) -> GbaResult<EnrichmentResult> {
    let predicted = top_genes(&data.candidate_scores(scores), config.causal_percent())?;
    let enriched = top_genes(&data.candidate_scores(expression), config.tissue_percent())?;
    debug!(
        "{} predicted genes, {} genes enriched in {}",
        predicted.len(),
        enriched.len(),
        config.tissue()
    );
    Ok(EnrichmentResult::test(
        &format!("{method} in {}", config.tissue()),
        data.candidates(),
        &predicted,
        &enriched,
    ))
}

/// Tests whether the top genes of method `a` are enriched in the top genes of method `b`
///
/// Both methods use the same percentage (`causal_percent`) and the same
/// universe as [`tissue_enrichment`].
///
/// # Errors
///
/// [`crate::GbaError::InvalidPercentage`] if the percentage of `config` is invalid
pub fn head_to_head(
    data: &StudyData,
    a: (&str, &GeneScores),
    b: (&str, &GeneScores),
    config: &ValidationConfig,
) -> GbaResult<EnrichmentResult> {
    let top_a = top_genes(&data.candidate_scores(a.1), config.causal_percent())?;
    let top_b = top_genes(&data.candidate_scores(b.1), config.causal_percent())?;
    Ok(EnrichmentResult::test(
        &format!("{} in {}", a.0, b.0),
        data.candidates(),
        &top_a,
        &top_b,
    ))
}

/// Leave-one-out ranks of a single held-out gene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldOutRank {
    pub gene: GeneId,
    /// Gene symbol, or the identifier if no symbol is known
    pub name: String,
    pub gba: u32,
    pub rwr: u32,
}

/// Rank curves and tests of the leave-one-out validation
#[derive(Debug, Clone)]
pub struct LeaveOneOutResult {
    pub held_out: usize,
    pub universe_size: usize,
    /// Ranks of every held-out gene, sorted by [`GeneId`]
    pub ranks: Vec<HeldOutRank>,
    /// Average sorted rank of random trials
    pub baseline: Vec<f64>,
    pub cdf_gba: Vec<usize>,
    pub cdf_rwr: Vec<usize>,
    pub cdf_random: Vec<usize>,
    pub gba_vs_random: WilcoxonResult,
    pub rwr_vs_random: WilcoxonResult,
    pub gba_vs_rwr: WilcoxonResult,
}

/// Compares the leave-one-out ranks of GBA centrality, RWR and random ranking
///
/// The held-out genes are the causal genes, ranked among all genes of the
/// interactome. The random baseline uses a [`StdRng`] seeded from `config`,
/// so repeated runs give identical results.
///
/// # Errors
///
/// - [`crate::GbaError::MissingGene`] if a causal gene has no rank
/// - [`crate::GbaError::InvalidConfig`] if there are more causal genes than
///   genes in the interactome
/// - [`crate::GbaError::DegenerateTest`] if two rank distributions are identical
pub fn leave_one_out(
    data: &StudyData,
    gba: &Ranks,
    rwr: &Ranks,
    config: &ValidationConfig,
) -> GbaResult<LeaveOneOutResult> {
    let loo = LeaveOneOut::new(data.causal_genes(), data.interactome().len());
    let k = loo.held_out().len();
    let n = loo.universe_size();

    let ranks = loo
        .held_out()
        .iter()
        .zip(loo.ranks(gba, "GBA ranks")?)
        .zip(loo.ranks(rwr, "RWR ranks")?)
        .map(|((gene, gba), rwr)| HeldOutRank {
            gene: gene.clone(),
            name: data.aliases().display_name(gene).to_string(),
            gba,
            rwr,
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed());
    let baseline = random_rank_baseline(n, k, config.trials(), config.baseline_mode(), &mut rng)?;

    let result = LeaveOneOutResult {
        held_out: k,
        universe_size: n,
        ranks,
        cdf_gba: loo.cdf(gba, "GBA ranks")?,
        cdf_rwr: loo.cdf(rwr, "RWR ranks")?,
        cdf_random: empirical_cdf(baseline.iter().copied(), n),
        gba_vs_random: loo.versus_random(gba, "GBA ranks", &baseline)?,
        rwr_vs_random: loo.versus_random(rwr, "RWR ranks", &baseline)?,
        gba_vs_rwr: loo.head_to_head((gba, "GBA ranks"), (rwr, "RWR ranks"))?,
        baseline,
    };
    info!(
        "Leave-one-out: GBA vs random p = {}, RWR vs random p = {}, GBA vs RWR p = {}",
        result.gba_vs_random.pvalue(),
        result.rwr_vs_random.pvalue(),
        result.gba_vs_rwr.pvalue()
    );
    Ok(result)
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs the complete validation study
///
/// All input files are resolved from `config` via [`ResultFiles::resolve`].
/// If `config` has a figures directory, the data behind every figure is
/// written there as TSV files.
///
/// ```mermaid
/// flowchart LR
///     SIF[interactome.sif] --> D[StudyData]
///     G2E[gene2ENSG.tsv] --> D
///     CG[causal_genes.tsv] --> D
///     GBA[GBA scores] --> TE[tissue_enrichment]
///     RWR[RWR scores] --> TE
///     EXP[tissue expression] --> TE
///     D --> TE
///     GBA --> H2H[head_to_head]
///     RWR --> H2H
///     D --> H2H
///     GR[GBA ranks] --> LOO[leave_one_out]
///     RR[RWR ranks] --> LOO
///     D --> LOO
///     TE --> R[Report]
///     H2H --> R
///     LOO --> R
/// ```
///
/// # Errors
///
/// Any error of the parsers or of the individual analyses
pub fn run(config: &ValidationConfig) -> GbaResult<Report> {
    let files = ResultFiles::resolve(config);
    info!(
        "Validating {} (alpha {}, d_max {}) in {}",
        config.phenotype(),
        config.alpha(),
        config.d_max(),
        config.data_dir().display()
    );

    let mut data = StudyData::load(&files, config.phenotype())?;
    let gba_scores = parser::scores::parse_gba(&files.gba_scores, data.aliases_mut())?;
    let rwr_scores = parser::scores::parse_rwr(&files.rwr_scores, data.aliases_mut())?;
    let expression = parser::expression::parse(&files.expression, data.interactome())?;

    let enrichment = vec![
        tissue_enrichment(&data, "GBA", &gba_scores, &expression, config)?,
        tissue_enrichment(&data, "RWR", &rwr_scores, &expression, config)?,
    ];
    let comparison = head_to_head(&data, ("GBA", &gba_scores), ("RWR", &rwr_scores), config)?;

    let gba_ranks = parser::ranks::parse_gba(&files.gba_ranks)?;
    let rwr_ranks = parser::ranks::parse_rwr(&files.rwr_ranks)?;
    let loo = leave_one_out(&data, &gba_ranks, &rwr_ranks, config)?;

    let report = Report::new(config, data.causal_genes().len(), enrichment, comparison, loo);
    if let Some(dir) = config.figures_dir() {
        report.save(dir)?;
    }
    Ok(report)
}

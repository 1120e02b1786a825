//! Parameters of a validation run and the location of its input files
//!
//! A [`ValidationConfig`] is built once, validated, and then passed by
//! reference into every stage of the [`pipeline`](crate::pipeline).
//!
//! # Examples
//!
//! ```
//! use gba_validation::{BaselineMode, ValidationConfig, ResultFiles};
//!
//! let config = ValidationConfig::builder()
//!     .phenotype("MMAF")
//!     .alpha(0.5)
//!     .d_max(5)
//!     .data_dir("data")
//!     .baseline_mode(BaselineMode::WithoutReplacement)
//!     .build()
//!     .unwrap();
//!
//! let files = ResultFiles::resolve(&config);
//! assert!(files.gba_scores.ends_with("MMAF/scores_alpha05_dmax5.tsv"));
//! ```
use std::path::{Path, PathBuf};

use crate::{GbaError, GbaResult};

pub use crate::stats::ranks::BaselineMode;

/// Parameters of a validation run
///
/// Use [`ValidationConfig::builder`] to construct it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    phenotype: String,
    alpha: f64,
    d_max: u32,
    tissue: String,
    causal_percent: f64,
    tissue_percent: f64,
    trials: usize,
    seed: u64,
    baseline_mode: BaselineMode,
    data_dir: PathBuf,
    figures_dir: Option<PathBuf>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            phenotype: "MMAF".to_string(),
            alpha: 0.5,
            d_max: 5,
            tissue: "testis".to_string(),
            causal_percent: 10.0,
            tissue_percent: 10.0,
            trials: 10_000,
            seed: 42,
            baseline_mode: BaselineMode::default(),
            data_dir: PathBuf::from("data"),
            figures_dir: None,
        }
    }
}

impl ValidationConfig {
    /// Returns a builder, initialized with the default parameters
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder {
            config: Self::default(),
        }
    }

    /// The phenotype whose causal genes are used as seeds, e.g. `MMAF`
    pub fn phenotype(&self) -> &str {
        &self.phenotype
    }

    /// The attenuation coefficient that was used for GBA centrality scoring
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The maximum path length that was used for GBA centrality scoring
    pub fn d_max(&self) -> u32 {
        self.d_max
    }

    pub fn tissue(&self) -> &str {
        &self.tissue
    }

    /// Percentage of top-scoring genes that are considered predicted causal genes
    pub fn causal_percent(&self) -> f64 {
        self.causal_percent
    }

    /// Percentage of top-expressed genes that are considered tissue-enriched
    pub fn tissue_percent(&self) -> f64 {
        self.tissue_percent
    }

    /// Number of trials of the random rank baseline
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Seed of the random number generator for the random rank baseline
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn baseline_mode(&self) -> BaselineMode {
        self.baseline_mode
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory for figure data, if figure data should be written at all
    pub fn figures_dir(&self) -> Option<&Path> {
        self.figures_dir.as_deref()
    }

    /// Alpha as used in file names: `0.5` becomes `05`
    fn alpha_tag(&self) -> String {
        format!("{:?}", self.alpha).replace('.', "")
    }
}

/// Builder for [`ValidationConfig`]
#[derive(Debug, Clone)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    #[must_use]
    pub fn phenotype(mut self, phenotype: &str) -> Self {
        self.config.phenotype = phenotype.to_string();
        self
    }

    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    #[must_use]
    pub fn d_max(mut self, d_max: u32) -> Self {
        self.config.d_max = d_max;
        self
    }

    #[must_use]
    pub fn tissue(mut self, tissue: &str) -> Self {
        self.config.tissue = tissue.to_string();
        self
    }

    #[must_use]
    pub fn causal_percent(mut self, percent: f64) -> Self {
        self.config.causal_percent = percent;
        self
    }

    #[must_use]
    pub fn tissue_percent(mut self, percent: f64) -> Self {
        self.config.tissue_percent = percent;
        self
    }

    #[must_use]
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn baseline_mode(mut self, mode: BaselineMode) -> Self {
        self.config.baseline_mode = mode;
        self
    }

    #[must_use]
    pub fn data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.data_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn figures_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.figures_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Validates the parameters and returns the config
    ///
    /// # Errors
    ///
    /// [`GbaError::InvalidConfig`] if
    /// - the phenotype or tissue is empty or contains characters other
    ///   than ASCII alphanumerics, `_` and `-`
    /// - alpha is not within `(0, 1]`
    /// - `d_max` or the number of trials is `0`
    ///
    /// [`GbaError::InvalidPercentage`] if a percentage is not within `[0, 100]`
    pub fn build(self) -> GbaResult<ValidationConfig> {
        let config = self.config;
        check_name("phenotype", &config.phenotype)?;
        check_name("tissue", &config.tissue)?;
        if !(config.alpha > 0.0 && config.alpha <= 1.0) {
            return Err(GbaError::InvalidConfig(format!(
                "alpha must be within (0, 1], got {}",
                config.alpha
            )));
        }
        if config.d_max == 0 {
            return Err(GbaError::InvalidConfig("d_max must be at least 1".to_string()));
        }
        if config.trials == 0 {
            return Err(GbaError::InvalidConfig(
                "the number of trials must be at least 1".to_string(),
            ));
        }
        for percent in [config.causal_percent, config.tissue_percent] {
            if !(0.0..=100.0).contains(&percent) {
                return Err(GbaError::InvalidPercentage(percent));
            }
        }
        Ok(config)
    }
}

fn check_name(field: &str, value: &str) -> GbaResult<()> {
    if value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(GbaError::InvalidConfig(format!(
            "invalid {field} `{value}`"
        )));
    }
    Ok(())
}

/// Paths of all input files of a validation run
///
/// ```text
/// {data}/interactome.sif
/// {data}/gene2ENSG.tsv
/// {data}/causal_genes.tsv
/// {data}/tissue_expression/{tissue}.tsv
/// {data}/{phenotype}/scores_alpha{A}_dmax{D}.tsv
/// {data}/{phenotype}/rwr_scores.tsv
/// {data}/{phenotype}/ranks_gba_alpha{A}_dmax{D}.tsv
/// {data}/{phenotype}/ranks_rwr.tsv
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFiles {
    pub interactome: PathBuf,
    pub gene2ensg: PathBuf,
    pub causal_genes: PathBuf,
    pub expression: PathBuf,
    pub gba_scores: PathBuf,
    pub rwr_scores: PathBuf,
    pub gba_ranks: PathBuf,
    pub rwr_ranks: PathBuf,
}

impl ResultFiles {
    /// Resolves the file paths for the parameters of `config`
    pub fn resolve(config: &ValidationConfig) -> Self {
        let data = config.data_dir();
        let phenotype = data.join(config.phenotype());
        let params = format!("alpha{}_dmax{}", config.alpha_tag(), config.d_max());
        Self {
            interactome: data.join("interactome.sif"),
            gene2ensg: data.join("gene2ENSG.tsv"),
            causal_genes: data.join("causal_genes.tsv"),
            expression: data
                .join("tissue_expression")
                .join(format!("{}.tsv", config.tissue())),
            gba_scores: phenotype.join(format!("scores_{params}.tsv")),
            rwr_scores: phenotype.join("rwr_scores.tsv"),
            gba_ranks: phenotype.join(format!("ranks_gba_{params}.tsv")),
            rwr_ranks: phenotype.join("ranks_rwr.tsv"),
        }
    }
}

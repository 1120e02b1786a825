//! Leave-one-out rank distributions
//!
//! Each causal gene is hidden from a scoring method, and the rank the method
//! assigns to it is recorded. These ranks are compared to each other and to a
//! random ranking, using empirical CDF curves and Wilcoxon signed-rank tests.
use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;
use tracing::{debug, info};

use crate::genes::{GeneId, Ranks};
use crate::stats::wilcoxon::{wilcoxon_greater, WilcoxonResult};
use crate::{GbaError, GbaResult};

/// How the ranks of a single random trial are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselineMode {
    /// Every rank is drawn independently from `[1, n)`
    ///
    /// Ranks can repeat within a trial and `n` itself is never drawn.
    /// This reproduces the baseline of the published study.
    #[default]
    IndependentDraws,
    /// `k` distinct ranks are drawn from `[1, n]`, like a random permutation
    WithoutReplacement,
}

/// Calculates the average rank curve of randomly ranked genes
///
/// For each of `trials` trials, `k` ranks are drawn from a universe of
/// `universe_size` genes according to `mode` and sorted ascending. The
/// returned vector contains the average rank at each sorted position.
///
/// # Errors
///
/// [`GbaError::InvalidConfig`] if `trials` is `0`, if `universe_size` is
/// smaller than 2 or if `k` is larger than `universe_size`
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use gba_validation::stats::ranks::{random_rank_baseline, BaselineMode};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let baseline = random_rank_baseline(1000, 5, 200, BaselineMode::IndependentDraws, &mut rng).unwrap();
/// assert_eq!(baseline.len(), 5);
/// assert!(baseline.windows(2).all(|w| w[0] <= w[1]));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn random_rank_baseline<R: Rng + ?Sized>(
    universe_size: usize,
    k: usize,
    trials: usize,
    mode: BaselineMode,
    rng: &mut R,
) -> GbaResult<Vec<f64>> {
    if trials == 0 {
        return Err(GbaError::InvalidConfig(
            "the random baseline needs at least one trial".to_string(),
        ));
    }
    if universe_size < 2 {
        return Err(GbaError::InvalidConfig(format!(
            "the random baseline needs at least 2 genes, got {universe_size}"
        )));
    }
    if k > universe_size {
        return Err(GbaError::InvalidConfig(format!(
            "cannot draw {k} ranks from {universe_size} genes"
        )));
    }

    let mut sums = vec![0u64; k];
    let mut trial = Vec::with_capacity(k);
    for _ in 0..trials {
        trial.clear();
        match mode {
            BaselineMode::IndependentDraws => {
                trial.extend((0..k).map(|_| rng.gen_range(1..universe_size)));
            }
            BaselineMode::WithoutReplacement => {
                trial.extend(index::sample(rng, universe_size, k).into_iter().map(|i| i + 1));
            }
        }
        trial.sort_unstable();
        for (sum, rank) in sums.iter_mut().zip(&trial) {
            *sum += *rank as u64;
        }
    }
    debug!(
        "Random baseline with {} trials of {} ranks out of {} ({:?})",
        trials, k, universe_size, mode
    );

    let trials = trials as f64;
    Ok(sums.into_iter().map(|sum| sum as f64 / trials).collect())
}

/// Counts, for each threshold `i` in `0..n`, how many ranks are `<= i`
///
/// The curve is non-decreasing. Ranks are 1-based, so the value at index
/// `0` is `0` for valid rank lists. Ranks `>= n` are never counted and
/// `NaN` values are ignored.
///
/// # Examples
///
/// ```
/// use gba_validation::stats::ranks::empirical_cdf;
///
/// let curve = empirical_cdf([2u32, 2, 5], 7);
/// assert_eq!(curve, vec![0, 0, 2, 2, 2, 3, 3]);
/// ```
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn empirical_cdf<T, I>(ranks: I, n: usize) -> Vec<usize>
where
    T: Into<f64>,
    I: IntoIterator<Item = T>,
{
    let mut histogram = vec![0usize; n];
    for rank in ranks {
        let rank: f64 = rank.into();
        if rank.is_nan() {
            continue;
        }
        // the smallest integer threshold i with rank <= i
        let threshold = rank.ceil().max(0.0);
        if threshold < n as f64 {
            histogram[threshold as usize] += 1;
        }
    }
    let mut total = 0usize;
    histogram
        .into_iter()
        .map(|count| {
            total += count;
            total
        })
        .collect()
}

/// Leave-one-out comparison of two methods and the random baseline
///
/// The held-out genes are kept in a fixed order (sorted by [`GeneId`]), so
/// the ranks of both methods are paired by gene identity.
#[derive(Debug, Clone)]
pub struct LeaveOneOut {
    held_out: Vec<GeneId>,
    universe_size: usize,
}

impl LeaveOneOut {
    /// Constructs a new comparison for `held_out` genes of a universe of `universe_size` genes
    pub fn new(held_out: &HashSet<GeneId>, universe_size: usize) -> Self {
        let mut held_out: Vec<GeneId> = held_out.iter().cloned().collect();
        held_out.sort_unstable();
        info!(
            "Leave-one-out with {} held-out genes out of {}",
            held_out.len(),
            universe_size
        );
        Self {
            held_out,
            universe_size,
        }
    }

    /// The held-out genes, sorted
    pub fn held_out(&self) -> &[GeneId] {
        &self.held_out
    }

    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Returns the ranks of all held-out genes, paired by gene
    ///
    /// # Errors
    ///
    /// [`GbaError::MissingGene`] if a held-out gene is not ranked by the method
    pub fn ranks(&self, table: &Ranks, method: &'static str) -> GbaResult<Vec<u32>> {
        table.ranks_of(&self.held_out, method)
    }

    /// Empirical CDF curve of the held-out gene ranks of one method
    ///
    /// # Errors
    ///
    /// Same as [`LeaveOneOut::ranks`]
    pub fn cdf(&self, table: &Ranks, method: &'static str) -> GbaResult<Vec<usize>> {
        Ok(empirical_cdf(self.ranks(table, method)?, self.universe_size))
    }

    /// Tests whether `method` ranks the held-out genes better than random
    ///
    /// The sorted ranks of the method are paired with the positions of the
    /// sorted `baseline` (see [`random_rank_baseline`]) and the baseline is
    /// tested to be greater.
    ///
    /// # Errors
    ///
    /// - [`GbaError::MissingGene`] if a held-out gene is not ranked by the method
    /// - [`GbaError::DegenerateTest`] if the baseline does not match the number
    ///   of held-out genes or if it equals the method ranks
    pub fn versus_random(
        &self,
        table: &Ranks,
        method: &'static str,
        baseline: &[f64],
    ) -> GbaResult<WilcoxonResult> {
        let mut ranks = self.ranks(table, method)?;
        ranks.sort_unstable();
        let ranks: Vec<f64> = ranks.into_iter().map(f64::from).collect();
        wilcoxon_greater(baseline, &ranks)
    }

    /// Tests whether method `a` ranks the held-out genes better than method `b`
    ///
    /// The ranks are paired by gene and the ranks of `b` are tested to be greater.
    ///
    /// # Errors
    ///
    /// - [`GbaError::MissingGene`] if a held-out gene is not ranked by one of the methods
    /// - [`GbaError::DegenerateTest`] if both methods rank all genes equally
    pub fn head_to_head(
        &self,
        a: (&Ranks, &'static str),
        b: (&Ranks, &'static str),
    ) -> GbaResult<WilcoxonResult> {
        let ranks_a: Vec<f64> = self.ranks(a.0, a.1)?.into_iter().map(f64::from).collect();
        let ranks_b: Vec<f64> = self.ranks(b.0, b.1)?.into_iter().map(f64::from).collect();
        wilcoxon_greater(&ranks_b, &ranks_a)
    }
}

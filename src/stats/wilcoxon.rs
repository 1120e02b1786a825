//! One-sided Wilcoxon signed-rank test for paired samples
//!
//! The test is used to compare leave-one-out rank distributions. Lower ranks
//! are better, so testing `random` against `method` with the alternative
//! "greater" asks whether the method ranks causal genes better than chance.
use std::fmt::Display;

use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::{f64_from_usize, GbaError, GbaResult};

/// Sample sizes up to this use the exact null distribution
pub const MAX_EXACT_SAMPLES: usize = 50;

/// How the p-value of a [`WilcoxonResult`] was calculated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WilcoxonMethod {
    /// Exact distribution of the signed-rank statistic
    Exact,
    /// Normal approximation, corrected for ties
    Normal,
}

impl Display for WilcoxonMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WilcoxonMethod::Exact => write!(f, "exact"),
            WilcoxonMethod::Normal => write!(f, "normal approximation"),
        }
    }
}

/// Outcome of [`wilcoxon_greater`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilcoxonResult {
    statistic: f64,
    pvalue: f64,
    samples: usize,
    method: WilcoxonMethod,
}

impl WilcoxonResult {
    /// The sum of ranks of the positive differences `x - y`
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// The one-sided p-value
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// The number of pairs with a non-zero difference
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn method(&self) -> WilcoxonMethod {
        self.method
    }
}

/// Tests whether `x` is stochastically greater than `y`
///
/// `x` and `y` are paired by position. Pairs without difference are discarded
/// before ranking. The exact null distribution is used for up to
/// [`MAX_EXACT_SAMPLES`] pairs if there are neither ties nor discarded pairs,
/// the normal approximation otherwise.
///
/// # Errors
///
/// [`GbaError::DegenerateTest`] if the samples differ in length or if
/// all pairs are equal
///
/// # Examples
///
/// ```
/// use gba_validation::stats::wilcoxon::wilcoxon_greater;
///
/// let random = [5.0, 8.0, 10.0, 20.0, 3.0];
/// let method = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = wilcoxon_greater(&random, &method).unwrap();
/// assert!((result.statistic() - 14.0).abs() < f64::EPSILON);
/// assert!((result.pvalue() - 0.0625).abs() < 1e-12);
/// ```
pub fn wilcoxon_greater(x: &[f64], y: &[f64]) -> GbaResult<WilcoxonResult> {
    if x.len() != y.len() {
        return Err(GbaError::DegenerateTest(
            "paired samples must have the same length",
        ));
    }
    let differences: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    let zeros = x.len() - differences.len();
    if differences.is_empty() {
        return Err(GbaError::DegenerateTest("all paired differences are zero"));
    }

    let (ranks, tie_groups) = abs_ranks(&differences);
    let statistic: f64 = differences
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, rank)| rank)
        .sum();

    let n = differences.len();
    let result = if n <= MAX_EXACT_SAMPLES && tie_groups.is_empty() && zeros == 0 {
        WilcoxonResult {
            statistic,
            pvalue: exact_sf(n, statistic),
            samples: n,
            method: WilcoxonMethod::Exact,
        }
    } else {
        WilcoxonResult {
            statistic,
            pvalue: normal_sf(n, statistic, &tie_groups),
            samples: n,
            method: WilcoxonMethod::Normal,
        }
    };
    debug!(
        "Wilcoxon signed-rank: W+ = {}, n = {}, zeros = {}, p = {} ({:?})",
        result.statistic, n, zeros, result.pvalue, result.method
    );
    Ok(result)
}

/// Ranks the absolute values, averaging the ranks of ties
///
/// Returns the ranks in input order and the sizes of all tie groups
fn abs_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| values[*a].abs().total_cmp(&values[*b].abs()));

    let mut ranks = vec![0.0; values.len()];
    let mut tie_groups = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let value = values[order[start]].abs();
        let mut end = start + 1;
        while end < order.len() && values[order[end]].abs() == value {
            end += 1;
        }
        // ranks are 1-based: the group covers ranks start+1 ..= end
        let rank = f64_from_usize(start + 1 + end) / 2.0;
        for idx in &order[start..end] {
            ranks[*idx] = rank;
        }
        if end - start > 1 {
            tie_groups.push(end - start);
        }
        start = end;
    }
    (ranks, tie_groups)
}

/// P(W+ >= statistic) under the exact null distribution of `n` untied ranks
fn exact_sf(n: usize, statistic: f64) -> f64 {
    let max_sum = n * (n + 1) / 2;
    // counts[s] = number of subsets of {1..n} summing up to s
    let mut counts = vec![0.0f64; max_sum + 1];
    counts[0] = 1.0;
    for rank in 1..=n {
        for sum in (rank..=max_sum).rev() {
            counts[sum] += counts[sum - rank];
        }
    }
    let total: f64 = counts.iter().sum();
    let upper: f64 = counts
        .iter()
        .enumerate()
        .filter(|(sum, _)| f64_from_usize(*sum) >= statistic)
        .map(|(_, count)| count)
        .sum();
    (upper / total).clamp(0.0, 1.0)
}

/// P(W+ >= statistic) using the normal approximation
fn normal_sf(n: usize, statistic: f64, tie_groups: &[usize]) -> f64 {
    let n = f64_from_usize(n);
    let mean = n * (n + 1.0) / 4.0;
    let tie_correction: f64 = tie_groups
        .iter()
        .map(|t| {
            let t = f64_from_usize(*t);
            t * t * t - t
        })
        .sum::<f64>()
        / 48.0;
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_correction;
    let z = (statistic - mean) / variance.sqrt();
    let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    normal.sf(z).clamp(0.0, 1.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_small_sample() {
        let x = [5.0, 8.0, 10.0, 20.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = wilcoxon_greater(&x, &y).unwrap();
        assert_eq!(result.method(), WilcoxonMethod::Exact);
        assert_eq!(result.samples(), 5);
        assert!((result.statistic() - 14.0).abs() < f64::EPSILON);
        assert!((result.pvalue() - 2.0 / 32.0).abs() < 1e-12);

        // the opposite alternative
        let result = wilcoxon_greater(&y, &x).unwrap();
        assert!((result.statistic() - 1.0).abs() < f64::EPSILON);
        assert!((result.pvalue() - 31.0 / 32.0).abs() < 1e-12);
    }

    #[test]
    fn exact_all_positive() {
        let x = [2.0, 3.0, 4.0];
        let y = [1.0, 1.0, 1.0];
        let result = wilcoxon_greater(&x, &y).unwrap();
        assert!((result.pvalue() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn zeros_switch_to_normal() {
        let x = [5.0, 8.0, 10.0, 20.0, 3.0, 7.0, 9.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 1.0];
        let result = wilcoxon_greater(&x, &y).unwrap();
        assert_eq!(result.method(), WilcoxonMethod::Normal);
        assert_eq!(result.samples(), 6);
        assert!((result.statistic() - 20.0).abs() < f64::EPSILON);
        assert!((result.pvalue() - 0.023_199_730_935_452_318).abs() < 1e-6);
    }

    #[test]
    fn ties_use_average_ranks() {
        let x = [10.0, 12.0, 9.0, 15.0, 11.0, 14.0];
        let y = [12.0, 10.0, 9.0, 11.0, 15.0, 16.0];
        let result = wilcoxon_greater(&x, &y).unwrap();
        assert_eq!(result.method(), WilcoxonMethod::Normal);
        assert!((result.statistic() - 6.5).abs() < f64::EPSILON);
        assert!((result.pvalue() - 0.608_736_037_629_966_3).abs() < 1e-6);
    }

    #[test]
    fn large_sample_normal() {
        let y: Vec<f64> = (1..=60).map(f64::from).collect();
        let x: Vec<f64> = (1..=60).map(|i| f64::from(i * 3 % 17 + i)).collect();
        let result = wilcoxon_greater(&x, &y).unwrap();
        assert_eq!(result.method(), WilcoxonMethod::Normal);
        assert_eq!(result.samples(), 57);
        assert!((result.statistic() - 1653.0).abs() < f64::EPSILON);
        assert!((result.pvalue() - 2.519_587_707_787_993_6e-11).abs() < 1e-14);
    }

    #[test]
    fn degenerate_input() {
        assert!(matches!(
            wilcoxon_greater(&[1.0, 2.0], &[1.0, 2.0]),
            Err(GbaError::DegenerateTest(_))
        ));
        assert!(wilcoxon_greater(&[1.0], &[1.0, 2.0]).is_err());
        assert!(wilcoxon_greater(&[], &[]).is_err());
    }

    #[test]
    fn average_ranks() {
        let (ranks, ties) = abs_ranks(&[-2.0, 2.0, 1.0, -4.0, 4.0, 2.0]);
        assert_eq!(ranks, vec![3.0, 3.0, 1.0, 5.5, 5.5, 3.0]);
        assert_eq!(ties, vec![3, 2]);
    }
}

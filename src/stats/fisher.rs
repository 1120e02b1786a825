//! One-sided Fisher exact test on 2x2 contingency tables
//!
//! The table is built from two independent partitions of the same gene
//! universe. In the tissue enrichment analysis, `S1` are the predicted causal
//! genes and `S2` the tissue-enriched genes. For a head-to-head comparison of
//! two methods, `S1` and `S2` are the top genes of each method.
//!
//! ```text
//!              in S1    not in S1
//! in S2          a          b
//! not in S2      c          d
//! ```
use std::collections::HashSet;
use std::fmt::Display;

use statrs::distribution::{DiscreteCDF, Hypergeometric};
use tracing::debug;

use crate::f64_from_u64;
use crate::genes::GeneId;

/// Counts of a 2x2 contingency table `[[a, b], [c, d]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContingencyTable {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl ContingencyTable {
    /// Constructs a table from its four cells, row by row
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Counts the overlap of `s1` and `s2` within `universe`
    ///
    /// - `a = |S1 ∩ S2|`
    /// - `b = |S2 \ S1|`
    /// - `c = |S1 \ S2|`
    /// - `d = |U \ (S1 ∪ S2)|`
    ///
    /// Genes of `s1` or `s2` that are not part of `universe` are ignored,
    /// so the cells always sum up to the size of the universe.
    pub fn from_partitions<'a, U>(universe: U, s1: &HashSet<GeneId>, s2: &HashSet<GeneId>) -> Self
    where
        U: IntoIterator<Item = &'a GeneId>,
    {
        let mut table = Self::default();
        for gene in universe {
            match (s1.contains(gene), s2.contains(gene)) {
                (true, true) => table.a += 1,
                (false, true) => table.b += 1,
                (true, false) => table.c += 1,
                (false, false) => table.d += 1,
            }
        }
        debug!("Contingency table {}", table);
        table
    }

    /// Returns the cells as `[[a, b], [c, d]]`
    pub fn as_matrix(&self) -> [[u64; 2]; 2] {
        [[self.a, self.b], [self.c, self.d]]
    }

    /// The size of the universe
    pub fn total(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    /// Proportion of `S1` genes within `S2` and within the rest of the universe
    ///
    /// A proportion is `NaN` if its row is empty.
    pub fn proportions(&self) -> (f64, f64) {
        (
            f64_from_u64(self.a) / f64_from_u64(self.a + self.b),
            f64_from_u64(self.c) / f64_from_u64(self.c + self.d),
        )
    }

    /// The sample odds ratio `(a * d) / (b * c)`
    ///
    /// Returns `inf` if `b * c == 0` and `a * d > 0`, and `NaN` if both products are `0`
    pub fn odds_ratio(&self) -> f64 {
        f64_from_u64(self.a) * f64_from_u64(self.d) / (f64_from_u64(self.b) * f64_from_u64(self.c))
    }
}

impl Display for ContingencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}

/// Calculates the one-sided Fisher exact test for over-representation of `a`
///
/// The alternative hypothesis is that the proportion of `S1` genes within
/// `S2` is greater than within the rest of the universe. The p-value is the
/// probability of observing `a` or more shared genes given the margins of
/// the table (hypergeometric survival function).
///
/// Degenerate tables, e.g. with an empty row or column, are valid input.
///
/// # Examples
///
/// ```
/// use gba_validation::stats::fisher::{fisher_exact_greater, ContingencyTable};
///
/// let table = ContingencyTable::new(3, 2, 2, 13);
/// let pvalue = fisher_exact_greater(&table);
/// assert!((pvalue - 0.072_626_418_988_648).abs() < 1e-10);
/// ```
pub fn fisher_exact_greater(table: &ContingencyTable) -> f64 {
    if table.a == 0 {
        return 1.0;
    }
    let hyper = Hypergeometric::new(
        // all genes of the universe
        // ==> population
        table.total(),
        // genes in S2
        // ==> successes
        table.a + table.b,
        // genes in S1
        // ==> draws
        table.a + table.c,
    )
    .expect("the margins of a table can't be larger than its total");

    // subtracting 1, because we want to test including a
    // e.g. "3 or more", but sf by default calculates "more than 3"
    let pvalue = hyper.sf(table.a - 1);
    debug!("Fisher exact test on {}: p = {}", table, pvalue);
    pvalue.clamp(0.0, 1.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn genes(ids: std::ops::Range<u32>) -> HashSet<GeneId> {
        ids.map(|i| GeneId::from(format!("G{i:02}"))).collect()
    }

    #[test]
    fn count_identities() {
        let universe = genes(0..30);
        let s1 = genes(0..8);
        let s2 = genes(5..17);
        let table = ContingencyTable::from_partitions(&universe, &s1, &s2);
        let [[a, b], [c, d]] = table.as_matrix();

        assert_eq!(a + b + c + d, 30);
        assert_eq!(a + c, 8);
        assert_eq!(a + b, 12);
        assert_eq!(table.as_matrix(), [[3, 9], [5, 13]]);
    }

    #[test]
    fn genes_outside_universe_are_ignored() {
        let universe = genes(0..10);
        let s1 = genes(8..14);
        let s2 = genes(0..3);
        let table = ContingencyTable::from_partitions(&universe, &s1, &s2);
        assert_eq!(table.as_matrix(), [[0, 3], [2, 5]]);
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn twenty_gene_scenario() {
        let universe = genes(0..20);
        let predicted = genes(0..5);
        let tissue = genes(2..7);
        let table = ContingencyTable::from_partitions(&universe, &predicted, &tissue);
        assert_eq!(table.as_matrix(), [[3, 2], [2, 13]]);

        let pvalue = fisher_exact_greater(&table);
        assert!((pvalue - 0.072_626_418_988_648_09).abs() < 1e-10);
    }

    #[test]
    fn hypergeometric_reference_values() {
        // Hypergeometric tail sums, same as scipy.stats.fisher_exact(alternative="greater")
        let table = ContingencyTable::new(8, 2, 1, 5);
        assert!((fisher_exact_greater(&table) - 0.024_475_524_475_524_476).abs() < 1e-10);

        let table = ContingencyTable::new(1, 9, 11, 3);
        assert!((fisher_exact_greater(&table) - 0.999_966_348_095_302_2).abs() < 1e-9);
    }

    #[test]
    fn identical_sets() {
        let universe = genes(0..20);
        let s = genes(0..4);
        let table = ContingencyTable::from_partitions(&universe, &s, &s);
        assert_eq!(table.as_matrix(), [[4, 0], [0, 16]]);
        // only one table is possible with a = 4, which is the most extreme
        let pvalue = fisher_exact_greater(&table);
        assert!(pvalue > 0.0 && pvalue < 0.001);
    }

    #[test]
    fn degenerate_tables() {
        let universe = genes(0..10);
        let tissue = genes(0..3);

        // S1 == U
        let table = ContingencyTable::from_partitions(&universe, &universe, &tissue);
        assert_eq!(table.as_matrix(), [[3, 0], [7, 0]]);
        assert!((fisher_exact_greater(&table) - 1.0).abs() < 1e-12);

        // S1 empty
        let table = ContingencyTable::from_partitions(&universe, &HashSet::new(), &tissue);
        assert!((fisher_exact_greater(&table) - 1.0).abs() < f64::EPSILON);

        // empty universe
        let table = ContingencyTable::default();
        assert!((fisher_exact_greater(&table) - 1.0).abs() < f64::EPSILON);
        assert!(table.proportions().0.is_nan());
    }

    #[test]
    fn odds_ratio_and_proportions() {
        let table = ContingencyTable::new(3, 2, 2, 13);
        assert!((table.odds_ratio() - 9.75).abs() < f64::EPSILON);
        let (in_s2, outside_s2) = table.proportions();
        assert!((in_s2 - 0.6).abs() < f64::EPSILON);
        assert!((outside_s2 - 2.0 / 15.0).abs() < f64::EPSILON);

        assert!(ContingencyTable::new(1, 0, 0, 1).odds_ratio().is_infinite());
    }
}

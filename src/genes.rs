//! Gene identifiers and the gene-keyed tables that are read from score, rank
//! and expression files
//!
//! The canonical key of every table is the [`GeneId`], the stable ENSG accession.
//! Gene symbols are only used for display and to translate causal gene lists,
//! see [`GeneAliases`].
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::interactome::Interactome;
use crate::percentile::rank_descending;
use crate::{GbaError, GbaResult};

/// A set of genes, e.g. the known causal genes of a phenotype
pub type CausalGenes = HashSet<GeneId>;

/// A unique identifier for a gene
///
/// When using the data of the study, this is the ENSG accession,
/// e.g. `ENSG00000139618`
#[derive(Clone, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct GeneId {
    inner: String,
}

impl GeneId {
    /// Returns the identifier as `&str`
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for GeneId {
    fn from(value: &str) -> Self {
        GeneId {
            inner: value.to_string(),
        }
    }
}

impl From<String> for GeneId {
    fn from(inner: String) -> Self {
        GeneId { inner }
    }
}

impl AsRef<str> for GeneId {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for GeneId {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Two-way mapping between gene symbols and [`GeneId`]s
///
/// A symbol can only be linked to a single `GeneId` and vice versa.
/// Re-inserting a known pair is a no-op, a conflicting pair keeps the
/// first mapping.
#[derive(Default, Debug, Clone)]
pub struct GeneAliases {
    symbol2id: HashMap<String, GeneId>,
    id2symbol: HashMap<GeneId, String>,
}

impl GeneAliases {
    /// Constructs an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `symbol` and `id`
    ///
    /// Returns `false` if either of them was already linked to something else
    pub fn insert(&mut self, symbol: &str, id: &GeneId) -> bool {
        if symbol.is_empty() {
            return false;
        }
        match (self.symbol2id.get(symbol), self.id2symbol.get(id)) {
            (None, None) => {
                self.symbol2id.insert(symbol.to_string(), id.clone());
                self.id2symbol.insert(id.clone(), symbol.to_string());
                true
            }
            (Some(known_id), Some(known_symbol)) => known_id == id && known_symbol == symbol,
            _ => false,
        }
    }

    /// Returns the [`GeneId`] of a gene symbol
    pub fn id(&self, symbol: &str) -> Option<&GeneId> {
        self.symbol2id.get(symbol)
    }

    /// Returns the gene symbol of a [`GeneId`]
    pub fn symbol(&self, id: &str) -> Option<&str> {
        self.id2symbol.get(id).map(String::as_str)
    }

    /// Returns the symbol of the gene if known, or the identifier otherwise
    pub fn display_name<'a>(&'a self, id: &'a GeneId) -> &'a str {
        self.symbol(id.as_str()).unwrap_or(id.as_str())
    }

    /// The number of linked pairs
    pub fn len(&self) -> usize {
        self.symbol2id.len()
    }

    /// Returns `true` if no pair is linked
    pub fn is_empty(&self) -> bool {
        self.symbol2id.is_empty()
    }
}

/// Numeric value per gene, such as a GBA centrality or RWR score
///
/// Each [`GeneId`] is present at most once.
#[derive(Default, Debug, Clone)]
pub struct GeneScores {
    values: HashMap<GeneId, f64>,
}

/// Expression ratio per gene in one tissue
///
/// Uses the same structure as scores, because both are only ever
/// ranked and partitioned.
pub type Expression = GeneScores;

impl GeneScores {
    /// Constructs an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the value of a gene
    ///
    /// # Errors
    ///
    /// [`GbaError::DuplicateGene`] if the gene is already present
    pub fn insert(&mut self, id: GeneId, value: f64) -> GbaResult<()> {
        match self.values.entry(id) {
            Entry::Occupied(entry) => Err(GbaError::DuplicateGene(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Returns the value of a gene
    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Returns `true` if the gene is present
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates all genes and their value in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&GeneId, f64)> {
        self.values.iter().map(|(id, value)| (id, *value))
    }

    /// Returns a new table without the `excluded` genes
    ///
    /// This is used to remove seed genes before ranking, so that they
    /// can't leak into the evaluation.
    #[must_use]
    pub fn without(&self, excluded: &HashSet<GeneId>) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(id, _)| !excluded.contains(*id))
                .map(|(id, value)| (id.clone(), *value))
                .collect(),
        }
    }

    /// Returns a new table with only the genes present in the interactome
    #[must_use]
    pub fn restrict_to(&self, interactome: &Interactome) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(id, _)| interactome.contains(id.as_str()))
                .map(|(id, value)| (id.clone(), *value))
                .collect(),
        }
    }

    /// Returns all genes, sorted by descending value
    ///
    /// Ties are ordered by [`GeneId`] to keep the order deterministic.
    pub fn ranked(&self) -> Vec<GeneId> {
        rank_descending(self.iter())
    }
}

impl FromIterator<(GeneId, f64)> for GeneScores {
    /// Collects gene values, later duplicates overwrite earlier ones
    fn from_iter<T: IntoIterator<Item = (GeneId, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// 1-based rank of genes as assigned by one prioritization method
#[derive(Default, Debug, Clone)]
pub struct Ranks {
    values: HashMap<GeneId, u32>,
}

impl Ranks {
    /// Constructs an empty rank table
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the rank of a gene
    ///
    /// # Errors
    ///
    /// - [`GbaError::DuplicateGene`] if the gene is already present
    /// - [`GbaError::ZeroRank`] for rank `0`
    pub fn insert(&mut self, id: GeneId, rank: u32) -> GbaResult<()> {
        if rank == 0 {
            return Err(GbaError::ZeroRank(id));
        }
        match self.values.entry(id) {
            Entry::Occupied(entry) => Err(GbaError::DuplicateGene(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(rank);
                Ok(())
            }
        }
    }

    /// Returns the rank of a gene
    pub fn get(&self, id: &str) -> Option<u32> {
        self.values.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates all genes and their rank in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&GeneId, u32)> {
        self.values.iter().map(|(id, rank)| (id, *rank))
    }

    /// Returns the ranks of `genes`, in the same order
    ///
    /// # Errors
    ///
    /// [`GbaError::MissingGene`] if one of the genes has no rank
    pub fn ranks_of<'a, I: IntoIterator<Item = &'a GeneId>>(
        &self,
        genes: I,
        table: &'static str,
    ) -> GbaResult<Vec<u32>> {
        genes
            .into_iter()
            .map(|id| {
                self.get(id.as_str())
                    .ok_or_else(|| GbaError::MissingGene(id.clone(), table))
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scores(values: &[(&str, f64)]) -> GeneScores {
        values
            .iter()
            .map(|(id, value)| (GeneId::from(*id), *value))
            .collect()
    }

    #[test]
    fn gene_id_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(GeneId::from("ENSG01"), 1);
        assert_eq!(map.get("ENSG01"), Some(&1));
        assert_eq!(GeneId::from("ENSG01").to_string(), "ENSG01");
    }

    #[test]
    fn aliases_two_way() {
        let mut aliases = GeneAliases::new();
        assert!(aliases.insert("DNAH1", &GeneId::from("ENSG01")));
        assert!(aliases.insert("DNAH1", &GeneId::from("ENSG01")));
        assert!(!aliases.insert("DNAH1", &GeneId::from("ENSG02")));
        assert!(!aliases.insert("CFAP43", &GeneId::from("ENSG01")));
        assert!(!aliases.insert("", &GeneId::from("ENSG03")));

        assert_eq!(aliases.id("DNAH1"), Some(&GeneId::from("ENSG01")));
        assert_eq!(aliases.symbol("ENSG01"), Some("DNAH1"));
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.display_name(&GeneId::from("ENSG09")), "ENSG09");
    }

    #[test]
    fn duplicate_score() {
        let mut table = GeneScores::new();
        assert!(table.insert("ENSG01".into(), 0.5).is_ok());
        assert!(matches!(
            table.insert("ENSG01".into(), 0.7),
            Err(GbaError::DuplicateGene(_))
        ));
        assert_eq!(table.get("ENSG01"), Some(0.5));
    }

    #[test]
    fn remove_seeds_builds_new_table() {
        let table = scores(&[("A", 0.1), ("B", 0.9), ("C", 0.5)]);
        let seeds: HashSet<GeneId> = [GeneId::from("B"), GeneId::from("Z")].into();
        let filtered = table.without(&seeds);

        assert_eq!(filtered.len(), 2);
        assert!(!filtered.contains("B"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn ranked_descending_with_ties_by_id() {
        let table = scores(&[("A", 0.1), ("B", 0.9), ("C", 0.5), ("D", 0.5)]);
        assert_eq!(
            table.ranked(),
            vec![
                GeneId::from("B"),
                GeneId::from("C"),
                GeneId::from("D"),
                GeneId::from("A")
            ]
        );
    }

    #[test]
    fn ranks_of_missing_gene() {
        let mut ranks = Ranks::new();
        ranks.insert("A".into(), 3).unwrap();
        let genes = [GeneId::from("A"), GeneId::from("B")];
        assert!(matches!(
            ranks.ranks_of(&genes, "GBA ranks"),
            Err(GbaError::MissingGene(id, "GBA ranks")) if id.as_str() == "B"
        ));
        assert_eq!(ranks.ranks_of(&genes[..1], "GBA ranks").unwrap(), vec![3]);
    }

    #[test]
    fn zero_rank_is_invalid() {
        let mut ranks = Ranks::new();
        assert!(matches!(
            ranks.insert("A".into(), 0),
            Err(GbaError::ZeroRank(id)) if id.as_str() == "A"
        ));
        assert!(ranks.is_empty());
    }
}

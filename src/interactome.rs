//! The protein-protein interaction network whose node set defines the gene universe
use std::collections::HashSet;

use crate::genes::GeneId;

/// Undirected interaction network
///
/// Only the node set and the edges are kept, the scores themselves are
/// computed by external tools. The nodes form the gene universe of all
/// enrichment tests and the draw range of the random rank baseline.
///
/// # Examples
///
/// ```
/// use gba_validation::Interactome;
///
/// let mut interactome = Interactome::default();
/// interactome.add_edge("ENSG01".into(), "ENSG02".into());
/// interactome.add_edge("ENSG02".into(), "ENSG01".into());
/// interactome.add_edge("ENSG03".into(), "ENSG03".into());
///
/// assert_eq!(interactome.len(), 3);
/// assert_eq!(interactome.edge_count(), 1);
/// assert!(interactome.contains("ENSG03"));
/// ```
#[derive(Default, Debug, Clone)]
pub struct Interactome {
    nodes: HashSet<GeneId>,
    edges: HashSet<(GeneId, GeneId)>,
}

impl Interactome {
    /// Adds a single node without any edge
    pub fn add_node(&mut self, id: GeneId) {
        self.nodes.insert(id);
    }

    /// Adds an undirected edge and both of its nodes
    ///
    /// Self-loops only add the node. Adding the same edge twice,
    /// in either direction, keeps a single edge.
    pub fn add_edge(&mut self, a: GeneId, b: GeneId) {
        if a == b {
            self.nodes.insert(a);
            return;
        }
        self.nodes.insert(a.clone());
        self.nodes.insert(b.clone());
        if a < b {
            self.edges.insert((a, b));
        } else {
            self.edges.insert((b, a));
        }
    }

    /// Returns `true` if the gene is a node of the interactome
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Iterates all nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &GeneId> {
        self.nodes.iter()
    }

    /// Iterates all edges in arbitrary order
    ///
    /// Each edge is returned once, with the smaller `GeneId` first
    pub fn edges(&self) -> impl Iterator<Item = (&GeneId, &GeneId)> {
        self.edges.iter().map(|(a, b)| (a, b))
    }

    /// The number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<'a> IntoIterator for &'a Interactome {
    type Item = &'a GeneId;
    type IntoIter = std::collections::hash_set::Iter<'a, GeneId>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edges_are_undirected() {
        let mut interactome = Interactome::default();
        interactome.add_edge("B".into(), "A".into());
        interactome.add_edge("A".into(), "B".into());
        interactome.add_edge("A".into(), "C".into());

        let mut edges: Vec<(&str, &str)> = interactome
            .edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![("A", "B"), ("A", "C")]);
        assert_eq!(interactome.len(), 3);
    }

    #[test]
    fn isolated_nodes() {
        let mut interactome = Interactome::default();
        assert!(interactome.is_empty());
        interactome.add_node("A".into());
        assert!(interactome.contains("A"));
        assert!(!interactome.contains("B"));
        assert_eq!(interactome.edge_count(), 0);
        assert_eq!((&interactome).into_iter().count(), 1);
    }
}

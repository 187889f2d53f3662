use super::edges::EdgeList;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};

/// Undirected simple graph of protein interactions.
///
/// Node indices are handed out in first-seen order and never removed, so
/// iterating `node_indices()` replays the order proteins appeared in the
/// edge list. Partitions rely on that order to stay index-aligned with the
/// domain counts computed from them.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    graph: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl InteractionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: &EdgeList) -> Self {
        let mut graph = Self::new();
        for interaction in edges.iter() {
            graph.add_interaction(&interaction.source, &interaction.target);
        }
        graph
    }

    fn node(&mut self, protein: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(protein) {
            return idx;
        }
        let idx = self.graph.add_node(protein.to_string());
        self.index.insert(protein.to_string(), idx);
        idx
    }

    /// Adds an interaction; repeats in either orientation collapse into one edge.
    pub fn add_interaction(&mut self, a: &str, b: &str) {
        let a = self.node(a);
        let b = self.node(b);
        self.graph.update_edge(a, b, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of distinct neighbours; a self-loop counts the protein itself once.
    pub fn degree(&self, protein: &str) -> Option<usize> {
        self.index.get(protein).map(|&idx| self.degree_of(idx))
    }

    fn degree_of(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).collect::<HashSet<_>>().len()
    }

    /// Proteins with their degree, in insertion order.
    pub fn degrees(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (self.graph[idx].as_str(), self.degree_of(idx)))
    }
}

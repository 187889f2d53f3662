//! Protein interaction network: edge-list ingestion, graph construction and
//! degree-based partitioning.

pub mod edges;
pub mod graph;
pub mod partition;

pub use edges::{EdgeList, Interaction};
pub use graph::InteractionGraph;
pub use partition::{partition_by_degree, DegreeGroup, DegreePartition};

use super::graph::InteractionGraph;
use crate::error::{ErrorCode, PpiError, Result};
use crate::progress::{report_tick, PercentTicker, ProgressReporter};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Which side of the degree threshold a protein falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeGroup {
    /// Degree strictly greater than the threshold.
    HighDegree,
    LowDegree,
}

impl DegreeGroup {
    pub fn classify(degree: usize, threshold: usize) -> Self {
        if degree > threshold {
            Self::HighDegree
        } else {
            Self::LowDegree
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighDegree => "high-degree",
            Self::LowDegree => "low-degree",
        }
    }

    /// Axis label for the given threshold, e.g. `> 100` or `=< 100`.
    pub fn label(&self, threshold: usize) -> String {
        match self {
            Self::HighDegree => format!("> {}", threshold),
            Self::LowDegree => format!("=< {}", threshold),
        }
    }
}

impl fmt::Display for DegreeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proteins split by degree, each side in graph insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreePartition {
    pub threshold: usize,
    pub high: Vec<String>,
    pub low: Vec<String>,
}

impl DegreePartition {
    pub fn len(&self) -> usize {
        self.high.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits the graph's proteins into high- and low-degree lists.
///
/// Graphs with fewer than two proteins are rejected up front.
pub fn partition_by_degree(
    graph: &InteractionGraph,
    threshold: usize,
    progress: &mut dyn ProgressReporter,
) -> Result<DegreePartition> {
    let total = graph.node_count();
    if total < 2 {
        return Err(PpiError::degenerate_with_code(
            ErrorCode::DEGENERATE_TOO_FEW_NODES,
            format!(
                "interaction graph has {} protein{}, at least 2 are required",
                total,
                if total == 1 { "" } else { "s" }
            ),
        ));
    }

    let mut partition = DegreePartition {
        threshold,
        high: Vec::new(),
        low: Vec::new(),
    };

    let mut ticker = PercentTicker::new(total);
    progress.begin("Separating proteins based on node degree", total);
    for (i, (protein, degree)) in graph.degrees().enumerate() {
        report_tick(&mut ticker, i, progress);
        match DegreeGroup::classify(degree, threshold) {
            DegreeGroup::HighDegree => partition.high.push(protein.to_string()),
            DegreeGroup::LowDegree => partition.low.push(protein.to_string()),
        }
    }
    progress.finish();

    debug!(
        "Partitioned {} proteins: {} with degree > {}, {} at or below",
        total,
        partition.high.len(),
        threshold,
        partition.low.len()
    );
    Ok(partition)
}

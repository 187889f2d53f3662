//! The degree versus domain-count analysis, end to end.

use crate::config::AnalysisConfig;
use crate::dataset::{assemble, Dataset};
use crate::domains::{count_domains, DomainTable};
use crate::error::Result;
use crate::network::{partition_by_degree, DegreeGroup, EdgeList, InteractionGraph};
use crate::plot::{render_boxplot, PlotSettings};
use crate::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::info;

/// Files consumed and produced by one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub edges: PathBuf,
    pub domains: PathBuf,
    pub output: PathBuf,
    /// Optional TSV export of the filtered dataset.
    pub dataset_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub proteins: usize,
    pub interactions: usize,
    pub high_degree: usize,
    pub low_degree: usize,
    pub plotted_high_degree: usize,
    pub plotted_low_degree: usize,
}

/// Builds the filtered dataset without rendering it.
pub fn build_dataset(
    edges: &EdgeList,
    table: &DomainTable,
    threshold: usize,
    progress: &mut dyn ProgressReporter,
) -> Result<(Dataset, AnalysisSummary)> {
    let graph = InteractionGraph::from_edges(edges);
    info!(
        "Interaction network has {} proteins and {} interactions",
        graph.node_count(),
        graph.edge_count()
    );

    let partition = partition_by_degree(&graph, threshold, progress)?;

    let high_counts = count_domains(
        &partition.high,
        table,
        &format!("Calculating domains for proteins with degree > {}", threshold),
        progress,
    );
    let low_counts = count_domains(
        &partition.low,
        table,
        &format!("Calculating domains for proteins with degree =< {}", threshold),
        progress,
    );

    let dataset = assemble(&partition.high, &high_counts, &partition.low, &low_counts)?
        .without_zero_counts();

    let summary = AnalysisSummary {
        proteins: graph.node_count(),
        interactions: graph.edge_count(),
        high_degree: partition.high.len(),
        low_degree: partition.low.len(),
        plotted_high_degree: dataset.log_values(DegreeGroup::HighDegree).len(),
        plotted_low_degree: dataset.log_values(DegreeGroup::LowDegree).len(),
    };
    Ok((dataset, summary))
}

/// Reads both inputs, builds the dataset and writes the boxplot.
pub fn run_analysis(
    request: &AnalysisRequest,
    config: &AnalysisConfig,
    progress: &mut dyn ProgressReporter,
) -> Result<AnalysisSummary> {
    let edges = EdgeList::from_path(&request.edges)?;
    let table = DomainTable::from_path(&request.domains)?;

    let (dataset, summary) = build_dataset(&edges, &table, config.degree_threshold, progress)?;
    info!(
        "{} of {} high-degree and {} of {} low-degree proteins have known domains",
        summary.plotted_high_degree,
        summary.high_degree,
        summary.plotted_low_degree,
        summary.low_degree
    );

    if let Some(path) = &request.dataset_out {
        dataset.write_tsv_file(path)?;
        info!("Wrote dataset to {}", path.display());
    }

    info!("Finished calculations, generating boxplot");
    render_boxplot(&dataset, &request.output, &PlotSettings::from_config(config))?;
    Ok(summary)
}

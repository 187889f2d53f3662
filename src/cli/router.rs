//! Command routing and execution

use crate::analysis::AnalysisRequest;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::ConfigLoader;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::new(config_path)
        .load()
        .await
        .context("Failed to load configuration")?;

    match command {
        Commands::Analyze {
            edges,
            domains,
            output,
            threshold,
            dpi,
            width,
            height,
            dataset,
            no_progress,
        } => {
            let request = AnalysisRequest {
                edges,
                domains,
                output,
                dataset_out: dataset,
            };
            let overrides = AnalyzeOverrides {
                threshold,
                dpi,
                width,
                height,
                no_progress,
            };
            run_analyze(request, overrides, config.analysis)
        }
        Commands::FetchDomains {
            host,
            dataset_name,
            timeout,
        } => {
            let overrides = FetchOverrides {
                host,
                dataset: dataset_name,
                timeout,
            };
            run_fetch_domains(overrides, config.biomart).await
        }
    }
}

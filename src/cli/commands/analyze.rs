use crate::analysis::{run_analysis, AnalysisRequest};
use crate::config::AnalysisConfig;
use crate::progress::BarReporter;
use anyhow::{Context, Result};
use tracing::info;

/// Command-line overrides for the `[analysis]` configuration section.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOverrides {
    pub threshold: Option<usize>,
    pub dpi: Option<u32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub no_progress: bool,
}

impl AnalyzeOverrides {
    pub fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(threshold) = self.threshold {
            config.degree_threshold = threshold;
        }
        if let Some(dpi) = self.dpi {
            config.dpi = dpi;
        }
        if let Some(width) = self.width {
            config.width_in = width;
        }
        if let Some(height) = self.height {
            config.height_in = height;
        }
        if self.no_progress {
            config.progress = false;
        }
    }
}

pub fn run_analyze(
    request: AnalysisRequest,
    overrides: AnalyzeOverrides,
    mut config: AnalysisConfig,
) -> Result<()> {
    overrides.apply(&mut config);
    config.validate().context("Invalid analysis settings")?;

    let mut progress = BarReporter::new(config.progress);
    let summary = run_analysis(&request, &config, &mut progress).with_context(|| {
        format!(
            "Analysis of {} and {} failed",
            request.edges.display(),
            request.domains.display()
        )
    })?;

    info!(
        "Plotted {} high-degree and {} low-degree proteins to {}",
        summary.plotted_high_degree,
        summary.plotted_low_degree,
        request.output.display()
    );
    Ok(())
}

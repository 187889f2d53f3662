use crate::error::{ErrorCode, PpiError, Result};
use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::ConfigLoader;

/// Degree above which a protein is placed in the high-degree group.
pub const DEFAULT_DEGREE_THRESHOLD: usize = 100;
pub const DEFAULT_DPI: u32 = 1200;
/// Figure edge length in inches, before scaling by DPI.
pub const DEFAULT_FIGURE_INCHES: f64 = 5.0;

/// Largest raster edge accepted, in pixels.
pub const MAX_PIXELS_PER_SIDE: f64 = 16_384.0;

pub const DEFAULT_MART_HOST: &str = "http://www.ensembl.org";
pub const DEFAULT_MART_DATASET: &str = "hsapiens_gene_ensembl";
pub const DEFAULT_VIRTUAL_SCHEMA: &str = "default";
/// Bound on establishing the connection only; a slow export may stream for
/// as long as it needs.
pub const DEFAULT_MART_CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub biomart: MartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub degree_threshold: usize,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    pub progress: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MartConfig {
    pub host: String,
    pub dataset: String,
    pub virtual_schema: String,
    pub attributes: Vec<String>,
    pub connect_timeout_secs: u64,
    /// Deadline for the whole request, body included. Unset by default.
    pub timeout_secs: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            degree_threshold: DEFAULT_DEGREE_THRESHOLD,
            dpi: DEFAULT_DPI,
            width_in: DEFAULT_FIGURE_INCHES,
            height_in: DEFAULT_FIGURE_INCHES,
            progress: true,
        }
    }
}

impl Default for MartConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MART_HOST.to_string(),
            dataset: DEFAULT_MART_DATASET.to_string(),
            virtual_schema: DEFAULT_VIRTUAL_SCHEMA.to_string(),
            attributes: vec!["pfam".to_string(), "ensembl_peptide_id".to_string()],
            connect_timeout_secs: DEFAULT_MART_CONNECT_TIMEOUT_SECS,
            timeout_secs: None,
        }
    }
}

impl AnalysisConfig {
    /// Raster size in pixels for the configured figure size and resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        let scale = |inches: f64| (inches * self.dpi as f64).round() as u32;
        (scale(self.width_in), scale(self.height_in))
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(invalid("analysis.dpi", "must be greater than zero"));
        }
        let sizes = [
            ("analysis.width_in", self.width_in),
            ("analysis.height_in", self.height_in),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive number of inches"));
            }
            let pixels = value * self.dpi as f64;
            if pixels > MAX_PIXELS_PER_SIDE {
                return Err(invalid(
                    field,
                    &format!(
                        "gives {:.0} pixels at {} DPI, at most {} are supported",
                        pixels, self.dpi, MAX_PIXELS_PER_SIDE
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl MartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(invalid("biomart.host", "must not be empty"));
        }
        if self.dataset.trim().is_empty() {
            return Err(invalid("biomart.dataset", "must not be empty"));
        }
        if self.attributes.is_empty() {
            return Err(invalid("biomart.attributes", "at least one attribute is required"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(invalid(
                "biomart.connect_timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(invalid("biomart.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.biomart.validate()
    }
}

fn invalid(field: &str, message: &str) -> PpiError {
    PpiError::config_with_code(
        ErrorCode::CONFIG_INVALID_VALUE,
        format!("{} {}", field, message),
        Some(field.to_string()),
    )
}

#[cfg(test)]
mod tests;

//! # ppi-domains
//!
//! Relates how connected a protein is in an interaction network to how many
//! Pfam domains it carries, and fetches the Pfam to Ensembl protein mapping
//! the analysis consumes.
//!
//! ## Usage
//!
//! ```bash
//! ppi-domains fetch-domains > pfam.tsv
//! ppi-domains analyze links.txt pfam.tsv degree_vs_domains.png
//! ```
//!
//! ## Modules
//!
//! - `network` - Edge-list ingestion, interaction graph and degree partition
//! - `domains` - Pfam domain table and per-protein domain counts
//! - `dataset` - Log transform, grouped dataset and box statistics
//! - `plot` - Boxplot rendering to PNG or SVG
//! - `analysis` - The analysis pipeline end to end
//! - `biomart` - BioMart query, client and response validation
//! - `progress` - Progress reporting for linear scans
//! - `config` - TOML configuration with built-in defaults
//! - `error` - Stage-tagged error type
//! - `cli` - Command-line interface
pub mod analysis;
pub mod biomart;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domains;
pub mod error;
pub mod network;
pub mod plot;
pub mod progress;

pub use error::{PpiError, Result};

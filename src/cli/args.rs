//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Correlate protein interaction degree with Pfam domain counts
#[derive(Parser)]
#[command(name = "ppi-domains")]
#[command(about = "ppi-domains - Protein interaction degree versus Pfam domain count", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Boxplot of log domain count for high- and low-degree proteins
    #[command(name = "analyze")]
    Analyze {
        /// Whitespace-separated, headerless list of protein links
        edges: PathBuf,

        /// Tab-separated table with "Protein stable ID" and "Pfam ID" columns
        domains: PathBuf,

        /// Output image (.png or .svg)
        output: PathBuf,

        /// Degree above which a protein counts as highly connected
        #[arg(short = 't', long, value_name = "DEGREE")]
        threshold: Option<usize>,

        /// Image resolution in dots per inch
        #[arg(long)]
        dpi: Option<u32>,

        /// Figure width in inches
        #[arg(long, value_name = "INCHES")]
        width: Option<f64>,

        /// Figure height in inches
        #[arg(long, value_name = "INCHES")]
        height: Option<f64>,

        /// Also write the plotted dataset as TSV
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,

        /// Do not draw progress bars
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the Pfam ID to Ensembl protein ID table from BioMart
    #[command(name = "fetch-domains")]
    FetchDomains {
        /// BioMart server root
        #[arg(long, value_name = "URL")]
        host: Option<String>,

        /// BioMart dataset to query
        #[arg(long = "dataset-name", value_name = "NAME")]
        dataset_name: Option<String>,

        /// Give up on the whole request after this many seconds (no limit by default)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
}

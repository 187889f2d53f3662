//! Subcommand implementations

pub mod analyze;
pub mod fetch_domains;

pub use analyze::{run_analyze, AnalyzeOverrides};
pub use fetch_domains::{run_fetch_domains, FetchOverrides};

//! Ensembl BioMart access for the Pfam to Ensembl peptide mapping.

pub mod client;
pub mod query;
pub mod response;

pub use client::MartClient;
pub use query::MartQuery;
pub use response::MartTable;

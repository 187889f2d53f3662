//! Pfam domain table and per-protein domain counting.

use crate::error::{ErrorCode, PpiError, Result};
use crate::progress::{report_tick, PercentTicker, ProgressReporter};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const PROTEIN_COLUMN: &str = "Protein stable ID";
pub const DOMAIN_COLUMN: &str = "Pfam ID";

/// Cell values read as missing: the default NA spellings of pandas' `read_csv`.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(value: &str) -> bool {
    MISSING_TOKENS.contains(&value.trim())
}

/// Number of Pfam records per protein.
///
/// Rows without a Pfam ID are dropped while loading, so they never count.
#[derive(Debug, Clone, Default)]
pub struct DomainTable {
    counts: HashMap<String, usize>,
    rows_read: usize,
    rows_retained: usize,
}

impl DomainTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            PpiError::input_with_code(ErrorCode::INPUT_READ_FAILED, "failed to open domain table")
                .with_path(path)
                .with_source(e)
        })?;
        let table = Self::from_reader(file).map_err(|e| e.with_path(path))?;
        info!(
            "Loaded {} domain records for {} proteins ({} rows without a Pfam ID dropped)",
            table.rows_retained,
            table.protein_count(),
            table.rows_read - table.rows_retained
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(malformed)?.clone();
        let column = |name: &str| {
            headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
                PpiError::input_with_code(
                    ErrorCode::INPUT_MISSING_COLUMN,
                    format!("domain table has no '{}' column", name),
                )
            })
        };
        let protein_idx = column(PROTEIN_COLUMN)?;
        let domain_idx = column(DOMAIN_COLUMN)?;
        debug!(
            "Domain table columns: protein at {}, Pfam at {}",
            protein_idx, domain_idx
        );

        let mut table = Self::default();
        for result in reader.records() {
            let record = result.map_err(malformed)?;
            table.rows_read += 1;

            let domain = record.get(domain_idx).unwrap_or_default();
            if is_missing(domain) {
                continue;
            }
            let protein = record.get(protein_idx).unwrap_or_default().trim();
            *table.counts.entry(protein.to_string()).or_insert(0) += 1;
            table.rows_retained += 1;
        }

        Ok(table)
    }

    /// Retained records for `protein`; zero when the protein is absent.
    pub fn count_for(&self, protein: &str) -> usize {
        self.counts.get(protein).copied().unwrap_or(0)
    }

    pub fn protein_count(&self) -> usize {
        self.counts.len()
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn rows_retained(&self) -> usize {
        self.rows_retained
    }
}

fn malformed(e: csv::Error) -> PpiError {
    PpiError::input_with_code(
        ErrorCode::INPUT_MALFORMED_RECORD,
        "domain table is not a well-formed tab-separated file",
    )
    .with_source(e)
}

/// Domain count for each protein, aligned with `proteins`.
pub fn count_domains(
    proteins: &[String],
    table: &DomainTable,
    message: &str,
    progress: &mut dyn ProgressReporter,
) -> Vec<usize> {
    let mut ticker = PercentTicker::new(proteins.len());
    progress.begin(message, proteins.len());
    let mut counts = Vec::with_capacity(proteins.len());
    for (i, protein) in proteins.iter().enumerate() {
        report_tick(&mut ticker, i, progress);
        counts.push(table.count_for(protein));
    }
    progress.finish();
    counts
}

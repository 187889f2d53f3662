use crate::error::{ErrorCode, PpiError, Result};
use std::io::Write;

const COMPLETION_STAMP: &str = "[success]";
const QUERY_ERROR: &str = "Query ERROR";

/// A fully received BioMart result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MartTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MartTable {
    /// Validates and parses a TSV response body.
    ///
    /// BioMart reports many failures with a 200 status, so the body itself
    /// is checked for an error banner and for the completion stamp.
    pub fn parse(body: &str, expected_columns: usize, stamped: bool) -> Result<Self> {
        let trimmed = body.trim_end();
        if let Some(line) = trimmed.lines().find(|l| l.contains(QUERY_ERROR)) {
            return Err(PpiError::remote_with_code(
                ErrorCode::REMOTE_QUERY_REJECTED,
                line.trim().to_string(),
                None,
            ));
        }

        let content = if stamped {
            trimmed.strip_suffix(COMPLETION_STAMP).ok_or_else(|| {
                PpiError::remote_with_code(
                    ErrorCode::REMOTE_INCOMPLETE,
                    "response ended before the completion stamp, the result set is truncated",
                    None,
                )
            })?
        } else {
            trimmed
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .from_reader(content.as_bytes());

        let header: Vec<String> = reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(str::to_string)
            .collect();
        if header.len() != expected_columns || header.iter().all(|h| h.is_empty()) {
            return Err(PpiError::remote_with_code(
                ErrorCode::REMOTE_MALFORMED,
                format!(
                    "expected {} columns in the response header, found {}",
                    expected_columns,
                    header.len()
                ),
                None,
            ));
        }

        let rows = reader
            .records()
            .map(|r| r.map(|record| record.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, _>>()
            .map_err(malformed)?;

        Ok(Self { header, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the header and every row as tab-separated text.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);
        writer.write_record(&self.header).map_err(write_failed)?;
        for row in &self.rows {
            writer.write_record(row).map_err(write_failed)?;
        }
        writer.flush().map_err(|e| write_failed(e.into()))?;
        Ok(())
    }
}

fn malformed(e: csv::Error) -> PpiError {
    PpiError::remote_with_code(
        ErrorCode::REMOTE_MALFORMED,
        "response is not the expected tab-separated table",
        None,
    )
    .with_source(e)
}

fn write_failed(e: csv::Error) -> PpiError {
    PpiError::output_with_code(ErrorCode::OUTPUT_WRITE_FAILED, "failed to write table")
        .with_source(e)
}

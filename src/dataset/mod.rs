//! Grouped dataset of domain counts, ready for plotting.

use crate::error::{ErrorCode, PpiError, Result};
use crate::network::DegreeGroup;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub mod stats;

pub use stats::BoxStats;

/// Natural log of each count; zero counts have no log and map to `None`.
pub fn log_transform(counts: &[usize]) -> Vec<Option<f64>> {
    counts
        .iter()
        .map(|&n| if n > 0 { Some((n as f64).ln()) } else { None })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    #[serde(rename = "protein_id")]
    pub protein: String,
    pub domain_count: usize,
    pub log_domain_count: Option<f64>,
    #[serde(rename = "node_degree")]
    pub group: DegreeGroup,
}

/// Rows in assembly order: the whole high-degree block, then low-degree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Appends one group; `proteins` and `counts` must be index aligned.
    pub fn push_group(
        &mut self,
        group: DegreeGroup,
        proteins: &[String],
        counts: &[usize],
    ) -> Result<()> {
        if proteins.len() != counts.len() {
            return Err(PpiError::input_with_code(
                ErrorCode::INPUT_LENGTH_MISMATCH,
                format!(
                    "{} group has {} proteins but {} domain counts",
                    group,
                    proteins.len(),
                    counts.len()
                ),
            ));
        }

        let logs = log_transform(counts);
        self.rows.extend(
            proteins
                .iter()
                .zip(counts)
                .zip(logs)
                .map(|((protein, &domain_count), log_domain_count)| DatasetRow {
                    protein: protein.clone(),
                    domain_count,
                    log_domain_count,
                    group,
                }),
        );
        Ok(())
    }

    /// Drops proteins without any recorded domain.
    pub fn without_zero_counts(self) -> Self {
        let before = self.rows.len();
        let rows: Vec<DatasetRow> = self
            .rows
            .into_iter()
            .filter(|row| row.domain_count != 0)
            .collect();
        debug!("Dropped {} rows with no known domains", before - rows.len());
        Self { rows }
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Log counts of one group, skipping rows without a log value.
    pub fn log_values(&self, group: DegreeGroup) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.group == group)
            .filter_map(|row| row.log_domain_count)
            .collect()
    }

    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        for row in &self.rows {
            writer.serialize(row).map_err(write_failed)?;
        }
        writer.flush().map_err(|e| write_failed(e.into()))?;
        Ok(())
    }

    pub fn write_tsv_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| {
            PpiError::output_with_code(
                ErrorCode::OUTPUT_PATH_UNWRITABLE,
                "failed to create dataset file",
            )
            .with_path(path)
            .with_source(e)
        })?;
        self.write_tsv(file).map_err(|e| e.with_path(path))
    }
}

/// Concatenates the high- and low-degree groups into one dataset.
pub fn assemble(
    high: &[String],
    high_counts: &[usize],
    low: &[String],
    low_counts: &[usize],
) -> Result<Dataset> {
    let mut dataset = Dataset::default();
    dataset.push_group(DegreeGroup::HighDegree, high, high_counts)?;
    dataset.push_group(DegreeGroup::LowDegree, low, low_counts)?;
    Ok(dataset)
}

fn write_failed(e: csv::Error) -> PpiError {
    PpiError::output_with_code(ErrorCode::OUTPUT_WRITE_FAILED, "failed to write dataset")
        .with_source(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_log_transform_marks_zero_as_missing() {
        let logs = log_transform(&[0, 1, 2, 10]);
        assert_eq!(logs[0], None);
        assert_eq!(logs[1], Some(0.0));
        assert!((logs[2].unwrap() - 2f64.ln()).abs() < 1e-12);
        assert!((logs[3].unwrap() - 10f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_assemble_puts_high_degree_first() {
        let dataset = assemble(&ids(&["HUB"]), &[3], &ids(&["L1", "L2"]), &[1, 0]).unwrap();

        let groups: Vec<DegreeGroup> = dataset.rows().iter().map(|r| r.group).collect();
        assert_eq!(
            groups,
            vec![
                DegreeGroup::HighDegree,
                DegreeGroup::LowDegree,
                DegreeGroup::LowDegree
            ]
        );
        assert_eq!(dataset.rows()[2].log_domain_count, None);
    }

    #[test]
    fn test_two_domains_survive_filter() {
        let dataset = assemble(&[], &[], &ids(&["ENSP1", "ENSP2"]), &[2, 0])
            .unwrap()
            .without_zero_counts();

        assert_eq!(dataset.len(), 1);
        let row = &dataset.rows()[0];
        assert_eq!(row.protein, "ENSP1");
        assert_eq!(row.domain_count, 2);
        assert!((row.log_domain_count.unwrap() - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = assemble(&ids(&["A", "B"]), &[1], &[], &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_LENGTH_MISMATCH);
    }

    #[test]
    fn test_log_values_per_group() {
        let dataset = assemble(&ids(&["H1", "H2"]), &[1, 4], &ids(&["L1"]), &[2]).unwrap();
        assert_eq!(dataset.log_values(DegreeGroup::HighDegree).len(), 2);
        assert_eq!(dataset.log_values(DegreeGroup::LowDegree), vec![2f64.ln()]);
    }

    #[test]
    fn test_write_tsv() {
        let dataset = assemble(&ids(&["H1"]), &[1], &ids(&["L1"]), &[0]).unwrap();
        let mut out = Vec::new();
        dataset.write_tsv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "protein_id\tdomain_count\tlog_domain_count\tnode_degree",
                "H1\t1\t0.0\thigh-degree",
                "L1\t0\t\tlow-degree",
            ]
        );
    }

    proptest! {
        #[test]
        fn test_filter_leaves_no_zero_counts(
            high in prop::collection::vec(0usize..5, 0..20),
            low in prop::collection::vec(0usize..5, 0..20),
        ) {
            let high_ids: Vec<String> = (0..high.len()).map(|i| format!("H{}", i)).collect();
            let low_ids: Vec<String> = (0..low.len()).map(|i| format!("L{}", i)).collect();

            let dataset = assemble(&high_ids, &high, &low_ids, &low).unwrap();
            prop_assert_eq!(dataset.len(), high.len() + low.len());

            let filtered = dataset.without_zero_counts();
            let nonzero = high.iter().chain(&low).filter(|&&n| n != 0).count();
            prop_assert_eq!(filtered.len(), nonzero);
            prop_assert!(filtered.rows().iter().all(|r| r.domain_count > 0));
            prop_assert!(filtered.rows().iter().all(|r| r.log_domain_count.is_some()));
        }
    }
}

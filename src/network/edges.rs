use crate::error::{ErrorCode, PpiError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One reported interaction between two proteins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub source: String,
    pub target: String,
}

impl Interaction {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Interactions in file order.
///
/// The file is headerless and whitespace separated. Only the first two
/// fields of each line are used, so STRING link files with a trailing score
/// column load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    interactions: Vec<Interaction>,
}

impl EdgeList {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            PpiError::input_with_code(ErrorCode::INPUT_READ_FAILED, "failed to open edge list")
                .with_path(path)
                .with_source(e)
        })?;
        let edges = Self::from_reader(file).map_err(|e| e.with_path(path))?;
        debug!("Read {} interactions from {}", edges.len(), path.display());
        Ok(edges)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut interactions = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                PpiError::input_with_code(
                    ErrorCode::INPUT_MALFORMED_RECORD,
                    "unreadable edge list record",
                )
                .with_source(e)
            })?;

            // Runs of spaces yield empty fields and tabs survive inside one field.
            let mut fields = record.iter().flat_map(str::split_whitespace);
            match (fields.next(), fields.next()) {
                (Some(source), Some(target)) => {
                    interactions.push(Interaction::new(source, target));
                }
                (None, _) => continue,
                (Some(_), None) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    return Err(PpiError::input_with_code(
                        ErrorCode::INPUT_MISSING_FIELD,
                        format!("line {} has one protein ID, expected two", line),
                    ));
                }
            }
        }

        Ok(Self { interactions })
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }
}

impl FromIterator<Interaction> for EdgeList {
    fn from_iter<I: IntoIterator<Item = Interaction>>(iter: I) -> Self {
        Self {
            interactions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_pairs_in_order() {
        let edges = EdgeList::from_reader("A B\nA C\nB C\n".as_bytes()).unwrap();
        let pairs: Vec<_> = edges
            .iter()
            .map(|i| (i.source.as_str(), i.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    }

    #[test]
    fn test_ignores_extra_columns_and_blank_lines() {
        let data = "9606.ENSP1 9606.ENSP2 900\n\n9606.ENSP2 9606.ENSP3 155\n";
        let edges = EdgeList::from_reader(data.as_bytes()).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(
            edges.iter().next(),
            Some(&Interaction::new("9606.ENSP1", "9606.ENSP2"))
        );
    }

    #[test]
    fn test_tolerates_tabs_and_repeated_spaces() {
        let edges = EdgeList::from_reader("A\tB\nC    D\n".as_bytes()).unwrap();
        let pairs: Vec<_> = edges
            .iter()
            .map(|i| (i.source.clone(), i.target.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "B".to_string()),
                ("C".to_string(), "D".to_string())
            ]
        );
    }

    #[test]
    fn test_single_field_line_is_malformed() {
        let err = EdgeList::from_reader("A B\nlonely\n".as_bytes()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_MISSING_FIELD);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file_reports_read_failure() {
        let err = EdgeList::from_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_READ_FAILED);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let edges = EdgeList::from_reader("".as_bytes()).unwrap();
        assert!(edges.is_empty());
    }
}

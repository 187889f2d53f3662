use crate::config::MartConfig;

/// A BioMart XML query over a single dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MartQuery {
    pub virtual_schema: String,
    pub dataset: String,
    pub attributes: Vec<String>,
    pub header: bool,
    pub unique_rows: bool,
    /// Ask the server to end the body with `[success]` so truncation is detectable.
    pub completion_stamp: bool,
}

impl MartQuery {
    pub fn from_config(config: &MartConfig) -> Self {
        Self {
            virtual_schema: config.virtual_schema.clone(),
            dataset: config.dataset.clone(),
            attributes: config.attributes.clone(),
            header: true,
            unique_rows: false,
            completion_stamp: true,
        }
    }

    pub fn to_xml(&self) -> String {
        let flag = |on: bool| if on { "1" } else { "0" };
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><!DOCTYPE Query>");
        xml.push_str(&format!(
            "<Query virtualSchemaName=\"{}\" formatter=\"TSV\" header=\"{}\" uniqueRows=\"{}\" count=\"\" datasetConfigVersion=\"0.6\" completionStamp=\"{}\">",
            escape(&self.virtual_schema),
            flag(self.header),
            flag(self.unique_rows),
            flag(self.completion_stamp),
        ));
        xml.push_str(&format!(
            "<Dataset name=\"{}\" interface=\"default\">",
            escape(&self.dataset)
        ));
        for attribute in &self.attributes {
            xml.push_str(&format!("<Attribute name=\"{}\" />", escape(attribute)));
        }
        xml.push_str("</Dataset></Query>");
        xml
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_xml() {
        let query = MartQuery::from_config(&MartConfig::default());
        let xml = query.to_xml();

        assert!(xml.contains("<Dataset name=\"hsapiens_gene_ensembl\" interface=\"default\">"));
        assert!(xml.contains("uniqueRows=\"0\""));
        assert!(xml.contains("header=\"1\""));
        assert!(xml.contains("completionStamp=\"1\""));

        let pfam = xml.find("<Attribute name=\"pfam\" />").unwrap();
        let peptide = xml.find("<Attribute name=\"ensembl_peptide_id\" />").unwrap();
        assert!(pfam < peptide);
    }

    #[test]
    fn test_query_follows_config() {
        let config = MartConfig {
            dataset: "mmusculus_gene_ensembl".to_string(),
            virtual_schema: "other".to_string(),
            ..MartConfig::default()
        };
        let query = MartQuery::from_config(&config);
        assert_eq!(query.dataset, "mmusculus_gene_ensembl");
        assert_eq!(query.attributes, vec!["pfam", "ensembl_peptide_id"]);
        assert!(query.header && query.completion_stamp && !query.unique_rows);
        assert!(query.to_xml().contains("virtualSchemaName=\"other\""));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let config = MartConfig {
            dataset: "a\"b".to_string(),
            attributes: vec!["x<y".to_string()],
            ..MartConfig::default()
        };
        let query = MartQuery::from_config(&config);
        let xml = query.to_xml();
        assert!(xml.contains("name=\"a&quot;b\""));
        assert!(xml.contains("name=\"x&lt;y\""));
    }
}

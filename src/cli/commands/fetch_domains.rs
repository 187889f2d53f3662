use crate::biomart::{MartClient, MartQuery};
use crate::config::MartConfig;
use anyhow::{Context, Result};
use std::io::Write;

/// Command-line overrides for the `[biomart]` configuration section.
#[derive(Debug, Clone, Default)]
pub struct FetchOverrides {
    pub host: Option<String>,
    pub dataset: Option<String>,
    pub timeout: Option<u64>,
}

impl FetchOverrides {
    pub fn apply(&self, config: &mut MartConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.dataset = dataset.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }
    }
}

/// Fetches the whole table first so a failed query prints nothing to stdout.
pub async fn run_fetch_domains(overrides: FetchOverrides, mut config: MartConfig) -> Result<()> {
    overrides.apply(&mut config);
    config.validate().context("Invalid BioMart settings")?;

    let client = MartClient::new(&config)?;
    let query = MartQuery::from_config(&config);
    let table = client
        .fetch(&query)
        .await
        .with_context(|| format!("Fetching dataset {} from {} failed", config.dataset, config.host))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    table.write_tsv(&mut out).context("Failed to write table to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = MartConfig::default();
        FetchOverrides {
            host: Some("http://127.0.0.1:9".to_string()),
            dataset: None,
            timeout: Some(3),
        }
        .apply(&mut config);

        assert_eq!(config.host, "http://127.0.0.1:9");
        assert_eq!(config.dataset, "hsapiens_gene_ensembl");
        assert_eq!(config.timeout_secs, Some(3));
    }
}

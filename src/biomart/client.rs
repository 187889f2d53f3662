use super::query::MartQuery;
use super::response::MartTable;
use crate::config::MartConfig;
use crate::error::{ErrorCode, PpiError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const MARTSERVICE_PATH: &str = "biomart/martservice";

/// BioMart martservice client.
///
/// A query is sent once; there are no retries. Only connecting is bounded
/// unless an overall timeout is configured.
pub struct MartClient {
    client: Client,
    endpoint: Url,
}

impl MartClient {
    pub fn new(config: &MartConfig) -> Result<Self> {
        let endpoint = Self::endpoint_for(&config.host)?;
        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| PpiError::remote("failed to create HTTP client").with_source(e))?;

        Ok(Self { client, endpoint })
    }

    fn endpoint_for(host: &str) -> Result<Url> {
        let base = if host.ends_with('/') {
            host.to_string()
        } else {
            format!("{}/", host)
        };
        Url::parse(&base)
            .and_then(|url| url.join(MARTSERVICE_PATH))
            .map_err(|e| {
                PpiError::remote_with_code(
                    ErrorCode::REMOTE_INVALID_URL,
                    "invalid BioMart host",
                    Some(host.to_string()),
                )
                .with_source(e)
            })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL carrying the XML query.
    pub fn query_url(&self, query: &MartQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("query", &query.to_xml());
        url
    }

    /// Runs the query and returns the complete, validated result set.
    pub async fn fetch(&self, query: &MartQuery) -> Result<MartTable> {
        let url = self.query_url(query);
        let endpoint = Some(self.endpoint.to_string());
        info!(
            "Querying BioMart dataset {} for {:?}",
            query.dataset, query.attributes
        );
        debug!("BioMart request: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out"
            } else {
                "endpoint could not be reached"
            };
            PpiError::remote_with_code(ErrorCode::REMOTE_UNREACHABLE, message, endpoint.clone())
                .with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PpiError::remote_with_code(
                ErrorCode::REMOTE_HTTP_STATUS,
                format!("server answered {}", status),
                endpoint,
            ));
        }

        let body = response.text().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out while receiving the response body"
            } else {
                "failed to read response body"
            };
            PpiError::remote_with_code(ErrorCode::REMOTE_INCOMPLETE, message, endpoint.clone())
                .with_source(e)
        })?;
        debug!("Received {} bytes from BioMart", body.len());

        let table = MartTable::parse(&body, query.attributes.len(), query.completion_stamp)?;
        if table.is_empty() {
            warn!("BioMart returned a header but no rows for {}", query.dataset);
        } else {
            info!("Fetched {} rows", table.len());
        }
        Ok(table)
    }
}

//! HTTP client for the NCBI E-utilities endpoints

use crate::core::config::UpstreamConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::types::RecordFormat;
use std::time::Duration;

const USER_AGENT: &str = concat!("pubmed-gateway/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a pooled `reqwest::Client` bound to one base URL
#[derive(Debug, Clone)]
pub struct EutilsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EutilsClient {
    /// Build a client with the configured base URL and timeout
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::InternalError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// esearch: relevance-ranked PMIDs for a term (XML)
    pub async fn esearch(&self, term: &str, retmax: usize) -> Result<String> {
        let retmax = retmax.to_string();
        self.get(
            "esearch.fcgi",
            &[
                ("db", "pubmed"),
                ("term", term),
                ("retmax", &retmax),
                ("sort", "relevance"),
                ("retmode", "xml"),
            ],
        )
        .await
    }

    /// esummary: document summaries for a batch of PMIDs (XML)
    pub async fn esummary(&self, pmids: &[String]) -> Result<String> {
        let ids = pmids.join(",");
        self.get(
            "esummary.fcgi",
            &[("db", "pubmed"), ("id", &ids), ("retmode", "xml")],
        )
        .await
    }

    /// efetch: one record as PubMed XML
    pub async fn efetch(&self, pmid: &str, format: RecordFormat) -> Result<String> {
        self.get(
            "efetch.fcgi",
            &[
                ("db", "pubmed"),
                ("id", pmid),
                ("rettype", format.rettype()),
                ("retmode", "xml"),
            ],
        )
        .await
    }

    /// GET `{base_url}/{endpoint}` and return the body of a 2xx response
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(url = %url, params = ?params, "Calling E-utilities");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::warn!(endpoint = endpoint, error = %e, "E-utilities call failed");
                GatewayError::from(e)
            })?;

        Ok(response.text().await?)
    }
}

//! Lookup operations offered by the gateway
//!
//! Each operation validates its input, makes one or two E-utilities
//! calls and returns either the raw XML or a re-shaped result.

use crate::core::error::{GatewayError, Result};
use crate::core::eutils::{parse_article, parse_search_ids, parse_summaries, EutilsClient};
use crate::core::types::{ArticleDetails, RecordFormat, SearchResultItem};
use std::collections::HashMap;

/// Stateless lookup service over the E-utilities client
#[derive(Debug, Clone)]
pub struct LookupService {
    client: EutilsClient,
    max_results: usize,
}

/// Trimmed value of a required parameter, or `MissingParameter`
pub fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GatewayError::MissingParameter(name.to_string()));
    }
    Ok(value)
}

impl LookupService {
    pub fn new(client: EutilsClient, max_results: usize) -> Self {
        Self {
            client,
            max_results,
        }
    }

    /// Abstract-level record XML, verbatim from efetch
    pub async fn fetch_abstract(&self, pmid: &str) -> Result<String> {
        self.fetch_xml(pmid, RecordFormat::Abstract).await
    }

    /// Full record XML, verbatim from efetch
    pub async fn fetch_full(&self, pmid: &str) -> Result<String> {
        self.fetch_xml(pmid, RecordFormat::Full).await
    }

    pub async fn fetch_xml(&self, pmid: &str, format: RecordFormat) -> Result<String> {
        let pmid = require("PMID", pmid)?;
        tracing::info!(pmid = pmid, format = format.rettype(), "Fetching record XML");

        self.client.efetch(pmid, format).await
    }

    /// Search PubMed and summarize the hits
    ///
    /// Runs esearch for up to `max_results` relevance-ranked PMIDs, then a
    /// single esummary call for the whole batch. Items come back in esearch
    /// order; a PMID without a summary title gets the placeholder title.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResultItem>> {
        let term = require("Search term", term)?;
        tracing::info!(term = term, "Searching PubMed");

        let search_xml = self.client.esearch(term, self.max_results).await?;
        let pmids = parse_search_ids(&search_xml, self.max_results)?;
        if pmids.is_empty() {
            tracing::info!(term = term, "No results");
            return Ok(Vec::new());
        }

        let summary_xml = self.client.esummary(&pmids).await?;
        let mut titles: HashMap<String, Option<String>> = parse_summaries(&summary_xml)?
            .into_iter()
            .map(|record| (record.pmid, record.title))
            .collect();

        let items: Vec<SearchResultItem> = pmids
            .into_iter()
            .map(|pmid| {
                let title = titles.remove(&pmid).flatten();
                SearchResultItem::new(pmid, title)
            })
            .collect();

        tracing::info!(term = term, count = items.len(), "Search completed");
        Ok(items)
    }

    /// Parsed title, abstract and citation details for one PMID
    pub async fn article(&self, pmid: &str) -> Result<ArticleDetails> {
        let pmid = require("PMID", pmid)?;
        tracing::info!(pmid = pmid, "Fetching article details");

        let xml = self.client.efetch(pmid, RecordFormat::Abstract).await?;
        parse_article(&xml, pmid)?
            .ok_or_else(|| GatewayError::NotFound(format!("No PubMed record for PMID {pmid}")))
    }
}

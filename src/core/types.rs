//! Domain data structures shared by the HTTP and CLI adapters.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of identifiers a search may return
pub const SEARCH_RESULT_CAP: usize = 10;

/// Title used when an upstream summary carries no title
pub const TITLE_PLACEHOLDER: &str = "No title found";

/// Public landing page for a PubMed record
pub const ARTICLE_URL_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Build the canonical public URL for a PMID
pub fn article_url(pmid: &str) -> String {
    format!("{ARTICLE_URL_BASE}/{pmid}/")
}

/// Record detail level requested from efetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Abstract,
    Full,
}

impl RecordFormat {
    /// Value of the efetch `rettype` parameter
    pub fn rettype(&self) -> &'static str {
        match self {
            RecordFormat::Abstract => "abstract",
            RecordFormat::Full => "full",
        }
    }
}

/// One entry of a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub pmid: String,
    pub title: String,
    pub url: String,
}

impl SearchResultItem {
    pub fn new(pmid: impl Into<String>, title: Option<String>) -> Self {
        let pmid = pmid.into();
        let url = article_url(&pmid);
        Self {
            pmid,
            title: title.unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            url,
        }
    }
}

/// Structured view of a single efetch record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetails {
    pub pmid: String,
    pub title: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub url: String,
}

/// Decoded query-string pairs in request order
///
/// A repeated name is not an error: the first occurrence wins
/// (`?term=a&term=b` reads as `a`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    /// First value given for `name`, or `""` when absent
    pub fn first(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

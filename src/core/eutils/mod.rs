//! NCBI E-utilities upstream
//!
//! - **client**: reqwest wrapper for esearch, esummary and efetch
//! - **parser**: quick-xml extraction of identifiers, summaries and articles

pub mod client;
pub mod parser;

pub use client::EutilsClient;
pub use parser::{parse_article, parse_search_ids, parse_summaries, SummaryRecord};

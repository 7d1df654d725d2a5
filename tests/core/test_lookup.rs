//! Tests for the lookup service
//!
//! - Search ordering, title fallback and result cap
//! - Single batched summary call, no summary call for empty results
//! - Verbatim XML relay for abstract and full records
//! - Error taxonomy (missing input, upstream, internal, not found)

use crate::common::*;
use httpmock::prelude::*;
use pubmed_gateway::core::error::GatewayError;
use pubmed_gateway::core::types::{SearchResultItem, TITLE_PLACEHOLDER};

#[tokio::test]
async fn test_search_two_results() {
    let server = MockServer::start_async().await;
    let search = mock_esearch(&server, "cancer", &esearch_xml(&["111", "222"])).await;
    let summary = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/esummary.fcgi")
                .query_param("id", "111,222");
            then.status(200)
                .body(esummary_xml(&[("111", Some("T1")), ("222", Some("T2"))]));
        })
        .await;

    let services = mock_services(&server);
    let items = services.lookup.search("cancer").await.unwrap();

    assert_eq!(
        items,
        vec![
            SearchResultItem {
                pmid: "111".to_string(),
                title: "T1".to_string(),
                url: "https://pubmed.ncbi.nlm.nih.gov/111/".to_string(),
            },
            SearchResultItem {
                pmid: "222".to_string(),
                title: "T2".to_string(),
                url: "https://pubmed.ncbi.nlm.nih.gov/222/".to_string(),
            },
        ]
    );
    search.assert_async().await;
    summary.assert_async().await;
}

#[tokio::test]
async fn test_search_no_ids_skips_summary() {
    let server = MockServer::start_async().await;
    let search = mock_esearch(&server, "zzzqqq", &esearch_xml(&[])).await;
    let summary = mock_esummary(&server, &esummary_xml(&[])).await;

    let services = mock_services(&server);
    let items = services.lookup.search("zzzqqq").await.unwrap();

    assert!(items.is_empty());
    search.assert_async().await;
    summary.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_search_preserves_relevance_order() {
    let server = MockServer::start_async().await;
    mock_esearch(&server, "aspirin", &esearch_xml(&["333", "111", "222"])).await;
    // esummary answers in a different order
    mock_esummary(
        &server,
        &esummary_xml(&[("111", Some("A")), ("222", Some("B")), ("333", Some("C"))]),
    )
    .await;

    let services = mock_services(&server);
    let items = services.lookup.search("aspirin").await.unwrap();

    let pmids: Vec<&str> = items.iter().map(|i| i.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["333", "111", "222"]);
    assert_eq!(items[0].title, "C");
}

#[tokio::test]
async fn test_search_missing_title_uses_placeholder() {
    let server = MockServer::start_async().await;
    mock_esearch(&server, "aspirin", &esearch_xml(&["1", "2"])).await;
    mock_esummary(&server, &esummary_xml(&[("1", None), ("2", Some("Two"))])).await;

    let services = mock_services(&server);
    let items = services.lookup.search("aspirin").await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, TITLE_PLACEHOLDER);
    assert_eq!(items[1].title, "Two");
}

#[tokio::test]
async fn test_search_caps_results_at_ten() {
    let server = MockServer::start_async().await;
    let ids: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    mock_esearch(&server, "flu", &esearch_xml(&id_refs)).await;

    let summaries: Vec<(&str, Option<&str>)> = id_refs.iter().map(|id| (*id, Some("T"))).collect();
    mock_esummary(&server, &esummary_xml(&summaries)).await;

    let services = mock_services(&server);
    let items = services.lookup.search("flu").await.unwrap();

    assert_eq!(items.len(), 10);
    assert_eq!(items[9].pmid, "10");
}

#[tokio::test]
async fn test_search_esearch_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/esearch.fcgi");
            then.status(503).body("Service Unavailable");
        })
        .await;
    let summary = mock_esummary(&server, &esummary_xml(&[])).await;

    let services = mock_services(&server);
    let err = services.lookup.search("cancer").await.unwrap_err();

    assert!(err.is_upstream());
    summary.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_search_esummary_failure_returns_no_partial_results() {
    let server = MockServer::start_async().await;
    mock_esearch(&server, "cancer", &esearch_xml(&["111"])).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/esummary.fcgi");
            then.status(500);
        })
        .await;

    let services = mock_services(&server);
    let err = services.lookup.search("cancer").await.unwrap_err();
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_search_malformed_summary_is_internal_error() {
    let server = MockServer::start_async().await;
    mock_esearch(&server, "cancer", &esearch_xml(&["111"])).await;
    mock_esummary(&server, "<eSummaryResult><DocSum><Id>111</Id></eSummaryResult>").await;

    let services = mock_services(&server);
    let err = services.lookup.search("cancer").await.unwrap_err();
    assert!(matches!(err, GatewayError::InternalError(_)));
}

#[tokio::test]
async fn test_fetch_abstract_verbatim() {
    let server = MockServer::start_async().await;
    let efetch = mock_efetch(&server, "31452104", "abstract", 200, EFETCH_ABSTRACT).await;

    let services = mock_services(&server);
    let xml = services.lookup.fetch_abstract("31452104").await.unwrap();

    assert_eq!(xml, EFETCH_ABSTRACT);
    efetch.assert_async().await;
}

#[tokio::test]
async fn test_fetch_full_requests_full_record() {
    let server = MockServer::start_async().await;
    let efetch = mock_efetch(&server, "31452104", "full", 200, EFETCH_ABSTRACT).await;

    let services = mock_services(&server);
    let xml = services.lookup.fetch_full(" 31452104 ").await.unwrap();

    assert_eq!(xml, EFETCH_ABSTRACT);
    efetch.assert_async().await;
}

#[tokio::test]
async fn test_fetch_upstream_error_status() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "1", "abstract", 400, "Bad Request").await;

    let services = mock_services(&server);
    let err = services.lookup.fetch_abstract("1").await.unwrap_err();

    assert!(err.is_upstream());
    assert!(err.message().contains("400"));
}

#[tokio::test]
async fn test_missing_input_makes_no_upstream_call() {
    let server = MockServer::start_async().await;
    let any_call = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200);
        })
        .await;

    let services = mock_services(&server);
    assert!(services.lookup.fetch_abstract("").await.unwrap_err().is_bad_request());
    assert!(services.lookup.fetch_full("").await.unwrap_err().is_bad_request());
    assert!(services.lookup.search("  ").await.unwrap_err().is_bad_request());
    assert!(services.lookup.article("").await.unwrap_err().is_bad_request());

    any_call.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_connection_refused_on_every_operation() {
    let services = services_for(UNREACHABLE_UPSTREAM);

    assert!(services.lookup.fetch_abstract("1").await.unwrap_err().is_upstream());
    assert!(services.lookup.fetch_full("1").await.unwrap_err().is_upstream());
    assert!(services.lookup.search("cancer").await.unwrap_err().is_upstream());
    assert!(services.lookup.article("1").await.unwrap_err().is_upstream());
}

#[tokio::test]
async fn test_article_details() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "31452104", "abstract", 200, EFETCH_ABSTRACT).await;

    let services = mock_services(&server);
    let article = services.lookup.article("31452104").await.unwrap();

    assert_eq!(article.pmid, "31452104");
    assert_eq!(article.title, "Tumour heterogeneity and resistance.");
    assert_eq!(article.abstract_text.as_deref(), Some("Tumours are not uniform."));
    assert_eq!(article.year.as_deref(), Some("2020"));
    assert_eq!(article.journal.as_deref(), Some("Nature reviews. Cancer"));
    assert_eq!(article.authors, vec!["Jane Doe", "Richard Roe"]);
}

#[tokio::test]
async fn test_article_not_found() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "999999999", "abstract", 200, EFETCH_EMPTY).await;

    let services = mock_services(&server);
    let err = services.lookup.article("999999999").await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
}

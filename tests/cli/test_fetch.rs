//! Tests for the fetch and article CLI commands

use crate::common::*;
use httpmock::prelude::*;
use pubmed_gateway::cli::commands::{article, fetch};
use pubmed_gateway::cli::OutputFormat;

/// Test fetching abstract and full XML
#[tokio::test]
async fn test_fetch_abstract_and_full() {
    let server = MockServer::start_async().await;
    let abstract_mock = mock_efetch(&server, "31452104", "abstract", 200, EFETCH_ABSTRACT).await;
    let full_mock = mock_efetch(&server, "31452104", "full", 200, EFETCH_ABSTRACT).await;
    let services = mock_services(&server);

    let result = fetch::execute(
        fetch::FetchArgs {
            pmid: "31452104".to_string(),
            full: false,
        },
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok());

    let result = fetch::execute(
        fetch::FetchArgs {
            pmid: "31452104".to_string(),
            full: true,
        },
        &services,
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok());

    abstract_mock.assert_async().await;
    full_mock.assert_async().await;
}

/// Test fetch with an upstream error status
#[tokio::test]
async fn test_fetch_upstream_error() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "1", "abstract", 500, "oops").await;
    let services = mock_services(&server);

    let result = fetch::execute(
        fetch::FetchArgs {
            pmid: "1".to_string(),
            full: false,
        },
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_err());
}

/// Test article details output
#[tokio::test]
async fn test_article_output() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "31452104", "abstract", 200, EFETCH_ABSTRACT).await;
    let services = mock_services(&server);

    for (format, full_abstract) in [
        (OutputFormat::Human, false),
        (OutputFormat::Human, true),
        (OutputFormat::Json, false),
    ] {
        let result = article::execute(
            article::ArticleArgs {
                pmid: "31452104".to_string(),
                full_abstract,
            },
            &services,
            format,
        )
        .await;
        assert!(result.is_ok(), "Article should succeed: {:?}", result.err());
    }
}

/// Test article for a PMID without a record
#[tokio::test]
async fn test_article_not_found() {
    let server = MockServer::start_async().await;
    mock_efetch(&server, "999999999", "abstract", 200, EFETCH_EMPTY).await;
    let services = mock_services(&server);

    let result = article::execute(
        article::ArticleArgs {
            pmid: "999999999".to_string(),
            full_abstract: false,
        },
        &services,
        OutputFormat::Human,
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("999999999"));
}

//! Mocked tests for DOI URL resolution
//!
//! The DOI resolver is exercised through a wiremock redirect chain; the
//! publication URL must be the final location after redirects, the raw DOI
//! URL when resolution is skipped, and empty on failure or missing DOI.

use pubmed_lookup::{ClientConfig, PubMedClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PMID: &str = "12831818";
const DOI: &str = "10.1016/s0195-668x(03)00201-x";

fn esummary_json_response(doi: Option<&str>) -> String {
    let doi_entry = match doi {
        Some(doi) => format!(r#", {{"idtype": "doi", "idtypen": 3, "value": "{doi}"}}"#),
        None => String::new(),
    };
    format!(
        r#"{{
            "result": {{
                "uids": ["{PMID}"],
                "{PMID}": {{
                    "uid": "{PMID}",
                    "pubdate": "2003 Jul",
                    "source": "Eur Heart J",
                    "authors": [{{"name": "Iung B", "authtype": "Author", "clusterid": ""}}],
                    "title": "A prospective survey.",
                    "volume": "24",
                    "issue": "13",
                    "pages": "1231-43",
                    "articleids": [
                        {{"idtype": "pubmed", "idtypen": 1, "value": "{PMID}"}}{doi_entry}
                    ],
                    "fulljournalname": "European heart journal"
                }}
            }}
        }}"#
    )
}

/// Helper: client with both E-utilities and DOI endpoints pointed at mocks
fn create_test_client(base_url: &str, doi_base_url: &str) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_doi_base_url(doi_base_url)
        .with_tool("test-client");
    PubMedClient::with_config(config)
}

async fn mount_esummary(mock_server: &MockServer, doi: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esummary_json_response(doi)))
        .mount(mock_server)
        .await;
}

async fn mount_efetch_empty(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0" ?><PubmedArticleSet></PubmedArticleSet>"#,
        ))
        .mount(mock_server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_doi_resolution_follows_redirect() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server, Some(DOI)).await;
    mount_efetch_empty(&mock_server).await;

    let article_url = format!("{}/content/24/13/1231", mock_server.uri());

    Mock::given(method("GET"))
        .and(path(format!("/{DOI}")))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", article_url.as_str()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/content/24/13/1231"))
        .respond_with(ResponseTemplate::new(200).set_body_string("the article"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri(), &mock_server.uri());
    let publication = client.fetch_publication(PMID).await.unwrap();

    assert_eq!(publication.url, article_url);
}

#[tokio::test]
#[traced_test]
async fn test_doi_url_without_resolution() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server, Some(DOI)).await;
    mount_efetch_empty(&mock_server).await;

    // No DOI route mounted: skipping resolution must not make the request
    let client = create_test_client(&mock_server.uri(), "https://doi.org");
    let publication = client
        .fetch_publication_with_options(PMID, false)
        .await
        .unwrap();

    assert_eq!(publication.url, format!("https://doi.org/{DOI}"));
}

#[tokio::test]
#[traced_test]
async fn test_doi_resolution_failure_yields_empty_url() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server, Some(DOI)).await;
    mount_efetch_empty(&mock_server).await;

    // Nothing listens on this port, so resolution fails with a
    // connection error
    let client = create_test_client(&mock_server.uri(), "http://127.0.0.1:1");
    let publication = client.fetch_publication(PMID).await.unwrap();

    assert_eq!(publication.url, "");
}

#[tokio::test]
#[traced_test]
async fn test_doi_resolution_non_success_yields_empty_url() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server, Some(DOI)).await;
    mount_efetch_empty(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(format!("/{DOI}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri(), &mock_server.uri());
    let publication = client.fetch_publication(PMID).await.unwrap();

    assert_eq!(publication.url, "");
}

#[tokio::test]
#[traced_test]
async fn test_missing_doi_yields_empty_url_in_both_modes() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server, None).await;
    mount_efetch_empty(&mock_server).await;

    let client = create_test_client(&mock_server.uri(), &mock_server.uri());

    let resolved = client.fetch_publication(PMID).await.unwrap();
    assert_eq!(resolved.url, "");

    let unresolved = client
        .fetch_publication_with_options(PMID, false)
        .await
        .unwrap();
    assert_eq!(unresolved.url, "");
}

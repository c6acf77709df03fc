//! Mocked end-to-end tests for publication lookup
//!
//! These tests run the full lookup pipeline (ESummary + EFetch) against a
//! wiremock server and verify record resolution, identification parameters,
//! and the degradation policy for a failed metadata fetch.

use pubmed_lookup::{ClientConfig, PubMedClient, PubMedError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PMID: &str = "12831818";

/// Helper: JSON response from ESummary for the test record
fn esummary_json_response() -> String {
    format!(
        r#"{{
            "header": {{"type": "esummary", "version": "0.3"}},
            "result": {{
                "uids": ["{PMID}"],
                "{PMID}": {{
                    "uid": "{PMID}",
                    "pubdate": "2003 Jul",
                    "source": "Eur Heart J",
                    "authors": [
                        {{"name": "Iung B", "authtype": "Author", "clusterid": ""}},
                        {{"name": "Baron G", "authtype": "Author", "clusterid": ""}},
                        {{"name": "Vahanian A", "authtype": "Author", "clusterid": ""}}
                    ],
                    "title": "A prospective survey of patients with valvular heart disease in Europe.",
                    "volume": "24",
                    "issue": "13",
                    "pages": "1231-43",
                    "attributes": ["Has Abstract"],
                    "articleids": [
                        {{"idtype": "pubmed", "idtypen": 1, "value": "{PMID}"}},
                        {{"idtype": "doi", "idtypen": 3, "value": "10.1016/s0195-668x(03)00201-x"}}
                    ],
                    "fulljournalname": "European heart journal"
                }}
            }}
        }}"#
    )
}

/// Helper: XML response from EFetch for the test record
fn efetch_xml_response() -> String {
    format!(
        r#"<?xml version="1.0" ?>
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">{PMID}</PMID>
        <Article PubModel="Print">
            <Journal>
                <Title>European heart journal</Title>
                <JournalIssue CitedMedium="Print">
                    <Volume>24</Volume>
                    <Issue>13</Issue>
                    <PubDate><Year>2003</Year><Month>Jul</Month><Day>15</Day></PubDate>
                </JournalIssue>
            </Journal>
            <Abstract>
                <AbstractText Label="AIMS">To survey valvular heart disease in Europe.</AbstractText>
                <AbstractText Label="CONCLUSION">Registries remain useful.</AbstractText>
            </Abstract>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#
    )
}

/// Helper: create a client pointing at the mock server
fn create_test_client(base_url: &str) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_tool("test-client")
        .with_email("test@example.com");
    PubMedClient::with_config(config)
}

async fn mount_esummary(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esummary_json_response()))
        .mount(mock_server)
        .await;
}

async fn mount_efetch(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(efetch_xml_response()))
        .mount(mock_server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_fetch_publication_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server).await;
    mount_efetch(&mock_server).await;

    let client = create_test_client(&mock_server.uri());
    let publication = client
        .fetch_publication_with_options(PMID, false)
        .await
        .unwrap();

    assert_eq!(publication.pmid, PMID);
    assert_eq!(
        publication.pubmed_url,
        "https://pubmed.ncbi.nlm.nih.gov/12831818/"
    );
    assert_eq!(publication.first_author, "Iung B");
    assert_eq!(publication.last_author, "Vahanian A");
    assert_eq!(publication.journal, "Eur Heart J");
    assert_eq!(publication.volume, "24");
    assert_eq!(publication.issue, "13");
    assert_eq!(publication.pages, "1231-43");
    assert_eq!(publication.year, "2003");
    assert_eq!(publication.month, Some(7));
    assert_eq!(publication.day, "15");
    assert_eq!(
        publication.abstract_text,
        "AIMS: To survey valvular heart disease in Europe.\n\nCONCLUSION: Registries remain useful."
    );

    assert_eq!(
        publication.cite(),
        "Iung B, Baron G, Vahanian A (2003). A prospective survey of patients with \
         valvular heart disease in Europe. Eur Heart J 24(13): 1231-43."
    );
    assert_eq!(
        publication.cite_mini(),
        "Iung B - Vahanian A - 2003 - Eur Heart J"
    );
}

#[tokio::test]
#[traced_test]
async fn test_pmid_and_url_resolve_same_record() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server).await;
    mount_efetch(&mock_server).await;

    let client = create_test_client(&mock_server.uri());

    let by_pmid = client
        .fetch_publication_with_options(PMID, false)
        .await
        .unwrap();
    let by_url = client
        .fetch_publication_with_options("https://pubmed.ncbi.nlm.nih.gov/12831818/", false)
        .await
        .unwrap();
    let by_legacy_url = client
        .fetch_publication_with_options("http://www.ncbi.nlm.nih.gov/pubmed/12831818", false)
        .await
        .unwrap();

    assert_eq!(by_pmid.pmid, by_url.pmid);
    assert_eq!(by_pmid.cite(), by_url.cite());
    assert_eq!(by_pmid.cite(), by_legacy_url.cite());
    assert_eq!(by_pmid.abstract_text, by_url.abstract_text);
}

#[tokio::test]
#[traced_test]
async fn test_identification_params_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", PMID))
        .and(query_param("tool", "test-client"))
        .and(query_param("email", "test@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esummary_json_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let pmid = PMID.parse().unwrap();
    let summary = client.fetch_summary(&pmid).await.unwrap();

    assert_eq!(summary.pmid, PMID);
    assert!(summary.has_abstract);
}

#[tokio::test]
#[traced_test]
async fn test_efetch_failure_degrades_to_empty_metadata() {
    let mock_server = MockServer::start().await;
    mount_esummary(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let publication = client
        .fetch_publication_with_options(PMID, false)
        .await
        .unwrap();

    // Metadata fetch failure disables abstract and date, nothing raises
    assert_eq!(publication.abstract_text, "");
    assert_eq!(publication.year, "");
    assert_eq!(publication.month, None);
    assert_eq!(publication.day, "");

    // Summary-sourced fields are unaffected
    assert_eq!(publication.journal, "Eur Heart J");
    assert_eq!(
        publication.cite_mini(),
        "Iung B - Vahanian A -  - Eur Heart J"
    );
}

#[tokio::test]
#[traced_test]
async fn test_article_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result": {"uids": []}}"#))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.fetch_publication_with_options(PMID, false).await;

    assert!(matches!(result, Err(PubMedError::ArticleNotFound { .. })));
}

#[tokio::test]
#[traced_test]
async fn test_invalid_query_makes_no_request() {
    let mock_server = MockServer::start().await;
    // Query validation happens before any network call
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .fetch_publication_with_options("not a valid query", false)
        .await;

    assert!(matches!(result, Err(PubMedError::InvalidQuery { .. })));
}

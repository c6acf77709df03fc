//! PubMed lookup client
//!
//! One lookup is a straight line: resolve the query to a PMID, fetch the
//! ESummary record, fetch the EFetch metadata document, optionally resolve
//! the DOI, and assemble a [`Publication`]. Requests are sequential; there is
//! no retrying, caching, or rate limiting.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::common::PubMedId;
use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::{ArticleSummary, Publication};
use crate::pubmed::parser::parse_article_metadata;
use crate::pubmed::responses::{ESummaryDocSum, ESummaryResponse};

/// Client for the PubMed E-utilities APIs
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
    pub(crate) doi_base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new client with default configuration
    ///
    /// NCBI asks that API consumers identify themselves; prefer
    /// [`with_config`](Self::with_config) with an email set.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_lookup::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_lookup::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@university.edu");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        let doi_base_url = config.effective_doi_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(Duration::from_secs(config.timeout.as_secs()))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            doi_base_url,
            config,
        }
    }

    /// Look up a publication by PMID or PubMed URL, resolving its DOI
    ///
    /// Equivalent to
    /// [`fetch_publication_with_options(query, true)`](Self::fetch_publication_with_options).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_lookup::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let publication = client.fetch_publication("12831818").await?;
    ///     println!("{}", publication.cite());
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_publication(&self, query: &str) -> Result<Publication> {
        self.fetch_publication_with_options(query, true).await
    }

    /// Look up a publication by PMID or PubMed URL
    ///
    /// With `resolve_doi` set, the DOI redirect is followed and the final
    /// location becomes the publication URL; otherwise the unresolved DOI URL
    /// is used. A failed EFetch leaves the abstract and date empty; a failed
    /// DOI resolution leaves the URL empty. Neither raises.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidQuery` - the query is neither a PMID nor a PubMed URL
    /// * `PubMedError::ArticleNotFound` - ESummary returned no usable record
    /// * `PubMedError::XmlError` - the EFetch document was fetched but does not parse
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch_publication_with_options(
        &self,
        query: &str,
        resolve_doi: bool,
    ) -> Result<Publication> {
        let pmid = PubMedId::from_query(query)?;
        let summary = self.fetch_summary(&pmid).await?;

        let metadata = match self.fetch_article_xml(&pmid).await {
            Ok(xml) => Some(parse_article_metadata(&xml)?),
            Err(e) => {
                warn!(error = %e, "EFetch request failed; abstract and date unavailable");
                None
            }
        };

        let url = match &summary.doi {
            Some(doi) if resolve_doi => self.resolve_doi_url(doi).await.unwrap_or_default(),
            Some(doi) => self.doi_url(doi),
            None => String::new(),
        };

        info!(pmid = %pmid, "Publication lookup completed");
        Ok(Publication::from_parts(summary, metadata, url))
    }

    /// Fetch the ESummary record for a PMID
    ///
    /// Returns the first (and expected only) record in the response.
    ///
    /// # Errors
    ///
    /// * `PubMedError::ArticleNotFound` - the response carries no usable record
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_summary(&self, pmid: &PubMedId) -> Result<ArticleSummary> {
        let url = format!(
            "{}/esummary.fcgi?db=pubmed&id={}&retmode=json",
            self.base_url, pmid
        );

        debug!("Making ESummary API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        Self::parse_esummary_response(&json_text, &pmid.to_string())
    }

    /// Fetch the EFetch XML metadata document for a PMID
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_article_xml(&self, pmid: &PubMedId) -> Result<String> {
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&rettype=abstract",
            self.base_url, pmid
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        Ok(response.text().await?)
    }

    /// The unresolved DOI redirect URL for a DOI
    pub fn doi_url(&self, doi: &str) -> String {
        format!("{}/{}", self.doi_base_url, doi)
    }

    /// Resolve a DOI to its article URL by following the redirect chain
    ///
    /// Returns `None` when the request fails or ends in a non-success
    /// status; the caller degrades to an empty URL.
    #[instrument(skip(self), fields(doi = %doi))]
    pub async fn resolve_doi_url(&self, doi: &str) -> Option<String> {
        let doi_url = self.doi_url(doi);

        debug!("Resolving DOI redirect");
        match self.client.get(&doi_url).send().await {
            Ok(response) if response.status().is_success() => {
                Some(response.url().to_string())
            }
            Ok(response) => {
                warn!(status = %response.status(), "DOI resolution returned non-success status");
                None
            }
            Err(e) => {
                warn!(error = %e, "DOI resolution request failed");
                None
            }
        }
    }

    /// Internal helper for E-utilities GET requests.
    /// Appends the configured identification parameters (tool, email) to the URL.
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }

    /// Parse an ESummary JSON response into the record for `pmid`
    pub(crate) fn parse_esummary_response(json_text: &str, pmid: &str) -> Result<ArticleSummary> {
        let response: ESummaryResponse = serde_json::from_str(json_text)?;
        let result = &response.result;

        let uid = result
            .get("uids")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first())
            .and_then(|v| v.as_str())
            .ok_or_else(|| PubMedError::ArticleNotFound {
                pmid: pmid.to_string(),
            })?;

        let doc_value = result
            .get(uid)
            .ok_or_else(|| PubMedError::ArticleNotFound {
                pmid: pmid.to_string(),
            })?;

        // ESummary reports per-record errors inline rather than via status
        if doc_value.get("error").is_some() {
            warn!(uid = %uid, "ESummary returned error for UID");
            return Err(PubMedError::ArticleNotFound {
                pmid: pmid.to_string(),
            });
        }

        let doc: ESummaryDocSum = serde_json::from_value(doc_value.clone())?;

        let doi = doc
            .articleids
            .iter()
            .find(|aid| aid.idtype == "doi" && !aid.value.is_empty())
            .map(|aid| aid.value.clone());

        let has_abstract = doc.attributes.iter().any(|a| a == "Has Abstract");
        let authors: Vec<String> = doc.authors.iter().map(|a| a.name.clone()).collect();

        Ok(ArticleSummary {
            pmid: doc.uid,
            title: doc.title,
            authors,
            journal: doc.source,
            full_journal_name: doc.fulljournalname,
            pub_date: doc.pubdate,
            volume: doc.volume,
            issue: doc.issue,
            pages: doc.pages,
            doi,
            has_abstract,
        })
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

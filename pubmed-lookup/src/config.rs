//! Client configuration for NCBI E-utilities requests
//!
//! NCBI asks API consumers to identify themselves with `tool` and `email`
//! query parameters. `ClientConfig` carries those values plus the endpoint
//! overrides used by tests.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_DOI_BASE_URL: &str = "https://doi.org";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubmed_lookup::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("my-tool");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// E-utilities base URL override (defaults to the NCBI endpoint)
    pub base_url: Option<String>,
    /// DOI resolver base URL override (defaults to `https://doi.org`)
    pub doi_base_url: Option<String>,
    /// Contact email, sent as the `email` API parameter
    pub email: Option<String>,
    /// Tool name, sent as the `tool` API parameter
    pub tool: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            base_url: None,
            doi_base_url: None,
            email: None,
            tool: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the contact email sent with every API request
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name sent with every API request
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Override the E-utilities base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the DOI resolver base URL
    pub fn with_doi_base_url(mut self, doi_base_url: impl Into<String>) -> Self {
        self.doi_base_url = Some(doi_base_url.into());
        self
    }

    /// Set the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The E-utilities base URL in effect
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The DOI resolver base URL in effect
    pub fn effective_doi_base_url(&self) -> &str {
        self.doi_base_url.as_deref().unwrap_or(DEFAULT_DOI_BASE_URL)
    }

    /// The user agent sent with every request
    pub fn effective_user_agent(&self) -> String {
        format!("pubmed-lookup/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Build the identification query parameters appended to API requests
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(tool) = &self.tool {
            params.push(("tool".to_string(), tool.clone()));
        }

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

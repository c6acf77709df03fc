pub mod citation;
pub mod url;

use anyhow::Result;
use pubmed_lookup::{ClientConfig, PubMedClient};

pub fn create_client(email: Option<&str>, tool: &str) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    Ok(PubMedClient::with_config(config))
}

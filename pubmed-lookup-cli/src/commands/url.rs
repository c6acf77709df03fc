use anyhow::Result;
use clap::Args;

use super::create_client;

#[derive(Args, Debug)]
pub struct Url {
    /// PubMed ID or PubMed URL
    pub query: String,

    /// Print the unresolved DOI URL instead of following the redirect
    #[arg(short, long)]
    pub doi: bool,
}

impl Url {
    pub async fn execute_with_config(&self, email: Option<&str>, tool: &str) -> Result<()> {
        let client = create_client(email, tool)?;

        tracing::debug!(query = %self.query, doi = self.doi, "Looking up article URL");

        let publication = client
            .fetch_publication_with_options(&self.query, !self.doi)
            .await?;

        println!("{}", publication.url);

        Ok(())
    }
}

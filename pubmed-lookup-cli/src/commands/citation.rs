use anyhow::Result;
use clap::Args;

use super::create_client;

#[derive(Args, Debug)]
pub struct Citation {
    /// PubMed ID or PubMed URL
    pub query: String,

    /// Print the mini citation (first/last author, year, journal)
    #[arg(short, long)]
    pub mini: bool,
}

impl Citation {
    pub async fn execute_with_config(&self, email: Option<&str>, tool: &str) -> Result<()> {
        let client = create_client(email, tool)?;

        tracing::debug!(query = %self.query, mini = self.mini, "Looking up citation");

        // The citation does not use the article URL, so skip DOI resolution
        let publication = client
            .fetch_publication_with_options(&self.query, false)
            .await?;

        if self.mini {
            println!("{}", publication.cite_mini());
        } else {
            println!("{}", publication.cite());
        }

        Ok(())
    }
}

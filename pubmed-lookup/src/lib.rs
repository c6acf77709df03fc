//! # PubMed Lookup
//!
//! A Rust client for looking up scientific publications by PubMed ID or
//! PubMed URL and formatting their metadata into citation strings.
//!
//! A lookup combines two NCBI E-utilities calls — the ESummary record for
//! bibliographic fields and the EFetch XML document for abstract and
//! publication date — into a single [`Publication`] value, optionally
//! resolving the record's DOI to the article's landing page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_lookup::{ClientConfig, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@university.edu");
//!     let client = PubMedClient::with_config(config);
//!
//!     // Accepts a bare PMID or a PubMed article URL
//!     let publication = client.fetch_publication("12831818").await?;
//!
//!     println!("{}", publication.cite());
//!     println!("{}", publication.cite_mini());
//!     println!("{}", publication.url);
//!
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use common::PubMedId;
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{ArticleSummary, PubMedClient, Publication, DEFAULT_MAX_AUTHORS};

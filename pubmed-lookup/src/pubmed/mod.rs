//! PubMed lookup and citation formatting
//!
//! The module is split by concern:
//! - `client` - E-utilities HTTP client and high-level lookup
//! - `models` - [`ArticleSummary`] and [`Publication`]
//! - `parser` - EFetch XML extraction (abstract, publication date)
//! - `citation` - citation rendering on [`Publication`]
//! - `responses` - ESummary wire structures

pub mod citation;
pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use citation::DEFAULT_MAX_AUTHORS;
pub use client::PubMedClient;
pub use models::{ArticleSummary, Publication};
pub use parser::{parse_article_metadata, ArticleMetadata, PublicationDate};

//! Public data models for PubMed lookups

use serde::{Deserialize, Serialize};

use crate::pubmed::parser::ArticleMetadata;

/// Lightweight article metadata from the ESummary API
///
/// Contains basic bibliographic fields without abstract or publication-date
/// detail. Fields the record does not carry are empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Author names in citation order
    pub authors: Vec<String>,
    /// Journal name (abbreviated source)
    pub journal: String,
    /// Full journal name
    pub full_journal_name: String,
    /// Publication date string as returned by the API (e.g. "2003 Jul 15")
    pub pub_date: String,
    /// Journal volume
    pub volume: String,
    /// Journal issue
    pub issue: String,
    /// Page range
    pub pages: String,
    /// DOI, if the record carries one
    pub doi: Option<String>,
    /// Whether PubMed holds an abstract for this record
    pub has_abstract: bool,
}

/// The combined, normalized view of one publication
///
/// Built from an [`ArticleSummary`] plus the EFetch metadata document.
/// Fields are public so callers can tweak a value before rendering an ad-hoc
/// citation variant; the struct itself is constructed once per lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    /// PubMed ID
    pub pmid: String,
    /// PubMed article page URL
    pub pubmed_url: String,
    /// Article title
    pub title: String,
    /// Author names in citation order
    pub authors: Vec<String>,
    /// First listed author (empty when the record has no authors)
    pub first_author: String,
    /// Last listed author (empty when the record has no authors)
    pub last_author: String,
    /// Journal name
    pub journal: String,
    /// Journal volume
    pub volume: String,
    /// Journal issue
    pub issue: String,
    /// Page range
    pub pages: String,
    /// DOI, if the record carries one
    pub doi: Option<String>,
    /// Resolved article URL (empty when the record has no DOI or resolution failed)
    pub url: String,
    /// Abstract text (empty when unavailable)
    pub abstract_text: String,
    /// Publication year as a string (possibly empty)
    pub year: String,
    /// Publication month, 1-12 (None when missing or unparseable)
    pub month: Option<u8>,
    /// Publication day as a string (possibly empty)
    pub day: String,
}

impl Publication {
    /// Assemble a publication from its lookup parts
    ///
    /// `metadata` is `None` when the EFetch document could not be retrieved;
    /// abstract and date fields then stay empty. The abstract is also left
    /// empty when the summary says the record has none, regardless of what
    /// the metadata document contains.
    pub fn from_parts(summary: ArticleSummary, metadata: Option<ArticleMetadata>, url: String) -> Self {
        let pubmed_url = format!("https://pubmed.ncbi.nlm.nih.gov/{}/", summary.pmid);
        let first_author = summary.authors.first().cloned().unwrap_or_default();
        let last_author = summary.authors.last().cloned().unwrap_or_default();

        let (abstract_text, year, month, day) = match metadata {
            Some(metadata) => {
                let abstract_text = if summary.has_abstract {
                    metadata.abstract_text.unwrap_or_default()
                } else {
                    String::new()
                };
                let date = metadata.pub_date;
                (abstract_text, date.year, date.month, date.day)
            }
            None => (String::new(), String::new(), None, String::new()),
        };

        Self {
            pmid: summary.pmid,
            pubmed_url,
            title: summary.title,
            first_author,
            last_author,
            authors: summary.authors,
            journal: summary.journal,
            volume: summary.volume,
            issue: summary.issue,
            pages: summary.pages,
            doi: summary.doi,
            url,
            abstract_text,
            year,
            month,
            day,
        }
    }
}

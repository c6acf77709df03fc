//! EFetch XML parser
//!
//! Extracts the two things the citation formatter needs from a PubMed EFetch
//! response: the abstract text and the journal-issue publication date. The
//! rest of the document is ignored.
//!
//! - `preprocessing` - inline-HTML cleanup before deserialization
//! - `deserializers` - custom visitor for `AbstractText` shapes
//! - `xml_types` - internal XML schema types

mod deserializers;
mod preprocessing;
mod xml_types;

use quick_xml::de::from_str;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{PubMedError, Result};
use preprocessing::strip_inline_html_tags;
use xml_types::PubmedArticleSet;

/// Publication date extracted from `Journal/JournalIssue/PubDate`
///
/// Year and day are copied as-is; the month is the numeric form of the
/// record's three-letter abbreviation, or `None` when missing or
/// unparseable. All fields are empty when the date node is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDate {
    pub year: String,
    pub month: Option<u8>,
    pub day: String,
}

/// Metadata extracted from one EFetch XML document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Abstract paragraphs joined with a blank line, labels rendered as
    /// `"Label: text"`. `None` when the document has no abstract node.
    pub abstract_text: Option<String>,
    /// Journal-issue publication date
    pub pub_date: PublicationDate,
}

/// Convert a three-letter English month abbreviation to its 1-12 form
///
/// Case-insensitive; anything else (including numeric months) is `None`.
pub(crate) fn parse_month_abbr(abbr: &str) -> Option<u8> {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let trimmed = abbr.trim();
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(trimmed))
        .map(|i| i as u8 + 1)
}

/// Parse abstract and publication date from an EFetch XML response
///
/// # Errors
///
/// Returns `PubMedError::XmlError` when the document does not deserialize —
/// including abstract content in a shape the visitor cannot interpret.
/// Missing nodes are not errors: an absent abstract yields `None` and an
/// absent date node yields empty fields.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_metadata(xml: &str) -> Result<ArticleMetadata> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let article = article_set
        .articles
        .into_iter()
        .next()
        .and_then(|a| a.medline_citation.article);

    let Some(article) = article else {
        return Ok(ArticleMetadata::default());
    };

    let abstract_text = article.abstract_node.map(|node| {
        let paragraphs: Vec<String> = node.sections.iter().map(|s| s.render()).collect();
        paragraphs.join("\n\n")
    });

    let pub_date = article
        .journal
        .and_then(|j| j.journal_issue)
        .and_then(|i| i.pub_date)
        .map(|date| PublicationDate {
            year: date.year.unwrap_or_default(),
            month: date.month.as_deref().and_then(parse_month_abbr),
            day: date.day.unwrap_or_default(),
        })
        .unwrap_or_default();

    Ok(ArticleMetadata {
        abstract_text,
        pub_date,
    })
}

//! Internal deserialization types for the EFetch XML schema
//!
//! Only the slice of the PubMed DTD this crate reads is modeled:
//! `PubmedArticleSet/PubmedArticle/MedlineCitation/Article` down to the
//! abstract sections and the journal issue publication date. Everything else
//! in the document is ignored by serde.

use serde::Deserialize;

use super::deserializers::AbstractSection;

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitationXml,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitationXml {
    #[serde(rename = "Article")]
    pub article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal")]
    pub journal: Option<JournalXml>,
    #[serde(rename = "Abstract")]
    pub abstract_node: Option<AbstractXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AbstractXml {
    #[serde(rename = "AbstractText", default)]
    pub sections: Vec<AbstractSection>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Day")]
    pub day: Option<String>,
}

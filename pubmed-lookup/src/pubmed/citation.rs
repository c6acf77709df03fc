//! Citation rendering for [`Publication`]
//!
//! Two formats are supported: a full citation
//! (`"{authors} ({year}). {title} {journal} {volume}({issue}): {pages}."`)
//! and a mini citation (`"{first} - {last} - {year} - {journal}"`).

use crate::pubmed::models::Publication;

/// Author count above which the full citation truncates to ", et al."
pub const DEFAULT_MAX_AUTHORS: usize = 5;

impl Publication {
    /// Comma-joined author list, truncated to `max_authors` with ", et al."
    ///
    /// Lists of `max_authors` or fewer are returned in full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pubmed_lookup::Publication;
    /// # let mut publication = Publication::default();
    /// publication.authors = vec!["A".into(), "B".into(), "C".into()];
    /// assert_eq!(publication.authors_et_al(2), "A, B, et al.");
    /// assert_eq!(publication.authors_et_al(3), "A, B, C");
    /// ```
    pub fn authors_et_al(&self, max_authors: usize) -> String {
        if self.authors.len() <= max_authors {
            self.authors.join(", ")
        } else {
            format!("{}, et al.", self.authors[..max_authors].join(", "))
        }
    }

    /// Full citation with the default author truncation
    pub fn cite(&self) -> String {
        self.cite_with_max_authors(DEFAULT_MAX_AUTHORS)
    }

    /// Full citation, truncating the author list to `max_authors`
    ///
    /// Renders `"{authors} ({year}). {title} {journal}"` followed by exactly
    /// one volume/issue/pages suffix; an issue without a volume is never
    /// rendered.
    pub fn cite_with_max_authors(&self, max_authors: usize) -> String {
        let mut citation = format!(
            "{} ({}). {} {}",
            self.authors_et_al(max_authors),
            self.year,
            self.title,
            self.journal
        );

        let has_volume = !self.volume.is_empty();
        let has_issue = !self.issue.is_empty();
        let has_pages = !self.pages.is_empty();

        if has_volume && has_issue && has_pages {
            citation.push_str(&format!(" {}({}): {}.", self.volume, self.issue, self.pages));
        } else if has_volume && has_issue {
            citation.push_str(&format!(" {}({}).", self.volume, self.issue));
        } else if has_volume && has_pages {
            citation.push_str(&format!(" {}: {}.", self.volume, self.pages));
        } else if has_volume {
            citation.push_str(&format!(" {}.", self.volume));
        } else if has_pages {
            citation.push_str(&format!(" {}.", self.pages));
        } else {
            citation.push('.');
        }

        citation
    }

    /// Mini citation: `"{first} - {last} - {year} - {journal}"`
    ///
    /// The last-author segment is omitted when the record has a single
    /// author.
    pub fn cite_mini(&self) -> String {
        let mut segments = vec![self.first_author.as_str()];

        if self.authors.len() > 1 {
            segments.push(self.last_author.as_str());
        }

        segments.push(self.year.as_str());
        segments.push(self.journal.as_str());

        segments.join(" - ")
    }
}

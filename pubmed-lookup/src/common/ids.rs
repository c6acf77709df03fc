//! Identifier validation for PubMed lookups
//!
//! A lookup query is either a bare PMID digit string or a PubMed article URL
//! whose path encodes the digits. This module provides the validated
//! [`PubMedId`] type and the query resolution used by the record locator.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PubMedError, Result};

/// A validated PubMed ID (PMID)
///
/// PMIDs are numeric identifiers for articles in the PubMed database.
///
/// # Examples
///
/// ```
/// use pubmed_lookup::PubMedId;
///
/// let pmid = PubMedId::parse("31978945").unwrap();
/// assert_eq!(pmid.as_u32(), 31978945);
///
/// // Resolve from an article URL
/// let pmid = PubMedId::from_query("https://pubmed.ncbi.nlm.nih.gov/31978945/").unwrap();
/// assert_eq!(pmid.as_u32(), 31978945);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PubMedId {
    value: u32,
}

/// Matches the current and legacy PubMed article URL forms, capturing the PMID
fn pubmed_url_regex() -> &'static Regex {
    static PUBMED_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    PUBMED_URL_REGEX.get_or_init(|| {
        Regex::new(
            r"^https?://(?:pubmed\.ncbi\.nlm\.nih\.gov|www\.ncbi\.nlm\.nih\.gov/pubmed)/(\d+)/?$",
        )
        .expect("Failed to compile PubMed URL regex")
    })
}

impl PubMedId {
    /// Parse a PMID from a digit string
    ///
    /// The input is trimmed of whitespace.
    ///
    /// # Errors
    ///
    /// Returns `PubMedError::InvalidPmid` if the string is empty, contains
    /// non-numeric characters, is zero, or does not fit in a u32.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubmed_lookup::PubMedId;
    ///
    /// assert_eq!(PubMedId::parse("31978945").unwrap().as_u32(), 31978945);
    /// assert!(PubMedId::parse("abc").is_err());
    /// assert!(PubMedId::parse("0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(PubMedError::InvalidPmid {
                pmid: s.to_string(),
            });
        }

        let value = trimmed
            .parse::<u32>()
            .map_err(|_| PubMedError::InvalidPmid {
                pmid: s.to_string(),
            })?;

        // PMIDs are positive
        if value == 0 {
            return Err(PubMedError::InvalidPmid {
                pmid: s.to_string(),
            });
        }

        Ok(Self { value })
    }

    /// Resolve a user query into a PMID
    ///
    /// Accepts either a bare digit string or a PubMed article URL, in its
    /// current (`https://pubmed.ncbi.nlm.nih.gov/<pmid>/`) or legacy
    /// (`https://www.ncbi.nlm.nih.gov/pubmed/<pmid>`) form.
    ///
    /// # Errors
    ///
    /// Returns `PubMedError::InvalidQuery` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubmed_lookup::PubMedId;
    ///
    /// let a = PubMedId::from_query("12831818").unwrap();
    /// let b = PubMedId::from_query("https://pubmed.ncbi.nlm.nih.gov/12831818").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(PubMedId::from_query("not a valid query").is_err());
    /// ```
    pub fn from_query(query: &str) -> Result<Self> {
        let trimmed = query.trim();

        if trimmed.chars().all(|c| c.is_ascii_digit()) && !trimmed.is_empty() {
            return Self::parse(trimmed).map_err(|_| PubMedError::InvalidQuery {
                query: query.to_string(),
            });
        }

        match pubmed_url_regex().captures(trimmed) {
            Some(captures) => {
                Self::parse(&captures[1]).map_err(|_| PubMedError::InvalidQuery {
                    query: query.to_string(),
                })
            }
            None => Err(PubMedError::InvalidQuery {
                query: query.to_string(),
            }),
        }
    }

    /// Get the PMID as a u32
    pub fn as_u32(&self) -> u32 {
        self.value
    }

    /// The canonical PubMed article URL for this PMID
    ///
    /// # Examples
    ///
    /// ```
    /// use pubmed_lookup::PubMedId;
    ///
    /// let pmid = PubMedId::parse("12831818").unwrap();
    /// assert_eq!(pmid.article_url(), "https://pubmed.ncbi.nlm.nih.gov/12831818/");
    /// ```
    pub fn article_url(&self) -> String {
        format!("https://pubmed.ncbi.nlm.nih.gov/{}/", self.value)
    }
}

impl fmt::Display for PubMedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for PubMedId {
    type Err = PubMedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PubMedId> for u32 {
    fn from(pmid: PubMedId) -> Self {
        pmid.value
    }
}

//! XML preprocessing before deserialization

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Strip inline HTML-like formatting tags from XML content
///
/// Abstracts and titles may contain `<i>`, `<sup>`, `<sub>` and friends,
/// which turn element text into mixed content and break quick-xml's serde
/// deserializer. The tags carry no citation-relevant information, so they
/// are removed wholesale before parsing.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original = xml.len(),
            cleaned = cleaned.len(),
            "Stripped inline HTML tags from XML"
        );
    }

    cleaned.into_owned()
}

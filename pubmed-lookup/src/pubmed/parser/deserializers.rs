//! Custom serde deserialization for abstract sections
//!
//! `AbstractText` elements come in three shapes: bare text, a labeled section
//! (`<AbstractText Label="METHODS">...</AbstractText>`), or a run of labeled
//! sections. quick-xml presents the bare form as a string and the attributed
//! form as a map with `@Label` and `$text` keys, so a single derived struct
//! cannot cover both; this visitor handles all of them.

use std::fmt;
use std::result;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One abstract section with its optional label
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AbstractSection {
    pub label: Option<String>,
    pub text: String,
}

impl AbstractSection {
    /// Render the section the way citations display it: `"Label: text"` when
    /// labeled, bare text otherwise.
    pub fn render(&self) -> String {
        match &self.label {
            Some(label) => format!("{}: {}", label, self.text),
            None => self.text.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for AbstractSection {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AbstractSectionVisitor;

        impl<'de> Visitor<'de> for AbstractSectionVisitor {
            type Value = AbstractSection;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("abstract text content")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<AbstractSection, E>
            where
                E: de::Error,
            {
                Ok(AbstractSection {
                    label: None,
                    text: value.to_string(),
                })
            }

            fn visit_string<E>(self, value: String) -> result::Result<AbstractSection, E>
            where
                E: de::Error,
            {
                Ok(AbstractSection {
                    label: None,
                    text: value,
                })
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<AbstractSection, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut text_parts = Vec::new();
                let mut label = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$text" || key == "$value" {
                        let value: String = map.next_value()?;
                        text_parts.push(value);
                    } else if key == "@Label" {
                        let value: String = map.next_value()?;
                        label = Some(value);
                    } else {
                        // Skip other attributes like @NlmCategory
                        let _: de::IgnoredAny = map.next_value()?;
                    }
                }
                Ok(AbstractSection {
                    label,
                    text: text_parts.join(""),
                })
            }
        }

        deserializer.deserialize_any(AbstractSectionVisitor)
    }
}

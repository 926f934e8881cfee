// ABOUTME: Typed iTunes podcast extension captured from itunes-namespaced elements.
// ABOUTME: Reads and writes author, subtitle, summary, duration, explicit, image, and keywords.

use crate::duration_parse::parse_duration_seconds;
use crate::error::Result;
use crate::text::normalize;
use crate::xml::{XmlNode, XmlWriter};

pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
const ITUNES_PREFIX: &str = "itunes";
const MODELLED: [&str; 7] = [
    "author", "subtitle", "summary", "duration", "explicit", "image", "keywords",
];

/// iTunes metadata attached to a channel or an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItunesExtension {
    pub author: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    /// Raw itunes:duration text; see `duration_seconds`.
    pub duration: Option<String>,
    /// Raw itunes:explicit text; see `is_explicit`.
    pub explicit: Option<String>,
    /// itunes:image href attribute.
    pub image_href: Option<String>,
    pub keywords: Vec<String>,
}

impl ItunesExtension {
    /// True for the itunes elements this record holds. Any other itunes
    /// element (category, owner, episode, ...) is kept as a verbatim extension.
    pub fn models(name: &str) -> bool {
        MODELLED.contains(&name)
    }

    /// Collects the modelled itunes children of `parent`. Returns None when there are none.
    pub fn from_node(parent: &XmlNode) -> Option<Self> {
        let mut ext = ItunesExtension::default();
        let mut found = false;

        for child in parent.elements() {
            if child.namespace() != Some(ITUNES_NAMESPACE) || !Self::models(child.name()) {
                continue;
            }
            found = true;
            match child.name() {
                "author" => ext.author = child.value(),
                "subtitle" => ext.subtitle = child.value(),
                "summary" => ext.summary = child.value(),
                "duration" => ext.duration = child.value(),
                "explicit" => ext.explicit = child.value(),
                "image" => ext.image_href = child.attribute("href").and_then(normalize),
                "keywords" => {
                    ext.keywords = child
                        .value()
                        .map(|v| v.split(',').filter_map(normalize).collect())
                        .unwrap_or_default()
                }
                _ => {}
            }
        }

        found.then_some(ext)
    }

    /// Duration in seconds, None if absent or malformed.
    pub fn duration_seconds(&self) -> Option<u32> {
        self.duration.as_deref().and_then(parse_duration_seconds)
    }

    /// True for case-insensitive "yes", "true" or "explicit".
    pub fn is_explicit(&self) -> bool {
        self.explicit
            .as_deref()
            .map(|v| {
                let lower = v.to_lowercase();
                lower == "yes" || lower == "true" || lower == "explicit"
            })
            .unwrap_or(false)
    }

    pub fn write_to(&self, writer: &mut XmlWriter) -> Result<()> {
        let texts = [
            ("author", self.author.as_deref()),
            ("subtitle", self.subtitle.as_deref()),
            ("summary", self.summary.as_deref()),
            ("duration", self.duration.as_deref()),
            ("explicit", self.explicit.as_deref()),
        ];
        for (name, value) in texts {
            if let Some(value) = value {
                writer.start_element_ns(Some(ITUNES_PREFIX), name, ITUNES_NAMESPACE)?;
                writer.write_text(value)?;
                writer.end_element()?;
            }
        }
        if let Some(ref href) = self.image_href {
            writer.start_element_ns(Some(ITUNES_PREFIX), "image", ITUNES_NAMESPACE)?;
            writer.write_attribute("href", href)?;
            writer.end_element()?;
        }
        if !self.keywords.is_empty() {
            writer.start_element_ns(Some(ITUNES_PREFIX), "keywords", ITUNES_NAMESPACE)?;
            writer.write_text(&self.keywords.join(","))?;
            writer.end_element()?;
        }
        Ok(())
    }
}

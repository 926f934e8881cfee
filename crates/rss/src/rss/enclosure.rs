// ABOUTME: RSS <enclosure> entity: a media object attached to an item.
// ABOUTME: Carries url, byte length, and MIME type as attributes.

use std::cmp::Ordering;

use super::{LoadContext, RssEntity};
use crate::compare::compare_option;
use crate::error::{Result, SyndicationError};
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize, parse_number};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter};

/// `<enclosure url="..." length="12216320" type="audio/mpeg"/>`
#[derive(Debug, Clone, Default)]
pub struct RssEnclosure {
    url: Option<Uri>,
    length: Option<u64>,
    content_type: Option<String>,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssEnclosure {
    pub fn new(url: Uri, length: u64, content_type: &str) -> Result<Self> {
        let mut enclosure = Self {
            url: Some(url),
            length: Some(length),
            ..Self::default()
        };
        enclosure.set_content_type(content_type)?;
        Ok(enclosure)
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn set_url(&mut self, url: Uri) {
        self.url = Some(url);
    }

    /// Size in bytes, None when unknown.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    pub fn set_length(&mut self, length: u64) {
        self.length = Some(length);
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn set_content_type(&mut self, content_type: &str) -> Result<()> {
        self.content_type = Some(normalize(content_type).ok_or(SyndicationError::empty("type"))?);
        Ok(())
    }
}

impl RssEntity for RssEnclosure {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(raw) = node.attribute("length") {
            match parse_number::<u64>(raw) {
                Some(length) => {
                    self.length = Some(length);
                    loaded = true;
                }
                None => tracing::warn!(value = raw, "skipping unparsable enclosure length"),
            }
        }
        if let Some(raw) = node.attribute("type") {
            if self.set_content_type(raw).is_ok() {
                loaded = true;
            }
        }
        if let Some(raw) = node.attribute("url") {
            match Uri::parse(raw) {
                Ok(url) => {
                    self.url = Some(url);
                    loaded = true;
                }
                Err(e) => tracing::warn!(error = %e, "skipping enclosure url"),
            }
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("enclosure")?;
        if let Some(ref url) = self.url {
            writer.write_attribute("url", url.as_str())?;
        }
        if let Some(length) = self.length {
            writer.write_attribute("length", &length.to_string())?;
        }
        if let Some(ref content_type) = self.content_type {
            writer.write_attribute("type", content_type)?;
        }
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssEnclosure {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.content_type.as_deref(), other.content_type.as_deref())
            .then_with(|| compare_option(self.length.as_ref(), other.length.as_ref(), u64::cmp))
            .then_with(|| compare_opt(self.url.as_ref(), other.url.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let node = XmlNode::parse_str(
            r#"<enclosure url="http://www.scripting.com/mp3s/weatherReportSuite.mp3" length="12216320" type="audio/mpeg"/>"#,
        )
        .unwrap();
        let mut enclosure = RssEnclosure::default();
        assert!(enclosure.load(&node));
        assert_eq!(enclosure.length(), Some(12216320));
        assert_eq!(enclosure.content_type(), Some("audio/mpeg"));
        assert!(enclosure.url().unwrap().is_absolute());
    }

    #[test]
    fn test_load_skips_bad_length() {
        let node = XmlNode::parse_str(
            r#"<enclosure url="a.mp3" length="-5" type="audio/mpeg"/>"#,
        )
        .unwrap();
        let mut enclosure = RssEnclosure::default();
        assert!(enclosure.load(&node));
        assert_eq!(enclosure.length(), None);
        assert_eq!(enclosure.url().unwrap().as_str(), "a.mp3");
    }

    #[test]
    fn test_content_type_required() {
        let mut enclosure = RssEnclosure::default();
        let err = enclosure.set_content_type("  ").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_round_trip() {
        let enclosure =
            RssEnclosure::new(Uri::parse("https://cdn/show.mp3").unwrap(), 12345, "audio/mpeg")
                .unwrap();
        let xml = enclosure.to_xml_string().unwrap();
        let mut loaded = RssEnclosure::default();
        assert!(loaded.load(&XmlNode::parse_str(&xml).unwrap()));
        assert_eq!(loaded, enclosure);
    }
}

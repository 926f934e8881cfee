// ABOUTME: RSS <image> entity: the GIF/JPEG/PNG displayed with a channel.
// ABOUTME: Enforces the RSS dimension maxima, clamping on load and rejecting on set.

use std::cmp::Ordering;

use super::{write_optional, LoadContext, RssEntity};
use crate::compare::compare_option;
use crate::error::{Result, SyndicationError};
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize, parse_number};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter};

/// A channel image.
///
/// Height and width are optional; readers assume the RSS defaults of
/// 31 by 88 pixels when they are absent.
#[derive(Debug, Clone, Default)]
pub struct RssImage {
    url: Option<Uri>,
    title: Option<String>,
    link: Option<Uri>,
    description: Option<String>,
    height: Option<u32>,
    width: Option<u32>,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssImage {
    pub const HEIGHT_DEFAULT: u32 = 31;
    pub const HEIGHT_MAXIMUM: u32 = 400;
    pub const WIDTH_DEFAULT: u32 = 88;
    pub const WIDTH_MAXIMUM: u32 = 144;

    pub fn new(link: Uri, title: &str, url: Uri) -> Result<Self> {
        let mut image = Self {
            link: Some(link),
            url: Some(url),
            ..Self::default()
        };
        image.set_title(title)?;
        Ok(image)
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn set_url(&mut self, url: Uri) {
        self.url = Some(url);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(normalize(title).ok_or(SyndicationError::empty("title"))?);
        Ok(())
    }

    /// Site the image links to when rendered.
    pub fn link(&self) -> Option<&Uri> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Uri) {
        self.link = Some(link);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = normalize(description);
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Rejects heights above `HEIGHT_MAXIMUM`.
    pub fn set_height(&mut self, height: u32) -> Result<()> {
        self.height = Some(check_dimension("height", height, Self::HEIGHT_MAXIMUM)?);
        Ok(())
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Rejects widths above `WIDTH_MAXIMUM`.
    pub fn set_width(&mut self, width: u32) -> Result<()> {
        self.width = Some(check_dimension("width", width, Self::WIDTH_MAXIMUM)?);
        Ok(())
    }
}

fn check_dimension(field: &'static str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(SyndicationError::OutOfRange {
            field,
            value: u64::from(value),
            max: u64::from(max),
        });
    }
    Ok(value)
}

fn load_dimension(node: &XmlNode, name: &str, max: u32) -> Option<u32> {
    let raw = node.child_value(name)?;
    match parse_number::<u64>(&raw) {
        Some(value) if value > u64::from(max) => {
            tracing::warn!(element = name, value, max, "clamping image dimension");
            Some(max)
        }
        Some(value) => u32::try_from(value).ok(),
        None => {
            tracing::warn!(element = name, value = %raw, "skipping unparsable image dimension");
            None
        }
    }
}

impl RssEntity for RssImage {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(url) = node.child_value("url").and_then(|v| Uri::parse(&v).ok()) {
            self.url = Some(url);
            loaded = true;
        }
        if let Some(title) = node.child_value("title") {
            self.title = Some(title);
            loaded = true;
        }
        if let Some(link) = node.child_value("link").and_then(|v| Uri::parse(&v).ok()) {
            self.link = Some(link);
            loaded = true;
        }
        if let Some(description) = node.child_value("description") {
            self.description = Some(description);
            loaded = true;
        }
        if let Some(height) = load_dimension(node, "height", Self::HEIGHT_MAXIMUM) {
            self.height = Some(height);
            loaded = true;
        }
        if let Some(width) = load_dimension(node, "width", Self::WIDTH_MAXIMUM) {
            self.width = Some(width);
            loaded = true;
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("image")?;
        write_optional(writer, "url", self.url.as_ref().map(Uri::as_str))?;
        write_optional(writer, "title", self.title.as_deref())?;
        write_optional(writer, "link", self.link.as_ref().map(Uri::as_str))?;
        write_optional(writer, "description", self.description.as_deref())?;
        write_optional(writer, "height", self.height.map(|h| h.to_string()))?;
        write_optional(writer, "width", self.width.map(|w| w.to_string()))?;
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssImage {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.title.as_deref(), other.title.as_deref())
            .then_with(|| compare_opt(self.url.as_ref(), other.url.as_ref()))
            .then_with(|| compare_opt(self.link.as_ref(), other.link.as_ref()))
            .then_with(|| {
                compare_opt_ignore_case(self.description.as_deref(), other.description.as_deref())
            })
            .then_with(|| compare_option(self.height.as_ref(), other.height.as_ref(), u32::cmp))
            .then_with(|| compare_option(self.width.as_ref(), other.width.as_ref(), u32::cmp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_clamps_dimensions() {
        let node = XmlNode::parse_str(
            "<image><url>logo.png</url><height>999</height><width>500</width></image>",
        )
        .unwrap();
        let mut image = RssImage::default();
        assert!(image.load(&node));
        assert_eq!(image.height(), Some(RssImage::HEIGHT_MAXIMUM));
        assert_eq!(image.width(), Some(RssImage::WIDTH_MAXIMUM));
    }

    #[test]
    fn test_load_clamps_values_beyond_u32() {
        let node = XmlNode::parse_str(
            "<image><height>99999999999</height><width>18446744073709551615</width></image>",
        )
        .unwrap();
        let mut image = RssImage::default();
        assert!(image.load(&node));
        assert_eq!(image.height(), Some(RssImage::HEIGHT_MAXIMUM));
        assert_eq!(image.width(), Some(RssImage::WIDTH_MAXIMUM));
    }

    #[test]
    fn test_setter_rejects_oversize() {
        let mut image = RssImage::default();
        let err = image.set_height(999).unwrap_err();
        assert!(matches!(
            err,
            SyndicationError::OutOfRange {
                field: "height",
                value: 999,
                max: 400
            }
        ));
        assert!(image.set_width(145).is_err());
        assert!(image.set_width(144).is_ok());
        assert_eq!(image.height(), None);
    }

    #[test]
    fn test_load_skips_garbage_dimension() {
        let node = XmlNode::parse_str("<image><height>tall</height></image>").unwrap();
        let mut image = RssImage::default();
        assert!(!image.load(&node));
        assert_eq!(image.height(), None);
    }

    #[test]
    fn test_title_required() {
        let mut image = RssImage::default();
        assert!(image.set_title("").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut image = RssImage::new(
            Uri::parse("http://example.com").unwrap(),
            "Example",
            Uri::parse("http://example.com/logo.gif").unwrap(),
        )
        .unwrap();
        image.set_description("Logo");
        image.set_height(32).unwrap();

        let xml = image.to_xml_string().unwrap();
        let mut loaded = RssImage::default();
        assert!(loaded.load(&XmlNode::parse_str(&xml).unwrap()));
        assert_eq!(loaded, image);
        assert!(xml.find("<url>").unwrap() < xml.find("<title>").unwrap());
    }
}

// ABOUTME: RSS <guid> entity: the string that uniquely identifies an item.
// ABOUTME: Tracks whether the identifier is also a permalink to the item.

use std::cmp::Ordering;

use super::{LoadContext, RssEntity};
use crate::error::{Result, SyndicationError};
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_ignore_case, normalize};
use crate::xml::{XmlNode, XmlWriter};

/// `<guid isPermaLink="false">urn:uuid:...</guid>`
#[derive(Debug, Clone)]
pub struct RssGuid {
    value: String,
    is_permalink: bool,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl Default for RssGuid {
    fn default() -> Self {
        Self {
            value: String::new(),
            is_permalink: true,
            extensions: Vec::new(),
        }
    }
}

impl RssGuid {
    pub fn new(value: &str, is_permalink: bool) -> Result<Self> {
        let mut guid = Self {
            is_permalink,
            ..Self::default()
        };
        guid.set_value(value)?;
        Ok(guid)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) -> Result<()> {
        self.value = normalize(value).ok_or(SyndicationError::empty("guid"))?;
        Ok(())
    }

    /// True when the value is a URL pointing at the full item. Defaults to true.
    pub fn is_permalink(&self) -> bool {
        self.is_permalink
    }

    pub fn set_permalink(&mut self, is_permalink: bool) {
        self.is_permalink = is_permalink;
    }
}

impl RssEntity for RssGuid {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(raw) = node.attribute("isPermaLink") {
            match raw.trim().to_lowercase().as_str() {
                "true" => self.is_permalink = true,
                "false" => self.is_permalink = false,
                other => tracing::warn!(value = other, "skipping invalid isPermaLink"),
            }
        }
        if let Some(value) = node.value() {
            self.value = value;
            loaded = true;
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("guid")?;
        if !self.is_permalink {
            writer.write_attribute("isPermaLink", "false")?;
        }
        writer.write_text(&self.value)?;
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssGuid {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.value, &other.value)
            .then_with(|| self.is_permalink.cmp(&other.is_permalink))
    }
}

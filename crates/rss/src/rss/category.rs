// ABOUTME: RSS <category> entity: a taxonomy value with an optional domain.
// ABOUTME: Shared by channels and items.

use std::cmp::Ordering;

use super::{LoadContext, RssEntity};
use crate::error::Result;
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::compare_ignore_case;
use crate::xml::{XmlNode, XmlWriter};

/// A category value, e.g. `<category domain="Syndic8">1765</category>`.
#[derive(Debug, Clone, Default)]
pub struct RssCategory {
    value: String,
    domain: String,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssCategory {
    pub fn new(value: &str) -> Self {
        let mut category = Self::default();
        category.set_value(value);
        category
    }

    pub fn with_domain(value: &str, domain: &str) -> Self {
        let mut category = Self::new(value);
        category.set_domain(domain);
        category
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.trim().to_string();
    }

    /// Taxonomy the value belongs to; empty when unspecified.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn set_domain(&mut self, domain: &str) {
        self.domain = domain.trim().to_string();
    }
}

impl RssEntity for RssCategory {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(domain) = node.attribute("domain").filter(|d| !d.trim().is_empty()) {
            self.set_domain(domain);
            loaded = true;
        }
        if let Some(value) = node.value() {
            self.set_value(&value);
            loaded = true;
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("category")?;
        if !self.domain.is_empty() {
            writer.write_attribute("domain", &self.domain)?;
        }
        if !self.value.is_empty() {
            writer.write_text(&self.value)?;
        }
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.value, &other.value)
            .then_with(|| compare_ignore_case(&self.domain, &other.domain))
    }
}

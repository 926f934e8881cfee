// ABOUTME: RSS <source> entity: the channel an item was republished from.
// ABOUTME: Holds the source feed url and its title.

use std::cmp::Ordering;

use super::{LoadContext, RssEntity};
use crate::error::Result;
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter};

/// `<source url="http://www.tomalak.org/links2.xml">Tomalak's Realm</source>`
#[derive(Debug, Clone, Default)]
pub struct RssSource {
    url: Option<Uri>,
    title: Option<String>,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssSource {
    pub fn new(url: Uri, title: &str) -> Self {
        Self {
            url: Some(url),
            title: normalize(title),
            ..Self::default()
        }
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

    pub fn set_title(&mut self, title: &str) {
        self.title = normalize(title);
    }
}

impl RssEntity for RssSource {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(raw) = node.attribute("url") {
            match Uri::parse(raw) {
                Ok(url) => {
                    self.url = Some(url);
                    loaded = true;
                }
                Err(e) => tracing::warn!(error = %e, "skipping source url"),
            }
        }
        if let Some(title) = node.value() {
            self.title = Some(title);
            loaded = true;
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("source")?;
        if let Some(ref url) = self.url {
            writer.write_attribute("url", url.as_str())?;
        }
        if let Some(ref title) = self.title {
            writer.write_text(title)?;
        }
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssSource {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.title.as_deref(), other.title.as_deref())
            .then_with(|| compare_opt(self.url.as_ref(), other.url.as_ref()))
    }
}

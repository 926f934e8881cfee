// ABOUTME: RSS document wrapper: the <rss version="2.0"> root around a single channel.
// ABOUTME: Entry point for parsing whole documents and writing them with a declaration.

use std::fmt;

use super::{LoadContext, RssChannel, RssEntity};
use crate::error::{Result, SyndicationError};
use crate::extensions::{Extensible, ExtensionAdapter, NamespaceExtensionAdapter};
use crate::settings::SyndicationSettings;
use crate::xml::{XmlNode, XmlWriter, ATOM_NAMESPACE};

/// A complete RSS document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RssFeed {
    version: String,
    channel: RssChannel,
}

impl Default for RssFeed {
    fn default() -> Self {
        Self::new(RssChannel::default())
    }
}

impl RssFeed {
    pub const VERSION: &'static str = "2.0";

    pub fn new(channel: RssChannel) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            channel,
        }
    }

    /// Version attribute of the root element as read, "2.0" for new feeds.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn channel(&self) -> &RssChannel {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut RssChannel {
        &mut self.channel
    }

    pub fn into_channel(self) -> RssChannel {
        self.channel
    }

    /// Parses a document without capturing extensions or limiting items.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let root = XmlNode::parse_str(xml)?;
        Self::from_node(&root, None)
    }

    pub fn parse_str_with_settings(xml: &str, settings: &SyndicationSettings) -> Result<Self> {
        Self::parse_str_with(xml, settings, &NamespaceExtensionAdapter)
    }

    pub fn parse_str_with(
        xml: &str,
        settings: &SyndicationSettings,
        adapter: &dyn ExtensionAdapter,
    ) -> Result<Self> {
        let root = XmlNode::parse_str(xml)?;
        Self::from_node(&root, Some(&LoadContext { settings, adapter }))
    }

    /// Builds a feed from an `<rss>` root, or from a bare `<channel>` root.
    pub fn from_node(root: &XmlNode, ctx: Option<&LoadContext<'_>>) -> Result<Self> {
        let mut feed = Self::default();
        if !feed.read(root, ctx)? {
            tracing::warn!("channel element contained no recognized data");
        }
        Ok(feed)
    }

    /// Loads `root` into this feed. False when the root is not an RSS
    /// document or nothing in the channel was recognized.
    pub fn load(&mut self, root: &XmlNode) -> bool {
        self.read(root, None).unwrap_or(false)
    }

    pub fn load_with_settings(&mut self, root: &XmlNode, settings: &SyndicationSettings) -> bool {
        let ctx = LoadContext {
            settings,
            adapter: &NamespaceExtensionAdapter,
        };
        self.read(root, Some(&ctx)).unwrap_or(false)
    }

    fn read(&mut self, root: &XmlNode, ctx: Option<&LoadContext<'_>>) -> Result<bool> {
        let (version, channel_node) = match root.name() {
            "rss" if root.namespace().is_none() => {
                let channel = root
                    .child("channel")
                    .ok_or_else(|| SyndicationError::parse("<rss> has no <channel> element"))?;
                let version = root
                    .attribute("version")
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .unwrap_or(Self::VERSION);
                (version.to_string(), channel)
            }
            "channel" if root.namespace().is_none() => (Self::VERSION.to_string(), root),
            other => {
                return Err(SyndicationError::parse(format!(
                    "unexpected root element <{}>",
                    other
                )))
            }
        };

        if version != Self::VERSION {
            tracing::debug!(version = %version, "reading rss document with non-2.0 version");
        }

        let mut channel = RssChannel::default();
        let loaded = channel.read(channel_node, ctx);
        self.version = version;
        self.channel = channel;
        Ok(loaded)
    }

    pub fn write_to(&self, writer: &mut XmlWriter) -> Result<()> {
        self.write_with(writer, &NamespaceExtensionAdapter)
    }

    /// Writes `<rss>` with every namespace the channel and its items use
    /// declared on the root.
    pub fn write_with(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("rss")?;
        writer.write_attribute("version", &self.version)?;
        if self.channel.self_link().is_some() {
            writer.declare_namespace(Some("atom"), ATOM_NAMESPACE)?;
        }
        if writer.emits_extensions() {
            let channel_exts = self.channel.extensions().iter();
            let item_exts = self.channel.items().iter().flat_map(|i| i.extensions());
            let mut declared: Vec<&str> = Vec::new();
            for ext in channel_exts.chain(item_exts) {
                let (Some(prefix), Some(ns)) = (ext.prefix(), ext.namespace()) else {
                    continue;
                };
                if declared.contains(&ns) || (prefix == "atom" && ns == ATOM_NAMESPACE) {
                    continue;
                }
                declared.push(ns);
                writer.declare_namespace(Some(prefix), ns)?;
            }
        }
        self.channel.write(writer, adapter)?;
        writer.end_element()
    }

    /// Full document including the XML declaration.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = XmlWriter::new();
        writer.write_declaration()?;
        self.write_to(&mut writer)?;
        writer.finish()
    }
}

impl fmt::Display for RssFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml_string().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

// ABOUTME: RSS 2.0 object model: channel, item, and their leaf entities.
// ABOUTME: Defines the RssEntity load/write contract shared by every entity.

mod category;
mod channel;
mod cloud;
mod enclosure;
mod feed;
mod guid;
mod image;
mod item;
mod source;
mod text_input;

pub use category::RssCategory;
pub use channel::RssChannel;
pub use cloud::{CloudProtocol, RssCloud};
pub use enclosure::RssEnclosure;
pub use feed::RssFeed;
pub use guid::RssGuid;
pub use image::RssImage;
pub use item::RssItem;
pub use source::RssSource;
pub use text_input::RssTextInput;

use crate::error::Result;
use crate::extensions::{Extensible, ExtensionAdapter, NamespaceExtensionAdapter};
use crate::settings::SyndicationSettings;
use crate::xml::{XmlNode, XmlWriter};

/// Settings and adapter threaded through a load so nested entities get
/// their own extensions filled.
#[derive(Clone, Copy)]
pub struct LoadContext<'a> {
    pub settings: &'a SyndicationSettings,
    pub adapter: &'a dyn ExtensionAdapter,
}

impl<'a> LoadContext<'a> {
    pub fn fill(&self, entity: &mut dyn Extensible, node: &XmlNode) {
        self.adapter.fill(entity, node, self.settings);
    }
}

/// Load and serialize contract of every RSS entity.
///
/// Loading never fails: fields that are missing or malformed are simply left
/// unset, and the return value tells whether anything was recognized.
pub trait RssEntity: Extensible + Sized {
    /// Reads known fields from `node`. With a context, extensions are filled too.
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool;

    /// Writes the entity element, children in schema order, extensions last.
    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()>;

    fn load(&mut self, node: &XmlNode) -> bool {
        self.read(node, None)
    }

    fn load_with_settings(&mut self, node: &XmlNode, settings: &SyndicationSettings) -> bool {
        self.load_with(node, settings, &NamespaceExtensionAdapter)
    }

    fn load_with(
        &mut self,
        node: &XmlNode,
        settings: &SyndicationSettings,
        adapter: &dyn ExtensionAdapter,
    ) -> bool {
        self.read(node, Some(&LoadContext { settings, adapter }))
    }

    fn write_to(&self, writer: &mut XmlWriter) -> Result<()> {
        self.write(writer, &NamespaceExtensionAdapter)
    }

    /// Indented XML fragment for this entity.
    fn to_xml_string(&self) -> Result<String> {
        let mut writer = XmlWriter::new();
        self.write_to(&mut writer)?;
        writer.finish()
    }

    /// Compact, extension-free form used for hashing.
    fn canonical_xml(&self) -> String {
        let mut writer = XmlWriter::canonical();
        match self.write(&mut writer, &NamespaceExtensionAdapter) {
            Ok(()) => writer.finish().unwrap_or_default(),
            Err(_) => String::new(),
        }
    }
}

/// Writes `<name>value</name>` when the value is present.
pub(crate) fn write_optional(
    writer: &mut XmlWriter,
    name: &str,
    value: Option<impl AsRef<str>>,
) -> Result<()> {
    match value {
        Some(v) => writer.write_element(name, v.as_ref()),
        None => Ok(()),
    }
}

/// Equality, ordering, hashing and `Display` derived from the entity's `Ord`
/// implementation and its serialized form. Extensions take no part in
/// equality or hashing.
macro_rules! value_semantics {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == std::cmp::Ordering::Equal
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                crate::compare::hash_folded(&crate::rss::RssEntity::canonical_xml(self), state);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let xml = crate::rss::RssEntity::to_xml_string(self).map_err(|_| std::fmt::Error)?;
                f.write_str(&xml)
            }
        }

    )+};
}

/// Plain `Extensible` over an `extensions` field.
macro_rules! extension_bag {
    ($($ty:ty),+ $(,)?) => {$(
        impl Extensible for $ty {
            fn extensions(&self) -> &[crate::extensions::SyndicationExtension] {
                &self.extensions
            }

            fn extensions_mut(&mut self) -> &mut Vec<crate::extensions::SyndicationExtension> {
                &mut self.extensions
            }
        }
    )+};
}

value_semantics!(
    RssCategory,
    RssChannel,
    RssCloud,
    RssEnclosure,
    RssGuid,
    RssImage,
    RssItem,
    RssSource,
    RssTextInput,
);

extension_bag!(
    RssCategory,
    RssCloud,
    RssEnclosure,
    RssGuid,
    RssImage,
    RssItem,
    RssSource,
    RssTextInput,
);

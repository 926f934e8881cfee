// ABOUTME: RSS 2.0 document object model for digests.
// ABOUTME: Loads, compares, and writes channels, items, and their parts with extension support.

pub mod compare;
pub mod duration_parse;
pub mod error;
pub mod extensions;
pub mod rss;
pub mod settings;
pub mod text;
pub mod time_parse;
pub mod uri;
pub mod xml;

pub use compare::{compare_option, compare_ord_sequence, compare_sequence};
pub use duration_parse::{format_duration, parse_duration_seconds};
pub use error::{Result, SyndicationError};
pub use extensions::{
    Extensible, ExtensionAdapter, ItunesExtension, NamespaceExtensionAdapter,
    SyndicationExtension, ITUNES_NAMESPACE,
};
pub use rss::{
    CloudProtocol, LoadContext, RssCategory, RssChannel, RssCloud, RssEnclosure, RssEntity,
    RssFeed, RssGuid, RssImage, RssItem, RssSource, RssTextInput,
};
pub use settings::SyndicationSettings;
pub use text::LanguageTag;
pub use time_parse::{format_rfc822, parse_rfc822};
pub use uri::Uri;
pub use xml::{XmlContent, XmlNode, XmlWriter, ATOM_NAMESPACE};

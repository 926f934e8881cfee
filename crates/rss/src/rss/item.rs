// ABOUTME: RSS <item> entity: a story, post, or episode within a channel.
// ABOUTME: Aggregates guid, source, categories, and enclosures alongside the scalar fields.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::{
    write_optional, LoadContext, RssCategory, RssEnclosure, RssEntity, RssGuid, RssSource,
};
use crate::compare::{compare_option, compare_sequence};
use crate::error::Result;
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize};
use crate::time_parse::{format_rfc822, parse_rfc822};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter};

/// A channel item.
///
/// RSS requires at least a title or a description. The model does not
/// enforce this; `has_title_or_description` lets callers check before
/// publishing.
#[derive(Debug, Clone, Default)]
pub struct RssItem {
    title: Option<String>,
    link: Option<Uri>,
    description: Option<String>,
    author: Option<String>,
    comments: Option<Uri>,
    guid: Option<RssGuid>,
    pub_date: Option<DateTime<Utc>>,
    source: Option<RssSource>,
    categories: Vec<RssCategory>,
    enclosures: Vec<RssEnclosure>,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl RssItem {
    pub fn new(title: &str, link: Option<Uri>, description: &str) -> Self {
        let mut item = Self {
            link,
            ..Self::default()
        };
        item.set_title(title);
        item.set_description(description);
        item
    }

    /// Compares two item lists: length first, then position by position.
    pub fn compare_sequence(a: &[RssItem], b: &[RssItem]) -> Ordering {
        compare_sequence(a, b, RssItem::cmp)
    }

    pub fn has_title_or_description(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = normalize(title);
    }

    pub fn link(&self) -> Option<&Uri> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Option<Uri>) {
        self.link = link;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = normalize(description);
    }

    /// Email address of the author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = normalize(author);
    }

    /// Page holding comments about the item.
    pub fn comments(&self) -> Option<&Uri> {
        self.comments.as_ref()
    }

    pub fn set_comments(&mut self, comments: Option<Uri>) {
        self.comments = comments;
    }

    pub fn guid(&self) -> Option<&RssGuid> {
        self.guid.as_ref()
    }

    pub fn set_guid(&mut self, guid: Option<RssGuid>) {
        self.guid = guid;
    }

    pub fn pub_date(&self) -> Option<DateTime<Utc>> {
        self.pub_date
    }

    pub fn set_pub_date(&mut self, pub_date: Option<DateTime<Utc>>) {
        self.pub_date = pub_date;
    }

    pub fn source(&self) -> Option<&RssSource> {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, source: Option<RssSource>) {
        self.source = source;
    }

    pub fn categories(&self) -> &[RssCategory] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut Vec<RssCategory> {
        &mut self.categories
    }

    pub fn enclosures(&self) -> &[RssEnclosure] {
        &self.enclosures
    }

    pub fn enclosures_mut(&mut self) -> &mut Vec<RssEnclosure> {
        &mut self.enclosures
    }

    fn read_uri(node: &XmlNode, name: &str) -> Option<Uri> {
        let raw = node.child_value(name)?;
        Uri::parse(&raw)
            .map_err(|e| tracing::warn!(element = name, error = %e, "skipping item uri"))
            .ok()
    }
}

impl RssEntity for RssItem {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(title) = node.child_value("title") {
            self.title = Some(title);
            loaded = true;
        }
        if let Some(link) = Self::read_uri(node, "link") {
            self.link = Some(link);
            loaded = true;
        }
        if let Some(description) = node.child_value("description") {
            self.description = Some(description);
            loaded = true;
        }
        if let Some(author) = node.child_value("author") {
            self.author = Some(author);
            loaded = true;
        }
        if let Some(comments) = Self::read_uri(node, "comments") {
            self.comments = Some(comments);
            loaded = true;
        }
        if let Some(child) = node.child("guid") {
            let mut guid = RssGuid::default();
            if guid.read(child, ctx) {
                self.guid = Some(guid);
                loaded = true;
            }
        }
        if let Some(raw) = node.child_value("pubDate") {
            match parse_rfc822(&raw) {
                Some(date) => {
                    self.pub_date = Some(date);
                    loaded = true;
                }
                None => tracing::warn!(value = %raw, "skipping unparsable item pubDate"),
            }
        }
        if let Some(child) = node.child("source") {
            let mut source = RssSource::default();
            if source.read(child, ctx) {
                self.source = Some(source);
                loaded = true;
            }
        }
        for child in node.children("category") {
            let mut category = RssCategory::default();
            if category.read(child, ctx) {
                self.categories.push(category);
                loaded = true;
            }
        }
        for child in node.children("enclosure") {
            let mut enclosure = RssEnclosure::default();
            if enclosure.read(child, ctx) {
                self.enclosures.push(enclosure);
                loaded = true;
            }
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("item")?;
        write_optional(writer, "title", self.title.as_deref())?;
        write_optional(writer, "link", self.link.as_ref().map(Uri::as_str))?;
        write_optional(writer, "description", self.description.as_deref())?;
        write_optional(writer, "author", self.author.as_deref())?;
        write_optional(writer, "comments", self.comments.as_ref().map(Uri::as_str))?;
        if let Some(ref guid) = self.guid {
            guid.write(writer, adapter)?;
        }
        write_optional(writer, "pubDate", self.pub_date.as_ref().map(format_rfc822))?;
        if let Some(ref source) = self.source {
            source.write(writer, adapter)?;
        }
        for category in &self.categories {
            category.write(writer, adapter)?;
        }
        for enclosure in &self.enclosures {
            enclosure.write(writer, adapter)?;
        }
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssItem {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.author.as_deref(), other.author.as_deref())
            .then_with(|| compare_sequence(&self.categories, &other.categories, RssCategory::cmp))
            .then_with(|| compare_opt(self.comments.as_ref(), other.comments.as_ref()))
            .then_with(|| {
                compare_opt_ignore_case(self.description.as_deref(), other.description.as_deref())
            })
            .then_with(|| compare_sequence(&self.enclosures, &other.enclosures, RssEnclosure::cmp))
            .then_with(|| compare_option(self.guid.as_ref(), other.guid.as_ref(), RssGuid::cmp))
            .then_with(|| compare_opt(self.link.as_ref(), other.link.as_ref()))
            .then_with(|| {
                compare_option(self.pub_date.as_ref(), other.pub_date.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| {
                compare_option(self.source.as_ref(), other.source.as_ref(), RssSource::cmp)
            })
            .then_with(|| compare_opt_ignore_case(self.title.as_deref(), other.title.as_deref()))
    }
}

// ABOUTME: RSS <channel> entity: feed metadata, skip schedules, and the ordered item list.
// ABOUTME: Loader enforces the retrieval limit and reads the Atom self-link profile extension.

use std::cmp::Ordering;

use chrono::{DateTime, Utc, Weekday};

use super::{
    write_optional, LoadContext, RssCategory, RssCloud, RssEntity, RssImage, RssItem,
    RssTextInput,
};
use crate::compare::{compare_option, compare_ord_sequence, compare_sequence};
use crate::error::{Result, SyndicationError};
use crate::extensions::{Extensible, ExtensionAdapter, SyndicationExtension};
use crate::text::{
    compare_opt_ignore_case, normalize, parse_number, parse_weekday, weekday_name, LanguageTag,
};
use crate::time_parse::{format_rfc822, parse_rfc822};
use crate::uri::{compare_opt, Uri};
use crate::xml::{XmlNode, XmlWriter, ATOM_NAMESPACE};

const SELF_LINK_TYPE: &str = "application/rss+xml";

/// An RSS channel and everything it owns.
#[derive(Debug, Clone, Default)]
pub struct RssChannel {
    title: Option<String>,
    link: Option<Uri>,
    description: Option<String>,
    language: Option<LanguageTag>,
    copyright: Option<String>,
    managing_editor: Option<String>,
    webmaster: Option<String>,
    pub_date: Option<DateTime<Utc>>,
    last_build_date: Option<DateTime<Utc>>,
    generator: Option<String>,
    docs: Option<Uri>,
    cloud: Option<RssCloud>,
    ttl: Option<u32>,
    image: Option<RssImage>,
    rating: Option<String>,
    text_input: Option<RssTextInput>,
    self_link: Option<Uri>,
    categories: Vec<RssCategory>,
    skip_hours: Vec<u8>,
    skip_days: Vec<Weekday>,
    items: Vec<RssItem>,
    extensions: Vec<SyndicationExtension>,
}

impl RssChannel {
    pub const MAX_SKIP_HOUR: u8 = 23;

    pub fn new(link: Uri, title: &str, description: &str) -> Result<Self> {
        let mut channel = Self {
            link: Some(link),
            ..Self::default()
        };
        channel.set_title(title)?;
        channel.set_description(description)?;
        Ok(channel)
    }

    /// Compares two channel lists: length first, then position by position.
    pub fn compare_sequence(a: &[RssChannel], b: &[RssChannel]) -> Ordering {
        compare_sequence(a, b, RssChannel::cmp)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(normalize(title).ok_or(SyndicationError::empty("title"))?);
        Ok(())
    }

    pub fn link(&self) -> Option<&Uri> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Uri) {
        self.link = Some(link);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.description = Some(normalize(description).ok_or(SyndicationError::empty("description"))?);
        Ok(())
    }

    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    pub fn set_language(&mut self, language: Option<LanguageTag>) {
        self.language = language;
    }

    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    pub fn set_copyright(&mut self, copyright: &str) {
        self.copyright = normalize(copyright);
    }

    pub fn managing_editor(&self) -> Option<&str> {
        self.managing_editor.as_deref()
    }

    pub fn set_managing_editor(&mut self, managing_editor: &str) {
        self.managing_editor = normalize(managing_editor);
    }

    pub fn webmaster(&self) -> Option<&str> {
        self.webmaster.as_deref()
    }

    pub fn set_webmaster(&mut self, webmaster: &str) {
        self.webmaster = normalize(webmaster);
    }

    pub fn pub_date(&self) -> Option<DateTime<Utc>> {
        self.pub_date
    }

    pub fn set_pub_date(&mut self, pub_date: Option<DateTime<Utc>>) {
        self.pub_date = pub_date;
    }

    pub fn last_build_date(&self) -> Option<DateTime<Utc>> {
        self.last_build_date
    }

    pub fn set_last_build_date(&mut self, last_build_date: Option<DateTime<Utc>>) {
        self.last_build_date = last_build_date;
    }

    pub fn generator(&self) -> Option<&str> {
        self.generator.as_deref()
    }

    pub fn set_generator(&mut self, generator: &str) {
        self.generator = normalize(generator);
    }

    /// URL of the documentation for the format used by the feed.
    pub fn docs(&self) -> Option<&Uri> {
        self.docs.as_ref()
    }

    pub fn set_docs(&mut self, docs: Option<Uri>) {
        self.docs = docs;
    }

    pub fn cloud(&self) -> Option<&RssCloud> {
        self.cloud.as_ref()
    }

    pub fn set_cloud(&mut self, cloud: Option<RssCloud>) {
        self.cloud = cloud;
    }

    /// Minutes the channel may be cached.
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: Option<u32>) {
        self.ttl = ttl;
    }

    pub fn image(&self) -> Option<&RssImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<RssImage>) {
        self.image = image;
    }

    /// PICS rating.
    pub fn rating(&self) -> Option<&str> {
        self.rating.as_deref()
    }

    pub fn set_rating(&mut self, rating: &str) {
        self.rating = normalize(rating);
    }

    pub fn text_input(&self) -> Option<&RssTextInput> {
        self.text_input.as_ref()
    }

    pub fn set_text_input(&mut self, text_input: Option<RssTextInput>) {
        self.text_input = text_input;
    }

    /// Location of the feed itself, published as `<atom:link rel="self">`.
    pub fn self_link(&self) -> Option<&Uri> {
        self.self_link.as_ref()
    }

    pub fn set_self_link(&mut self, self_link: Option<Uri>) {
        self.self_link = self_link;
    }

    pub fn categories(&self) -> &[RssCategory] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut Vec<RssCategory> {
        &mut self.categories
    }

    /// Hours (0-23, GMT) during which aggregators should not poll.
    pub fn skip_hours(&self) -> &[u8] {
        &self.skip_hours
    }

    /// Adds an hour; false if already present. Rejects hours above 23.
    pub fn add_skip_hour(&mut self, hour: u8) -> Result<bool> {
        if hour > Self::MAX_SKIP_HOUR {
            return Err(SyndicationError::OutOfRange {
                field: "skipHours",
                value: u64::from(hour),
                max: u64::from(Self::MAX_SKIP_HOUR),
            });
        }
        if self.skip_hours.contains(&hour) {
            return Ok(false);
        }
        self.skip_hours.push(hour);
        Ok(true)
    }

    pub fn remove_skip_hour(&mut self, hour: u8) -> bool {
        let before = self.skip_hours.len();
        self.skip_hours.retain(|h| *h != hour);
        before != self.skip_hours.len()
    }

    pub fn skip_days(&self) -> &[Weekday] {
        &self.skip_days
    }

    /// Adds a day; false if already present.
    pub fn add_skip_day(&mut self, day: Weekday) -> bool {
        if self.skip_days.contains(&day) {
            return false;
        }
        self.skip_days.push(day);
        true
    }

    pub fn remove_skip_day(&mut self, day: Weekday) -> bool {
        let before = self.skip_days.len();
        self.skip_days.retain(|d| *d != day);
        before != self.skip_days.len()
    }

    pub fn items(&self) -> &[RssItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<RssItem> {
        &mut self.items
    }

    pub fn add_item(&mut self, item: RssItem) {
        self.items.push(item);
    }

    fn read_required(&mut self, node: &XmlNode) -> bool {
        let mut loaded = false;
        if let Some(description) = node.child_value("description") {
            self.description = Some(description);
            loaded = true;
        }
        if let Some(link) = read_uri(node, "link") {
            self.link = Some(link);
            loaded = true;
        }
        if let Some(title) = node.child_value("title") {
            self.title = Some(title);
            loaded = true;
        }
        loaded
    }

    fn read_optional(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(child) = node.child("cloud") {
            let mut cloud = RssCloud::default();
            if cloud.read(child, ctx) {
                self.cloud = Some(cloud);
                loaded = true;
            }
        }
        for (name, slot) in [
            ("copyright", &mut self.copyright),
            ("generator", &mut self.generator),
            ("managingEditor", &mut self.managing_editor),
            ("rating", &mut self.rating),
            ("webMaster", &mut self.webmaster),
        ] {
            if let Some(value) = node.child_value(name) {
                *slot = Some(value);
                loaded = true;
            }
        }
        if let Some(docs) = read_uri(node, "docs") {
            self.docs = Some(docs);
            loaded = true;
        }
        if let Some(child) = node.child("image") {
            let mut image = RssImage::default();
            if image.read(child, ctx) {
                self.image = Some(image);
                loaded = true;
            }
        }
        if let Some(raw) = node.child_value("language") {
            match LanguageTag::parse(&raw) {
                Some(language) => {
                    self.language = Some(language);
                    loaded = true;
                }
                None => tracing::warn!(value = %raw, "skipping unrecognized channel language"),
            }
        }
        for (name, slot) in [
            ("lastBuildDate", &mut self.last_build_date),
            ("pubDate", &mut self.pub_date),
        ] {
            if let Some(raw) = node.child_value(name) {
                match parse_rfc822(&raw) {
                    Some(date) => {
                        *slot = Some(date);
                        loaded = true;
                    }
                    None => tracing::warn!(element = name, value = %raw, "skipping unparsable date"),
                }
            }
        }
        if let Some(child) = node.child("textInput") {
            let mut text_input = RssTextInput::default();
            if text_input.read(child, ctx) {
                self.text_input = Some(text_input);
                loaded = true;
            }
        }
        if let Some(raw) = node.child_value("ttl") {
            match parse_number::<u32>(&raw) {
                Some(ttl) => {
                    self.ttl = Some(ttl);
                    loaded = true;
                }
                None => tracing::warn!(value = %raw, "skipping unparsable ttl"),
            }
        }

        loaded
    }

    fn read_collections(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        for child in node.children("category") {
            let mut category = RssCategory::default();
            category.read(child, ctx);
            self.categories.push(category);
            loaded = true;
        }

        if let Some(skip_days) = node.child("skipDays") {
            for day in skip_days.children("day") {
                let raw = day.value().unwrap_or_default();
                match parse_weekday(&raw) {
                    Some(weekday) => {
                        if self.add_skip_day(weekday) {
                            loaded = true;
                        }
                    }
                    None => tracing::warn!(value = %raw, "skipping unrecognized skipDays day"),
                }
            }
        }

        if let Some(skip_hours) = node.child("skipHours") {
            for hour in skip_hours.children("hour") {
                let raw = hour.value().unwrap_or_default();
                let added = parse_number::<u8>(&raw).map(|h| self.add_skip_hour(h));
                match added {
                    Some(Ok(true)) => loaded = true,
                    Some(Ok(false)) => tracing::warn!(hour = %raw, "dropping duplicate skip hour"),
                    _ => tracing::warn!(hour = %raw, "dropping out-of-range skip hour"),
                }
            }
        }

        let limit = ctx.map(|c| c.settings);
        let mut counter = 0usize;
        for child in node.children("item") {
            let mut item = RssItem::default();
            if !item.read(child, ctx) {
                continue;
            }
            counter += 1;
            if limit.is_some_and(|settings| settings.exceeds_limit(counter)) {
                tracing::debug!(retained = counter - 1, "item retrieval limit reached");
                break;
            }
            self.items.push(item);
            loaded = true;
        }

        loaded
    }

    fn read_self_link(&mut self, node: &XmlNode) -> bool {
        let Some(link) = node.children_ns("link", ATOM_NAMESPACE).find(|l| is_self_link(l)) else {
            return false;
        };
        match link.attribute("href").map(Uri::parse) {
            Some(Ok(href)) => {
                self.self_link = Some(href);
                true
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "skipping atom self link");
                false
            }
            None => false,
        }
    }

    fn write_self_link(&self, writer: &mut XmlWriter) -> Result<()> {
        let Some(ref href) = self.self_link else {
            return Ok(());
        };
        writer.start_element_ns(Some("atom"), "link", ATOM_NAMESPACE)?;
        writer.write_attribute("href", href.as_str())?;
        writer.write_attribute("rel", "self")?;
        writer.write_attribute("type", SELF_LINK_TYPE)?;
        writer.end_element()
    }
}

fn read_uri(node: &XmlNode, name: &str) -> Option<Uri> {
    let raw = node.child_value(name)?;
    match Uri::parse(&raw) {
        Ok(uri) => Some(uri),
        Err(e) => {
            tracing::warn!(element = name, error = %e, "skipping channel uri");
            None
        }
    }
}

fn is_self_link(node: &XmlNode) -> bool {
    node.attribute("rel")
        .is_some_and(|rel| rel.trim().eq_ignore_ascii_case("self"))
}

fn weekday_cmp(a: &Weekday, b: &Weekday) -> Ordering {
    a.num_days_from_sunday().cmp(&b.num_days_from_sunday())
}

impl Extensible for RssChannel {
    fn extensions(&self) -> &[SyndicationExtension] {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Vec<SyndicationExtension> {
        &mut self.extensions
    }

    fn claims(&self, element: &XmlNode) -> bool {
        element.is("link", Some(ATOM_NAMESPACE)) && is_self_link(element)
    }
}

impl RssEntity for RssChannel {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let required = self.read_required(node);
        let optional = self.read_optional(node, ctx);
        let collections = self.read_collections(node, ctx);
        let profile = self.read_self_link(node);

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        required || optional || collections || profile
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("channel")?;

        write_optional(writer, "title", self.title.as_deref())?;
        write_optional(writer, "link", self.link.as_ref().map(Uri::as_str))?;
        write_optional(writer, "description", self.description.as_deref())?;
        self.write_self_link(writer)?;

        write_optional(writer, "language", self.language.as_ref().map(LanguageTag::as_str))?;
        write_optional(writer, "copyright", self.copyright.as_deref())?;
        write_optional(writer, "managingEditor", self.managing_editor.as_deref())?;
        write_optional(writer, "webMaster", self.webmaster.as_deref())?;
        write_optional(writer, "pubDate", self.pub_date.as_ref().map(format_rfc822))?;
        write_optional(
            writer,
            "lastBuildDate",
            self.last_build_date.as_ref().map(format_rfc822),
        )?;
        write_optional(writer, "generator", self.generator.as_deref())?;
        write_optional(writer, "docs", self.docs.as_ref().map(Uri::as_str))?;
        if let Some(ref cloud) = self.cloud {
            cloud.write(writer, adapter)?;
        }
        write_optional(writer, "ttl", self.ttl.map(|t| t.to_string()))?;
        if let Some(ref image) = self.image {
            image.write(writer, adapter)?;
        }
        write_optional(writer, "rating", self.rating.as_deref())?;
        if let Some(ref text_input) = self.text_input {
            text_input.write(writer, adapter)?;
        }

        for category in &self.categories {
            category.write(writer, adapter)?;
        }
        if !self.skip_hours.is_empty() {
            writer.start_element("skipHours")?;
            for hour in &self.skip_hours {
                writer.write_element("hour", &hour.to_string())?;
            }
            writer.end_element()?;
        }
        if !self.skip_days.is_empty() {
            writer.start_element("skipDays")?;
            for day in &self.skip_days {
                writer.write_element("day", weekday_name(*day))?;
            }
            writer.end_element()?;
        }
        for item in &self.items {
            item.write(writer, adapter)?;
        }

        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssChannel {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_sequence(&self.categories, &other.categories, RssCategory::cmp)
            .then_with(|| compare_option(self.cloud.as_ref(), other.cloud.as_ref(), RssCloud::cmp))
            .then_with(|| compare_opt_ignore_case(self.copyright.as_deref(), other.copyright.as_deref()))
            .then_with(|| {
                compare_opt_ignore_case(self.description.as_deref(), other.description.as_deref())
            })
            .then_with(|| compare_opt(self.docs.as_ref(), other.docs.as_ref()))
            .then_with(|| compare_opt_ignore_case(self.generator.as_deref(), other.generator.as_deref()))
            .then_with(|| compare_option(self.image.as_ref(), other.image.as_ref(), RssImage::cmp))
            .then_with(|| RssItem::compare_sequence(&self.items, &other.items))
            .then_with(|| {
                compare_opt_ignore_case(
                    self.language.as_ref().map(LanguageTag::as_str),
                    other.language.as_ref().map(LanguageTag::as_str),
                )
            })
            .then_with(|| {
                compare_option(
                    self.last_build_date.as_ref(),
                    other.last_build_date.as_ref(),
                    |a, b| a.cmp(b),
                )
            })
            .then_with(|| compare_opt(self.link.as_ref(), other.link.as_ref()))
            .then_with(|| {
                compare_opt_ignore_case(
                    self.managing_editor.as_deref(),
                    other.managing_editor.as_deref(),
                )
            })
            .then_with(|| {
                compare_option(self.pub_date.as_ref(), other.pub_date.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| compare_opt_ignore_case(self.rating.as_deref(), other.rating.as_deref()))
            .then_with(|| compare_opt(self.self_link.as_ref(), other.self_link.as_ref()))
            .then_with(|| compare_sequence(&self.skip_days, &other.skip_days, weekday_cmp))
            .then_with(|| compare_ord_sequence(&self.skip_hours, &other.skip_hours))
            .then_with(|| {
                compare_option(
                    self.text_input.as_ref(),
                    other.text_input.as_ref(),
                    RssTextInput::cmp,
                )
            })
            .then_with(|| compare_opt_ignore_case(self.title.as_deref(), other.title.as_deref()))
            .then_with(|| compare_option(self.ttl.as_ref(), other.ttl.as_ref(), u32::cmp))
            .then_with(|| compare_opt_ignore_case(self.webmaster.as_deref(), other.webmaster.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SyndicationSettings;

    fn channel_xml(body: &str) -> XmlNode {
        XmlNode::parse_str(&format!(
            r#"<channel xmlns:atom="http://www.w3.org/2005/Atom">{}</channel>"#,
            body
        ))
        .unwrap()
    }

    #[test]
    fn test_required_fields() {
        let node = channel_xml(
            "<title>Liftoff News</title><link>http://liftoff.msfc.nasa.gov/</link>\
             <description>Liftoff to Space Exploration.</description>",
        );
        let mut channel = RssChannel::default();
        assert!(channel.load(&node));
        assert_eq!(channel.title(), Some("Liftoff News"));
        assert_eq!(channel.description(), Some("Liftoff to Space Exploration."));
        assert!(channel.link().unwrap().is_absolute());
    }

    #[test]
    fn test_nothing_recognized() {
        let mut channel = RssChannel::default();
        assert!(!channel.load(&channel_xml("<unknown>value</unknown>")));
    }

    #[test]
    fn test_skip_hours_duplicates_and_range() {
        let node = channel_xml(
            "<skipHours><hour>5</hour><hour>5</hour><hour>25</hour>\
             <hour>-1</hour><hour>10</hour></skipHours>",
        );
        let mut channel = RssChannel::default();
        assert!(channel.load(&node));
        assert_eq!(channel.skip_hours(), &[5, 10]);
    }

    #[test]
    fn test_skip_days() {
        let node = channel_xml(
            "<skipDays><day>saturday</day><day>Sunday</day><day>Saturday</day>\
             <day>Funday</day></skipDays>",
        );
        let mut channel = RssChannel::default();
        channel.load(&node);
        assert_eq!(channel.skip_days(), &[Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_add_skip_hour_rejects_out_of_range() {
        let mut channel = RssChannel::default();
        assert!(channel.add_skip_hour(24).unwrap_err().is_invalid_argument());
        assert!(channel.add_skip_hour(0).unwrap());
        assert!(!channel.add_skip_hour(0).unwrap());
        assert!(channel.remove_skip_hour(0));
    }

    #[test]
    fn test_retrieval_limit() {
        let items: String = (1..=5)
            .map(|i| format!("<item><title>Item {}</title></item>", i))
            .collect();
        let node = channel_xml(&items);

        let mut limited = RssChannel::default();
        let settings = SyndicationSettings::default().with_retrieval_limit(3);
        assert!(limited.load_with_settings(&node, &settings));
        let titles: Vec<_> = limited.items().iter().filter_map(RssItem::title).collect();
        assert_eq!(titles, vec!["Item 1", "Item 2", "Item 3"]);

        let mut unlimited = RssChannel::default();
        unlimited.load_with_settings(&node, &SyndicationSettings::default());
        assert_eq!(unlimited.items().len(), 5);
    }

    #[test]
    fn test_empty_items_do_not_count() {
        let node = channel_xml("<item/><item><title>A</title></item><item><title>B</title></item>");
        let mut channel = RssChannel::default();
        let settings = SyndicationSettings::default().with_retrieval_limit(1);
        channel.load_with_settings(&node, &settings);
        assert_eq!(channel.items().len(), 1);
        assert_eq!(channel.items()[0].title(), Some("A"));
    }

    #[test]
    fn test_optional_fields_and_bad_values() {
        let node = channel_xml(
            "<language>en-us</language><ttl>sixty</ttl><copyright>(c) 2024</copyright>\
             <lastBuildDate>Tue, 10 Jun 2003 09:41:01 GMT</lastBuildDate>\
             <pubDate>whenever</pubDate><webMaster>web@example.com</webMaster>",
        );
        let mut channel = RssChannel::default();
        assert!(channel.load(&node));
        assert_eq!(channel.language().unwrap().as_str(), "en-us");
        assert_eq!(channel.ttl(), None);
        assert_eq!(channel.copyright(), Some("(c) 2024"));
        assert!(channel.last_build_date().is_some());
        assert!(channel.pub_date().is_none());
        assert_eq!(channel.webmaster(), Some("web@example.com"));
    }

    #[test]
    fn test_bad_language_skipped() {
        let mut channel = RssChannel::default();
        assert!(!channel.load(&channel_xml("<language>not a language</language>")));
        assert!(channel.language().is_none());
    }

    #[test]
    fn test_self_link_first_match() {
        let node = channel_xml(
            r#"<atom:link href="https://example.com/alt" rel="alternate"/>
               <atom:link href="https://example.com/feed.xml" rel="self" type="application/rss+xml"/>
               <atom:link href="https://example.com/other.xml" rel="self"/>"#,
        );
        let mut channel = RssChannel::default();
        assert!(channel.load_with_settings(&node, &SyndicationSettings::default()));
        assert_eq!(
            channel.self_link().unwrap().as_str(),
            "https://example.com/feed.xml"
        );
        // The alternate link is foreign data; the self links are claimed.
        assert_eq!(channel.extensions().len(), 1);
    }

    #[test]
    fn test_write_order() {
        let mut channel = RssChannel::new(
            Uri::parse("http://example.com/").unwrap(),
            "Title",
            "Description",
        )
        .unwrap();
        channel.set_ttl(Some(60));
        channel.add_skip_day(Weekday::Mon);
        channel.add_item(RssItem::new("Item", None, ""));
        channel.set_self_link(Some(Uri::parse("http://example.com/rss").unwrap()));

        let xml = channel.to_xml_string().unwrap();
        let pos = |needle: &str| xml.find(needle).unwrap();
        assert!(pos("<title>") < pos("<link>"));
        assert!(pos("<description>") < pos("<atom:link"));
        assert!(pos("<ttl>") < pos("<skipDays>"));
        assert!(pos("<skipDays>") < pos("<item>"));
        assert!(xml.contains("<day>Monday</day>"));
    }

    #[test]
    fn test_item_order_matters() {
        let a = RssItem::new("A", None, "");
        let b = RssItem::new("B", None, "");
        let mut first = RssChannel::default();
        first.add_item(a.clone());
        first.add_item(b.clone());
        let mut second = RssChannel::default();
        second.add_item(b);
        second.add_item(a);
        assert_ne!(first, second);
    }
}

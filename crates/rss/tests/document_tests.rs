// ABOUTME: Integration tests for whole RSS documents.
// ABOUTME: Covers parsing, retrieval limits, extension capture, and write/reload round trips.

use digests_rss::{
    CloudProtocol, Extensible, RssEntity, RssFeed, RssItem, SyndicationExtension,
    SyndicationSettings, ITUNES_NAMESPACE,
};
use pretty_assertions::assert_eq;

const PODCAST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:atom="http://www.w3.org/2005/Atom"
     xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"
     xmlns:content="http://purl.org/rss/1.0/modules/content/">
    <channel>
        <title>Tech Talk Podcast</title>
        <link>https://podcast.example.com</link>
        <description>Weekly conversations about technology</description>
        <language>en-us</language>
        <copyright>2024 Example Media</copyright>
        <managingEditor>editor@example.com (Ed Itor)</managingEditor>
        <lastBuildDate>Tue, 16 Jan 2024 08:00:00 GMT</lastBuildDate>
        <ttl>60</ttl>
        <atom:link href="https://podcast.example.com/feed.xml" rel="self" type="application/rss+xml"/>
        <cloud domain="rpc.example.com" port="80" path="/RPC2" registerProcedure="pingMe" protocol="xml-rpc"/>
        <image>
            <url>https://podcast.example.com/cover.png</url>
            <title>Tech Talk Podcast</title>
            <link>https://podcast.example.com</link>
            <height>999</height>
        </image>
        <category domain="https://example.com/cats">Technology</category>
        <skipHours><hour>5</hour><hour>5</hour><hour>25</hour><hour>-1</hour><hour>10</hour></skipHours>
        <skipDays><day>Saturday</day><day>Sunday</day></skipDays>
        <itunes:author>Tech Talk Team</itunes:author>
        <itunes:explicit>no</itunes:explicit>
        <item>
            <title>Episode 2: Rust</title>
            <link>https://podcast.example.com/ep2</link>
            <guid isPermaLink="false">ep-2</guid>
            <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
            <enclosure url="https://cdn.example.com/ep2.mp3" length="12345678" type="audio/mpeg"/>
            <itunes:duration>1:02:03</itunes:duration>
            <content:encoded><![CDATA[<p>Show notes</p>]]></content:encoded>
        </item>
        <item>
            <title>Episode 1: Hello</title>
            <description>The first one</description>
            <guid>https://podcast.example.com/ep1</guid>
            <enclosure url="https://cdn.example.com/ep1.mp3" length="-5" type="audio/mpeg"/>
        </item>
    </channel>
</rss>"#;

fn item_titles(feed: &RssFeed) -> Vec<&str> {
    feed.channel()
        .items()
        .iter()
        .filter_map(RssItem::title)
        .collect()
}

/// Parses every channel-level field and the skip schedules.
#[test]
fn test_parse_channel_fields() {
    let feed = RssFeed::parse_str(PODCAST).unwrap();
    let channel = feed.channel();

    assert_eq!(channel.title(), Some("Tech Talk Podcast"));
    assert_eq!(channel.language().unwrap().as_str(), "en-us");
    assert_eq!(channel.ttl(), Some(60));
    assert_eq!(channel.skip_hours(), &[5, 10]);
    assert_eq!(channel.skip_days().len(), 2);
    assert_eq!(channel.categories()[0].domain(), "https://example.com/cats");
    assert_eq!(
        channel.self_link().unwrap().as_str(),
        "https://podcast.example.com/feed.xml"
    );

    let cloud = channel.cloud().unwrap();
    assert_eq!(cloud.protocol(), CloudProtocol::XmlRpc);
    assert_eq!(cloud.port(), 80);

    // Oversized image dimensions are clamped, not rejected.
    assert_eq!(channel.image().unwrap().height(), Some(400));
}

/// Malformed item fields are skipped while the rest of the item loads.
#[test]
fn test_parse_items_skips_bad_values() {
    let feed = RssFeed::parse_str(PODCAST).unwrap();
    let items = feed.channel().items();
    assert_eq!(item_titles(&feed), vec!["Episode 2: Rust", "Episode 1: Hello"]);

    let first = &items[0];
    assert!(!first.guid().unwrap().is_permalink());
    assert!(first.pub_date().is_some());
    assert_eq!(first.enclosures()[0].length(), Some(12_345_678));

    let second = &items[1];
    assert!(second.guid().unwrap().is_permalink());
    assert_eq!(second.enclosures()[0].length(), None);
    assert_eq!(second.enclosures()[0].content_type(), Some("audio/mpeg"));
}

/// Without settings nothing is captured; with settings every foreign element is.
#[test]
fn test_extensions_captured_with_settings() {
    let plain = RssFeed::parse_str(PODCAST).unwrap();
    assert!(!plain.channel().has_extensions());

    let feed = RssFeed::parse_str_with_settings(PODCAST, &SyndicationSettings::default()).unwrap();
    let channel = feed.channel();

    // iTunes elements collapse into a single typed record; the self link is not an extension.
    assert_eq!(channel.extensions().len(), 1);
    match &channel.extensions()[0] {
        SyndicationExtension::Itunes(itunes) => {
            assert_eq!(itunes.author.as_deref(), Some("Tech Talk Team"));
            assert!(!itunes.is_explicit());
        }
        other => panic!("expected itunes extension, got {:?}", other),
    }

    let episode = &channel.items()[0];
    assert_eq!(episode.extensions().len(), 2);
    let itunes = episode
        .find_extension(&|e| matches!(e, SyndicationExtension::Itunes(_)))
        .unwrap();
    match itunes {
        SyndicationExtension::Itunes(ext) => assert_eq!(ext.duration_seconds(), Some(3723)),
        _ => unreachable!(),
    }
    let content = episode
        .find_extension(&|e| matches!(e, SyndicationExtension::Element(n) if n.name() == "encoded"))
        .unwrap();
    match content {
        SyndicationExtension::Element(node) => assert_eq!(node.text(), "<p>Show notes</p>"),
        _ => unreachable!(),
    }
}

/// Namespace filtering and the auto-detect switch come from settings.
#[test]
fn test_extension_settings() {
    let off = SyndicationSettings::default().with_auto_detect_extensions(false);
    let feed = RssFeed::parse_str_with_settings(PODCAST, &off).unwrap();
    assert!(!feed.channel().items()[0].has_extensions());

    let content_only = SyndicationSettings::default()
        .with_supported_namespace("http://purl.org/rss/1.0/modules/content/");
    let feed = RssFeed::parse_str_with_settings(PODCAST, &content_only).unwrap();
    assert!(!feed.channel().has_extensions());
    assert_eq!(feed.channel().items()[0].extensions().len(), 1);
}

/// The retrieval limit keeps exactly N items; zero means unlimited.
#[test]
fn test_retrieval_limit_boundary() {
    for (limit, expected) in [(0, 2), (1, 1), (2, 2), (3, 2)] {
        let settings = SyndicationSettings::default().with_retrieval_limit(limit);
        let feed = RssFeed::parse_str_with_settings(PODCAST, &settings).unwrap();
        assert_eq!(feed.channel().items().len(), expected, "limit {}", limit);
    }
}

/// Settings can be read from a TOML document.
#[test]
fn test_settings_from_toml() {
    let settings = SyndicationSettings::from_toml_str(
        r#"
retrieval_limit = 1
auto_detect_extensions = true
"#,
    )
    .unwrap();
    let feed = RssFeed::parse_str_with_settings(PODCAST, &settings).unwrap();
    assert_eq!(item_titles(&feed), vec!["Episode 2: Rust"]);
}

/// Writing then reloading a document yields an equal feed, extensions included.
#[test]
fn test_round_trip() {
    let settings = SyndicationSettings::default();
    let feed = RssFeed::parse_str_with_settings(PODCAST, &settings).unwrap();
    let xml = feed.to_xml_string().unwrap();

    let reloaded = RssFeed::parse_str_with_settings(&xml, &settings).unwrap();
    assert_eq!(reloaded, feed);
    assert_eq!(reloaded.channel().skip_hours(), &[5, 10]);
    assert_eq!(reloaded.channel().extensions(), feed.channel().extensions());
    assert_eq!(
        reloaded.channel().items()[0].extensions(),
        feed.channel().items()[0].extensions()
    );

    // Namespaces are declared once, on the root.
    assert_eq!(xml.matches("xmlns:itunes=").count(), 1);
    assert_eq!(xml.matches("xmlns:content=").count(), 1);
    assert_eq!(xml.matches("xmlns:atom=").count(), 1);
}

/// iTunes elements without a typed field survive a write/reload cycle verbatim.
#[test]
fn test_unmodelled_itunes_elements_round_trip() {
    let xml = r#"<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
    <channel>
        <title>Show</title>
        <itunes:author>A</itunes:author>
        <itunes:category text="Technology"/>
        <itunes:owner>
            <itunes:name>Owner Name</itunes:name>
            <itunes:email>owner@example.com</itunes:email>
        </itunes:owner>
        <itunes:type>episodic</itunes:type>
    </channel>
</rss>"#;
    let settings = SyndicationSettings::default();
    let feed = RssFeed::parse_str_with_settings(xml, &settings).unwrap();
    assert_eq!(feed.channel().extensions().len(), 4);

    let written = feed.to_xml_string().unwrap();
    assert!(written.contains("<itunes:author>A</itunes:author>"));
    assert!(written.contains(r#"<itunes:category text="Technology"/>"#));
    assert!(written.contains("<itunes:type>episodic</itunes:type>"));
    assert_eq!(written.matches("xmlns:itunes=").count(), 1);

    let reloaded = RssFeed::parse_str_with_settings(&written, &settings).unwrap();
    let extensions = reloaded.channel().extensions();
    assert_eq!(extensions.len(), 4);
    let owner = extensions
        .iter()
        .find_map(|e| match e {
            SyndicationExtension::Element(node) if node.name() == "owner" => Some(node),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        owner.child_ns("email", ITUNES_NAMESPACE).and_then(|n| n.value()),
        Some("owner@example.com".to_string())
    );
}

/// Element order follows the RSS schema; optional fields are omitted when unset.
#[test]
fn test_write_order_and_omission() {
    let feed = RssFeed::parse_str(PODCAST).unwrap();
    let xml = feed.channel().to_xml_string().unwrap();
    let pos = |needle: &str| xml.find(needle).unwrap();

    assert!(pos("<title>") < pos("<link>"));
    assert!(pos("<link>") < pos("<description>"));
    assert!(pos("<language>") < pos("<copyright>"));
    assert!(pos("<cloud ") < pos("<ttl>"));
    assert!(pos("<ttl>") < pos("<image>"));
    assert!(pos("<category ") < pos("<skipHours>"));
    assert!(pos("<skipDays>") < pos("<item>"));
    assert!(!xml.contains("<generator>"));
    assert!(!xml.contains("<webMaster>"));
}

/// A bare channel root is accepted; anything else is a parse error.
#[test]
fn test_document_roots() {
    let feed = RssFeed::parse_str(
        "<channel><title>Bare</title><item><title>Only</title></item></channel>",
    )
    .unwrap();
    assert_eq!(item_titles(&feed), vec!["Only"]);

    assert!(RssFeed::parse_str("<feed xmlns=\"http://www.w3.org/2005/Atom\"/>").is_err());
    assert!(RssFeed::parse_str("not xml at all <").is_err());
}

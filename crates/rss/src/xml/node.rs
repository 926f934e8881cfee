// ABOUTME: Namespace-aware XML element tree built from quick-xml reader events.
// ABOUTME: Provides the child/attribute/text navigation the RSS loaders work against.

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{Result, SyndicationError};
use crate::text::normalize;

pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A single attribute with its prefix resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub prefix: Option<String>,
    pub name: String,
    pub namespace: Option<String>,
    pub value: String,
}

impl XmlAttribute {
    pub fn qualified_name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.name)
    }
}

/// One piece of an element's content, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlContent<'a> {
    Text(&'a str),
    Element(&'a XmlNode),
}

/// An element with its attributes, child elements and concatenated text.
///
/// Text runs remember how many child elements preceded them so mixed
/// content can be written back in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    prefix: Option<String>,
    name: String,
    namespace: Option<String>,
    declarations: Vec<(Option<String>, String)>,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlNode>,
    text: String,
    runs: Vec<(usize, String)>,
}

impl XmlNode {
    /// Creates an element without namespace, for building trees by hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a namespaced element written as `prefix:name`.
    pub fn with_namespace(
        prefix: Option<&str>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            name: name.into(),
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    /// Parses a document and returns its root element.
    pub fn parse_str(xml: &str) -> Result<XmlNode> {
        TreeBuilder::default().build(xml)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.name)
    }

    /// Namespace declarations made on this element, as `(prefix, uri)`.
    pub fn declarations(&self) -> &[(Option<String>, String)] {
        &self.declarations
    }

    /// True when the element has the given local name and namespace.
    pub fn is(&self, name: &str, namespace: Option<&str>) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }

    pub fn elements(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child without a namespace named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.is(name, None))
    }

    pub fn child_ns(&self, name: &str, namespace: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.is(name, Some(namespace)))
    }

    /// All children without a namespace named `name`, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.is(name, None))
    }

    pub fn children_ns<'a>(
        &'a self,
        name: &'a str,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children
            .iter()
            .filter(move |c| c.is(name, Some(namespace)))
    }

    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Value of an unprefixed attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name && a.namespace.is_none())
            .map(|a| a.value.as_str())
    }

    pub fn attribute_ns(&self, name: &str, namespace: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name && a.namespace.as_deref() == Some(namespace))
            .map(|a| a.value.as_str())
    }

    /// Raw concatenated text content, whitespace preserved.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text runs and child elements interleaved as they appeared.
    pub fn content(&self) -> Vec<XmlContent<'_>> {
        let mut content = Vec::with_capacity(self.runs.len() + self.children.len());
        let mut runs = self.runs.iter().peekable();
        for (idx, child) in self.children.iter().enumerate() {
            while let Some((_, run)) = runs.next_if(|(at, _)| *at <= idx) {
                content.push(XmlContent::Text(run));
            }
            content.push(XmlContent::Element(child));
        }
        content.extend(runs.map(|(_, run)| XmlContent::Text(run.as_str())));
        content
    }

    /// True when non-blank text sits alongside child elements.
    pub fn has_mixed_content(&self) -> bool {
        !self.children.is_empty() && self.runs.iter().any(|(_, run)| !run.trim().is_empty())
    }

    /// Trimmed text content, None when blank.
    pub fn value(&self) -> Option<String> {
        normalize(&self.text)
    }

    /// Trimmed text of the first un-namespaced child named `name`.
    pub fn child_value(&self, name: &str) -> Option<String> {
        self.child(name).and_then(XmlNode::value)
    }

    /// Prefix bound to `namespace` by this element's own declarations.
    pub fn lookup_prefix(&self, namespace: &str) -> Option<Option<&str>> {
        self.declarations
            .iter()
            .find(|(_, uri)| uri == namespace)
            .map(|(prefix, _)| prefix.as_deref())
    }

    /// Replaces all text with a single run ahead of any children.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.runs.clear();
        if !self.text.is_empty() {
            self.runs.push((0, self.text.clone()));
        }
    }

    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(XmlAttribute {
            prefix: None,
            name: name.into(),
            namespace: None,
            value: value.into(),
        });
    }
}

fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) => format!("{}:{}", p, name),
        None => name.to_string(),
    }
}

fn split_qname(raw: &str) -> (Option<String>, String) {
    match raw.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, raw.to_string()),
    }
}

/// Builds an XmlNode tree while tracking in-scope namespace declarations.
#[derive(Default)]
struct TreeBuilder {
    scopes: Vec<Vec<(Option<String>, String)>>,
    open: Vec<XmlNode>,
    root: Option<XmlNode>,
}

impl TreeBuilder {
    fn build(mut self, xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        loop {
            match reader.read_event().map_err(SyndicationError::parse)? {
                Event::Start(ref e) => {
                    let node = self.open_element(e)?;
                    self.open.push(node);
                }
                Event::Empty(ref e) => {
                    let node = self.open_element(e)?;
                    self.close_element(node);
                }
                Event::End(_) => {
                    let node = self
                        .open
                        .pop()
                        .ok_or_else(|| SyndicationError::parse("unexpected closing tag"))?;
                    self.close_element(node);
                }
                Event::Text(ref e) => {
                    let text = e.decode().map_err(SyndicationError::parse)?;
                    self.append_text(&text);
                }
                Event::CData(ref e) => {
                    let text = String::from_utf8_lossy(e);
                    self.append_text(&text);
                }
                Event::GeneralRef(ref e) => {
                    if let Some(ch) = e.resolve_char_ref().map_err(SyndicationError::parse)? {
                        self.append_text(ch.encode_utf8(&mut [0; 4]));
                    } else {
                        let name = e.decode().map_err(SyndicationError::parse)?;
                        match resolve_predefined_entity(&name) {
                            Some(resolved) => self.append_text(resolved),
                            None => self.append_text(&format!("&{};", name)),
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !self.open.is_empty() {
            return Err(SyndicationError::parse("document ended inside an element"));
        }
        self.root
            .ok_or_else(|| SyndicationError::parse("document has no root element"))
    }

    fn open_element(&mut self, start: &BytesStart) -> Result<XmlNode> {
        let raw_name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let (prefix, name) = split_qname(&raw_name);

        let mut declarations = Vec::new();
        let mut raw_attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(SyndicationError::parse)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let raw_value = String::from_utf8_lossy(&attr.value);
            let value = unescape(&raw_value)
                .map_err(SyndicationError::parse)?
                .into_owned();
            if key == "xmlns" {
                declarations.push((None, value));
            } else if let Some(p) = key.strip_prefix("xmlns:") {
                declarations.push((Some(p.to_string()), value));
            } else {
                raw_attributes.push((key, value));
            }
        }
        self.scopes.push(declarations.clone());

        let namespace = self.resolve(prefix.as_deref());
        let attributes = raw_attributes
            .into_iter()
            .map(|(key, value)| {
                let (prefix, name) = split_qname(&key);
                // Unprefixed attributes never take the default namespace.
                let namespace = prefix.as_deref().and_then(|p| self.resolve(Some(p)));
                XmlAttribute {
                    prefix,
                    name,
                    namespace,
                    value,
                }
            })
            .collect();

        Ok(XmlNode {
            prefix,
            name,
            namespace,
            declarations,
            attributes,
            children: Vec::new(),
            text: String::new(),
            runs: Vec::new(),
        })
    }

    fn close_element(&mut self, node: XmlNode) {
        self.scopes.pop();
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
    }

    fn append_text(&mut self, text: &str) {
        if let Some(node) = self.open.last_mut() {
            node.text.push_str(text);
            let at = node.children.len();
            match node.runs.last_mut() {
                Some((idx, run)) if *idx == at => run.push_str(text),
                _ => node.runs.push((at, text.to_string())),
            }
        }
    }

    fn resolve(&self, prefix: Option<&str>) -> Option<String> {
        if prefix == Some("xml") {
            return Some(XML_NAMESPACE.to_string());
        }
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter())
            .find(|(p, _)| p.as_deref() == prefix)
            .map(|(_, uri)| uri.clone())
            .filter(|uri| !uri.is_empty())
    }
}

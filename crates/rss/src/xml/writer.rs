// ABOUTME: Streaming, indented XML writer used by every entity's write_to.
// ABOUTME: Wraps quick_xml::Writer with deferred start tags and namespace scope tracking.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use super::node::{XmlContent, XmlNode, XML_NAMESPACE};
use crate::error::{Result, SyndicationError};

struct OpenElement {
    name: String,
    declared: Vec<(Option<String>, String)>,
}

/// Writes XML fragments element by element.
///
/// A start tag stays pending until its first child or text is written so
/// attributes and namespace declarations can still be added; an element
/// closed while pending is written self-closing.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
    open: Vec<OpenElement>,
    pending: Option<BytesStart<'static>>,
    emit_extensions: bool,
    indented: bool,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
            open: Vec::new(),
            pending: None,
            emit_extensions: true,
            indented: true,
        }
    }

    /// A compact writer that leaves extensions out; used for hashing.
    pub(crate) fn canonical() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
            open: Vec::new(),
            pending: None,
            emit_extensions: false,
            indented: false,
        }
    }

    pub fn emits_extensions(&self) -> bool {
        self.emit_extensions
    }

    pub fn write_declaration(&mut self) -> Result<()> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
    }

    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_string()));
        self.open.push(OpenElement {
            name: name.to_string(),
            declared: Vec::new(),
        });
        Ok(())
    }

    /// Starts `prefix:name` and declares the prefix unless already in scope.
    pub fn start_element_ns(&mut self, prefix: Option<&str>, name: &str, namespace: &str) -> Result<()> {
        let qualified = match prefix {
            Some(p) => format!("{}:{}", p, name),
            None => name.to_string(),
        };
        self.start_element(&qualified)?;
        self.declare_namespace(prefix, namespace)
    }

    /// Adds `xmlns[:prefix]` to the pending start tag if the binding is not in scope.
    pub fn declare_namespace(&mut self, prefix: Option<&str>, namespace: &str) -> Result<()> {
        if prefix == Some("xml") || self.is_bound(prefix, namespace) {
            return Ok(());
        }
        let key = match prefix {
            Some(p) => format!("xmlns:{}", p),
            None => "xmlns".to_string(),
        };
        self.write_attribute(&key, namespace)?;
        if let Some(open) = self.open.last_mut() {
            open.declared
                .push((prefix.map(str::to_string), namespace.to_string()));
        }
        Ok(())
    }

    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        match self.pending.as_mut() {
            Some(start) => {
                start.push_attribute((name, value));
                Ok(())
            }
            None => Err(SyndicationError::write(format!(
                "attribute {} written outside a start tag",
                name
            ))),
        }
    }

    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.emit(Event::Text(BytesText::new(text)))
    }

    /// Writes `<name>text</name>`.
    pub fn write_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start_element(name)?;
        self.write_text(text)?;
        self.end_element()
    }

    pub fn end_element(&mut self) -> Result<()> {
        let open = self
            .open
            .pop()
            .ok_or_else(|| SyndicationError::write("end_element without open element"))?;
        match self.pending.take() {
            Some(start) => self.emit(Event::Empty(start)),
            None => self.emit(Event::End(BytesEnd::new(open.name))),
        }
    }

    /// Writes a captured element tree verbatim, declaring the namespaces it uses.
    ///
    /// Indented output trims text and lays out child elements. Mixed content
    /// is written compactly instead so text and elements keep their order
    /// and whitespace.
    pub fn write_node(&mut self, node: &XmlNode) -> Result<()> {
        if self.indented && node.has_mixed_content() {
            return self.write_compact(node);
        }
        self.start_element(&node.qualified_name())?;
        if let Some(ns) = node.namespace() {
            self.declare_namespace(node.prefix(), ns)?;
        }
        for attr in node.attributes() {
            if let (Some(prefix), Some(ns)) = (attr.prefix.as_deref(), attr.namespace.as_deref()) {
                if ns != XML_NAMESPACE {
                    self.declare_namespace(Some(prefix), ns)?;
                }
            }
        }
        for attr in node.attributes() {
            self.write_attribute(&attr.qualified_name(), &attr.value)?;
        }
        if self.indented {
            if let Some(text) = node.value() {
                self.write_text(&text)?;
            }
            for child in node.elements() {
                self.write_node(child)?;
            }
        } else {
            for part in node.content() {
                match part {
                    XmlContent::Text(text) => self.write_text(text)?,
                    XmlContent::Element(child) => self.write_node(child)?,
                }
            }
        }
        self.end_element()
    }

    /// Serializes `node` without indentation and splices the bytes in,
    /// reusing the namespace bindings already in scope.
    fn write_compact(&mut self, node: &XmlNode) -> Result<()> {
        let mut compact = XmlWriter::canonical();
        compact.emit_extensions = self.emit_extensions;
        compact.open.push(OpenElement {
            name: String::new(),
            declared: self
                .open
                .iter()
                .flat_map(|o| o.declared.iter().cloned())
                .collect(),
        });
        compact.write_node(node)?;
        compact.open.pop();

        self.flush_pending()?;
        self.inner
            .get_mut()
            .extend_from_slice(&compact.inner.into_inner());
        Ok(())
    }

    /// Returns the written document. Fails if elements are still open.
    pub fn finish(mut self) -> Result<String> {
        if let Some(open) = self.open.last() {
            return Err(SyndicationError::write(format!(
                "element {} left open",
                open.name
            )));
        }
        self.flush_pending()?;
        String::from_utf8(self.inner.into_inner()).map_err(SyndicationError::write)
    }

    fn is_bound(&self, prefix: Option<&str>, namespace: &str) -> bool {
        self.open
            .iter()
            .rev()
            .flat_map(|o| o.declared.iter())
            .find(|(p, _)| p.as_deref() == prefix)
            .map(|(_, uri)| uri == namespace)
            .unwrap_or(false)
    }

    fn flush_pending(&mut self) -> Result<()> {
        match self.pending.take() {
            Some(start) => self.emit(Event::Start(start)),
            None => Ok(()),
        }
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.inner
            .write_event(event)
            .map_err(SyndicationError::write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements_and_empty_tags() {
        let mut w = XmlWriter::new();
        w.start_element("image").unwrap();
        w.write_element("title", "A & B").unwrap();
        w.start_element("empty").unwrap();
        w.write_attribute("flag", "true").unwrap();
        w.end_element().unwrap();
        w.end_element().unwrap();
        let xml = w.finish().unwrap();
        assert!(xml.contains("<title>A &amp; B</title>"));
        assert!(xml.contains(r#"<empty flag="true"/>"#));
        assert!(xml.starts_with("<image>"));
    }

    #[test]
    fn test_namespace_declared_once() {
        let mut w = XmlWriter::new();
        w.start_element_ns(None, "rss", "urn:rss").unwrap();
        w.declare_namespace(Some("atom"), "http://www.w3.org/2005/Atom").unwrap();
        w.start_element_ns(Some("atom"), "link", "http://www.w3.org/2005/Atom").unwrap();
        w.end_element().unwrap();
        w.end_element().unwrap();
        let xml = w.finish().unwrap();
        assert_eq!(xml.matches("xmlns:atom").count(), 1);
    }

    #[test]
    fn test_unbalanced() {
        let mut w = XmlWriter::new();
        assert!(w.end_element().is_err());
        w.start_element("a").unwrap();
        assert!(w.finish().is_err());
    }

    #[test]
    fn test_mixed_content_round_trip() {
        let node = XmlNode::parse_str(
            r#"<x:p xmlns:x="urn:x">Hello <x:b>big</x:b>  wide <x:i>world</x:i>!</x:p>"#,
        )
        .unwrap();
        let mut w = XmlWriter::new();
        w.start_element("item").unwrap();
        w.declare_namespace(Some("x"), "urn:x").unwrap();
        w.write_node(&node).unwrap();
        w.end_element().unwrap();
        let xml = w.finish().unwrap();

        assert!(xml.contains("<x:p>Hello <x:b>big</x:b>  wide <x:i>world</x:i>!</x:p>"));
        let item = XmlNode::parse_str(&xml).unwrap();
        let reparsed = item.child_ns("p", "urn:x").unwrap();
        assert_eq!(reparsed.content(), node.content());
        assert_eq!(reparsed.text(), "Hello   wide !");
    }

    #[test]
    fn test_round_trip_node() {
        let node = XmlNode::parse_str(
            r#"<dc:creator xmlns:dc="http://purl.org/dc/elements/1.1/" role="x">Jane</dc:creator>"#,
        )
        .unwrap();
        let mut w = XmlWriter::new();
        w.write_node(&node).unwrap();
        let reparsed = XmlNode::parse_str(&w.finish().unwrap()).unwrap();
        assert_eq!(reparsed.namespace(), Some("http://purl.org/dc/elements/1.1/"));
        assert_eq!(reparsed.value().as_deref(), Some("Jane"));
        assert_eq!(reparsed.attribute("role"), Some("x"));
    }
}

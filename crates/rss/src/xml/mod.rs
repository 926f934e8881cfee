// ABOUTME: XML navigation and writing primitives for the RSS entities.
// ABOUTME: Re-exports the element tree reader and the streaming writer.

mod node;
mod writer;

pub use node::{XmlAttribute, XmlContent, XmlNode, XML_NAMESPACE};
pub use writer::XmlWriter;

/// Atom namespace, used for the channel self link.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

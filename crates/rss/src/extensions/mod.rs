// ABOUTME: Extension bag support: the Extensible capability and the extension adapter seam.
// ABOUTME: Captures foreign-namespace elements on load and writes them back last on serialize.

pub mod itunes;

pub use itunes::{ItunesExtension, ITUNES_NAMESPACE};

use crate::error::Result;
use crate::settings::SyndicationSettings;
use crate::xml::{XmlNode, XmlWriter};

/// Foreign-namespace data attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyndicationExtension {
    Itunes(ItunesExtension),
    /// Any other foreign element, kept verbatim.
    Element(XmlNode),
}

impl SyndicationExtension {
    pub fn namespace(&self) -> Option<&str> {
        match self {
            SyndicationExtension::Itunes(_) => Some(ITUNES_NAMESPACE),
            SyndicationExtension::Element(node) => node.namespace(),
        }
    }

    /// Preferred prefix for declaring this extension's namespace.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            SyndicationExtension::Itunes(_) => Some("itunes"),
            SyndicationExtension::Element(node) => node.prefix(),
        }
    }

    pub fn write_to(&self, writer: &mut XmlWriter) -> Result<()> {
        match self {
            SyndicationExtension::Itunes(ext) => ext.write_to(writer),
            SyndicationExtension::Element(node) => writer.write_node(node),
        }
    }
}

/// Capability shared by every entity that carries an extension bag.
pub trait Extensible {
    fn extensions(&self) -> &[SyndicationExtension];

    fn extensions_mut(&mut self) -> &mut Vec<SyndicationExtension>;

    /// Foreign elements the entity reads itself and the adapter must skip.
    fn claims(&self, _element: &XmlNode) -> bool {
        false
    }

    fn has_extensions(&self) -> bool {
        !self.extensions().is_empty()
    }

    /// Appends `extension` unless an equal one is already present.
    fn add_extension(&mut self, extension: SyndicationExtension) -> bool {
        if self.extensions().contains(&extension) {
            return false;
        }
        self.extensions_mut().push(extension);
        true
    }

    fn remove_extension(&mut self, extension: &SyndicationExtension) -> bool {
        let bag = self.extensions_mut();
        match bag.iter().position(|e| e == extension) {
            Some(idx) => {
                bag.remove(idx);
                true
            }
            None => false,
        }
    }

    fn find_extension(
        &self,
        predicate: &dyn Fn(&SyndicationExtension) -> bool,
    ) -> Option<&SyndicationExtension> {
        self.extensions().iter().find(|e| predicate(e))
    }
}

/// Discovers extension data while loading and serializes it while writing.
pub trait ExtensionAdapter {
    /// Scans the children of `node` and attaches extensions to `entity`.
    fn fill(&self, entity: &mut dyn Extensible, node: &XmlNode, settings: &SyndicationSettings);

    /// Writes `extensions` at the writer's current position.
    fn write_extensions_to(
        &self,
        extensions: &[SyndicationExtension],
        writer: &mut XmlWriter,
    ) -> Result<()>;
}

/// Default adapter: every namespaced child the entity does not claim becomes
/// an extension. Modelled iTunes elements are grouped into one typed record;
/// the remaining iTunes elements are kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceExtensionAdapter;

impl ExtensionAdapter for NamespaceExtensionAdapter {
    fn fill(&self, entity: &mut dyn Extensible, node: &XmlNode, settings: &SyndicationSettings) {
        if !settings.auto_detect_extensions {
            return;
        }

        let mut found = Vec::new();
        let mut itunes_seen = false;
        for child in node.elements() {
            let Some(ns) = child.namespace() else {
                continue;
            };
            if entity.claims(child) || !settings.supports_namespace(ns) {
                continue;
            }
            if ns == ITUNES_NAMESPACE && ItunesExtension::models(child.name()) {
                if !itunes_seen {
                    itunes_seen = true;
                    if let Some(ext) = ItunesExtension::from_node(node) {
                        found.push(SyndicationExtension::Itunes(ext));
                    }
                }
                continue;
            }
            found.push(SyndicationExtension::Element(child.clone()));
        }

        if !found.is_empty() {
            tracing::debug!(
                element = node.name(),
                count = found.len(),
                "attached extensions"
            );
        }
        for ext in found {
            entity.add_extension(ext);
        }
    }

    fn write_extensions_to(
        &self,
        extensions: &[SyndicationExtension],
        writer: &mut XmlWriter,
    ) -> Result<()> {
        if !writer.emits_extensions() {
            return Ok(());
        }
        for ext in extensions {
            ext.write_to(writer)?;
        }
        Ok(())
    }
}

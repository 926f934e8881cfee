// ABOUTME: Load settings passed to channel loaders and the extension adapter.
// ABOUTME: Supports defaults, fluent builder methods, and TOML deserialization.

use serde::Deserialize;

use crate::error::{Result, SyndicationError};

/// Settings consumed by the `load_with_settings` family of loaders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyndicationSettings {
    /// Maximum number of items retained when loading a channel. `0` means unlimited.
    pub retrieval_limit: usize,
    /// When false, the extension adapter leaves every extension bag empty.
    pub auto_detect_extensions: bool,
    /// Namespaces the adapter may capture. Empty means every foreign namespace.
    pub supported_namespaces: Vec<String>,
}

impl Default for SyndicationSettings {
    fn default() -> Self {
        Self {
            retrieval_limit: 0,
            auto_detect_extensions: true,
            supported_namespaces: Vec::new(),
        }
    }
}

impl SyndicationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SyndicationError::Config(e.to_string()))
    }

    pub fn with_retrieval_limit(mut self, limit: usize) -> Self {
        self.retrieval_limit = limit;
        self
    }

    pub fn with_auto_detect_extensions(mut self, enabled: bool) -> Self {
        self.auto_detect_extensions = enabled;
        self
    }

    pub fn with_supported_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.supported_namespaces.push(namespace.into());
        self
    }

    /// True when `count` items already exceed a non-zero retrieval limit.
    pub fn exceeds_limit(&self, count: usize) -> bool {
        self.retrieval_limit != 0 && count > self.retrieval_limit
    }

    /// True when the adapter is allowed to capture elements in `namespace`.
    pub fn supports_namespace(&self, namespace: &str) -> bool {
        self.supported_namespaces.is_empty()
            || self.supported_namespaces.iter().any(|ns| ns == namespace)
    }
}

// ABOUTME: RSS <cloud> entity describing the rssCloud change-notification endpoint.
// ABOUTME: Includes the CloudProtocol enum and its wire names.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{LoadContext, RssEntity};
use crate::error::{Result, SyndicationError};
use crate::extensions::{ExtensionAdapter, SyndicationExtension};
use crate::text::{compare_opt_ignore_case, normalize, parse_number};
use crate::xml::{XmlNode, XmlWriter};

/// Notification protocol of an rssCloud endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CloudProtocol {
    /// Unset. Never accepted by `RssCloud::set_protocol`.
    None,
    Soap,
    #[default]
    XmlRpc,
    HttpPost,
}

impl CloudProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProtocol::None => "",
            CloudProtocol::Soap => "soap",
            CloudProtocol::XmlRpc => "xml-rpc",
            CloudProtocol::HttpPost => "http-post",
        }
    }
}

impl fmt::Display for CloudProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProtocol {
    type Err = SyndicationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "soap" => Ok(CloudProtocol::Soap),
            "xml-rpc" | "xmlrpc" => Ok(CloudProtocol::XmlRpc),
            "http-post" => Ok(CloudProtocol::HttpPost),
            _ => Err(SyndicationError::InvalidProtocol),
        }
    }
}

/// `<cloud domain="rpc.sys.com" port="80" path="/RPC2" registerProcedure="pingMe" protocol="soap"/>`
#[derive(Debug, Clone)]
pub struct RssCloud {
    domain: Option<String>,
    port: u16,
    path: Option<String>,
    register_procedure: Option<String>,
    protocol: CloudProtocol,
    pub(super) extensions: Vec<SyndicationExtension>,
}

impl Default for RssCloud {
    fn default() -> Self {
        Self {
            domain: None,
            port: Self::DEFAULT_PORT,
            path: None,
            register_procedure: None,
            protocol: CloudProtocol::default(),
            extensions: Vec::new(),
        }
    }
}

impl RssCloud {
    pub const DEFAULT_PORT: u16 = 80;

    pub fn new(
        domain: &str,
        port: u16,
        path: &str,
        register_procedure: &str,
        protocol: CloudProtocol,
    ) -> Result<Self> {
        let mut cloud = Self {
            port,
            ..Self::default()
        };
        cloud.set_domain(domain)?;
        cloud.set_path(path)?;
        cloud.set_register_procedure(register_procedure)?;
        cloud.set_protocol(protocol)?;
        Ok(cloud)
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn set_domain(&mut self, domain: &str) -> Result<()> {
        self.domain = Some(normalize(domain).ok_or(SyndicationError::empty("domain"))?);
        Ok(())
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: &str) -> Result<()> {
        self.path = Some(normalize(path).ok_or(SyndicationError::empty("path"))?);
        Ok(())
    }

    pub fn register_procedure(&self) -> Option<&str> {
        self.register_procedure.as_deref()
    }

    pub fn set_register_procedure(&mut self, procedure: &str) -> Result<()> {
        self.register_procedure =
            Some(normalize(procedure).ok_or(SyndicationError::empty("registerProcedure"))?);
        Ok(())
    }

    pub fn protocol(&self) -> CloudProtocol {
        self.protocol
    }

    /// Rejects `CloudProtocol::None`.
    pub fn set_protocol(&mut self, protocol: CloudProtocol) -> Result<()> {
        if protocol == CloudProtocol::None {
            return Err(SyndicationError::InvalidProtocol);
        }
        self.protocol = protocol;
        Ok(())
    }
}

impl RssEntity for RssCloud {
    fn read(&mut self, node: &XmlNode, ctx: Option<&LoadContext<'_>>) -> bool {
        let mut loaded = false;

        if let Some(domain) = node.attribute("domain").and_then(normalize) {
            self.domain = Some(domain);
            loaded = true;
        }
        if let Some(raw) = node.attribute("port") {
            match parse_number::<u16>(raw) {
                Some(port) => {
                    self.port = port;
                    loaded = true;
                }
                None => tracing::warn!(value = raw, "skipping unparsable cloud port"),
            }
        }
        if let Some(path) = node.attribute("path").and_then(normalize) {
            self.path = Some(path);
            loaded = true;
        }
        if let Some(procedure) = node.attribute("registerProcedure").and_then(normalize) {
            self.register_procedure = Some(procedure);
            loaded = true;
        }
        if let Some(raw) = node.attribute("protocol") {
            match raw.parse::<CloudProtocol>() {
                Ok(protocol) => {
                    self.protocol = protocol;
                    loaded = true;
                }
                Err(_) => tracing::warn!(value = raw, "skipping unknown cloud protocol"),
            }
        }

        if let Some(ctx) = ctx {
            ctx.fill(self, node);
        }
        loaded
    }

    fn write(&self, writer: &mut XmlWriter, adapter: &dyn ExtensionAdapter) -> Result<()> {
        writer.start_element("cloud")?;
        if let Some(ref domain) = self.domain {
            writer.write_attribute("domain", domain)?;
        }
        writer.write_attribute("port", &self.port.to_string())?;
        if let Some(ref path) = self.path {
            writer.write_attribute("path", path)?;
        }
        if let Some(ref procedure) = self.register_procedure {
            writer.write_attribute("registerProcedure", procedure)?;
        }
        if self.protocol != CloudProtocol::None {
            writer.write_attribute("protocol", self.protocol.as_str())?;
        }
        adapter.write_extensions_to(&self.extensions, writer)?;
        writer.end_element()
    }
}

impl Ord for RssCloud {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_opt_ignore_case(self.domain.as_deref(), other.domain.as_deref())
            .then_with(|| compare_opt_ignore_case(self.path.as_deref(), other.path.as_deref()))
            .then_with(|| self.port.cmp(&other.port))
            .then_with(|| self.protocol.cmp(&other.protocol))
            .then_with(|| {
                compare_opt_ignore_case(
                    self.register_procedure.as_deref(),
                    other.register_procedure.as_deref(),
                )
            })
    }
}

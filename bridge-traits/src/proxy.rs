//! System Proxy Configuration Lookup
//!
//! Read-only view of the host's network proxy settings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// An HTTP proxy endpoint read from the host's network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The `host:port` form the UI layer consumes.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Proxy settings resolver trait
///
/// Snapshots the system HTTP proxy so the UI runtime can route its own
/// traffic through it.
///
/// # Platform Support
///
/// - **Desktop**: environment variables or platform network APIs
/// - **iOS/macOS**: `CFNetworkCopySystemProxySettings`
/// - **Android**: `System.getProperty("http.proxyHost"/"http.proxyPort")`
///
/// # Example
///
/// ```ignore
/// use bridge_traits::proxy::ProxyResolver;
///
/// async fn proxy_string(resolver: &dyn ProxyResolver) -> String {
///     match resolver.http_proxy().await {
///         Ok(Some(config)) => config.authority(),
///         _ => String::new(),
///     }
/// }
/// ```
#[async_trait]
pub trait ProxyResolver: Send + Sync {
    /// Snapshot the system HTTP proxy, if one is configured.
    ///
    /// A host with no proxy configured returns `Ok(None)`; absence of
    /// configuration is a valid outcome, not an error.
    async fn http_proxy(&self) -> Result<Option<ProxyConfig>>;
}

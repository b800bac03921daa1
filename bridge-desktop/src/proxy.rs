//! Proxy Lookup from the Process Environment

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    proxy::{ProxyConfig, ProxyResolver},
};
use tracing::debug;

/// Environment-variable proxy resolver
///
/// Reads `HTTP_PROXY`/`http_proxy` the way command-line tooling does.
///
/// Note: platform-native lookups (SystemConfiguration, WinHTTP, GSettings)
/// would be more faithful to the desktop's own settings but require
/// per-OS dependencies.
pub struct EnvProxyResolver;

impl EnvProxyResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvProxyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProxyResolver for EnvProxyResolver {
    async fn http_proxy(&self) -> Result<Option<ProxyConfig>> {
        let raw = std::env::var("HTTP_PROXY")
            .or_else(|_| std::env::var("http_proxy"))
            .ok();
        let config = raw.as_deref().and_then(parse_proxy_spec);

        debug!(configured = config.is_some(), "proxy snapshot read");
        Ok(config)
    }
}

/// Parse `host:port`, tolerating a scheme prefix and a trailing slash.
/// Anything else reads as "no proxy configured".
fn parse_proxy_spec(raw: &str) -> Option<ProxyConfig> {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);
    let authority = without_scheme.strip_suffix('/').unwrap_or(without_scheme);

    let (host, port) = authority.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port: u16 = port.parse().ok()?;

    Some(ProxyConfig::new(host, port))
}

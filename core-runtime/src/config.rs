//! # Host Configuration
//!
//! Builder for the platform capabilities the native host requires.
//!
//! ## Overview
//!
//! The configuration system uses a builder to collect the bridge trait
//! objects ([`ProxyResolver`], [`IdleLock`], [`ScopedAccess`],
//! [`FolderPicker`]) and enforces fail-fast validation: a missing
//! capability is reported with an actionable message at build time, before
//! the host starts serving the channel.
//!
//! When the `desktop-shims` feature is enabled, desktop adapters from
//! `bridge-desktop` are injected automatically for anything not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::HostConfig;
//! use std::sync::Arc;
//!
//! let config = HostConfig::builder()
//!     .proxy_resolver(Arc::new(MyProxyResolver))
//!     .idle_lock(Arc::new(MyIdleLock))
//!     .scoped_access(Arc::new(MyScopedAccess))
//!     .folder_picker(Arc::new(MyFolderPicker))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{FolderPicker, IdleLock, ProxyResolver, ScopedAccess};
use std::sync::Arc;

/// Bridge capabilities required to serve the channel.
///
/// Use [`HostConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct HostConfig {
    /// Read-only snapshot of the system proxy settings.
    pub proxy_resolver: Arc<dyn ProxyResolver>,

    /// Display idle-lock control.
    pub idle_lock: Arc<dyn IdleLock>,

    /// Security-scoped access begin/end primitives.
    pub scoped_access: Arc<dyn ScopedAccess>,

    /// Modal folder-picker surface.
    pub folder_picker: Arc<dyn FolderPicker>,
}

impl HostConfig {
    pub fn builder() -> HostConfigBuilder {
        HostConfigBuilder::default()
    }
}

/// Builder for [`HostConfig`].
#[derive(Default)]
pub struct HostConfigBuilder {
    proxy_resolver: Option<Arc<dyn ProxyResolver>>,
    idle_lock: Option<Arc<dyn IdleLock>>,
    scoped_access: Option<Arc<dyn ScopedAccess>>,
    folder_picker: Option<Arc<dyn FolderPicker>>,
}

impl HostConfigBuilder {
    pub fn proxy_resolver(mut self, resolver: Arc<dyn ProxyResolver>) -> Self {
        self.proxy_resolver = Some(resolver);
        self
    }

    pub fn idle_lock(mut self, idle_lock: Arc<dyn IdleLock>) -> Self {
        self.idle_lock = Some(idle_lock);
        self
    }

    pub fn scoped_access(mut self, scoped_access: Arc<dyn ScopedAccess>) -> Self {
        self.scoped_access = Some(scoped_access);
        self
    }

    pub fn folder_picker(mut self, folder_picker: Arc<dyn FolderPicker>) -> Self {
        self.folder_picker = Some(folder_picker);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] naming the first capability
    /// that has neither an explicit adapter nor a platform default.
    pub fn build(self) -> Result<HostConfig> {
        #[cfg(feature = "desktop-shims")]
        let this = self.with_desktop_defaults();
        #[cfg(not(feature = "desktop-shims"))]
        let this = self;

        Ok(HostConfig {
            proxy_resolver: this.proxy_resolver.ok_or_else(|| {
                missing(
                    "ProxyResolver",
                    "No proxy resolver provided. Desktop: enable the desktop-shims \
                     feature. Mobile: inject the platform-native adapter.",
                )
            })?,
            idle_lock: this.idle_lock.ok_or_else(|| {
                missing(
                    "IdleLock",
                    "No idle-lock control provided. Desktop: enable the desktop-shims \
                     feature. Mobile: inject the platform-native adapter.",
                )
            })?,
            scoped_access: this.scoped_access.ok_or_else(|| {
                missing(
                    "ScopedAccess",
                    "No scoped-access adapter provided. Desktop: enable the \
                     desktop-shims feature. Mobile: inject the platform-native adapter.",
                )
            })?,
            folder_picker: this.folder_picker.ok_or_else(|| {
                missing(
                    "FolderPicker",
                    "No folder picker provided. Desktop: enable the desktop-shims \
                     feature. Mobile: inject the platform-native adapter.",
                )
            })?,
        })
    }

    #[cfg(feature = "desktop-shims")]
    fn with_desktop_defaults(mut self) -> Self {
        use bridge_desktop::{DesktopIdleLock, DesktopScopedAccess, EnvProxyResolver, RfdFolderPicker};

        self.proxy_resolver
            .get_or_insert_with(|| Arc::new(EnvProxyResolver::new()));
        self.idle_lock
            .get_or_insert_with(|| Arc::new(DesktopIdleLock::new()));
        self.scoped_access
            .get_or_insert_with(|| Arc::new(DesktopScopedAccess::new()));
        self.folder_picker
            .get_or_insert_with(|| Arc::new(RfdFolderPicker::new()));
        self
    }
}

fn missing(capability: &str, message: &str) -> Error {
    Error::CapabilityMissing {
        capability: capability.to_string(),
        message: message.to_string(),
    }
}

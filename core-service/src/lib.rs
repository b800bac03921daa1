//! Host service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (proxy lookup,
//! idle lock, scoped access, folder picker) into the channel core. Desktop
//! apps typically enable the `desktop-shims` feature (which pulls in
//! `bridge-desktop` defaults through `core-runtime`), whereas mobile hosts
//! inject their platform-native adapters explicitly.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use tracing::debug;

use core_channel::handlers::{
    GetDirectoryPathHandler, GetProxyHandler, SetScreenOnHandler, StopScopedAccessHandler,
};
use core_channel::{methods, ChannelDispatcher, ChannelReply, MethodCall, PickerSession};
use core_runtime::config::HostConfig;

/// Primary façade exposed to host applications.
///
/// Owns the dispatcher with every channel method registered, and the picker
/// session the directory methods share.
///
/// ```ignore
/// use core_service::HostService;
/// use core_channel::{methods, MethodCall};
///
/// # async fn example(service: HostService) -> core_service::Result<()> {
/// let reply = service.invoke(MethodCall::new(methods::GET_PROXY)).await?;
/// # Ok(())
/// # }
/// ```
pub struct HostService {
    dispatcher: ChannelDispatcher,
    session: Arc<PickerSession>,
}

impl HostService {
    /// Wire the configured bridges into a ready-to-serve dispatcher.
    pub fn new(config: HostConfig) -> Result<Self> {
        let session = Arc::new(PickerSession::new(
            Arc::clone(&config.folder_picker),
            Arc::clone(&config.scoped_access),
        ));

        let mut dispatcher = ChannelDispatcher::new();
        dispatcher.register(
            methods::GET_PROXY,
            Arc::new(GetProxyHandler::new(Arc::clone(&config.proxy_resolver))),
        )?;
        dispatcher.register(
            methods::SET_SCREEN_ON,
            Arc::new(SetScreenOnHandler::new(Arc::clone(&config.idle_lock))),
        )?;
        dispatcher.register(
            methods::GET_DIRECTORY_PATH,
            Arc::new(GetDirectoryPathHandler::new(Arc::clone(&session))),
        )?;
        dispatcher.register(
            methods::STOP_ACCESSING_SCOPED_RESOURCE,
            Arc::new(StopScopedAccessHandler::new(Arc::clone(&session))),
        )?;

        debug!("channel methods registered");
        Ok(Self {
            dispatcher,
            session,
        })
    }

    /// Dispatch one channel call and wait for its reply.
    ///
    /// `getDirectoryPath` suspends here until the user resolves the picker.
    pub async fn invoke(&self, call: MethodCall) -> Result<ChannelReply> {
        Ok(self.dispatcher.call(call).await?)
    }

    /// The picker session backing the directory-selection methods.
    pub fn session(&self) -> Arc<PickerSession> {
        Arc::clone(&self.session)
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// ```ignore
/// let service = core_service::bootstrap_desktop()?;
/// let reply = service.invoke(MethodCall::new(methods::GET_PROXY)).await?;
/// ```
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop() -> Result<HostService> {
    let config = HostConfig::builder()
        .build()
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    HostService::new(config)
}

//! System Query Handlers
//!
//! Stateless handlers answering immediate questions, plus the handler that
//! hands `getDirectoryPath` over to the picker session. None of these keep
//! state beyond the single call.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use bridge_traits::power::IdleLock;
use bridge_traits::proxy::ProxyResolver;

use crate::dispatcher::MethodHandler;
use crate::message::ChannelReply;
use crate::responder::Responder;
use crate::session::PickerSession;

/// Answers `getProxy` with `host:port`, or the empty string when no proxy
/// is configured.
pub struct GetProxyHandler {
    resolver: Arc<dyn ProxyResolver>,
}

impl GetProxyHandler {
    pub fn new(resolver: Arc<dyn ProxyResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl MethodHandler for GetProxyHandler {
    async fn handle(&self, _args: Option<Value>, responder: Responder) {
        // Absence of configuration and resolver failure both read as "no
        // proxy"; this request never fails.
        let authority = match self.resolver.http_proxy().await {
            Ok(Some(config)) => config.authority(),
            Ok(None) => String::new(),
            Err(err) => {
                warn!(error = %err, "proxy lookup failed; reporting no proxy");
                String::new()
            }
        };
        responder.send_or_log(ChannelReply::ok(authority));
    }
}

/// Answers `setScreenOn` by toggling the idle lock. Always acknowledges.
pub struct SetScreenOnHandler {
    idle_lock: Arc<dyn IdleLock>,
}

impl SetScreenOnHandler {
    pub fn new(idle_lock: Arc<dyn IdleLock>) -> Self {
        Self { idle_lock }
    }
}

#[async_trait]
impl MethodHandler for SetScreenOnHandler {
    async fn handle(&self, args: Option<Value>, responder: Responder) {
        match args.as_ref().and_then(Value::as_bool) {
            Some(keep_awake) => {
                if let Err(err) = self.idle_lock.set_keep_awake(keep_awake).await {
                    warn!(error = %err, "idle lock toggle failed");
                }
            }
            // A missing or malformed argument is ignored; the request is
            // still acknowledged.
            None => warn!("setScreenOn called without a boolean argument"),
        }
        responder.send_or_log(ChannelReply::ok_empty());
    }
}

/// Answers `stopAccessingSecurityScopedResource` by releasing the session's
/// grant. Idempotent; always acknowledges.
pub struct StopScopedAccessHandler {
    session: Arc<PickerSession>,
}

impl StopScopedAccessHandler {
    pub fn new(session: Arc<PickerSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl MethodHandler for StopScopedAccessHandler {
    async fn handle(&self, _args: Option<Value>, responder: Responder) {
        self.session.release().await;
        responder.send_or_log(ChannelReply::ok_empty());
    }
}

/// Parks the responder in the session and presents the folder picker. The
/// reply arrives once the user confirms or dismisses the surface.
pub struct GetDirectoryPathHandler {
    session: Arc<PickerSession>,
}

impl GetDirectoryPathHandler {
    pub fn new(session: Arc<PickerSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl MethodHandler for GetDirectoryPathHandler {
    async fn handle(&self, _args: Option<Value>, responder: Responder) {
        Arc::clone(&self.session).request_directory(responder).await;
    }
}

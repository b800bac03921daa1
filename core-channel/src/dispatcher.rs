//! Channel Dispatcher
//!
//! Routes a named request to the unique handler registered for its name and
//! owns the contract that every request receives exactly one reply.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ChannelError, Result};
use crate::message::{ChannelReply, MethodCall};
use crate::responder::{ReplyReceiver, Responder};

/// A handler for one channel method.
///
/// Implementations must resolve the responder exactly once. Immediate
/// handlers do so before returning; suspending handlers park it and resolve
/// it from a later completion path.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn handle(&self, args: Option<Value>, responder: Responder);
}

/// Routes inbound calls to registered handlers.
///
/// Request ordering across different method names is whatever the transport
/// delivers; the only guarantee is that each call's reply corresponds to
/// that call, which the per-call [`Responder`] enforces.
#[derive(Default)]
pub struct ChannelDispatcher {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl ChannelDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register the unique handler for `method`.
    ///
    /// Registering a second handler for the same name is an error, not a
    /// silent replacement.
    pub fn register(
        &mut self,
        method: impl Into<String>,
        handler: Arc<dyn MethodHandler>,
    ) -> Result<()> {
        let method = method.into();
        if self.handlers.contains_key(&method) {
            return Err(ChannelError::DuplicateHandler(method));
        }
        self.handlers.insert(method, handler);
        Ok(())
    }

    /// Dispatch `call`, returning the receiver for its single reply.
    ///
    /// Unknown method names are answered with
    /// [`ChannelReply::NotImplemented`] rather than dropped.
    pub async fn dispatch(&self, call: MethodCall) -> ReplyReceiver {
        let MethodCall { method, args } = call;
        let (responder, receiver) = Responder::channel(method.clone());

        match self.handlers.get(method.as_str()) {
            Some(handler) => {
                debug!(method = %method, "dispatching channel call");
                handler.handle(args, responder).await;
            }
            None => {
                warn!(method = %method, "no handler registered for channel call");
                responder.send_or_log(ChannelReply::NotImplemented);
            }
        }

        receiver
    }

    /// Dispatch `call` and wait for its reply.
    ///
    /// A handler that drops its responder without resolving it violates the
    /// one-reply contract; that surfaces here as `ReplyAbandoned`.
    pub async fn call(&self, call: MethodCall) -> Result<ChannelReply> {
        let method = call.method.clone();
        match self.dispatch(call).await.await {
            Ok(reply) => Ok(reply),
            Err(_) => Err(ChannelError::ReplyAbandoned { method }),
        }
    }
}

//! One-Shot Reply Capability
//!
//! The dispatcher mints one [`Responder`] per inbound request; whoever ends
//! up answering the request consumes it. Backing it with a oneshot sender
//! makes double resolution unrepresentable rather than merely discouraged.

use tokio::sync::oneshot;
use tracing::warn;

use crate::error::{ChannelError, Result};
use crate::message::ChannelReply;

/// Receiving half for a dispatched request's reply.
pub type ReplyReceiver = oneshot::Receiver<ChannelReply>;

/// Single-use capability to answer one dispatched request.
///
/// `send` consumes the responder, so a request can be answered at most
/// once. Immediate handlers resolve it before returning; the picker session
/// parks it and resolves it from a later OS-driven completion.
#[derive(Debug)]
pub struct Responder {
    method: String,
    tx: oneshot::Sender<ChannelReply>,
}

impl Responder {
    /// Create a responder/receiver pair for `method`.
    pub fn channel(method: impl Into<String>) -> (Self, ReplyReceiver) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                method: method.into(),
                tx,
            },
            rx,
        )
    }

    /// Method name this responder answers.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Resolve the request with `reply`, consuming the responder.
    ///
    /// Fails only when the caller stopped waiting for the reply.
    pub fn send(self, reply: ChannelReply) -> Result<()> {
        let Self { method, tx } = self;
        tx.send(reply)
            .map_err(|_| ChannelError::ReceiverDropped { method })
    }

    /// Resolve the request, logging instead of failing when the caller has
    /// gone away. Handlers use this; a vanished caller is not their bug.
    pub fn send_or_log(self, reply: ChannelReply) {
        if let Err(err) = self.send(reply) {
            warn!(error = %err, "reply receiver dropped before resolution");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_delivers_reply() {
        let (responder, rx) = Responder::channel("getProxy");
        assert_eq!(responder.method(), "getProxy");

        responder.send(ChannelReply::ok("10.0.0.1:8080")).unwrap();
        assert_eq!(rx.await.unwrap(), ChannelReply::ok("10.0.0.1:8080"));
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        let (responder, rx) = Responder::channel("getProxy");
        drop(rx);

        let err = responder.send(ChannelReply::ok_empty()).unwrap_err();
        assert!(matches!(err, ChannelError::ReceiverDropped { .. }));
    }

    #[tokio::test]
    async fn test_dropped_responder_closes_receiver() {
        let (responder, rx) = Responder::channel("getDirectoryPath");
        drop(responder);

        // The receiver observes abandonment instead of hanging forever.
        assert!(rx.await.is_err());
    }
}

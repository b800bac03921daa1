//! Channel Message Types
//!
//! The named request and the single reply that crosses the UI↔native
//! channel. Payloads are JSON values; the transport encodes them however it
//! likes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Method names understood by the native host.
pub mod methods {
    /// Snapshot the system HTTP proxy; replies `host:port` or `""`.
    pub const GET_PROXY: &str = "getProxy";
    /// Toggle the display idle lock; boolean argument.
    pub const SET_SCREEN_ON: &str = "setScreenOn";
    /// Present the folder picker; replies the chosen path or empty.
    pub const GET_DIRECTORY_PATH: &str = "getDirectoryPath";
    /// Release the currently held security-scoped grant.
    pub const STOP_ACCESSING_SCOPED_RESOURCE: &str = "stopAccessingSecurityScopedResource";
}

/// A named request arriving from the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: None,
        }
    }

    pub fn with_args(method: impl Into<String>, args: impl Into<Value>) -> Self {
        Self {
            method: method.into(),
            args: Some(args.into()),
        }
    }
}

/// The single reply produced for a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ChannelReply {
    /// Handler completed; `None` is the empty acknowledgement.
    Success(Option<Value>),
    /// Handler-level failure surfaced to the UI layer.
    Error { code: String, message: String },
    /// No handler is registered for the requested method name.
    NotImplemented,
}

impl ChannelReply {
    /// Empty acknowledgement.
    pub fn ok_empty() -> Self {
        Self::Success(None)
    }

    /// Successful reply carrying a payload.
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Success(Some(value.into()))
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Payload string for `Success` replies, if one is present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success(Some(value)) => value.as_str(),
            _ => None,
        }
    }
}

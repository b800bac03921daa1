//! # Channel Core
//!
//! The native half of the UI↔native method channel: message types, the
//! one-shot reply capability, the dispatcher that routes named requests to
//! their unique handlers, and the single-slot session that bridges the
//! folder-picker callback back to its originally pending reply.
//!
//! ## Architecture
//!
//! ```text
//! UI layer ──MethodCall──> ChannelDispatcher ──> query handler  ──reply──┐
//!                                │                                       │
//!                                └──> PickerSession (parks Responder)    │
//!                                        │  present folder picker        │
//!                                        └──OS callback──────────reply───┤
//!                                                                        ▼
//!                                                              ReplyReceiver
//! ```
//!
//! Every dispatched call receives exactly one [`ChannelReply`]: immediately
//! for the query handlers, or once the user resolves the picker for
//! `getDirectoryPath`. Unknown method names are answered with
//! [`ChannelReply::NotImplemented`].

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod message;
pub mod responder;
pub mod session;

pub use dispatcher::{ChannelDispatcher, MethodHandler};
pub use error::ChannelError;
pub use message::{methods, ChannelReply, MethodCall};
pub use responder::{ReplyReceiver, Responder};
pub use session::{PickerSession, ScopedGrant, PICKER_BUSY};

//! # Host Bridge Traits
//!
//! Platform capability traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the channel core and
//! platform-specific adapters. Each trait represents an OS capability the
//! core consumes but cannot implement itself:
//!
//! - [`ProxyResolver`](proxy::ProxyResolver) - Snapshot of the system HTTP proxy settings
//! - [`IdleLock`](power::IdleLock) - Disable/restore automatic screen dimming
//! - [`ScopedAccess`](scoped::ScopedAccess) - Security-scoped filesystem grant begin/end
//! - [`FolderPicker`](picker::FolderPicker) - Modal, single-selection folder picker surface
//!
//! ## Platform Requirements
//!
//! Each supported platform ships concrete adapters for every trait:
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Desktop  | `bridge-desktop`    |
//! | iOS      | host app delegate   |
//! | Android  | host activity       |
//!
//! ## Error Handling
//!
//! All traits use [`BridgeError`](error::BridgeError). Adapters convert
//! platform-specific failures into it and keep messages actionable. Note
//! that for several operations (proxy lookup, picker cancellation) the
//! *absence* of a result is a valid outcome, not an error - those methods
//! return `Option`-shaped values instead.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so adapters can be shared across async
//! tasks behind `Arc`.

pub mod error;
pub mod picker;
pub mod power;
pub mod proxy;
pub mod scoped;

pub use error::BridgeError;

// Re-export commonly used types
pub use picker::{FolderPicker, PickerOptions, PickerOutcome};
pub use power::IdleLock;
pub use proxy::{ProxyConfig, ProxyResolver};
pub use scoped::ScopedAccess;

//! # Desktop Bridge Implementations
//!
//! Default implementations of the bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides working implementations of every bridge trait using
//! desktop-appropriate mechanisms:
//! - `ProxyResolver` from the process environment (`HTTP_PROXY`)
//! - `IdleLock` as a process-local flag
//! - `ScopedAccess` based on plain filesystem visibility (no sandbox scoping)
//! - `FolderPicker` using the `rfd` native directory dialog
//!
//! Mobile hosts replace these with platform-native adapters; on desktop
//! they let the whole channel run unmodified.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{EnvProxyResolver, RfdFolderPicker};
//! use bridge_traits::{FolderPicker, ProxyResolver};
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = EnvProxyResolver::new();
//!     let picker = RfdFolderPicker::new();
//!
//!     // Hand to HostConfig::builder()
//! }
//! ```

mod picker;
mod power;
mod proxy;
mod scoped;

pub use picker::RfdFolderPicker;
pub use power::DesktopIdleLock;
pub use proxy::EnvProxyResolver;
pub use scoped::DesktopScopedAccess;

//! # Host Runtime Module
//!
//! Foundational runtime infrastructure for the native host bridge:
//! - Logging and tracing bootstrap
//! - Host configuration with fail-fast capability validation
//!
//! ## Overview
//!
//! This crate holds the ambient pieces the channel core and the service
//! façade depend on. It establishes the logging conventions and the
//! capability-injection pattern used throughout the workspace: platform
//! adapters are provided as trait objects through [`config::HostConfig`],
//! and anything missing is reported before the host starts serving the
//! channel, not on first use.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

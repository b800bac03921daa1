//! Idle-Lock Implementation

use async_trait::async_trait;
use bridge_traits::{error::Result, power::IdleLock};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Process-local idle-lock stand-in
///
/// Tracks the requested state without asserting it against the OS.
///
/// Note: platform-specific implementations (`IOPMAssertion` on macOS,
/// `SetThreadExecutionState` on Windows, D-Bus screensaver inhibitors on
/// Linux) would actually hold the display awake but require additional
/// dependencies.
pub struct DesktopIdleLock {
    kept_awake: AtomicBool,
}

impl DesktopIdleLock {
    pub fn new() -> Self {
        Self {
            kept_awake: AtomicBool::new(false),
        }
    }
}

impl Default for DesktopIdleLock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdleLock for DesktopIdleLock {
    async fn set_keep_awake(&self, keep_awake: bool) -> Result<()> {
        self.kept_awake.store(keep_awake, Ordering::SeqCst);
        debug!(keep_awake = keep_awake, "idle lock updated");
        Ok(())
    }

    async fn is_kept_awake(&self) -> bool {
        self.kept_awake.load(Ordering::SeqCst)
    }
}

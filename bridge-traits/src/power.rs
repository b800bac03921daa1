//! Display Idle-Lock Control

use async_trait::async_trait;

use crate::error::Result;

/// Idle-lock control trait
///
/// Disables or restores the OS's automatic screen-dimming/lock behavior so
/// long-running foreground activity (e.g. reading) is not interrupted.
///
/// # Platform Support
///
/// - **iOS**: `UIApplication.isIdleTimerDisabled`
/// - **Android**: `FLAG_KEEP_SCREEN_ON`
/// - **Desktop**: power-management assertions (`IOPMAssertion`,
///   `SetThreadExecutionState`, D-Bus inhibitors)
///
/// Writes are last-write-wins; there is no reference counting.
#[async_trait]
pub trait IdleLock: Send + Sync {
    /// Keep the screen awake (`true`) or restore the system default (`false`).
    ///
    /// Always succeeds from the caller's perspective.
    async fn set_keep_awake(&self, keep_awake: bool) -> Result<()>;

    /// Whether the screen is currently being kept awake.
    async fn is_kept_awake(&self) -> bool;
}

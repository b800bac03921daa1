//! Security-Scoped Filesystem Access
//!
//! Begin/end primitives for OS-issued, revocable permissions to touch a
//! filesystem location outside the application sandbox.

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;

/// Scoped access trait
///
/// Wraps the host's security-scoped resource primitives. A grant is obtained
/// with [`begin_access`](ScopedAccess::begin_access) and must be balanced by
/// exactly one [`end_access`](ScopedAccess::end_access) once the location is
/// no longer needed. Callers own that discipline; implementations must not
/// be relied on to tolerate unbalanced pairs even where the OS happens to.
///
/// # Platform Support
///
/// - **iOS/macOS**: `startAccessingSecurityScopedResource` /
///   `stopAccessingSecurityScopedResource` on a security-scoped URL
/// - **Android**: persistable URI permissions via the SAF
/// - **Desktop**: no scoping; adapters grant access based on plain
///   filesystem visibility
#[async_trait]
pub trait ScopedAccess: Send + Sync {
    /// Begin scoped access on `path`.
    ///
    /// Returns `Ok(false)` when the OS refuses the grant; the location is
    /// then unusable and must not be retained by the caller.
    async fn begin_access(&self, path: &Path) -> Result<bool>;

    /// End scoped access previously begun on `path`.
    async fn end_access(&self, path: &Path) -> Result<()>;
}

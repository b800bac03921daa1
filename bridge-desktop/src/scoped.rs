//! Scoped Access Implementation
//!
//! Desktop filesystems have no security-scoped resources; a grant simply
//! reflects whether the location is a visible directory.

use async_trait::async_trait;
use bridge_traits::{error::Result, scoped::ScopedAccess};
use std::path::Path;
use tracing::debug;

/// Sandbox-free scoped access
///
/// `begin_access` grants when the path is an existing directory, which is
/// the closest desktop analogue to the mobile grant check; `end_access` has
/// nothing to release.
pub struct DesktopScopedAccess;

impl DesktopScopedAccess {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopScopedAccess {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScopedAccess for DesktopScopedAccess {
    async fn begin_access(&self, path: &Path) -> Result<bool> {
        let granted = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "path not accessible");
                false
            }
        };
        Ok(granted)
    }

    async fn end_access(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "scoped access ended");
        Ok(())
    }
}

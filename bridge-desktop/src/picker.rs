//! Native Folder Dialog

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    picker::{FolderPicker, PickerOptions, PickerOutcome},
};
use tracing::debug;

/// `rfd`-backed folder picker
///
/// Presents the platform's directory dialog from a blocking worker thread.
/// The dialog is modal, directories-only, and single-selection, matching
/// the channel contract; completion is user-paced with no timeout.
pub struct RfdFolderPicker;

impl RfdFolderPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RfdFolderPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FolderPicker for RfdFolderPicker {
    async fn pick_directory(&self, options: PickerOptions) -> Result<PickerOutcome> {
        let selection = tokio::task::spawn_blocking(move || {
            let mut dialog = rfd::FileDialog::new();
            if let Some(dir) = options.initial_directory {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_folder()
        })
        .await
        .map_err(|err| BridgeError::PickerFailed(err.to_string()))?;

        Ok(match selection {
            Some(path) => {
                debug!(path = %path.display(), "directory selected");
                PickerOutcome::Selected(vec![path])
            }
            None => {
                debug!("directory dialog dismissed");
                PickerOutcome::Cancelled
            }
        })
    }
}

//! Native Folder-Picker Surface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;

/// Presentation options for the folder picker.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Directory the picker opens at; the host default when `None`.
    pub initial_directory: Option<PathBuf>,
}

/// How the user resolved the picker surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// User confirmed a selection. Single-selection surfaces return at most
    /// one entry; an empty list is tolerated defensively by callers.
    Selected(Vec<PathBuf>),
    /// User dismissed the surface without selecting anything.
    Cancelled,
}

impl PickerOutcome {
    /// First selected location, if any.
    pub fn first(&self) -> Option<&PathBuf> {
        match self {
            PickerOutcome::Selected(paths) => paths.first(),
            PickerOutcome::Cancelled => None,
        }
    }
}

/// Folder picker trait
///
/// Presents a modal, directories-only, single-selection picker and resolves
/// when the user confirms or dismisses it. Completion is user-paced: the
/// returned future may stay pending indefinitely and no timeout is applied
/// by implementations.
///
/// # Platform Support
///
/// - **iOS**: `UIDocumentPickerViewController` with the folder content type
/// - **Android**: `ACTION_OPEN_DOCUMENT_TREE`
/// - **Desktop**: native directory dialog (`rfd`)
#[async_trait]
pub trait FolderPicker: Send + Sync {
    /// Present the picker and wait for the user to act.
    async fn pick_directory(&self, options: PickerOptions) -> Result<PickerOutcome>;
}

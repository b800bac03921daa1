//! Scoped Resource Session
//!
//! Single-slot state machine for the directory-selection flow. Tracks at
//! most one in-flight `getDirectoryPath` request and at most one held
//! security-scoped grant; the two are independent axes, since a grant
//! outlives the request that created it.
//!
//! All state lives behind one async mutex. The picker future runs on a
//! spawned task and re-enters the session through a single completion path,
//! so the picker callback is serialized with every other state access.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::picker::{FolderPicker, PickerOptions, PickerOutcome};
use bridge_traits::scoped::ScopedAccess;

use crate::message::ChannelReply;
use crate::responder::Responder;

/// Error code replied when a directory selection is already in flight.
pub const PICKER_BUSY: &str = "picker-busy";

/// A security-scoped location the session currently holds access to.
///
/// Existence of a grant implies `begin_access` reported success for its
/// path and `end_access` has not yet been called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedGrant {
    path: PathBuf,
}

impl ScopedGrant {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Default)]
struct SessionState {
    /// Parked reply for the in-flight `getDirectoryPath`, if any.
    pending: Option<Responder>,
    /// Grant from the last successful selection, if still held.
    grant: Option<ScopedGrant>,
}

/// Bridges the folder-picker callback back to the originally pending reply
/// and owns the scoped grant's lifecycle.
pub struct PickerSession {
    picker: Arc<dyn FolderPicker>,
    scoped: Arc<dyn ScopedAccess>,
    options: PickerOptions,
    state: Mutex<SessionState>,
}

impl PickerSession {
    pub fn new(picker: Arc<dyn FolderPicker>, scoped: Arc<dyn ScopedAccess>) -> Self {
        Self {
            picker,
            scoped,
            options: PickerOptions::default(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Use `options` when presenting the picker.
    pub fn with_picker_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Park `responder` and present the folder picker.
    ///
    /// A second request while one is outstanding is rejected immediately
    /// with a [`PICKER_BUSY`] error reply; the first request's parked reply
    /// is left undisturbed.
    pub async fn request_directory(self: Arc<Self>, responder: Responder) {
        {
            let mut state = self.state.lock().await;
            if state.pending.is_some() {
                drop(state);
                warn!("directory request while a selection is outstanding; rejecting");
                responder.send_or_log(ChannelReply::error(
                    PICKER_BUSY,
                    "a directory selection is already in progress",
                ));
                return;
            }
            state.pending = Some(responder);
        }

        let session = Arc::clone(&self);
        tokio::spawn(async move {
            let outcome = session
                .picker
                .pick_directory(session.options.clone())
                .await;
            session.finish_selection(outcome).await;
        });
    }

    /// Resolve the parked reply from the picker's completion.
    async fn finish_selection(&self, outcome: BridgeResult<PickerOutcome>) {
        let mut state = self.state.lock().await;
        let Some(responder) = state.pending.take() else {
            // One completion per presentation; anything else is a bug.
            warn!("picker completion with no pending request; dropping event");
            return;
        };

        let reply = match outcome {
            Ok(PickerOutcome::Selected(paths)) => match paths.into_iter().next() {
                Some(path) => self.adopt_selection(&mut state, path).await,
                // Confirmed with an empty selection list; nothing to hold.
                None => ChannelReply::ok_empty(),
            },
            Ok(PickerOutcome::Cancelled) => {
                debug!("folder picker cancelled");
                ChannelReply::ok_empty()
            }
            Err(err) => {
                warn!(error = %err, "folder picker failed; treating as cancellation");
                ChannelReply::ok_empty()
            }
        };

        drop(state);
        responder.send_or_log(reply);
    }

    /// Begin access on `path` and, on success, make it the held grant.
    ///
    /// Replacement order: begin new, end old, store new. A refused grant
    /// leaves any previously held grant untouched.
    async fn adopt_selection(&self, state: &mut SessionState, path: PathBuf) -> ChannelReply {
        match self.scoped.begin_access(&path).await {
            Ok(true) => {
                if let Some(previous) = state.grant.take() {
                    self.end_grant(previous).await;
                }
                let display_path = path.to_string_lossy().into_owned();
                info!(path = %display_path, "scoped access granted");
                state.grant = Some(ScopedGrant { path });
                ChannelReply::ok(display_path)
            }
            Ok(false) => {
                debug!(path = %path.display(), "scoped access refused; discarding selection");
                ChannelReply::ok_empty()
            }
            Err(err) => {
                warn!(error = %err, "begin_access failed; discarding selection");
                ChannelReply::ok_empty()
            }
        }
    }

    /// End the held grant, if any. No-op when nothing is held.
    pub async fn release(&self) {
        let mut state = self.state.lock().await;
        let Some(grant) = state.grant.take() else {
            debug!("release requested with no grant held");
            return;
        };
        self.end_grant(grant).await;
    }

    async fn end_grant(&self, grant: ScopedGrant) {
        if let Err(err) = self.scoped.end_access(&grant.path).await {
            warn!(path = %grant.path.display(), error = %err, "end_access failed");
        }
    }

    /// Path of the currently held grant, if any.
    pub async fn held_grant(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .await
            .grant
            .as_ref()
            .map(|grant| grant.path.clone())
    }

    /// Whether a selection flow is currently awaiting the user.
    pub async fn is_awaiting_selection(&self) -> bool {
        self.state.lock().await.pending.is_some()
    }
}

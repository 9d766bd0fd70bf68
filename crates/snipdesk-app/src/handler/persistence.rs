//! Autosave handlers

use chrono::Utc;
use snipdesk_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Snapshot the model and ask the frontend to write it.
/// Runs on the autosave interval and on page unload.
pub(crate) fn handle_save_workspace(state: &mut AppState) -> UpdateResult {
    let snapshot = state.snapshot(Utc::now());
    trace!(
        "Saving workspace: {} snippets, {} tutorials",
        snapshot.snippets.len(),
        snapshot.tutorials.len()
    );
    UpdateResult::action(UpdateAction::PersistWorkspace {
        key: state.settings.workspace.storage_key.clone(),
        snapshot,
    })
}

pub(crate) fn handle_workspace_saved(
    state: &mut AppState,
    result: std::result::Result<(), String>,
) -> UpdateResult {
    match result {
        Ok(()) => state.last_saved = Some(Utc::now()),
        Err(e) => warn!("Failed to save workspace: {}", Error::storage(e)),
    }
    UpdateResult::none()
}

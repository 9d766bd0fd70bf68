//! Startup handlers: settings, workspace restore, welcome toast

use snipdesk_core::prelude::*;
use snipdesk_core::WorkspaceSnapshot;

use crate::config::{load_settings, SETTINGS_PATH};
use crate::message::Message;
use crate::state::{AppState, LoadPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_startup(state: &mut AppState) -> UpdateResult {
    state.phase = LoadPhase::Initializing;
    UpdateResult::action(UpdateAction::FetchSettings {
        path: SETTINGS_PATH.to_string(),
    })
}

/// Apply settings, then start timers and continue with the restore step
pub(crate) fn handle_settings_fetched(state: &mut AppState, content: Option<&str>) -> UpdateResult {
    let previous_threshold = state.settings.ui.collapse_threshold;
    state.settings = load_settings(content);

    if state.settings.ui.collapse_threshold != previous_threshold {
        let changed = state.auto_collapse_code_blocks();
        debug!("Collapse threshold changed, {} blocks collapsed", changed);
    }

    UpdateResult::message_and_action(
        Message::RestoreWorkspace,
        UpdateAction::StartTimers {
            autosave_secs: state.settings.workspace.autosave_secs,
            welcome_delay_ms: state.settings.ui.welcome_delay_ms,
        },
    )
}

pub(crate) fn handle_restore_workspace(state: &mut AppState) -> UpdateResult {
    if !state.settings.workspace.restore_on_load {
        debug!("Workspace restore disabled");
        return UpdateResult::message(Message::LoadSnippets);
    }

    UpdateResult::action(UpdateAction::ReadStoredWorkspace {
        key: state.settings.workspace.storage_key.clone(),
    })
}

/// Rebuild added snippets and tutorials, then load the manifest.
/// A missing or unreadable snapshot only means starting empty.
pub(crate) fn handle_stored_workspace_loaded(
    state: &mut AppState,
    result: std::result::Result<Option<WorkspaceSnapshot>, String>,
) -> UpdateResult {
    match result {
        Ok(Some(snapshot)) => {
            let (snippets, tutorials) = state.restore(&snapshot);
            info!(
                "Restored {} snippets and {} tutorials from storage",
                snippets, tutorials
            );
        }
        Ok(None) => debug!("No saved workspace"),
        Err(e) => warn!("Ignoring saved workspace: {}", e),
    }

    UpdateResult::message(Message::LoadSnippets)
}

pub(crate) fn handle_show_welcome(state: &mut AppState) -> UpdateResult {
    if !state.settings.ui.welcome_message.is_empty() {
        let message = state.settings.ui.welcome_message.clone();
        state.notify_success(message);
    }
    UpdateResult::none()
}

//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the sibling modules; this file only
//! routes messages.

use crate::message::Message;
use crate::state::AppState;

use super::{
    keys::handle_key, persistence, snippets, startup, thumbnails, tutorials, UpdateResult,
};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Startup => startup::handle_startup(state),

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::ShowTab(tab) => {
            state.show_tab(tab);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Startup Messages
        // ─────────────────────────────────────────────────────────
        Message::SettingsFetched { content } => {
            startup::handle_settings_fetched(state, content.as_deref())
        }
        Message::RestoreWorkspace => startup::handle_restore_workspace(state),
        Message::StoredWorkspaceLoaded { result } => {
            startup::handle_stored_workspace_loaded(state, result)
        }
        Message::ShowWelcome => startup::handle_show_welcome(state),

        // ─────────────────────────────────────────────────────────
        // Snippet Loading Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadSnippets => snippets::handle_load_snippets(state),
        Message::ManifestFetched { result } => snippets::handle_manifest_fetched(state, result),
        Message::SnippetFileFetched { block, result } => {
            snippets::handle_snippet_file_fetched(state, block, result)
        }

        // ─────────────────────────────────────────────────────────
        // Snippet Messages
        // ─────────────────────────────────────────────────────────
        Message::AddCodeSnippet { snippet } => snippets::handle_add_code_snippet(state, snippet),
        Message::SnippetFormChanged { field, value } => {
            snippets::handle_form_changed(state, field, value)
        }
        Message::SnippetFormThumbnailSelected { file_name } => {
            snippets::handle_form_thumbnail_selected(state, file_name)
        }
        Message::SnippetFormThumbnailLoaded {
            selection,
            data_url,
        } => snippets::handle_form_thumbnail_loaded(state, selection, data_url),
        Message::SnippetFormThumbnailFailed { selection, error } => {
            snippets::handle_form_thumbnail_failed(state, selection, error)
        }
        Message::SubmitSnippetForm => snippets::handle_submit_form(state),

        Message::CopyCode { block } => snippets::handle_copy_code(state, block),
        Message::CopySucceeded { block } => snippets::handle_copy_succeeded(state, block),
        Message::CopyFailed { block, error } => snippets::handle_copy_failed(state, block, &error),
        Message::CopyFeedbackExpired { block } => {
            snippets::handle_copy_feedback_expired(state, block)
        }

        Message::ToggleCodeExpansion { block } => snippets::handle_toggle_expansion(state, block),
        Message::AutoCollapseCodeBlocks => snippets::handle_auto_collapse(state),

        // ─────────────────────────────────────────────────────────
        // Thumbnail Messages
        // ─────────────────────────────────────────────────────────
        Message::AddThumbnail { block } => thumbnails::handle_add_thumbnail(state, block),
        Message::ThumbnailLoaded { block, data_url } => {
            thumbnails::handle_thumbnail_loaded(state, block, data_url)
        }
        Message::ThumbnailFailed { block, error } => {
            thumbnails::handle_thumbnail_failed(state, block, &error)
        }
        Message::RemoveThumbnail { block } => thumbnails::handle_remove_thumbnail(state, block),
        Message::EnlargeThumbnail { block } => thumbnails::handle_enlarge_thumbnail(state, block),
        Message::CloseThumbnailModal => {
            state.enlarged = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tutorial Messages
        // ─────────────────────────────────────────────────────────
        Message::AddVideoTutorial { tutorial } => {
            tutorials::handle_add_video_tutorial(state, tutorial)
        }
        Message::TutorialFormChanged { field, value } => {
            tutorials::handle_form_changed(state, field, value)
        }
        Message::SubmitTutorialForm => tutorials::handle_submit_form(state),
        Message::VideoPlaceholderClicked { tutorial } => {
            tutorials::handle_placeholder_clicked(state, tutorial)
        }
        Message::VideoUrlEntered { tutorial, url } => {
            tutorials::handle_video_url_entered(state, tutorial, url)
        }

        // ─────────────────────────────────────────────────────────
        // Notification Messages
        // ─────────────────────────────────────────────────────────
        Message::DismissNotification { id } => {
            state.dismiss_notification(id);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Persistence Messages
        // ─────────────────────────────────────────────────────────
        Message::AutosaveTick | Message::PageUnload => persistence::handle_save_workspace(state),
        Message::WorkspaceSaved { result } => persistence::handle_workspace_saved(state, result),
    }
}

//! Snippet handlers: manifest loading, the add form, copy, expand/collapse

use snipdesk_core::prelude::*;
use snipdesk_core::{Manifest, Snippet, Thumbnail};

use crate::message::{Message, SnippetField};
use crate::state::{
    AppState, BlockId, BlockLoad, FormThumbnail, LoadPhase, PendingSnippet, SnippetFormState,
};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Manifest Loading
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_load_snippets(state: &mut AppState) -> UpdateResult {
    state.phase = LoadPhase::LoadingManifest;
    UpdateResult::action(UpdateAction::FetchManifest {
        path: state.settings.workspace.manifest_path.clone(),
    })
}

pub(crate) fn handle_manifest_fetched(
    state: &mut AppState,
    result: std::result::Result<String, String>,
) -> UpdateResult {
    let manifest = match result
        .map_err(|reason| Error::fetch(&state.settings.workspace.manifest_path, reason))
        .and_then(|json| Manifest::from_json(&json))
    {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("Failed to load snippets: {}", e);
            state.notify_error("Failed to load snippets");
            state.phase = LoadPhase::Ready;
            return UpdateResult::none();
        }
    };

    let requests = state.replace_sections(&manifest);
    info!(
        "Manifest loaded: {} categories, {} snippets",
        manifest.categories.len(),
        requests.len()
    );

    if requests.is_empty() {
        state.phase = LoadPhase::Ready;
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::FetchSnippetFiles { requests })
}

/// Fill in or drop one Loading block. A failed file is logged and dropped
/// without affecting the others.
pub(crate) fn handle_snippet_file_fetched(
    state: &mut AppState,
    block: BlockId,
    result: std::result::Result<String, String>,
) -> UpdateResult {
    let file = match state.block(block).map(|b| &b.load) {
        Some(BlockLoad::Loading { file }) => file.clone(),
        _ => {
            debug!("Ignoring snippet file for stale block {:?}", block);
            return UpdateResult::none();
        }
    };

    match result {
        Ok(code) => {
            state.fill_block(block, code);
        }
        Err(reason) => {
            error!("Failed to load snippet file: {}", Error::fetch(&file, reason));
            state.remove_block(block);
        }
    }

    if state.phase == LoadPhase::LoadingManifest && state.pending_blocks() == 0 {
        state.phase = LoadPhase::Ready;
        return UpdateResult::message(Message::AutoCollapseCodeBlocks);
    }

    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Adding Snippets
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_add_code_snippet(state: &mut AppState, snippet: Snippet) -> UpdateResult {
    let id = state.add_snippet(snippet);
    debug!("Added snippet block {:?}", id);
    state.notify_success("Snippet added successfully!");
    UpdateResult::none()
}

pub(crate) fn handle_form_changed(
    state: &mut AppState,
    field: SnippetField,
    value: String,
) -> UpdateResult {
    let form = &mut state.snippet_form;
    match field {
        SnippetField::Title => form.title = value,
        SnippetField::Language => form.language = value,
        SnippetField::Code => form.code = value,
    }
    UpdateResult::none()
}

pub(crate) fn handle_form_thumbnail_selected(
    state: &mut AppState,
    file_name: Option<String>,
) -> UpdateResult {
    state.select_form_thumbnail(file_name);
    UpdateResult::none()
}

/// A form thumbnail read finished. A held submission for this selection is
/// added now; otherwise the data waits in the form. Reads for a pick that
/// has since been replaced are dropped.
pub(crate) fn handle_form_thumbnail_loaded(
    state: &mut AppState,
    selection: u64,
    data_url: String,
) -> UpdateResult {
    if let Some(pending) = take_pending(state, selection) {
        let thumbnail = validate_thumbnail(&data_url);
        return handle_add_code_snippet(state, pending.snippet.with_thumbnail(thumbnail));
    }

    match state.snippet_form.thumbnail.as_mut() {
        Some(thumb) if thumb.selection == selection => thumb.data_url = Some(data_url),
        _ => debug!("Dropping thumbnail read for stale selection {}", selection),
    }
    UpdateResult::none()
}

/// A form thumbnail could not be read. A held submission goes ahead without
/// an image; a pick still in the form is cleared.
pub(crate) fn handle_form_thumbnail_failed(
    state: &mut AppState,
    selection: u64,
    error: String,
) -> UpdateResult {
    warn!("Failed to read thumbnail for selection {}: {}", selection, error);

    if let Some(pending) = take_pending(state, selection) {
        return handle_add_code_snippet(state, pending.snippet);
    }

    if state.form_thumbnail_selection() == Some(selection) {
        state.snippet_form.thumbnail = None;
    }
    UpdateResult::none()
}

fn take_pending(state: &mut AppState, selection: u64) -> Option<PendingSnippet> {
    let index = state
        .pending_snippets
        .iter()
        .position(|p| p.selection == selection)?;
    Some(state.pending_snippets.remove(index))
}

/// Add the form's snippet if title, language and code are all present.
/// Otherwise nothing happens: no block, no toast.
///
/// A thumbnail still being read holds the snippet back until
/// `SnippetFormThumbnailLoaded` or `SnippetFormThumbnailFailed` arrives for it.
/// The form is reset either way.
pub(crate) fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let form = &state.snippet_form;
    if form.title.trim().is_empty() || form.language.trim().is_empty() || form.code.trim().is_empty()
    {
        return UpdateResult::none();
    }

    let SnippetFormState {
        title,
        language,
        code,
        thumbnail,
    } = std::mem::take(&mut state.snippet_form);
    let snippet = Snippet::new(title, language, code);

    match thumbnail {
        None => handle_add_code_snippet(state, snippet),
        Some(FormThumbnail {
            data_url: Some(data_url),
            ..
        }) => {
            let thumbnail = validate_thumbnail(&data_url);
            handle_add_code_snippet(state, snippet.with_thumbnail(thumbnail))
        }
        Some(FormThumbnail {
            selection,
            file_name,
            data_url: None,
        }) => {
            debug!("Holding snippet {} until {} is read", snippet.title, file_name);
            state
                .pending_snippets
                .push(PendingSnippet { selection, snippet });
            UpdateResult::none()
        }
    }
}

fn validate_thumbnail(data_url: &str) -> Option<Thumbnail> {
    match Thumbnail::from_data_url(data_url) {
        Ok(thumbnail) => Some(thumbnail),
        Err(e) => {
            warn!("Skipping form thumbnail: {}", e);
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy
// ─────────────────────────────────────────────────────────────────────────────

/// Copy the block's source text. The model holds raw text, so markup-heavy
/// snippets (HTML) copy their source rather than escaped entities.
pub(crate) fn handle_copy_code(state: &mut AppState, block: BlockId) -> UpdateResult {
    match state.block(block).filter(|b| b.is_ready()) {
        Some(b) => UpdateResult::action(UpdateAction::WriteClipboard {
            block,
            text: b.snippet.code.clone(),
        }),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_copy_succeeded(state: &mut AppState, block: BlockId) -> UpdateResult {
    state.notify_success("Code copied to clipboard!");

    let after_ms = state.settings.ui.copied_feedback_ms;
    match state.block_mut(block) {
        Some(b) => {
            b.copied = true;
            UpdateResult::action(UpdateAction::ScheduleCopyReset { block, after_ms })
        }
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_copy_failed(state: &mut AppState, block: BlockId, error: &str) -> UpdateResult {
    error!("Failed to copy code from {:?}: {}", block, Error::clipboard(error));
    state.notify_error("Failed to copy code");
    UpdateResult::none()
}

pub(crate) fn handle_copy_feedback_expired(state: &mut AppState, block: BlockId) -> UpdateResult {
    if let Some(b) = state.block_mut(block) {
        b.copied = false;
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Expand / Collapse
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_toggle_expansion(state: &mut AppState, block: BlockId) -> UpdateResult {
    if let Some(b) = state.block_mut(block) {
        b.collapse.toggle();
    }
    UpdateResult::none()
}

pub(crate) fn handle_auto_collapse(state: &mut AppState) -> UpdateResult {
    let changed = state.auto_collapse_code_blocks();
    if changed > 0 {
        debug!("Auto-collapsed {} code blocks", changed);
    }
    UpdateResult::none()
}

//! Thumbnail handlers

use snipdesk_core::prelude::*;
use snipdesk_core::Thumbnail;

use crate::state::{AppState, BlockId};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_add_thumbnail(state: &mut AppState, block: BlockId) -> UpdateResult {
    if state.block(block).is_none() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::PickThumbnail { block })
}

pub(crate) fn handle_thumbnail_loaded(
    state: &mut AppState,
    block: BlockId,
    data_url: String,
) -> UpdateResult {
    let thumbnail = match Thumbnail::from_data_url(data_url) {
        Ok(thumbnail) => thumbnail,
        Err(e) => {
            warn!("Rejected thumbnail for {:?}: {}", block, e);
            state.notify_error("Unsupported thumbnail image");
            return UpdateResult::none();
        }
    };

    let attached = match state.block_mut(block) {
        Some(b) => {
            b.snippet.thumbnail = Some(thumbnail);
            true
        }
        None => false,
    };

    if attached {
        state.notify_success("Thumbnail added successfully!");
    } else {
        debug!("Thumbnail arrived for removed block {:?}", block);
    }
    UpdateResult::none()
}

pub(crate) fn handle_thumbnail_failed(
    _state: &mut AppState,
    block: BlockId,
    error: &str,
) -> UpdateResult {
    error!("Failed to read thumbnail for {:?}: {}", block, error);
    UpdateResult::none()
}

pub(crate) fn handle_remove_thumbnail(state: &mut AppState, block: BlockId) -> UpdateResult {
    let removed = state
        .block_mut(block)
        .and_then(|b| b.snippet.thumbnail.take())
        .is_some();

    if removed {
        state.notify_success("Thumbnail removed");
    }
    UpdateResult::none()
}

pub(crate) fn handle_enlarge_thumbnail(state: &mut AppState, block: BlockId) -> UpdateResult {
    state.enlarged = state
        .block(block)
        .and_then(|b| b.snippet.thumbnail.clone());
    UpdateResult::none()
}

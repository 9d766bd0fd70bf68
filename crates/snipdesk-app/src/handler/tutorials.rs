//! Tutorial handlers: the add form and the invalid-URL placeholder prompt

use snipdesk_core::prelude::*;
use snipdesk_core::{convert_to_embed_url, non_empty, Tutorial};

use crate::message::TutorialField;
use crate::state::{AppState, TutorialId};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_add_video_tutorial(state: &mut AppState, tutorial: Tutorial) -> UpdateResult {
    let id = state.add_tutorial(tutorial);
    if state.tutorial(id).is_some_and(|card| card.embed_url.is_none()) {
        debug!("Tutorial {:?} has no recognized video URL", id);
    }
    state.notify_success("Tutorial added successfully!");
    UpdateResult::none()
}

pub(crate) fn handle_form_changed(
    state: &mut AppState,
    field: TutorialField,
    value: String,
) -> UpdateResult {
    let form = &mut state.tutorial_form;
    match field {
        TutorialField::Title => form.title = value,
        TutorialField::Duration => form.duration = value,
        TutorialField::Url => form.url = value,
        TutorialField::Description => form.description = value,
    }
    UpdateResult::none()
}

/// Add the form's tutorial if title and URL are present; otherwise ignore
/// the submission silently. An unrecognized URL still adds the card, with a
/// placeholder instead of a player.
pub(crate) fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let form = &state.tutorial_form;
    if form.title.trim().is_empty() || form.url.trim().is_empty() {
        return UpdateResult::none();
    }

    let form = std::mem::take(&mut state.tutorial_form);
    let tutorial = Tutorial {
        duration: non_empty(&form.duration),
        description: non_empty(&form.description),
        ..Tutorial::new(form.title, form.url)
    };

    handle_add_video_tutorial(state, tutorial)
}

pub(crate) fn handle_placeholder_clicked(state: &mut AppState, tutorial: TutorialId) -> UpdateResult {
    match state.tutorial(tutorial).filter(|card| card.embed_url.is_none()) {
        Some(card) => UpdateResult::action(UpdateAction::PromptVideoUrl {
            tutorial,
            message: format!("Enter video URL for \"{}\":", card.tutorial.title),
        }),
        None => UpdateResult::none(),
    }
}

/// Replace the placeholder with a player if the entered URL converts.
/// Cancelled or empty input does nothing; an invalid URL leaves the card as is.
pub(crate) fn handle_video_url_entered(
    state: &mut AppState,
    tutorial: TutorialId,
    url: Option<String>,
) -> UpdateResult {
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        return UpdateResult::none();
    };

    let Some(embed_url) = convert_to_embed_url(&url) else {
        state.notify_error("Invalid video URL");
        return UpdateResult::none();
    };

    let updated = match state.tutorial_mut(tutorial) {
        Some(card) => {
            card.tutorial.url = url;
            card.embed_url = Some(embed_url);
            true
        }
        None => false,
    };

    if updated {
        state.notify_success("Video added successfully!");
    } else {
        debug!("Video URL entered for removed tutorial {:?}", tutorial);
    }
    UpdateResult::none()
}

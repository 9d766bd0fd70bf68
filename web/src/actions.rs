//! Performs the side effects `update()` asks for and feeds results back

use leptos::task::spawn_local;
use snipdesk_app::{load_workspace, save_workspace, Message, UpdateAction};
use snipdesk_core::prelude::*;

use crate::browser::{self, LocalStore};
use crate::Dispatcher;

pub fn execute(dispatcher: Dispatcher, action: UpdateAction) {
    match action {
        UpdateAction::FetchSettings { path } => spawn_local(async move {
            let content = match browser::fetch_text(&path).await {
                Ok(content) => Some(content),
                Err(e) => {
                    debug!("Using default settings: {}", e);
                    None
                }
            };
            dispatcher.dispatch(Message::SettingsFetched { content });
        }),

        UpdateAction::StartTimers {
            autosave_secs,
            welcome_delay_ms,
        } => {
            let autosave = browser::set_interval(autosave_secs.saturating_mul(1000), move || {
                dispatcher.dispatch(Message::AutosaveTick)
            });
            if let Err(e) = autosave {
                error!("Autosave disabled: {}", e);
            }
            let welcome = browser::set_timeout(welcome_delay_ms, move || {
                dispatcher.dispatch(Message::ShowWelcome)
            });
            if let Err(e) = welcome {
                warn!("Failed to schedule welcome message: {}", e);
            }
        }

        UpdateAction::ReadStoredWorkspace { key } => {
            let result = LocalStore::open()
                .and_then(|store| load_workspace(&store, &key))
                .map_err(|e| e.to_string());
            dispatcher.dispatch(Message::StoredWorkspaceLoaded { result });
        }

        UpdateAction::FetchManifest { path } => spawn_local(async move {
            let result = browser::fetch_text(&path).await.map_err(|e| e.to_string());
            dispatcher.dispatch(Message::ManifestFetched { result });
        }),

        UpdateAction::FetchSnippetFiles { requests } => {
            for request in requests {
                spawn_local(async move {
                    let result = browser::fetch_text(&request.file)
                        .await
                        .map_err(|e| e.to_string());
                    dispatcher.dispatch(Message::SnippetFileFetched {
                        block: request.block,
                        result,
                    });
                });
            }
        }

        UpdateAction::WriteClipboard { block, text } => spawn_local(async move {
            match browser::write_clipboard(&text).await {
                Ok(()) => dispatcher.dispatch(Message::CopySucceeded { block }),
                Err(e) => dispatcher.dispatch(Message::CopyFailed {
                    block,
                    error: e.to_string(),
                }),
            }
        }),

        UpdateAction::ScheduleCopyReset { block, after_ms } => {
            let reset = browser::set_timeout(after_ms, move || {
                dispatcher.dispatch(Message::CopyFeedbackExpired { block })
            });
            if let Err(e) = reset {
                warn!("Failed to schedule copy reset: {}", e);
            }
        }

        UpdateAction::PickThumbnail { block } => {
            let picked = browser::pick_image(move |result| match result {
                Ok(data_url) => dispatcher.dispatch(Message::ThumbnailLoaded { block, data_url }),
                Err(e) => dispatcher.dispatch(Message::ThumbnailFailed {
                    block,
                    error: e.to_string(),
                }),
            });
            if let Err(e) = picked {
                error!("Failed to open file picker: {}", e);
            }
        }

        UpdateAction::PromptVideoUrl { tutorial, message } => {
            let url = browser::prompt(&message).unwrap_or_else(|e| {
                warn!("Prompt failed: {}", e);
                None
            });
            dispatcher.dispatch(Message::VideoUrlEntered { tutorial, url });
        }

        // Synchronous so it completes during beforeunload
        UpdateAction::PersistWorkspace { key, snapshot } => {
            let result = LocalStore::open()
                .and_then(|store| save_workspace(&store, &key, &snapshot))
                .map_err(|e| e.to_string());
            dispatcher.dispatch(Message::WorkspaceSaved { result });
        }
    }
}

use leptos::prelude::*;
use snipdesk_app::{BlockId, Message};
use snipdesk_core::Thumbnail;

use crate::use_dispatcher;

/// Preview image with a remove control, or a placeholder that opens the picker
#[component]
pub fn ThumbnailArea(block: BlockId, thumbnail: Signal<Option<Thumbnail>>) -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <div class="thumbnail-area">
            {move || match thumbnail.get() {
                Some(thumb) => {
                    view! {
                        <img
                            src=thumb.as_str().to_string()
                            alt="Preview"
                            class="thumbnail-image"
                            on:click=move |_| dispatcher.dispatch(Message::EnlargeThumbnail { block })
                        />
                        <button
                            class="thumbnail-overlay"
                            title="Remove thumbnail"
                            on:click=move |_| dispatcher.dispatch(Message::RemoveThumbnail { block })
                        >
                            "×"
                        </button>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div
                            class="thumbnail-placeholder"
                            on:click=move |_| dispatcher.dispatch(Message::AddThumbnail { block })
                        >
                            <span>"📸"</span>
                            <p>"Click to add preview"</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Full-viewport view of the enlarged thumbnail; any click closes it
#[component]
pub fn ThumbnailModal() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();
    let enlarged = move || state.with(|s| s.enlarged.clone());

    view! {
        {move || {
            enlarged()
                .map(|thumb| {
                    view! {
                        <div
                            class="thumbnail-modal"
                            on:click=move |_| dispatcher.dispatch(Message::CloseThumbnailModal)
                        >
                            <img src=thumb.as_str().to_string() alt="Preview" />
                        </div>
                    }
                })
        }}
    }
}

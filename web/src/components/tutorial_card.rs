use leptos::prelude::*;
use snipdesk_app::{Message, TutorialId};

use crate::use_dispatcher;

/// Video card: an embedded player, or a placeholder that asks for a URL
#[component]
pub fn TutorialCardView(id: TutorialId) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();
    let card = Memo::new(move |_| state.with(|s| s.tutorial(id).cloned()));

    move || {
        card.get().map(|card| {
            let tutorial = card.tutorial;
            let player = match card.embed_url {
                Some(url) => view! {
                    <iframe class="video-iframe" src=url allowfullscreen=true></iframe>
                }
                .into_any(),
                None => view! {
                    <div
                        class="video-placeholder"
                        on:click=move |_| {
                            dispatcher.dispatch(Message::VideoPlaceholderClicked { tutorial: id })
                        }
                    >
                        <p>"Invalid video URL"</p>
                    </div>
                }
                .into_any(),
            };

            view! {
                <div class="video-card">
                    <div class="video-header">
                        <h3>{tutorial.title}</h3>
                        {tutorial
                            .duration
                            .map(|duration| view! { <span class="duration">{duration}</span> })}
                    </div>
                    {player}
                    {tutorial
                        .description
                        .map(|description| {
                            view! {
                                <div class="video-description">
                                    <p>{description}</p>
                                </div>
                            }
                        })}
                </div>
            }
        })
    }
}

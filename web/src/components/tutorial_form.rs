use leptos::prelude::*;
use snipdesk_app::{Message, TutorialField};

use crate::use_dispatcher;

#[component]
pub fn TutorialForm() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();

    let value = move |field: TutorialField| {
        move || {
            state.with(|s| {
                let form = &s.tutorial_form;
                match field {
                    TutorialField::Title => form.title.clone(),
                    TutorialField::Duration => form.duration.clone(),
                    TutorialField::Url => form.url.clone(),
                    TutorialField::Description => form.description.clone(),
                }
            })
        }
    };
    let changed = move |field: TutorialField, value: String| {
        dispatcher.dispatch(Message::TutorialFormChanged { field, value })
    };

    view! {
        <div class="add-tutorial">
            <h2>"Add Video Tutorial"</h2>
            <form
                id="tutorial-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    dispatcher.dispatch(Message::SubmitTutorialForm);
                }
            >
                <input
                    id="tutorial-title"
                    type="text"
                    placeholder="Tutorial title"
                    prop:value=value(TutorialField::Title)
                    on:input=move |ev| changed(TutorialField::Title, event_target_value(&ev))
                />
                <input
                    id="tutorial-duration"
                    type="text"
                    placeholder="Duration (e.g. 12:34)"
                    prop:value=value(TutorialField::Duration)
                    on:input=move |ev| changed(TutorialField::Duration, event_target_value(&ev))
                />
                <input
                    id="tutorial-url"
                    type="url"
                    placeholder="YouTube or Vimeo URL"
                    prop:value=value(TutorialField::Url)
                    on:input=move |ev| changed(TutorialField::Url, event_target_value(&ev))
                />
                <textarea
                    id="tutorial-description"
                    rows="3"
                    placeholder="Description (optional)"
                    prop:value=value(TutorialField::Description)
                    on:input=move |ev| {
                        changed(TutorialField::Description, event_target_value(&ev))
                    }
                ></textarea>
                <button type="submit">"Add Tutorial"</button>
            </form>
        </div>
    }
}

use leptos::prelude::*;

use super::tutorial_card::TutorialCardView;
use super::tutorial_form::TutorialForm;
use crate::use_dispatcher;

#[component]
pub fn TutorialsPanel() -> impl IntoView {
    let state = use_dispatcher().state();
    let ids = Memo::new(move |_| state.with(|s| s.tutorials.iter().map(|t| t.id).collect::<Vec<_>>()));

    view! {
        <div class="tutorial-section">
            <For each=move || ids.get() key=|id| *id let:id>
                <TutorialCardView id=id />
            </For>
        </div>
        <TutorialForm />
    }
}

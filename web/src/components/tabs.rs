use leptos::prelude::*;
use snipdesk_app::{Message, Tab};

use crate::use_dispatcher;

#[component]
pub fn TabBar() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || state.with(|s| s.is_active(tab))
                            on:click=move |_| dispatcher.dispatch(Message::ShowTab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Panel with the tab's stable DOM id, visible only while its tab is active
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let state = use_dispatcher().state();

    view! {
        <section
            id=tab.id()
            class="tab-content"
            class:active=move || state.with(|s| s.is_active(tab))
        >
            {children()}
        </section>
    }
}

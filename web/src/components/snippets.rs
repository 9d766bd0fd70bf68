use leptos::prelude::*;
use snipdesk_app::{BlockId, LoadPhase};

use super::code_block::CodeBlockView;
use super::snippet_form::SnippetForm;
use crate::use_dispatcher;

/// Manifest sections, then user-added blocks, then the add form
#[component]
pub fn SnippetsPanel() -> impl IntoView {
    let state = use_dispatcher().state();

    let sections = Memo::new(move |_| {
        state.with(|s| {
            s.sections
                .iter()
                .map(|section| {
                    let ids: Vec<BlockId> = section.blocks.iter().map(|b| b.id).collect();
                    (section.name.clone(), ids)
                })
                .collect::<Vec<_>>()
        })
    });
    let added = Memo::new(move |_| {
        state.with(|s| s.added.iter().map(|b| b.id).collect::<Vec<_>>())
    });
    let loading = move || state.with(|s| s.phase == LoadPhase::LoadingManifest);

    view! {
        <Show when=loading>
            <p class="loading">"Loading snippets..."</p>
        </Show>
        <For
            each=move || sections.get()
            key=|section| section.clone()
            children=|(name, ids): (String, Vec<BlockId>)| {
                view! {
                    <div class="snippet-section">
                        <h2>{name}</h2>
                        {ids.into_iter().map(|id| view! { <CodeBlockView id=id /> }).collect_view()}
                    </div>
                }
            }
        />
        <For each=move || added.get() key=|id| *id let:id>
            <CodeBlockView id=id />
        </For>
        <SnippetForm />
    }
}

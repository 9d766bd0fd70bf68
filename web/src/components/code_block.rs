use leptos::html;
use leptos::prelude::*;
use snipdesk_app::{BlockId, Message};
use snipdesk_core::{escape_html, language_class};

use super::thumbnail::ThumbnailArea;
use crate::{browser, use_dispatcher};

#[component]
pub fn CodeBlockView(id: BlockId) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();
    let block = Memo::new(move |_| state.with(|s| s.block(id).cloned()));

    let title = move || block.with(|b| b.as_ref().map(|b| b.snippet.title.clone()));
    let code = Memo::new(move |_| {
        block.with(|b| b.as_ref().map(|b| b.snippet.code.clone()).unwrap_or_default())
    });
    let class = move || {
        block.with(|b| {
            b.as_ref()
                .map(|b| language_class(&b.snippet.language))
                .unwrap_or_default()
        })
    };
    let ready = move || block.with(|b| b.as_ref().is_some_and(|b| b.is_ready()));
    let copied = move || block.with(|b| b.as_ref().is_some_and(|b| b.copied));
    let copy_label = move || block.with(|b| b.as_ref().map(|b| b.copy_label()).unwrap_or("Copy"));
    let collapse = move || block.with(|b| b.as_ref().map(|b| b.collapse).unwrap_or_default());
    let thumbnail = Signal::derive(move || {
        block.with(|b| b.as_ref().and_then(|b| b.snippet.thumbnail.clone()))
    });

    // Prism rewrites the element's markup, so rerun it whenever the source changes
    let code_ref = NodeRef::<html::Code>::new();
    Effect::new(move || {
        code.track();
        if let Some(element) = code_ref.get() {
            browser::highlight(&element);
        }
    });

    view! {
        <div class="code-block" class:loading=move || !ready()>
            <div class="code-header">
                <span class="code-title">{title}</span>
                <button
                    class="copy-btn"
                    class:copied=copied
                    disabled=move || !ready()
                    on:click=move |_| dispatcher.dispatch(Message::CopyCode { block: id })
                >
                    {copy_label}
                </button>
            </div>
            <div class="code-content">
                <pre class:collapsed=move || collapse().collapsed>
                    <code
                        node_ref=code_ref
                        class=class
                        inner_html=move || escape_html(&code.get())
                    ></code>
                    <Show when=move || collapse().collapsible>
                        <button
                            class="expand-btn"
                            on:click=move |_| {
                                dispatcher.dispatch(Message::ToggleCodeExpansion { block: id })
                            }
                        >
                            {move || collapse().label()}
                        </button>
                    </Show>
                </pre>
                <ThumbnailArea block=id thumbnail=thumbnail />
            </div>
        </div>
    }
}

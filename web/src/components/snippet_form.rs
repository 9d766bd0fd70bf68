use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use snipdesk_app::{Message, SnippetField};
use web_sys::HtmlInputElement;

use crate::{browser, use_dispatcher};

const LANGUAGES: [(&str, &str); 9] = [
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("rust", "Rust"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("bash", "Bash"),
    ("json", "JSON"),
    ("sql", "SQL"),
];

#[component]
pub fn SnippetForm() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();
    let form_ref = NodeRef::<html::Form>::new();

    let field = move |field: SnippetField| {
        move || {
            state.with(|s| match field {
                SnippetField::Title => s.snippet_form.title.clone(),
                SnippetField::Language => s.snippet_form.language.clone(),
                SnippetField::Code => s.snippet_form.code.clone(),
            })
        }
    };
    let on_thumbnail = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = browser::selected_file(&input);
        dispatcher.dispatch(Message::SnippetFormThumbnailSelected {
            file_name: file.as_ref().map(|f| f.name()),
        });
        let selection = state.with_untracked(|s| s.form_thumbnail_selection());
        let (Some(file), Some(selection)) = (file, selection) else {
            return;
        };
        let read = browser::read_data_url(&file, move |result| {
            dispatcher.dispatch(match result {
                Ok(data_url) => Message::SnippetFormThumbnailLoaded {
                    selection,
                    data_url,
                },
                Err(e) => Message::SnippetFormThumbnailFailed {
                    selection,
                    error: e.to_string(),
                },
            })
        });
        if let Err(e) = read {
            dispatcher.dispatch(Message::SnippetFormThumbnailFailed {
                selection,
                error: e.to_string(),
            });
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Message::SubmitSnippetForm);
        // An accepted submission clears the model's form; clear the file input too
        let cleared = state.with_untracked(|s| s.snippet_form == Default::default());
        if cleared {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        }
    };

    view! {
        <div class="add-snippet">
            <h2>"Add Code Snippet"</h2>
            <form id="snippet-form" node_ref=form_ref on:submit=on_submit>
                <input
                    id="snippet-title"
                    type="text"
                    placeholder="Snippet title"
                    prop:value=field(SnippetField::Title)
                    on:input=move |ev| {
                        dispatcher.dispatch(Message::SnippetFormChanged {
                            field: SnippetField::Title,
                            value: event_target_value(&ev),
                        })
                    }
                />
                <select
                    id="snippet-language"
                    prop:value=field(SnippetField::Language)
                    on:change=move |ev| {
                        dispatcher.dispatch(Message::SnippetFormChanged {
                            field: SnippetField::Language,
                            value: event_target_value(&ev),
                        })
                    }
                >
                    <option value="">"Select language"</option>
                    {LANGUAGES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    id="snippet-code"
                    rows="10"
                    placeholder="Paste your code here"
                    prop:value=field(SnippetField::Code)
                    on:input=move |ev| {
                        dispatcher.dispatch(Message::SnippetFormChanged {
                            field: SnippetField::Code,
                            value: event_target_value(&ev),
                        })
                    }
                ></textarea>
                <label class="file-input">
                    "Preview image "
                    <input
                        id="snippet-thumbnail"
                        type="file"
                        accept="image/*"
                        on:change=on_thumbnail
                    />
                </label>
                <span id="thumbnail-name">
                    {move || state.with(|s| s.snippet_form.thumbnail_label())}
                </span>
                <button type="submit">"Add Snippet"</button>
            </form>
        </div>
    }
}

//! End-to-end flow through `update()` with the frontend's side effects
//! played by a small driver over a [`MemoryStore`].

use std::collections::HashMap;

use snipdesk_app::{
    load_workspace, save_workspace, update, AppState, KeyValueStore, LoadPhase, MemoryStore,
    Message, SnippetField, Tab, TutorialField, UpdateAction,
};

const MANIFEST: &str = r#"{"categories":[
    {"name":"JavaScript","snippets":[
        {"title":"Debounce","language":"javascript","file":"snippets/debounce.js"},
        {"title":"Missing","language":"javascript","file":"snippets/missing.js"}]}]}"#;

/// Plays the frontend: answers fetches from `files`, writes into `store`
struct Driver {
    files: HashMap<&'static str, String>,
    store: MemoryStore,
    settings: Option<String>,
}

impl Driver {
    fn new() -> Self {
        let mut files = HashMap::new();
        files.insert("snippets.json", MANIFEST.to_string());
        files.insert(
            "snippets/debounce.js",
            "function debounce(fn, ms) {\n  let t;\n}\n".to_string(),
        );
        Self {
            files,
            store: MemoryStore::new(),
            settings: None,
        }
    }

    fn fetch(&self, path: &str) -> Result<String, String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("HTTP 404 for {}", path))
    }

    /// Run `msg` and every follow-up message and action to completion
    fn dispatch(&self, state: &mut AppState, msg: Message) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            let result = update(state, msg);
            if let Some(action) = result.action {
                queue.extend(self.perform(action));
            }
            if let Some(next) = result.message {
                queue.push(next);
            }
        }
    }

    fn perform(&self, action: UpdateAction) -> Vec<Message> {
        match action {
            UpdateAction::FetchSettings { .. } => vec![Message::SettingsFetched {
                content: self.settings.clone(),
            }],
            UpdateAction::StartTimers { .. } => Vec::new(),
            UpdateAction::ReadStoredWorkspace { key } => vec![Message::StoredWorkspaceLoaded {
                result: load_workspace(&self.store, &key).map_err(|e| e.to_string()),
            }],
            UpdateAction::FetchManifest { path } => vec![Message::ManifestFetched {
                result: self.fetch(&path),
            }],
            UpdateAction::FetchSnippetFiles { requests } => requests
                .into_iter()
                .map(|r| Message::SnippetFileFetched {
                    block: r.block,
                    result: self.fetch(&r.file),
                })
                .collect(),
            UpdateAction::WriteClipboard { block, .. } => vec![Message::CopySucceeded { block }],
            UpdateAction::ScheduleCopyReset { block, .. } => {
                vec![Message::CopyFeedbackExpired { block }]
            }
            UpdateAction::PickThumbnail { .. } | UpdateAction::PromptVideoUrl { .. } => Vec::new(),
            UpdateAction::PersistWorkspace { key, snapshot } => vec![Message::WorkspaceSaved {
                result: save_workspace(&self.store, &key, &snapshot).map_err(|e| e.to_string()),
            }],
        }
    }
}

fn boot(driver: &Driver) -> AppState {
    let mut state = AppState::new();
    driver.dispatch(&mut state, Message::Startup);
    state
}

#[test]
fn test_startup_loads_manifest_and_skips_missing_files() {
    let driver = Driver::new();
    let state = boot(&driver);

    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.sections.len(), 1);
    let titles: Vec<_> = state.blocks().map(|b| b.snippet.title.as_str()).collect();
    assert_eq!(titles, vec!["Debounce"]);
    assert!(state.notification.is_none());
}

#[test]
fn test_startup_with_missing_manifest() {
    let mut driver = Driver::new();
    driver.files.remove("snippets.json");
    let state = boot(&driver);

    assert!(state.sections.is_empty());
    assert_eq!(
        state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Failed to load snippets")
    );
}

#[test]
fn test_workspace_survives_reload() {
    let driver = Driver::new();
    let mut state = boot(&driver);

    for (field, value) in [
        (SnippetField::Title, "Sum"),
        (SnippetField::Language, "rust"),
        (SnippetField::Code, "fn sum(a: i32, b: i32) -> i32 { a + b }"),
    ] {
        driver.dispatch(
            &mut state,
            Message::SnippetFormChanged {
                field,
                value: value.to_string(),
            },
        );
    }
    driver.dispatch(&mut state, Message::SubmitSnippetForm);

    driver.dispatch(&mut state, Message::ShowTab(Tab::Tutorials));
    for (field, value) in [
        (TutorialField::Title, "Ownership"),
        (TutorialField::Url, "https://www.youtube.com/watch?v=VFIOSWy93H0"),
    ] {
        driver.dispatch(
            &mut state,
            Message::TutorialFormChanged {
                field,
                value: value.to_string(),
            },
        );
    }
    driver.dispatch(&mut state, Message::SubmitTutorialForm);

    driver.dispatch(&mut state, Message::PageUnload);
    assert!(state.last_saved.is_some());
    assert_eq!(driver.store.len(), 1);

    // Stored JSON carries manifest and user snippets alike
    let json = driver.store.get("codeWorkspace").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["snippets"].as_array().unwrap().len(), 2);
    assert_eq!(value["tutorials"][0]["title"], "Ownership");

    let reloaded = boot(&driver);
    assert_eq!(reloaded.added.len(), 1);
    assert_eq!(reloaded.added[0].snippet, state.added[0].snippet);
    // Manifest blocks come back from the manifest, not duplicated from storage
    assert_eq!(reloaded.blocks().count(), 2);
    assert_eq!(reloaded.tutorials.len(), 1);
    assert_eq!(reloaded.tutorials[0].tutorial, state.tutorials[0].tutorial);
    assert_eq!(
        reloaded.tutorials[0].embed_url.as_deref(),
        Some("https://www.youtube.com/embed/VFIOSWy93H0")
    );
}

#[test]
fn test_copy_feedback_round_trip() {
    let driver = Driver::new();
    let mut state = boot(&driver);
    let block = state.blocks().next().unwrap().id;

    driver.dispatch(&mut state, Message::CopyCode { block });

    // The driver expires the feedback immediately
    assert!(!state.block(block).unwrap().copied);
    assert_eq!(
        state.notification.as_ref().map(|n| n.message.as_str()),
        Some("Code copied to clipboard!")
    );
}

#[test]
fn test_restore_disabled_by_settings() {
    let mut driver = Driver::new();
    let mut state = boot(&driver);
    driver.dispatch(
        &mut state,
        Message::AddCodeSnippet {
            snippet: snipdesk_core::Snippet::new("Kept", "text", "x"),
        },
    );
    driver.dispatch(&mut state, Message::AutosaveTick);

    driver.settings = Some("[workspace]\nrestore_on_load = false\n".to_string());
    let reloaded = boot(&driver);
    assert!(reloaded.added.is_empty());
}

pub mod actions;
pub mod browser;
pub mod components;

use components::notification::NotificationToast;
use components::snippets::SnippetsPanel;
use components::tabs::{TabBar, TabPanel};
use components::thumbnail::ThumbnailModal;
use components::tutorials::TutorialsPanel;
use leptos::prelude::*;
use snipdesk_app::config::LogLevel;
use snipdesk_app::{handle_key, update, AppState, InputKey, Message, Tab};
use snipdesk_core::prelude::{error, trace, warn};
use snipdesk_core::Result;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Owns the model signal and runs messages through `update()`.
///
/// Follow-up messages run in the same call; actions go to
/// [`actions::execute`], which dispatches their results later.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
}

impl Dispatcher {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
        }
    }

    pub fn state(self) -> ReadSignal<AppState> {
        self.state.read_only()
    }

    pub fn dispatch(self, msg: Message) {
        let mut pending = Some(msg);
        while let Some(msg) = pending.take() {
            trace!("dispatch {:?}", msg);
            let Some(result) = self.state.try_update(|state| update(state, msg)) else {
                warn!("Workspace state dropped; ignoring message");
                return;
            };
            if let Some(action) = result.action {
                actions::execute(self, action);
            }
            pending = result.message;
        }
    }
}

pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}

fn level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warn => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
        LogLevel::Trace => log::LevelFilter::Trace,
    }
}

/// Ctrl/Cmd+1 and Ctrl/Cmd+2 switch tabs; unload saves the workspace
fn install_listeners(dispatcher: Dispatcher) -> Result<()> {
    browser::on_window_event("keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = InputKey::from_parts(&event.key(), event.ctrl_key(), event.meta_key());
        if let Some(msg) = dispatcher.state().with_untracked(|state| handle_key(state, key)) {
            event.prevent_default();
            dispatcher.dispatch(msg);
        }
    })?;

    browser::on_window_event("beforeunload", move |_| {
        dispatcher.dispatch(Message::PageUnload);
    })
}

#[component]
pub fn App() -> impl IntoView {
    let dispatcher = Dispatcher::new();
    provide_context(dispatcher);

    let state = dispatcher.state();
    let log_level = Memo::new(move |_| state.with(|s| s.settings.logging.level));
    Effect::new(move || {
        log::set_max_level(level_filter(log_level.get()));
    });

    if let Err(e) = install_listeners(dispatcher) {
        error!("Failed to install page listeners: {}", e);
    }
    dispatcher.dispatch(Message::Startup);

    view! {
        <div class="container">
            <header>
                <h1>"Code Snippet Workspace"</h1>
                <p>"Your personal library of code and video tutorials"</p>
            </header>
            <TabBar />
            <TabPanel tab=Tab::Snippets>
                <SnippetsPanel />
            </TabPanel>
            <TabPanel tab=Tab::Tutorials>
                <TutorialsPanel />
            </TabPanel>
        </div>
        <NotificationToast />
        <ThumbnailModal />
    }
}

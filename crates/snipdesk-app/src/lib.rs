//! snipdesk-app - Application state and orchestration for the snippet workspace
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`update()`](handler::update) the only place state changes. Side effects
//! (fetches, clipboard, storage, timers) are returned as [`UpdateAction`]s
//! for the frontend to perform. Nothing here touches the browser, so the whole
//! crate is testable natively.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod storage;

// Re-export primary types
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, SnippetField, TutorialField};
pub use state::{
    AppState, BlockId, BlockLoad, CodeBlock, LoadPhase, Notification, NotificationKind,
    SnippetFileRequest, SnippetSection, Tab, TutorialCard, TutorialId,
};
pub use storage::{load_workspace, save_workspace, KeyValueStore, MemoryStore};

//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Keyboard shortcut handling
//! - `startup`: Settings, restore and welcome handlers
//! - `snippets`: Manifest loading, snippet form, copy and collapse handlers
//! - `thumbnails`: Thumbnail attach/remove/enlarge handlers
//! - `tutorials`: Tutorial form and video URL handlers
//! - `persistence`: Autosave handlers

pub(crate) mod keys;
pub(crate) mod persistence;
pub(crate) mod snippets;
pub(crate) mod startup;
pub(crate) mod thumbnails;
pub(crate) mod tutorials;
pub(crate) mod update;


use snipdesk_core::WorkspaceSnapshot;

use crate::message::Message;
use crate::state::{BlockId, SnippetFileRequest, TutorialId};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions the frontend should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the optional settings file and reply with `SettingsFetched`
    FetchSettings { path: String },

    /// Start the autosave interval and schedule the welcome toast
    StartTimers {
        autosave_secs: u64,
        welcome_delay_ms: u64,
    },

    /// Read the snapshot under `key` and reply with `StoredWorkspaceLoaded`
    ReadStoredWorkspace { key: String },

    /// Fetch the manifest and reply with `ManifestFetched`
    FetchManifest { path: String },

    /// Fetch each file and reply with one `SnippetFileFetched` per request
    FetchSnippetFiles { requests: Vec<SnippetFileRequest> },

    /// Write text to the system clipboard and reply with
    /// `CopySucceeded` or `CopyFailed`
    WriteClipboard { block: BlockId, text: String },

    /// Send `CopyFeedbackExpired` after the delay
    ScheduleCopyReset { block: BlockId, after_ms: u64 },

    /// Open an `image/*` file picker and reply with `ThumbnailLoaded`
    PickThumbnail { block: BlockId },

    /// Ask the user for a URL with a blocking prompt and reply with
    /// `VideoUrlEntered`
    PromptVideoUrl {
        tutorial: TutorialId,
        message: String,
    },

    /// Write the snapshot under `key` and reply with `WorkspaceSaved`
    PersistWorkspace {
        key: String,
        snapshot: WorkspaceSnapshot,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the frontend to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn message_and_action(msg: Message, action: UpdateAction) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}

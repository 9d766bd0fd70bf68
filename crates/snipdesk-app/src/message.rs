//! Message types for the application (TEA pattern)

use snipdesk_core::{Snippet, Tutorial, WorkspaceSnapshot};

use crate::input_key::InputKey;
use crate::state::{BlockId, Tab, TutorialId};

/// Text fields of the add-snippet form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetField {
    Title,
    Language,
    Code,
}

/// Text fields of the add-tutorial form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialField {
    Title,
    Duration,
    Url,
    Description,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Page mounted; kicks off settings, restore and manifest loading
    Startup,

    /// Keyboard event from the document
    Key(InputKey),

    /// Activate a panel and its button
    ShowTab(Tab),

    // ─────────────────────────────────────────────────────────
    // Startup Messages
    // ─────────────────────────────────────────────────────────
    /// Settings file fetched (`None` if absent)
    SettingsFetched { content: Option<String> },
    /// Read the saved workspace back from storage
    RestoreWorkspace,
    /// Saved workspace read (`Ok(None)` if nothing was stored)
    StoredWorkspaceLoaded {
        result: Result<Option<WorkspaceSnapshot>, String>,
    },
    /// Show the welcome toast
    ShowWelcome,

    // ─────────────────────────────────────────────────────────
    // Snippet Loading Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the manifest and rebuild the snippet sections
    LoadSnippets,
    /// Manifest fetch finished with the raw JSON text
    ManifestFetched { result: Result<String, String> },
    /// Snippet source file fetch finished
    SnippetFileFetched {
        block: BlockId,
        result: Result<String, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Snippet Messages
    // ─────────────────────────────────────────────────────────
    /// Add a snippet directly (the form submits through `SubmitSnippetForm`)
    AddCodeSnippet { snippet: Snippet },
    SnippetFormChanged { field: SnippetField, value: String },
    /// A thumbnail file was picked in the form (`None` clears it)
    SnippetFormThumbnailSelected { file_name: Option<String> },
    /// The file picked as `selection` has been read
    SnippetFormThumbnailLoaded { selection: u64, data_url: String },
    SnippetFormThumbnailFailed { selection: u64, error: String },
    SubmitSnippetForm,

    CopyCode { block: BlockId },
    CopySucceeded { block: BlockId },
    CopyFailed { block: BlockId, error: String },
    /// "Copied!" feedback period ended
    CopyFeedbackExpired { block: BlockId },

    ToggleCodeExpansion { block: BlockId },
    AutoCollapseCodeBlocks,

    // ─────────────────────────────────────────────────────────
    // Thumbnail Messages
    // ─────────────────────────────────────────────────────────
    /// Placeholder clicked: open the image picker
    AddThumbnail { block: BlockId },
    ThumbnailLoaded { block: BlockId, data_url: String },
    ThumbnailFailed { block: BlockId, error: String },
    RemoveThumbnail { block: BlockId },
    EnlargeThumbnail { block: BlockId },
    CloseThumbnailModal,

    // ─────────────────────────────────────────────────────────
    // Tutorial Messages
    // ─────────────────────────────────────────────────────────
    AddVideoTutorial { tutorial: Tutorial },
    TutorialFormChanged { field: TutorialField, value: String },
    SubmitTutorialForm,
    /// Invalid-URL placeholder clicked: ask for a new URL
    VideoPlaceholderClicked { tutorial: TutorialId },
    /// Prompt answered (`None` if cancelled)
    VideoUrlEntered {
        tutorial: TutorialId,
        url: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Notification Messages
    // ─────────────────────────────────────────────────────────
    DismissNotification { id: u64 },

    // ─────────────────────────────────────────────────────────
    // Persistence Messages
    // ─────────────────────────────────────────────────────────
    /// Periodic autosave timer fired
    AutosaveTick,
    /// Page is unloading; save synchronously
    PageUnload,
    /// Storage write finished
    WorkspaceSaved { result: Result<(), String> },
}

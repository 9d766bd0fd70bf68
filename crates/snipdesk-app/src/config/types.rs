//! Configuration types for the snippet workspace
//!
//! Defines `Settings` (the parsed `snipdesk.toml`) and its sections.

use serde::{Deserialize, Serialize};
use snipdesk_core::{DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_MANIFEST_PATH, DEFAULT_STORAGE_KEY};

/// Minimum autosave interval; shorter values are raised to this
pub const MIN_AUTOSAVE_SECS: u64 = 5;

/// Application settings (`snipdesk.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub workspace: WorkspaceSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Clamp values that would make the page misbehave
    pub fn normalized(mut self) -> Self {
        self.workspace.autosave_secs = self.workspace.autosave_secs.max(MIN_AUTOSAVE_SECS);
        self.ui.collapse_threshold = self.ui.collapse_threshold.max(1);
        if self.workspace.storage_key.trim().is_empty() {
            self.workspace.storage_key = default_storage_key();
        }
        if self.workspace.manifest_path.trim().is_empty() {
            self.workspace.manifest_path = default_manifest_path();
        }
        self
    }
}

/// Data sources and persistence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkspaceSettings {
    /// Manifest location, relative to the page
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// localStorage key for the workspace snapshot
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Seconds between autosaves
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,

    /// Restore user-added snippets and tutorials on startup
    #[serde(default = "default_true")]
    pub restore_on_load: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            storage_key: default_storage_key(),
            autosave_secs: default_autosave_secs(),
            restore_on_load: true,
        }
    }
}

/// Presentation timings and thresholds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Code with more lines than this starts collapsed
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: usize,

    /// How long a toast stays visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// How long a copy button shows "Copied!"
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,

    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,

    /// Empty disables the welcome toast
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            collapse_threshold: default_collapse_threshold(),
            notification_ms: default_notification_ms(),
            copied_feedback_ms: default_copied_feedback_ms(),
            welcome_delay_ms: default_welcome_delay_ms(),
            welcome_message: default_welcome_message(),
        }
    }
}

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_autosave_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_collapse_threshold() -> usize {
    DEFAULT_COLLAPSE_THRESHOLD
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_copied_feedback_ms() -> u64 {
    2000
}

fn default_welcome_delay_ms() -> u64 {
    1000
}

fn default_welcome_message() -> String {
    "Welcome to your Code Snippet Workspace!".to_string()
}

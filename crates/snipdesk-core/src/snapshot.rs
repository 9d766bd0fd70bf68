//! Persisted workspace snapshot
//!
//! The snapshot is stored as JSON under a single key. Its record fields match
//! the shape older saves used (`title`/`code`/`language` and
//! `title`/`duration`/`url`/`description`, empty strings for absent values), so
//! those saves still parse; newer fields are optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{non_empty, Snippet, Thumbnail, Tutorial};

/// Storage key the snapshot is written under
pub const DEFAULT_STORAGE_KEY: &str = "codeWorkspace";

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything needed to rebuild the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    #[serde(default)]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub snippets: Vec<SnippetRecord>,

    #[serde(default)]
    pub tutorials: Vec<TutorialRecord>,
}

/// Stored form of a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub title: String,
    pub code: String,
    pub language: String,

    /// Manifest category the snippet came from; `None` for user-added snippets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

/// Stored form of a tutorial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialRecord {
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl WorkspaceSnapshot {
    pub fn new(saved_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Some(saved_at),
            snippets: Vec::new(),
            tutorials: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty() && self.tutorials.is_empty()
    }

    /// Snippets the user added by hand (not supplied by the manifest)
    pub fn user_snippets(&self) -> impl Iterator<Item = &SnippetRecord> {
        self.snippets.iter().filter(|s| s.category.is_none())
    }
}

impl SnippetRecord {
    pub fn from_snippet(snippet: &Snippet, category: Option<&str>) -> Self {
        Self {
            title: snippet.title.clone(),
            code: snippet.code.clone(),
            language: snippet.language.clone(),
            category: category.map(str::to_string),
            thumbnail: snippet.thumbnail.clone(),
        }
    }

    pub fn to_snippet(&self) -> Snippet {
        Snippet::new(&self.title, &self.language, &self.code).with_thumbnail(self.thumbnail.clone())
    }
}

/// Stores the source URL; the embed URL is derived again on restore
impl From<&Tutorial> for TutorialRecord {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            title: tutorial.title.clone(),
            duration: tutorial.duration.clone().unwrap_or_default(),
            url: tutorial.url.clone(),
            description: tutorial.description.clone().unwrap_or_default(),
        }
    }
}

impl From<&TutorialRecord> for Tutorial {
    fn from(record: &TutorialRecord) -> Self {
        Self {
            title: record.title.clone(),
            duration: non_empty(&record.duration),
            url: record.url.clone(),
            description: non_empty(&record.description),
        }
    }
}

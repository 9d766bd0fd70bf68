//! Snippet manifest (`snippets.json`) parsing
//!
//! ```json
//! { "categories": [ { "name": "Rust", "snippets": [
//!     { "title": "Hello", "language": "rust", "file": "snippets/hello.rs" }
//! ] } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default manifest location, relative to the page
pub const DEFAULT_MANIFEST_PATH: &str = "snippets.json";

/// Listing of snippet files grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    pub categories: Vec<Category>,
}

/// One named group of snippets
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub snippets: Vec<ManifestEntry>,
}

/// A snippet whose source lives in a separate text file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestEntry {
    pub title: String,
    pub language: String,
    /// Path of the source file, fetched as given
    pub file: String,
}

impl Manifest {
    /// Parse a manifest from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Total number of snippet entries across all categories
    pub fn snippet_count(&self) -> usize {
        self.categories.iter().map(|c| c.snippets.len()).sum()
    }

    fn validate(&self) -> Result<()> {
        for category in &self.categories {
            if let Some(entry) = category.snippets.iter().find(|e| e.file.trim().is_empty()) {
                return Err(Error::manifest(format!(
                    "snippet '{}' in category '{}' has no file",
                    entry.title, category.name
                )));
            }
        }
        Ok(())
    }
}

//! Key-value persistence of the workspace snapshot
//!
//! The browser's localStorage implements [`KeyValueStore`] in the web
//! frontend; [`MemoryStore`] backs tests and non-browser use.

use std::cell::RefCell;
use std::collections::HashMap;

use snipdesk_core::prelude::*;
use snipdesk_core::WorkspaceSnapshot;

/// String key-value storage with synchronous access
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Serialize `snapshot` and write it under `key`, replacing what was there
pub fn save_workspace(
    store: &impl KeyValueStore,
    key: &str,
    snapshot: &WorkspaceSnapshot,
) -> Result<()> {
    let json = snapshot.to_json()?;
    store.set(key, &json)?;
    debug!("Saved workspace ({} bytes) under {}", json.len(), key);
    Ok(())
}

/// Read the snapshot under `key`; `Ok(None)` if nothing is stored
pub fn load_workspace(store: &impl KeyValueStore, key: &str) -> Result<Option<WorkspaceSnapshot>> {
    match store.get(key)? {
        Some(json) => WorkspaceSnapshot::from_json(&json)
            .with_context(|| format!("Stored workspace under {} is unreadable", key))
            .map(Some),
        None => Ok(None),
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    /// Makes every write fail with this message
    fail_writes: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, e.g. to simulate a full quota
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_writes: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(message) = &self.fail_writes {
            return Err(Error::storage(message.clone()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use snipdesk_core::{Snippet, SnippetRecord, DEFAULT_STORAGE_KEY};

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut snapshot = WorkspaceSnapshot::new(Utc::now());
        snapshot
            .snippets
            .push(SnippetRecord::from_snippet(&Snippet::new("A", "rust", "x"), None));

        save_workspace(&store, DEFAULT_STORAGE_KEY, &snapshot).unwrap();
        let loaded = load_workspace(&store, DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = MemoryStore::new();
        let mut first = WorkspaceSnapshot::new(Utc::now());
        first
            .snippets
            .push(SnippetRecord::from_snippet(&Snippet::new("A", "rust", "x"), None));
        save_workspace(&store, "k", &first).unwrap();

        let second = WorkspaceSnapshot::new(Utc::now());
        save_workspace(&store, "k", &second).unwrap();

        assert_eq!(store.len(), 1);
        assert!(load_workspace(&store, "k").unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_workspace(&store, "absent").unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_value() {
        let store = MemoryStore::new();
        store.set("k", "not json").unwrap();
        assert!(matches!(load_workspace(&store, "k"), Err(Error::Json(_))));
    }

    #[test]
    fn test_failing_store_reports_storage_error() {
        let store = MemoryStore::failing("QuotaExceededError");
        let err = save_workspace(&store, "k", &WorkspaceSnapshot::default()).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert!(store.is_empty());
    }
}

//! Key-value store with automatic serialization and write-through
//! persistence.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// A local key-value store with JSON string values.
///
/// Handles are cheap clones sharing the same underlying map, the way every
/// page of a browser profile sees one local storage. Concurrent handles are
/// last-writer-wins; there is no cross-handle transaction.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    values: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl Store {
    /// Open a file-backed store, loading existing state.
    ///
    /// A missing file starts an empty store; an unreadable or malformed
    /// file also starts empty (the next write replaces it) rather than
    /// failing the session.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "discarding malformed store file");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            inner: Arc::new(Mutex::new(Inner {
                values,
                path: Some(path),
            })),
        }
    }

    /// Open an ephemeral in-memory store.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                values: BTreeMap::new(),
                path: None,
            })),
        }
    }

    /// Get a value, deserializing it from its stored JSON string.
    ///
    /// Returns `Ok(None)` for a missing key and [`StoreError::Corrupt`]
    /// when the slot holds something that does not parse as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let inner = self.lock();
        match inner.values.get(key) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => Err(StoreError::Corrupt {
                    key: key.to_string(),
                    detail: e.to_string(),
                }),
            },
            None => Ok(None),
        }
    }

    /// Set a value, serializing to JSON and writing through to disk.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw)
    }

    /// Set a raw string value, writing through to disk.
    pub fn set_raw(&self, key: &str, raw: impl Into<String>) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.values.insert(key.to_string(), raw.into());
        persist(&inner)
    }

    /// Get the raw string value under a key.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Delete a value, writing through to disk.
    ///
    /// Returns whether the key was present.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        let removed = inner.values.remove(key).is_some();
        if removed {
            persist(&inner)?;
        }
        Ok(removed)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        self.lock().values.keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn persist(inner: &Inner) -> Result<(), StoreError> {
    if let Some(path) = &inner.path {
        let contents = serde_json::to_string_pretty(&inner.values)?;
        std::fs::write(path, contents)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Line {
        id: i64,
        quantity: u32,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let store = Store::in_memory();
        let lines = vec![Line { id: 1, quantity: 2 }, Line { id: 7, quantity: 1 }];

        store.set("cart", &lines).unwrap();
        let back: Option<Vec<Line>> = store.get("cart").unwrap();
        assert_eq!(back, Some(lines));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::in_memory();
        let value: Option<Vec<Line>> = store.get("absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_value_reported_not_panicked() {
        let store = Store::in_memory();
        store.set_raw("cart", "{not valid json").unwrap();

        let result: Result<Option<Vec<Line>>, _> = store.get("cart");
        match result {
            Err(e) => assert!(e.is_corrupt()),
            Ok(v) => panic!("expected corrupt error, got {:?}", v),
        }
        // The entry survives verbatim until the caller heals it.
        assert!(store.exists("cart"));
        assert_eq!(store.get_raw("cart").as_deref(), Some("{not valid json"));
    }

    #[test]
    fn test_delete() {
        let store = Store::in_memory();
        store.set("k", &1).unwrap();
        assert!(store.delete("k").unwrap());
        assert!(!store.exists("k"));
        assert!(!store.delete("k").unwrap());
    }

    #[test]
    fn test_handles_share_state_last_writer_wins() {
        let store = Store::in_memory();
        let other = store.clone();

        store.set("k", &1).unwrap();
        other.set("k", &2).unwrap();

        let value: Option<i64> = store.get("k").unwrap();
        assert_eq!(value, Some(2));
    }

    #[test]
    fn test_file_backed_roundtrip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");

        let store = Store::open(&path);
        store
            .set("cart", &vec![Line { id: 3, quantity: 4 }])
            .unwrap();
        drop(store);

        let reopened = Store::open(&path);
        let back: Option<Vec<Line>> = reopened.get("cart").unwrap();
        assert_eq!(back, Some(vec![Line { id: 3, quantity: 4 }]));
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(&path, "not a store file").unwrap();

        let store = Store::open(&path);
        assert!(store.keys().is_empty());

        // The next write replaces the bad file.
        store.set("k", &1).unwrap();
        let reopened = Store::open(&path);
        let value: Option<i64> = reopened.get("k").unwrap();
        assert_eq!(value, Some(1));
    }

    #[test]
    fn test_keys_listing() {
        let store = Store::in_memory();
        store.set("a", &1).unwrap();
        store.set("b", &2).unwrap();
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }
}

// In-memory item store
//
// Deterministic, I/O-free stand-in for FileStorage. Selected at runtime by
// the storage toggle and used directly by tests that want to assert on the
// exact sequence of storage calls.

use super::traits::{is_valid_id, Storage};
use crate::error::{AppError, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One recorded storage invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCall {
    pub operation: &'static str,
    pub args: Vec<String>,
}

impl StorageCall {
    fn new(operation: &'static str, args: &[&str]) -> Self {
        Self {
            operation,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Default)]
struct Inner {
    items: BTreeMap<String, String>,
    calls: Vec<StorageCall>,
}

/// Map-backed implementation of [`Storage`] with a call log
///
/// Usage:
///     let storage = MemoryStorage::new();
///     storage.add("note1", "hello")?;
///     assert_eq!(storage.calls()[0].operation, "add");
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; seeding is not recorded in the call log
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.lock().items = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        storage
    }

    /// Every invocation so far, oldest first
    pub fn calls(&self) -> Vec<StorageCall> {
        self.lock().calls.clone()
    }

    /// Snapshot of stored items
    pub fn items(&self) -> BTreeMap<String, String> {
        self.lock().items.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation leaves Inner half-updated, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, operation: &'static str, args: &[&str]) -> MutexGuard<'_, Inner> {
        let mut inner = self.lock();
        inner.calls.push(StorageCall::new(operation, args));
        inner
    }
}

impl Storage for MemoryStorage {
    fn add(&self, id: &str, content: &str) -> Result<()> {
        let mut inner = self.record("add", &[id, content]);

        if !is_valid_id(id) {
            return Err(AppError::InvalidId(id.to_string()));
        }
        if inner.items.contains_key(id) {
            return Err(AppError::AlreadyExists(id.to_string()));
        }

        inner.items.insert(id.to_string(), content.to_string());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let inner = self.record("list", &[]);
        Ok(inner.items.keys().cloned().collect())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.record("delete", &[id]);

        match inner.items.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(id.to_string())),
        }
    }

    fn exists(&self, id: &str) -> bool {
        self.record("exists", &[id]).items.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<Option<String>> {
        Ok(self.record("get", &[id]).items.get(id).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

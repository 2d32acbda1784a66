//! Durable key-value backends for browser-persisted state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs string get/set/remove. Hydrated builds talk to
//! `window.localStorage`; tests and SSR use an in-memory map with the same
//! contract so session logic can be exercised without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (private browsing, quota, missing `window`) are logged and
//! read back as absent values. Callers never see an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// String key-value storage scoped to the current origin.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Process-local storage used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// `window.localStorage`, resolved on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            log::warn!("localStorage remove of {key} failed: {err:?}");
        }
    }
}

/// Backend for the current build: localStorage when hydrated, memory otherwise.
pub fn default_backend() -> Arc<dyn StorageBackend> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::new())
    }
}

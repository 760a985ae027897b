//! Browser key-value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences and the user records live in `localStorage` ("durable") and
//! `sessionStorage` ("session"). Everything above this module talks to the
//! `KeyValueStore` trait so the same code runs against an in-memory map in
//! tests and outside the browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage areas are looked up on every call instead of being cached;
//! `web_sys::Storage` is not `Send`, and the lookup is cheap compared to the
//! JSON encode that follows.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// String key-value area with browser storage semantics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Which browser storage area a record lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// `localStorage`: survives browser restarts.
    Durable,
    /// `sessionStorage`: cleared with the browsing context.
    Session,
}

/// `localStorage` / `sessionStorage` of the current window.
///
/// Without the `csr` feature every call reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    #[cfg(feature = "csr")]
    fn area(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let area = match self.scope {
            StorageScope::Durable => window.local_storage(),
            StorageScope::Session => window.session_storage(),
        };
        area.map_err(js_rejected)?.ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn js_rejected(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            self.area()?.get_item(key).map_err(js_rejected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, self.scope);
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.area()?.set_item(key, value).map_err(js_rejected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.area()?.remove_item(key).map_err(js_rejected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Shared in-memory storage area. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// The two storage areas of one browser origin.
#[derive(Clone)]
pub struct Storages {
    pub durable: Arc<dyn KeyValueStore>,
    pub session: Arc<dyn KeyValueStore>,
}

impl Storages {
    /// The window's `localStorage` and `sessionStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            durable: Arc::new(BrowserStorage::new(StorageScope::Durable)),
            session: Arc::new(BrowserStorage::new(StorageScope::Session)),
        }
    }

    /// Two independent, empty in-memory areas.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_memory(&MemoryStorage::new(), &MemoryStorage::new())
    }

    /// Wrap existing in-memory areas so the caller can inspect them later.
    #[must_use]
    pub fn from_memory(durable: &MemoryStorage, session: &MemoryStorage) -> Self {
        Self { durable: Arc::new(durable.clone()), session: Arc::new(session.clone()) }
    }

    #[must_use]
    pub fn scope(&self, scope: StorageScope) -> &dyn KeyValueStore {
        match scope {
            StorageScope::Durable => self.durable.as_ref(),
            StorageScope::Session => self.session.as_ref(),
        }
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// `Ok(None)` when the key is absent; [`StorageError::Parse`] when present
/// but undecodable.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(StorageError::Parse)
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
    store.set(key, &raw)
}

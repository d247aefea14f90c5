//! Persistent key/value storage behind a small trait so the session store can
//! run against `localStorage` in the browser and an in-memory map in tests.
//! Only non-sensitive user metadata is persisted; passwords and cookies never
//! pass through here.

use super::errors::AppError;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub trait Storage {
    /// # Errors
    /// Returns `AppError::Storage` when the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    /// Returns `AppError::Storage` when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// # Errors
    /// Returns `AppError::Storage` when the value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a storage with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| AppError::Storage("localStorage is not available.".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to read `{key}`.")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write `{key}`.")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to remove `{key}`.")))
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, Storage};

    #[test]
    fn memory_storage_round_trips_and_shares_state() {
        let storage = MemoryStorage::new();
        let view = storage.clone();

        storage.set("currentUser", "{}").unwrap();
        assert_eq!(view.get("currentUser").unwrap().as_deref(), Some("{}"));

        view.remove("currentUser").unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.get("currentUser").unwrap(), None);
    }
}

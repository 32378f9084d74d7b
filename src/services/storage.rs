// ============================================================================
// TOKEN STORAGE - persistence port for the session token
// ============================================================================

use std::cell::RefCell;
use web_sys::{window, Storage};

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Browser `localStorage`, one raw string under a single key.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let storage = local_storage()?;
        storage.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(&self.key, token)
            .map_err(|_| "Could not write to localStorage".to_string())
    }

    fn clear(&self) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage is not available")?;
        storage
            .remove_item(&self.key)
            .map_err(|_| "Could not remove from localStorage".to_string())
    }
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

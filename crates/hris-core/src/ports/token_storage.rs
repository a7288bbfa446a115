//! Durable token storage port

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::TokenPair;
use hris_shared::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Key/value persistence that survives restarts (browser local storage, a file, ...).
#[cfg_attr(test, mockall::automock)]
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// `false` when running without durable storage (server-side, headless).
    fn is_available(&self) -> bool {
        true
    }
}

/// Overwrite both tokens.
pub fn store_session_tokens(storage: &dyn TokenStorage, tokens: &TokenPair) {
    storage.set(ACCESS_TOKEN_KEY, &tokens.access_token);
    storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
}

/// The single clear operation every logout path goes through.
pub fn clear_session_tokens(storage: &dyn TokenStorage) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(REFRESH_TOKEN_KEY);
}

pub fn access_token(storage: &dyn TokenStorage) -> Option<String> {
    storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn refresh_token(storage: &dyn TokenStorage) -> Option<String> {
    storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// In-process storage for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let storage = Self::new();
        storage.set(ACCESS_TOKEN_KEY, access);
        storage.set(REFRESH_TOKEN_KEY, refresh);
        storage
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}

/// Storage for environments without persistence. Reads nothing, writes nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTokenStorage;

impl TokenStorage for NoopTokenStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}

    fn is_available(&self) -> bool {
        false
    }
}

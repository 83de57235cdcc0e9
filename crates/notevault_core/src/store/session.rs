//! Abstract session-scoped key-value store.
//!
//! # Responsibility
//! - Define the storage contract the vault persists through.
//! - Provide the in-memory implementation whose lifetime models one browsing
//!   session: data survives as long as the value lives, and is gone when it
//!   is dropped.
//!
//! # Invariants
//! - All operations are synchronous and infallible; an absent key is a valid
//!   non-error result.

use std::collections::HashMap;

/// Key-value storage with session lifetime.
///
/// A "reload" keeps the store value alive and re-runs session
/// initialization against it; ending the session drops the value.
pub trait SessionStore {
    /// Returns the value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Inserts or replaces the value for `key`.
    fn set(&mut self, key: &str, value: &str);
    /// Removes `key` if present. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// HashMap-backed [`SessionStore`].
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

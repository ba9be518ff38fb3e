// SPDX-License-Identifier: MPL-2.0
//! Durable key-value preference storage port.
//!
//! Mirrors the browser's `localStorage` shape: string keys, string values,
//! best effort. Unavailable storage behaves as empty storage; `set` is
//! allowed to silently do nothing. Nothing here is a failure the user
//! should see.

/// Port for durable client-side preference storage.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` when absent or when
    /// storage is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Best effort; errors are swallowed.
    fn set(&mut self, key: &str, value: &str);
}

/// Simple in-memory store, used by the demo shell and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

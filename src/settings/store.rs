//! The key-value store behind persisted settings.
//!
//! The store holds two layers: explicit entries and registered defaults.
//! Reads consult explicit entries first and fall through to the default
//! layer; `remove` only ever touches explicit entries, so a registered
//! default shines through again once the explicit entry is gone.

use super::stored::Stored;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, trace};

/// The capability surface a settings backing store must provide.
pub trait SettingsStore {
    /// Look up `key`: the explicit entry if present, else the registered
    /// default, else `None`.
    fn get(&self, key: &str) -> Option<Stored>;

    /// Write an explicit entry for `key`.
    fn set(&self, key: &str, value: Stored);

    /// Remove the explicit entry for `key`. Registered defaults are not
    /// removable.
    fn remove(&self, key: &str);

    /// Register a default for `key`, consulted only when no explicit entry
    /// exists.
    fn register_default(&self, key: &str, value: Stored);

    /// Whether `key` resolves to anything (explicit entry or default).
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-process [`SettingsStore`] implementation.
///
/// Interior-mutable and meant to be shared via `Rc` between the settings
/// that use it. Single-threaded, like the rest of the crate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    layers: RefCell<Layers>,
}

#[derive(Debug, Default)]
struct Layers {
    entries: HashMap<String, Stored>,
    defaults: HashMap<String, Stored>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit entry for `key`, ignoring the default layer. Useful for
    /// inspecting exactly what a setting wrote.
    pub fn entry(&self, key: &str) -> Option<Stored> {
        self.layers.borrow().entries.get(key).cloned()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Stored> {
        let layers = self.layers.borrow();
        layers
            .entries
            .get(key)
            .or_else(|| layers.defaults.get(key))
            .cloned()
    }

    fn set(&self, key: &str, value: Stored) {
        trace!(key, kind = value.type_name(), "store set");
        self.layers.borrow_mut().entries.insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) {
        trace!(key, "store remove");
        self.layers.borrow_mut().entries.remove(key);
    }

    fn register_default(&self, key: &str, value: Stored) {
        debug!(key, kind = value.type_name(), "register default");
        self.layers.borrow_mut().defaults.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_entry_shadows_default() {
        let store = MemoryStore::new();
        store.register_default("k", Stored::Int(1));
        store.set("k", Stored::Int(2));

        assert_eq!(store.get("k"), Some(Stored::Int(2)));
    }

    #[test]
    fn default_visible_before_any_write() {
        let store = MemoryStore::new();
        store.register_default("k", Stored::Int(1));

        assert!(store.contains("k"));
        assert_eq!(store.get("k"), Some(Stored::Int(1)));
        assert_eq!(store.entry("k"), None);
    }

    #[test]
    fn remove_leaves_the_default_layer_intact() {
        let store = MemoryStore::new();
        store.register_default("k", Stored::Int(1));
        store.set("k", Stored::Int(2));

        store.remove("k");

        assert_eq!(store.get("k"), Some(Stored::Int(1)));
    }

    #[test]
    fn missing_key_resolves_to_nothing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope"), None);
        assert!(!store.contains("nope"));
    }
}

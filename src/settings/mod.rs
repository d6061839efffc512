//! Persisted, key-based settings backed by an external key-value store.
//!
//! A [`PersistedSetting`] binds a key, a typed default, and a store handle.
//! Reads decode the stored representation through the value's codec and fall
//! back to the default on absence or any conversion failure; writes encode
//! through the same codec. Optional settings map `None` to "no entry".

mod convert;
mod store;
mod stored;

pub use convert::{Blob, KeyCodec, ValueCodec};
pub use store::{MemoryStore, SettingsStore};
pub use stored::Stored;

use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// A typed accessor for one key in a settings store.
///
/// # Example
///
/// ```
/// use cellkit::{MemoryStore, PersistedSetting};
/// use std::rc::Rc;
///
/// let store = Rc::new(MemoryStore::new());
/// let retries = PersistedSetting::new("retries", || 3i64, store.clone());
///
/// assert_eq!(retries.get(), 3); // default, nothing stored yet
/// retries.set(5);
/// assert_eq!(retries.get(), 5);
/// ```
pub struct PersistedSetting<V> {
    key: String,
    default: Box<dyn Fn() -> V>,
    store: Rc<dyn SettingsStore>,
}

impl<V: ValueCodec> PersistedSetting<V> {
    /// Bind `key` in `store` with a default producer.
    ///
    /// For non-optional `V`, the encoded default is registered into the
    /// store's default layer, so a bare existence probe on the store
    /// reflects the default before any explicit write.
    ///
    /// # Panics
    ///
    /// Panics if `V` is optional and `default` produces a non-`None` value.
    /// A store cannot represent "entry present holding nothing", so absence
    /// of an entry and an explicit `None` are indistinguishable; `None` is
    /// the only default that stays consistent with that.
    pub fn new(
        key: impl Into<String>,
        default: impl Fn() -> V + 'static,
        store: Rc<dyn SettingsStore>,
    ) -> Self {
        let key = key.into();
        match default().encode() {
            Some(encoded) if !V::IS_OPTIONAL => store.register_default(&key, encoded),
            Some(_) => panic!(
                "PersistedSetting: the default for an optional setting must be None \
                 (key {key:?}); a store cannot distinguish a missing entry from an \
                 entry explicitly set to none"
            ),
            // Absent optional default: nothing to register.
            None => {}
        }
        Self {
            key,
            default: Box::new(default),
            store,
        }
    }

    /// Read the setting.
    ///
    /// Returns the decoded stored value if the key resolves and decodes,
    /// otherwise the default. Decode failures are recovered locally and
    /// never surface as errors.
    pub fn get(&self) -> V {
        match self.store.get(&self.key) {
            Some(stored) => match V::decode(&stored) {
                Some(value) => value,
                None => {
                    debug!(
                        key = %self.key,
                        kind = stored.type_name(),
                        "stored value failed to decode, using default"
                    );
                    (self.default)()
                }
            },
            None => (self.default)(),
        }
    }

    /// Write the setting.
    ///
    /// A value that encodes to the absent sentinel removes the key instead
    /// of storing anything. For optional `V` that is `None`. The one
    /// non-optional source of the sentinel is a collection containing an
    /// absent element (e.g. a `Vec<Option<T>>` holding a `None`), which has
    /// no stored form: writing it clears the entry, and later reads return
    /// the default.
    pub fn set(&self, value: V) {
        match value.encode() {
            Some(encoded) => self.store.set(&self.key, encoded),
            None => self.store.remove(&self.key),
        }
    }

    /// The key this setting is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<V> fmt::Debug for PersistedSetting<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSetting")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::new())
    }

    #[test]
    fn empty_store_yields_default() {
        let setting = PersistedSetting::new("n", || 42i64, store());
        assert_eq!(setting.get(), 42);
    }

    #[test]
    fn construction_registers_default_into_the_store() {
        let store = store();
        let _setting = PersistedSetting::new("n", || 42i64, store.clone());

        // Existence probe reflects the default before any explicit write,
        // but no explicit entry exists.
        assert!(store.contains("n"));
        assert_eq!(store.entry("n"), None);
    }

    #[test]
    fn set_then_get_round_trips_and_store_holds_the_encoding() {
        let store = store();
        let setting = PersistedSetting::new("n", || 42i64, store.clone());

        setting.set(7);

        assert_eq!(setting.get(), 7);
        assert_eq!(store.entry("n"), Some(Stored::Int(7)));
    }

    #[test]
    fn externally_written_raw_value_is_decoded() {
        let store = store();
        let setting = PersistedSetting::new("n", || 42i64, store.clone());

        store.set("n", Stored::Int(23));

        assert_eq!(setting.get(), 23);
    }

    #[test]
    fn corrupted_stored_value_falls_back_to_default() {
        let store = store();
        let setting = PersistedSetting::new("n", || 42i64, store.clone());

        store.set("n", Stored::String("twenty-three".into()));

        assert_eq!(setting.get(), 42);
    }

    #[test]
    fn optional_setting_set_none_removes_the_entry() {
        let store = store();
        let setting: PersistedSetting<Option<String>> =
            PersistedSetting::new("name", || None, store.clone());

        setting.set(Some("ada".into()));
        assert_eq!(setting.get(), Some("ada".to_string()));
        assert_eq!(store.entry("name"), Some(Stored::String("ada".into())));

        setting.set(None);
        assert_eq!(store.entry("name"), None);
        assert_eq!(setting.get(), None);
    }

    #[test]
    fn optional_setting_registers_no_default() {
        let store = store();
        let _setting: PersistedSetting<Option<i64>> =
            PersistedSetting::new("opt", || None, store.clone());
        assert!(!store.contains("opt"));
    }

    #[test]
    #[should_panic(expected = "default for an optional setting must be None")]
    fn optional_setting_with_non_none_default_panics() {
        let _setting: PersistedSetting<Option<i64>> =
            PersistedSetting::new("opt", || Some(1), store());
    }

    #[test]
    fn two_settings_share_one_store() {
        let store = store();
        let first = PersistedSetting::new("k", || 0i64, store.clone());
        let second = PersistedSetting::new("k", || 0i64, store.clone());

        first.set(5);
        assert_eq!(second.get(), 5);
    }
}

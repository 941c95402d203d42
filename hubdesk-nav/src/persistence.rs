//! Key/value persistence contract used by the navigation stores.
//!
//! Navigation state is not mission-critical: the helpers at the bottom of
//! this module turn every backend failure into a logged default so the
//! stores never surface an error to the layout.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Namespace for per-hub section expansion preferences.
pub const SECTIONS_NAMESPACE: &str = "nav-sections";
/// Namespace for the per-hub collapsed (icon-only) flag.
pub const COLLAPSED_NAMESPACE: &str = "nav-collapsed";
/// Namespace for per-list-context selections.
pub const SELECTED_NAMESPACE: &str = "nav-selected";

/// Errors reported by persistence backends.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("persistence IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("persistence JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persistence backend unavailable: {0}")]
    Unavailable(String),
}

/// Injected storage capability. Values are opaque strings.
pub trait Persistence {
    fn get(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<Option<String>, PersistenceError>;

    fn set(
        &mut self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), PersistenceError>;
}

/// Flat storage key, e.g. `nav-sections-crm`.
pub fn storage_key(namespace: &str, key: &str) -> String {
    format!("{namespace}-{key}")
}

/// Volatile store keeping values in a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under a flat key, for inspection.
    pub fn raw(&self, flat_key: &str) -> Option<&str> {
        self.entries.get(flat_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Persistence for MemoryStore {
    fn get(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(&storage_key(namespace, key)).cloned())
    }

    fn set(
        &mut self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), PersistenceError> {
        self.entries.insert(storage_key(namespace, key), value);
        Ok(())
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn get(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<Option<String>, PersistenceError> {
        (**self).get(namespace, key)
    }

    fn set(
        &mut self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), PersistenceError> {
        (**self).set(namespace, key, value)
    }
}

/// Read and decode a JSON value. Missing, unreadable, or undecodable
/// entries yield `None`.
pub(crate) fn read_json<T: DeserializeOwned>(
    store: &dyn Persistence,
    namespace: &str,
    key: &str,
) -> Option<T> {
    let raw = match store.get(namespace, key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!(
                "failed to read {}: {err}",
                storage_key(namespace, key)
            );
            return None;
        },
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!(
                "ignoring undecodable {}: {err}",
                storage_key(namespace, key)
            );
            None
        },
    }
}

/// Encode and write a JSON value. Failures are logged and dropped.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn Persistence,
    namespace: &str,
    key: &str,
    value: &T,
) {
    let result = serde_json::to_string(value)
        .map_err(PersistenceError::from)
        .and_then(|payload| store.set(namespace, key, payload));

    if let Err(err) = result {
        log::warn!("failed to write {}: {err}", storage_key(namespace, key));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Persistence, PersistenceError};

    /// Backend that fails every operation.
    #[derive(Debug, Default)]
    pub(crate) struct BrokenStore;

    impl Persistence for BrokenStore {
        fn get(
            &self,
            _namespace: &str,
            _key: &str,
        ) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Unavailable(String::from("read denied")))
        }

        fn set(
            &mut self,
            _namespace: &str,
            _key: &str,
            _value: String,
        ) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable(String::from("write denied")))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::testing::BrokenStore;
    use super::{MemoryStore, Persistence, read_json, write_json};

    #[test]
    fn given_memory_store_when_set_then_value_is_namespaced() {
        let mut store = MemoryStore::new();

        store
            .set("nav-collapsed", "crm", String::from("true"))
            .expect("memory store never fails");

        assert_eq!(store.raw("nav-collapsed-crm"), Some("true"));
        assert_eq!(
            store.get("nav-collapsed", "inbox").expect("readable"),
            None
        );
    }

    #[test]
    fn given_corrupt_payload_when_read_as_json_then_none_is_returned() {
        let mut store = MemoryStore::new();
        store
            .set("nav-sections", "crm", String::from("{ not json"))
            .expect("memory store never fails");

        let value: Option<BTreeMap<String, bool>> =
            read_json(&store, "nav-sections", "crm");

        assert_eq!(value, None);
    }

    #[test]
    fn given_failing_backend_when_reading_and_writing_then_nothing_panics() {
        let mut store = BrokenStore;

        write_json(&mut store, "nav-collapsed", "crm", &true);
        let value: Option<bool> = read_json(&store, "nav-collapsed", "crm");

        assert_eq!(value, None);
    }
}

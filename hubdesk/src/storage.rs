use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hubdesk_nav::{Persistence, PersistenceError, storage_key};

use crate::errors::StorageError;

const STATE_FILE_NAME: &str = "nav_state.json";

/// Return the default path of the navigation state file.
pub(crate) fn default_state_path() -> PathBuf {
    config_dir().join(STATE_FILE_NAME)
}

/// Return the app configuration directory.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("hubdesk");
    }
    std::env::temp_dir().join("hubdesk")
}

/// Key/value store mirrored to a JSON object file.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the file at `path`. A missing file is an empty store and a
    /// corrupt one is replaced on the next write.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                });
            },
            Err(err) => return Err(err.into()),
        };

        let entries = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!(
                    "ignoring corrupt state file {}: {err}",
                    path.display()
                );
                BTreeMap::new()
            },
        };
        Ok(Self { path, entries })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Save all entries to disk atomically.
    fn flush(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let payload = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, payload.as_bytes())?;
        std::fs::rename(tmp_path, &self.path)?;
        Ok(())
    }
}

impl Persistence for FileStore {
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
        self.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use hubdesk_nav::Persistence;

    use super::FileStore;

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "hubdesk-{name}-{}-{nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    #[test]
    fn given_missing_file_when_opened_then_store_is_empty() {
        let dir = temp_dir("missing");

        let store =
            FileStore::open(dir.join("nav_state.json")).expect("open store");

        assert_eq!(store.get("nav-collapsed", "crm").expect("get"), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn given_written_value_when_reopened_then_value_survives() {
        let dir = temp_dir("reopen");
        let path = dir.join("nested").join("nav_state.json");

        let mut store = FileStore::open(&path).expect("open store");
        store
            .set("nav-sections", "crm", String::from(r#"{"people":true}"#))
            .expect("write");

        let reopened = FileStore::open(&path).expect("reopen store");
        assert_eq!(
            reopened.get("nav-sections", "crm").expect("get").as_deref(),
            Some(r#"{"people":true}"#)
        );
        assert!(!path.with_extension("json.tmp").exists());

        let on_disk: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&path).expect("read file"),
        )
        .expect("valid json");
        assert_eq!(
            on_disk,
            serde_json::json!({ "nav-sections-crm": "{\"people\":true}" })
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn given_corrupt_file_when_opened_then_store_starts_empty() {
        let dir = temp_dir("corrupt");
        let path = dir.join("nav_state.json");
        std::fs::write(&path, "{ not json").expect("write corrupt file");

        let store = FileStore::open(&path).expect("open store");

        assert_eq!(
            store.get("nav-selected", "crm/contacts").expect("get"),
            None
        );
        assert_eq!(store.path(), path.as_path());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn given_unwritable_location_when_set_then_error_is_reported() {
        let dir = temp_dir("blocked");
        let path = dir.join("nav_state.json");
        let mut store = FileStore::open(&path).expect("open store");
        std::fs::create_dir_all(&path).expect("directory in place of file");

        let result = store.set("nav-collapsed", "crm", String::from("true"));

        assert!(result.is_err());
        assert_eq!(
            store.get("nav-collapsed", "crm").expect("get").as_deref(),
            Some("true")
        );
        let _ = std::fs::remove_dir_all(dir);
    }
}

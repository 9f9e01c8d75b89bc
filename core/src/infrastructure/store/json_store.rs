use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// One JSON blob per key under a data directory.
///
/// Failures never leave this type: reads fall back to the default value,
/// writes are logged and dropped.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `<platform data dir>/cookable`, falling back to the working
    /// directory when the platform offers none.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cookable")
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn read<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                debug!("no stored value for {key}: {err}");
                return T::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(value) => value,
            Err(err) => {
                warn!("stored value for {key} is corrupt, using default: {err}");
                T::default()
            }
        }
    }

    pub fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            error!("failed to create store directory: {err}");
            return;
        }

        let data = match serde_json::to_string_pretty(value) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to serialize {key}: {err}");
                return;
            }
        };

        if let Err(err) = fs::write(self.path(key), data) {
            error!("failed to write {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_missing_key_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        let value: Vec<String> = store.read("nothing");
        assert!(value.is_empty());
    }

    #[test]
    fn read_of_corrupt_value_is_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        let value: Vec<String> = store.read("broken");
        assert!(value.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        store.write("list", &vec!["salt".to_string(), "rice".to_string()]);
        let value: Vec<String> = store.read("list");
        assert_eq!(value, ["salt", "rice"]);
    }
}

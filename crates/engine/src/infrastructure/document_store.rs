//! JSON document store.
//!
//! One pretty-printed JSON file per registry under the data directory.
//! Writes go through a `.tmp` rename so an interrupted write never
//! corrupts the previous document. A missing or malformed document
//! loads as the default value, so a fresh data directory (or a bad
//! hand-edit) degrades to an empty registry instead of a crash.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize document {name}: {source}")]
    Serialize {
        name: String,
        source: serde_json::Error,
    },
    #[error("Failed to write document {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub struct JsonDocumentStore {
    root: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    pub fn load<T>(&self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(name);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read document, starting empty"
                );
                return T::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Malformed document, starting empty"
                );
                T::default()
            }
        }
    }

    pub fn save<T>(&self, name: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        std::fs::create_dir_all(&self.root).map_err(|source| StoreError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
            name: name.to_string(),
            source,
        })?;

        let path = self.path_for(name);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StoreError::Write { path, source })?;

        Ok(())
    }
}

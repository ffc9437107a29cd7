// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed implementation of the [`StorageArea`] trait.
//!
//! The whole area is one JSON object in one file. Every mutation rewrites the
//! file through a sibling temp file plus rename, so readers never observe a
//! partially written object. An interior mutex keeps the in-memory map and
//! the file in step.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::debug;

use plamo_core::{PlamoError, StorageArea};

/// Key-value area persisted as a single JSON object file.
pub struct FileStorageArea {
    path: PathBuf,
    map: Mutex<Map<String, Value>>,
}

impl FileStorageArea {
    /// Open the area at `path`, creating parent directories as needed. A
    /// missing file starts the area empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, PlamoError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(storage_err)?;
        }

        let map = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(storage_err)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(storage_err(e)),
        };

        debug!(path = %path.display(), keys = map.len(), "storage area opened");
        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    /// The file the area is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, map: &Map<String, Value>) -> Result<(), PlamoError> {
        let bytes = serde_json::to_vec_pretty(&Value::Object(map.clone())).map_err(storage_err)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await.map_err(storage_err)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(storage_err)
    }
}

#[async_trait]
impl StorageArea for FileStorageArea {
    async fn get(&self, key: &str) -> Result<Option<Value>, PlamoError> {
        let map = self.map.lock().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), PlamoError> {
        let mut map = self.map.lock().await;
        map.insert(key.to_string(), value);
        self.persist(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), PlamoError> {
        let mut map = self.map.lock().await;
        map.remove(key);
        self.persist(&map).await
    }

    async fn clear(&self) -> Result<(), PlamoError> {
        let mut map = self.map.lock().await;
        map.clear();
        self.persist(&map).await
    }
}

fn storage_err(e: impl std::error::Error + Send + Sync + 'static) -> PlamoError {
    PlamoError::Storage {
        source: Box::new(e),
    }
}

/// Read and decode the value under `key`. A missing key and a stored JSON
/// null both read as `None`.
pub async fn read_key<T: DeserializeOwned>(
    store: &dyn StorageArea,
    key: &str,
) -> Result<Option<T>, PlamoError> {
    match store.get(key).await? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(storage_err),
    }
}

/// Encode `value` and store it under `key`.
pub async fn write_key<T: Serialize>(
    store: &dyn StorageArea,
    key: &str,
    value: &T,
) -> Result<(), PlamoError> {
    let value = serde_json::to_value(value).map_err(storage_err)?;
    store.set(key, value).await
}

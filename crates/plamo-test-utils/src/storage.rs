// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage areas for tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use plamo_core::{PlamoError, StorageArea};

/// HashMap-backed storage area. The test stand-in for the extension's
/// key-value store and the production file area.
#[derive(Default)]
pub struct MemoryStorageArea {
    map: Mutex<HashMap<String, Value>>,
}

impl MemoryStorageArea {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageArea for MemoryStorageArea {
    async fn get(&self, key: &str) -> Result<Option<Value>, PlamoError> {
        Ok(self.map.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), PlamoError> {
        self.map.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PlamoError> {
        self.map.lock().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), PlamoError> {
        self.map.lock().await.clear();
        Ok(())
    }
}

/// Storage area whose writes fail for a chosen set of keys. Reads always
/// succeed; used to exercise the persistence-failure paths.
pub struct FlakyStorageArea {
    inner: MemoryStorageArea,
    failing_keys: HashSet<String>,
}

impl FlakyStorageArea {
    pub fn new(failing_keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            inner: MemoryStorageArea::new(),
            failing_keys: failing_keys.into_iter().collect(),
        }
    }
}

#[async_trait]
impl StorageArea for FlakyStorageArea {
    async fn get(&self, key: &str) -> Result<Option<Value>, PlamoError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), PlamoError> {
        if self.failing_keys.contains(key) {
            return Err(PlamoError::Storage {
                source: format!("injected write failure for key `{key}`").into(),
            });
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), PlamoError> {
        self.inner.remove(key).await
    }

    async fn clear(&self) -> Result<(), PlamoError> {
        self.inner.clear().await
    }
}

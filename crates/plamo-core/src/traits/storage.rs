// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait for the shared key-value persistence area.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PlamoError;

/// A flat key-value storage area.
///
/// Each call is atomic for its own key; there are no transactions and no
/// compare-and-swap, so read-modify-write sequences must be serialized by
/// the caller. Storing `Value::Null` is allowed and distinct from removal.
#[async_trait]
pub trait StorageArea: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, PlamoError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), PlamoError>;

    /// Remove `key` and its value.
    async fn remove(&self, key: &str) -> Result<(), PlamoError>;

    /// Remove every key in the area.
    async fn clear(&self) -> Result<(), PlamoError>;
}

//! Key-value store trait definition.

use async_trait::async_trait;

use crate::StoreResult;

/// Raw string storage keyed by string.
///
/// Implementations store opaque values; JSON encoding is handled by
/// [`crate::LedgerStore`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Gets the value stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

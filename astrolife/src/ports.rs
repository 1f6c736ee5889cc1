#![deny(clippy::all)]

use async_trait::async_trait;
use serde_json::Value;
use shared::Result;

// Ports are the pluggable extension points for underlying storage backends

/// Port for durable key-value access with prefix lookup.
/// Values are opaque to the store and round-trip unchanged.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Exact-key lookup. An absent key is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Insert or overwrite. The previous value is replaced wholesale.
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Remove a key. Removing a missing key is a no-op success.
    async fn delete(&self, key: &str) -> Result<()>;

    /// One result per input key, in input order. Duplicate inputs yield
    /// duplicate results.
    async fn get_batch(&self, keys: &[String]) -> Result<Vec<(String, Option<Value>)>>;

    /// Applied in input order. Stops at the first failure and reports its
    /// index; earlier entries stay applied.
    async fn set_batch(&self, entries: Vec<(String, Value)>) -> Result<()>;

    /// Same ordering and partial-failure policy as `set_batch`.
    async fn delete_batch(&self, keys: &[String]) -> Result<()>;

    /// All entries whose key starts with `prefix`, ordered lexicographically
    /// by key bytes. Empty when nothing matches.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>>;
}

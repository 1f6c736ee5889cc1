use crate::ports::KeyValueStore;
use async_trait::async_trait;
use serde_json::Value;
use shared::{Error, Result};
use std::path::Path;

/// Sled-backed key-value store
///
/// Values are stored as JSON bytes under their UTF-8 key. Every mutation is
/// flushed before the call returns, so an acknowledged write survives a
/// restart. Single-key write atomicity comes from the underlying tree; a
/// reader sees either the old or the new value of a key, never a mix.
pub struct SledKeyValueStore {
    db: sled::Db,
}

impl SledKeyValueStore {
    /// Open a store at the given path
    /// Creates the parent directory if it doesn't exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Storage(format!("Failed to open database: {}", e)))?;

        Ok(Self { db })
    }

    /// Flush outstanding writes. Called once more at shutdown.
    pub fn close(&self) -> Result<()> {
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        self.db
            .flush()
            .map_err(|e| Error::Storage(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }

    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key must not be empty"));
        }
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<Option<Value>> {
        Self::check_key(key)?;
        let bytes = self
            .db
            .get(key.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to get value: {}", e)))?;

        match bytes {
            Some(bytes) => Ok(Some(decode_value(&bytes)?)),
            None => Ok(None),
        }
    }

    fn insert(&self, key: &str, value: &Value) -> Result<()> {
        Self::check_key(key)?;
        let bytes = serde_json::to_vec(value)
            .map_err(|e| Error::Storage(format!("Failed to serialize value: {}", e)))?;

        self.db
            .insert(key.as_bytes(), bytes)
            .map_err(|e| Error::Storage(format!("Failed to set value: {}", e)))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::check_key(key)?;
        self.db
            .remove(key.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to delete value: {}", e)))?;
        Ok(())
    }
}

fn decode_value(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::Storage(format!("Failed to deserialize value: {}", e)))
}

fn decode_key(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| Error::Storage(format!("Failed to decode key: {}", e)))
}

#[async_trait]
impl KeyValueStore for SledKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        self.fetch(key)
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.insert(key, &value)?;
        self.flush()
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.remove(key)?;
        self.flush()
    }

    async fn get_batch(&self, keys: &[String]) -> Result<Vec<(String, Option<Value>)>> {
        let mut results = Vec::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            let value = self.fetch(key).map_err(|e| e.at_index(index))?;
            results.push((key.clone(), value));
        }
        Ok(results)
    }

    async fn set_batch(&self, entries: Vec<(String, Value)>) -> Result<()> {
        for (index, (key, value)) in entries.iter().enumerate() {
            if let Err(e) = self.insert(key, value) {
                // entries before `index` stay applied and durable
                self.flush()?;
                return Err(e.at_index(index));
            }
        }
        self.flush()
    }

    async fn delete_batch(&self, keys: &[String]) -> Result<()> {
        for (index, key) in keys.iter().enumerate() {
            if let Err(e) = self.remove(key) {
                self.flush()?;
                return Err(e.at_index(index));
            }
        }
        self.flush()
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>> {
        let mut entries = Vec::new();

        for item in self.db.scan_prefix(prefix.as_bytes()) {
            let (key, value) =
                item.map_err(|e| Error::Storage(format!("Failed to scan prefix: {}", e)))?;
            entries.push((decode_key(&key)?, decode_value(&value)?));
        }

        Ok(entries)
    }
}

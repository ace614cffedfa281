//! RecordStore: in-memory repository backend
//!
//! This module implements the Repository trait using:
//! - `HashMap<String, Value>` mapping identifier to stored entry
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Single lock**: one reader/writer lock guards the whole map. No nesting,
//!   so lock ordering cannot deadlock.
//! - **Full replace on save**: a second `save` for the same identifier swaps
//!   the record wholesale. There is no merge.
//! - **Truncate by reassignment**: the map is swapped for a fresh one under the
//!   write lock and the old map is dropped after the lock is released, so the
//!   hold time does not grow with the record count.
//! - **Entries are values**: the map holds `Value`, and `save` only ever writes
//!   `Value::Object`. `get` still checks the shape and reports `CorruptEntry`
//!   if the invariant is ever broken.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use flashdb_core::{Error, Record, Repository, Result, Value};

/// In-memory record store
///
/// Implements the Repository trait. Thread-safe through `parking_lot::RwLock`;
/// share it between threads with `Arc<RecordStore>`.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Identifier to stored entry. Never handed out to callers.
    data: RwLock<HashMap<String, Value>>,
}

impl RecordStore {
    /// Create a new empty RecordStore
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty RecordStore with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Check if a record is stored under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.data.read().contains_key(id)
    }

    /// Write a raw entry, bypassing record validation
    #[cfg(test)]
    fn insert_raw(&self, id: &str, value: Value) {
        self.data.write().insert(id.to_string(), value);
    }
}

impl Repository for RecordStore {
    fn list(&self) -> Result<Vec<Record>> {
        let data = self.data.read();
        // Malformed entries are not records, so they are not listed
        let records = data
            .values()
            .filter_map(|value| value.as_object().cloned())
            .collect();
        Ok(records)
    }

    fn get(&self, id: &str) -> Result<Record> {
        let data = self.data.read();
        match data.get(id) {
            Some(Value::Object(record)) => Ok(record.clone()),
            Some(other) => Err(Error::CorruptEntry {
                id: id.to_string(),
                found: other.type_name(),
            }),
            None => Err(Error::not_found(id)),
        }
    }

    fn save(&self, id: &str, record: Option<Record>) -> Result<()> {
        if id.is_empty() {
            return Err(Error::invalid_input("identifier cannot be empty"));
        }
        let record = record.ok_or_else(|| Error::invalid_input("data cannot be null"))?;

        let mut data = self.data.write();
        let replaced = data.insert(id.to_string(), Value::Object(record)).is_some();
        trace!(id, replaced, len = data.len(), "record saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut data = self.data.write();
        if data.remove(id).is_none() {
            return Err(Error::not_found(id));
        }
        trace!(id, len = data.len(), "record deleted");
        Ok(())
    }

    fn truncate(&self) -> Result<()> {
        let old = {
            let mut data = self.data.write();
            std::mem::take(&mut *data)
        };
        trace!(dropped = old.len(), "store truncated");
        Ok(())
    }
}

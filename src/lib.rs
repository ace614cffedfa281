//! FlashDB - thread-safe in-memory record store
//!
//! FlashDB keeps opaque JSON-like records in memory, keyed by a
//! caller-chosen identifier, behind the five-operation [`Repository`]
//! contract: list, get, save, delete and truncate. It stands in for a
//! persistent datastore during development and testing.
//!
//! # Quick Start
//!
//! ```
//! use flashdb::{decode_record, RecordStore, Repository};
//!
//! let store = RecordStore::new();
//! let record = decode_record(r#"{"key": "value"}"#)?;
//! store.save("1", record)?;
//!
//! assert_eq!(store.list()?.len(), 1);
//! assert!(store.get("2").unwrap_err().is_not_found());
//! # Ok::<(), flashdb::Error>(())
//! ```
//!
//! # Concurrency
//!
//! [`RecordStore`] guards its map with a single reader/writer lock. Share it
//! across threads with `Arc<RecordStore>`; reads run in parallel, writes are
//! exclusive, and every operation is applied atomically.

pub use flashdb_core::*;
pub use flashdb_storage::RecordStore;

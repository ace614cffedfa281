//! Core trait for record storage
//!
//! This module defines the Repository trait that lets callers swap the
//! in-memory store for another backing without changing call sites.

use crate::error::Result;
use crate::record::Record;

/// Repository abstraction over identifier-addressed records
///
/// The in-memory `RecordStore` is the reference implementation. A persistent
/// backing can implement the same contract; every method returns a `Result`
/// so such a backing can surface its own failures, even where the in-memory
/// store never fails.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait Repository: Send + Sync {
    /// List every stored record
    ///
    /// Order is unspecified.
    fn list(&self) -> Result<Vec<Record>>;

    /// Get the record stored under `id`
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored under `id`
    /// - `CorruptEntry` if the stored entry is not a well-formed record
    fn get(&self, id: &str) -> Result<Record>;

    /// Create or fully replace the record under `id`
    ///
    /// `None` stands for a null/absent record.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `record` is `None`; the store is left unchanged
    fn save(&self, id: &str, record: Option<Record>) -> Result<()>;

    /// Remove the record under `id`
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored under `id`
    fn delete(&self, id: &str) -> Result<()>;

    /// Remove every record in one atomic step
    fn truncate(&self) -> Result<()>;
}

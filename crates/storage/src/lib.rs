//! Storage layer for FlashDB
//!
//! This crate implements the in-memory backend:
//! - RecordStore: HashMap-based storage behind a single `parking_lot::RwLock`
//!
//! Reads (`list`, `get`) share the lock; writes (`save`, `delete`,
//! `truncate`) take it exclusively. Every operation is one critical section,
//! so no caller ever observes a partially-applied write.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::RecordStore;

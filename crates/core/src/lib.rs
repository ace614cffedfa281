//! Core types and traits for FlashDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: dynamically-typed field value
//! - Record: mapping from field name to Value, plus JSON payload decoding
//! - Error: error taxonomy shared by every repository implementation
//! - Repository: the five-operation storage contract

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use record::{decode_record, decode_records, encode_record, Record};
pub use traits::Repository;
pub use value::Value;

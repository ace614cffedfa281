//! Error types for FlashDB
//!
//! Every repository operation reports failure through [`Error`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for FlashDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for repository operations
///
/// No variant implies a state change: an operation that fails leaves the
/// store exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller supplied unusable input (missing record, empty identifier,
    /// undecodable payload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No record is stored under the identifier
    #[error("Record with ID {0} not found")]
    NotFound(String),

    /// An entry exists but is not a well-formed record
    ///
    /// Only reachable if something other than `save` wrote the entry.
    #[error("Record with ID {id} exists but is in an unexpected format (found {found})")]
    CorruptEntry {
        /// Identifier of the offending entry
        id: String,
        /// Type name of the value actually stored
        found: &'static str,
    },
}

impl Error {
    /// Build an `InvalidInput` error from any message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build a `NotFound` error for an identifier
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound(id.into())
    }

    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an `InvalidInput` error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Check if this is a `CorruptEntry` error
    pub fn is_corrupt_entry(&self) -> bool {
        matches!(self, Error::CorruptEntry { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::invalid_input("data cannot be null");
        let msg = err.to_string();
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("data cannot be null"));
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::not_found("42");
        assert_eq!(err.to_string(), "Record with ID 42 not found");
    }

    #[test]
    fn test_error_display_corrupt_entry() {
        let err = Error::CorruptEntry {
            id: "7".to_string(),
            found: "Array",
        };
        let msg = err.to_string();
        assert!(msg.contains("unexpected format"));
        assert!(msg.contains("7"));
        assert!(msg.contains("Array"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::not_found("x").is_invalid_input());

        assert!(Error::invalid_input("x").is_invalid_input());
        assert!(!Error::invalid_input("x").is_corrupt_entry());

        let corrupt = Error::CorruptEntry {
            id: "x".to_string(),
            found: "Int",
        };
        assert!(corrupt.is_corrupt_entry());
        assert!(!corrupt.is_not_found());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(Error::not_found("missing"))
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}

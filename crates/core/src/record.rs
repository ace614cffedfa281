//! Records and JSON payload decoding
//!
//! A [`Record`] is a mapping from field names to [`Value`]s. The store never
//! looks inside one; decoding from raw text happens here, before `save`.
//!
//! Decoding rules:
//! - JSON `null` decodes to `None`, which `save` rejects as invalid input
//! - a JSON object decodes to `Some(record)`
//! - any other JSON value, or malformed text, is invalid input

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::value::Value;

/// A stored record: field name to dynamically-typed value
pub type Record = HashMap<String, Value>;

/// Decode a single record from JSON text.
///
/// Returns `Ok(None)` for a literal `null` so callers can forward it to
/// `save` unchanged and get the store's own `InvalidInput` error.
pub fn decode_record(text: &str) -> Result<Option<Record>> {
    let json: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::invalid_input(format!("invalid JSON: {}", e)))?;

    match Value::from(json) {
        Value::Null => Ok(None),
        Value::Object(record) => Ok(Some(record)),
        other => Err(Error::invalid_input(format!(
            "expected a JSON object, found {}",
            other.type_name()
        ))),
    }
}

/// Decode a JSON object of `id -> record` pairs.
///
/// Used to preload a store. Every member must itself be an object.
pub fn decode_records(text: &str) -> Result<Vec<(String, Record)>> {
    let json: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::invalid_input(format!("invalid JSON: {}", e)))?;

    let members = match Value::from(json) {
        Value::Object(members) => members,
        other => {
            return Err(Error::invalid_input(format!(
                "expected a JSON object of records, found {}",
                other.type_name()
            )))
        }
    };

    members
        .into_iter()
        .map(|(id, value)| match value {
            Value::Object(record) => Ok((id, record)),
            other => Err(Error::invalid_input(format!(
                "record {} must be a JSON object, found {}",
                id,
                other.type_name()
            ))),
        })
        .collect()
}

/// Encode a record as compact JSON text.
pub fn encode_record(record: &Record) -> String {
    let json = serde_json::Value::from(Value::Object(record.clone()));
    json.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_object() {
        let record = decode_record(r#"{"key1": "value1", "key2": 42}"#)
            .unwrap()
            .unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("key1"), Some(&Value::String("value1".into())));
        assert_eq!(record.get("key2"), Some(&Value::Int(42)));
    }

    #[test]
    fn test_decode_null_is_absent() {
        assert_eq!(decode_record("null").unwrap(), None);
        assert_eq!(decode_record("  null  ").unwrap(), None);
    }

    #[test]
    fn test_decode_empty_object() {
        let record = decode_record("{}").unwrap().unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_decode_non_object_rejected() {
        let err = decode_record("[1, 2]").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Array"));

        let err = decode_record("\"text\"").unwrap_err();
        assert!(err.to_string().contains("String"));
    }

    #[test]
    fn test_decode_malformed_rejected() {
        let err = decode_record("{not json").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_decode_records() {
        let mut records = decode_records(r#"{"a": {"x": 1}, "b": {"y": [true]}}"#).unwrap();
        records.sort_by(|l, r| l.0.cmp(&r.0));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, "a");
        assert_eq!(records[0].1.get("x"), Some(&Value::Int(1)));
        assert_eq!(records[1].0, "b");
    }

    #[test]
    fn test_decode_records_rejects_non_object_member() {
        let err = decode_records(r#"{"a": {"x": 1}, "b": 3}"#).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("record b"));
    }

    #[test]
    fn test_decode_records_rejects_top_level_array() {
        let err = decode_records("[]").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_encode_record() {
        let mut record = Record::new();
        record.insert("key".to_string(), Value::from("value"));
        assert_eq!(encode_record(&record), r#"{"key":"value"}"#);
    }
}

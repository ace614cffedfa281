//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): Redis-style, e.g. `OK`, `(integer) 2`, `(error) ...`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): compact JSON records, bare numbers, no decorations
//!
//! Records are rendered through `serde_json::Value`, whose object keys are
//! sorted, so output is stable regardless of map iteration order.

use std::str::FromStr;

use flashdb_core::{encode_record, Error, Record, Value};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            "raw" => Ok(OutputMode::Raw),
            other => Err(format!(
                "unknown output mode '{}', expected \"human\", \"json\" or \"raw\"",
                other
            )),
        }
    }
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    format_error_message(&err.to_string(), mode)
}

/// Format an error that did not come from the store (parse, usage).
pub fn format_error_message(msg: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": msg }).to_string(),
        OutputMode::Raw => msg.to_string(),
        OutputMode::Human => format!("(error) {}", msg),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Count(n) => format!("(integer) {}", n),
        Output::Record(record) => encode_record(record),
        Output::Records(records) if records.is_empty() => "(empty list)".to_string(),
        Output::Records(records) => sorted(records)
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}) {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Count(n) => n.to_string(),
        Output::Record(record) => encode_record(record),
        Output::Records(records) => sorted(records).join("\n"),
    }
}

fn format_json(output: &Output) -> String {
    let json = match output {
        Output::Unit => serde_json::json!("OK"),
        Output::Count(n) => serde_json::json!(n),
        Output::Record(record) => record_json(record),
        Output::Records(records) => {
            serde_json::Value::Array(records.iter().map(record_json).collect())
        }
    };
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

fn record_json(record: &Record) -> serde_json::Value {
    serde_json::Value::from(Value::Object(record.clone()))
}

// List order is unspecified; sort the rendered lines so output is repeatable
fn sorted(records: &[Record]) -> Vec<String> {
    let mut lines: Vec<String> = records.iter().map(encode_record).collect();
    lines.sort();
    lines
}

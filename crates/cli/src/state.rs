//! Session wrapper around a repository.
//!
//! Holds the store for the lifetime of the process and turns parsed
//! [`Command`]s into [`Output`]s. Seeding from a JSON file happens here too.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use flashdb_core::{decode_records, Record, Repository, Result};
use flashdb_storage::RecordStore;

/// One record operation, already decoded from user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Get { id: String },
    /// `record` is `None` when the payload was JSON `null`
    Save { id: String, record: Option<Record> },
    Delete { id: String },
    Truncate,
    Count,
}

/// Successful result of a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Unit,
    Record(Record),
    Records(Vec<Record>),
    Count(usize),
}

/// Owns the repository for the shell session.
pub struct SessionState {
    repo: Box<dyn Repository>,
}

impl SessionState {
    /// Wrap any repository implementation.
    pub fn new(repo: Box<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Create an in-memory store, optionally preloaded from a seed file.
    pub fn open(initial_capacity: usize, seed: Option<&Path>) -> anyhow::Result<Self> {
        let state = Self::new(Box::new(RecordStore::with_capacity(initial_capacity)));
        if let Some(path) = seed {
            let count = state.load_seed(path)?;
            info!(path = %path.display(), count, "seeded records");
        }
        Ok(state)
    }

    /// Save every `id -> record` pair from a JSON seed file.
    pub fn load_seed(&self, path: &Path) -> anyhow::Result<usize> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
        let records = decode_records(&text)
            .with_context(|| format!("failed to decode seed file '{}'", path.display()))?;

        let count = records.len();
        for (id, record) in records {
            self.repo
                .save(&id, Some(record))
                .with_context(|| format!("failed to seed record '{}'", id))?;
        }
        Ok(count)
    }

    /// Execute a command against the repository.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::List => self.repo.list().map(Output::Records),
            Command::Get { id } => self.repo.get(&id).map(Output::Record),
            Command::Save { id, record } => self.repo.save(&id, record).map(|_| Output::Unit),
            Command::Delete { id } => self.repo.delete(&id).map(|_| Output::Unit),
            Command::Truncate => self.repo.truncate().map(|_| Output::Unit),
            Command::Count => self.repo.list().map(|records| Output::Count(records.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdb_core::Value;
    use std::io::Write;

    fn state() -> SessionState {
        SessionState::new(Box::new(RecordStore::new()))
    }

    fn record(key: &str, value: &str) -> Record {
        let mut r = Record::new();
        r.insert(key.to_string(), Value::from(value));
        r
    }

    #[test]
    fn test_execute_walkthrough() {
        let state = state();

        let out = state
            .execute(Command::Save {
                id: "1".into(),
                record: Some(record("key", "value")),
            })
            .unwrap();
        assert_eq!(out, Output::Unit);

        let out = state.execute(Command::Get { id: "1".into() }).unwrap();
        assert_eq!(out, Output::Record(record("key", "value")));

        assert_eq!(state.execute(Command::Count).unwrap(), Output::Count(1));

        state.execute(Command::Delete { id: "1".into() }).unwrap();
        let err = state.execute(Command::Get { id: "1".into() }).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_execute_save_null() {
        let state = state();
        let err = state
            .execute(Command::Save {
                id: "1".into(),
                record: None,
            })
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_execute_truncate() {
        let state = state();
        for id in ["a", "b"] {
            state
                .execute(Command::Save {
                    id: id.into(),
                    record: Some(Record::new()),
                })
                .unwrap();
        }
        state.execute(Command::Truncate).unwrap();
        assert_eq!(state.execute(Command::List).unwrap(), Output::Records(vec![]));
    }

    #[test]
    fn test_open_with_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"1": {{"key": "value"}}, "2": {{"n": 2}}}}"#).unwrap();

        let state = SessionState::open(0, Some(file.path())).unwrap();
        assert_eq!(state.execute(Command::Count).unwrap(), Output::Count(2));
        assert_eq!(
            state.execute(Command::Get { id: "1".into() }).unwrap(),
            Output::Record(record("key", "value"))
        );
    }

    #[test]
    fn test_open_with_missing_seed_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let err = SessionState::open(0, Some(&missing)).err().unwrap();
        assert!(err.to_string().contains("failed to read seed file"));
    }

    #[test]
    fn test_open_with_bad_seed_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"1": [1, 2]}}"#).unwrap();

        let err = SessionState::open(0, Some(file.path())).err().unwrap();
        assert!(err.to_string().contains("failed to decode seed file"));
    }
}

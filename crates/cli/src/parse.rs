//! ArgMatches → Command/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into a [`Command`]. Record payloads are
//! decoded from JSON here, before they reach the store.

use clap::ArgMatches;

use flashdb_core::decode_record;

use crate::state::Command;

/// REPL meta-commands, handled before clap sees the line.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts.next().map(str::to_string);
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a Command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "list" => Ok(Command::List),
        "truncate" => Ok(Command::Truncate),
        "count" => Ok(Command::Count),
        "get" => Ok(Command::Get {
            id: required(sub_matches, "id")?,
        }),
        "delete" => Ok(Command::Delete {
            id: required(sub_matches, "id")?,
        }),
        "save" => {
            let id = required(sub_matches, "id")?;
            let payload = required(sub_matches, "record")?;
            let record = decode_record(&payload).map_err(|e| e.to_string())?;
            Ok(Command::Save { id, record })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_repl_cmd;
    use flashdb_core::Value;

    fn parse(tokens: &[&str]) -> Result<Command, String> {
        let matches = build_repl_cmd()
            .try_get_matches_from(tokens)
            .map_err(|e| e.to_string())?;
        matches_to_command(&matches)
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(check_meta_command("quit"), Some(MetaCommand::Quit));
        assert_eq!(check_meta_command("  exit  "), Some(MetaCommand::Quit));
        assert_eq!(check_meta_command("clear"), Some(MetaCommand::Clear));
        assert_eq!(
            check_meta_command("help save"),
            Some(MetaCommand::Help {
                command: Some("save".to_string())
            })
        );
        assert_eq!(
            check_meta_command("help"),
            Some(MetaCommand::Help { command: None })
        );
        assert_eq!(check_meta_command("get 1"), None);
        assert_eq!(check_meta_command(""), None);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse(&["list"]).unwrap(), Command::List);
        assert_eq!(parse(&["truncate"]).unwrap(), Command::Truncate);
        assert_eq!(parse(&["count"]).unwrap(), Command::Count);
        assert_eq!(
            parse(&["get", "1"]).unwrap(),
            Command::Get { id: "1".to_string() }
        );
        assert_eq!(
            parse(&["delete", "3"]).unwrap(),
            Command::Delete { id: "3".to_string() }
        );
    }

    #[test]
    fn test_parse_save_decodes_json() {
        let cmd = parse(&["save", "1", r#"{"key": "value", "n": 2}"#]).unwrap();
        match cmd {
            Command::Save { id, record } => {
                assert_eq!(id, "1");
                let record = record.unwrap();
                assert_eq!(record.get("key"), Some(&Value::from("value")));
                assert_eq!(record.get("n"), Some(&Value::Int(2)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_save_null_passes_through() {
        let cmd = parse(&["save", "1", "null"]).unwrap();
        assert_eq!(
            cmd,
            Command::Save {
                id: "1".to_string(),
                record: None
            }
        );
    }

    #[test]
    fn test_parse_save_rejects_bad_json() {
        let err = parse(&["save", "1", "{oops"]).unwrap_err();
        assert!(err.contains("invalid JSON"));

        let err = parse(&["save", "1", "[1]"]).unwrap_err();
        assert!(err.contains("expected a JSON object"));
    }

    #[test]
    fn test_parse_shlex_tokens() {
        let tokens = shlex::split(r#"save user:1 '{"name": "ada lovelace"}'"#).unwrap();
        let matches = build_repl_cmd().try_get_matches_from(tokens).unwrap();
        match matches_to_command(&matches).unwrap() {
            Command::Save { id, record } => {
                assert_eq!(id, "user:1");
                assert_eq!(
                    record.unwrap().get("name"),
                    Some(&Value::from("ada lovelace"))
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

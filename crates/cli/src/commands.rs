//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL/pipe mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Names of every record command, for help output and TAB completion.
pub const COMMAND_NAMES: &[&str] = &["list", "get", "save", "delete", "truncate", "count"];

/// Build the complete CLI command tree for shell mode.
pub fn build_cli() -> Command {
    let cmd = Command::new("flashdb")
        .about("Shell for the FlashDB in-memory record store")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./flashdb.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("JSON file of id -> record pairs to preload")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare JSON, no decorations)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print a commented default flashdb.toml and exit")
                .action(ArgAction::SetTrue),
        );
    with_record_commands(cmd)
}

/// Build the command tree used for REPL and pipe lines.
///
/// Lines carry no binary name, so the first token is the subcommand.
pub fn build_repl_cmd() -> Command {
    let cmd = Command::new("flashdb")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_help_subcommand(true);
    with_record_commands(cmd)
}

fn with_record_commands(cmd: Command) -> Command {
    cmd.subcommand(Command::new("list").about("List every stored record"))
        .subcommand(
            Command::new("get")
                .about("Get the record stored under an id")
                .arg(Arg::new("id").required(true).help("Record id")),
        )
        .subcommand(
            Command::new("save")
                .about("Create or replace the record under an id")
                .visible_alias("set")
                .arg(Arg::new("id").required(true).help("Record id"))
                .arg(
                    Arg::new("record")
                        .required(true)
                        .help("Record as a JSON object, e.g. '{\"key\": \"value\"}'"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete the record under an id")
                .visible_alias("del")
                .arg(Arg::new("id").required(true).help("Record id")),
        )
        .subcommand(Command::new("truncate").about("Remove every record"))
        .subcommand(Command::new("count").about("Number of stored records"))
}

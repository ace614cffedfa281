//! FlashDB CLI — Redis-style shell over an in-memory record store.
//!
//! Three modes:
//! - **Shell mode**: `flashdb [flags] COMMAND` — single command, exit
//! - **REPL mode**: `flashdb [flags]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "get 1" | flashdb --seed data.json` — line-by-line from stdin
//!
//! The store lives only as long as the process; `--seed` preloads it.

mod commands;
mod config;
mod format;
mod logging;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::ArgMatches;
use tracing::debug;

use commands::build_cli;
use config::FlashConfig;
use format::{format_error, format_error_message, format_output, OutputMode};
use parse::matches_to_command;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    match run(&matches) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<i32> {
    if matches.get_flag("print-config") {
        print!("{}", FlashConfig::default_toml());
        return Ok(0);
    }

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = FlashConfig::load(config_path).context("failed to load configuration")?;

    logging::init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        config.output_mode()?
    };

    let seed = matches
        .get_one::<String>("seed")
        .map(PathBuf::from)
        .or_else(|| config.seed.clone());
    let state = SessionState::open(config.initial_capacity, seed.as_deref())?;

    // Dispatch mode
    if matches.subcommand().is_some() {
        Ok(run_shell_mode(matches, &state, output_mode))
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&state, output_mode)?;
        Ok(0)
    } else {
        Ok(repl::run_pipe(&state, output_mode))
    }
}

fn run_shell_mode(matches: &ArgMatches, state: &SessionState, mode: OutputMode) -> i32 {
    let cmd = match matches_to_command(matches) {
        Ok(cmd) => cmd,
        Err(msg) => {
            eprintln!("{}", format_error_message(&msg, mode));
            return 1;
        }
    };

    match state.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

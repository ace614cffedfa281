//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::commands::{build_repl_cmd, COMMAND_NAMES};
use crate::format::{format_error, format_error_message, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_command, MetaCommand};
use crate::state::SessionState;

const META_NAMES: &[&str] = &["help", "clear", "quit", "exit"];

/// Run the interactive REPL.
pub fn run_repl(state: &SessionState, mode: OutputMode) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<FlashHelper, _> = Editor::with_config(config)?;
    rl.set_helper(Some(FlashHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("flashdb> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                execute_line(trimmed, state, mode);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns the process exit code: 1 if any line failed.
pub fn run_pipe(state: &SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match check_meta_command(trimmed) {
            Some(MetaCommand::Quit) => break,
            Some(MetaCommand::Help { command }) => {
                print_help(command.as_deref());
                continue;
            }
            Some(MetaCommand::Clear) => continue,
            None => {}
        }

        if !execute_line(trimmed, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Tokenize, parse and execute one line. Returns true on success.
pub fn execute_line(line: &str, state: &SessionState, mode: OutputMode) -> bool {
    // Tokenize with shlex (respects quotes)
    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return true,
        None => {
            eprintln!("{}", format_error_message("Invalid quoting", mode));
            return false;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    let cmd = match matches_to_command(&matches) {
        Ok(cmd) => cmd,
        Err(msg) => {
            eprintln!("{}", format_error_message(&msg, mode));
            return false;
        }
    };

    match state.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.flashdb_history", h))
}

fn print_help(command: Option<&str>) {
    match command {
        Some(cmd) => {
            if let Err(e) = build_repl_cmd().try_get_matches_from([cmd, "--help"]) {
                println!("{}", e);
            }
        }
        None => {
            println!("Available commands:");
            let cli = build_repl_cmd();
            for sub in cli.get_subcommands() {
                let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
                println!("  {:<10} {}", sub.get_name(), about);
            }
            println!();
            println!("Meta commands: help [command], clear, quit");
        }
    }
}

/// TAB completion for command names.
struct FlashHelper;

impl Completer for FlashHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the first word is completed
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = COMMAND_NAMES
            .iter()
            .chain(META_NAMES.iter())
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for FlashHelper {
    type Hint = String;
}

impl Highlighter for FlashHelper {}

impl Validator for FlashHelper {}

impl Helper for FlashHelper {}

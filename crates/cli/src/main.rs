//! UNIAG console shell for the research-unit registry.
//!
//! Three modes:
//! - **Shell mode**: `uniag [flags] COMMAND`: single command, exit
//! - **Menu mode**: `uniag [flags]`: numeric menu (if stdin is TTY)
//! - **Pipe mode**: `echo "member list" | uniag`: line-by-line from stdin

mod commands;
mod config;
mod format;
mod menu;
mod parse;
mod repl;
mod seed;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing_subscriber::EnvFilter;
use uniag_executor::Executor;

use commands::build_cli;
use config::CliConfig;
use format::{Formatter, OutputMode};
use parse::matches_to_command;

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

fn run(matches: &ArgMatches) -> Result<i32> {
    let config = CliConfig::load(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        Path::new("."),
    )?;
    init_logging(&config.log_filter);

    // Flags win over the configured mode
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        config.output
    };
    let fmt = Formatter::new(mode, config.currency_symbol.clone());

    let executor = Executor::default();
    if config.seed_sample_data && !matches.get_flag("empty") {
        executor
            .registry()
            .write(seed::seed_sample_data)
            .context("Failed to load sample data")?;
    }

    if matches.subcommand().is_some() {
        Ok(run_shell_mode(matches, &executor, &fmt))
    } else if io::stdin().is_terminal() {
        menu::run_menu(&executor, &config.currency_symbol)?;
        Ok(0)
    } else {
        Ok(repl::run_pipe(&executor, &fmt))
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the configured filter.
fn init_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn run_shell_mode(matches: &ArgMatches, executor: &Executor, fmt: &Formatter) -> i32 {
    let command = match matches_to_command(matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    let stdout = io::stdout();
    let stderr = io::stderr();
    match repl::execute_and_print(executor, command, fmt, &mut stdout.lock(), &mut stderr.lock())
    {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

//! The stanza command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions: the locator and parsers for `check`, the project
//! runner for `run`.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, StanzaArgs};
use crate::locator::locate_test_case;
use crate::parsing::parse_test_case;
use crate::runner::project::{discover_files, TEST_CASE_EXTENSION};
use crate::runner::{DryRunExecutor, ProjectRunner};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = StanzaArgs::parse();

    let exit_code = match args.command {
        Command::Check { path } => handle_check(&path),
        Command::Run { path, json } => handle_run(&path, json),
    };
    process::exit(exit_code);
}

/// Handles the `check` subcommand: parse everything, execute nothing.
fn handle_check(path: &Path) -> i32 {
    let files = if path.is_dir() {
        discover_files(path, TEST_CASE_EXTENSION)
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        eprintln!("no .stt files under '{}'", path.display());
        return 1;
    }

    let mut broken = 0;
    for file in files {
        match check_file(&file) {
            Ok(()) => println!("ok: {}", file.display()),
            Err(error) => {
                broken += 1;
                eprintln!("{}:", file.display());
                eprintln!("{:?}", miette::Report::new(error));
            }
        }
    }
    if broken > 0 {
        1
    } else {
        0
    }
}

fn check_file(path: &Path) -> Result<(), crate::errors::StanzaError> {
    let resource = locate_test_case(path)?;
    parse_test_case(&resource.content)?;
    Ok(())
}

/// Handles the `run` subcommand against the built-in dry-run executor.
fn handle_run(path: &Path, json: bool) -> i32 {
    let mut executor = DryRunExecutor::default();
    let outcome = ProjectRunner::new(&mut executor).run(path);

    if json {
        match serde_json::to_string_pretty(&outcome.result) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => {
                eprintln!("unable to render the summary: {error}");
                return 1;
            }
        }
    } else {
        output::print_summary(&outcome.result);
    }
    output::print_project_failures(&outcome);

    if outcome.is_clean() {
        0
    } else {
        1
    }
}

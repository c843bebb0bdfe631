//! Command-line arguments for the stanza CLI.
//!
//! Uses `clap` derive for a declarative, type-safe argument structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "stanza",
    version,
    about = "A markdown-style test DSL and execution engine for database procedures."
)]
pub struct StanzaArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a test case file or a project tree and report grammar errors.
    Check {
        /// A `.stt` file, or a directory searched recursively for `.stt` files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Run a test project and print the aggregate pass/fail/error summary.
    ///
    /// The built-in executor performs a structure dry run; a database-backed
    /// executor plugs in through the library's `ScriptExecutor` trait.
    Run {
        /// The project root containing `src/` scripts and `tests/` cases.
        #[arg(required = true)]
        path: PathBuf,
        /// Print the summary as JSON instead of the colored report.
        #[arg(long)]
        json: bool,
    },
}

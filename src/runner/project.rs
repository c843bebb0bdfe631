//! Project execution.
//!
//! A project root holds one-time setup scripts under `src/` and `.stt` test
//! case files under `tests/`. Scripts run first, best-effort, in lexical
//! order; test cases then run one after another (they share the executor's
//! connection and the state the scripts established), and their results fold
//! into a single aggregate. A project without test case files is a no-op,
//! not an error.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::StanzaError;
use crate::parsing::parse_test_case;
use crate::reporting::RunResult;
use crate::runner::case::TestCaseRunner;
use crate::runner::executor::{Outcome, ScriptExecutor};

/// Extension of test case files.
pub const TEST_CASE_EXTENSION: &str = "stt";

/// Extension of one-time source scripts.
pub const SOURCE_SCRIPT_EXTENSION: &str = "sql";

/// A source script the executor rejected.
#[derive(Debug)]
pub struct ScriptFailure {
    pub path: PathBuf,
    pub message: String,
}

/// A `.stt` file that could not be read or parsed. The file contributes one
/// error to the aggregate and its siblings still run.
#[derive(Debug)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub error: StanzaError,
}

/// Everything a project run produced: the folded tally plus the collected
/// setup and parse failures the reporting layer surfaces.
#[derive(Debug, Default)]
pub struct ProjectOutcome {
    pub result: RunResult,
    pub script_failures: Vec<ScriptFailure>,
    pub parse_failures: Vec<ParseFailure>,
}

impl ProjectOutcome {
    pub fn is_clean(&self) -> bool {
        self.result.is_clean() && self.script_failures.is_empty() && self.parse_failures.is_empty()
    }
}

/// Runs every test case of a project through one executor.
pub struct ProjectRunner<'e, E: ScriptExecutor> {
    executor: &'e mut E,
}

impl<'e, E: ScriptExecutor> ProjectRunner<'e, E> {
    pub fn new(executor: &'e mut E) -> Self {
        ProjectRunner { executor }
    }

    /// Executes the project at `root`. Returns an all-zero outcome when no
    /// test case files are present.
    pub fn run(&mut self, root: &Path) -> ProjectOutcome {
        let mut outcome = ProjectOutcome::default();

        let case_files = discover_files(&root.join("tests"), TEST_CASE_EXTENSION);
        if case_files.is_empty() {
            return outcome;
        }

        for script in discover_files(&root.join("src"), SOURCE_SCRIPT_EXTENSION) {
            self.run_source_script(&script, &mut outcome);
        }

        for path in case_files {
            self.run_test_case_file(&path, &mut outcome);
        }
        outcome
    }

    fn run_source_script(&mut self, path: &Path, outcome: &mut ProjectOutcome) {
        let script = match fs::read_to_string(path) {
            Ok(script) => script,
            Err(source) => {
                outcome.script_failures.push(ScriptFailure {
                    path: path.to_path_buf(),
                    message: StanzaError::Resource {
                        path: path.display().to_string(),
                        source,
                    }
                    .to_string(),
                });
                return;
            }
        };
        if let Outcome::Failure(message) = self.executor.execute_script(&script) {
            outcome.script_failures.push(ScriptFailure {
                path: path.to_path_buf(),
                message,
            });
        }
    }

    fn run_test_case_file(&mut self, path: &Path, outcome: &mut ProjectOutcome) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                outcome.result.record_error();
                outcome.parse_failures.push(ParseFailure {
                    path: path.to_path_buf(),
                    error: StanzaError::Resource {
                        path: path.display().to_string(),
                        source,
                    },
                });
                return;
            }
        };
        match parse_test_case(&text) {
            Ok(case) => {
                outcome.result += TestCaseRunner::new(self.executor).run(&case);
            }
            Err(error) => {
                outcome.result.record_error();
                outcome.parse_failures.push(ParseFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
}

/// Recursively collects files with the given extension, sorted for a
/// deterministic execution order. A missing directory yields no files.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

//! The SQL-execution collaborator seam.
//!
//! The runner never talks to a database itself; it depends on a
//! [`ScriptExecutor`] passed in by construction, so the whole orchestration is
//! testable against a fake that returns scripted outcomes. The executor owns
//! the connection/session; every call is a single synchronous invocation.

use crate::model::ArgValue;

/// Outcome of one call to the execution collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// A comparable failure carrying the collaborator's error message.
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(message) => Some(message),
        }
    }
}

/// The capability the runner is handed: execute SQL and report the outcome.
///
/// Hook names are passed through verbatim; resolving them to routines is the
/// collaborator's concern. Omitted arguments ([`ArgValue::Omitted`]) mean the
/// procedure's own default applies.
pub trait ScriptExecutor {
    /// Run a free-form SQL script, test body, or assertion body.
    fn execute_script(&mut self, script: &str) -> Outcome;

    /// Invoke a database-resident procedure with resolved arguments.
    fn execute_procedure(&mut self, procedure: &str, args: &[ArgValue]) -> Outcome;

    /// Invoke a named setup/teardown routine.
    fn execute_hook(&mut self, hook: &str) -> Outcome;
}

/// Executor that records every call and reports success. Backs the CLI's
/// structure dry runs; the real database transport plugs in through the same
/// trait.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    pub calls: Vec<String>,
}

impl ScriptExecutor for DryRunExecutor {
    fn execute_script(&mut self, script: &str) -> Outcome {
        self.calls.push(format!("script: {}", first_line(script)));
        Outcome::Success
    }

    fn execute_procedure(&mut self, procedure: &str, args: &[ArgValue]) -> Outcome {
        self.calls
            .push(format!("procedure: {procedure} ({} args)", args.len()));
        Outcome::Success
    }

    fn execute_hook(&mut self, hook: &str) -> Outcome {
        self.calls.push(format!("hook: {hook}"));
        Outcome::Success
    }
}

fn first_line(script: &str) -> &str {
    script.lines().next().unwrap_or("")
}

use std::path::{Path, PathBuf};

use stanza::errors::ErrorKind;
use stanza::model::ArgValue;
use stanza::runner::{DryRunExecutor, Outcome, ProjectRunner, ScriptExecutor};

fn project(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/projects")
        .join(name)
}

/// Succeeds everywhere except calls whose text contains a trigger substring.
#[derive(Default)]
struct FallibleExecutor {
    triggers: Vec<(&'static str, &'static str)>,
    calls: Vec<String>,
}

impl FallibleExecutor {
    fn failing(triggers: &[(&'static str, &'static str)]) -> Self {
        FallibleExecutor {
            triggers: triggers.to_vec(),
            calls: Vec::new(),
        }
    }

    fn outcome(&mut self, text: &str) -> Outcome {
        self.calls.push(text.to_string());
        for (trigger, message) in &self.triggers {
            if text.contains(trigger) {
                return Outcome::Failure(message.to_string());
            }
        }
        Outcome::Success
    }
}

impl ScriptExecutor for FallibleExecutor {
    fn execute_script(&mut self, script: &str) -> Outcome {
        self.outcome(script)
    }

    fn execute_procedure(&mut self, procedure: &str, _args: &[ArgValue]) -> Outcome {
        self.outcome(procedure)
    }

    fn execute_hook(&mut self, hook: &str) -> Outcome {
        self.outcome(hook)
    }
}

#[test]
fn runs_scripts_first_then_test_cases_in_lexical_order() {
    let mut executor = DryRunExecutor::default();
    let outcome = ProjectRunner::new(&mut executor).run(&project("basic"));

    assert_eq!(
        executor.calls,
        vec![
            "script: INSERT INTO clients (id, name) VALUES (1, 'ACME');",
            "script: CREATE TABLE clients (id NUMBER, name VARCHAR2(100));",
            "procedure: CLIENT$BALANCE$UPDATE (2 args)",
            "procedure: CLIENT$BALANCE$UPDATE (2 args)",
            "script: SELECT * FROM daily_report;",
            "script: SELECT COUNT(*) FROM daily_report;",
        ]
    );
    assert!(outcome.is_clean());
    assert_eq!(outcome.result.passed, 4);
    assert_eq!(outcome.result.total(), 4);
}

#[test]
fn a_project_without_test_cases_runs_nothing() {
    let mut executor = DryRunExecutor::default();
    let outcome = ProjectRunner::new(&mut executor).run(&project("empty_project"));

    assert!(executor.calls.is_empty());
    assert!(outcome.is_clean());
    assert_eq!(outcome.result.total(), 0);
}

#[test]
fn an_unparseable_file_is_one_error_and_its_siblings_still_run() {
    let mut executor = DryRunExecutor::default();
    let outcome = ProjectRunner::new(&mut executor).run(&project("broken_case"));

    assert_eq!(outcome.result.passed, 1);
    assert_eq!(outcome.result.errored, 1);
    assert_eq!(outcome.parse_failures.len(), 1);
    let failure = &outcome.parse_failures[0];
    assert!(failure.path.ends_with("malformed.stt"));
    assert_eq!(failure.error.kind(), ErrorKind::InvalidTestCaseFormat);
    assert!(!outcome.is_clean());
}

#[test]
fn a_fatal_setup_in_one_case_leaves_the_next_case_untouched() {
    let mut executor = FallibleExecutor::failing(&[("Broken setup", "no such routine")]);
    let outcome = ProjectRunner::new(&mut executor).run(&project("fatal_setup"));

    assert_eq!(outcome.result.errored, 1);
    assert_eq!(outcome.result.passed, 1);
    assert!(executor.calls.iter().any(|call| call.contains("SELECT 2")));
    assert!(!executor.calls.iter().any(|call| call.contains("SELECT 1")));
}

#[test]
fn a_rejected_source_script_is_collected_without_aborting() {
    let mut executor = FallibleExecutor::failing(&[("CREATE TABLE", "insufficient privileges")]);
    let outcome = ProjectRunner::new(&mut executor).run(&project("basic"));

    assert_eq!(outcome.script_failures.len(), 1);
    let failure = &outcome.script_failures[0];
    assert!(failure.path.ends_with("setup_tables.sql"));
    assert_eq!(failure.message, "insufficient privileges");
    // Setup trouble never counts against the assertion tally.
    assert_eq!(outcome.result.passed, 4);
    assert!(!outcome.is_clean());
}

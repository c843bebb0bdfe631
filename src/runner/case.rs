//! Test case execution.
//!
//! One case runs on one logical thread against one executor, in a strict
//! before/after order: `beforeAll`, then per test the case-level and
//! test-level before hooks, the body or rows, the after hooks, and finally
//! `afterAll`. Failures are contained: a bad row, body, or assertion folds
//! into the tally and the run moves on. The single fatal point is a
//! `beforeAll` hook failure: the case records one error and skips its tests,
//! though `afterAll` teardown still runs.

use crate::model::{CaseHooks, GenericTest, ProcedureTest, RowExpectation, TestCase};
use crate::reporting::RunResult;
use crate::runner::executor::{Outcome, ScriptExecutor};

/// Runs parsed test cases against an injected execution collaborator.
pub struct TestCaseRunner<'e, E: ScriptExecutor> {
    executor: &'e mut E,
}

impl<'e, E: ScriptExecutor> TestCaseRunner<'e, E> {
    pub fn new(executor: &'e mut E) -> Self {
        TestCaseRunner { executor }
    }

    /// Executes one test case, folding every outcome into a [`RunResult`].
    pub fn run(&mut self, case: &TestCase) -> RunResult {
        let mut result = RunResult::default();
        let hooks = case.hooks();

        if !self.run_setup_hooks(&hooks.before_all, &mut result) {
            self.run_hooks(&hooks.after_all, &mut result);
            return result;
        }

        match case {
            TestCase::Generic(case) => {
                for test in &case.tests {
                    self.run_generic_test(&case.hooks, test, &mut result);
                }
            }
            TestCase::Procedure(case) => {
                for test in &case.tests {
                    self.run_procedure_test(&case.procedure_name, &case.hooks, test, &mut result);
                }
            }
        }

        self.run_hooks(&hooks.after_all, &mut result);
        result
    }

    fn run_generic_test(&mut self, hooks: &CaseHooks, test: &GenericTest, result: &mut RunResult) {
        self.run_hooks(&hooks.before_each_test, result);
        self.run_hooks(&test.hooks.before, result);

        match self.executor.execute_script(&test.body) {
            Outcome::Success => {
                result.record_pass();
                for assertion in &test.assertions {
                    match self.executor.execute_script(&assertion.body) {
                        Outcome::Success => result.record_pass(),
                        Outcome::Failure(_) => result.record_failure(),
                    }
                }
            }
            // A broken body leaves nothing worth asserting over.
            Outcome::Failure(_) => result.record_error(),
        }

        self.run_hooks(&test.hooks.after, result);
        self.run_hooks(&hooks.after_each_test, result);
    }

    fn run_procedure_test(
        &mut self,
        procedure: &str,
        hooks: &CaseHooks,
        test: &ProcedureTest,
        result: &mut RunResult,
    ) {
        self.run_hooks(&hooks.before_each_test, result);

        for invocation in test.arguments.invocations() {
            self.run_hooks(&hooks.before_each_row, result);

            let outcome = self.executor.execute_procedure(procedure, &invocation.args);
            match (&invocation.expectation, outcome) {
                (RowExpectation::Success, Outcome::Success) => result.record_pass(),
                (RowExpectation::Success, Outcome::Failure(_)) => result.record_error(),
                (RowExpectation::Error(_), Outcome::Success) => result.record_failure(),
                (RowExpectation::Error(expected), Outcome::Failure(message)) => {
                    if message.contains(expected) {
                        result.record_pass();
                    } else {
                        result.record_failure();
                    }
                }
            }

            self.run_hooks(&hooks.after_each_row, result);
        }

        self.run_hooks(&hooks.after_each_test, result);
    }

    /// Runs `beforeAll` hooks. The first failure records one error and stops;
    /// the return value says whether the case may proceed.
    fn run_setup_hooks(&mut self, hooks: &[String], result: &mut RunResult) -> bool {
        for hook in hooks {
            if !self.executor.execute_hook(hook).is_success() {
                result.record_error();
                return false;
            }
        }
        true
    }

    /// Runs a non-fatal hook list: every failure is recorded and the
    /// remaining hooks still run.
    fn run_hooks(&mut self, hooks: &[String], result: &mut RunResult) {
        for hook in hooks {
            if !self.executor.execute_hook(hook).is_success() {
                result.record_error();
            }
        }
    }
}

//! Aggregate run results.
//!
//! [`RunResult`] is a value type: an all-zero identity plus an associative,
//! commutative combine. Every executed assertion, row, body, or hook folds
//! into one of the three counters, and project-level aggregation is repeated
//! combination of per-case results with no shared mutable counter.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Pass/fail/error tally over executed assertions, rows, and hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunResult {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunResult {
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn record_error(&mut self) {
        self.errored += 1;
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    /// True when nothing failed or errored.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

impl Add for RunResult {
    type Output = RunResult;

    fn add(self, other: RunResult) -> RunResult {
        RunResult {
            passed: self.passed + other.passed,
            failed: self.failed + other.failed,
            errored: self.errored + other.errored,
        }
    }
}

impl AddAssign for RunResult {
    fn add_assign(&mut self, other: RunResult) {
        *self = *self + other;
    }
}

impl Sum for RunResult {
    fn sum<I: Iterator<Item = RunResult>>(iter: I) -> RunResult {
        iter.fold(RunResult::default(), Add::add)
    }
}

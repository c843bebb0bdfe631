//! Test execution orchestration.
//!
//! The runner consumes the parsed model and an injected [`ScriptExecutor`]
//! collaborator. [`case`] sequences one test case's hooks, tests, rows, and
//! assertions; [`project`] runs a whole project directory and folds the
//! per-case results into one aggregate.

pub mod case;
pub mod executor;
pub mod project;

pub use case::TestCaseRunner;
pub use executor::{DryRunExecutor, Outcome, ScriptExecutor};
pub use project::{ProjectOutcome, ProjectRunner};

pub use crate::errors::{ErrorKind, StanzaError};
pub use crate::reporting::RunResult;

pub mod cli;
pub mod errors;
pub mod locator;
pub mod model;
pub mod parsing;
pub mod reporting;
pub mod runner;

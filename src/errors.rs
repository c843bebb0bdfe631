//! Unified error handling for the stanza engine.
//!
//! Every failure a caller can observe is a [`StanzaError`]. Grammar violations
//! are raised eagerly while a `.stt` file is being parsed and abort that file
//! only; they never produce a partially-valid model. Resource errors cover the
//! step before parsing (locating and reading a test case file). Execution-time
//! failures are not errors at all: the runner folds them into a
//! [`RunResult`](crate::reporting::RunResult) tally instead of raising.

use miette::Diagnostic;
use thiserror::Error;

/// Type-safe classification of [`StanzaError`] variants, for matching on
/// error categories without string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTestFormat,
    InvalidTestCaseFormat,
    MissingDataSection,
    MissingDescription,
    MissingBody,
    MissingAssertionDescription,
    MissingAssertionBody,
    MalformedTable,
    EmptyTable,
    InvalidTestCaseName,
    TestCaseNotFound,
    Resource,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTestFormat => "InvalidTestFormat",
            ErrorKind::InvalidTestCaseFormat => "InvalidTestCaseFormat",
            ErrorKind::MissingDataSection => "MissingDataSection",
            ErrorKind::MissingDescription => "MissingDescription",
            ErrorKind::MissingBody => "MissingBody",
            ErrorKind::MissingAssertionDescription => "MissingAssertionDescription",
            ErrorKind::MissingAssertionBody => "MissingAssertionBody",
            ErrorKind::MalformedTable => "MalformedTable",
            ErrorKind::EmptyTable => "EmptyTable",
            ErrorKind::InvalidTestCaseName => "InvalidTestCaseName",
            ErrorKind::TestCaseNotFound => "TestCaseNotFound",
            ErrorKind::Resource => "Resource",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for every stanza failure mode.
#[derive(Debug, Error, Diagnostic)]
pub enum StanzaError {
    /// A `## TEST` block did not have the shape its dialect requires.
    #[error("unable to recognise the test: {reason}")]
    #[diagnostic(code(stanza::parse::invalid_test_format))]
    InvalidTestFormat { reason: String },

    /// The file as a whole did not have the shape of a test case.
    #[error("unable to recognise the test case: {reason}")]
    #[diagnostic(
        code(stanza::parse::invalid_test_case_format),
        help("a test case starts with a `# TEST CASE` header and contains at least one `## TEST` block")
    )]
    InvalidTestCaseFormat {
        reason: String,
        #[source]
        cause: Option<Box<StanzaError>>,
    },

    /// A procedure-dialect test block has no `### DATA` marker.
    #[error("the test is missing a data section")]
    #[diagnostic(
        code(stanza::parse::missing_data_section),
        help("procedure tests carry their invocations in a `### DATA` argument table")
    )]
    MissingDataSection,

    /// A test, or the test case itself, has no description text.
    #[error("every test should have a description")]
    #[diagnostic(code(stanza::parse::missing_description))]
    MissingDescription,

    /// A generic test block contains no fenced SQL body.
    #[error("the test is missing a body")]
    #[diagnostic(
        code(stanza::parse::missing_body),
        help("the test body is the first triple-backtick fenced block after the description")
    )]
    MissingBody,

    /// A `####` assertion marker carries no name.
    #[error("every assertion should have a description")]
    #[diagnostic(code(stanza::parse::missing_assertion_description))]
    MissingAssertionDescription,

    /// An assertion subsection contains no fenced SQL body.
    #[error("assertion '{assertion}' is missing a body")]
    #[diagnostic(code(stanza::parse::missing_assertion_body))]
    MissingAssertionBody { assertion: String },

    /// An argument table's separator row is absent or broken, or a value row
    /// does not line up with the headers.
    #[error("malformed argument table near '{line}'")]
    #[diagnostic(
        code(stanza::parse::malformed_table),
        help("a table is a `|`-delimited header row, a `|---|`-style separator row, and value rows")
    )]
    MalformedTable { line: String },

    /// An argument table has a valid header and separator but no value rows.
    #[error("the argument table has no value rows")]
    #[diagnostic(code(stanza::parse::empty_table))]
    EmptyTable,

    /// A path handed in as a test case does not carry the `.stt` extension.
    #[error("'{path}' is not a valid test case name")]
    #[diagnostic(
        code(stanza::resource::invalid_test_case_name),
        help("test case files carry the `.stt` extension")
    )]
    InvalidTestCaseName { path: String },

    /// A test case path does not resolve to a file.
    #[error("test case '{path}' not found")]
    #[diagnostic(code(stanza::resource::test_case_not_found))]
    TestCaseNotFound { path: String },

    /// The filesystem refused a read.
    #[error("unable to read '{path}'")]
    #[diagnostic(code(stanza::resource::unreadable))]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StanzaError {
    /// Returns the type-safe classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StanzaError::InvalidTestFormat { .. } => ErrorKind::InvalidTestFormat,
            StanzaError::InvalidTestCaseFormat { .. } => ErrorKind::InvalidTestCaseFormat,
            StanzaError::MissingDataSection => ErrorKind::MissingDataSection,
            StanzaError::MissingDescription => ErrorKind::MissingDescription,
            StanzaError::MissingBody => ErrorKind::MissingBody,
            StanzaError::MissingAssertionDescription => ErrorKind::MissingAssertionDescription,
            StanzaError::MissingAssertionBody { .. } => ErrorKind::MissingAssertionBody,
            StanzaError::MalformedTable { .. } => ErrorKind::MalformedTable,
            StanzaError::EmptyTable => ErrorKind::EmptyTable,
            StanzaError::InvalidTestCaseName { .. } => ErrorKind::InvalidTestCaseName,
            StanzaError::TestCaseNotFound { .. } => ErrorKind::TestCaseNotFound,
            StanzaError::Resource { .. } => ErrorKind::Resource,
        }
    }
}

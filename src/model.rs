//! The parsed test-case model.
//!
//! A `.stt` file parses into exactly one [`TestCase`], tagged by dialect:
//! procedure test cases drive a database-resident procedure from an argument
//! table, generic test cases carry free-form SQL bodies with named assertions.
//! Models are built once by the parsers in [`crate::parsing`] and are
//! read-only from then on.

use crate::errors::StanzaError;

/// Table-cell sentinel for an explicit null argument.
pub const NULL_SENTINEL: &str = "__NULL__";

/// Reserved argument-table header carrying the expected error message of each
/// row. Never passed to the procedure as an argument.
pub const ERROR_HEADER: &str = "=ERROR=";

/// The six case-level fixture hook lists. A hook name is an opaque reference
/// to an externally resolvable routine; it is handed to the execution
/// collaborator verbatim. Each list defaults to empty when its section is
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseHooks {
    pub before_all: Vec<String>,
    pub after_all: Vec<String>,
    pub before_each_test: Vec<String>,
    pub after_each_test: Vec<String>,
    pub before_each_row: Vec<String>,
    pub after_each_row: Vec<String>,
}

impl CaseHooks {
    pub fn is_empty(&self) -> bool {
        self.before_all.is_empty()
            && self.after_all.is_empty()
            && self.before_each_test.is_empty()
            && self.after_each_test.is_empty()
            && self.before_each_row.is_empty()
            && self.after_each_row.is_empty()
    }
}

/// The two hook lists a generic test may carry itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestHooks {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// A named SQL check run after a generic test's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub description: String,
    pub body: String,
}

/// One free-form SQL test within a generic test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTest {
    pub description: String,
    pub body: String,
    pub hooks: TestHooks,
    pub assertions: Vec<Assertion>,
}

/// One argument-table-driven test within a procedure test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureTest {
    pub description: String,
    pub arguments: ArgumentTable,
}

/// A single procedure argument resolved from a table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Pass the cell text through as-is.
    Literal(String),
    /// The `__NULL__` sentinel: bind an explicit null.
    Null,
    /// An empty cell: omit the argument so its default applies.
    Omitted,
}

impl ArgValue {
    pub fn from_cell(cell: &str) -> Self {
        match cell {
            NULL_SENTINEL => ArgValue::Null,
            "" => ArgValue::Omitted,
            other => ArgValue::Literal(other.to_string()),
        }
    }
}

/// What a row's `=ERROR=` cell demands of the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowExpectation {
    /// Empty or absent `=ERROR=` cell: the invocation must succeed.
    Success,
    /// Non-empty cell: the invocation must fail with a matching message.
    Error(String),
}

/// One row of an argument table, resolved for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowInvocation {
    pub args: Vec<ArgValue>,
    pub expectation: RowExpectation,
}

/// An ordered argument table: headers plus positional value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ArgumentTable {
    /// Builds a table, enforcing that every row has exactly one cell per
    /// header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, StanzaError> {
        for row in &rows {
            if row.len() != headers.len() {
                return Err(StanzaError::MalformedTable {
                    line: row.join(" | "),
                });
            }
        }
        Ok(ArgumentTable { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the reserved `=ERROR=` column, if present.
    pub fn error_column(&self) -> Option<usize> {
        self.headers.iter().position(|h| h == ERROR_HEADER)
    }

    /// Resolves every row into procedure arguments plus its expectation,
    /// applying the cell-value policy: `__NULL__` binds null, an empty cell
    /// omits the argument, anything else passes through literally. The
    /// `=ERROR=` cell is consumed as the expectation and never becomes an
    /// argument.
    pub fn invocations(&self) -> Vec<RowInvocation> {
        let error_column = self.error_column();
        self.rows
            .iter()
            .map(|row| {
                let args = row
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| Some(*i) != error_column)
                    .map(|(_, cell)| ArgValue::from_cell(cell))
                    .collect();
                let expectation = match error_column.map(|i| row[i].as_str()) {
                    Some("") | None => RowExpectation::Success,
                    Some(message) => RowExpectation::Error(message.to_string()),
                };
                RowInvocation { args, expectation }
            })
            .collect()
    }
}

/// A procedure-dialect test case: every test invokes the named procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureTestCase {
    pub description: String,
    pub procedure_name: String,
    pub hooks: CaseHooks,
    pub tests: Vec<ProcedureTest>,
}

/// A generic-dialect test case: free-form SQL tests with assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTestCase {
    pub description: String,
    pub hooks: CaseHooks,
    pub tests: Vec<GenericTest>,
}

/// A parsed `.stt` file, tagged by dialect. The runner dispatches on this tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCase {
    Procedure(ProcedureTestCase),
    Generic(GenericTestCase),
}

impl TestCase {
    pub fn description(&self) -> &str {
        match self {
            TestCase::Procedure(case) => &case.description,
            TestCase::Generic(case) => &case.description,
        }
    }

    pub fn hooks(&self) -> &CaseHooks {
        match self {
            TestCase::Procedure(case) => &case.hooks,
            TestCase::Generic(case) => &case.hooks,
        }
    }

    pub fn test_count(&self) -> usize {
        match self {
            TestCase::Procedure(case) => case.tests.len(),
            TestCase::Generic(case) => case.tests.len(),
        }
    }
}

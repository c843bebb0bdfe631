//! Procedure-dialect test block parsing.
//!
//! A procedure `## TEST` block is a description followed by a `### DATA`
//! argument table. A marker with no well-formed table behind it (header row,
//! separator row, at least one value row) is the same `MissingDataSection` as
//! no marker at all. The table's cell policy (null sentinel, omitted
//! arguments, the `=ERROR=` column) is applied later by the runner; the
//! parser only builds the table.

use crate::errors::StanzaError;
use crate::model::{ArgumentTable, ProcedureTest};
use crate::parsing::section::{
    before_first_marker, split_at_marker, strip_test_header, DATA_MARKER,
};
use crate::parsing::table::parse_table;

/// Parses one `## TEST` block in the procedure dialect.
pub fn parse_procedure_test(block: &str) -> Result<ProcedureTest, StanzaError> {
    let rest = strip_test_header(block).ok_or_else(|| StanzaError::InvalidTestFormat {
        reason: "a test block must start with a `## TEST` header".to_string(),
    })?;

    let (head, data) =
        split_at_marker(rest, DATA_MARKER).ok_or(StanzaError::MissingDataSection)?;

    let description = before_first_marker(head).trim();
    if description.is_empty() {
        return Err(StanzaError::MissingDescription);
    }

    let (headers, rows) = parse_table(data).map_err(|_| StanzaError::MissingDataSection)?;
    let arguments = ArgumentTable::new(headers, rows)?;

    Ok(ProcedureTest {
        description: description.to_string(),
        arguments,
    })
}

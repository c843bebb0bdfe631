//! Whole-file test case parsing and dialect dispatch.
//!
//! A `.stt` file opens with a `# TEST CASE` header line. A procedure name on
//! that line selects the procedure dialect; a bare header selects the generic
//! dialect. The text before the first `## TEST` block carries the overall
//! description and the case-level hook sections; everything after is split
//! into test blocks and handed to the dialect's block parser.

use crate::errors::{ErrorKind, StanzaError};
use crate::model::{GenericTestCase, ProcedureTestCase, TestCase};
use crate::parsing::generic::parse_generic_test;
use crate::parsing::hooks::parse_case_hooks;
use crate::parsing::procedure::parse_procedure_test;
use crate::parsing::section::{before_first_marker, split_blocks, TEST_MARKER};

/// Marker opening every test case file.
pub const CASE_MARKER: &str = "# TEST CASE";

/// Parses a whole `.stt` file into its dialect's test case model.
pub fn parse_test_case(text: &str) -> Result<TestCase, StanzaError> {
    let (procedure_name, rest) = parse_case_header(text)?;

    let (preamble, blocks) = split_blocks(rest, TEST_MARKER);
    if blocks.is_empty() {
        return Err(StanzaError::InvalidTestCaseFormat {
            reason: "the test case contains no `## TEST` blocks".to_string(),
            cause: None,
        });
    }

    let description = before_first_marker(preamble).trim();
    if description.is_empty() {
        return Err(StanzaError::MissingDescription);
    }
    let hooks = parse_case_hooks(preamble);

    match procedure_name {
        Some(procedure_name) => {
            let tests = blocks
                .into_iter()
                .map(parse_procedure_test)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TestCase::Procedure(ProcedureTestCase {
                description: description.to_string(),
                procedure_name,
                hooks,
                tests,
            }))
        }
        None => {
            let tests = blocks
                .into_iter()
                .map(|block| parse_generic_test(block).map_err(reject_dialect_mismatch))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TestCase::Generic(GenericTestCase {
                description: description.to_string(),
                hooks,
                tests,
            }))
        }
    }
}

/// A block-level shape mismatch (a `### DATA` section in a generic file)
/// surfaces as a case-level format error, keeping the block error as cause.
/// Every other block error stays as specific as the block parser made it.
fn reject_dialect_mismatch(error: StanzaError) -> StanzaError {
    match error.kind() {
        ErrorKind::InvalidTestFormat => StanzaError::InvalidTestCaseFormat {
            reason: "a generic test case cannot contain a data section".to_string(),
            cause: Some(Box::new(error)),
        },
        _ => error,
    }
}

/// Reads the `# TEST CASE [NAME]` header line. Returns the optional procedure
/// name and the text after the header line. A bare `# TEST CASE` header is
/// the generic dialect; a header that starts a name but leaves it blank
/// (trailing whitespace only) is invalid rather than silently generic.
fn parse_case_header(text: &str) -> Result<(Option<String>, &str), StanzaError> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        let content = line.trim_start().trim_end_matches(['\n', '\r']);
        let Some(remainder) = content.strip_prefix(CASE_MARKER) else {
            return Err(StanzaError::InvalidTestCaseFormat {
                reason: format!("expected a `{CASE_MARKER}` header, found '{content}'"),
                cause: None,
            });
        };
        if !remainder.is_empty() && !remainder.starts_with(char::is_whitespace) {
            return Err(StanzaError::InvalidTestCaseFormat {
                reason: format!("expected a `{CASE_MARKER}` header, found '{content}'"),
                cause: None,
            });
        }
        let name = remainder.trim();
        if name.is_empty() && !remainder.is_empty() {
            return Err(StanzaError::InvalidTestCaseFormat {
                reason: "the test case header starts a procedure name but leaves it blank"
                    .to_string(),
                cause: None,
            });
        }
        let rest = &text[start + line.len()..];
        return Ok((
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
            rest,
        ));
    }
    Err(StanzaError::InvalidTestCaseFormat {
        reason: "the file is empty".to_string(),
        cause: None,
    })
}

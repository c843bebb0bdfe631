//! Generic-dialect test block parsing.
//!
//! A generic `## TEST` block is a description, a fenced SQL body, optional
//! `### BEFORE`/`### AFTER` hook lists, and an optional `### ASSERTIONS`
//! section of named `####` checks. Validation order matters and is observable
//! through the error taxonomy: the header first, then the body fence, then
//! the description, then the exclusion of a `### DATA` section.

use crate::errors::StanzaError;
use crate::model::{Assertion, GenericTest};
use crate::parsing::hooks::parse_test_hooks;
use crate::parsing::section::{
    before_first_marker, first_fenced_block, split_at_marker, strip_test_header,
    ASSERTIONS_MARKER, DATA_MARKER,
};

/// Parses one `## TEST` block in the generic dialect.
pub fn parse_generic_test(block: &str) -> Result<GenericTest, StanzaError> {
    let rest = strip_test_header(block).ok_or_else(|| StanzaError::InvalidTestFormat {
        reason: "a test block must start with a `## TEST` header".to_string(),
    })?;

    // Assertion subsections carry fences of their own; slice them off before
    // looking for the body.
    let (head, assertions_region) = match split_at_marker(rest, ASSERTIONS_MARKER) {
        Some((head, region)) => (head, Some(region)),
        None => (rest, None),
    };

    let fence = first_fenced_block(head).ok_or(StanzaError::MissingBody)?;
    let body = fence.body.trim();
    if body.is_empty() {
        return Err(StanzaError::MissingBody);
    }

    let description = before_first_marker(fence.lead).trim();
    if description.is_empty() {
        return Err(StanzaError::MissingDescription);
    }

    if split_at_marker(rest, DATA_MARKER).is_some() {
        return Err(StanzaError::InvalidTestFormat {
            reason: "a generic test cannot contain a data section".to_string(),
        });
    }

    let assertions = match assertions_region {
        Some(region) => parse_assertions(region)?,
        None => Vec::new(),
    };

    Ok(GenericTest {
        description: description.to_string(),
        body: body.to_string(),
        hooks: parse_test_hooks(head),
        assertions,
    })
}

/// Parses the `### ASSERTIONS` region: each `####` line names one assertion,
/// and the subsection's first fenced block is its body.
fn parse_assertions(region: &str) -> Result<Vec<Assertion>, StanzaError> {
    let mut assertions = Vec::new();
    for subsection in assertion_subsections(region) {
        let (name_line, body_text) = subsection;
        let description = name_line.trim();
        if description.is_empty() {
            return Err(StanzaError::MissingAssertionDescription);
        }
        let fence = first_fenced_block(body_text).ok_or_else(|| {
            StanzaError::MissingAssertionBody {
                assertion: description.to_string(),
            }
        })?;
        let body = fence.body.trim();
        if body.is_empty() {
            return Err(StanzaError::MissingAssertionBody {
                assertion: description.to_string(),
            });
        }
        assertions.push(Assertion {
            description: description.to_string(),
            body: body.to_string(),
        });
    }
    Ok(assertions)
}

/// Splits the assertions region into `(marker remainder, subsection text)`
/// pairs, one per `####` marker line.
fn assertion_subsections(region: &str) -> Vec<(&str, &str)> {
    let mut markers: Vec<(usize, usize, &str)> = Vec::new();
    let mut offset = 0;
    for line in region.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let trimmed = line.trim_start();
        if let Some(name) = trimmed.strip_prefix("####") {
            // Guard against deeper heading levels bleeding in.
            if !name.starts_with('#') {
                markers.push((start + (line.len() - trimmed.len()), offset, name));
            }
        }
    }
    let ends: Vec<usize> = markers
        .iter()
        .skip(1)
        .map(|(start, _, _)| *start)
        .chain(std::iter::once(region.len()))
        .collect();
    markers
        .into_iter()
        .zip(ends)
        .map(|((_, line_end, name), end)| (name, &region[line_end.min(end)..end]))
        .collect()
}

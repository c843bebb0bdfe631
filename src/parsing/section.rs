//! Section grammar utilities shared by every `.stt` parser.
//!
//! The `.stt` grammar is line- and marker-oriented, so everything here is an
//! explicit scan over line boundaries: marker detection, section slicing, and
//! fenced-code-block extraction. Markers are matched case-sensitively against
//! the whitespace-trimmed line. Absence of a marker is reported as `None`;
//! the dialect parsers decide whether that is an error.

/// Marker opening a test block.
pub const TEST_MARKER: &str = "## TEST";

/// Marker opening a procedure test's argument table.
pub const DATA_MARKER: &str = "### DATA";

/// Marker opening a generic test's assertion list.
pub const ASSERTIONS_MARKER: &str = "### ASSERTIONS";

/// A fenced code block plus the text that preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence<'a> {
    /// Everything before the opening fence line.
    pub lead: &'a str,
    /// The block's inner text, without the trailing newline.
    pub body: &'a str,
}

/// Iterates lines together with their byte ranges in `text`.
fn line_ranges(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, offset, line)
    })
}

fn marker_level(line: &str) -> usize {
    line.trim_start().chars().take_while(|c| *c == '#').count()
}

fn line_is_marker(line: &str, marker: &str) -> bool {
    line.trim() == marker
}

/// True if `text`, ignoring leading whitespace, opens with a `## TEST` line.
pub fn starts_with_test_header(text: &str) -> bool {
    strip_test_header(text).is_some()
}

/// Removes the leading `## TEST` line, returning the rest of the block.
pub fn strip_test_header(text: &str) -> Option<&str> {
    for (_, end, line) in line_ranges(text) {
        if line.trim().is_empty() {
            continue;
        }
        if line_is_marker(line, TEST_MARKER) {
            return Some(&text[end..]);
        }
        return None;
    }
    None
}

/// Splits `text` at the first line equal to `marker`, returning the text
/// before and after that line. The marker line itself is dropped.
pub fn split_at_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    line_ranges(text)
        .find(|(_, _, line)| line_is_marker(line, marker))
        .map(|(start, end, _)| (&text[..start], &text[end..]))
}

/// Returns the body of the section opened by `marker`: everything after the
/// marker line up to the next marker line of the same or a shallower heading
/// level. A `####` line does not terminate a `###` section.
pub fn section_region<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let level = marker_level(marker);
    let (_, rest) = split_at_marker(text, marker)?;
    for (start, _, line) in line_ranges(rest) {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') && marker_level(trimmed) <= level {
            return Some(&rest[..start]);
        }
    }
    Some(rest)
}

/// Returns the text preceding the first marker line of any level.
pub fn before_first_marker(text: &str) -> &str {
    for (start, _, line) in line_ranges(text) {
        if line.trim_start().starts_with('#') {
            return &text[..start];
        }
    }
    text
}

/// Extracts the first fenced code block. The opening fence may carry an info
/// string (```sql); the closing fence must be bare backticks. An unclosed
/// fence counts as no block.
pub fn first_fenced_block(text: &str) -> Option<Fence<'_>> {
    let mut open: Option<(usize, usize)> = None; // (lead end, body start)
    for (start, end, line) in line_ranges(text) {
        let trimmed = line.trim();
        match open {
            None if trimmed.starts_with("```") => open = Some((start, end)),
            Some((lead_end, body_start)) if trimmed == "```" => {
                let inner = &text[body_start..start];
                let body = inner.strip_suffix('\n').unwrap_or(inner);
                return Some(Fence {
                    lead: &text[..lead_end],
                    body,
                });
            }
            _ => {}
        }
    }
    None
}

/// Splits `text` into the preamble before the first `marker` line and the
/// sequence of blocks each opened by (and including) a `marker` line.
pub fn split_blocks<'a>(text: &'a str, marker: &str) -> (&'a str, Vec<&'a str>) {
    let mut starts: Vec<usize> = line_ranges(text)
        .filter(|(_, _, line)| line_is_marker(line, marker))
        .map(|(start, _, _)| start)
        .collect();
    let Some(&first) = starts.first() else {
        return (text, Vec::new());
    };
    starts.push(text.len());
    let blocks = starts
        .windows(2)
        .map(|pair| &text[pair[0]..pair[1]])
        .collect();
    (&text[..first], blocks)
}

//! Pipe-delimited markdown table parsing.
//!
//! A table is a header row, a separator row of `[:-]+` groups, and one or
//! more value rows. Cells are split on unescaped `|` and trimmed; `\|` yields
//! a literal pipe inside a cell.

use crate::errors::StanzaError;

/// Parsed table text: ordered headers plus ordered rows of cell values.
pub type ParsedTable = (Vec<String>, Vec<Vec<String>>);

/// Parses raw table text. The first non-blank line is the header row, the
/// second must be a valid separator row (`MalformedTable` otherwise), and
/// every following non-blank line is a value row (`EmptyTable` when there are
/// none).
pub fn parse_table(text: &str) -> Result<ParsedTable, StanzaError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or_else(|| StanzaError::MalformedTable {
        line: String::new(),
    })?;
    let separator_line = lines.next().ok_or_else(|| StanzaError::MalformedTable {
        line: header_line.trim().to_string(),
    })?;
    if !is_separator_row(separator_line) {
        return Err(StanzaError::MalformedTable {
            line: separator_line.trim().to_string(),
        });
    }

    let headers = split_cells(header_line);
    let rows: Vec<Vec<String>> = lines.map(split_cells).collect();
    if rows.is_empty() {
        return Err(StanzaError::EmptyTable);
    }
    Ok((headers, rows))
}

/// A separator row is one-or-more groups of `[:-]+` delimited by `|`.
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'));
    let Some(inner) = inner else {
        return false;
    };
    let mut groups = 0;
    for group in inner.split('|') {
        let group = group.trim();
        if group.is_empty() || !group.chars().all(|c| c == ':' || c == '-') {
            return false;
        }
        groups += 1;
    }
    groups > 0
}

/// Splits a row on unescaped `|`, trimming each cell. The empty segments
/// produced by the outer pipes are discarded; interior empty cells survive.
fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => {
                cells.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    cells.push(current);

    if trimmed.starts_with('|') && !cells.is_empty() {
        cells.remove(0);
    }
    if trimmed.ends_with('|') && !trimmed.ends_with("\\|") && !cells.is_empty() {
        cells.pop();
    }
    cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn parses_headers_and_rows_in_order() {
        let (headers, rows) = parse_table(
            "| PARAM1 | PARAM2 | =ERROR= |\n\
             |--------|--------|---------|\n\
             | FOO    | 12     |         |\n\
             | __NULL__ | 0    |         |\n",
        )
        .unwrap();
        assert_eq!(headers, vec!["PARAM1", "PARAM2", "=ERROR="]);
        assert_eq!(rows[0], vec!["FOO", "12", ""]);
        assert_eq!(rows[1], vec!["__NULL__", "0", ""]);
    }

    #[test]
    fn separator_accepts_alignment_colons() {
        assert!(is_separator_row("| :--- | ---: |"));
        assert!(is_separator_row("|-|-|"));
        assert!(!is_separator_row("| foo | --- |"));
        assert!(!is_separator_row("no pipes"));
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = parse_table("| A |\n| 1 |\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedTable);
    }

    #[test]
    fn no_value_rows_is_empty() {
        let err = parse_table("| A |\n|---|\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyTable);
    }

    #[test]
    fn escaped_pipe_stays_in_the_cell() {
        let (_, rows) = parse_table("| A |\n|---|\n| x \\| y |\n").unwrap();
        assert_eq!(rows[0], vec!["x | y"]);
    }

    #[test]
    fn blank_lines_between_rows_are_skipped() {
        let (_, rows) = parse_table("| A |\n|---|\n\n| 1 |\n\n| 2 |\n").unwrap();
        assert_eq!(rows.len(), 2);
    }
}

//! Fixture hook section parsing.
//!
//! Case-level text carries up to six hook sections, a generic test block up
//! to two. Each section is a markdown list of hook names, one per `- ` item.
//! Missing or empty sections yield empty lists, never errors; only the order
//! of items inside one section is meaningful.

use crate::model::{CaseHooks, TestHooks};
use crate::parsing::section::section_region;

pub const BEFORE_ALL_MARKER: &str = "### BEFORE ALL";
pub const AFTER_ALL_MARKER: &str = "### AFTER ALL";
pub const BEFORE_EACH_TEST_MARKER: &str = "### BEFORE EACH TEST";
pub const AFTER_EACH_TEST_MARKER: &str = "### AFTER EACH TEST";
pub const BEFORE_EACH_ROW_MARKER: &str = "### BEFORE EACH ROW";
pub const AFTER_EACH_ROW_MARKER: &str = "### AFTER EACH ROW";

pub const TEST_BEFORE_MARKER: &str = "### BEFORE";
pub const TEST_AFTER_MARKER: &str = "### AFTER";

/// Extracts the six case-level hook lists from the text preceding the first
/// test block. Section order in the source is irrelevant.
pub fn parse_case_hooks(text: &str) -> CaseHooks {
    CaseHooks {
        before_all: hook_names(text, BEFORE_ALL_MARKER),
        after_all: hook_names(text, AFTER_ALL_MARKER),
        before_each_test: hook_names(text, BEFORE_EACH_TEST_MARKER),
        after_each_test: hook_names(text, AFTER_EACH_TEST_MARKER),
        before_each_row: hook_names(text, BEFORE_EACH_ROW_MARKER),
        after_each_row: hook_names(text, AFTER_EACH_ROW_MARKER),
    }
}

/// Extracts a generic test's own before/after hook lists from its block.
pub fn parse_test_hooks(text: &str) -> TestHooks {
    TestHooks {
        before: hook_names(text, TEST_BEFORE_MARKER),
        after: hook_names(text, TEST_AFTER_MARKER),
    }
}

fn hook_names(text: &str, marker: &str) -> Vec<String> {
    let Some(region) = section_region(text, marker) else {
        return Vec::new();
    };
    region
        .lines()
        .filter_map(|line| line.trim().strip_prefix('-'))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

//! Resolution of a single `.stt` path into raw test case text.
//!
//! This runs before any parsing: a path with the wrong extension or one that
//! does not resolve to a file short-circuits with a resource error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StanzaError;

/// A located test case: its path and raw text, ready for parsing.
#[derive(Debug, Clone)]
pub struct TestCaseResource {
    pub path: PathBuf,
    pub content: String,
}

/// Resolves one test case path. The extension check is case-insensitive.
pub fn locate_test_case(path: &Path) -> Result<TestCaseResource, StanzaError> {
    let valid_name = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stt"));
    if !valid_name {
        return Err(StanzaError::InvalidTestCaseName {
            path: path.display().to_string(),
        });
    }
    if !path.is_file() {
        return Err(StanzaError::TestCaseNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| StanzaError::Resource {
        path: path.display().to_string(),
        source,
    })?;
    Ok(TestCaseResource {
        path: path.to_path_buf(),
        content,
    })
}

//! Input integrity errors

use std::io;
use thiserror::Error;

/// Errors raised while reading graph, clustering and seed-group files.
///
/// Line numbers are 1-based and refer to the physical line in the file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A line did not have the expected number of tab-separated fields
    #[error("{path}:{line}: expected {expected} tab-separated fields, found {found}")]
    MalformedLine {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A weight was not a finite, non-negative number
    #[error("{path}:{line}: invalid edge weight '{value}'")]
    InvalidWeight {
        path: String,
        line: usize,
        value: String,
    },

    /// The adjacency matrix was not a square numeric matrix
    #[error("{path}: invalid adjacency matrix: {reason}")]
    InvalidMatrix { path: String, reason: String },

    /// The node name file does not match the matrix order
    #[error("{path}: expected {expected} node names, found {found}")]
    NodeCountMismatch {
        path: String,
        expected: usize,
        found: usize,
    },
}

impl InputError {
    pub(crate) fn io(path: &str, source: io::Error) -> Self {
        InputError::Io {
            path: path.to_string(),
            source,
        }
    }
}

//! Error types for hook insertion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for hook insertion operations.
pub type ConfResult<T> = Result<T, ConfError>;

/// Errors that can occur while editing a boot configuration file.
#[derive(Debug, Error)]
pub enum ConfError {
    /// No uncommented `HOOKS=(...)` line was found in the input.
    #[error("no HOOKS=(...) line found in {path} - did you point at the right file?")]
    MissingHooksLine { path: PathBuf },

    /// The hook list does not contain the anchor token.
    #[error("anchor hook '{anchor}' not present in the HOOKS line of {path}")]
    AnchorNotFound { anchor: String, path: PathBuf },

    /// The input contains a byte outside the ASCII range.
    #[error("{path} is not ASCII (first non-ASCII byte at offset {offset})")]
    NotAscii { path: PathBuf, offset: usize },

    /// Failed to read the input file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy the existing output file to its backup path.
    #[error("failed to back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfError {
    /// Create a missing-HOOKS-line error.
    pub fn missing_hooks_line(path: impl Into<PathBuf>) -> Self {
        Self::MissingHooksLine { path: path.into() }
    }

    /// Create an anchor-not-found error.
    pub fn anchor_not_found(anchor: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::AnchorNotFound {
            anchor: anchor.into(),
            path: path.into(),
        }
    }

    /// Check whether this error indicates a malformed configuration file,
    /// as opposed to an I/O failure.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingHooksLine { .. } | Self::AnchorNotFound { .. }
        )
    }
}

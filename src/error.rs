//! Unified error types for ddpack.
//!
//! This module provides a single [`DdpError`] enum covering every failure the
//! library can hit internally. The two public component boundaries, the
//! archive validator and the timestamp normalizer, never hand these errors to
//! their callers: they fold them into a
//! [`ValidationStatus`](crate::validate::ValidationStatus) or the empty-string
//! sentinel. `DdpError` surfaces only from the lower-level building blocks
//! (archive openers, report writers, the CLI).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for ddpack operations.
///
/// # Example
///
/// ```rust
/// use ddpack::error::Result;
///
/// fn list_entries() -> Result<Vec<String>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, DdpError>;

/// The error type for all ddpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DdpError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The uploaded file doesn't exist
    /// - Permission denied
    /// - Writing a report to disk failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be read as a zip container.
    #[error("Bad zip file{}: {source}", path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    BadArchive {
        /// The underlying zip error
        #[source]
        source: zip::result::ZipError,
        /// The archive path, if available
        path: Option<PathBuf>,
    },

    /// A single archive entry could not be read.
    ///
    /// The validator skips such entries and keeps scanning.
    #[error("Unreadable archive entry #{index}: {source}")]
    Entry {
        /// Position of the entry in the central directory
        index: usize,
        /// The underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// A platform name did not match any supported platform.
    #[error("Unknown platform: '{input}'. Expected one of: {expected}")]
    UnknownPlatform {
        /// The name that was provided
        input: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// A format name (report format, file format) was not recognized.
    #[error("Invalid {kind}: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error while assembling text output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for DdpError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DdpError::Utf8 {
            context: "report rendering".to_string(),
            source: err,
        }
    }
}

impl From<zip::result::ZipError> for DdpError {
    fn from(err: zip::result::ZipError) -> Self {
        DdpError::BadArchive {
            source: err,
            path: None,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl DdpError {
    /// Creates a bad-archive error for the given path.
    pub fn bad_archive(source: zip::result::ZipError, path: impl Into<PathBuf>) -> Self {
        DdpError::BadArchive {
            source,
            path: Some(path.into()),
        }
    }

    /// Creates an unreadable-entry error.
    pub fn entry(index: usize, source: zip::result::ZipError) -> Self {
        DdpError::Entry { index, source }
    }

    /// Creates an unknown-platform error.
    pub fn unknown_platform(input: impl Into<String>, expected: &[&str]) -> Self {
        DdpError::UnknownPlatform {
            input: input.into(),
            expected: expected.join(", "),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        DdpError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    /// Returns true if this error means the file is not a usable zip container.
    pub fn is_bad_archive(&self) -> bool {
        matches!(self, DdpError::BadArchive { .. } | DdpError::Io(_))
    }

    /// Returns true if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, DdpError::Io(_))
    }
}

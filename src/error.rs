//! Error handling for reading documents

use crate::metadata::date;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reading documents
///
/// Broken YAML headers are not errors: they are logged and the document is read with
/// empty metadata. Errors are reserved for I/O and for fields that can't be normalized.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed (file reading, directory traversal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contains invalid UTF-8 encoding
    #[error("File is not encoded in UTF-8")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// A `date` or `modified` field could not be parsed
    ///
    /// # Example
    /// ```text
    /// ---
    /// date: yesterday
    /// ---
    /// ```
    #[error("Invalid metadata: {0}")]
    Date(#[from] date::Error),

    /// Settings file is not valid YAML
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_yml::Error),

    /// Expected a directory path
    #[error("Path: `{0}` is not a directory")]
    IsNotDir(PathBuf),

    /// No reader is registered for the file extension
    #[error("No reader for `{0}`")]
    UnsupportedExtension(PathBuf),
}

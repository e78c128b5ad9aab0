//! Error types for parliament-datagen operations.

use thiserror::Error;

/// Errors that can occur while generating the permissions data file.
///
/// Nothing here is retried or recovered: every variant propagates to the
/// binary, which reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum DatagenError {
    /// The scraped document could not be deserialized into the permission
    /// model. For an absent required field, `serde_json` names the field in
    /// the message (e.g. "missing field `access_level`").
    #[error("Invalid permission document: {0}")]
    Input(#[from] serde_json::Error),

    /// Reading the input document or writing the output file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The `gofmt` binary could not be spawned on the generated file.
    #[error("Failed to invoke gofmt: {0}")]
    Formatter(#[source] std::io::Error),
}

impl DatagenError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type DatagenResult<T> = Result<T, DatagenError>;

//! Error types for marble-ring.

use thiserror::Error;

/// Result type alias for marble-ring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading records, packing or writing scenes.
///
/// Running out of space is never an error: a record that fits no marble
/// still produces a complete, empty scene block.
#[derive(Debug, Error)]
pub enum Error {
    /// Line has a discriminator but no numeric payload.
    #[error("record has no payload after the discriminator")]
    MissingPayload,

    /// Payload has the wrong number of fields.
    #[error("expected {expected} payload fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A payload field failed to parse.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Parameters parsed but describe an impossible configuration.
    #[error("invalid packing configuration: {0}")]
    InvalidConfig(String),

    /// A record-level error with its 1-based line number.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// Settings file could not be read or parsed.
    #[error("settings error: {0}")]
    Settings(String),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON sink serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach a line number to a record error
    pub fn at_line(self, line: usize) -> Self {
        Error::Record {
            line,
            source: Box::new(self),
        }
    }
}

use thiserror::Error;

/// Errors raised while decoding source entities or planning their migration.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Source entity is not a user, admin or conversation.
    #[error("unsupported source entity kind '{0}'")]
    UnsupportedEntityKind(String),
    /// A field the import payload needs is absent from the source record.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// POSIX timestamp cannot be represented as a calendar date.
    #[error("timestamp {0} is out of range")]
    Timestamp(i64),
    /// Failed to render a timestamp.
    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),
    /// Input document is not valid entity JSON.
    #[error("invalid entity JSON: {0}")]
    Json(#[from] serde_json::Error),
}

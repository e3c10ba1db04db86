//! Load-time error type.

/// Error returned when a sidebar payload fails to load.
///
/// All variants are unrecoverable: without a valid sidebar tree there is
/// no meaningful partial state to operate on.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Payload bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Input is neither a bare JSON document nor a module chunk with a
    /// `JSON.parse` payload.
    #[error("no JSON payload found in module wrapper")]
    PayloadNotFound,
    /// The payload string literal in the module wrapper never closes.
    #[error("unterminated payload string in module wrapper")]
    UnterminatedPayload,
    /// The payload string literal contains an invalid escape sequence.
    #[error("invalid escape sequence in payload string")]
    InvalidEscape,
    /// Payload failed JSON parsing or shape validation (missing `type`
    /// discriminator, `label`, `href`, or `items` fields).
    #[error("malformed sidebar data: {0}")]
    MalformedData(#[from] serde_json::Error),
    /// A sidebar's top-level array contained a link; the tree root is a
    /// sequence of categories.
    #[error("sidebar {sidebar:?} has a non-category root item")]
    RootNotCategory {
        /// Name of the offending sidebar.
        sidebar: String,
    },
}

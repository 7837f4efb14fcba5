//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur during protocol operations.
///
/// All of these are recoverable per-record conditions: the caller logs
/// them and keeps reading. Nothing here tears down a connection.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Record exceeds the maximum allowed size.
    #[error("record too large: {size} bytes (max: {max})")]
    OversizedRecord { size: usize, max: usize },

    /// Record is not well-formed JSON.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    /// Record is well-formed JSON but its top-level value is not an object.
    #[error("malformed message: top-level value is not an object")]
    NotAnObject,
}

//! Client error types.

use std::fmt;

use wirechat_protocol::ProtocolError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
///
/// These are transport-level failures, terminal for the connection.
/// Per-record protocol problems are handled inside the session (logged
/// and skipped) and never surface here.
#[derive(Debug)]
pub enum ClientError {
    /// Connection to the server failed.
    Connection(String),
    /// IO error.
    Io(std::io::Error),
    /// Protocol/encoding error.
    Protocol(String),
    /// Operation timed out.
    Timeout(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "connection error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Protocol(msg) => write!(f, "protocol error: {}", msg),
            Self::Timeout(msg) => write!(f, "timeout: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err.to_string())
    }
}

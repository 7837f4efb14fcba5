//! Encoding and decoding of individual records.
//!
//! A record handed in by the framer is decoded into a [`ServerMessage`];
//! outgoing [`ClientCommand`]s are encoded to compact JSON with a single
//! trailing newline, ready for the transport.

use serde_json::Value;

use crate::MAX_RECORD_SIZE;
use crate::error::{ProtocolError, ProtocolResult};
use crate::types::{ClientCommand, ServerMessage};

/// Decodes a trimmed record into a server message.
///
/// An unrecognized or missing `type`, or a recognized type whose fields
/// do not fit, decodes to [`ServerMessage::Unknown`] — only input that is
/// not a JSON object at all is an error, and even that is recoverable by
/// the caller (log and keep reading).
///
/// # Errors
///
/// [`ProtocolError::MalformedMessage`] if the record is not well-formed
/// JSON; [`ProtocolError::NotAnObject`] if its top-level value is not an
/// object.
pub fn decode_record(record: &[u8]) -> ProtocolResult<ServerMessage> {
    let value: Value = serde_json::from_slice(record)?;
    if !value.is_object() {
        return Err(ProtocolError::NotAnObject);
    }
    Ok(serde_json::from_value(value).unwrap_or(ServerMessage::Unknown))
}

/// Encodes a command as one compact JSON record with a trailing newline.
///
/// String fields are JSON-escaped, so the payload can never contain a raw
/// newline — the delimiter at the end is the only one in the record.
///
/// # Errors
///
/// [`ProtocolError::OversizedRecord`] if the encoded record would exceed
/// [`MAX_RECORD_SIZE`].
pub fn encode_command(command: &ClientCommand) -> ProtocolResult<Vec<u8>> {
    let mut record = serde_json::to_vec(command)?;
    if record.len() + 1 > MAX_RECORD_SIZE {
        return Err(ProtocolError::OversizedRecord {
            size: record.len() + 1,
            max: MAX_RECORD_SIZE,
        });
    }
    record.push(b'\n');
    Ok(record)
}

//! Wire framing and message types for the wirechat protocol.
//!
//! # Protocol Overview
//!
//! The server speaks newline-delimited JSON over a plain TCP stream:
//! every application message is exactly one UTF-8 JSON object followed by
//! `\n`. There is no other framing — no length prefix, no compression.
//! A `type` field inside each object selects its meaning.
//!
//! ```text
//! {"type":"assign_id","id":7}\n
//! {"type":"client_list","clients":[{"id":3,"name":"Bob","status":2}]}\n
//! ```
//!
//! Records larger than [`MAX_RECORD_SIZE`] bytes (newline included) are
//! dropped by the framer without desynchronizing the stream.
//!
//! # Example
//!
//! ```rust
//! use wirechat_protocol::{ClientCommand, ServerMessage, decode_record, encode_command};
//!
//! let bytes = encode_command(&ClientCommand::message("hi", 5)).unwrap();
//! assert_eq!(bytes, b"{\"type\":\"message\",\"content\":\"hi\",\"recipient\":5}\n");
//!
//! let message = decode_record(br#"{"type":"assign_id","id":7}"#).unwrap();
//! assert_eq!(message, ServerMessage::AssignId { id: 7 });
//! ```

mod codec;
mod error;
mod framing;
mod types;

pub use codec::{decode_record, encode_command};
pub use error::{ProtocolError, ProtocolResult};
pub use framing::LineFramer;
pub use types::{ACK_OK, ClientCommand, ServerMessage};

/// Maximum record size in bytes, newline included. Larger records are
/// dropped by the framer and rejected by the encoder.
pub const MAX_RECORD_SIZE: usize = 65536;

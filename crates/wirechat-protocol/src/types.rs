//! Inbound and outbound message types for the chat protocol.

use serde::{Deserialize, Serialize};
use wirechat_core::Peer;

/// Acknowledgement value the server uses for a successful `init`/`login`.
pub const ACK_OK: &str = "ok";

/// A message received from the server.
///
/// The `type` field of the wire object selects the variant. Every field
/// carries `#[serde(default)]` so a recognized type with absent fields
/// decodes to per-field zero values rather than failing — one sloppy
/// message must never stall the stream. An unrecognized `type` decodes
/// to [`ServerMessage::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The server assigned this connection its identity.
    AssignId {
        #[serde(default)]
        id: i64,
    },

    /// Acknowledgement of the `init` handshake.
    InitAck {
        #[serde(default)]
        status: String,
    },

    /// Acknowledgement of a `login` attempt.
    LoginAck {
        #[serde(default)]
        status: String,
        /// Failure reason; empty on success.
        #[serde(default)]
        reason: String,
    },

    /// A direct message from another peer.
    Message {
        #[serde(default)]
        sender_id: i64,
        #[serde(default)]
        sender: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        recipient: i64,
    },

    /// A peer is composing a message.
    IsTyping {
        #[serde(default)]
        sender: String,
    },

    /// A peer changed their display name.
    SetName {
        #[serde(default)]
        name: String,
    },

    /// A peer changed their status. Carries the raw wire code.
    SetStatus {
        #[serde(default)]
        status: i64,
    },

    /// Full roster of connected peers, in the order the server sent them.
    ClientList {
        #[serde(default)]
        clients: Vec<Peer>,
    },

    /// Any `type` this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// A command sent to the server.
///
/// Each variant serializes to a flat JSON object with a `type` field,
/// matching the wire format the server expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Handshake sent immediately after connecting.
    Init { os: String, version: String },

    /// Authentication attempt.
    Login { username: String, password: String },

    /// Direct message to a peer.
    Message { content: String, recipient: i64 },

    /// Change this client's display name.
    SetName { name: String },

    /// Change this client's status (raw wire code).
    SetStatus { status: i64 },

    /// Ephemeral typing notice for a peer.
    IsTyping { recipient: i64 },
}

impl ClientCommand {
    /// Creates an `init` handshake command.
    pub fn init(os: impl Into<String>, version: impl Into<String>) -> Self {
        Self::Init {
            os: os.into(),
            version: version.into(),
        }
    }

    /// Creates a `login` command.
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a direct message command.
    pub fn message(content: impl Into<String>, recipient: i64) -> Self {
        Self::Message {
            content: content.into(),
            recipient,
        }
    }

    /// Creates a `set_name` command.
    pub fn set_name(name: impl Into<String>) -> Self {
        Self::SetName { name: name.into() }
    }

    /// Creates a `set_status` command.
    pub fn set_status(status: i64) -> Self {
        Self::SetStatus { status }
    }

    /// Creates an `is_typing` notice.
    pub fn is_typing(recipient: i64) -> Self {
        Self::IsTyping { recipient }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_id_decodes() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"assign_id","id":7}"#).unwrap();
        assert_eq!(message, ServerMessage::AssignId { id: 7 });
    }

    #[test]
    fn assign_id_missing_id_defaults_to_zero() {
        let message: ServerMessage = serde_json::from_str(r#"{"type":"assign_id"}"#).unwrap();
        assert_eq!(message, ServerMessage::AssignId { id: 0 });
    }

    #[test]
    fn init_ack_decodes() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"init_ack","status":"ok"}"#).unwrap();
        assert_eq!(
            message,
            ServerMessage::InitAck {
                status: ACK_OK.to_string()
            }
        );
    }

    #[test]
    fn login_ack_failure_carries_reason() {
        let json = r#"{"type":"login_ack","status":"error","reason":"bad password"}"#;
        let message: ServerMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            message,
            ServerMessage::LoginAck {
                status: "error".to_string(),
                reason: "bad password".to_string(),
            }
        );
    }

    #[test]
    fn login_ack_success_reason_defaults_empty() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"login_ack","status":"ok"}"#).unwrap();
        assert_eq!(
            message,
            ServerMessage::LoginAck {
                status: ACK_OK.to_string(),
                reason: String::new(),
            }
        );
    }

    #[test]
    fn direct_message_uses_wire_field_names() {
        let json =
            r#"{"type":"message","sender_id":3,"sender":"Bob","content":"hi","recipient":7}"#;
        let message: ServerMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            message,
            ServerMessage::Message {
                sender_id: 3,
                sender: "Bob".to_string(),
                content: "hi".to_string(),
                recipient: 7,
            }
        );
    }

    #[test]
    fn client_list_preserves_received_order() {
        let json = r#"{"type":"client_list","clients":[
            {"id":3,"name":"Bob","status":2},
            {"id":9,"name":"Amy","status":1}
        ]}"#;
        let message: ServerMessage = serde_json::from_str(json).unwrap();
        let ServerMessage::ClientList { clients } = message else {
            panic!("expected client_list");
        };
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0], Peer::new(3, "Bob", 2));
        assert_eq!(clients[1], Peer::new(9, "Amy", 1));
    }

    #[test]
    fn set_status_keeps_raw_code() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"set_status","status":99}"#).unwrap();
        assert_eq!(message, ServerMessage::SetStatus { status: 99 });
    }

    #[test]
    fn unknown_type_decodes_to_unknown() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"fly_to_moon","speed":9000}"#).unwrap();
        assert_eq!(message, ServerMessage::Unknown);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let message: ServerMessage =
            serde_json::from_str(r#"{"type":"assign_id","id":7,"extra":"noise"}"#).unwrap();
        assert_eq!(message, ServerMessage::AssignId { id: 7 });
    }

    #[test]
    fn command_serde_init() {
        let command = ClientCommand::init("linux", "1.0.0");
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"init","os":"linux","version":"1.0.0"}"#);

        let parsed: ClientCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, command);
    }

    #[test]
    fn command_serde_login() {
        let command = ClientCommand::login("amy", "hunter2");
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(
            json,
            r#"{"type":"login","username":"amy","password":"hunter2"}"#
        );
    }

    #[test]
    fn command_serde_message() {
        let command = ClientCommand::message("hi", 5);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"message","content":"hi","recipient":5}"#);

        let parsed: ClientCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ClientCommand::message("hi", 5));
    }

    #[test]
    fn command_serde_set_name() {
        let command = ClientCommand::set_name("Amy");
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"set_name","name":"Amy"}"#);
    }

    #[test]
    fn command_serde_set_status() {
        let command = ClientCommand::set_status(2);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"set_status","status":2}"#);
    }

    #[test]
    fn command_serde_is_typing() {
        let command = ClientCommand::is_typing(3);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"is_typing","recipient":3}"#);
    }
}

//! Typed events surfaced to the presentation layer.

use wirechat_core::Peer;

/// A protocol event produced by the session dispatcher.
///
/// The presentation layer consumes these by pattern matching; there is no
/// subscription mechanism and no event is delivered more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The server assigned this connection its identity.
    IdentityAssigned { id: i64 },

    /// Outcome of a login attempt. `reason` is empty on success.
    LoginResult { ok: bool, reason: String },

    /// A direct message from a peer.
    DirectMessage {
        sender_id: i64,
        sender_name: String,
        content: String,
        recipient_id: i64,
    },

    /// A peer is composing a message. Ephemeral, not persisted.
    TypingNotice { from: String },

    /// A peer changed their display name.
    NameChanged { name: String },

    /// A peer changed their status (raw wire code).
    StatusChanged { status: i64 },

    /// Fresh roster, in the order the server sent it. Sorting and
    /// self-exclusion are applied by `Roster::from_update` on the
    /// consumer side.
    RosterUpdated { peers: Vec<Peer> },
}

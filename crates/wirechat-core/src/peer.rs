//! Peer descriptors and presence status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presence status of a peer.
///
/// The wire protocol carries statuses as plain integers; [`Status::from_code`]
/// is the display-side mapping and coerces anything it does not recognize to
/// [`Status::Offline`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Online and accepting messages.
    Available,
    /// Online but away from the keyboard.
    Away,
    /// Online but does not want to be disturbed.
    Busy,
    /// Not connected.
    #[default]
    Offline,
}

impl Status {
    /// Maps a wire status code to a status, coercing unknown codes to
    /// `Offline`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Available,
            2 => Self::Away,
            3 => Self::Busy,
            _ => Self::Offline,
        }
    }

    /// Returns the integer this status is represented by on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Available => 1,
            Self::Away => 2,
            Self::Busy => 3,
            Self::Offline => 4,
        }
    }

    /// Returns the display label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Away => "Away",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A peer as described in a `client_list` update.
///
/// The `status` field is the raw wire integer, passed through uncoerced;
/// display code goes through [`Status::from_code`] when it needs the enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Server-assigned peer identity.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Raw wire status code.
    #[serde(default)]
    pub status: i64,
}

impl Peer {
    /// Creates a peer descriptor.
    pub fn new(id: i64, name: impl Into<String>, status: i64) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Returns the status coerced for display.
    pub fn display_status(&self) -> Status {
        Status::from_code(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_known_codes() {
        assert_eq!(Status::from_code(1), Status::Available);
        assert_eq!(Status::from_code(2), Status::Away);
        assert_eq!(Status::from_code(3), Status::Busy);
        assert_eq!(Status::from_code(4), Status::Offline);
    }

    #[test]
    fn status_unknown_code_coerces_to_offline() {
        assert_eq!(Status::from_code(0), Status::Offline);
        assert_eq!(Status::from_code(99), Status::Offline);
        assert_eq!(Status::from_code(-1), Status::Offline);
    }

    #[test]
    fn status_code_round_trips() {
        for status in [
            Status::Available,
            Status::Away,
            Status::Busy,
            Status::Offline,
        ] {
            assert_eq!(Status::from_code(status.code()), status);
        }
    }

    #[test]
    fn status_display_uses_label() {
        assert_eq!(Status::Available.to_string(), "Available");
        assert_eq!(Status::Offline.to_string(), "Offline");
    }

    #[test]
    fn peer_deserializes_from_wire_shape() {
        let peer: Peer =
            serde_json::from_str(r#"{"id":3,"name":"Bob","status":2}"#).unwrap();
        assert_eq!(peer, Peer::new(3, "Bob", 2));
    }

    #[test]
    fn peer_missing_fields_default() {
        let peer: Peer = serde_json::from_str(r#"{"id":5}"#).unwrap();
        assert_eq!(peer.id, 5);
        assert_eq!(peer.name, "");
        assert_eq!(peer.status, 0);
    }

    #[test]
    fn peer_keeps_raw_status_but_displays_coerced() {
        let peer = Peer::new(1, "Amy", 42);
        assert_eq!(peer.status, 42);
        assert_eq!(peer.display_status(), Status::Offline);
    }
}

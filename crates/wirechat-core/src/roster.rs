//! Immutable roster snapshots.
//!
//! Each `client_list` update from the server replaces the previous roster
//! wholesale. Consumers only ever see a complete snapshot, never a roster
//! with a partially applied update.

use crate::peer::{Peer, Status};

/// A read-only snapshot of the known peers, excluding the local identity.
///
/// Built from the peer list of a roster update; peers are sorted by id
/// ascending so the ordering is stable regardless of the order the server
/// sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    peers: Vec<Peer>,
}

impl Roster {
    /// Builds a snapshot from a roster update.
    ///
    /// `self_id` identifies the local connection; that peer is excluded so
    /// the roster only lists the "others". Pass `None` before an identity
    /// has been assigned.
    pub fn from_update(mut peers: Vec<Peer>, self_id: Option<i64>) -> Self {
        if let Some(id) = self_id {
            peers.retain(|peer| peer.id != id);
        }
        peers.sort_by_key(|peer| peer.id);
        Self { peers }
    }

    /// Returns the peers in id order.
    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    /// Looks up a peer by id.
    pub fn get(&self, id: i64) -> Option<&Peer> {
        self.peers.iter().find(|peer| peer.id == id)
    }

    /// Returns the display name of a peer, if known.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.get(id).map(|peer| peer.name.as_str())
    }

    /// Returns the raw status code of a peer, defaulting to offline for
    /// peers no longer in the roster.
    pub fn status_of(&self, id: i64) -> i64 {
        self.get(id)
            .map_or(Status::Offline.code(), |peer| peer.status)
    }

    /// Number of peers in the snapshot.
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update() -> Vec<Peer> {
        vec![
            Peer::new(9, "Amy", 1),
            Peer::new(3, "Bob", 2),
            Peer::new(7, "Eve", 3),
        ]
    }

    #[test]
    fn sorts_by_id_ascending() {
        let roster = Roster::from_update(update(), None);
        let ids: Vec<i64> = roster.peers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 7, 9]);
    }

    #[test]
    fn excludes_self() {
        let roster = Roster::from_update(update(), Some(7));
        assert_eq!(roster.len(), 2);
        assert!(roster.get(7).is_none());
        assert!(roster.get(3).is_some());
    }

    #[test]
    fn without_identity_keeps_everyone() {
        let roster = Roster::from_update(update(), None);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn lookup_helpers() {
        let roster = Roster::from_update(update(), Some(9));
        assert_eq!(roster.name_of(3), Some("Bob"));
        assert_eq!(roster.status_of(3), 2);
        assert_eq!(roster.name_of(42), None);
    }

    #[test]
    fn unknown_peer_status_defaults_to_offline() {
        let roster = Roster::from_update(update(), None);
        assert_eq!(roster.status_of(42), Status::Offline.code());
    }

    #[test]
    fn new_update_replaces_snapshot() {
        let first = Roster::from_update(update(), None);
        let second = Roster::from_update(vec![Peer::new(3, "Bob", 4)], None);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 1);
        assert_eq!(second.status_of(3), 4);
        // the first snapshot is untouched
        assert_eq!(first.status_of(3), 2);
    }

    #[test]
    fn empty_update_yields_empty_roster() {
        let roster = Roster::from_update(Vec::new(), Some(1));
        assert!(roster.is_empty());
    }
}

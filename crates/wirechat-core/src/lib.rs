//! Core types shared across the wirechat crates: peer descriptors,
//! presence status, and roster snapshots.

pub mod peer;
pub mod roster;
pub mod tracing;

pub use peer::{Peer, Status};
pub use roster::Roster;
pub use tracing::{TracingConfig, TracingError, init_tracing};

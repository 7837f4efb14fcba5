//! Chat client: session dispatch, TCP transport, terminal front-end.
//!
//! This crate provides the `wirechat` command-line client and the
//! reusable [`Session`]/[`Connection`] pair it is built on.

pub mod cli;
pub mod connection;
pub mod error;
pub mod event;
pub mod session;

pub use connection::Connection;
pub use error::{ClientError, ClientResult};
pub use event::Event;
pub use session::{ClientConfig, Credentials, Phase, Session, SessionOutput};

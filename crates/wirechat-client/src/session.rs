//! Per-connection session state and protocol dispatch.
//!
//! A [`Session`] owns the line framer, the assigned identity, and the
//! dispatch logic mapping decoded server messages to [`Event`]s. It is
//! synchronous and single-threaded: the transport feeds it byte chunks
//! from whatever context its I/O notifications arrive in, and every
//! complete record is dispatched before [`Session::receive`] returns.
//!
//! Per-record failures (malformed JSON, non-object top level, unknown
//! `type`) are logged and skipped; nothing a peer sends can tear the
//! session down.

use tracing::{debug, warn};

use wirechat_protocol::{ACK_OK, ClientCommand, LineFramer, ServerMessage, decode_record};

use crate::event::Event;

/// Credentials for the automatic login sent after a successful `init`
/// handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Caller-supplied session configuration.
///
/// Host and port are not part of this: the connection target is a
/// parameter of the transport, not session state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Operating system reported in the `init` handshake.
    pub os: String,
    /// Client version reported in the `init` handshake.
    pub version: String,
    /// Credentials for auto-login after `init_ack`. When `None`, the
    /// caller logs in explicitly (or not at all).
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            credentials: None,
        }
    }
}

impl ClientConfig {
    /// Sets the auto-login credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Observed lifecycle phase of the session.
///
/// Tracking is observational only: the dispatcher accepts any message in
/// any phase and enforces no ordering beyond remembering the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Transport connected, `init` sent, no identity yet.
    Connected,
    /// `assign_id` received.
    Identified,
    /// `login_ack` with an ok status received.
    Authenticated,
}

/// Events and outbound commands produced by one `receive` call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionOutput {
    /// Events for the presentation layer, in wire order.
    pub events: Vec<Event>,
    /// Commands the session wants written to the transport.
    pub outbound: Vec<ClientCommand>,
}

/// Protocol state for one connection.
#[derive(Debug)]
pub struct Session {
    framer: LineFramer,
    config: ClientConfig,
    identity: Option<i64>,
    phase: Phase,
}

impl Session {
    /// Creates a session for a freshly connected transport.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            framer: LineFramer::new(),
            config,
            identity: None,
            phase: Phase::Connected,
        }
    }

    /// The identity assigned by the server, once an `assign_id` message
    /// has arrived. A later `assign_id` overwrites it.
    pub fn identity(&self) -> Option<i64> {
        self.identity
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The `init` handshake command for this session.
    pub fn init_command(&self) -> ClientCommand {
        ClientCommand::init(&self.config.os, &self.config.version)
    }

    /// Feeds a chunk of bytes from the transport and dispatches every
    /// complete record it yields.
    pub fn receive(&mut self, bytes: &[u8]) -> SessionOutput {
        self.framer.feed(bytes);
        let mut output = SessionOutput::default();
        while let Some(record) = self.framer.next_record() {
            match decode_record(&record) {
                Ok(ServerMessage::Unknown) => {
                    debug!(
                        record = %String::from_utf8_lossy(&record),
                        "ignoring message with unknown type"
                    );
                }
                Ok(message) => self.dispatch(message, &mut output),
                Err(err) => {
                    warn!(%err, "dropping undecodable record");
                }
            }
        }
        output
    }

    fn dispatch(&mut self, message: ServerMessage, output: &mut SessionOutput) {
        match message {
            ServerMessage::AssignId { id } => {
                debug!(id, "identity assigned by server");
                self.identity = Some(id);
                if self.phase == Phase::Connected {
                    self.phase = Phase::Identified;
                }
                output.events.push(Event::IdentityAssigned { id });
            }
            ServerMessage::InitAck { status } => {
                if status == ACK_OK {
                    match &self.config.credentials {
                        Some(credentials) => {
                            debug!("init acknowledged, sending login");
                            output.outbound.push(ClientCommand::login(
                                &credentials.username,
                                &credentials.password,
                            ));
                        }
                        None => debug!("init acknowledged, no credentials configured"),
                    }
                } else {
                    warn!(%status, "init rejected by server");
                }
            }
            ServerMessage::LoginAck { status, reason } => {
                let ok = status == ACK_OK;
                if ok {
                    debug!("login successful");
                    self.phase = Phase::Authenticated;
                } else {
                    warn!(%reason, "login failed");
                }
                output.events.push(Event::LoginResult { ok, reason });
            }
            ServerMessage::Message {
                sender_id,
                sender,
                content,
                recipient,
            } => {
                output.events.push(Event::DirectMessage {
                    sender_id,
                    sender_name: sender,
                    content,
                    recipient_id: recipient,
                });
            }
            ServerMessage::IsTyping { sender } => {
                output.events.push(Event::TypingNotice { from: sender });
            }
            ServerMessage::SetName { name } => {
                output.events.push(Event::NameChanged { name });
            }
            ServerMessage::SetStatus { status } => {
                output.events.push(Event::StatusChanged { status });
            }
            ServerMessage::ClientList { clients } => {
                output.events.push(Event::RosterUpdated { peers: clients });
            }
            // Handled in `receive` before dispatch.
            ServerMessage::Unknown => {}
        }
    }
}

//! TCP transport adapter.
//!
//! Owns the socket lifecycle: connect, write commands, read chunks and
//! feed them to the [`Session`]. The connection performs no automatic
//! retry or reconnection — a transport failure is terminal, reported to
//! the caller, and a new connection starts a new session with a new
//! identity.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use wirechat_core::Status;
use wirechat_protocol::{ClientCommand, encode_command};

use crate::error::{ClientError, ClientResult};
use crate::event::Event;
use crate::session::{ClientConfig, Phase, Session};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// A live connection to a chat server.
pub struct Connection {
    stream: TcpStream,
    session: Session,
}

impl Connection {
    /// Connects to `host:port` and sends the `init` handshake.
    pub async fn connect(host: &str, port: u16, config: ClientConfig) -> ClientResult<Self> {
        let addr = format!("{}:{}", host, port);
        debug!(%addr, "connecting to server");

        let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr))
            .await
            .map_err(|_| {
                ClientError::Connection(format!(
                    "connection to {} timed out after {}s",
                    addr,
                    CONNECT_TIMEOUT.as_secs()
                ))
            })?
            .map_err(|e| ClientError::Connection(format!("failed to connect to {}: {}", addr, e)))?;

        let mut connection = Self {
            stream,
            session: Session::new(config),
        };
        let init = connection.session.init_command();
        connection.send(&init).await?;
        Ok(connection)
    }

    /// The session's assigned identity, if any.
    pub fn identity(&self) -> Option<i64> {
        self.session.identity()
    }

    /// The session's lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Reads the next chunk from the server, dispatches it, and writes
    /// any commands the session produced (e.g. auto-login).
    ///
    /// Returns `Ok(None)` when the server closed the connection cleanly;
    /// a chunk that completes no record returns an empty event list.
    pub async fn poll_events(&mut self) -> ClientResult<Option<Vec<Event>>> {
        let mut chunk = [0u8; 4096];
        let n = self.stream.read(&mut chunk).await.map_err(ClientError::Io)?;
        if n == 0 {
            debug!("server closed the connection");
            return Ok(None);
        }

        let output = self.session.receive(&chunk[..n]);
        for command in &output.outbound {
            self.send(command).await?;
        }
        Ok(Some(output.events))
    }

    /// Encodes a command and writes it with a timeout.
    pub async fn send(&mut self, command: &ClientCommand) -> ClientResult<()> {
        let record = encode_command(command)?;
        tokio::time::timeout(WRITE_TIMEOUT, async {
            self.stream.write_all(&record).await?;
            self.stream.flush().await
        })
        .await
        .map_err(|_| ClientError::Timeout("sending command".into()))?
        .map_err(ClientError::Io)?;
        Ok(())
    }

    /// Sends a direct message to a peer.
    pub async fn send_message(
        &mut self,
        content: impl Into<String>,
        recipient: i64,
    ) -> ClientResult<()> {
        self.send(&ClientCommand::message(content, recipient)).await
    }

    /// Logs in explicitly (for callers without auto-login credentials).
    pub async fn login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ClientResult<()> {
        self.send(&ClientCommand::login(username, password)).await
    }

    /// Changes this client's display name.
    pub async fn set_name(&mut self, name: impl Into<String>) -> ClientResult<()> {
        self.send(&ClientCommand::set_name(name)).await
    }

    /// Changes this client's status.
    pub async fn set_status(&mut self, status: Status) -> ClientResult<()> {
        self.send(&ClientCommand::set_status(status.code())).await
    }

    /// Sends an ephemeral typing notice to a peer.
    pub async fn send_typing(&mut self, recipient: i64) -> ClientResult<()> {
        self.send(&ClientCommand::is_typing(recipient)).await
    }
}

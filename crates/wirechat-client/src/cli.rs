//! Command-line interface and the interactive chat loop.
//!
//! A thin line-mode front-end over [`Connection`]: slash commands go out,
//! events get printed. All protocol behavior lives in the library; this
//! module only renders.

use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use wirechat_core::{Roster, Status};

use crate::connection::Connection;
use crate::error::ClientResult;
use crate::event::Event;
use crate::session::{ClientConfig, Credentials};

/// wirechat - a terminal chat client
#[derive(Debug, Parser)]
#[command(name = "wirechat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, default_value_t = 4500)]
    pub port: u16,

    /// Username for automatic login after the handshake
    #[arg(long, env = "WIRECHAT_USERNAME")]
    pub username: Option<String>,

    /// Password for automatic login
    #[arg(long, env = "WIRECHAT_PASSWORD")]
    pub password: Option<String>,

    /// Display name to announce after connecting
    #[arg(long)]
    pub name: Option<String>,

    /// Initial status to announce after connecting
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

/// Status values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Available,
    Away,
    Busy,
    Offline,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => Status::Available,
            StatusArg::Away => Status::Away,
            StatusArg::Busy => Status::Busy,
            StatusArg::Offline => Status::Offline,
        }
    }
}

/// A parsed interactive slash command.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// `/msg <id> <text>` — direct message to a peer.
    Message { recipient: i64, text: String },
    /// `/name <name>` — change the display name.
    Name(String),
    /// `/status <status>` — change the announced status.
    Status(Status),
    /// `/typing <id>` — typing notice to a peer.
    Typing(i64),
    /// `/who` — print the current roster.
    Who,
    /// `/quit` — disconnect and exit.
    Quit,
}

/// Parses one line of interactive input.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/msg" => {
            let (id, text) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: /msg <id> <text>")?;
            let recipient = id.parse().map_err(|_| "usage: /msg <id> <text>")?;
            Ok(Input::Message {
                recipient,
                text: text.trim().to_string(),
            })
        }
        "/name" if !rest.is_empty() => Ok(Input::Name(rest.to_string())),
        "/name" => Err("usage: /name <name>".to_string()),
        "/status" => match rest.to_ascii_lowercase().as_str() {
            "available" => Ok(Input::Status(Status::Available)),
            "away" => Ok(Input::Status(Status::Away)),
            "busy" => Ok(Input::Status(Status::Busy)),
            "offline" => Ok(Input::Status(Status::Offline)),
            _ => Err("usage: /status <available|away|busy|offline>".to_string()),
        },
        "/typing" => rest
            .parse()
            .map(Input::Typing)
            .map_err(|_| "usage: /typing <id>".to_string()),
        "/who" => Ok(Input::Who),
        "/quit" => Ok(Input::Quit),
        _ => Err("commands: /msg /name /status /typing /who /quit".to_string()),
    }
}

/// Connects and runs the interactive loop until `/quit` or disconnect.
pub async fn run(cli: Cli) -> ClientResult<()> {
    let mut config = ClientConfig::default();
    if let (Some(username), Some(password)) = (&cli.username, &cli.password) {
        config.credentials = Some(Credentials::new(username, password));
    }

    let mut connection = Connection::connect(&cli.host, cli.port, config).await?;
    println!("connected to {}:{}", cli.host, cli.port);

    if let Some(ref name) = cli.name {
        connection.set_name(name).await?;
    }
    if let Some(status) = cli.status {
        connection.set_status(status.into()).await?;
    }

    let mut roster = Roster::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Handlers run outside the select so the poll_events borrow has
    // ended by the time the connection is used again.
    enum Turn {
        Polled(Option<Vec<Event>>),
        Line(Option<String>),
    }

    loop {
        let turn = tokio::select! {
            polled = connection.poll_events() => Turn::Polled(polled?),
            line = lines.next_line() => Turn::Line(line?),
        };

        match turn {
            Turn::Polled(None) => {
                println!("disconnected from server");
                break;
            }
            Turn::Polled(Some(events)) => {
                let identity = connection.identity();
                for event in events {
                    render_event(event, &mut roster, identity);
                }
            }
            Turn::Line(None) => break,
            Turn::Line(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_input(&line) {
                    Ok(Input::Quit) => break,
                    Ok(input) => apply_input(&mut connection, &roster, input).await?,
                    Err(usage) => println!("{}", usage),
                }
            }
        }
    }
    Ok(())
}

async fn apply_input(
    connection: &mut Connection,
    roster: &Roster,
    input: Input,
) -> ClientResult<()> {
    match input {
        Input::Message { recipient, text } => connection.send_message(text, recipient).await,
        Input::Name(name) => connection.set_name(name).await,
        Input::Status(status) => connection.set_status(status).await,
        Input::Typing(recipient) => connection.send_typing(recipient).await,
        Input::Who => {
            print_roster(roster);
            Ok(())
        }
        Input::Quit => Ok(()),
    }
}

fn render_event(event: Event, roster: &mut Roster, identity: Option<i64>) {
    match event {
        Event::IdentityAssigned { id } => println!("* your id is {}", id),
        Event::LoginResult { ok: true, .. } => println!("* logged in"),
        Event::LoginResult { ok: false, reason } => println!("* login failed: {}", reason),
        Event::DirectMessage {
            sender_id,
            sender_name,
            content,
            ..
        } => println!("<{} ({})> {}", sender_name, sender_id, content),
        Event::TypingNotice { from } => println!("* {} is typing...", from),
        Event::NameChanged { name } => println!("* peer is now known as {}", name),
        Event::StatusChanged { status } => {
            println!("* peer is now {}", Status::from_code(status))
        }
        Event::RosterUpdated { peers } => {
            *roster = Roster::from_update(peers, identity);
            print_roster(roster);
        }
    }
}

fn print_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("* nobody else is online");
        return;
    }
    println!("* online:");
    for peer in roster.peers() {
        println!("    {} ({}) [{}]", peer.name, peer.id, peer.display_status());
    }
}

//! Outbound commands
//!
//! Every command serializes to exactly one CRLF-terminated line of at most
//! [`MAX_LINE_BYTES`] bytes.

use hook_core::ChannelName;
use std::fmt;

/// Protocol line limit, including the trailing CRLF
pub const MAX_LINE_BYTES: usize = 512;

/// A single line of text bound for a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel: ChannelName,
    pub text: String,
}

impl OutboundMessage {
    pub fn new(channel: ChannelName, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
        }
    }
}

/// Commands the relay sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A literal line, e.g. from the initial commands file
    Raw(String),
    /// `JOIN :#<channel>`
    Join(ChannelName),
    /// `PRIVMSG #<channel> :<text>`
    Privmsg(OutboundMessage),
    /// `PONG <params>`, echoing the parameters of a `PING`
    Pong(String),
    /// `QUIT`
    Quit,
}

impl Command {
    /// Command verb, for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Raw(_) => "RAW",
            Self::Join(_) => "JOIN",
            Self::Privmsg(_) => "PRIVMSG",
            Self::Pong(_) => "PONG",
            Self::Quit => "QUIT",
        }
    }

    /// The line without its terminator, sanitized and bounded
    pub fn to_line(&self) -> String {
        let mut line = match self {
            Self::Raw(raw) => raw.clone(),
            Self::Join(channel) => format!("JOIN :{channel}"),
            Self::Privmsg(msg) => format!("PRIVMSG {} :{}", msg.channel, msg.text),
            Self::Pong(params) if params.is_empty() => "PONG".to_string(),
            Self::Pong(params) => format!("PONG {params}"),
            Self::Quit => "QUIT".to_string(),
        };

        if line.contains(['\r', '\n']) {
            line = line.replace(['\r', '\n'], " ");
        }
        truncate_at_char_boundary(&mut line, MAX_LINE_BYTES - 2);
        line
    }

    /// The full wire form, CRLF included
    pub fn to_wire(&self) -> String {
        let mut line = self.to_line();
        line.push_str("\r\n");
        line
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

impl From<OutboundMessage> for Command {
    fn from(msg: OutboundMessage) -> Self {
        Self::Privmsg(msg)
    }
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

//! Inbound server lines

/// The server lines the transport reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMessage<'a> {
    /// Keepalive probe; `params` must be echoed back in a `PONG`
    Ping { params: &'a str },
    /// The server is about to close the link
    Error { reason: &'a str },
    /// Anything else
    Other { command: &'a str },
}

impl<'a> ServerMessage<'a> {
    /// Parse one line, with or without its terminator
    ///
    /// Returns `None` for blank lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut rest = line.trim_end_matches(['\r', '\n']);

        // Skip the optional `:source` prefix
        if let Some(prefixed) = rest.strip_prefix(':') {
            rest = prefixed.split_once(' ').map_or("", |(_, tail)| tail);
        }
        let rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let (command, params) = rest.split_once(' ').unwrap_or((rest, ""));
        let message = if command.eq_ignore_ascii_case("PING") {
            Self::Ping { params }
        } else if command.eq_ignore_ascii_case("ERROR") {
            Self::Error {
                reason: params.strip_prefix(':').unwrap_or(params),
            }
        } else {
            Self::Other { command }
        };

        Some(message)
    }
}

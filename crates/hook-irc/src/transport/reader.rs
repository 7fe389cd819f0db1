//! Reader task
//!
//! Consumes server lines until the stream ends. Keepalive probes are
//! answered through the urgent lane, everything else is only logged.

use crate::connection::ConnectionStatus;
use crate::protocol::{Command, ServerMessage};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::sync::mpsc;

/// Longest server line accepted; longer lines are dropped whole
const MAX_INBOUND_LINE: usize = 4096;

pub(super) async fn run<R>(
    source: R,
    urgent: mpsc::UnboundedSender<Command>,
    status: ConnectionStatus,
) where
    R: AsyncRead + Unpin,
{
    let mut source = BufReader::new(source);
    let mut buf = Vec::with_capacity(512);
    // Inside the tail of an oversized line
    let mut skipping = false;

    loop {
        buf.clear();
        let limit = MAX_INBOUND_LINE as u64;
        match (&mut source).take(limit).read_until(b'\n', &mut buf).await {
            Ok(0) => {
                tracing::info!("Server closed the connection");
                break;
            }
            Ok(_) => {
                let complete = buf.last() == Some(&b'\n');
                if skipping || (!complete && buf.len() >= MAX_INBOUND_LINE) {
                    if !skipping {
                        tracing::warn!(limit = MAX_INBOUND_LINE, "Dropping oversized server line");
                    }
                    skipping = !complete;
                    continue;
                }
                let line = String::from_utf8_lossy(&buf);
                handle_line(line.trim_end_matches(['\r', '\n']), &urgent);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Read failed");
                break;
            }
        }
    }

    if status.mark_disconnected() {
        tracing::info!("Disconnected");
    }
}

fn handle_line(line: &str, urgent: &mpsc::UnboundedSender<Command>) {
    tracing::debug!(line, "Received");

    match ServerMessage::parse(line) {
        Some(ServerMessage::Ping { params }) => {
            if urgent.send(Command::Pong(params.to_string())).is_err() {
                tracing::debug!("Writer gone, PING left unanswered");
            }
        }
        Some(ServerMessage::Error { reason }) => {
            tracing::warn!(reason, "Server reported an error");
        }
        Some(ServerMessage::Other { .. }) | None => {}
    }
}

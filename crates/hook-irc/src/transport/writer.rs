//! Writer task
//!
//! The only code that writes to the stream. Paced commands leave in FIFO
//! order at least `pacing` apart; urgent commands go out as soon as they
//! arrive.

use super::TransportConfig;
use crate::error::TransportError;
use crate::protocol::Command;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, timeout, Instant};

pub(super) struct Writer<W> {
    sink: W,
    write_timeout: Duration,
    pacing: Duration,
}

impl<W: AsyncWrite + Unpin> Writer<W> {
    pub(super) fn new(sink: W, config: &TransportConfig) -> Self {
        Self {
            sink,
            write_timeout: config.write_timeout,
            pacing: config.pacing,
        }
    }

    /// Drain both lanes until every paced producer is gone
    pub(super) async fn run(
        mut self,
        mut queue: mpsc::Receiver<Command>,
        mut urgent: mpsc::UnboundedReceiver<Command>,
    ) {
        let mut next_paced = Instant::now();

        loop {
            tokio::select! {
                biased;

                Some(command) = urgent.recv() => {
                    self.send(&command).await;
                }
                command = paced(&mut queue, next_paced) => {
                    let Some(command) = command else { break };
                    self.send(&command).await;
                    next_paced = Instant::now() + self.pacing;
                }
            }
        }

        let _ = self.sink.shutdown().await;
        tracing::debug!("Writer task finished");
    }

    /// Write one command; failures are logged and the command is dropped
    async fn send(&mut self, command: &Command) {
        match self.write(command).await {
            Ok(()) if matches!(command, Command::Pong(_)) => {
                tracing::trace!(command = %command, "Keepalive reply sent");
            }
            Ok(()) => tracing::debug!(command = %command, "Sent"),
            Err(e @ TransportError::WriteTimeout(_)) => {
                tracing::warn!(command = command.name(), error = %e, "Write timed out, message dropped");
            }
            Err(e) => {
                tracing::warn!(command = command.name(), error = %e, "Write failed, message dropped");
            }
        }
    }

    async fn write(&mut self, command: &Command) -> Result<(), TransportError> {
        let wire = command.to_wire();
        let sink = &mut self.sink;

        timeout(self.write_timeout, async move {
            sink.write_all(wire.as_bytes()).await?;
            sink.flush().await
        })
        .await
        .map_err(|_| TransportError::WriteTimeout(self.write_timeout))?
        .map_err(TransportError::Write)
    }
}

/// Next paced command, not before `not_before`
async fn paced(queue: &mut mpsc::Receiver<Command>, not_before: Instant) -> Option<Command> {
    sleep_until(not_before).await;
    queue.recv().await
}

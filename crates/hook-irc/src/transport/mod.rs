//! Transport
//!
//! Owns the live stream through two tasks: a reader that answers keepalive
//! probes and raises the disconnect signal, and a single writer that drains
//! the outbound queue with a minimum delay between messages. Producers only
//! ever touch the queue.

mod config;
mod reader;
mod writer;

pub use config::TransportConfig;

use crate::connection::{dial, ConnectionState, ConnectionStatus, DisconnectWatch, ServerAddress};
use crate::error::TransportError;
use crate::protocol::{Command, OutboundMessage};
use hook_core::ChannelName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use writer::Writer;

/// Handle to a running transport
///
/// Cheap to clone; all clones feed the same queue.
#[derive(Debug, Clone)]
pub struct Transport {
    /// Paced, FIFO outbound queue
    queue: mpsc::Sender<Command>,
    /// Lane that bypasses pacing
    urgent: mpsc::UnboundedSender<Command>,
    status: ConnectionStatus,
}

impl Transport {
    /// Connect to the server and start the reader and writer tasks
    pub async fn connect(
        server: &ServerAddress,
        config: TransportConfig,
    ) -> Result<Self, TransportError> {
        tracing::info!(server = %server, tls = config.tls, "Connecting to chat server...");
        let stream = dial(server, config.tls, config.connect_timeout).await?;
        Ok(Self::start(stream, config))
    }

    /// Start the reader and writer tasks on an already established stream
    pub fn start<S>(stream: S, config: TransportConfig) -> Self
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (read_half, write_half) = tokio::io::split(stream);
        let (queue_tx, queue_rx) = mpsc::channel(config.queue_capacity.max(1));
        let (urgent_tx, urgent_rx) = mpsc::unbounded_channel();

        let status = ConnectionStatus::new();
        status.mark_connected();

        tokio::spawn(reader::run(read_half, urgent_tx.clone(), status.clone()));
        tokio::spawn(Writer::new(write_half, &config).run(queue_rx, urgent_rx));

        Self {
            queue: queue_tx,
            urgent: urgent_tx,
            status,
        }
    }

    /// Append a command to the paced queue, waiting while the queue is full
    pub async fn enqueue(&self, command: Command) -> Result<(), TransportError> {
        tracing::trace!(command = command.name(), "Enqueue");
        self.queue
            .send(command)
            .await
            .map_err(|_| TransportError::QueueClosed)
    }

    /// Send a command ahead of the paced queue
    pub fn send_urgent(&self, command: Command) -> Result<(), TransportError> {
        self.urgent
            .send(command)
            .map_err(|_| TransportError::QueueClosed)
    }

    /// Queue a literal protocol line
    pub async fn send_raw(&self, line: impl Into<String>) -> Result<(), TransportError> {
        self.enqueue(Command::Raw(line.into())).await
    }

    /// Queue a `JOIN` for a channel
    pub async fn join(&self, channel: ChannelName) -> Result<(), TransportError> {
        self.enqueue(Command::Join(channel)).await
    }

    /// Queue a channel message
    pub async fn privmsg(&self, message: OutboundMessage) -> Result<(), TransportError> {
        self.enqueue(Command::Privmsg(message)).await
    }

    /// Get the current connection state
    pub fn state(&self) -> ConnectionState {
        self.status.current()
    }

    /// Get an observer of the disconnect signal
    pub fn disconnect_watch(&self) -> DisconnectWatch {
        self.status.watch()
    }
}

//! # hook-irc
//!
//! Long-lived chat-server connection: one reader task answering keepalive
//! probes, one writer task draining a paced outbound queue, and a disconnect
//! signal observers can wait on.

pub mod connection;
pub mod error;
pub mod protocol;
pub mod transport;

pub use connection::{ConnectionState, ConnectionStatus, DisconnectWatch, ServerAddress};
pub use error::TransportError;
pub use protocol::{Command, OutboundMessage, ServerMessage, MAX_LINE_BYTES};
pub use transport::{Transport, TransportConfig};

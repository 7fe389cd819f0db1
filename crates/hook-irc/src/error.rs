//! Transport error types

use std::time::Duration;
use thiserror::Error;

/// Transport error type
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server address is not `host:port`
    #[error("Invalid server address: {0:?}")]
    InvalidAddress(String),

    /// Host cannot be used as a TLS server name
    #[error("Invalid TLS server name: {0:?}")]
    InvalidServerName(String),

    /// TLS client configuration could not be built
    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),

    /// TCP connect or TLS handshake failed
    #[error("Cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// TCP connect plus TLS handshake exceeded the connect timeout
    #[error("Connecting to {0} timed out")]
    ConnectTimeout(String),

    /// A single write did not finish within the write deadline
    #[error("Write timed out after {0:?}")]
    WriteTimeout(Duration),

    /// A single write failed outright
    #[error("Write failed: {0}")]
    Write(#[source] std::io::Error),

    /// The writer task is gone
    #[error("Outbound queue closed")]
    QueueClosed,
}

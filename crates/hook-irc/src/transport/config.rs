//! Transport configuration

use hook_common::IrcConfig;
use std::time::Duration;

/// Tuning for a transport instance
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Wrap the stream in TLS
    pub tls: bool,
    /// Bound on TCP connect plus TLS handshake
    pub connect_timeout: Duration,
    /// A write that takes longer is abandoned
    pub write_timeout: Duration,
    /// Minimum delay between two paced writes
    pub pacing: Duration,
    /// Outbound queue bound; producers wait when it is full
    pub queue_capacity: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: true,
            connect_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(5),
            pacing: Duration::from_secs(2),
            queue_capacity: 1024,
        }
    }
}

impl From<&IrcConfig> for TransportConfig {
    fn from(config: &IrcConfig) -> Self {
        Self {
            tls: config.tls,
            connect_timeout: config.connect_timeout(),
            write_timeout: config.write_timeout(),
            pacing: config.pacing(),
            queue_capacity: config.queue_capacity,
        }
    }
}

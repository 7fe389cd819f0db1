//! Connection state
//!
//! The state only ever moves forward: `Connecting -> Connected -> Disconnected`.
//! Observers wait on the transition instead of polling it.

use std::sync::Arc;
use tokio::sync::watch;

/// Connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Stream being established
    Connecting,
    /// Stream up, reader and writer running
    Connected,
    /// Stream closed or failed; terminal
    Disconnected,
}

/// Shared handle owning the connection state
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    tx: Arc<watch::Sender<ConnectionState>>,
}

impl ConnectionStatus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Connecting);
        Self { tx: Arc::new(tx) }
    }

    /// Get the current state
    pub fn current(&self) -> ConnectionState {
        *self.tx.borrow()
    }

    /// Move from `Connecting` to `Connected`
    pub fn mark_connected(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == ConnectionState::Connecting {
                *state = ConnectionState::Connected;
                true
            } else {
                false
            }
        })
    }

    /// Move to `Disconnected`
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_disconnected(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == ConnectionState::Disconnected {
                false
            } else {
                *state = ConnectionState::Disconnected;
                true
            }
        })
    }

    /// Get a new observer of the disconnect signal
    pub fn watch(&self) -> DisconnectWatch {
        DisconnectWatch {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer of the disconnect signal
#[derive(Debug, Clone)]
pub struct DisconnectWatch {
    rx: watch::Receiver<ConnectionState>,
}

impl DisconnectWatch {
    /// Resolve once the connection is `Disconnected`
    ///
    /// Resolves immediately if that already happened, or if the status owner is gone.
    pub async fn disconnected(&mut self) {
        let _ = self
            .rx
            .wait_for(|state| *state == ConnectionState::Disconnected)
            .await;
    }

    pub fn is_disconnected(&self) -> bool {
        *self.rx.borrow() == ConnectionState::Disconnected
    }
}

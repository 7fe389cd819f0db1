//! Shutdown coordinator
//!
//! Races an operator quit request against the server hanging up. A quit
//! request sends `QUIT` and then waits a bounded time for the server to
//! close the link.

use hook_irc::{Command, Transport};
use std::fmt;
use std::time::Duration;
use tokio::sync::oneshot;

/// How the relay came to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The server closed the connection on its own
    ServerDisconnected,
    /// Quit was requested and the server hung up in time
    DisconnectedAfterQuit,
    /// Quit was requested and the server did not hang up in time
    QuitTimedOut,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ServerDisconnected => "server disconnected",
            Self::DisconnectedAfterQuit => "disconnected after quit",
            Self::QuitTimedOut => "quit timed out",
        };
        f.write_str(s)
    }
}

pub struct ShutdownCoordinator {
    transport: Transport,
    quit_timeout: Duration,
}

impl ShutdownCoordinator {
    pub fn new(transport: Transport, quit_timeout: Duration) -> Self {
        Self {
            transport,
            quit_timeout,
        }
    }

    /// Resolve once, on whichever happens first
    ///
    /// A dropped `quit_requested` sender is not a quit request; the race then
    /// only ends when the server disconnects.
    pub async fn run(self, quit_requested: oneshot::Receiver<()>) -> ShutdownReason {
        let mut disconnect = self.transport.disconnect_watch();

        let reason = tokio::select! {
            () = disconnect.disconnected() => ShutdownReason::ServerDisconnected,
            Ok(()) = quit_requested => {
                tracing::info!("Quit requested");
                if let Err(e) = self.transport.send_urgent(Command::Quit) {
                    tracing::warn!(error = %e, "Cannot send QUIT");
                }

                let mut after_quit = self.transport.disconnect_watch();
                match tokio::time::timeout(self.quit_timeout, after_quit.disconnected()).await {
                    Ok(()) => ShutdownReason::DisconnectedAfterQuit,
                    Err(_) => ShutdownReason::QuitTimedOut,
                }
            }
        };

        match reason {
            ShutdownReason::QuitTimedOut => {
                tracing::warn!(timeout = ?self.quit_timeout, "Timeout waiting for disconnection, exiting anyway");
            }
            _ => tracing::info!("Disconnected, exiting"),
        }
        reason
    }
}

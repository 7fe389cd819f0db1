//! Connection management
//!
//! Connection state, the disconnect signal, and establishing the stream.

mod address;
mod dial;
mod state;

pub use address::ServerAddress;
pub(crate) use dial::dial;
pub use state::{ConnectionState, ConnectionStatus, DisconnectWatch};

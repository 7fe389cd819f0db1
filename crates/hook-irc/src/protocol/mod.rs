//! Chat protocol wire format
//!
//! Outbound commands and the few inbound server lines the relay reacts to.

mod command;
mod server_message;

pub use command::{Command, OutboundMessage, MAX_LINE_BYTES};
pub use server_message::ServerMessage;

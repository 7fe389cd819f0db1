//! # hook-relay
//!
//! Relays code-hosting webhook deliveries into chat channels: per-language
//! formatters, the dispatcher fanning events out to destinations, the
//! shutdown race, and the webhook listener.

pub mod dispatcher;
pub mod formatter;
pub mod server;
pub mod shutdown;

pub use dispatcher::{DeliveryReport, Dispatcher, OutboundSink};
pub use formatter::{formatter_for, formatters_for, Formatter};
pub use server::{create_app, run, RelayState};
pub use shutdown::{ShutdownCoordinator, ShutdownReason};

//! Value objects - immutable types that describe where and how events are relayed

mod channel_name;
mod destination;
mod language;

pub use channel_name::ChannelName;
pub use destination::Destination;
pub use language::Language;

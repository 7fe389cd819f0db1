//! # hook-core
//!
//! Domain layer containing webhook payload shapes, typed events, the event parser,
//! and the value objects describing relay destinations.
//! This crate has zero dependencies on infrastructure (network, web framework, etc.).

pub mod error;
pub mod events;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use error::DomainError;
pub use events::{
    Commit, CommentAction, CommentRef, EventKind, EventParser, IssueAction, IssueCommented,
    IssueRef, IssuesChanged, ParseOutcome, PullRequestAction, PullRequestChanged, PullRequestRef,
    Push, TypedEvent,
};
pub use value_objects::{ChannelName, Destination, Language};

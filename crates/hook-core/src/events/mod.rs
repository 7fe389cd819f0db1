//! Webhook events
//!
//! Raw payload shapes, the typed events built from them, and the parser that
//! turns a discriminator plus raw bytes into a typed event.

mod event_kind;
mod parser;
mod payloads;
mod typed_event;

pub use event_kind::EventKind;
pub use parser::{EventParser, ParseOutcome};
pub use typed_event::{
    CommentAction, CommentRef, Commit, IssueAction, IssueCommented, IssueRef, IssuesChanged,
    PullRequestAction, PullRequestChanged, PullRequestRef, Push, TypedEvent,
};

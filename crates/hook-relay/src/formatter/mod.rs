//! Formatters
//!
//! One formatter per destination turns typed events into chat lines in the
//! destination's language. Formatters hold no shared state and never fail.

mod chinese;
mod english;
mod registry;
pub mod text;

pub use chinese::ChineseFormatter;
pub use english::EnglishFormatter;
pub use registry::{formatter_for, formatters_for};

use hook_core::{Destination, IssueCommented, IssuesChanged, PullRequestChanged, Push, TypedEvent};

/// Renders events for one destination
///
/// Each method returns the lines to send, in order. An empty list means the
/// destination has nothing to say about the event.
pub trait Formatter: Send + Sync {
    /// The destination this formatter is bound to
    fn destination(&self) -> &Destination;

    fn on_push(&self, event: &Push) -> Vec<String>;

    fn on_issues_changed(&self, event: &IssuesChanged) -> Vec<String>;

    fn on_issue_commented(&self, event: &IssueCommented) -> Vec<String>;

    fn on_pull_request_changed(&self, event: &PullRequestChanged) -> Vec<String>;

    /// Route an event to the matching method
    fn format(&self, event: &TypedEvent) -> Vec<String> {
        match event {
            TypedEvent::Push(e) => self.on_push(e),
            TypedEvent::IssuesChanged(e) => self.on_issues_changed(e),
            TypedEvent::IssueCommented(e) => self.on_issue_commented(e),
            TypedEvent::PullRequestChanged(e) => self.on_pull_request_changed(e),
        }
    }
}

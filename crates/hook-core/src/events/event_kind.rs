//! Webhook event discriminators
//!
//! These are the values of the `X-GitHub-Event` header the relay understands.

use std::fmt;

/// Recognised webhook event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Liveness check sent when a hook is created; produces no event
    Ping,
    /// Commits pushed to a ref
    Push,
    /// Issue opened, closed, edited, ...
    Issues,
    /// Comment on an issue or pull request
    IssueComment,
    /// Pull request opened, closed, reopened, ...
    PullRequest,
}

impl EventKind {
    /// Get the discriminator string for the event kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Push => "push",
            Self::Issues => "issues",
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
        }
    }

    /// Parse an event kind from a discriminator string
    #[must_use]
    pub fn from_discriminator(s: &str) -> Option<Self> {
        match s {
            "ping" => Some(Self::Ping),
            "push" => Some(Self::Push),
            "issues" => Some(Self::Issues),
            "issue_comment" => Some(Self::IssueComment),
            "pull_request" => Some(Self::PullRequest),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
